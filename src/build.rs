// build.rs
fn main() {
    println!("cargo:rerun-if-changed=assets/absence.ico");
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/absence.ico");
        res.compile().unwrap();
    }
}
