// src/cli.rs
use std::{
    error::Error,
    fmt,
    io::{self, Write},
    path::PathBuf,
};

use crate::chart::{ChartAdapter, svg::SvgSurface};
use crate::config::options::AppOptions;
use crate::dataset;
use crate::search::{self, Suggestions};
use crate::series::ChartSeries;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    pub data: Option<PathBuf>,
    pub query: Option<String>,
    pub district: Option<String>,
    pub svg: Option<PathBuf>,
    pub list: bool,
    pub help: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum CliError {
    Usage(String),
    NotFound(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg} (see --help)"),
            CliError::NotFound(name) => write!(f, "No district named {name:?}"),
        }
    }
}

impl Error for CliError {}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_args(std::env::args().skip(1))?;
    let stdout = io::stdout();
    run_with(&params, &mut stdout.lock())
}

/// Execute `params`, writing human output to `out`.
pub fn run_with<W: Write>(params: &Params, out: &mut W) -> Result<(), Box<dyn Error>> {
    if params.help {
        writeln!(out, "{}", include_str!("cli_help.txt"))?;
        return Ok(());
    }
    if params.query.is_none() && params.district.is_none() && !params.list {
        return Err(CliError::Usage(s!("Specify --query, --district or --list")).into());
    }
    if params.svg.is_some() && params.district.is_none() {
        return Err(CliError::Usage(s!("--svg needs --district")).into());
    }

    let opts = options_for(params);
    logf!("CLI: {:?}", params);
    let ds = dataset::load(opts.dataset.path())?;

    if params.list {
        for r in ds.named() {
            writeln!(out, "{}", r.name())?;
        }
    }

    if let Some(q) = &params.query {
        match search::suggest(&ds, q, &opts.search) {
            Suggestions::TooShort => {
                eprintln!("Query must be at least {} characters", opts.search.min_query_chars);
            }
            Suggestions::Matches(ix) => {
                for r in ix.iter().filter_map(|&i| ds.get(i)) {
                    writeln!(out, "{}", r.name())?;
                }
            }
        }
    }

    if let Some(name) = &params.district {
        let record = ds
            .find_by_name(name)
            .ok_or_else(|| CliError::NotFound(name.clone()))?;
        let series = ChartSeries::for_record(record);

        writeln!(out, "{}", record.name())?;
        for p in series.points() {
            match p.value {
                Some(v) => writeln!(out, "{},{}", p.label, v)?,
                None => writeln!(out, "{},", p.label)?,
            }
        }

        if let Some(path) = &params.svg {
            let mut surface = SvgSurface::new(path);
            surface.set_title(record.name());
            let mut chart = ChartAdapter::new(surface, opts.chart.clone());
            chart.update(&series.labels(), &series.values())?;
            eprintln!("Wrote {}", path.display());
        }
    }

    Ok(())
}

fn options_for(params: &Params) -> AppOptions {
    let mut opts = AppOptions::from_env();
    if let Some(p) = &params.data {
        opts.dataset.set_path(p.clone());
    }
    opts
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Params, CliError> {
    let mut params = Params::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "-d" | "--data" => params.data = Some(PathBuf::from(value_for(&mut args, &a)?)),
            "-q" | "--query" => params.query = Some(value_for(&mut args, &a)?),
            "--district" => params.district = Some(value_for(&mut args, &a)?),
            "--svg" => params.svg = Some(PathBuf::from(value_for(&mut args, &a)?)),
            "--list" => params.list = true,
            "-h" | "--help" => params.help = true,
            _ => return Err(CliError::Usage(format!("Unknown arg: {a}"))),
        }
    }

    Ok(params)
}

/// GUI binary: only `--data <path>` is accepted.
pub fn parse_gui_args<I: IntoIterator<Item = String>>(args: I) -> Result<AppOptions, CliError> {
    let params = parse_args(args)?;
    if params.query.is_some() || params.district.is_some() || params.svg.is_some() || params.list {
        return Err(CliError::Usage(s!("The GUI only takes --data <path>; use absence-cli for queries")));
    }
    Ok(options_for(&params))
}

fn value_for<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String, CliError> {
    args.next()
        .ok_or_else(|| CliError::Usage(format!("Missing value for {flag}")))
}
