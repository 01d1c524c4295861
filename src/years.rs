// src/years.rs
//
// The six school years the dataset covers. CSV columns are 8-digit
// start/end pairs ("20242025"); the chart shows short labels ("2024-25").
// Stored oldest → newest, which is the order every series uses.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SchoolYear {
    pub key: &'static str,
    pub label: &'static str,
}

pub static YEARS: [SchoolYear; 6] = [
    SchoolYear { key: "20192020", label: "2019-20" },
    SchoolYear { key: "20202021", label: "2020-21" },
    SchoolYear { key: "20212022", label: "2021-22" },
    SchoolYear { key: "20222023", label: "2022-23" },
    SchoolYear { key: "20232024", label: "2023-24" },
    SchoolYear { key: "20242025", label: "2024-25" },
];

pub fn keys() -> impl Iterator<Item = &'static str> {
    YEARS.iter().map(|y| y.key)
}

pub fn labels() -> Vec<&'static str> {
    YEARS.iter().map(|y| y.label).collect()
}

pub fn label_for(key: &str) -> Option<&'static str> {
    YEARS.iter().find(|y| y.key == key).map(|y| y.label)
}

pub fn key_for(label: &str) -> Option<&'static str> {
    YEARS.iter().find(|y| y.label == label).map(|y| y.key)
}
