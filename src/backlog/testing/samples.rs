//! Sample backlog documents
//!
//! Samples live in `docs/samples/` and are named `NNN-description.txt`. The helpers panic
//! on missing files since they only run inside tests.

use crate::backlog::parsing::{parse, Parsed};
use std::fs;
use std::io;
use std::path::PathBuf;

fn samples_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("docs")
        .join("samples")
}

pub fn path(name: &str) -> PathBuf {
    samples_dir().join(name)
}

/// Sample file names, sorted
pub fn list() -> io::Result<Vec<String>> {
    let mut names: Vec<String> = fs::read_dir(samples_dir())?
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".txt"))
        .collect();
    names.sort();
    Ok(names)
}

pub fn get_string(name: &str) -> String {
    fs::read_to_string(path(name))
        .unwrap_or_else(|e| panic!("Failed to load sample {}: {}", name, e))
}

pub fn parse_sample(name: &str) -> Parsed {
    parse(&get_string(name))
}
