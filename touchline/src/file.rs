//! Record sources and configuration files.

use std::fs::File;
use std::io::{BufRead, BufReader, Error};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::from_reader;
use tracing::debug;

use crate::error::LoadError;
use crate::season::Season;

/// Reads a JSON-encoded type from a given file `path`.
pub fn read_json<D: DeserializeOwned>(path: impl AsRef<Path>) -> Result<D, Error> {
    let file = File::open(path)?;
    Ok(from_reader(file)?)
}

pub trait ReadJsonFile<D> {
    fn read_json_file(path: impl AsRef<Path>) -> Result<D, Error>;
}

impl<D: DeserializeOwned> ReadJsonFile<D> for D {
    fn read_json_file(path: impl AsRef<Path>) -> Result<D, Error> {
        read_json(path)
    }
}

/// Reads every line of the file at `path` into memory.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, Error> {
    let path = path.as_ref();
    let lines = BufReader::new(File::open(path)?)
        .lines()
        .collect::<Result<Vec<_>, _>>()?;
    debug!("read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Loads a season from a roster file and a match file.
pub fn read_season(
    players_path: impl AsRef<Path>,
    matches_path: impl AsRef<Path>,
) -> Result<Season, LoadError> {
    let players = read_lines(players_path)?;
    let matches = read_lines(matches_path)?;
    Season::load(players, matches)
}
