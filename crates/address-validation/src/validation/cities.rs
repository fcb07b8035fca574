use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, error};

/// Immutable set of recognized city names.
///
/// Built once at startup and shared read-only between requests. Lookups are
/// exact: no case folding, trimming or diacritic handling is applied, so
/// callers must supply the reference spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CitySet {
    names: HashSet<String>,
}

impl CitySet {
    /// Load the set from a file containing one city name per line.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CityLoadError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading reference cities");

        let file = File::open(path).map_err(|source| {
            error!(path = %path.display(), %source, "could not open reference cities");
            CityLoadError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;

        Self::from_reader(file)
    }

    /// Load the set from any line-oriented UTF-8 source.
    ///
    /// Lines end at `\n`, `\r\n` or a bare `\r`. Only those terminators are
    /// stripped; every other character of a line, including leading or
    /// trailing spaces, is kept verbatim.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, CityLoadError> {
        let mut text = String::new();
        reader.read_to_string(&mut text).map_err(|source| {
            error!(%source, "could not read reference cities");
            CityLoadError::Read { source }
        })?;

        let names: HashSet<String> = split_lines(&text).map(str::to_string).collect();

        debug!(count = names.len(), "reference cities loaded");
        Ok(Self { names })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for CitySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }

        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(end) => {
                let line = &rest[..end];
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

/// Failure to build the reference city set. Always fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum CityLoadError {
    #[error("could not open reference cities at {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not read reference cities: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn from_reader_inserts_every_line() {
        let cities = CitySet::from_reader(Cursor::new("Trier\nBerlin\nKöln\n")).expect("loads");
        assert_eq!(cities.len(), 3);
        assert!(cities.contains("Trier"));
        assert!(cities.contains("Berlin"));
        assert!(cities.contains("Köln"));
    }

    #[test]
    fn duplicate_lines_collapse() {
        let cities = CitySet::from_reader(Cursor::new("Trier\nTrier\nTrier")).expect("loads");
        assert_eq!(cities.len(), 1);
    }

    #[test]
    fn only_line_endings_are_stripped() {
        let cities =
            CitySet::from_reader(Cursor::new("Trier\r\n Mainz \nBonn")).expect("loads");
        assert!(cities.contains("Trier"));
        assert!(cities.contains(" Mainz "));
        assert!(!cities.contains("Mainz"));
        assert!(cities.contains("Bonn"));
    }

    #[test]
    fn bare_carriage_returns_end_lines() {
        let cities = CitySet::from_reader(Cursor::new("Trier\rBerlin\r")).expect("loads");
        assert_eq!(cities.len(), 2);
        assert!(cities.contains("Trier"));
        assert!(cities.contains("Berlin"));

        let mixed = CitySet::from_reader(Cursor::new("Berlin\nTrier\r")).expect("loads");
        assert!(mixed.contains("Trier"));
        assert!(!mixed.contains("Trier\r"));
    }

    #[test]
    fn empty_lines_are_kept_as_entries() {
        let cities = CitySet::from_reader(Cursor::new("Trier\n\r\nBonn\n")).expect("loads");
        assert_eq!(cities.len(), 3);
        assert!(cities.contains(""));
    }

    #[test]
    fn lookup_is_exact() {
        let cities: CitySet = ["Köln", "Frankfurt am Main"].into_iter().collect();
        assert!(cities.contains("Köln"));
        assert!(!cities.contains("köln"));
        assert!(!cities.contains("Koln"));
        assert!(!cities.contains("Köln "));
        assert!(!cities.contains("Frankfurt"));
    }

    #[test]
    fn empty_source_yields_empty_set() {
        let cities = CitySet::from_reader(Cursor::new("")).expect("loads");
        assert!(cities.is_empty());
        assert!(!cities.contains(""));
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let error = CitySet::from_reader(Cursor::new(vec![b'T', 0xff, b'\n']))
            .expect_err("invalid utf-8 rejected");
        assert!(matches!(error, CityLoadError::Read { .. }));
    }

    #[test]
    fn from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "Trier").expect("write");
        writeln!(file, "Saarbrücken").expect("write");

        let cities = CitySet::from_path(file.path()).expect("loads");
        assert_eq!(cities.len(), 2);
        assert!(cities.contains("Saarbrücken"));
    }

    #[test]
    fn from_path_propagates_missing_file() {
        let error = CitySet::from_path("./does-not-exist.txt").expect_err("missing file");
        match error {
            CityLoadError::Open { path, .. } => {
                assert_eq!(path, PathBuf::from("./does-not-exist.txt"));
            }
            other => panic!("expected open error, got {other:?}"),
        }
    }
}
