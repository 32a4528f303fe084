use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};

use anyhow::{Result, anyhow};

use crate::parse::parse;

/// Well-known location consulted first by [`load`].
pub const ETC_OS_RELEASE: &str = "/etc/os-release";

/// Fallback location for systems that keep no `/etc/os-release`.
pub const USR_LIB_OS_RELEASE: &str = "/usr/lib/os-release";

/// Loads os-release data from the well-known locations, trying
/// [`ETC_OS_RELEASE`] first and falling back to [`USR_LIB_OS_RELEASE`].
///
/// Returns the first successfully parsed map, or the fallback attempt's
/// error when both locations fail.
pub fn load() -> Result<HashMap<String, String>> {
    load_path(ETC_OS_RELEASE).or_else(|_| load_path(USR_LIB_OS_RELEASE))
}

/// Opens the file at `path` and parses its contents.
///
/// Open failures propagate untouched, so callers can still see the
/// underlying `io::Error`.
pub fn load_path(path: &str) -> Result<HashMap<String, String>> {
    let file = File::open(path)?;
    parse_from_reader(BufReader::new(file))
}

/// Reads the whole of `reader` and parses it as os-release contents.
pub fn parse_from_reader<R: BufRead>(mut reader: R) -> Result<HashMap<String, String>> {
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .map_err(|e| anyhow!("read: {}", e))?;
    parse(&contents)
}
