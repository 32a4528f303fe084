//! Reads and parses the `os-release` file Linux distributions use to
//! describe their identity (`ID`, `NAME`, `VERSION`, ...).
//!
//! The format is line-oriented `KEY=value` with `#` comments; values may be
//! wrapped in single or double quotes. [`load`] consults the two well-known
//! system locations, [`parse`] works on any in-memory contents.
//!
//! ```no_run
//! let osr = osrelease::load()?;
//! println!(
//!     "running on {}",
//!     osr.get("ID").map(String::as_str).unwrap_or("<unknown>")
//! );
//! # anyhow::Ok(())
//! ```

mod load;
mod parse;

pub use load::{ETC_OS_RELEASE, USR_LIB_OS_RELEASE, load, load_path, parse_from_reader};
pub use parse::parse;
