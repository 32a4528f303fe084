use std::collections::HashMap;

use anyhow::{Result, bail};

/// Parses the full contents of an os-release file into a key/value map.
///
/// Lines are separated by `\n`. Blank lines and `#` comments contribute
/// nothing, and on duplicate keys the last occurrence wins. A line that is
/// neither skippable nor a `key=value` entry fails the whole parse with an
/// error naming the 1-based line number; no partial map is returned.
pub fn parse(contents: &str) -> Result<HashMap<String, String>> {
    let mut parsed = HashMap::new();

    for (i, line) in contents.split('\n').enumerate() {
        match parse_line(line) {
            Ok(Some((key, value))) => {
                parsed.insert(key, value);
            }
            Ok(None) => continue,
            Err(e) => bail!("line {}: {}", i + 1, e),
        }
    }
    Ok(parsed)
}

/// Classifies a single line. `None` means the line carries no entry (blank
/// or comment). The key may be empty when the line starts with `=`.
fn parse_line(line: &str) -> Result<Option<(String, String)>> {
    let line = line.trim();

    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let Some((key, raw)) = line.split_once('=') else {
        bail!("no '=' separator in entry");
    };

    // Strip quote characters from both ends independently, unmatched ones
    // included. No pair validation.
    let value = raw.trim_matches(|c| c == '\'' || c == '"');

    Ok(Some((key.to_string(), value.to_string())))
}
