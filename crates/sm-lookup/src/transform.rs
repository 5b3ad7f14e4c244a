//! Key rewriting: `strip_from_keys` deletion and prefix fan-out

use regex::Regex;

use crate::error::{LookupError, Result};
use crate::options::LookupOptions;

/// Produce the ordered candidate keys to try for one logical key.
///
/// The list order is the fetch priority order and is never empty: with no
/// prefixes configured the transformed key itself is the sole candidate.
pub fn candidate_keys(key: &str, options: &LookupOptions) -> Result<Vec<String>> {
    let stripped = strip_key(key, options.strip_from_keys.as_deref())?;

    let prefixes = match options.prefixes.as_deref() {
        None | Some([]) => return Ok(vec![stripped]),
        Some(prefixes) => prefixes,
    };

    let delimiter = options.delimiter.as_str();
    Ok(prefixes
        .iter()
        .map(|prefix| {
            // A single trailing delimiter on the prefix is dropped so
            // "puppet/" and "puppet" produce the same candidate
            let prefix = prefix.strip_suffix(delimiter).unwrap_or(prefix);
            format!("{prefix}{delimiter}{stripped}")
        })
        .collect())
}

/// Apply `strip_from_keys` patterns in declaration order, each deleting the
/// first matching substring.
fn strip_key(key: &str, patterns: Option<&[String]>) -> Result<String> {
    let mut key = key.to_string();
    if let Some(patterns) = patterns {
        for pattern in patterns {
            let re = Regex::new(pattern).map_err(|err| LookupError::pattern(pattern, err))?;
            key = re.replace(&key, "").into_owned();
        }
    }
    Ok(key)
}
