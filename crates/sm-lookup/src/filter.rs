//! Key eligibility filtering via `confine_to_keys`

use regex::Regex;

use crate::error::{LookupError, Result};

/// Decides whether a key is eligible for this backend at all.
#[derive(Debug)]
pub struct KeyFilter {
    patterns: Option<Vec<Regex>>,
}

impl KeyFilter {
    /// Compile `confine_to_keys` patterns.
    ///
    /// `None` means no filtering was configured and every key is eligible.
    /// A pattern that fails to compile fails the whole resolution.
    pub fn from_patterns(patterns: Option<&[String]>) -> Result<Self> {
        let patterns = match patterns {
            None => None,
            Some(list) => Some(
                list.iter()
                    .map(|p| Regex::new(p).map_err(|err| LookupError::pattern(p, err)))
                    .collect::<Result<Vec<_>>>()?,
            ),
        };
        Ok(Self { patterns })
    }

    /// A key is eligible iff some pattern's match covers the entire key.
    ///
    /// Substring matches do not count: `confine_to_keys: ["aws"]` does not
    /// admit `aws_password`. An empty pattern list admits nothing.
    pub fn is_eligible(&self, key: &str) -> bool {
        match &self.patterns {
            None => true,
            Some(patterns) => patterns
                .iter()
                .any(|re| re.find(key).is_some_and(|m| m.as_str() == key)),
        }
    }
}
