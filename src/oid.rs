use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid OID {0:?}")]
pub struct OidParseError(String);

/// Object identifier: a non-empty sequence of non-negative components.
///
/// Ordering is component-wise lexicographic, so a strict prefix sorts
/// before any of its extensions. This is the order GetNext walks the
/// binding table in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Oid(Vec<u32>);

impl Oid {
    pub fn new(components: Vec<u32>) -> Self {
        Oid(components)
    }

    pub fn components(&self) -> &[u32] {
        &self.0
    }
}

impl From<&[u32]> for Oid {
    fn from(components: &[u32]) -> Self {
        Oid(components.to_vec())
    }
}

impl<const N: usize> From<[u32; N]> for Oid {
    fn from(components: [u32; N]) -> Self {
        Oid(components.to_vec())
    }
}

impl FromStr for Oid {
    type Err = OidParseError;

    /// Parses dot-separated decimal text. Leading dots are stripped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim_start_matches('.');
        if trimmed.is_empty() {
            return Err(OidParseError(s.to_string()));
        }
        let components = trimmed
            .split('.')
            .map(|part| part.parse::<u32>().map_err(|_| OidParseError(s.to_string())))
            .collect::<Result<Vec<u32>, _>>()?;
        Ok(Oid(components))
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}
