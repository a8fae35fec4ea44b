use std::fmt;
use std::str::FromStr;

use crate::error::TransferError;

/// An ordered language pair, written `source-target` (e.g. `eng-kaz`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Direction {
    pub source: String,
    pub target: String,
}

impl Direction {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// The same pair, translated the other way round
    pub fn reversed(&self) -> Self {
        Self::new(self.target.clone(), self.source.clone())
    }
}

impl FromStr for Direction {
    type Err = TransferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split('-');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(source), Some(target), None)
                if !source.is_empty() && !target.is_empty() && source != target =>
            {
                Ok(Self::new(source, target))
            }
            _ => Err(TransferError::InvalidDirection(format!(
                "'{}' (expected <source>-<target>, e.g. eng-kaz)",
                s
            ))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source, self.target)
    }
}
