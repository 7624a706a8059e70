use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::proto::feast::serving::FeatureReferenceV2;

const SEPARATOR: char = ':';

/// Identifies a feature, optionally qualified by the feature table that owns it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FeatureReference {
    /// Name of the owning feature table, if given.
    pub table: Option<String>,
    /// Name of the feature. Never empty and never contains `:`.
    pub name: String,
}

impl FeatureReference {
    /// Parses `table:feature` or a bare `feature`.
    ///
    /// Only the first `:` splits; a feature name may not contain another one.
    /// An empty table part (`:feature`) is treated as unqualified.
    pub fn parse(reference: &str) -> Result<Self> {
        let (table, name) = match reference.split_once(SEPARATOR) {
            Some((table, name)) => (Some(table), name),
            None => (None, reference),
        };

        if name.is_empty() {
            return Err(Error::InvalidArgument(format!(
                "feature reference '{reference}' has an empty feature name"
            )));
        }
        if name.contains(SEPARATOR) {
            return Err(Error::InvalidArgument(format!(
                "feature reference '{reference}' must be 'table:feature' or 'feature'"
            )));
        }

        Ok(FeatureReference {
            table: table.filter(|t| !t.is_empty()).map(str::to_string),
            name: name.to_string(),
        })
    }
}

/// Parses every reference, keeping input order. Fails on the first malformed one.
pub fn parse_feature_refs<I, S>(references: I) -> Result<Vec<FeatureReference>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    references
        .into_iter()
        .map(|r| FeatureReference::parse(r.as_ref()))
        .collect()
}

impl FromStr for FeatureReference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FeatureReference::parse(s)
    }
}

impl fmt::Display for FeatureReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.table {
            Some(table) => write!(f, "{table}{SEPARATOR}{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

impl From<FeatureReference> for FeatureReferenceV2 {
    fn from(val: FeatureReference) -> Self {
        FeatureReferenceV2 {
            feature_table: val.table.unwrap_or_default(),
            name: val.name,
        }
    }
}

impl From<FeatureReferenceV2> for FeatureReference {
    fn from(val: FeatureReferenceV2) -> Self {
        FeatureReference {
            table: Some(val.feature_table).filter(|t| !t.is_empty()),
            name: val.name,
        }
    }
}
