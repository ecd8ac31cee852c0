//! Autocomplete hint tables.
//!
//! The widget's hint addon takes a mapping from table (or schema) name to the
//! names it may suggest after that table. Entries are either plain names or
//! records from which one field is projected as the name.
use crate::*;
use derive_more::{Display, From};
use std::collections::BTreeMap;

/// One raw hint entry.
#[derive(Debug, Display, Clone, PartialEq, Eq, From)]
pub enum HintEntry {
    #[display("{_0}")]
    Name(String),
    #[display("{_0:?}")]
    Record(BTreeMap<String, String>),
}

impl From<&str> for HintEntry {
    fn from(value: &str) -> Self {
        HintEntry::Name(value.to_string())
    }
}

impl<const N: usize> From<[(&str, &str); N]> for HintEntry {
    fn from(fields: [(&str, &str); N]) -> Self {
        HintEntry::Record(
            fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

/// Hint tables: table name to the entries offered after it, in the order given.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HintOptions {
    pub tables: BTreeMap<String, Vec<HintEntry>>,
}

impl HintOptions {
    /// Build a single hint table called `title`.
    ///
    /// With a `key`, every entry must be a record carrying that field and the
    /// field's value becomes a plain name. Without one, entries are kept as
    /// given and the widget decides how to show records.
    pub fn from_values(title: impl Into<String>, values: &[HintEntry], key: Option<&str>) -> Result<Self> {
        let entries = match key {
            Some(key) => project(values, key)?,
            None => values.to_vec(),
        };
        Ok(Self {
            tables: BTreeMap::from([(title.into(), entries)]),
        })
    }

    pub fn table(&self, title: &str) -> Option<&[HintEntry]> {
        self.tables.get(title).map(Vec::as_slice)
    }
}

fn project(values: &[HintEntry], key: &str) -> Result<Vec<HintEntry>> {
    values
        .iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            HintEntry::Record(fields) => fields
                .get(key)
                .cloned()
                .map(HintEntry::Name)
                .ok_or_else(|| Error::MalformedHintSpec {
                    index,
                    key: key.to_string(),
                }),
            HintEntry::Name(_) => Err(Error::MalformedHintSpec {
                index,
                key: key.to_string(),
            }),
        })
        .collect()
}
