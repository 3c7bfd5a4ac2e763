//! Named column sets and deterministic column selection
//!
//! The dispatcher must choose which columns feed an analysis without the
//! caller pre-wiring roles. Selection hashes the analysis-type label by
//! summing character codes, so the same label and column set always
//! yield the same pair while different labels tend to spread across
//! different pairs.

use assay_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// A named numeric column, already cleaned of non-finite values upstream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedColumn {
    pub name: String,
    pub values: Vec<f64>,
}

impl NamedColumn {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// An ordered collection of uniquely named columns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnSet {
    columns: Vec<NamedColumn>,
}

impl ColumnSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a column, preserving insertion order.
    ///
    /// Duplicate names are rejected: column names address data, so a
    /// collision would make selection ambiguous.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<f64>) -> Result<()> {
        let name = name.into();
        if self.columns.iter().any(|c| c.name == name) {
            return Err(Error::InvalidInput(format!(
                "Duplicate column name: {name}"
            )));
        }
        self.columns.push(NamedColumn::new(name, values));
        Ok(())
    }

    /// Build a set from (name, values) pairs
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for (name, values) in pairs {
            set.insert(name, values)?;
        }
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Whether any column holds at least one value
    pub fn has_data(&self) -> bool {
        self.columns.iter().any(|c| !c.is_empty())
    }

    pub fn get(&self, index: usize) -> Option<&NamedColumn> {
        self.columns.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedColumn> {
        self.columns.iter()
    }

    /// Deterministically select the column pair for a label.
    ///
    /// Index 1 is `hash % k`, index 2 is `(hash + 1) % k`. An empty
    /// column at index 1 falls back to the first column; an empty column
    /// at index 2 falls back to the second column, or to the first
    /// selection when the set holds a single column. Returns `None` only
    /// for an empty set.
    pub fn select_pair(&self, label: &str) -> Option<(&NamedColumn, &NamedColumn)> {
        if self.columns.is_empty() {
            return None;
        }
        let k = self.columns.len();
        let hash = label_hash(label);
        let i1 = hash % k;
        let i2 = (hash + 1) % k;

        let col1 = if self.columns[i1].is_empty() {
            &self.columns[0]
        } else {
            &self.columns[i1]
        };
        let col2 = if !self.columns[i2].is_empty() {
            &self.columns[i2]
        } else if k >= 2 {
            &self.columns[1]
        } else {
            col1
        };

        Some((col1, col2))
    }
}

/// Integer hash of an analysis-type label: the sum of its character codes.
pub fn label_hash(label: &str) -> usize {
    label.chars().map(|c| c as usize).sum()
}
