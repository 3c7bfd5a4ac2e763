//! Presentation records
//!
//! A [`ResultRecord`] is the dispatcher's only output: a title, an
//! optional description, and ordered parameter/metric lists whose values
//! are already formatted strings. Records are immutable once returned
//! and serialize directly for JSON/CSV/PDF export downstream.

use serde::{Deserialize, Serialize};

/// A named analysis input or derived quantity, with an optional
/// human-readable interpretation (effect-size band, correlation strength)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<String>,
}

/// A named analysis outcome.
///
/// `highlight` on a p-value metric means statistically significant at
/// alpha = 0.05; effect-size metrics highlight on their own documented
/// thresholds. No other meaning is attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
    pub value: String,
    pub highlight: bool,
}

/// The dispatcher's uniform output record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parameters: Vec<Parameter>,
    pub metrics: Vec<Metric>,
}

impl ResultRecord {
    /// Create an empty record with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            parameters: Vec::new(),
            metrics: Vec::new(),
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a parameter
    pub fn push_parameter(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        interpretation: Option<String>,
    ) {
        self.parameters.push(Parameter {
            name: name.into(),
            value: value.into(),
            interpretation,
        });
    }

    /// Append a metric
    pub fn push_metric(&mut self, name: impl Into<String>, value: impl Into<String>, highlight: bool) {
        self.metrics.push(Metric {
            name: name.into(),
            value: value.into(),
            highlight,
        });
    }

    /// Whether any metric is highlighted
    pub fn has_highlight(&self) -> bool {
        self.metrics.iter().any(|m| m.highlight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builders() {
        let mut record = ResultRecord::new("Pearson Correlation")
            .with_description("Association between two measures");
        record.push_parameter("Sample Size", "24", None);
        record.push_metric("p-value", "0.012", true);

        assert_eq!(record.title, "Pearson Correlation");
        assert_eq!(record.parameters.len(), 1);
        assert_eq!(record.metrics.len(), 1);
        assert!(record.has_highlight());
    }

    #[test]
    fn test_empty_record_has_no_highlight() {
        let record = ResultRecord::new("Summary");
        assert!(!record.has_highlight());
    }
}
