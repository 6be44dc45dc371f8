//! Sequence DDL types
//!
//! ```text
//! CREATE SEQUENCE sequence_name [ OPTIONS ( sequence_options ) ]
//! ```

use std::collections::HashMap;

/// Value distribution of a sequence
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SequenceKind {
    /// Positive values with their bits reversed, to spread writes across splits
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "BIT REVERSED POSITIVE"))]
    BitReversedPositive,
}

/// Sequence definition
///
/// Bounds and the start counter are kept as literal text and printed verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Sequence {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub sequence_kind: Option<SequenceKind>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub skip_range_min: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub skip_range_max: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub start_with_counter: Option<String>,
    /// Table id to the ids of its columns drawing values from this sequence
    pub columns_using_seq: HashMap<String, Vec<String>>,
}

impl Sequence {
    /// Create a bit-reversed sequence with no options
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sequence_kind: Some(SequenceKind::BitReversedPositive),
            ..Self::default()
        }
    }

    /// Set the skipped value range
    #[must_use]
    pub fn skip_range(mut self, min: impl Into<String>, max: impl Into<String>) -> Self {
        self.skip_range_min = Some(min.into());
        self.skip_range_max = Some(max.into());
        self
    }

    /// Set the starting counter
    #[must_use]
    pub fn start_with_counter(mut self, counter: impl Into<String>) -> Self {
        self.start_with_counter = Some(counter.into());
        self
    }

    /// Record that a table column draws values from this sequence
    #[must_use]
    pub fn used_by(mut self, table_id: impl Into<String>, col_id: impl Into<String>) -> Self {
        self.columns_using_seq
            .entry(table_id.into())
            .or_default()
            .push(col_id.into());
        self
    }
}
