//! Interleaving (parent co-location) DDL types
//!
//! ```text
//! INTERLEAVE IN parent_name
//! INTERLEAVE IN PARENT parent_name [ ON DELETE { CASCADE | NO ACTION } ]
//! ```

/// Flavour of the interleave clause
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterleaveType {
    /// `INTERLEAVE IN` - co-location only, no parent row requirement
    #[cfg_attr(feature = "serde", serde(rename = "IN"))]
    In,
    /// `INTERLEAVE IN PARENT` - child rows require a parent row
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "IN PARENT"))]
    InParent,
}

impl InterleaveType {
    /// Keywords following `INTERLEAVE`
    #[must_use]
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::In => "IN",
            Self::InParent => "IN PARENT",
        }
    }
}

/// Parent of an interleaved table
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct InterleavedParent {
    /// Parent table id; empty means the table is not interleaved
    pub id: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub on_delete: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub interleave_type: InterleaveType,
}

impl InterleavedParent {
    /// `INTERLEAVE IN PARENT` the given table
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            on_delete: None,
            interleave_type: InterleaveType::InParent,
        }
    }

    /// Set the interleave flavour
    #[must_use]
    pub fn interleave_type(mut self, interleave_type: InterleaveType) -> Self {
        self.interleave_type = interleave_type;
        self
    }

    /// Set ON DELETE action
    #[must_use]
    pub fn on_delete(mut self, action: impl Into<String>) -> Self {
        self.on_delete = Some(action.into());
        self
    }
}
