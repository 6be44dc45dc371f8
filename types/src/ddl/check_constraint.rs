//! Check constraint DDL types

/// Table-level check constraint
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CheckConstraint {
    pub id: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub name: Option<String>,
    /// Boolean expression, including its surrounding parentheses
    pub expr: String,
}

impl CheckConstraint {
    /// Create an unnamed check constraint
    #[must_use]
    pub fn new(id: impl Into<String>, expr: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            expr: expr.into(),
        }
    }

    /// Set the constraint name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
