//! Foreign key DDL types
//!
//! ```text
//! [ CONSTRAINT constraint_name ]
//!   FOREIGN KEY ( column_name [, ... ] ) REFERENCES ref_table ( ref_column [, ... ] )
//!   [ ON DELETE { CASCADE | NO ACTION } ]
//! ```

/// Foreign key constraint
///
/// `col_ids` and `refer_column_ids` are paired by position and must have the same length.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ForeignKey {
    pub id: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub name: Option<String>,
    pub col_ids: Vec<String>,
    pub refer_table_id: String,
    pub refer_column_ids: Vec<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub on_delete: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub on_update: Option<String>,
}

impl ForeignKey {
    /// Create an unnamed foreign key to `refer_table_id` with no columns
    #[must_use]
    pub fn new(id: impl Into<String>, refer_table_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            col_ids: Vec::new(),
            refer_table_id: refer_table_id.into(),
            refer_column_ids: Vec::new(),
            on_delete: None,
            on_update: None,
        }
    }

    /// Set the constraint name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Pair a local column with the referenced column
    #[must_use]
    pub fn column(mut self, col_id: impl Into<String>, refer_col_id: impl Into<String>) -> Self {
        self.col_ids.push(col_id.into());
        self.refer_column_ids.push(refer_col_id.into());
        self
    }

    /// Set ON DELETE action
    #[must_use]
    pub fn on_delete(mut self, action: impl Into<String>) -> Self {
        self.on_delete = Some(action.into());
        self
    }

    /// Set ON UPDATE action
    #[must_use]
    pub fn on_update(mut self, action: impl Into<String>) -> Self {
        self.on_update = Some(action.into());
        self
    }
}
