//! Table DDL types
//!
//! ```text
//! create_table:
//!   CREATE TABLE table_name ( [column_def, ...] [table_constraint, ...] ) primary_key
//!   [, INTERLEAVE IN [PARENT] parent_name [ ON DELETE delete_rule ]]
//! ```

use std::collections::HashMap;

use super::{CheckConstraint, ColumnDef, CreateIndex, ForeignKey, IndexKey, InterleavedParent};

/// Table definition
///
/// Column order and column definitions are kept apart: `col_ids` fixes the print
/// order while `col_defs` gives constant-time lookup by id. Every id in `col_ids`
/// must have an entry in `col_defs`; extra entries are allowed and never printed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CreateTable {
    pub id: String,
    pub name: String,
    pub col_ids: Vec<String>,
    pub col_defs: HashMap<String, ColumnDef>,
    pub primary_keys: Vec<IndexKey>,
    pub foreign_keys: Vec<ForeignKey>,
    pub indexes: Vec<CreateIndex>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub parent_table: Option<InterleavedParent>,
    pub check_constraints: Vec<CheckConstraint>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub comment: Option<String>,
}

impl CreateTable {
    /// Create an empty table
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append a column, in print order
    #[must_use]
    pub fn column(mut self, column: ColumnDef) -> Self {
        self.col_ids.push(column.id.clone());
        self.col_defs.insert(column.id.clone(), column);
        self
    }

    /// Append a primary key part
    #[must_use]
    pub fn primary_key(mut self, key: IndexKey) -> Self {
        self.primary_keys.push(key);
        self
    }

    /// Append a foreign key
    #[must_use]
    pub fn foreign_key(mut self, fk: ForeignKey) -> Self {
        self.foreign_keys.push(fk);
        self
    }

    /// Append a secondary index
    #[must_use]
    pub fn index(mut self, index: CreateIndex) -> Self {
        self.indexes.push(index);
        self
    }

    /// Append a check constraint
    #[must_use]
    pub fn check(mut self, check: CheckConstraint) -> Self {
        self.check_constraints.push(check);
        self
    }

    /// Interleave this table in a parent
    #[must_use]
    pub fn interleave_in(mut self, parent: InterleavedParent) -> Self {
        self.parent_table = Some(parent);
        self
    }

    /// Attach a table comment
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Id of the parent table, if this table is interleaved
    #[inline]
    #[must_use]
    pub fn parent_id(&self) -> Option<&str> {
        self.parent_table
            .as_ref()
            .map(|p| p.id.as_str())
            .filter(|id| !id.is_empty())
    }

    /// Whether `col_id` is part of the primary key
    #[must_use]
    pub fn is_primary_key_column(&self, col_id: &str) -> bool {
        self.primary_keys.iter().any(|k| k.col_id == col_id)
    }
}
