//! Index and key-part DDL types
//!
//! ```text
//! primary_key:
//!   PRIMARY KEY ( [key_part, ...] )
//! key_part:
//!   column_name [{ ASC | DESC }]
//! create_index:
//!   CREATE [UNIQUE] INDEX index_name ON table_name ( key_part [, ...] ) [ storing_clause ]
//! ```

/// One part of a primary or index key
///
/// Key parts are printed by ascending `order`, never by their position in the
/// containing `Vec`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct IndexKey {
    pub col_id: String,
    /// Ascending when `false`
    #[cfg_attr(feature = "serde", serde(default))]
    pub desc: bool,
    pub order: i32,
}

impl IndexKey {
    /// Ascending key part at position `order`
    #[must_use]
    pub fn new(col_id: impl Into<String>, order: i32) -> Self {
        Self {
            col_id: col_id.into(),
            desc: false,
            order,
        }
    }

    /// Make the key part descending
    #[must_use]
    pub fn desc(mut self) -> Self {
        self.desc = true;
        self
    }

    /// Key parts in print order
    ///
    /// ```
    /// use spanner_ddl_types::IndexKey;
    ///
    /// let keys = [IndexKey::new("b", 2), IndexKey::new("a", 1)];
    /// let sorted: Vec<_> = IndexKey::sorted(&keys).iter().map(|k| k.col_id.as_str()).collect();
    /// assert_eq!(sorted, ["a", "b"]);
    /// ```
    #[must_use]
    pub fn sorted(keys: &[IndexKey]) -> Vec<&IndexKey> {
        let mut sorted: Vec<&IndexKey> = keys.iter().collect();
        sorted.sort_by_key(|k| k.order);
        sorted
    }
}

/// Secondary index
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CreateIndex {
    pub id: String,
    pub name: String,
    /// Id of the indexed table
    pub table_id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub unique: bool,
    pub keys: Vec<IndexKey>,
    /// Non-key columns copied into the index
    #[cfg_attr(feature = "serde", serde(default))]
    pub stored_column_ids: Vec<String>,
}

impl CreateIndex {
    /// Create a non-unique index with no keys
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        table_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            table_id: table_id.into(),
            unique: false,
            keys: Vec::new(),
            stored_column_ids: Vec::new(),
        }
    }

    /// Mark the index UNIQUE
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Append a key part
    #[must_use]
    pub fn key(mut self, key: IndexKey) -> Self {
        self.keys.push(key);
        self
    }

    /// Append a stored column
    #[must_use]
    pub fn storing(mut self, col_id: impl Into<String>) -> Self {
        self.stored_column_ids.push(col_id.into());
        self
    }
}
