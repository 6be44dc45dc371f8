//! Schema: the set of tables of a Spanner database

use std::collections::HashMap;
use std::collections::hash_map;

use super::CreateTable;

/// Tables of a database keyed by table id
///
/// Holds no ordering of its own; print order is derived from table names and
/// interleaving every time DDL is generated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Schema {
    tables: HashMap<String, CreateTable>,
}

impl Schema {
    /// Create an empty schema
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table under its own id, returning any table it replaced
    pub fn insert(&mut self, table: CreateTable) -> Option<CreateTable> {
        self.tables.insert(table.id.clone(), table)
    }

    /// Look up a table by id
    #[inline]
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CreateTable> {
        self.tables.get(id)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.tables.contains_key(id)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Table ids and tables in unspecified order
    pub fn iter(&self) -> hash_map::Iter<'_, String, CreateTable> {
        self.tables.iter()
    }

    /// Tables in unspecified order
    pub fn tables(&self) -> hash_map::Values<'_, String, CreateTable> {
        self.tables.values()
    }

    /// Whether any table is interleaved in another
    #[must_use]
    pub fn check_interleaved(&self) -> bool {
        self.tables().any(|t| t.parent_id().is_some())
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = (&'a String, &'a CreateTable);
    type IntoIter = hash_map::Iter<'a, String, CreateTable>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<CreateTable> for Schema {
    fn from_iter<I: IntoIterator<Item = CreateTable>>(iter: I) -> Self {
        let mut schema = Schema::new();
        for table in iter {
            schema.insert(table);
        }
        schema
    }
}

impl Extend<CreateTable> for Schema {
    fn extend<I: IntoIterator<Item = CreateTable>>(&mut self, iter: I) {
        for table in iter {
            self.insert(table);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InterleavedParent;

    #[test]
    fn test_insert_keys_by_table_id() {
        let mut schema = Schema::new();
        assert!(schema.insert(CreateTable::new("t1", "Singers")).is_none());
        assert!(schema.insert(CreateTable::new("t1", "Renamed")).is_some());
        assert_eq!(schema.len(), 1);
        assert_eq!(schema.get("t1").map(|t| t.name.as_str()), Some("Renamed"));
    }

    #[test]
    fn test_check_interleaved() {
        let mut schema: Schema = [CreateTable::new("t1", "Singers")].into_iter().collect();
        assert!(!schema.check_interleaved());

        schema.extend([
            CreateTable::new("t2", "Albums").interleave_in(InterleavedParent::new("t1")),
        ]);
        assert!(schema.check_interleaved());
    }
}
