//! DDL generation from a [`Schema`]
//!
//! Statements come out in a fixed order:
//!
//! 1. `CREATE SEQUENCE`, by sequence name
//! 2. per table in print order, `CREATE TABLE` followed by its `CREATE INDEX` statements
//! 3. every foreign key as `ALTER TABLE ... ADD ... FOREIGN KEY`
//!
//! Foreign keys always go last so that tables never need to be created in
//! reference order, and circular references are not a problem.

mod column;
mod foreign_key;
mod index;
mod sequence;
mod table;

use std::collections::HashMap;

use spanner_ddl_types::{CreateTable, Schema, Sequence};

use crate::config::Config;
use crate::error::{DdlError, Result};
use crate::order::sorted_tables;

/// Spanner DDL generator
#[derive(Debug, Clone, Default)]
pub struct DdlGenerator {
    config: Config,
}

impl DdlGenerator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate every statement for a schema and its sequences
    ///
    /// Statements carry no terminator. Either all statements are returned or the
    /// first reference that cannot be resolved is reported.
    pub fn generate(
        &self,
        schema: &Schema,
        sequences: &HashMap<String, Sequence>,
    ) -> Result<Vec<String>> {
        let mut statements = Vec::new();

        let mut sequences: Vec<&Sequence> = sequences.values().collect();
        sequences.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        for seq in sequences {
            statements.push(self.create_sequence_sql(seq));
        }

        let tables = sorted_tables(schema)?;

        if self.config.tables {
            for (_, table) in &tables {
                statements.push(self.create_table_sql(schema, table)?);
                for index in &table.indexes {
                    statements.push(self.create_index_sql(table, index)?);
                }
            }
        }

        if self.config.foreign_keys {
            for (_, table) in &tables {
                for fk in &table.foreign_keys {
                    statements.push(self.alter_table_add_foreign_key_sql(schema, table, fk)?);
                }
            }
        }

        trace_generate!(self.config.dialect, statements.len());
        Ok(statements)
    }

    /// Quoted name of the column with id `col_id` in `table`
    fn column_name(&self, table: &CreateTable, col_id: &str) -> Result<String> {
        table
            .col_defs
            .get(col_id)
            .map(|col| self.config.quote(&col.name))
            .ok_or_else(|| DdlError::MissingColumn {
                table: table.name.clone(),
                column: col_id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spanner_ddl_types::{ColumnDef, Dialect, TypeName};

    #[test]
    fn test_default_generator_targets_google_sql() {
        let generator = DdlGenerator::default();
        assert_eq!(generator.config().dialect, Dialect::GoogleStandardSql);
    }

    #[test]
    fn test_empty_schema_generates_nothing() {
        let generator = DdlGenerator::default();
        let statements = generator.generate(&Schema::new(), &HashMap::new()).unwrap();
        assert!(statements.is_empty());
    }

    #[test]
    fn test_column_name_reports_missing_definition() {
        let generator = DdlGenerator::default();
        let table = CreateTable::new("t1", "Singers")
            .column(ColumnDef::new("c1", "SingerId", TypeName::Int64));

        assert_eq!(generator.column_name(&table, "c1").unwrap(), "`SingerId`");
        assert_eq!(
            generator.column_name(&table, "c9"),
            Err(DdlError::MissingColumn {
                table: "Singers".to_string(),
                column: "c9".to_string(),
            })
        );
    }
}
