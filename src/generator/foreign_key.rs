//! Foreign key constraints
//!
//! Foreign keys are only emitted as `ALTER TABLE` statements after every table
//! exists. ON UPDATE actions are kept in the model but never printed; Spanner
//! only accepts ON DELETE.

use spanner_ddl_types::{CreateTable, ForeignKey, Schema};

use super::DdlGenerator;
use crate::error::{DdlError, Result};

impl DdlGenerator {
    /// Render `ALTER TABLE ... ADD` for a foreign key declared on `table`
    pub fn alter_table_add_foreign_key_sql(
        &self,
        schema: &Schema,
        table: &CreateTable,
        fk: &ForeignKey,
    ) -> Result<String> {
        trace_statement!("add_foreign_key", table.name);

        Ok(format!(
            "ALTER TABLE {} ADD {}",
            self.config.quote(&table.name),
            self.foreign_key_constraint_sql(schema, table, fk)?
        ))
    }

    /// Render the constraint clause on its own:
    /// `[CONSTRAINT name ]FOREIGN KEY (cols) REFERENCES table (cols)[ ON DELETE action]`
    pub fn foreign_key_constraint_sql(
        &self,
        schema: &Schema,
        table: &CreateTable,
        fk: &ForeignKey,
    ) -> Result<String> {
        let fk_name = fk.name.as_deref().filter(|n| !n.is_empty());

        if fk.col_ids.len() != fk.refer_column_ids.len() {
            return Err(DdlError::ForeignKeyArity {
                table: table.name.clone(),
                name: fk_name.unwrap_or(&fk.id).to_string(),
                columns: fk.col_ids.len(),
                referenced: fk.refer_column_ids.len(),
            });
        }

        let refer_table = schema
            .get(&fk.refer_table_id)
            .ok_or_else(|| DdlError::MissingTable(fk.refer_table_id.clone()))?;

        let cols = fk
            .col_ids
            .iter()
            .map(|col_id| self.column_name(table, col_id))
            .collect::<Result<Vec<_>>>()?;
        let refer_cols = fk
            .refer_column_ids
            .iter()
            .map(|col_id| self.column_name(refer_table, col_id))
            .collect::<Result<Vec<_>>>()?;

        let mut sql = String::new();
        if let Some(name) = fk_name {
            sql.push_str(&format!("CONSTRAINT {} ", self.config.quote(name)));
        }
        sql.push_str(&format!(
            "FOREIGN KEY ({}) REFERENCES {} ({})",
            cols.join(", "),
            self.config.quote(&refer_table.name),
            refer_cols.join(", ")
        ));
        if let Some(action) = fk.on_delete.as_deref().filter(|a| !a.is_empty()) {
            sql.push_str(&format!(" ON DELETE {action}"));
        }
        Ok(sql)
    }
}
