//! CREATE TABLE statements
//!
//! The two dialects differ in where the primary key and the interleave clause
//! go:
//!
//! ```text
//! GoogleSQL:  CREATE TABLE t (
//!             	c INT64,
//!             ) PRIMARY KEY (c),
//!             INTERLEAVE IN PARENT p ON DELETE CASCADE
//!
//! PostgreSQL: CREATE TABLE t (
//!             	c INT8,
//!             	PRIMARY KEY (c)
//!             ) INTERLEAVE IN PARENT p ON DELETE CASCADE
//! ```

use spanner_ddl_types::{
    CheckConstraint, CreateTable, Dialect, IndexKey, InterleaveType, InterleavedParent, Schema,
};

use super::DdlGenerator;
use crate::error::{DdlError, Result};

impl DdlGenerator {
    /// Render `CREATE TABLE` for `table`, resolving its parent through `schema`
    pub fn create_table_sql(&self, schema: &Schema, table: &CreateTable) -> Result<String> {
        trace_statement!("create_table", table.name);

        let name = self.config.quote(&table.name);
        let banner = self.table_comment(table);
        let cols = self.column_lines(table)?;
        let checks = check_constraints_sql(&table.check_constraints, self.config.dialect);
        let keys = self.key_parts_sql(table, &table.primary_keys)?;
        let interleave = match &table.parent_table {
            Some(parent) if !parent.id.is_empty() => self.interleave_sql(schema, parent),
            _ => String::new(),
        };

        if keys.is_empty() {
            return Ok(format!(
                "{banner}CREATE TABLE {name} (\n{cols}{checks}){interleave}"
            ));
        }

        Ok(match self.config.dialect {
            Dialect::GoogleStandardSql => format!(
                "{banner}CREATE TABLE {name} (\n{cols}{checks}) PRIMARY KEY ({keys}){interleave}"
            ),
            Dialect::PostgreSql => format!(
                "{banner}CREATE TABLE {name} (\n{cols}{checks}\tPRIMARY KEY ({keys})\n){interleave}"
            ),
        })
    }

    /// Key parts sorted by their order, comma separated
    pub(super) fn key_parts_sql(&self, table: &CreateTable, keys: &[IndexKey]) -> Result<String> {
        let parts = IndexKey::sorted(keys)
            .into_iter()
            .map(|key| {
                let col = self.column_name(table, &key.col_id)?;
                Ok(if key.desc { format!("{col} DESC") } else { col })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(parts.join(", "))
    }

    fn table_comment(&self, table: &CreateTable) -> String {
        match table.comment.as_deref() {
            Some(comment) if self.config.comments && !comment.is_empty() => {
                format!("--\n-- {comment}\n--\n")
            }
            _ => String::new(),
        }
    }

    /// One `\t<column>,` line per column; comments are aligned one column past the
    /// longest line
    fn column_lines(&self, table: &CreateTable) -> Result<String> {
        let mut lines = Vec::with_capacity(table.col_ids.len());
        for col_id in &table.col_ids {
            let column = table
                .col_defs
                .get(col_id)
                .ok_or_else(|| DdlError::MissingColumn {
                    table: table.name.clone(),
                    column: col_id.clone(),
                })?;
            let (sql, comment) = self.column_sql(column);
            lines.push((format!("\t{sql},"), comment));
        }

        let width = lines
            .iter()
            .map(|(line, _)| line.chars().count())
            .max()
            .unwrap_or(0);

        let mut cols = String::new();
        for (line, comment) in &lines {
            cols.push_str(line);
            if let Some(comment) = comment.filter(|_| self.config.comments) {
                let pad = width - line.chars().count();
                cols.push_str(&" ".repeat(pad));
                cols.push_str(" -- ");
                cols.push_str(comment);
            }
            cols.push('\n');
        }
        Ok(cols)
    }

    /// Interleave clause with its leading separator, empty when the parent is
    /// not part of the schema
    fn interleave_sql(&self, schema: &Schema, parent: &InterleavedParent) -> String {
        let Some(parent_table) = schema.get(&parent.id) else {
            return String::new();
        };
        let parent_name = self.config.quote(&parent_table.name);

        let lead = match self.config.dialect {
            Dialect::GoogleStandardSql => ",\n",
            Dialect::PostgreSql => " ",
        };
        let mut sql = format!(
            "{lead}INTERLEAVE {} {parent_name}",
            parent.interleave_type.as_sql()
        );

        // ON DELETE only applies to INTERLEAVE IN PARENT
        if parent.interleave_type == InterleaveType::InParent {
            if let Some(action) = parent.on_delete.as_deref().filter(|a| !a.is_empty()) {
                sql.push_str(" ON DELETE ");
                sql.push_str(action);
            }
        }
        sql
    }
}

/// Check constraint lines. GoogleSQL closes the table body right after them, so
/// the last line loses its comma there; PostgreSQL keeps it for the primary key.
fn check_constraints_sql(checks: &[CheckConstraint], dialect: Dialect) -> String {
    let lines: Vec<String> = checks
        .iter()
        .map(|check| match check.name.as_deref().filter(|n| !n.is_empty()) {
            Some(name) => format!("\tCONSTRAINT {name} CHECK {}", check.expr),
            None => format!("\tCHECK {}", check.expr),
        })
        .collect();

    if lines.is_empty() {
        return String::new();
    }
    match dialect {
        Dialect::GoogleStandardSql => format!("{}\n", lines.join(",\n")),
        Dialect::PostgreSql => format!("{},\n", lines.join(",\n")),
    }
}
