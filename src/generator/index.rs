//! CREATE INDEX statements

use spanner_ddl_types::{CreateIndex, CreateTable};

use super::DdlGenerator;
use crate::error::Result;

impl DdlGenerator {
    /// Render `CREATE INDEX` for an index owned by `table`
    ///
    /// Primary key columns are always part of an index, so they are left out of the
    /// STORING (INCLUDE) clause, which is dropped entirely when nothing remains.
    pub fn create_index_sql(&self, table: &CreateTable, index: &CreateIndex) -> Result<String> {
        trace_statement!("create_index", index.name);

        let keys = self.key_parts_sql(table, &index.keys)?;
        let unique = if index.unique { "UNIQUE " } else { "" };

        let stored = index
            .stored_column_ids
            .iter()
            .filter(|col_id| !table.is_primary_key_column(col_id))
            .map(|col_id| self.column_name(table, col_id))
            .collect::<Result<Vec<_>>>()?;
        let storing = if stored.is_empty() {
            String::new()
        } else {
            format!(
                " {} ({})",
                self.config.dialect.storing_keyword(),
                stored.join(", ")
            )
        };

        Ok(format!(
            "CREATE {unique}INDEX {} ON {} ({keys}){storing}",
            self.config.quote(&index.name),
            self.config.quote(&table.name),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, DdlError};
    use spanner_ddl_types::{ColumnDef, Dialect, IndexKey, Length, Type, TypeName};

    fn singers() -> CreateTable {
        CreateTable::new("t1", "Singers")
            .column(ColumnDef::new("c1", "SingerId", TypeName::Int64).not_null())
            .column(ColumnDef::new("c2", "FirstName", Type::string(Length::Limit(1024))))
            .column(ColumnDef::new("c3", "LastName", Type::string(Length::Limit(1024))))
            .primary_key(IndexKey::new("c1", 1))
    }

    fn by_name() -> CreateIndex {
        CreateIndex::new("i1", "SingersByName", "t1")
            .key(IndexKey::new("c3", 2).desc())
            .key(IndexKey::new("c2", 1))
    }

    #[test]
    fn test_index_keys_follow_order() {
        let generator = DdlGenerator::new(Config::new(Dialect::GoogleStandardSql));
        assert_eq!(
            generator.create_index_sql(&singers(), &by_name()).unwrap(),
            "CREATE INDEX `SingersByName` ON `Singers` (`FirstName`, `LastName` DESC)"
        );
    }

    #[test]
    fn test_unique_index_with_storing() {
        let index = CreateIndex::new("i2", "SingersByLast", "t1")
            .unique()
            .key(IndexKey::new("c3", 1))
            .storing("c2")
            .storing("c1");

        let gsql = DdlGenerator::new(Config::new(Dialect::GoogleStandardSql));
        assert_eq!(
            gsql.create_index_sql(&singers(), &index).unwrap(),
            "CREATE UNIQUE INDEX `SingersByLast` ON `Singers` (`LastName`) STORING (`FirstName`)"
        );

        let pg = DdlGenerator::new(Config::new(Dialect::PostgreSql));
        assert_eq!(
            pg.create_index_sql(&singers(), &index).unwrap(),
            "CREATE UNIQUE INDEX SingersByLast ON Singers (LastName) INCLUDE (FirstName)"
        );
    }

    #[test]
    fn test_storing_only_primary_key_is_dropped() {
        let index = by_name().storing("c1");
        let generator = DdlGenerator::new(Config::new(Dialect::GoogleStandardSql));
        let sql = generator.create_index_sql(&singers(), &index).unwrap();
        assert!(!sql.contains("STORING"));
    }

    #[test]
    fn test_missing_key_column() {
        let index = CreateIndex::new("i3", "Broken", "t1").key(IndexKey::new("c9", 1));
        let generator = DdlGenerator::new(Config::new(Dialect::GoogleStandardSql));
        assert!(matches!(
            generator.create_index_sql(&singers(), &index),
            Err(DdlError::MissingColumn { column, .. }) if column == "c9"
        ));
    }
}
