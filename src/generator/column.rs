//! Column definitions, default values and auto-generation clauses

use spanner_ddl_types::{
    AutoGenCol, CASSANDRA_TYPE_OPTION, ColumnDef, Dialect, GenerationType, Type, TypeName,
};

use super::DdlGenerator;

/// GoogleSQL types whose default expression is wrapped in a CAST
const GSQL_CAST_DEFAULTS: [TypeName; 4] = [
    TypeName::Float32,
    TypeName::Numeric,
    TypeName::Bool,
    TypeName::Bytes,
];

/// PostgreSQL type names whose default expression is wrapped in a CAST
const PG_CAST_DEFAULTS: [&str; 7] = [
    "FLOAT8", "FLOAT4", "REAL", "NUMERIC", "DECIMAL", "BOOL", "BYTEA",
];

impl DdlGenerator {
    /// Column definition line without the leading tab or trailing comma, and the
    /// column comment to print beside it
    pub fn column_sql<'a>(&self, column: &'a ColumnDef) -> (String, Option<&'a str>) {
        let dialect = self.config.dialect;
        if dialect.is_postgres() && column.ty.is_array {
            warn_array_downgrade!(column.name);
        }

        let mut sql = format!(
            "{} {}",
            self.config.quote(&column.name),
            column.ty.to_sql(dialect)
        );
        if column.not_null {
            sql.push_str(" NOT NULL");
        }
        if let Some(statement) = column.default_value.statement() {
            sql.push_str(&default_value_sql(dialect, &column.ty, statement));
        }
        sql.push_str(&auto_gen_sql(dialect, &column.auto_gen));

        if let Some(cassandra_type) = column
            .opts
            .get(CASSANDRA_TYPE_OPTION)
            .filter(|t| !t.is_empty())
        {
            sql.push_str(&format!(
                " OPTIONS ({CASSANDRA_TYPE_OPTION} = '{cassandra_type}')"
            ));
        }

        let comment = column.comment.as_deref().filter(|c| !c.is_empty());
        (sql, comment)
    }
}

fn default_value_sql(dialect: Dialect, ty: &Type, statement: &str) -> String {
    let cast = match dialect {
        Dialect::GoogleStandardSql => GSQL_CAST_DEFAULTS
            .contains(&ty.name)
            .then(|| ty.name.as_sql()),
        Dialect::PostgreSql => {
            let name = ty.name.sql_for(dialect);
            PG_CAST_DEFAULTS.contains(&name).then_some(name)
        }
    };

    match cast {
        Some(name) => format!(" DEFAULT (CAST({statement} AS {name}))"),
        None => format!(" DEFAULT ({statement})"),
    }
}

fn auto_gen_sql(dialect: Dialect, auto_gen: &AutoGenCol) -> String {
    if auto_gen.is_uuid() {
        return match dialect {
            Dialect::GoogleStandardSql => " DEFAULT (GENERATE_UUID())".to_string(),
            Dialect::PostgreSql => " DEFAULT (spanner.generate_uuid())".to_string(),
        };
    }
    if auto_gen.generation_type == GenerationType::Sequence {
        return match dialect {
            Dialect::GoogleStandardSql => format!(
                " DEFAULT (GET_NEXT_SEQUENCE_VALUE(SEQUENCE {}))",
                auto_gen.name
            ),
            Dialect::PostgreSql => format!(" DEFAULT NEXTVAL('{}')", auto_gen.name),
        };
    }
    String::new()
}
