//! Identifier quoting
//!
//! GoogleSQL quotes every identifier with backticks once protection is on. The
//! PostgreSQL interface folds unquoted names to lower case, so names are only
//! quoted when they collide with a reserved keyword or come from a source that
//! preserves case; everything else is left bare.

use spanner_ddl_types::Dialect;
use spanner_ddl_types::keywords::is_reserved_in_pg;

use crate::Config;

impl Config {
    /// Quote a table, column, index or constraint name according to this configuration
    ///
    /// ```
    /// use spanner_ddl::{Config, Dialect, SourceKind};
    ///
    /// let gsql = Config::new(Dialect::GoogleStandardSql);
    /// assert_eq!(gsql.quote("Singers"), "`Singers`");
    ///
    /// let pg = Config::new(Dialect::PostgreSql);
    /// assert_eq!(pg.quote("singers"), "singers");
    /// assert_eq!(pg.quote("order"), "\"order\"");
    /// assert_eq!(pg.clone().source(SourceKind::Postgres).quote("Singers"), "\"Singers\"");
    /// ```
    #[must_use]
    pub fn quote(&self, name: &str) -> String {
        if !self.protect_ids {
            return name.to_string();
        }
        match self.dialect {
            Dialect::GoogleStandardSql => format!("`{}`", name.replace('`', "\\`")),
            Dialect::PostgreSql => {
                let case_sensitive = self.source.is_some_and(|s| s.is_case_sensitive());
                if case_sensitive || is_reserved_in_pg(name) {
                    format!("\"{}\"", name.replace('"', "\"\""))
                } else {
                    name.to_string()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spanner_ddl_types::SourceKind;

    #[test]
    fn test_unprotected_names_are_never_quoted() {
        for dialect in [Dialect::GoogleStandardSql, Dialect::PostgreSql] {
            let config = Config::new(dialect)
                .protect_ids(false)
                .source(SourceKind::Postgres);
            assert_eq!(config.quote("select"), "select");
            assert_eq!(config.quote("Singers"), "Singers");
        }
    }

    #[test]
    fn test_google_sql_always_uses_backticks() {
        let config = Config::new(Dialect::GoogleStandardSql).source(SourceKind::MySql);
        assert_eq!(config.quote("id"), "`id`");
        assert_eq!(config.quote("order"), "`order`");
        assert_eq!(config.quote("odd`name"), "`odd\\`name`");
    }

    #[test]
    fn test_pg_quotes_reserved_keywords_only() {
        let config = Config::new(Dialect::PostgreSql).source(SourceKind::MySql);
        assert_eq!(config.quote("Order"), "\"Order\"");
        assert_eq!(config.quote("user"), "\"user\"");
        assert_eq!(config.quote("orders"), "orders");
        assert_eq!(config.quote("CamelCase"), "CamelCase");
    }

    #[test]
    fn test_pg_quotes_everything_from_case_sensitive_sources() {
        for source in [SourceKind::Postgres, SourceKind::PgDump] {
            let config = Config::new(Dialect::PostgreSql).source(source);
            assert_eq!(config.quote("CamelCase"), "\"CamelCase\"");
            assert_eq!(config.quote("say\"hi"), "\"say\"\"hi\"");
        }
    }
}
