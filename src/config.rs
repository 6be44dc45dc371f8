//! Printer configuration
//!
//! [`Config`] decides what [`DdlGenerator`](crate::DdlGenerator) emits and how:
//! which dialect, whether identifiers are quoted, and which statement groups are
//! included. It is normally built in code, but with the `serde` feature it can
//! also be read from TOML:
//!
//! ```toml
//! dialect = "postgresql"
//! source = "pg_dump"
//! comments = true
//! protect_ids = true
//! ```

use spanner_ddl_types::{Dialect, SourceKind};

/// Controls how the schema is printed
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Print table and column comments
    pub comments: bool,
    /// Quote table and column names (backticks, or double quotes where needed for PostgreSQL)
    pub protect_ids: bool,
    /// Print CREATE TABLE and CREATE INDEX statements
    pub tables: bool,
    /// Print foreign keys as ALTER TABLE statements
    pub foreign_keys: bool,
    /// Target dialect
    pub dialect: Dialect,
    /// Database the schema was converted from, used for case-sensitivity when quoting
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub source: Option<SourceKind>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            comments: false,
            protect_ids: true,
            tables: true,
            foreign_keys: true,
            dialect: Dialect::default(),
            source: None,
        }
    }
}

impl Config {
    /// Default configuration targeting `dialect`
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn comments(mut self, comments: bool) -> Self {
        self.comments = comments;
        self
    }

    #[must_use]
    pub fn protect_ids(mut self, protect_ids: bool) -> Self {
        self.protect_ids = protect_ids;
        self
    }

    #[must_use]
    pub fn tables(mut self, tables: bool) -> Self {
        self.tables = tables;
        self
    }

    #[must_use]
    pub fn foreign_keys(mut self, foreign_keys: bool) -> Self {
        self.foreign_keys = foreign_keys;
        self
    }

    #[must_use]
    pub fn source(mut self, source: SourceKind) -> Self {
        self.source = Some(source);
        self
    }
}

#[cfg(feature = "serde")]
impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::parse(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.dialect, Dialect::GoogleStandardSql);
        assert!(config.protect_ids);
        assert!(config.tables);
        assert!(config.foreign_keys);
        assert!(!config.comments);
        assert_eq!(config.source, None);
    }

    #[test]
    fn test_builder() {
        let config = Config::new(Dialect::PostgreSql)
            .comments(true)
            .foreign_keys(false)
            .source(SourceKind::MySql);
        assert_eq!(config.dialect, Dialect::PostgreSql);
        assert!(config.comments);
        assert!(!config.foreign_keys);
        assert_eq!(config.source, Some(SourceKind::MySql));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_parse_config() {
        let toml = r#"
dialect = "postgresql"
source = "pg_dump"
comments = true
"#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.dialect, Dialect::PostgreSql);
        assert_eq!(config.source, Some(SourceKind::PgDump));
        assert!(config.comments);
        // unspecified fields keep their defaults
        assert!(config.protect_ids);
        assert!(config.tables);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_parse_rejects_unknown_dialect() {
        let err = Config::parse(r#"dialect = "mysql""#).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spanner-ddl.toml");
        std::fs::write(&path, "dialect = \"google_standard_sql\"\nprotect_ids = false\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.dialect, Dialect::GoogleStandardSql);
        assert!(!config.protect_ids);

        let missing = Config::from_file(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::IoError(_)));
    }
}
