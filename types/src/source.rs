//! Source database kinds
//!
//! The kind of database a schema was converted from only matters for identifier
//! quoting: PostgreSQL sources preserve identifier case, so their names must stay
//! quoted when targeting the PostgreSQL interface.

/// Kind of database the schema was discovered from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    MySql,
    MySqlDump,
    Postgres,
    PgDump,
    SqlServer,
    Oracle,
    DynamoDb,
    Cassandra,
    Csv,
}

impl SourceKind {
    /// Parse a source kind from its driver name (case-insensitive)
    ///
    /// ```
    /// use spanner_ddl_types::SourceKind;
    ///
    /// assert_eq!(SourceKind::parse("pg_dump"), Some(SourceKind::PgDump));
    /// assert_eq!(SourceKind::parse("MySQL"), Some(SourceKind::MySql));
    /// assert_eq!(SourceKind::parse("db2"), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        const ALL: [SourceKind; 9] = [
            SourceKind::MySql,
            SourceKind::MySqlDump,
            SourceKind::Postgres,
            SourceKind::PgDump,
            SourceKind::SqlServer,
            SourceKind::Oracle,
            SourceKind::DynamoDb,
            SourceKind::Cassandra,
            SourceKind::Csv,
        ];
        ALL.into_iter().find(|k| k.as_str().eq_ignore_ascii_case(s))
    }

    /// Driver name of this source
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            SourceKind::MySql => "mysql",
            SourceKind::MySqlDump => "mysqldump",
            SourceKind::Postgres => "postgres",
            SourceKind::PgDump => "pg_dump",
            SourceKind::SqlServer => "sqlserver",
            SourceKind::Oracle => "oracle",
            SourceKind::DynamoDb => "dynamodb",
            SourceKind::Cassandra => "cassandra",
            SourceKind::Csv => "csv",
        }
    }

    /// Whether identifiers coming from this source are case-sensitive
    #[inline]
    #[must_use]
    pub const fn is_case_sensitive(&self) -> bool {
        matches!(self, SourceKind::Postgres | SourceKind::PgDump)
    }
}

impl core::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for SourceKind {
    type Err = SourceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SourceKind::parse(s).ok_or(SourceParseError)
    }
}

/// Error returned when parsing an unknown source kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceParseError;

impl core::fmt::Display for SourceParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown source database kind")
    }
}

impl std::error::Error for SourceParseError {}

// =============================================================================
// Serde Implementation
// =============================================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for SourceKind {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de> Deserialize<'de> for SourceKind {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let name = String::deserialize(deserializer)?;
            SourceKind::parse(&name).ok_or_else(|| {
                serde::de::Error::custom(format!("unknown source database kind `{name}`"))
            })
        }
    }
}
