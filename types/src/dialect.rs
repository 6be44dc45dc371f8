//! Spanner SQL dialects
//!
//! A Spanner database is created with exactly one of two SQL surfaces. Every printer
//! in `spanner-ddl` branches on this enum rather than on loose string comparisons.

/// SQL dialect of the target Spanner database
///
/// # Examples
///
/// ```
/// use spanner_ddl_types::Dialect;
///
/// let dialect = Dialect::PostgreSql;
/// assert!(dialect.is_postgres());
/// assert_eq!(dialect.as_str(), "postgresql");
///
/// assert_eq!(Dialect::default(), Dialect::GoogleStandardSql);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Dialect {
    /// GoogleSQL - backtick identifiers, `STRING(MAX)`, primary key after the body
    #[default]
    GoogleStandardSql,

    /// PostgreSQL interface - double-quoted identifiers, `VARCHAR(n)`, primary key in the body
    #[cfg_attr(feature = "serde", serde(rename = "postgresql"))]
    PostgreSql,
}

impl Dialect {
    /// Returns `true` for the PostgreSQL interface
    #[inline]
    #[must_use]
    pub const fn is_postgres(&self) -> bool {
        matches!(self, Dialect::PostgreSql)
    }

    /// Parse a dialect from a string (case-insensitive)
    ///
    /// Accepts `"google_standard_sql"`, `"googlesql"` and `"gsql"` for GoogleSQL and
    /// `"postgresql"`, `"postgres"` and `"pg"` for the PostgreSQL interface.
    ///
    /// ```
    /// use spanner_ddl_types::Dialect;
    ///
    /// assert_eq!(Dialect::parse("google_standard_sql"), Some(Dialect::GoogleStandardSql));
    /// assert_eq!(Dialect::parse("PG"), Some(Dialect::PostgreSql));
    /// assert_eq!(Dialect::parse("mysql"), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("google_standard_sql")
            || s.eq_ignore_ascii_case("googlesql")
            || s.eq_ignore_ascii_case("gsql")
        {
            Some(Dialect::GoogleStandardSql)
        } else if s.eq_ignore_ascii_case("postgresql")
            || s.eq_ignore_ascii_case("postgres")
            || s.eq_ignore_ascii_case("pg")
        {
            Some(Dialect::PostgreSql)
        } else {
            None
        }
    }

    /// Get the dialect name as used in Spanner database metadata
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Dialect::GoogleStandardSql => "google_standard_sql",
            Dialect::PostgreSql => "postgresql",
        }
    }

    /// Keyword introducing the non-key columns carried by an index
    #[must_use]
    pub const fn storing_keyword(&self) -> &'static str {
        match self {
            Dialect::GoogleStandardSql => "STORING",
            Dialect::PostgreSql => "INCLUDE",
        }
    }
}

impl core::fmt::Display for Dialect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Dialect {
    type Err = DialectParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::parse(s).ok_or(DialectParseError)
    }
}

/// Error returned when parsing an unknown dialect string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectParseError;

impl core::fmt::Display for DialectParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown spanner dialect")
    }
}

impl std::error::Error for DialectParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_parse() {
        assert_eq!(
            Dialect::parse("google_standard_sql"),
            Some(Dialect::GoogleStandardSql)
        );
        assert_eq!(Dialect::parse("GoogleSQL"), Some(Dialect::GoogleStandardSql));
        assert_eq!(Dialect::parse("postgresql"), Some(Dialect::PostgreSql));
        assert_eq!(Dialect::parse("Postgres"), Some(Dialect::PostgreSql));
        assert_eq!(Dialect::parse("pg"), Some(Dialect::PostgreSql));
        assert_eq!(Dialect::parse("sqlite"), None);
        assert_eq!(Dialect::parse(""), None);
    }

    #[test]
    fn test_dialect_from_str() {
        assert_eq!("pg".parse::<Dialect>(), Ok(Dialect::PostgreSql));
        assert_eq!("oracle".parse::<Dialect>(), Err(DialectParseError));
    }

    #[test]
    fn test_dialect_display() {
        assert_eq!(
            format!("{}", Dialect::GoogleStandardSql),
            "google_standard_sql"
        );
        assert_eq!(format!("{}", Dialect::PostgreSql), "postgresql");
    }

    #[test]
    fn test_storing_keyword() {
        assert_eq!(Dialect::GoogleStandardSql.storing_keyword(), "STORING");
        assert_eq!(Dialect::PostgreSql.storing_keyword(), "INCLUDE");
    }
}
