//! Spanner column types
//!
//! The schema model always speaks GoogleSQL type names. The PostgreSQL interface
//! spells some of them differently; [`TypeName::pg_name`] and [`TypeName::from_pg_sql`]
//! are the two directions of that mapping.
//!
//! ```text
//!   GoogleSQL      PostgreSQL
//!   ─────────      ──────────
//!   BYTES     <->  BYTEA
//!   FLOAT32   <->  FLOAT4
//!   FLOAT64   <->  FLOAT8
//!   INT64     <->  INT8
//!   STRING    <->  VARCHAR
//!   TIMESTAMP <->  TIMESTAMPTZ
//!   JSON      <->  JSONB
//! ```

use crate::Dialect;

/// Maximum length of a `STRING` column in characters
pub const STRING_MAX_LENGTH: i64 = 2_621_440;
/// Maximum length of a `BYTES` column in bytes
pub const BYTES_MAX_LENGTH: i64 = 10_485_760;
/// Maximum total size of the non-key columns of a row
pub const MAX_NON_KEY_COLUMN_LENGTH: i64 = 1_677_721_600;
/// Length printed for `VARCHAR` when the column asks for the maximum, since the
/// PostgreSQL interface has no `MAX` keyword
pub const PG_MAX_LENGTH: i64 = STRING_MAX_LENGTH;

/// GoogleSQL/PostgreSQL type name pairs, for types whose spelling differs
pub const PG_TYPE_MAP: [(TypeName, &str); 7] = [
    (TypeName::Bytes, "BYTEA"),
    (TypeName::Float32, "FLOAT4"),
    (TypeName::Float64, "FLOAT8"),
    (TypeName::Int64, "INT8"),
    (TypeName::String, "VARCHAR"),
    (TypeName::Timestamp, "TIMESTAMPTZ"),
    (TypeName::Json, "JSONB"),
];

/// Canonical Spanner type vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum TypeName {
    Bool,
    Bytes,
    Date,
    Float32,
    Float64,
    Int64,
    String,
    Timestamp,
    Numeric,
    Json,
}

impl TypeName {
    /// GoogleSQL spelling of the type
    #[must_use]
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::Bool => "BOOL",
            Self::Bytes => "BYTES",
            Self::Date => "DATE",
            Self::Float32 => "FLOAT32",
            Self::Float64 => "FLOAT64",
            Self::Int64 => "INT64",
            Self::String => "STRING",
            Self::Timestamp => "TIMESTAMP",
            Self::Numeric => "NUMERIC",
            Self::Json => "JSON",
        }
    }

    /// PostgreSQL spelling, if it differs from the GoogleSQL one
    #[must_use]
    pub fn pg_name(&self) -> Option<&'static str> {
        PG_TYPE_MAP
            .iter()
            .find(|(name, _)| name == self)
            .map(|(_, pg)| *pg)
    }

    /// Spelling of the type in the given dialect
    #[must_use]
    pub fn sql_for(&self, dialect: Dialect) -> &'static str {
        match dialect {
            Dialect::GoogleStandardSql => self.as_sql(),
            Dialect::PostgreSql => self.pg_name().unwrap_or(self.as_sql()),
        }
    }

    /// Parse a GoogleSQL type name (case-insensitive)
    #[must_use]
    pub fn from_sql(s: &str) -> Option<Self> {
        const ALL: [TypeName; 10] = [
            TypeName::Bool,
            TypeName::Bytes,
            TypeName::Date,
            TypeName::Float32,
            TypeName::Float64,
            TypeName::Int64,
            TypeName::String,
            TypeName::Timestamp,
            TypeName::Numeric,
            TypeName::Json,
        ];
        ALL.into_iter().find(|t| t.as_sql().eq_ignore_ascii_case(s))
    }

    /// Parse a PostgreSQL interface type name back into the canonical vocabulary
    ///
    /// ```
    /// use spanner_ddl_types::TypeName;
    ///
    /// assert_eq!(TypeName::from_pg_sql("float8"), Some(TypeName::Float64));
    /// assert_eq!(TypeName::from_pg_sql("NUMERIC"), Some(TypeName::Numeric));
    /// assert_eq!(TypeName::from_pg_sql("SERIAL"), None);
    /// ```
    #[must_use]
    pub fn from_pg_sql(s: &str) -> Option<Self> {
        PG_TYPE_MAP
            .iter()
            .find(|(_, pg)| pg.eq_ignore_ascii_case(s))
            .map(|(name, _)| *name)
            .or_else(|| Self::from_sql(s).filter(|t| t.pg_name().is_none()))
    }

    /// Whether the type carries a length
    #[inline]
    #[must_use]
    pub const fn is_variable_length(&self) -> bool {
        matches!(self, Self::String | Self::Bytes)
    }
}

impl core::fmt::Display for TypeName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Length of a `STRING` or `BYTES` column
///
/// Serializes as an integer, with `i64::MAX` standing for [`Length::Max`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "i64", into = "i64"))]
pub enum Length {
    /// The largest length the column type allows
    #[default]
    Max,
    /// An explicit length
    Limit(i64),
}

impl From<i64> for Length {
    fn from(len: i64) -> Self {
        if len == i64::MAX {
            Length::Max
        } else {
            Length::Limit(len)
        }
    }
}

impl From<Length> for i64 {
    fn from(len: Length) -> Self {
        match len {
            Length::Max => i64::MAX,
            Length::Limit(n) => n,
        }
    }
}

/// Type of a column
///
/// ```text
/// type:
///    { BOOL | INT64 | FLOAT32 | FLOAT64 | STRING( length ) | BYTES( length ) | DATE
///      | TIMESTAMP | NUMERIC | JSON }
/// length:
///    { int64_value | MAX }
/// ```
///
/// `len` is ignored for fixed-size types. An array of arrays cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Type {
    pub name: TypeName,
    #[cfg_attr(feature = "serde", serde(default))]
    pub len: Length,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_array: bool,
}

impl Type {
    /// Create a scalar type with the maximum length
    #[must_use]
    pub const fn new(name: TypeName) -> Self {
        Self {
            name,
            len: Length::Max,
            is_array: false,
        }
    }

    /// `STRING(len)`
    #[must_use]
    pub const fn string(len: Length) -> Self {
        Self {
            len,
            ..Self::new(TypeName::String)
        }
    }

    /// `BYTES(len)`
    #[must_use]
    pub const fn bytes(len: Length) -> Self {
        Self {
            len,
            ..Self::new(TypeName::Bytes)
        }
    }

    /// Turn this type into an array of itself
    #[must_use]
    pub const fn array(self) -> Self {
        Self {
            is_array: true,
            ..self
        }
    }

    /// Render the type as it appears in a column definition
    ///
    /// The PostgreSQL interface has neither array columns nor a length on `BYTEA`.
    /// Arrays fall back to `VARCHAR` at the maximum length; callers are not expected
    /// to hand arrays to that dialect in the first place.
    ///
    /// ```
    /// use spanner_ddl_types::{Dialect, Length, Type, TypeName};
    ///
    /// let ty = Type::string(Length::Max);
    /// assert_eq!(ty.to_sql(Dialect::GoogleStandardSql), "STRING(MAX)");
    /// assert_eq!(ty.to_sql(Dialect::PostgreSql), "VARCHAR(2621440)");
    ///
    /// let tags = Type::string(Length::Limit(32)).array();
    /// assert_eq!(tags.to_sql(Dialect::GoogleStandardSql), "ARRAY<STRING(32)>");
    /// assert_eq!(Type::new(TypeName::Int64).to_sql(Dialect::PostgreSql), "INT8");
    /// ```
    #[must_use]
    pub fn to_sql(&self, dialect: Dialect) -> String {
        match dialect {
            Dialect::GoogleStandardSql => {
                let mut sql = self.name.as_sql().to_string();
                if self.name.is_variable_length() {
                    match self.len {
                        Length::Max => sql.push_str("(MAX)"),
                        Length::Limit(n) => sql.push_str(&format!("({n})")),
                    }
                }
                if self.is_array {
                    sql = format!("ARRAY<{sql}>");
                }
                sql
            }
            Dialect::PostgreSql => {
                if self.is_array {
                    return format!("VARCHAR({PG_MAX_LENGTH})");
                }
                let name = self.name.sql_for(dialect);
                if self.name != TypeName::String {
                    return name.to_string();
                }
                match self.len {
                    Length::Max => format!("{name}({PG_MAX_LENGTH})"),
                    Length::Limit(n) => format!("{name}({n})"),
                }
            }
        }
    }
}

impl From<TypeName> for Type {
    fn from(name: TypeName) -> Self {
        Type::new(name)
    }
}
