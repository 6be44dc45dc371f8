//! Reserved keywords of the PostgreSQL interface
//!
//! Identifiers matching one of these (case-insensitively) must be double-quoted
//! when the target database uses the PostgreSQL dialect.

/// Reserved keywords of the PostgreSQL dialect
pub const PG_RESERVED_KEYWORDS: &[&str] = &[
    "ALL", "ANALYSE", "ANALYZE", "AND", "ANY", "ARRAY", "AS", "ASC", "ASYMMETRIC",
    "AUTHORIZATION", "BETWEEN", "BIGINT", "BINARY", "BIT", "BOOLEAN", "BOTH", "CASE", "CAST",
    "CHAR", "CHARACTER", "CHECK", "COALESCE", "COLLATE", "COLLATION", "COLUMN", "CONCURRENTLY",
    "CONSTRAINT", "CREATE", "CROSS", "CURRENT_CATALOG", "CURRENT_DATE", "CURRENT_ROLE",
    "CURRENT_SCHEMA", "CURRENT_TIME", "CURRENT_TIMESTAMP", "CURRENT_USER", "DEC", "DECIMAL",
    "DEFAULT", "DEFERRABLE", "DESC", "DISTINCT", "DO", "ELSE", "END", "EXCEPT", "EXISTS",
    "EXTRACT", "FALSE", "FETCH", "FLOAT", "FOR", "FOREIGN", "FREEZE", "FROM", "FULL", "GRANT",
    "GREATEST", "GROUP", "GROUPING", "HAVING", "ILIKE", "IN", "INITIALLY", "INNER", "INOUT",
    "INT", "INTEGER", "INTERSECT", "INTERVAL", "INTO", "IS", "ISNULL", "JOIN", "LATERAL",
    "LEADING", "LEAST", "LEFT", "LIKE", "LIMIT", "LOCALTIME", "LOCALTIMESTAMP", "NATIONAL",
    "NATURAL", "NCHAR", "NONE", "NORMALIZE", "NOT", "NOTNULL", "NULL", "NULLIF", "NUMERIC",
    "OFFSET", "ON", "ONLY", "OR", "ORDER", "OUT", "OUTER", "OVERLAPS", "OVERLAY", "PLACING",
    "POSITION", "PRECISION", "PRIMARY", "REAL", "REFERENCES", "RETURNING", "RIGHT", "ROW",
    "SELECT", "SESSION_USER", "SETOF", "SIMILAR", "SMALLINT", "SOME", "SUBSTRING", "SYMMETRIC",
    "TABLE", "TABLESAMPLE", "THEN", "TIME", "TIMESTAMP", "TO", "TRAILING", "TREAT", "TRIM",
    "TRUE", "UNION", "UNIQUE", "USER", "USING", "VALUES", "VARCHAR", "VARIADIC", "VERBOSE",
    "WHEN", "WHERE", "WINDOW", "WITH", "XMLATTRIBUTES", "XMLCONCAT", "XMLELEMENT", "XMLEXISTS",
    "XMLFOREST", "XMLNAMESPACES", "XMLPARSE", "XMLPI", "XMLROOT", "XMLSERIALIZE", "XMLTABLE",
];

/// Whether `identifier` is reserved in the PostgreSQL dialect (case-insensitive)
///
/// ```
/// use spanner_ddl_types::keywords::is_reserved_in_pg;
///
/// assert!(is_reserved_in_pg("order"));
/// assert!(is_reserved_in_pg("User"));
/// assert!(!is_reserved_in_pg("orders"));
/// ```
#[must_use]
pub fn is_reserved_in_pg(identifier: &str) -> bool {
    PG_RESERVED_KEYWORDS
        .iter()
        .any(|keyword| keyword.eq_ignore_ascii_case(identifier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_uppercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for keyword in PG_RESERVED_KEYWORDS {
            assert_eq!(*keyword, keyword.to_ascii_uppercase());
            assert!(seen.insert(*keyword), "duplicate keyword {keyword}");
        }
    }

    #[test]
    fn test_reserved_lookup_ignores_case() {
        assert!(is_reserved_in_pg("SELECT"));
        assert!(is_reserved_in_pg("select"));
        assert!(is_reserved_in_pg("CurRent_User"));
        assert!(!is_reserved_in_pg(""));
        assert!(!is_reserved_in_pg("singers"));
    }

    #[test]
    fn test_reserved_lookup_folds_ascii_only() {
        // U+017F LONG S and U+212A KELVIN SIGN do not match `s` and `K`
        assert!(!is_reserved_in_pg("\u{17f}elect"));
        assert!(!is_reserved_in_pg("CHEC\u{212a}"));
        assert!(is_reserved_in_pg("SELECT"));
    }
}
