//! Column DDL types
//!
//! ```text
//! column_def:
//!   column_name type [NOT NULL] [DEFAULT ( expression )] [OPTIONS ( ... )]
//! ```

use std::collections::HashMap;

use crate::Type;

/// Engine option carrying the original Cassandra type of a column
pub const CASSANDRA_TYPE_OPTION: &str = "cassandra_type";

// =============================================================================
// Default Values
// =============================================================================

/// A SQL expression kept as source text
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Expression {
    pub expression_id: String,
    pub statement: String,
}

/// Default value of a column
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct DefaultValue {
    /// When `false` the column has no default and `value` is ignored
    pub is_present: bool,
    pub value: Expression,
}

impl DefaultValue {
    /// A present default with the given expression text
    #[must_use]
    pub fn new(statement: impl Into<String>) -> Self {
        Self {
            is_present: true,
            value: Expression {
                expression_id: String::new(),
                statement: statement.into(),
            },
        }
    }

    /// Expression text, if the default is present
    #[inline]
    #[must_use]
    pub fn statement(&self) -> Option<&str> {
        self.is_present.then_some(self.value.statement.as_str())
    }
}

// =============================================================================
// Auto-generated Columns
// =============================================================================

/// How the database fills an auto-generated column
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GenerationType {
    /// Not auto-generated
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = ""))]
    None,
    /// A builtin generator, identified by the column's [`AutoGenCol::name`] (e.g. `UUID`)
    #[cfg_attr(feature = "serde", serde(rename = "Pre-defined"))]
    PreDefined,
    /// Next value of the sequence named by [`AutoGenCol::name`]
    Sequence,
}

/// Auto-generation descriptor of a column
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct AutoGenCol {
    pub name: String,
    pub generation_type: GenerationType,
}

impl AutoGenCol {
    /// Name of the builtin UUID generator
    pub const UUID: &'static str = "UUID";

    /// Values generated by the builtin UUID function
    #[must_use]
    pub fn uuid() -> Self {
        Self {
            name: Self::UUID.to_string(),
            generation_type: GenerationType::PreDefined,
        }
    }

    /// Values taken from the named sequence
    #[must_use]
    pub fn sequence(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generation_type: GenerationType::Sequence,
        }
    }

    /// Whether this is the builtin UUID generator
    #[inline]
    #[must_use]
    pub fn is_uuid(&self) -> bool {
        self.generation_type == GenerationType::PreDefined && self.name == Self::UUID
    }
}

// =============================================================================
// Column
// =============================================================================

/// Column definition
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ColumnDef {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: Type,
    #[cfg_attr(feature = "serde", serde(default))]
    pub not_null: bool,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub comment: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub auto_gen: AutoGenCol,
    #[cfg_attr(feature = "serde", serde(default))]
    pub default_value: DefaultValue,
    /// Engine-specific options, e.g. [`CASSANDRA_TYPE_OPTION`]
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "HashMap::is_empty")
    )]
    pub opts: HashMap<String, String>,
}

impl ColumnDef {
    /// Create a nullable column with no default
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ty: ty.into(),
            not_null: false,
            comment: None,
            auto_gen: AutoGenCol::default(),
            default_value: DefaultValue::default(),
            opts: HashMap::new(),
        }
    }

    /// Mark the column NOT NULL
    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// Attach a comment
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Set the default expression
    #[must_use]
    pub fn default_value(mut self, statement: impl Into<String>) -> Self {
        self.default_value = DefaultValue::new(statement);
        self
    }

    /// Set the auto-generation descriptor
    #[must_use]
    pub fn auto_gen(mut self, auto_gen: AutoGenCol) -> Self {
        self.auto_gen = auto_gen;
        self
    }

    /// Add an engine-specific option
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Length, TypeName};

    #[test]
    fn test_column_builder() {
        let col = ColumnDef::new("c1", "SingerId", TypeName::Int64)
            .not_null()
            .comment("From: singer_id bigint")
            .option(CASSANDRA_TYPE_OPTION, "bigint");

        assert_eq!(col.id, "c1");
        assert_eq!(col.ty, Type::new(TypeName::Int64));
        assert!(col.not_null);
        assert_eq!(col.comment.as_deref(), Some("From: singer_id bigint"));
        assert_eq!(
            col.opts.get(CASSANDRA_TYPE_OPTION).map(String::as_str),
            Some("bigint")
        );
    }

    #[test]
    fn test_default_value_presence() {
        assert_eq!(DefaultValue::default().statement(), None);
        assert_eq!(DefaultValue::new("0").statement(), Some("0"));

        let col = ColumnDef::new("c2", "Name", Type::string(Length::Max));
        assert!(!col.default_value.is_present);
    }

    #[test]
    fn test_auto_gen_kinds() {
        assert!(AutoGenCol::uuid().is_uuid());
        assert!(!AutoGenCol::sequence("UUID").is_uuid());
        assert_eq!(AutoGenCol::default().generation_type, GenerationType::None);
    }
}
