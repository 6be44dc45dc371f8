//! CREATE SEQUENCE statements

use spanner_ddl_types::{Dialect, Sequence, SequenceKind};

use super::DdlGenerator;

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl DdlGenerator {
    /// Render `CREATE SEQUENCE`
    ///
    /// GoogleSQL takes the kind, skip range and start counter as `OPTIONS`;
    /// PostgreSQL spells them as clauses and needs both skip range bounds.
    pub fn create_sequence_sql(&self, seq: &Sequence) -> String {
        trace_statement!("create_sequence", seq.name);

        let mut sql = format!("CREATE SEQUENCE {}", self.config.quote(&seq.name));
        let bit_reversed = seq.sequence_kind == Some(SequenceKind::BitReversedPositive);

        match self.config.dialect {
            Dialect::GoogleStandardSql => {
                let mut options = Vec::new();
                if bit_reversed {
                    options.push("sequence_kind='bit_reversed_positive'".to_string());
                }
                if let Some(min) = non_empty(&seq.skip_range_min) {
                    options.push(format!("skip_range_min = {min}"));
                }
                if let Some(max) = non_empty(&seq.skip_range_max) {
                    options.push(format!("skip_range_max = {max}"));
                }
                if let Some(counter) = non_empty(&seq.start_with_counter) {
                    options.push(format!("start_with_counter = {counter}"));
                }
                if !options.is_empty() {
                    sql.push_str(&format!(" OPTIONS ({})", options.join(", ")));
                }
            }
            Dialect::PostgreSql => {
                if bit_reversed {
                    sql.push_str(" BIT_REVERSED_POSITIVE");
                }
                if let (Some(min), Some(max)) =
                    (non_empty(&seq.skip_range_min), non_empty(&seq.skip_range_max))
                {
                    sql.push_str(&format!(" SKIP RANGE {min} {max}"));
                }
                if let Some(counter) = non_empty(&seq.start_with_counter) {
                    sql.push_str(&format!(" START COUNTER WITH {counter}"));
                }
            }
        }
        sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[test]
    fn test_google_sql_sequence() {
        let generator = DdlGenerator::new(Config::new(Dialect::GoogleStandardSql));

        let seq = Sequence::new("s1", "OrderSeq")
            .skip_range("1", "1000")
            .start_with_counter("50");
        assert_eq!(
            generator.create_sequence_sql(&seq),
            "CREATE SEQUENCE `OrderSeq` OPTIONS (sequence_kind='bit_reversed_positive', \
             skip_range_min = 1, skip_range_max = 1000, start_with_counter = 50)"
        );

        let bare = Sequence {
            id: "s2".to_string(),
            name: "Bare".to_string(),
            ..Sequence::default()
        };
        assert_eq!(generator.create_sequence_sql(&bare), "CREATE SEQUENCE `Bare`");
    }

    #[test]
    fn test_pg_sequence() {
        let generator = DdlGenerator::new(Config::new(Dialect::PostgreSql));

        let seq = Sequence::new("s1", "OrderSeq")
            .skip_range("1", "1000")
            .start_with_counter("50");
        assert_eq!(
            generator.create_sequence_sql(&seq),
            "CREATE SEQUENCE OrderSeq BIT_REVERSED_POSITIVE SKIP RANGE 1 1000 START COUNTER WITH 50"
        );

        // a one-sided skip range is not expressible
        let mut partial = Sequence::new("s2", "Partial").start_with_counter("7");
        partial.skip_range_min = Some("1".to_string());
        assert_eq!(
            generator.create_sequence_sql(&partial),
            "CREATE SEQUENCE Partial BIT_REVERSED_POSITIVE START COUNTER WITH 7"
        );

        let no_kind = Sequence {
            sequence_kind: None,
            ..Sequence::new("s3", "Plain").start_with_counter("3")
        };
        assert_eq!(
            generator.create_sequence_sql(&no_kind),
            "CREATE SEQUENCE Plain START COUNTER WITH 3"
        );
    }
}
