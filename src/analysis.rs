//! Sample analysis queries
//!
//! Two read-only reporting queries over the finished star schema. They are
//! illustrations of the schema, not part of the load contract: the external
//! driver never needs to run them. The source versions carried two syntax
//! defects (an ORDER BY on a nonexistent `plays` alias, and a SELECT list
//! missing its SELECT keyword); both are repaired here.

/// Play counts per (gender, artist), top 5
pub fn gender_artist_preference() -> String {
    "SELECT\n\
     \x20   u.gender,\n\
     \x20   a.artist_id,\n\
     \x20   a.name AS artist_name,\n\
     \x20   COUNT(*) AS num_plays\n\
     FROM songplays sp\n\
     JOIN users u ON sp.user_id = u.user_id\n\
     JOIN artists a ON sp.artist_id = a.artist_id\n\
     GROUP BY u.gender, a.artist_id, a.name\n\
     ORDER BY num_plays DESC\n\
     LIMIT 5;"
        .to_string()
}

/// Play counts per hour of day, top 5
pub fn time_of_day_activity() -> String {
    "SELECT\n\
     \x20   t.hour,\n\
     \x20   COUNT(*) AS num_plays\n\
     FROM songplays sp\n\
     JOIN time t ON sp.start_time = t.start_time\n\
     GROUP BY t.hour\n\
     ORDER BY num_plays DESC\n\
     LIMIT 5;"
        .to_string()
}

/// Both sample queries
pub fn analysis_statements() -> Vec<String> {
    vec![gender_artist_preference(), time_of_day_activity()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queries_are_read_only() {
        for sql in analysis_statements() {
            assert!(sql.starts_with("SELECT"));
            for verb in ["INSERT", "UPDATE", "DELETE", "DROP", "CREATE"] {
                assert!(!sql.contains(verb), "{} in read-only query", verb);
            }
        }
    }

    #[test]
    fn test_order_by_references_selected_alias() {
        for sql in analysis_statements() {
            assert!(sql.contains("COUNT(*) AS num_plays"));
            assert!(sql.contains("ORDER BY num_plays DESC"));
            assert!(sql.contains("LIMIT 5;"));
        }
    }
}
