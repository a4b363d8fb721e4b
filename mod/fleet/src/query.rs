//! Filter and sort fragments for list queries.
//!
//! Filters accumulate `?N` placeholders in declaration order so the
//! parameter vector always lines up with the generated WHERE clause.

use mottag_sql::Value;

/// Incrementally built WHERE clause.
#[derive(Debug, Default)]
pub struct Filter {
    clauses: Vec<String>,
    params: Vec<Value>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact equality on an indexed column.
    pub fn eq(&mut self, column: &str, value: Value) {
        let n = self.params.len() + 1;
        self.clauses.push(format!("{column} = ?{n}"));
        self.params.push(value);
    }

    /// Case-sensitive substring match (SQLite `LIKE` is ASCII
    /// case-insensitive, `instr` is not).
    pub fn contains(&mut self, column: &str, needle: &str) {
        let n = self.params.len() + 1;
        self.clauses.push(format!("instr({column}, ?{n}) > 0"));
        self.params.push(Value::Text(needle.to_string()));
    }

    /// ` WHERE ...` fragment, empty when no filters were added.
    pub fn where_sql(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.clauses.join(" AND "))
        }
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn into_params(self) -> Vec<Value> {
        self.params
    }
}

/// Resolve a `sortBy` value against the allowed keys for an entity.
/// Unrecognized (or absent) keys fall back silently to the default
/// column.
pub fn sort_column<'a>(
    sort_by: Option<&str>,
    keys: &[(&str, &'a str)],
    default: &'a str,
) -> &'a str {
    let Some(requested) = sort_by else {
        return default;
    };
    let requested = requested.to_ascii_lowercase();
    keys.iter()
        .find(|(key, _)| *key == requested)
        .map(|(_, column)| *column)
        .unwrap_or(default)
}

/// `sortDir=desc` (any case) sorts descending; everything else ascending.
pub fn is_desc(sort_dir: Option<&str>) -> bool {
    sort_dir.is_some_and(|d| d.eq_ignore_ascii_case("desc"))
}

/// ` ORDER BY ...` fragment.
pub fn order_sql(column: &str, desc: bool) -> String {
    let dir = if desc { "DESC" } else { "ASC" };
    format!(" ORDER BY {column} {dir}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_placeholders_line_up() {
        let mut f = Filter::new();
        f.eq("yard_id", Value::Text("y1".into()));
        f.eq("status", Value::Text("AVAILABLE".into()));
        assert_eq!(f.where_sql(), " WHERE yard_id = ?1 AND status = ?2");
        assert_eq!(f.params().len(), 2);
    }

    #[test]
    fn empty_filter_has_no_where() {
        assert_eq!(Filter::new().where_sql(), "");
    }

    #[test]
    fn contains_uses_instr() {
        let mut f = Filter::new();
        f.contains("name", "Central");
        assert_eq!(f.where_sql(), " WHERE instr(name, ?1) > 0");
    }

    #[test]
    fn sort_key_fallback_is_silent() {
        let keys = [("name", "name")];
        assert_eq!(sort_column(Some("name"), &keys, "name"), "name");
        assert_eq!(sort_column(Some("NAME"), &keys, "name"), "name");
        assert_eq!(sort_column(Some("bogus"), &keys, "name"), "name");
        assert_eq!(sort_column(None, &keys, "name"), "name");
    }

    #[test]
    fn sort_direction() {
        assert!(is_desc(Some("desc")));
        assert!(is_desc(Some("DESC")));
        assert!(!is_desc(Some("asc")));
        assert!(!is_desc(None));
        assert_eq!(order_sql("plate", true), " ORDER BY plate DESC");
        assert_eq!(order_sql("plate", false), " ORDER BY plate ASC");
    }
}
