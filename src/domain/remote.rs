//! Records returned by remote placeholder endpoints

use crate::domain::Quote;
use serde_json::Value;

/// Category assigned to quotes pulled from a remote endpoint
pub const DEFAULT_SYNC_CATEGORY: &str = "Server Import";

/// One element of a remote JSON array. Posts carry `body`, other
/// resources only `name`; every other field is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteRecord {
    pub body: Option<String>,
    pub name: Option<String>,
}

impl RemoteRecord {
    /// Pick `body` and `name` out of an arbitrary JSON element.
    /// Non-string fields and non-object elements yield an empty record.
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| value.get(key).and_then(Value::as_str).map(String::from);
        RemoteRecord {
            body: field("body"),
            name: field("name"),
        }
    }

    /// Text for the quote: `body`, falling back to `name`.
    /// Blank values count as missing; the chosen text is kept verbatim.
    pub fn text(&self) -> Option<&str> {
        non_blank(&self.body).or_else(|| non_blank(&self.name))
    }

    /// Relabel this record as a quote in the given category
    pub fn into_quote(self, category: &str) -> Option<Quote> {
        let text = self.text()?.to_string();
        if category.trim().is_empty() {
            return None;
        }
        Some(Quote {
            text,
            category: category.to_string(),
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.trim().is_empty())
}

/// Read every element of a decoded array. Elements without usable
/// fields are kept as empty records and dropped later by `relabel`.
pub fn records_from_values(values: &[Value]) -> Vec<RemoteRecord> {
    values.iter().map(RemoteRecord::from_value).collect()
}

/// Relabel a batch of records, dropping those without usable text
pub fn relabel(records: Vec<RemoteRecord>, category: &str) -> Vec<Quote> {
    records
        .into_iter()
        .filter_map(|record| record.into_quote(category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(body: Option<&str>, name: Option<&str>) -> RemoteRecord {
        RemoteRecord {
            body: body.map(String::from),
            name: name.map(String::from),
        }
    }

    fn parse(json: &str) -> Vec<RemoteRecord> {
        let values: Vec<Value> = serde_json::from_str(json).unwrap();
        records_from_values(&values)
    }

    #[test]
    fn test_body_preferred_over_name() {
        assert_eq!(record(Some("body"), Some("name")).text(), Some("body"));
    }

    #[test]
    fn test_falls_back_to_name() {
        assert_eq!(record(None, Some("name")).text(), Some("name"));
        assert_eq!(record(Some("  "), Some("name")).text(), Some("name"));
    }

    #[test]
    fn test_no_text() {
        assert_eq!(record(None, None).text(), None);
    }

    #[test]
    fn test_text_is_kept_verbatim() {
        let quote = record(Some("  padded  "), None)
            .into_quote(DEFAULT_SYNC_CATEGORY)
            .unwrap();
        assert_eq!(quote.text, "  padded  ");
        assert_eq!(quote.category, "Server Import");
    }

    #[test]
    fn test_from_value_ignores_other_fields() {
        let records = parse(
            r#"[{"userId": 1, "id": 7, "title": "t", "body": "quia et suscipit"},
                {"postId": 1, "id": 2, "name": "id labore ex et", "email": "a@b.c"}]"#,
        );
        assert_eq!(records[0].text(), Some("quia et suscipit"));
        assert_eq!(records[1].text(), Some("id labore ex et"));
    }

    #[test]
    fn test_mixed_batch_keeps_usable_records() {
        let records = parse(
            r#"[{"id": 1, "body": "kept"},
                {"id": 2, "body": 42, "name": "fallback"},
                null,
                "just a string",
                {"id": 3, "body": null, "name": ["x"]}]"#,
        );
        assert_eq!(records.len(), 5);

        let quotes = relabel(records, DEFAULT_SYNC_CATEGORY);
        let texts: Vec<&str> = quotes.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, vec!["kept", "fallback"]);
    }

    #[test]
    fn test_relabel_sets_category_and_skips_empty() {
        let quotes = relabel(
            vec![record(Some("one"), None), record(None, None), record(None, Some("two"))],
            DEFAULT_SYNC_CATEGORY,
        );
        assert_eq!(quotes.len(), 2);
        assert!(quotes.iter().all(|q| q.category == "Server Import"));
        assert_eq!(quotes[1].text, "two");
    }
}
