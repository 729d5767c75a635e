//! Front-matter author validation
//!
//! A document's `authors` field may be absent, a single author key, a single
//! inline author object, or a list mixing both. [`validate`] checks the shape
//! and normalizes it into an ordered list of [`AuthorEntry`] values; anything
//! else is rejected with a [`FrontMatterAuthorError`].

pub mod record;
pub mod registry;

use serde::Serialize;
use serde_yaml::Value;

use crate::error::{AuthorIssue, FrontMatterAuthorError};

pub use record::AuthorInlineRecord;
pub use registry::{AuthorRegistry, ResolvedAuthor};

/// Front-matter field holding the authors.
pub const DEFAULT_FIELD: &str = "authors";

/// One author as declared in front matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AuthorEntry {
    /// Reference to an author defined in the authors map
    Key(String),
    /// Author declared in place
    Inline(AuthorInlineRecord),
}

impl AuthorEntry {
    /// Registry key this entry points at, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            AuthorEntry::Key(key) => Some(key.as_str()),
            AuthorEntry::Inline(record) => record.key.as_deref(),
        }
    }
}

/// Validate the raw `authors` front-matter value.
pub fn validate(raw: Option<&Value>) -> Result<Vec<AuthorEntry>, FrontMatterAuthorError> {
    validate_field(raw, DEFAULT_FIELD)
}

/// Validate the raw value of a front-matter field named `field`.
///
/// `field` becomes the error label; list elements are labelled `field[i]`.
pub fn validate_field(
    raw: Option<&Value>,
    field: &str,
) -> Result<Vec<AuthorEntry>, FrontMatterAuthorError> {
    match raw {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Sequence(items)) => items
            .iter()
            .enumerate()
            .map(|(index, item)| validate_entry(item, &format!("{field}[{index}]")))
            .collect(),
        Some(value) => validate_entry(value, field).map(|entry| vec![entry]),
    }
}

fn validate_entry(value: &Value, label: &str) -> Result<AuthorEntry, FrontMatterAuthorError> {
    let entry = match value {
        Value::Null => Err(AuthorIssue::SparseElement),
        Value::String(_) | Value::Number(_) => {
            record::scalar_string(value, "key").map(AuthorEntry::Key)
        }
        Value::Mapping(map) => record::normalize(map).map(AuthorEntry::Inline),
        Value::Bool(_) => Err(AuthorIssue::UnsupportedType { found: "a boolean" }),
        Value::Sequence(_) => Err(AuthorIssue::UnsupportedType {
            found: "a nested list",
        }),
        Value::Tagged(_) => Err(AuthorIssue::UnsupportedType {
            found: "a tagged value",
        }),
    };

    entry.map_err(|issue| FrontMatterAuthorError::new(label, issue))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn yaml(source: &str) -> Value {
        serde_yaml::from_str(source).unwrap()
    }

    fn inline_name(name: &str) -> AuthorEntry {
        AuthorEntry::Inline(AuthorInlineRecord {
            name: Some(name.to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn test_absent_is_empty() {
        assert_eq!(validate(None).unwrap(), Vec::new());
        assert_eq!(validate(Some(&Value::Null)).unwrap(), Vec::new());
    }

    #[test]
    fn test_string_is_key_reference() {
        let entries = validate(Some(&yaml("ada"))).unwrap();
        assert_eq!(entries, vec![AuthorEntry::Key("ada".to_string())]);
    }

    #[test]
    fn test_empty_string_rejected() {
        let err = validate(Some(&yaml("''"))).unwrap_err();
        assert_eq!(err.label, "authors");
    }

    #[test]
    fn test_number_key_is_coerced() {
        let entries = validate(Some(&yaml("7"))).unwrap();
        assert_eq!(entries, vec![AuthorEntry::Key("7".to_string())]);
    }

    #[test]
    fn test_object_with_name() {
        let entries = validate(Some(&yaml("name: Ada"))).unwrap();
        assert_eq!(entries, vec![inline_name("Ada")]);
    }

    #[test]
    fn test_object_with_title_only_fails() {
        let err = validate(Some(&yaml("title: Engineer"))).unwrap_err();
        assert_eq!(err.issue, AuthorIssue::MissingIdentity);
        assert_eq!(
            err.to_string(),
            "\"authors\" does not look like a valid blog post author. Please use an author key or an author object (with a key and/or name)."
        );
    }

    #[test]
    fn test_object_with_legacy_image_field() {
        let entries = validate(Some(&yaml("image_url: http://x/a.png"))).unwrap();
        assert_eq!(
            entries,
            vec![AuthorEntry::Inline(AuthorInlineRecord {
                image_url: Some("http://x/a.png".to_string()),
                ..Default::default()
            })]
        );
    }

    #[test]
    fn test_sparse_list_fails() {
        let err = validate(Some(&yaml("[ada, {name: Grace}, null]"))).unwrap_err();
        assert_eq!(err.issue, AuthorIssue::SparseElement);
        assert_eq!(err.label, "authors[2]");
        assert!(err.to_string().starts_with("\"authors[2]\" does not look like"));
    }

    #[test]
    fn test_list_preserves_order() {
        let entries = validate(Some(&yaml("[ada, {name: Grace}]"))).unwrap();
        assert_eq!(
            entries,
            vec![AuthorEntry::Key("ada".to_string()), inline_name("Grace")]
        );
    }

    #[test]
    fn test_empty_list_is_empty() {
        assert_eq!(validate(Some(&yaml("[]"))).unwrap(), Vec::new());
    }

    #[test]
    fn test_invalid_element_reports_its_index() {
        let err = validate(Some(&yaml("[ada, {title: Engineer}]"))).unwrap_err();
        assert_eq!(err.label, "authors[1]");
        assert_eq!(err.issue, AuthorIssue::MissingIdentity);
    }

    #[test]
    fn test_nested_list_fails() {
        let err = validate(Some(&yaml("[[ada]]"))).unwrap_err();
        assert!(matches!(err.issue, AuthorIssue::UnsupportedType { .. }));
    }

    #[test]
    fn test_tagged_value_fails() {
        let err = validate(Some(&yaml("!person ada"))).unwrap_err();
        assert_eq!(err.label, "authors");
        assert_eq!(
            err.issue,
            AuthorIssue::UnsupportedType {
                found: "a tagged value"
            }
        );

        let err = validate(Some(&yaml("[ada, !person grace]"))).unwrap_err();
        assert_eq!(err.label, "authors[1]");
    }

    #[test]
    fn test_bool_fails() {
        let err = validate(Some(&yaml("true"))).unwrap_err();
        assert_eq!(err.label, "authors");
        assert!(matches!(err.issue, AuthorIssue::UnsupportedType { .. }));
    }

    #[test]
    fn test_invalid_url_fails() {
        let err = validate(Some(&yaml("{name: Ada, url: 'not a url'}"))).unwrap_err();
        assert!(matches!(err.issue, AuthorIssue::InvalidUrl { .. }));
    }

    #[test]
    fn test_custom_field_label() {
        let err = validate_field(Some(&yaml("[ada, null]")), "contributors").unwrap_err();
        assert_eq!(err.label, "contributors[1]");
    }

    #[test]
    fn test_validation_is_idempotent() {
        let source = yaml(
            "[ada, {name: Grace, image_url: /img/grace.png, url: 'https://grace.dev'}, {key: alan, title: Logician}]",
        );
        let first = validate(Some(&source)).unwrap();
        let reserialized = serde_yaml::to_value(&first).unwrap();
        let second = validate(Some(&reserialized)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_entry_reserializes_as_list() {
        let first = validate(Some(&yaml("name: Ada"))).unwrap();
        let reserialized = serde_yaml::to_value(&first).unwrap();
        assert!(reserialized.is_sequence());
        assert_eq!(validate(Some(&reserialized)).unwrap(), first);
    }

    #[test]
    fn test_entry_key() {
        let entries = validate(Some(&yaml("[ada, {key: alan}, {name: Grace}]"))).unwrap();
        let keys: Vec<_> = entries.iter().map(AuthorEntry::key).collect();
        assert_eq!(keys, vec![Some("ada"), Some("alan"), None]);
    }
}
