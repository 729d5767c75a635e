//! Inline author objects
//!
//! Field-level rules for author mappings declared directly in front matter
//! (and for entries of the authors map, which share the same shape).

use serde::Serialize;
use serde_yaml::{Mapping, Number, Value};
use url::Url;

use crate::error::AuthorIssue;

/// Canonical name of the image field.
pub const IMAGE_URL: &str = "imageURL";

/// Legacy spelling accepted in place of [`IMAGE_URL`].
pub const IMAGE_URL_ALIAS: &str = "image_url";

const RELATIVE_BASE: &str = "https://docauthors.invalid/";

/// An author declared inline in front matter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthorInlineRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "imageURL", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl AuthorInlineRecord {
    /// Whether the record can be told apart from other authors.
    pub fn has_identity(&self) -> bool {
        self.key.is_some() || self.name.is_some() || self.image_url.is_some()
    }

    /// Best human-facing label for the author.
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .or(self.key.as_deref())
            .or(self.image_url.as_deref())
    }

    /// Fill fields missing here from `base`. Fields set on `self` win.
    pub fn merged_over(&self, base: &AuthorInlineRecord) -> AuthorInlineRecord {
        AuthorInlineRecord {
            key: self.key.clone().or_else(|| base.key.clone()),
            name: self.name.clone().or_else(|| base.name.clone()),
            title: self.title.clone().or_else(|| base.title.clone()),
            url: self.url.clone().or_else(|| base.url.clone()),
            image_url: self.image_url.clone().or_else(|| base.image_url.clone()),
        }
    }
}

/// Known fields pulled out of a mapping, with the image alias already applied.
#[derive(Default)]
struct RawFields<'a> {
    key: Option<&'a Value>,
    name: Option<&'a Value>,
    title: Option<&'a Value>,
    url: Option<&'a Value>,
    image_url: Option<&'a Value>,
}

impl<'a> RawFields<'a> {
    /// Single pass over the mapping. `image_url` is renamed to `imageURL`
    /// here and nowhere else; unknown keys are ignored.
    fn collect(map: &'a Mapping) -> Result<Self, AuthorIssue> {
        let mut fields = RawFields::default();
        let mut alias = None;

        for (key, value) in map {
            match key.as_str() {
                Some("key") => fields.key = Some(value),
                Some("name") => fields.name = Some(value),
                Some("title") => fields.title = Some(value),
                Some("url") => fields.url = Some(value),
                Some(IMAGE_URL) => fields.image_url = Some(value),
                Some(IMAGE_URL_ALIAS) => alias = Some(value),
                _ => {}
            }
        }

        if let Some(value) = alias {
            if fields.image_url.is_some() {
                return Err(AuthorIssue::AliasConflict);
            }
            fields.image_url = Some(value);
        }

        Ok(fields)
    }
}

/// Read the known fields of an author mapping without the identity check.
pub fn read_fields(map: &Mapping) -> Result<AuthorInlineRecord, AuthorIssue> {
    let raw = RawFields::collect(map)?;

    Ok(AuthorInlineRecord {
        key: optional_string(raw.key, "key")?,
        name: optional_string(raw.name, "name")?,
        title: optional_string(raw.title, "title")?,
        url: optional_url(raw.url)?,
        image_url: optional_string(raw.image_url, IMAGE_URL)?,
    })
}

/// Validate an inline author mapping.
pub fn normalize(map: &Mapping) -> Result<AuthorInlineRecord, AuthorIssue> {
    let record = read_fields(map)?;
    if !record.has_identity() {
        return Err(AuthorIssue::MissingIdentity);
    }
    Ok(record)
}

/// Front-matter strings: numbers are accepted in their textual form,
/// empty strings are not.
pub fn scalar_string(value: &Value, field: &str) -> Result<String, AuthorIssue> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        _ => {
            return Err(AuthorIssue::NotAString {
                field: field.to_string(),
            });
        }
    };

    if text.is_empty() {
        return Err(AuthorIssue::EmptyString {
            field: field.to_string(),
        });
    }
    Ok(text)
}

/// Textual form of a YAML number. Whole floats drop their fraction
/// (`1.0` reads as `1`), matching how front-matter numbers print.
fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(value) if number.is_f64() => {
            if value.is_nan() {
                "NaN".to_string()
            } else if value.is_infinite() {
                if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
            } else if value == 0.0 {
                "0".to_string()
            } else if value.fract() == 0.0 && value.abs() < 1e21 {
                format!("{value:.0}")
            } else {
                value.to_string()
            }
        }
        _ => number.to_string(),
    }
}

fn optional_string(value: Option<&Value>, field: &str) -> Result<Option<String>, AuthorIssue> {
    value.map(|v| scalar_string(v, field)).transpose()
}

fn optional_url(value: Option<&Value>) -> Result<Option<String>, AuthorIssue> {
    let url = optional_string(value, "url")?;
    match url {
        Some(candidate) if !is_valid_uri(&candidate) => {
            Err(AuthorIssue::InvalidUrl { value: candidate })
        }
        other => Ok(other),
    }
}

/// Absolute URIs and relative references are both accepted.
pub fn is_valid_uri(candidate: &str) -> bool {
    if candidate
        .chars()
        .any(|c| c.is_whitespace() || c.is_control())
    {
        return false;
    }

    match Url::parse(candidate) {
        Ok(_) => true,
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(RELATIVE_BASE)
            .and_then(|base| base.join(candidate))
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn mapping(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_normalize_name_only() {
        let record = normalize(&mapping("name: Ada")).unwrap();
        assert_eq!(record.name.as_deref(), Some("Ada"));
        assert_eq!(record.key, None);
    }

    #[test]
    fn test_normalize_all_fields() {
        let record = normalize(&mapping(
            "key: ada\nname: Ada Lovelace\ntitle: Analyst\nurl: https://example.com/ada\nimageURL: /img/ada.png",
        ))
        .unwrap();
        assert_eq!(
            record,
            AuthorInlineRecord {
                key: Some("ada".to_string()),
                name: Some("Ada Lovelace".to_string()),
                title: Some("Analyst".to_string()),
                url: Some("https://example.com/ada".to_string()),
                image_url: Some("/img/ada.png".to_string()),
            }
        );
    }

    #[test]
    fn test_title_alone_is_not_an_identity() {
        let err = normalize(&mapping("title: Engineer")).unwrap_err();
        assert_eq!(err, AuthorIssue::MissingIdentity);
    }

    #[test]
    fn test_image_url_alias_is_renamed() {
        let record = normalize(&mapping("image_url: http://x/a.png")).unwrap();
        assert_eq!(record.image_url.as_deref(), Some("http://x/a.png"));
    }

    #[test]
    fn test_image_url_alias_conflict() {
        let err = normalize(&mapping("imageURL: /a.png\nimage_url: /b.png")).unwrap_err();
        assert_eq!(err, AuthorIssue::AliasConflict);
    }

    #[test]
    fn test_unknown_fields_are_dropped() {
        let record = normalize(&mapping("name: Ada\nsocials:\n  x: ada")).unwrap();
        assert_eq!(record.name.as_deref(), Some("Ada"));
    }

    #[test]
    fn test_number_is_coerced() {
        let record = normalize(&mapping("key: 42")).unwrap();
        assert_eq!(record.key.as_deref(), Some("42"));
    }

    #[test]
    fn test_float_numbers_print_like_front_matter() {
        let text = |source: &str| scalar_string(&serde_yaml::from_str(source).unwrap(), "key");
        assert_eq!(text("1.0").unwrap(), "1");
        assert_eq!(text("-3.0").unwrap(), "-3");
        assert_eq!(text("1.5").unwrap(), "1.5");
        assert_eq!(text("-0.0").unwrap(), "0");
        assert_eq!(text("42").unwrap(), "42");
        assert_eq!(text(".nan").unwrap(), "NaN");
        assert_eq!(text("-.inf").unwrap(), "-Infinity");
    }

    #[test]
    fn test_non_string_field_rejected() {
        let err = normalize(&mapping("name: [Ada]")).unwrap_err();
        assert_eq!(
            err,
            AuthorIssue::NotAString {
                field: "name".to_string()
            }
        );

        let err = normalize(&mapping("name: Ada\ntitle: true")).unwrap_err();
        assert!(matches!(err, AuthorIssue::NotAString { .. }));
    }

    #[test]
    fn test_null_field_rejected() {
        let err = normalize(&mapping("name:")).unwrap_err();
        assert!(matches!(err, AuthorIssue::NotAString { .. }));
    }

    #[test]
    fn test_empty_string_field_rejected() {
        let err = normalize(&mapping("name: ''")).unwrap_err();
        assert_eq!(
            err,
            AuthorIssue::EmptyString {
                field: "name".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_url_rejected() {
        let err = normalize(&mapping("name: Ada\nurl: not a url")).unwrap_err();
        assert!(matches!(err, AuthorIssue::InvalidUrl { .. }));
    }

    #[test]
    fn test_is_valid_uri() {
        assert!(is_valid_uri("https://example.com"));
        assert!(is_valid_uri("mailto:ada@example.com"));
        assert!(is_valid_uri("/authors/ada"));
        assert!(is_valid_uri("ada.html"));
        assert!(!is_valid_uri("has space"));
        assert!(!is_valid_uri("http://[::1"));
        assert!(!is_valid_uri("https://exa mple.com"));
    }

    #[test]
    fn test_read_fields_skips_identity_check() {
        let record = read_fields(&mapping("title: Engineer")).unwrap();
        assert_eq!(record.title.as_deref(), Some("Engineer"));
        assert!(!record.has_identity());
    }

    #[test]
    fn test_merged_over_prefers_self() {
        let base = AuthorInlineRecord {
            key: Some("ada".to_string()),
            name: Some("Ada".to_string()),
            title: Some("Analyst".to_string()),
            ..Default::default()
        };
        let inline = AuthorInlineRecord {
            key: Some("ada".to_string()),
            title: Some("Countess".to_string()),
            ..Default::default()
        };
        let merged = inline.merged_over(&base);
        assert_eq!(merged.name.as_deref(), Some("Ada"));
        assert_eq!(merged.title.as_deref(), Some("Countess"));
    }

    #[test]
    fn test_serializes_canonical_image_field() {
        let record = normalize(&mapping("image_url: /a.png")).unwrap();
        let yaml = serde_yaml::to_string(&record).unwrap();
        assert_eq!(yaml.trim(), "imageURL: /a.png");
    }

    #[test]
    fn test_display_name_order() {
        let record = AuthorInlineRecord {
            key: Some("ada".to_string()),
            image_url: Some("/a.png".to_string()),
            ..Default::default()
        };
        assert_eq!(record.display_name(), Some("ada"));
    }
}
