//! Split YAML front matter from Markdown/MDX documents.

use serde_yaml::Value;

const DELIMITER: &str = "---";

/// Split content into raw front matter (between the first `---` line and the
/// next `---` line) and body. Returns `None` if the delimiters are missing.
pub fn split_frontmatter(content: &str) -> Option<(String, String)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let lines: Vec<&str> = content.lines().collect();
    if lines.len() < 2 || lines[0].trim_end() != DELIMITER {
        return None;
    }
    let end_idx = lines[1..].iter().position(|l| l.trim_end() == DELIMITER)? + 1;
    let frontmatter = lines[1..end_idx].join("\n");
    let body = lines[end_idx + 1..].join("\n");
    Some((frontmatter, body))
}

/// Parse front matter into a YAML value plus the remaining body.
///
/// `Ok(None)` means the document has no front matter. Empty front matter
/// parses as `Value::Null`.
pub fn parse_frontmatter(content: &str) -> Result<Option<(Value, String)>, serde_yaml::Error> {
    let Some((frontmatter, body)) = split_frontmatter(content) else {
        return Ok(None);
    };
    if frontmatter.trim().is_empty() {
        return Ok(Some((Value::Null, body)));
    }
    let value: Value = serde_yaml::from_str(&frontmatter)?;
    Ok(Some((value, body)))
}

/// Get a top-level field from parsed front matter.
pub fn get_field<'a>(frontmatter: &'a Value, name: &str) -> Option<&'a Value> {
    frontmatter.as_mapping()?.get(name)
}
