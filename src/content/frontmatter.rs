//! Front-matter splitting, parsing and re-serialization

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::path::Path;

use crate::error::{ContentError, Result};

const DELIMITER: &str = "---";

/// Custom deserializer that handles both a single string and a list of strings
pub(crate) fn string_or_vec<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        fn visit_seq<S>(self, mut seq: S) -> std::result::Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Treats `key:` (null) and `key: ''` the same as an absent key
pub(crate) fn non_empty_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Split a document into its YAML block and Markdown body.
///
/// A document without a leading `---` line has no front-matter; the whole
/// text is the body. The body starts right after the closing `---` line.
pub fn split<'a>(path: &Path, text: &'a str) -> Result<(Option<&'a str>, &'a str)> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let (first_line, rest) = match text.find('\n') {
        Some(pos) => (&text[..pos], &text[pos + 1..]),
        None => (text, ""),
    };
    if first_line.trim_end() != DELIMITER {
        return Ok((None, text));
    }

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\n', '\r']) == DELIMITER {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Ok((Some(yaml), body));
        }
        offset += line.len();
    }

    Err(ContentError::UnterminatedFrontMatter {
        path: path.to_path_buf(),
    })
}

/// Parse a document's front-matter into `T`, returning it with the body.
///
/// Missing or empty front-matter deserializes from an empty mapping, so every
/// field of `T` needs a default.
pub fn parse<'a, T: DeserializeOwned>(path: &Path, text: &'a str) -> Result<(T, &'a str)> {
    let (yaml, body) = split(path, text)?;
    let yaml = match yaml {
        Some(y) if !y.trim().is_empty() => y,
        _ => "{}",
    };

    let data = serde_yaml::from_str::<T>(yaml).map_err(|source| ContentError::FrontMatter {
        path: path.to_path_buf(),
        source,
    })?;

    Ok((data, body))
}

/// Render a string as a single YAML scalar that parses back to itself
pub(crate) fn yaml_scalar(value: &str) -> String {
    if value.contains('\n') {
        return serde_json::Value::String(value.to_string()).to_string();
    }
    match serde_yaml::to_string(value) {
        Ok(s) => s.trim_end_matches('\n').to_string(),
        Err(_) => serde_json::Value::String(value.to_string()).to_string(),
    }
}

/// Render a list as a YAML flow sequence (`[a, b]`)
pub(crate) fn yaml_flow_list(items: &[String]) -> String {
    let rendered: Vec<String> = items
        .iter()
        .map(|item| {
            let plain = !item.is_empty()
                && item.trim() == item
                && item
                    .chars()
                    .all(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.' | '+' | '/'))
                && serde_yaml::from_str::<String>(item).ok().as_deref() == Some(item.as_str());
            if plain {
                item.clone()
            } else {
                serde_json::Value::String(item.clone()).to_string()
            }
        })
        .collect();
    format!("[{}]", rendered.join(", "))
}

/// `key: value` line, or a bare `key:` when there is no value
pub(crate) fn yaml_line(key: &str, value: Option<&str>) -> String {
    match value {
        Some(v) => format!("{}: {}\n", key, yaml_scalar(v)),
        None => format!("{}:\n", key),
    }
}
