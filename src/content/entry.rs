//! Behavior shared by blog posts and projects

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Slideshow;

/// Record id: numeric timestamps in practice, but authors also write other
/// numbers (negative, fractional) or strings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryId::Number(n) => write!(f, "{}", n),
            EntryId::Text(s) => f.write_str(s),
        }
    }
}

impl EntryId {
    /// Render for a front-matter line; text ids that look numeric stay quoted
    pub(crate) fn to_yaml(&self) -> String {
        match self {
            EntryId::Number(n) => n.to_string(),
            EntryId::Text(s) => super::frontmatter::yaml_scalar(s),
        }
    }
}

/// A content record that the collection helpers can query
pub trait Entry {
    fn id(&self) -> &EntryId;

    fn slug(&self) -> &str;

    fn title(&self) -> &str;

    fn category(&self) -> Option<&str>;

    /// Tags for posts, tech stack for projects
    fn labels(&self) -> &[String];

    /// Free-text fields matched by search, besides title, labels and content
    fn summary(&self) -> &str;

    /// Raw Markdown body
    fn content(&self) -> &str;

    fn slideshows(&self) -> &[Slideshow];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct Doc {
        id: EntryId,
    }

    fn id(yaml: &str) -> EntryId {
        serde_yaml::from_str::<Doc>(yaml).unwrap().id
    }

    #[test]
    fn test_any_number_is_an_id() {
        assert_eq!(id("id: 1722470400000"), EntryId::Number(1722470400000u64.into()));
        assert_eq!(id("id: -5"), EntryId::Number((-5).into()));

        let fractional = id("id: 1.5");
        assert_eq!(fractional.to_string(), "1.5");
        assert_eq!(id(&format!("id: {}", fractional.to_yaml())), fractional);
    }

    #[test]
    fn test_text_ids() {
        assert_eq!(id("id: intro-post"), EntryId::Text("intro-post".to_string()));

        let quoted = id("id: '42'");
        assert_eq!(quoted, EntryId::Text("42".to_string()));
        assert_eq!(id(&format!("id: {}", quoted.to_yaml())), quoted);
    }

    #[test]
    fn test_json_keeps_numbers_numeric() {
        let json = serde_json::to_string(&EntryId::Number((-5).into())).unwrap();
        assert_eq!(json, "-5");
    }
}
