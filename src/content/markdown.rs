//! Markdown inspection: word counts and slideshow placeholders

use lazy_static::lazy_static;
use pulldown_cmark::{Event, Options, Parser};
use regex::Regex;

/// Reading speed used for `readTime` estimates
const WORDS_PER_MINUTE: usize = 200;

lazy_static! {
    static ref SLIDESHOW_PLACEHOLDER: Regex =
        Regex::new(r"<!-- slideshow:([^:\s]+)(?::([^ ]+))? -->").unwrap();
}

/// A `<!-- slideshow:<id>[:<mode>] -->` comment in a Markdown body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideshowRef<'a> {
    pub id: &'a str,
    pub mode: Option<&'a str>,
}

/// Count the words of the rendered text, ignoring markup and raw HTML
pub fn word_count(markdown: &str) -> usize {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH);

    parser
        .map(|event| match event {
            Event::Text(text) | Event::Code(text) => text.split_whitespace().count(),
            _ => 0,
        })
        .sum()
}

/// Estimate a `readTime` value like `"5 min read"`
pub fn estimate_read_time(markdown: &str) -> String {
    let minutes = word_count(markdown).div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{} min read", minutes)
}

/// Find slideshow placeholders in document order
pub fn slideshow_refs(markdown: &str) -> Vec<SlideshowRef<'_>> {
    SLIDESHOW_PLACEHOLDER
        .captures_iter(markdown)
        .filter_map(|caps| {
            let id = caps.get(1)?.as_str();
            let mode = caps.get(2).map(|m| m.as_str());
            Some(SlideshowRef { id, mode })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_skips_markup() {
        let md = "# Title here\n\nSome **bold** text and `code`\n\n<!-- slideshow:x -->\n";
        assert_eq!(word_count(md), 7);
    }

    #[test]
    fn test_read_time() {
        assert_eq!(estimate_read_time(""), "1 min read");
        let long = "word ".repeat(401);
        assert_eq!(estimate_read_time(&long), "3 min read");
    }

    #[test]
    fn test_slideshow_refs() {
        let md = "intro\n<!-- slideshow:mission-overview:buttons -->\ntext\n<!-- slideshow:launch-day -->\n";
        let refs = slideshow_refs(md);
        assert_eq!(
            refs,
            vec![
                SlideshowRef {
                    id: "mission-overview",
                    mode: Some("buttons")
                },
                SlideshowRef {
                    id: "launch-day",
                    mode: None
                },
            ]
        );
    }
}
