//! Slug generation for newly authored entries

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DISALLOWED: Regex = Regex::new(r"[^a-z0-9 -]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref HYPHENS: Regex = Regex::new(r"-+").unwrap();
}

/// URL slug for a title: lowercase ASCII letters, digits and single hyphens
pub fn slugify(title: &str) -> String {
    let lower = title.to_lowercase();
    let kept = DISALLOWED.replace_all(&lower, "");
    let hyphenated = WHITESPACE.replace_all(&kept, "-");
    let collapsed = HYPHENS.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}
