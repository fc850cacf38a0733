//! Lookup, filtering and search over a collection

use super::list::ALL;
use crate::content::{Entry, Project, ProjectType};

/// The entry whose slug equals `slug`
pub fn find_by_slug<'a, T: Entry>(entries: &'a [T], slug: &str) -> Option<&'a T> {
    entries.iter().find(|e| e.slug() == slug)
}

/// Entries in `category`; `"All"` selects everything
pub fn filter_by_category<'a, T: Entry>(entries: &'a [T], category: &str) -> Vec<&'a T> {
    if category == ALL {
        return entries.iter().collect();
    }
    entries
        .iter()
        .filter(|e| e.category() == Some(category))
        .collect()
}

/// Case-insensitive substring search over title, summary, labels and content
pub fn search<'a, T: Entry>(entries: &'a [T], term: &str) -> Vec<&'a T> {
    let term = term.to_lowercase();
    entries.iter().filter(|e| matches(*e, &term)).collect()
}

fn matches<T: Entry>(entry: &T, term: &str) -> bool {
    entry.title().to_lowercase().contains(term)
        || entry.summary().to_lowercase().contains(term)
        || entry
            .labels()
            .iter()
            .any(|label| label.to_lowercase().contains(term))
        || entry.content().to_lowercase().contains(term)
}

/// Projects presented as `kind`
pub fn projects_by_type(projects: &[Project], kind: ProjectType) -> Vec<&Project> {
    projects.iter().filter(|p| p.kind == kind).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::test_support::{post, project};

    #[test]
    fn test_find_by_slug() {
        let posts = vec![
            post("first", "2024-01-01", None, &[]),
            post("second", "2024-01-02", None, &[]),
        ];
        assert_eq!(find_by_slug(&posts, "second").map(|p| p.slug.as_str()), Some("second"));
        assert!(find_by_slug(&posts, "missing").is_none());
    }

    #[test]
    fn test_filter_by_category() {
        let posts = vec![
            post("a", "2024-01-01", Some("Tech"), &[]),
            post("b", "2024-01-02", Some("Science"), &[]),
        ];
        assert_eq!(filter_by_category(&posts, "All").len(), 2);
        let tech = filter_by_category(&posts, "Tech");
        assert_eq!(tech.len(), 1);
        assert_eq!(tech[0].slug, "a");
        assert!(filter_by_category(&posts, "tech").is_empty());
    }

    #[test]
    fn test_search_fields() {
        let mut with_excerpt = post("a", "2024-01-01", None, &[]);
        with_excerpt.excerpt = "About Embedded Rust".to_string();
        let tagged = post("b", "2024-01-01", None, &["Microcontrollers"]);
        let mut body = post("c", "2024-01-01", None, &[]);
        body.content = "Flashing firmware over SWD".to_string();
        let posts = vec![with_excerpt, tagged, body];

        let slugs = |term: &str| -> Vec<String> {
            search(&posts, term).into_iter().map(|p| p.slug.clone()).collect()
        };
        assert_eq!(slugs("embedded"), vec!["a"]);
        assert_eq!(slugs("MICRO"), vec!["b"]);
        assert_eq!(slugs("swd"), vec!["c"]);
        assert_eq!(slugs("").len(), 3);
        assert!(slugs("nothing here").is_empty());
    }

    #[test]
    fn test_search_projects_by_subtitle_and_tech() {
        let mut lead = project("lead", Some(2024), &["KiCad"]);
        lead.subtitle = "Electrical Lead".to_string();
        let projects = vec![lead, project("other", Some(2023), &["Python"])];

        assert_eq!(search(&projects, "electrical").len(), 1);
        assert_eq!(search(&projects, "kicad")[0].slug, "lead");
        assert_eq!(projects_by_type(&projects, ProjectType::Detailed).len(), 2);
        assert!(projects_by_type(&projects, ProjectType::GithubOnly).is_empty());
    }
}
