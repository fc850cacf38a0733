//! List site content

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::content::{Entry, Project, ProjectType};
use crate::helpers;
use crate::Folio;

/// Narrowing applied to `posts` and `projects` listings
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub category: Option<String>,
    pub search: Option<String>,
    pub kind: Option<ProjectType>,
}

impl ListFilter {
    fn apply<'a, T: Entry>(&self, entries: &'a [T]) -> Vec<&'a T> {
        let mut selected: Vec<&T> = match &self.category {
            Some(category) => helpers::filter_by_category(entries, category),
            None => entries.iter().collect(),
        };
        if let Some(term) = &self.search {
            let hits: Vec<&str> = helpers::search(entries, term)
                .into_iter()
                .map(|e| e.slug())
                .collect();
            selected.retain(|e| hits.contains(&e.slug()));
        }
        selected
    }
}

/// Lines describing the requested content type
pub fn render(folio: &Folio, content_type: &str, filter: &ListFilter) -> Result<Vec<String>> {
    let loader = ContentLoader::new(folio);
    let mut lines = Vec::new();

    match content_type {
        "post" | "posts" => {
            let posts = loader.load_posts()?;
            let selected = filter.apply(&posts);
            lines.push(format!("Posts ({}):", selected.len()));
            for post in selected {
                let date = post
                    .date
                    .as_deref()
                    .map(helpers::format_date)
                    .unwrap_or_else(|| "Undated".to_string());
                lines.push(format!("  {} - {} [{}]", date, post.title, post.slug));
            }
        }
        "project" | "projects" => {
            let projects = loader.load_projects()?;
            let projects: Vec<Project> = match filter.kind {
                Some(kind) => helpers::projects_by_type(&projects, kind)
                    .into_iter()
                    .cloned()
                    .collect(),
                None => projects,
            };
            let selected = filter.apply(&projects);
            lines.push(format!("Projects ({}):", selected.len()));
            for project in selected {
                let year = project.year.map(|y| y.to_string()).unwrap_or_default();
                lines.push(format!(
                    "  {:>4} - {} ({}) [{}]",
                    year, project.title, project.kind, project.slug
                ));
            }
        }
        "category" | "categories" => {
            let posts = loader.load_posts()?;
            let categories = helpers::categories(&posts);
            lines.push(format!("Categories ({}):", categories.len() - 1));
            for category in categories.iter().skip(1) {
                let count = helpers::filter_by_category(&posts, category).len();
                lines.push(format!("  {} ({})", category, count));
            }
        }
        "tag" | "tags" => {
            let posts = loader.load_posts()?;
            let counts = helpers::label_counts(&posts);
            lines.push(format!("Tags ({}):", counts.len()));
            for (tag, count) in counts {
                lines.push(format!("  {} ({})", tag, count));
            }
        }
        "tech" => {
            let projects = loader.load_projects()?;
            let tech = helpers::labels(&projects);
            lines.push(format!("Tech ({}):", tech.len()));
            for item in tech {
                lines.push(format!("  {}", item));
            }
        }
        "year" | "years" => {
            let projects = loader.load_projects()?;
            let years = helpers::years(&projects);
            lines.push(format!("Years ({}):", years.len()));
            for year in years {
                lines.push(format!("  {}", year));
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, project, category, tag, tech, year",
                content_type
            );
        }
    }

    Ok(lines)
}

/// Pretty JSON of the entry with `slug`, as it appears in the generated module
pub fn show(folio: &Folio, slug: &str, project: bool) -> Result<String> {
    let loader = ContentLoader::new(folio);
    let json = if project {
        let projects = loader.load_projects()?;
        helpers::find_by_slug(&projects, slug)
            .map(serde_json::to_string_pretty)
            .transpose()?
    } else {
        let posts = loader.load_posts()?;
        helpers::find_by_slug(&posts, slug)
            .map(serde_json::to_string_pretty)
            .transpose()?
    };
    json.ok_or_else(|| anyhow::anyhow!("No entry with slug: {}", slug))
}

/// Run the list command
pub fn run(folio: &Folio, content_type: &str, filter: &ListFilter) -> Result<()> {
    for line in render(folio, content_type, filter)? {
        println!("{}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn site() -> (TempDir, Folio) {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        fs::create_dir_all(&folio.blog_dir).unwrap();
        fs::create_dir_all(&folio.projects_dir).unwrap();
        fs::write(
            folio.blog_dir.join("a.md"),
            "---\ntitle: Rust Notes\ndate: 2024-01-15\ncategory: Tech\ntags: [rust, cli]\n---\nOwnership.\n",
        )
        .unwrap();
        fs::write(
            folio.blog_dir.join("b.md"),
            "---\ntitle: Rockets\ndate: 2024-06-01\ncategory: Science\ntags: [rust]\n---\nThrust.\n",
        )
        .unwrap();
        fs::write(
            folio.projects_dir.join("p.md"),
            "---\ntitle: Probe\nyear: 2023\ntype: github-only\ntech: [C, Rust]\n---\n",
        )
        .unwrap();
        fs::write(
            folio.projects_dir.join("q.md"),
            "---\ntitle: Quasar\nyear: 2025\ntech: [Rust]\n---\n",
        )
        .unwrap();
        (tmp, folio)
    }

    #[test]
    fn test_listing_does_not_create_directories() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();

        for kind in ["posts", "projects", "tags", "years"] {
            let lines = render(&folio, kind, &ListFilter::default()).unwrap();
            assert_eq!(lines.len(), 1, "{}", kind);
        }
        assert!(show(&folio, "missing", false).is_err());

        assert!(!folio.blog_dir.exists());
        assert!(!folio.projects_dir.exists());
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_list_posts() {
        let (_tmp, folio) = site();
        let lines = render(&folio, "posts", &ListFilter::default()).unwrap();
        assert_eq!(
            lines,
            vec![
                "Posts (2):",
                "  June 1, 2024 - Rockets [b]",
                "  January 15, 2024 - Rust Notes [a]",
            ]
        );
    }

    #[test]
    fn test_filters() {
        let (_tmp, folio) = site();
        let filter = ListFilter {
            category: Some("Tech".to_string()),
            ..Default::default()
        };
        assert_eq!(render(&folio, "post", &filter).unwrap().len(), 2);

        let filter = ListFilter {
            search: Some("THRUST".to_string()),
            ..Default::default()
        };
        let lines = render(&folio, "post", &filter).unwrap();
        assert_eq!(lines[1], "  June 1, 2024 - Rockets [b]");

        let filter = ListFilter {
            kind: Some(ProjectType::GithubOnly),
            ..Default::default()
        };
        let lines = render(&folio, "projects", &filter).unwrap();
        assert_eq!(lines, vec!["Projects (1):", "  2023 - Probe (github-only) [p]"]);
    }

    #[test]
    fn test_aggregates() {
        let (_tmp, folio) = site();
        assert_eq!(
            render(&folio, "tags", &ListFilter::default()).unwrap(),
            vec!["Tags (2):", "  rust (2)", "  cli (1)"]
        );
        assert_eq!(
            render(&folio, "categories", &ListFilter::default()).unwrap(),
            vec!["Categories (2):", "  Science (1)", "  Tech (1)"]
        );
        assert_eq!(
            render(&folio, "tech", &ListFilter::default()).unwrap(),
            vec!["Tech (2):", "  Rust", "  C"]
        );
        assert_eq!(
            render(&folio, "years", &ListFilter::default()).unwrap(),
            vec!["Years (2):", "  2025", "  2023"]
        );
        assert!(render(&folio, "pages", &ListFilter::default()).is_err());
    }

    #[test]
    fn test_show() {
        let (_tmp, folio) = site();
        let json = show(&folio, "q", true).unwrap();
        assert!(json.contains("\"title\": \"Quasar\""));
        assert!(show(&folio, "missing", false).is_err());
    }
}
