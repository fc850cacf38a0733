//! Content loader - reads a collection directory into sorted records

use serde::de::DeserializeOwned;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;
use walkdir::WalkDir;

use super::frontmatter;
use super::markdown;
use super::post::BlogFrontMatter;
use super::project::ProjectFrontMatter;
use super::{BlogPost, Entry, EntryId, Project};
use crate::error::{ContentError, Result};
use crate::Folio;

/// A parsed file before normalization
struct Source<F> {
    path: PathBuf,
    front_matter: F,
    body: String,
    modified_ms: u64,
}

/// Loads content from the configured collection directories
pub struct ContentLoader<'a> {
    folio: &'a Folio,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(folio: &'a Folio) -> Self {
        Self { folio }
    }

    /// Load all blog posts, newest first
    pub fn load_posts(&self) -> Result<Vec<BlogPost>> {
        let sources = read_sources::<BlogFrontMatter>(&self.folio.blog_dir)?;
        let ids = resolve_ids(
            sources
                .iter()
                .map(|s| (s.path.as_path(), s.front_matter.id.as_ref(), s.modified_ms)),
        )?;

        let mut posts = sources
            .into_iter()
            .zip(ids)
            .map(|(s, id)| {
                let post = BlogPost::from_front_matter(&s.path, s.front_matter, &s.body, id)?;
                Ok((s.path, post))
            })
            .collect::<Result<Vec<_>>>()?;

        check_unique_slugs(&posts)?;
        for (path, post) in &posts {
            warn_unknown_slideshows(path, post);
        }

        // Stable: equal dates keep file-name order
        posts.sort_by_cached_key(|(_, post)| Reverse(post.published()));

        Ok(posts.into_iter().map(|(_, post)| post).collect())
    }

    /// Load all projects, most recent year first
    pub fn load_projects(&self) -> Result<Vec<Project>> {
        let sources = read_sources::<ProjectFrontMatter>(&self.folio.projects_dir)?;
        let ids = resolve_ids(
            sources
                .iter()
                .map(|s| (s.path.as_path(), s.front_matter.id.as_ref(), s.modified_ms)),
        )?;

        let mut projects = sources
            .into_iter()
            .zip(ids)
            .map(|(s, id)| {
                let project = Project::from_front_matter(&s.path, s.front_matter, &s.body, id)?;
                Ok((s.path, project))
            })
            .collect::<Result<Vec<_>>>()?;

        check_unique_slugs(&projects)?;
        for (path, project) in &projects {
            warn_unknown_slideshows(path, project);
        }

        projects.sort_by_key(|(_, project)| Reverse(project.year));

        Ok(projects.into_iter().map(|(_, project)| project).collect())
    }
}

/// Read and parse every `.md` file directly inside `dir`, in file-name order.
///
/// A missing directory yields no sources and is left missing.
fn read_sources<F: DeserializeOwned>(dir: &Path) -> Result<Vec<Source<F>>> {
    if !dir.exists() {
        tracing::debug!("No content directory at {:?}", dir);
        return Ok(Vec::new());
    }

    let mut sources = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            ContentError::io(path, e.into())
        })?;
        let path = entry.path();
        if !path.is_file() || !is_markdown_file(path) {
            continue;
        }

        let text = fs::read_to_string(path).map_err(|e| ContentError::io(path, e))?;
        let (front_matter, body) = frontmatter::parse::<F>(path, &text)?;
        let modified_ms = modified_millis(path);
        tracing::debug!("Loaded {:?}", path);

        sources.push(Source {
            path: path.to_path_buf(),
            front_matter,
            body: body.to_string(),
            modified_ms,
        });
    }

    Ok(sources)
}

/// Assign ids: explicit ids must be unique; missing ids become the file's
/// modification time in milliseconds, bumped past any id already taken.
fn resolve_ids<'p, I>(sources: I) -> Result<Vec<EntryId>>
where
    I: Iterator<Item = (&'p Path, Option<&'p EntryId>, u64)> + Clone,
{
    let mut taken: HashMap<EntryId, &Path> = HashMap::new();
    for (path, id, _) in sources.clone() {
        if let Some(id) = id {
            if let Some(first) = taken.insert(id.clone(), path) {
                return Err(ContentError::DuplicateId {
                    id: id.to_string(),
                    first: first.to_path_buf(),
                    second: path.to_path_buf(),
                });
            }
        }
    }

    let mut ids = Vec::new();
    for (path, id, modified_ms) in sources {
        let id = match id {
            Some(id) => id.clone(),
            None => {
                let mut candidate = modified_ms;
                while taken.contains_key(&EntryId::Number(candidate.into())) {
                    candidate += 1;
                }
                let id = EntryId::Number(candidate.into());
                taken.insert(id.clone(), path);
                id
            }
        };
        ids.push(id);
    }
    Ok(ids)
}

fn check_unique_slugs<T: Entry>(entries: &[(PathBuf, T)]) -> Result<()> {
    let mut seen: HashMap<&str, &Path> = HashMap::new();
    for (path, entry) in entries {
        if let Some(first) = seen.insert(entry.slug(), path) {
            return Err(ContentError::DuplicateSlug {
                slug: entry.slug().to_string(),
                first: first.to_path_buf(),
                second: path.clone(),
            });
        }
    }
    Ok(())
}

fn warn_unknown_slideshows<T: Entry>(path: &Path, entry: &T) {
    for placeholder in markdown::slideshow_refs(entry.content()) {
        if !entry.slideshows().iter().any(|s| s.id == placeholder.id) {
            tracing::warn!(
                "{:?} references slideshow `{}` which is not defined",
                path,
                placeholder.id
            );
        }
    }
}

fn modified_millis(path: &Path) -> u64 {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers;
    use tempfile::TempDir;

    fn site() -> (TempDir, Folio) {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        fs::create_dir_all(&folio.blog_dir).unwrap();
        fs::create_dir_all(&folio.projects_dir).unwrap();
        (tmp, folio)
    }

    fn write(dir: &Path, name: &str, text: &str) {
        fs::write(dir.join(name), text).unwrap();
    }

    #[test]
    fn test_posts_sorted_newest_first() {
        let (_tmp, folio) = site();
        write(&folio.blog_dir, "a.md", "---\nid: 1\ntitle: A\ndate: 2024-01-01\ncategory: Tech\n---\na");
        write(&folio.blog_dir, "b.md", "---\nid: 2\ntitle: B\ndate: 2024-06-01\ncategory: Science\n---\nb");
        write(&folio.blog_dir, "notes.txt", "ignored");

        let posts = ContentLoader::new(&folio).load_posts().unwrap();
        let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "a"]);
        assert_eq!(helpers::categories(&posts), vec!["All", "Science", "Tech"]);
    }

    #[test]
    fn test_equal_dates_keep_file_order() {
        let (_tmp, folio) = site();
        write(&folio.blog_dir, "c.md", "---\nid: 3\ntitle: C\ndate: 2024-01-01\n---\n");
        write(&folio.blog_dir, "a.md", "---\nid: 1\ntitle: A\ndate: 2024-01-01\n---\n");
        write(&folio.blog_dir, "b.md", "---\nid: 2\ntitle: B\ndate: 2024-01-01\n---\n");
        write(&folio.blog_dir, "undated.md", "---\nid: 4\ntitle: U\n---\n");
        write(&folio.blog_dir, "new.md", "---\nid: 5\ntitle: N\ndate: 2025-01-01\n---\n");

        let posts = ContentLoader::new(&folio).load_posts().unwrap();
        let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["new", "a", "b", "c", "undated"]);
    }

    #[test]
    fn test_projects_sorted_by_year() {
        let (_tmp, folio) = site();
        write(&folio.projects_dir, "old.md", "---\nid: 1\ntitle: Old\nyear: 2022\n---\n");
        write(&folio.projects_dir, "new.md", "---\nid: 2\ntitle: New\nyear: 2025\n---\n");
        write(&folio.projects_dir, "mid.md", "---\nid: 3\ntitle: Mid\nyear: 2024\n---\n");

        let projects = ContentLoader::new(&folio).load_projects().unwrap();
        let slugs: Vec<&str> = projects.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_missing_directory_is_empty_and_not_created() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        let posts = ContentLoader::new(&folio).load_posts().unwrap();
        assert!(posts.is_empty());
        assert!(!folio.blog_dir.exists());
    }

    #[test]
    fn test_duplicate_slug_fails() {
        let (_tmp, folio) = site();
        write(&folio.blog_dir, "a.md", "---\nid: 1\ntitle: A\nslug: same\n---\n");
        write(&folio.blog_dir, "b.md", "---\nid: 2\ntitle: B\nslug: same\n---\n");

        let err = ContentLoader::new(&folio).load_posts().unwrap_err();
        assert!(matches!(err, ContentError::DuplicateSlug { ref slug, .. } if slug == "same"));
    }

    #[test]
    fn test_duplicate_id_fails() {
        let (_tmp, folio) = site();
        write(&folio.blog_dir, "a.md", "---\nid: 7\ntitle: A\n---\n");
        write(&folio.blog_dir, "b.md", "---\nid: 7\ntitle: B\n---\n");

        let err = ContentLoader::new(&folio).load_posts().unwrap_err();
        assert!(matches!(err, ContentError::DuplicateId { .. }));
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let (_tmp, folio) = site();
        write(&folio.blog_dir, "a.md", "---\ntitle: A\n---\n");
        write(&folio.blog_dir, "b.md", "---\ntitle: B\n---\n");
        write(&folio.blog_dir, "c.md", "---\ntitle: C\n---\n");

        let posts = ContentLoader::new(&folio).load_posts().unwrap();
        let mut ids: Vec<String> = posts.iter().map(|p| p.id.to_string()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
        assert!(posts.iter().all(|p| matches!(p.id, EntryId::Number(_))));
    }

    #[test]
    fn test_malformed_frontmatter_aborts() {
        let (_tmp, folio) = site();
        write(&folio.blog_dir, "good.md", "---\nid: 1\ntitle: Good\n---\n");
        write(&folio.blog_dir, "bad.md", "---\ntitle: [broken\n---\n");

        let err = ContentLoader::new(&folio).load_posts().unwrap_err();
        assert!(matches!(err, ContentError::FrontMatter { ref path, .. } if path.ends_with("bad.md")));
    }
}
