//! Add a post to a hand-maintained data module

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use super::new::{new_id, Draft};
use crate::content::BlogPost;
use crate::error::ContentError;
use crate::Folio;

/// Line that opens the posts array in the data module
pub const ARRAY_MARKER: &str = "export const blogPosts = [";

/// Insert `post` as the first element of the posts array in `source`
pub fn splice_post(path: &Path, source: &str, post: &BlogPost) -> Result<String, ContentError> {
    let at = source
        .find(ARRAY_MARKER)
        .ok_or_else(|| ContentError::MissingArrayMarker {
            path: path.to_path_buf(),
            marker: ARRAY_MARKER,
        })?
        + ARRAY_MARKER.len();

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    post.serialize(&mut ser)?;
    let json = String::from_utf8_lossy(&buf);

    let mut out = String::with_capacity(source.len() + json.len() + 16);
    out.push_str(&source[..at]);
    out.push_str("\n  ");
    out.push_str(&json.split('\n').collect::<Vec<_>>().join("\n  "));
    out.push(',');
    out.push_str(&source[at..]);
    Ok(out)
}

/// Run the add command
pub fn run(folio: &Folio, draft: &Draft) -> Result<()> {
    let data_path = folio.base_dir.join(&folio.config.blog_data);
    let source = fs::read_to_string(&data_path)
        .with_context(|| format!("Failed to read {:?}", data_path))?;

    let mut post = draft.to_post(new_id());
    if let Some(content) = &draft.content {
        post.content = content.trim().to_string();
    }

    let updated = splice_post(&data_path, &source, &post)?;
    fs::write(&data_path, updated).with_context(|| format!("Failed to write {:?}", data_path))?;

    println!("✅ Blog post added successfully!");
    println!("📄 File: {}", data_path.display());
    println!("🔗 URL: /blog/{}", post.slug);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::EntryId;
    use tempfile::TempDir;

    const DATA: &str = "export const blogPosts = [\n  {\n    \"id\": 1\n  }\n];\n";

    fn post() -> BlogPost {
        Draft {
            title: "Fresh Post".to_string(),
            excerpt: "New".to_string(),
            labels: vec!["rust".to_string()],
            content: Some("Body".to_string()),
            ..Default::default()
        }
        .to_post(EntryId::Number(42.into()))
    }

    #[test]
    fn test_splice_inserts_first() {
        let out = splice_post(Path::new("blogData.js"), DATA, &post()).unwrap();

        assert!(out.starts_with("export const blogPosts = [\n  {\n      \"id\": 42,\n      \"slug\": \"fresh-post\","));
        assert!(out.contains("\n      \"tags\": [\n          \"rust\"\n      ],"));
        assert!(out.ends_with("\n  },\n  {\n    \"id\": 1\n  }\n];\n"));
    }

    #[test]
    fn test_missing_marker() {
        let err = splice_post(Path::new("blogData.js"), "export const posts = [];", &post()).unwrap_err();
        assert!(matches!(err, ContentError::MissingArrayMarker { .. }));
    }

    #[test]
    fn test_run_leaves_file_without_marker_untouched() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        let data_path = tmp.path().join(&folio.config.blog_data);
        fs::create_dir_all(data_path.parent().unwrap()).unwrap();
        fs::write(&data_path, "export default [];\n").unwrap();

        let draft = Draft {
            title: "Nope".to_string(),
            ..Default::default()
        };
        assert!(run(&folio, &draft).is_err());
        assert_eq!(fs::read_to_string(&data_path).unwrap(), "export default [];\n");
    }

    #[test]
    fn test_run_updates_data_module() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        let data_path = tmp.path().join(&folio.config.blog_data);
        fs::create_dir_all(data_path.parent().unwrap()).unwrap();
        fs::write(&data_path, DATA).unwrap();

        let draft = Draft {
            title: "Added Post".to_string(),
            content: Some("\nHello\n\n".to_string()),
            ..Default::default()
        };
        run(&folio, &draft).unwrap();

        let text = fs::read_to_string(&data_path).unwrap();
        assert!(text.contains("\"slug\": \"added-post\""));
        assert!(text.contains("\"content\": \"Hello\""));
    }
}
