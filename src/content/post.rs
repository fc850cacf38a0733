//! Blog post model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::entry::{Entry, EntryId};
use super::frontmatter::{non_empty_string, string_or_vec, yaml_flow_list, yaml_line};
use super::markdown;
use super::slideshow::{self, Slideshow};
use crate::error::{ContentError, Result};
use crate::helpers;

/// Gradient used when a post has no `gradientId`
pub const DEFAULT_GRADIENT: &str = "default";

/// Front-matter keys recognized for blog posts
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogFrontMatter {
    pub id: Option<EntryId>,
    #[serde(deserialize_with = "non_empty_string")]
    pub slug: Option<String>,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    #[serde(deserialize_with = "non_empty_string")]
    pub featured_image: Option<String>,
    #[serde(deserialize_with = "non_empty_string")]
    pub gradient_id: Option<String>,
    #[serde(deserialize_with = "non_empty_string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "non_empty_string")]
    pub read_time: Option<String>,
    #[serde(deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "non_empty_string")]
    pub category: Option<String>,
    pub slideshows: Vec<Slideshow>,
}

/// A blog post as emitted into the generated module.
///
/// Field order is the key order of the emitted JSON objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: EntryId,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    pub gradient_id: String,
    /// Raw Markdown body
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub read_time: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slideshows: Vec<Slideshow>,
}

impl BlogPost {
    /// Build a post from parsed front-matter, filling defaults for optional keys
    pub fn from_front_matter(path: &Path, fm: BlogFrontMatter, body: &str, id: EntryId) -> Result<Self> {
        let title = fm.title.ok_or_else(|| ContentError::MissingField {
            path: path.to_path_buf(),
            field: "title",
        })?;

        let slug = fm.slug.unwrap_or_else(|| file_slug(path));
        let read_time = fm
            .read_time
            .unwrap_or_else(|| markdown::estimate_read_time(body));

        Ok(Self {
            id,
            slug,
            title,
            excerpt: fm.excerpt.unwrap_or_default(),
            featured_image: fm.featured_image,
            gradient_id: fm
                .gradient_id
                .unwrap_or_else(|| DEFAULT_GRADIENT.to_string()),
            content: body.to_string(),
            date: fm.date,
            read_time,
            tags: fm.tags,
            category: fm.category,
            slideshows: fm.slideshows,
        })
    }

    /// Publication date used for ordering
    pub fn published(&self) -> Option<NaiveDateTime> {
        self.date.as_deref().and_then(helpers::parse_date)
    }

    /// Serialize back into a Markdown document with front-matter
    pub fn to_frontmatter(&self) -> Result<String> {
        let mut out = String::from("---\n");
        out.push_str(&format!("id: {}\n", self.id.to_yaml()));
        out.push_str(&yaml_line("slug", Some(&self.slug)));
        out.push_str(&yaml_line("title", Some(&self.title)));
        out.push_str(&yaml_line("excerpt", Some(&self.excerpt)));
        out.push_str(&yaml_line("featuredImage", self.featured_image.as_deref()));
        out.push_str(&yaml_line("gradientId", Some(&self.gradient_id)));
        out.push_str(&yaml_line("date", self.date.as_deref()));
        out.push_str(&yaml_line("readTime", Some(&self.read_time)));
        out.push_str(&format!("tags: {}\n", yaml_flow_list(&self.tags)));
        out.push_str(&yaml_line("category", self.category.as_deref()));
        if !self.slideshows.is_empty() {
            out.push_str(&slideshow::to_yaml_block(&self.slideshows)?);
        }
        out.push_str("---\n");
        out.push_str(&self.content);
        Ok(out)
    }
}

impl Entry for BlogPost {
    fn id(&self) -> &EntryId {
        &self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn labels(&self) -> &[String] {
        &self.tags
    }

    fn summary(&self) -> &str {
        &self.excerpt
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn slideshows(&self) -> &[Slideshow] {
        &self.slideshows
    }
}

/// Slug derived from the file name, without the `.md` extension
pub(crate) fn file_slug(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled")
        .to_string()
}
