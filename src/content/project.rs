//! Project model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use super::entry::{Entry, EntryId};
use super::frontmatter::{non_empty_string, string_or_vec, yaml_flow_list, yaml_line};
use super::post::{file_slug, DEFAULT_GRADIENT};
use super::slideshow::{self, Slideshow};
use crate::error::{ContentError, Result};

/// How a project is presented: a full write-up or just a repository card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    #[default]
    Detailed,
    GithubOnly,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Detailed => "detailed",
            ProjectType::GithubOnly => "github-only",
        }
    }
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "detailed" => Ok(ProjectType::Detailed),
            "github-only" => Ok(ProjectType::GithubOnly),
            other => Err(format!("unknown project type: {}", other)),
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Progress {
    #[default]
    Completed,
    InProgress,
    Planned,
}

impl Progress {
    pub fn as_str(&self) -> &'static str {
        match self {
            Progress::Completed => "completed",
            Progress::InProgress => "in-progress",
            Progress::Planned => "planned",
        }
    }
}

/// Front-matter keys recognized for projects
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectFrontMatter {
    pub id: Option<EntryId>,
    #[serde(deserialize_with = "non_empty_string")]
    pub slug: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub year: Option<i32>,
    #[serde(rename = "type")]
    pub kind: Option<ProjectType>,
    #[serde(deserialize_with = "non_empty_string")]
    pub github: Option<String>,
    #[serde(deserialize_with = "non_empty_string")]
    pub external: Option<String>,
    #[serde(deserialize_with = "string_or_vec")]
    pub tech: Vec<String>,
    #[serde(deserialize_with = "non_empty_string")]
    pub category: Option<String>,
    #[serde(deserialize_with = "non_empty_string")]
    pub gradient_id: Option<String>,
    #[serde(deserialize_with = "non_empty_string")]
    pub featured_image: Option<String>,
    pub excerpt: Option<String>,
    pub progress: Option<Progress>,
    pub date_started: Option<String>,
    pub date_end: Option<String>,
    pub slideshows: Vec<Slideshow>,
}

/// A project as emitted into the generated module.
///
/// Field order is the key order of the emitted JSON objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntryId,
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(rename = "type")]
    pub kind: ProjectType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external: Option<String>,
    pub tech: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub gradient_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    pub excerpt: String,
    pub progress: Progress,
    pub date_started: String,
    pub date_end: String,
    pub slideshows: Vec<Slideshow>,
    /// Raw Markdown body
    pub content: String,
}

impl Project {
    /// Build a project from parsed front-matter, filling defaults for optional keys
    pub fn from_front_matter(
        path: &Path,
        fm: ProjectFrontMatter,
        body: &str,
        id: EntryId,
    ) -> Result<Self> {
        let title = fm.title.ok_or_else(|| ContentError::MissingField {
            path: path.to_path_buf(),
            field: "title",
        })?;

        Ok(Self {
            id,
            slug: fm.slug.unwrap_or_else(|| file_slug(path)),
            title,
            subtitle: fm.subtitle.unwrap_or_default(),
            year: fm.year,
            kind: fm.kind.unwrap_or_default(),
            github: fm.github,
            external: fm.external,
            tech: fm.tech,
            category: fm.category,
            gradient_id: fm
                .gradient_id
                .unwrap_or_else(|| DEFAULT_GRADIENT.to_string()),
            featured_image: fm.featured_image,
            excerpt: fm.excerpt.unwrap_or_default(),
            progress: fm.progress.unwrap_or_default(),
            date_started: fm.date_started.unwrap_or_default(),
            date_end: fm.date_end.unwrap_or_default(),
            slideshows: fm.slideshows,
            content: body.to_string(),
        })
    }

    /// Serialize back into a Markdown document with front-matter
    pub fn to_frontmatter(&self) -> Result<String> {
        let year = self.year.map(|y| y.to_string());

        let mut out = String::from("---\n");
        out.push_str(&format!("id: {}\n", self.id.to_yaml()));
        out.push_str(&yaml_line("slug", Some(&self.slug)));
        out.push_str(&yaml_line("title", Some(&self.title)));
        out.push_str(&yaml_line("subtitle", Some(&self.subtitle)));
        match &year {
            Some(y) => out.push_str(&format!("year: {}\n", y)),
            None => out.push_str("year:\n"),
        }
        out.push_str(&format!("type: {}\n", self.kind));
        out.push_str(&yaml_line("github", self.github.as_deref()));
        out.push_str(&yaml_line("external", self.external.as_deref()));
        out.push_str(&format!("tech: {}\n", yaml_flow_list(&self.tech)));
        out.push_str(&yaml_line("category", self.category.as_deref()));
        out.push_str(&yaml_line("gradientId", Some(&self.gradient_id)));
        out.push_str(&yaml_line("featuredImage", self.featured_image.as_deref()));
        out.push_str(&yaml_line("excerpt", Some(&self.excerpt)));
        out.push_str(&format!("progress: {}\n", self.progress.as_str()));
        out.push_str(&yaml_line("dateStarted", Some(&self.date_started)));
        out.push_str(&yaml_line("dateEnd", Some(&self.date_end)));
        out.push_str(&slideshow::to_yaml_block(&self.slideshows)?);
        out.push_str("---\n");
        out.push_str(&self.content);
        Ok(out)
    }
}

impl Entry for Project {
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
        &self.tech
    }

    fn summary(&self) -> &str {
        &self.subtitle
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn slideshows(&self) -> &[Slideshow] {
        &self.slideshows
    }
}
