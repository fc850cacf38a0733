//! Create a new blog post or project

use anyhow::{Context, Result};
use chrono::Datelike;
use std::fs;
use std::path::PathBuf;

use crate::content::markdown;
use crate::content::{BlogPost, EntryId, Progress, Project, ProjectType, DEFAULT_GRADIENT};
use crate::helpers;
use crate::Folio;

/// Author-supplied fields for a new entry
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub title: String,
    pub excerpt: String,
    pub category: Option<String>,
    /// Tags for a post, tech for a project
    pub labels: Vec<String>,
    pub featured_image: Option<String>,
    pub gradient_id: Option<String>,
    pub read_time: Option<String>,
    /// Markdown body; a scaffold is used when absent
    pub content: Option<String>,
}

impl Draft {
    pub fn slug(&self) -> String {
        helpers::slugify(&self.title)
    }

    /// Blog post dated today
    pub fn to_post(&self, id: EntryId) -> BlogPost {
        let content = self
            .content
            .clone()
            .unwrap_or_else(|| post_scaffold(&self.title));
        let read_time = self
            .read_time
            .clone()
            .unwrap_or_else(|| markdown::estimate_read_time(&content));

        BlogPost {
            id,
            slug: self.slug(),
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            featured_image: self.featured_image.clone().filter(|s| !s.is_empty()),
            gradient_id: self.gradient_id(),
            content,
            date: Some(helpers::today()),
            read_time,
            tags: self.labels.clone(),
            category: self.category.clone(),
            slideshows: Vec::new(),
        }
    }

    /// Detailed project started this year
    pub fn to_project(&self, id: EntryId) -> Project {
        let now = chrono::Local::now();

        Project {
            id,
            slug: self.slug(),
            title: self.title.clone(),
            subtitle: self.excerpt.clone(),
            year: Some(now.year()),
            kind: ProjectType::Detailed,
            github: None,
            external: None,
            tech: self.labels.clone(),
            category: self.category.clone(),
            gradient_id: self.gradient_id(),
            featured_image: self.featured_image.clone().filter(|s| !s.is_empty()),
            excerpt: self.excerpt.clone(),
            progress: Progress::InProgress,
            date_started: now.format("%B %Y").to_string(),
            date_end: String::new(),
            slideshows: Vec::new(),
            content: self
                .content
                .clone()
                .unwrap_or_else(|| project_scaffold(&self.title)),
        }
    }

    fn gradient_id(&self) -> String {
        self.gradient_id
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_GRADIENT.to_string())
    }
}

/// Split a comma-separated list, dropping blank items
pub fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Timestamp id for a newly authored entry
pub fn new_id() -> EntryId {
    EntryId::Number(chrono::Local::now().timestamp_millis().into())
}

fn post_scaffold(title: &str) -> String {
    format!(
        r#"
# {title}

Write your blog post content here...

## Introduction

Start with an engaging introduction...

## Main Content

Add your main content here...

## Conclusion

Wrap up your post with a strong conclusion...
"#
    )
}

fn project_scaffold(title: &str) -> String {
    format!(
        r#"
# {title}

## Overview

What the project is and why it exists...

## How It Works

Describe the design and the interesting parts...

## Results

What came out of it...
"#
    )
}

/// Write the scaffold for a blog post into the blog directory
pub fn create_post(folio: &Folio, draft: &Draft) -> Result<PathBuf> {
    let post = draft.to_post(new_id());
    let document = post.to_frontmatter()?;
    write_new(&folio.blog_dir, &post.slug, &document)
}

/// Write the scaffold for a project into the projects directory
pub fn create_project(folio: &Folio, draft: &Draft) -> Result<PathBuf> {
    let project = draft.to_project(new_id());
    let document = project.to_frontmatter()?;
    write_new(&folio.projects_dir, &project.slug, &document)
}

fn write_new(dir: &std::path::Path, slug: &str, document: &str) -> Result<PathBuf> {
    if slug.is_empty() {
        anyhow::bail!("Title does not produce a usable slug");
    }

    fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;
    let file_path = dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    fs::write(&file_path, document).with_context(|| format!("Failed to write {:?}", file_path))?;
    Ok(file_path)
}

/// Run the new command
pub fn run(folio: &Folio, draft: &Draft, project: bool) -> Result<()> {
    let (path, kind, build) = if project {
        (create_project(folio, draft)?, "Project", "build-projects")
    } else {
        (create_post(folio, draft)?, "Blog post", "build-blog")
    };

    println!("✅ {} created successfully!", kind);
    println!("📁 File: {}", path.display());
    println!("🔗 Slug: {}", draft.slug());
    println!();
    println!("📝 Next steps:");
    println!("1. Edit the content in {}", path.display());
    println!("2. Run 'folio {}' to regenerate the data module", build);
    println!("3. Start the dev server with 'folio dev'");
    Ok(())
}
