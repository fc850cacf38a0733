//! Content module - front-matter parsing, records and collection loading

mod entry;
pub mod frontmatter;
pub mod loader;
pub mod markdown;
mod post;
mod project;
mod slideshow;

use std::fmt;

pub use entry::{Entry, EntryId};
pub use post::{BlogFrontMatter, BlogPost, DEFAULT_GRADIENT};
pub use project::{Progress, Project, ProjectFrontMatter, ProjectType};
pub use slideshow::{Slide, SlideContent, Slideshow};

/// The two content collections the site is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Collection {
    Blog,
    Projects,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::Blog, Collection::Projects];

    pub fn label(&self) -> &'static str {
        match self {
            Collection::Blog => "blog",
            Collection::Projects => "projects",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
