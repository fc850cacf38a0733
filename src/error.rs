//! Errors raised while loading and emitting content

use std::io;
use std::path::PathBuf;

pub type Result<T> = core::result::Result<T, ContentError>;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("front-matter in {path:?} is not closed by a `---` line")]
    UnterminatedFrontMatter { path: PathBuf },

    #[error("invalid front-matter in {path:?}: {source}")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{path:?} is missing required field `{field}`")]
    MissingField { path: PathBuf, field: &'static str },

    #[error("slug `{slug}` is used by both {first:?} and {second:?}")]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("id `{id}` is used by both {first:?} and {second:?}")]
    DuplicateId {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("could not find `{marker}` in {path:?}")]
    MissingArrayMarker { path: PathBuf, marker: &'static str },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl ContentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ContentError::Io {
            path: path.into(),
            source,
        }
    }
}
