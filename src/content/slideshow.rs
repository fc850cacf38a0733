//! Slideshow definitions embedded in front-matter

use serde::{Deserialize, Serialize};

/// A named, ordered set of slides referenced from Markdown by
/// `<!-- slideshow:<id>[:<mode>] -->`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slideshow {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<SlideContent>,
}

/// Text panel shown beside a slide's image
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideContent {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub points: Vec<String>,
}

/// Render slideshows as a block sequence under a `slideshows:` key
pub(crate) fn to_yaml_block(slideshows: &[Slideshow]) -> crate::error::Result<String> {
    if slideshows.is_empty() {
        return Ok("slideshows: []\n".to_string());
    }
    let body = serde_yaml::to_string(slideshows)?;
    Ok(format!("slideshows:\n{}", body))
}
