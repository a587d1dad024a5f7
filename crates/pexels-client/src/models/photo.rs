// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};

use super::nullable;

/// A single photo.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Photo {
    pub id: u64,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    /// Pexels page for the photo.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub photographer: String,
    #[serde(default)]
    pub photographer_id: u64,
    #[serde(default)]
    pub photographer_url: String,
    /// Average color as a hex string, e.g. `#978E82`.
    #[serde(default, deserialize_with = "nullable")]
    pub avg_color: String,
    #[serde(default)]
    pub src: PhotoSrc,
    #[serde(default)]
    pub liked: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub alt: String,
}

/// Image URLs for one photo at the sizes the API pre-renders.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PhotoSrc {
    pub original: String,
    pub large2x: String,
    pub large: String,
    pub medium: String,
    pub small: String,
    pub portrait: String,
    pub landscape: String,
    pub tiny: String,
}

/// A page of photos, returned by search and curated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PhotosResponse {
    pub total_results: u64,
    pub page: u32,
    pub per_page: u32,
    pub photos: Vec<Photo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
}
