// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};

use super::{Photo, Video};

/// A user-curated collection of photos and videos.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Collection {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub media_count: u32,
    #[serde(default)]
    pub photos_count: u32,
    #[serde(default)]
    pub videos_count: u32,
}

/// A page of collections, returned by the root and featured listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CollectionsResponse {
    pub collections: Vec<Collection>,
    pub page: u32,
    pub per_page: u32,
    pub total_results: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
}

/// An entry of a collection, tagged by its `type` field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum MediaItem {
    Photo(Photo),
    Video(Video),
}

impl MediaItem {
    pub fn id(&self) -> u64 {
        match self {
            MediaItem::Photo(photo) => photo.id,
            MediaItem::Video(video) => video.id,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            MediaItem::Photo(photo) => &photo.url,
            MediaItem::Video(video) => &video.url,
        }
    }

    /// The wire value of the `type` tag.
    pub fn type_tag(&self) -> &'static str {
        match self {
            MediaItem::Photo(_) => "Photo",
            MediaItem::Video(_) => "Video",
        }
    }

    pub fn as_photo(&self) -> Option<&Photo> {
        match self {
            MediaItem::Photo(photo) => Some(photo),
            MediaItem::Video(_) => None,
        }
    }

    pub fn as_video(&self) -> Option<&Video> {
        match self {
            MediaItem::Video(video) => Some(video),
            MediaItem::Photo(_) => None,
        }
    }
}

/// A page of media from one collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MediaResponse {
    /// Collection id.
    pub id: String,
    pub media: Vec<MediaItem>,
    pub page: u32,
    pub per_page: u32,
    pub total_results: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
}
