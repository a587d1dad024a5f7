// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};

use super::nullable;

/// A single video.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Video {
    pub id: u64,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub url: String,
    /// Still frame representing the video.
    #[serde(default)]
    pub image: String,
    /// Undocumented upstream; usually `null`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_res: Option<serde_json::Value>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Duration in seconds.
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub user: User,
    #[serde(default)]
    pub video_files: Vec<VideoFile>,
    #[serde(default)]
    pub video_pictures: Vec<VideoPicture>,
}

/// The videographer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub url: String,
}

/// One encoding of a video. Quality, dimensions and fps are `null` for some
/// streaming renditions and decode as zero values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VideoFile {
    pub id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub quality: String,
    #[serde(default, deserialize_with = "nullable")]
    pub file_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub width: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub height: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub fps: f64,
    #[serde(default)]
    pub link: String,
}

/// Preview frame of a video.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoPicture {
    pub id: u64,
    #[serde(default)]
    pub picture: String,
    #[serde(default)]
    pub nr: u32,
}

/// A page of videos, returned by search and popular.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VideosResponse {
    pub page: u32,
    pub per_page: u32,
    pub total_results: u64,
    pub url: String,
    pub videos: Vec<Video>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
}
