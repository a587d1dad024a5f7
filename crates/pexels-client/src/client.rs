// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::endpoints::{CollectionEndpoints, PhotoEndpoints, VideoEndpoints};
use crate::error::Result;
use crate::fetch::Fetcher;

pub const PHOTO_BASE_URL: &str = "https://api.pexels.com/v1/";
pub const VIDEO_BASE_URL: &str = "https://api.pexels.com/videos/";
pub const COLLECTION_BASE_URL: &str = "https://api.pexels.com/v1/collections/";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Pexels API client.
///
/// Holds one endpoint group per media category. All groups share the API key
/// and the underlying connection pool; cloning is cheap.
#[derive(Debug, Clone)]
pub struct PexelsClient {
    photos: PhotoEndpoints,
    videos: VideoEndpoints,
    collections: CollectionEndpoints,
}

impl PexelsClient {
    /// Create a client with the default base addresses and a 30 second timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key).build()
    }

    /// Create a client builder for custom configuration.
    pub fn builder(api_key: impl Into<String>) -> PexelsClientBuilder {
        PexelsClientBuilder::new(api_key)
    }

    pub fn photos(&self) -> &PhotoEndpoints {
        &self.photos
    }

    pub fn videos(&self) -> &VideoEndpoints {
        &self.videos
    }

    pub fn collections(&self) -> &CollectionEndpoints {
        &self.collections
    }
}

/// Builder for configuring a Pexels client.
#[derive(Debug)]
pub struct PexelsClientBuilder {
    api_key: String,
    photo_base_url: String,
    video_base_url: String,
    collection_base_url: String,
    timeout: Duration,
}

impl PexelsClientBuilder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            photo_base_url: PHOTO_BASE_URL.to_string(),
            video_base_url: VIDEO_BASE_URL.to_string(),
            collection_base_url: COLLECTION_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Base address for photo endpoints. Must end with `/`.
    pub fn photo_base_url(mut self, url: impl Into<String>) -> Self {
        self.photo_base_url = url.into();
        self
    }

    /// Base address for video endpoints. Must end with `/`.
    pub fn video_base_url(mut self, url: impl Into<String>) -> Self {
        self.video_base_url = url.into();
        self
    }

    /// Base address for collection endpoints. Must end with `/`.
    pub fn collection_base_url(mut self, url: impl Into<String>) -> Self {
        self.collection_base_url = url.into();
        self
    }

    /// Set request timeout duration.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<PexelsClient> {
        let client = Client::builder().timeout(self.timeout).build()?;

        debug!(
            target: "pexels",
            photos = %self.photo_base_url,
            videos = %self.video_base_url,
            collections = %self.collection_base_url,
            "initialized Pexels client"
        );

        let fetcher = |base_url: String| Fetcher::new(client.clone(), base_url, self.api_key.clone());

        Ok(PexelsClient {
            photos: PhotoEndpoints::new(fetcher(self.photo_base_url)),
            videos: VideoEndpoints::new(fetcher(self.video_base_url)),
            collections: CollectionEndpoints::new(fetcher(self.collection_base_url)),
        })
    }
}
