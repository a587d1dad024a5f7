// SPDX-License-Identifier: GPL-3.0-or-later

use tracing::info;

use crate::error::Result;
use crate::fetch::Fetcher;
use crate::models::{Video, VideoFilter, VideoSearch, VideosResponse};
use crate::params::Params;

const SEARCH_PATH: &str = "search";
const POPULAR_PATH: &str = "popular";
const VIDEO_PATH: &str = "videos";

/// Video search, popularity listing and lookup.
#[derive(Debug, Clone)]
pub struct VideoEndpoints {
    fetcher: Fetcher,
}

impl VideoEndpoints {
    pub fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    pub async fn search(&self, search: &VideoSearch) -> Result<VideosResponse> {
        let params = search.to_params().sanitize();
        let response: VideosResponse = self
            .fetcher
            .get_json(
                SEARCH_PATH,
                &params,
                "fetching video search results",
                "unmarshaling video search response",
            )
            .await?;

        info!(
            target: "pexels",
            query = %search.query,
            results = response.videos.len(),
            "fetched search videos"
        );
        Ok(response)
    }

    /// Popular videos, optionally narrowed by size and duration.
    pub async fn popular(&self, filter: &VideoFilter) -> Result<VideosResponse> {
        let params = filter.to_params().sanitize();
        let response: VideosResponse = self
            .fetcher
            .get_json(
                POPULAR_PATH,
                &params,
                "fetching popular videos",
                "unmarshaling popular videos response",
            )
            .await?;

        info!(target: "pexels", results = response.videos.len(), "fetched popular videos");
        Ok(response)
    }

    pub async fn get(&self, id: u64) -> Result<Video> {
        let path = format!("{VIDEO_PATH}/{id}");
        let video: Video = self
            .fetcher
            .get_json(
                &path,
                &Params::new(),
                &format!("fetching video with ID {id}"),
                &format!("unmarshaling video response for ID {id}"),
            )
            .await?;

        info!(target: "pexels", id = video.id, duration = video.duration, "fetched video");
        Ok(video)
    }
}
