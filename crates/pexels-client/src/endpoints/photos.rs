// SPDX-License-Identifier: GPL-3.0-or-later

use tracing::{debug, info};

use crate::error::Result;
use crate::fetch::Fetcher;
use crate::models::{Pagination, Photo, PhotoSearch, PhotosResponse};
use crate::params::Params;

const SEARCH_PATH: &str = "search";
const CURATED_PATH: &str = "curated";
const PHOTO_PATH: &str = "photos";

const CURATED_DEFAULT_PAGE: u32 = 1;
const CURATED_DEFAULT_PER_PAGE: u32 = 15;

/// Photo search, curation and lookup.
#[derive(Debug, Clone)]
pub struct PhotoEndpoints {
    fetcher: Fetcher,
}

impl PhotoEndpoints {
    pub fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// Search photos.
    ///
    /// # Example
    /// ```no_run
    /// # use pexels_client::{Orientation, PexelsClient, PhotoSearch, Size};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = PexelsClient::new("api-key")?;
    /// let search = PhotoSearch::new("elephant")
    ///     .orientation(Orientation::Landscape)
    ///     .size(Size::Large)
    ///     .per_page(5);
    /// let response = client.photos().search(&search).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, search: &PhotoSearch) -> Result<PhotosResponse> {
        let params = search.to_params().sanitize();
        let response: PhotosResponse = self
            .fetcher
            .get_json(
                SEARCH_PATH,
                &params,
                "fetching search results",
                "unmarshaling search response",
            )
            .await?;

        info!(
            target: "pexels",
            query = %search.query,
            results = response.photos.len(),
            "fetched search photos"
        );
        Ok(response)
    }

    /// Curated photos. Page and page size default to 1 and 15.
    pub async fn curated(&self, pagination: Pagination) -> Result<PhotosResponse> {
        let pagination = pagination.or_defaults(CURATED_DEFAULT_PAGE, CURATED_DEFAULT_PER_PAGE);
        debug!(target: "pexels", ?pagination, "fetching curated photos");

        let params = pagination.to_params().sanitize();
        let response: PhotosResponse = self
            .fetcher
            .get_json(
                CURATED_PATH,
                &params,
                "fetching curated photos",
                "unmarshaling curated photos response",
            )
            .await?;

        info!(target: "pexels", results = response.photos.len(), "fetched curated photos");
        Ok(response)
    }

    /// Look up a single photo.
    pub async fn get(&self, id: u64) -> Result<Photo> {
        let path = format!("{PHOTO_PATH}/{id}");
        let photo: Photo = self
            .fetcher
            .get_json(
                &path,
                &Params::new(),
                &format!("fetching photo with ID {id}"),
                &format!("unmarshaling photo response for ID {id}"),
            )
            .await?;

        info!(target: "pexels", id = photo.id, "fetched photo");
        Ok(photo)
    }
}
