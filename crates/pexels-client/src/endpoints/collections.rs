// SPDX-License-Identifier: GPL-3.0-or-later

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::info;

use crate::error::Result;
use crate::fetch::Fetcher;
use crate::models::{CollectionsResponse, MediaQuery, MediaResponse, Pagination};

const ALL_PATH: &str = "";
const FEATURED_PATH: &str = "featured";

/// Everything but RFC 3986 unreserved characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

fn collection_path(collection_id: &str) -> String {
    utf8_percent_encode(collection_id, PATH_SEGMENT).to_string()
}

/// Collection listings and collection media.
#[derive(Debug, Clone)]
pub struct CollectionEndpoints {
    fetcher: Fetcher,
}

impl CollectionEndpoints {
    pub fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// Collections of the account that owns the API key.
    pub async fn all(&self, pagination: Pagination) -> Result<CollectionsResponse> {
        let params = pagination.to_params().sanitize();
        let response: CollectionsResponse = self
            .fetcher
            .get_json(
                ALL_PATH,
                &params,
                "fetching collections",
                "unmarshaling collections response",
            )
            .await?;

        info!(
            target: "pexels",
            results = response.collections.len(),
            "fetched collections"
        );
        Ok(response)
    }

    pub async fn featured(&self, pagination: Pagination) -> Result<CollectionsResponse> {
        let params = pagination.to_params().sanitize();
        let response: CollectionsResponse = self
            .fetcher
            .get_json(
                FEATURED_PATH,
                &params,
                "fetching featured collections",
                "unmarshaling featured collections response",
            )
            .await?;

        info!(
            target: "pexels",
            results = response.collections.len(),
            "fetched featured collections"
        );
        Ok(response)
    }

    /// Photos and videos of one collection.
    ///
    /// The collection id is percent-encoded as a single path segment, so `/`,
    /// `?` and `#` in it cannot change the target path or query.
    pub async fn media(&self, query: &MediaQuery) -> Result<MediaResponse> {
        let params = query.to_params().sanitize();
        let response: MediaResponse = self
            .fetcher
            .get_json(
                &collection_path(&query.collection_id),
                &params,
                &format!("fetching media for collection ID {}", query.collection_id),
                "unmarshaling media response",
            )
            .await?;

        info!(
            target: "pexels",
            collection = %query.collection_id,
            results = response.media.len(),
            "fetched collection media"
        );
        Ok(response)
    }
}
