// SPDX-License-Identifier: GPL-3.0-or-later

use reqwest::header::{AUTHORIZATION, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};

use crate::decode::decode;
use crate::error::{PexelsError, Result};
use crate::params::Params;

pub(crate) const CLIENT_USER_AGENT: &str = concat!("pexels-rs/", env!("CARGO_PKG_VERSION"));

/// Authenticated GET dispatcher bound to one base address.
///
/// The base address is used verbatim: paths are appended without inserting a
/// separator, so it is expected to end with `/`.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    base_url: String,
    api_key: String,
}

impl Fetcher {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request address: `base + path + "?" + query`.
    pub fn url_for(&self, path: &str, params: &Params) -> String {
        format!("{}{}?{}", self.base_url, path, params.to_query_string())
    }

    /// Perform one GET and return the raw body of a `200 OK` response.
    ///
    /// Any other status fails with [`PexelsError::HttpStatus`] without reading
    /// the body.
    pub async fn fetch(&self, path: &str, params: &Params) -> Result<Vec<u8>> {
        let url = self.url_for(path, params);
        debug!(target: "pexels", "GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.api_key.as_str())
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        debug!(target: "pexels", "response status: {}", status);

        if status != StatusCode::OK {
            warn!(target: "pexels", url = %url, status = status.as_u16(), "non-OK response");
            return Err(PexelsError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        trace!(target: "pexels", "received {} bytes", body.len());
        Ok(body.to_vec())
    }

    /// Fetch and decode, annotating failures with the given actions.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &Params,
        fetch_action: &str,
        decode_action: &str,
    ) -> Result<T> {
        let body = self
            .fetch(path, params)
            .await
            .map_err(|e| e.context(fetch_action))?;

        decode(&body).map_err(|e| {
            warn!(target: "pexels", error = %e, "{}", decode_action);
            e.context(decode_action)
        })
    }
}
