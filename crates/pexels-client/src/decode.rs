// SPDX-License-Identifier: GPL-3.0-or-later

use serde::de::DeserializeOwned;
use tracing::trace;

use crate::error::Result;

/// Parse a JSON body into `T`. Unknown fields are ignored.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    trace!(target: "pexels", "response body: {}", String::from_utf8_lossy(body));
    Ok(serde_json::from_slice(body)?)
}
