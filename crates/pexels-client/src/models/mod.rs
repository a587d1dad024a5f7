// SPDX-License-Identifier: GPL-3.0-or-later

//! Request builders and response DTOs.

mod collection;
mod photo;
mod request;
mod video;

pub use collection::{Collection, CollectionsResponse, MediaItem, MediaResponse};
pub use photo::{Photo, PhotoSrc, PhotosResponse};
pub use request::{
    MediaKind, MediaQuery, Orientation, Pagination, PhotoSearch, Size, SortOrder, VideoFilter,
    VideoSearch,
};
pub use video::{User, Video, VideoFile, VideoPicture, VideosResponse};

use serde::{Deserialize, Deserializer, Serialize};

/// Error body the API sends alongside some non-OK statuses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Treat an explicit JSON `null` like a missing field.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_decodes() {
        let body: ErrorResponse = serde_json::from_str(r#"{"error":"Not Found"}"#).unwrap();
        assert_eq!(body.error, "Not Found");
    }
}
