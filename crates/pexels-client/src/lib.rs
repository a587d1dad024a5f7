// SPDX-License-Identifier: GPL-3.0-or-later

//! Pexels API client for searching and fetching photos, videos and collections.
//!
//! Every operation is a single authenticated GET: the endpoint group builds a
//! parameter set, drops its zero-valued entries, sends it through a
//! [`Fetcher`] and decodes the JSON body into a typed response. Nothing is
//! retried or cached.

pub mod client;
pub mod decode;
pub mod endpoints;
pub mod error;
pub mod fetch;
pub mod models;
pub mod params;

pub use client::{PexelsClient, PexelsClientBuilder};
pub use endpoints::{CollectionEndpoints, PhotoEndpoints, VideoEndpoints};
pub use error::{PexelsError, Result};
pub use fetch::Fetcher;
pub use models::{
    Collection, CollectionsResponse, ErrorResponse, MediaItem, MediaKind, MediaQuery,
    MediaResponse, Orientation, Pagination, Photo, PhotoSearch, PhotoSrc, PhotosResponse, Size,
    SortOrder, User, Video, VideoFile, VideoFilter, VideoPicture, VideoSearch, VideosResponse,
};
pub use params::{ParamValue, Params};
