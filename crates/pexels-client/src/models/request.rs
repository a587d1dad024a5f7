// SPDX-License-Identifier: GPL-3.0-or-later

use crate::params::{ParamValue, Params};

/// Orientation filter for searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
    Square,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
            Orientation::Square => "square",
        }
    }
}

/// Minimum size filter for searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Large,
    Medium,
    Small,
}

impl Size {
    pub fn as_str(self) -> &'static str {
        match self {
            Size::Large => "large",
            Size::Medium => "medium",
            Size::Small => "small",
        }
    }
}

/// Restricts collection media to one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Photos,
    Videos,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Photos => "photos",
            MediaKind::Videos => "videos",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl From<Orientation> for ParamValue {
    fn from(value: Orientation) -> Self {
        ParamValue::from(value.as_str())
    }
}

impl From<Size> for ParamValue {
    fn from(value: Size) -> Self {
        ParamValue::from(value.as_str())
    }
}

impl From<MediaKind> for ParamValue {
    fn from(value: MediaKind) -> Self {
        ParamValue::from(value.as_str())
    }
}

impl From<SortOrder> for ParamValue {
    fn from(value: SortOrder) -> Self {
        ParamValue::from(value.as_str())
    }
}

/// Photo search parameters.
#[derive(Debug, Clone, Default)]
pub struct PhotoSearch {
    pub query: String,
    pub orientation: Option<Orientation>,
    pub size: Option<Size>,
    /// Color name (`red`, `turquoise`, ...) or hex code without `#`.
    pub color: Option<String>,
    /// Search locale, e.g. `en-US`.
    pub locale: Option<String>,
    pub page: Option<u32>,
    /// Results per page (default 15, max 80).
    pub per_page: Option<u32>,
}

impl PhotoSearch {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn to_params(&self) -> Params {
        Params::new()
            .with("query", self.query.as_str())
            .with("orientation", self.orientation)
            .with("size", self.size)
            .with("color", self.color.clone())
            .with("locale", self.locale.clone())
            .with("page", self.page)
            .with("per_page", self.per_page)
    }
}

/// Video search parameters.
#[derive(Debug, Clone, Default)]
pub struct VideoSearch {
    pub query: String,
    pub orientation: Option<Orientation>,
    pub size: Option<Size>,
    pub locale: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl VideoSearch {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn to_params(&self) -> Params {
        Params::new()
            .with("query", self.query.as_str())
            .with("orientation", self.orientation)
            .with("size", self.size)
            .with("locale", self.locale.clone())
            .with("page", self.page)
            .with("per_page", self.per_page)
    }
}

/// Filters for popular videos. Widths and heights are pixels, durations seconds.
#[derive(Debug, Clone, Default)]
pub struct VideoFilter {
    pub min_width: Option<u32>,
    pub min_height: Option<u32>,
    pub min_duration: Option<u32>,
    pub max_duration: Option<u32>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl VideoFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_width(mut self, min_width: u32) -> Self {
        self.min_width = Some(min_width);
        self
    }

    pub fn min_height(mut self, min_height: u32) -> Self {
        self.min_height = Some(min_height);
        self
    }

    pub fn min_duration(mut self, seconds: u32) -> Self {
        self.min_duration = Some(seconds);
        self
    }

    pub fn max_duration(mut self, seconds: u32) -> Self {
        self.max_duration = Some(seconds);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn to_params(&self) -> Params {
        Params::new()
            .with("min_width", self.min_width)
            .with("min_height", self.min_height)
            .with("min_duration", self.min_duration)
            .with("max_duration", self.max_duration)
            .with("page", self.page)
            .with("per_page", self.per_page)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl Pagination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Replace a missing or zero page / page size with the given defaults.
    pub fn or_defaults(self, page: u32, per_page: u32) -> Self {
        Self {
            page: Some(self.page.filter(|p| *p != 0).unwrap_or(page)),
            per_page: Some(self.per_page.filter(|p| *p != 0).unwrap_or(per_page)),
        }
    }

    pub fn to_params(&self) -> Params {
        Params::new()
            .with("page", self.page)
            .with("per_page", self.per_page)
    }
}

/// Parameters for listing the media of one collection.
#[derive(Debug, Clone, Default)]
pub struct MediaQuery {
    pub collection_id: String,
    pub kind: Option<MediaKind>,
    pub sort: Option<SortOrder>,
    pub pagination: Pagination,
}

impl MediaQuery {
    /// The id becomes one percent-encoded path segment under the collections
    /// base address. An empty id addresses the collections root.
    pub fn new(collection_id: impl Into<String>) -> Self {
        Self {
            collection_id: collection_id.into(),
            ..Self::default()
        }
    }

    pub fn kind(mut self, kind: MediaKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.pagination.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.pagination.per_page = Some(per_page);
        self
    }

    pub fn to_params(&self) -> Params {
        let mut params = self.pagination.to_params();
        params.insert("type", self.kind);
        params.insert("sort", self.sort);
        params
    }
}
