// SPDX-License-Identifier: GPL-3.0-or-later

mod collections;
mod photos;
mod videos;

pub use collections::CollectionEndpoints;
pub use photos::PhotoEndpoints;
pub use videos::VideoEndpoints;
