// SPDX-License-Identifier: MPL-2.0
//! Frame image loading.
//!
//! This module decodes frame and static images, abstracts where they come
//! from, and preloads whole frame sets.

pub mod image;
pub mod preload;
pub mod source;
pub mod static_cache;

// Re-export commonly used types
pub use image::{load_image, ImageData};
pub use preload::{
    fetch_asset, fetch_frame, AssetPreloader, FrameLoaded, FrameRequest, Generation, LoadOutcome,
    LoadState, PreloadPlan,
};
pub use source::{FrameSource, FsFrameSource};
pub use static_cache::StaticImageCache;
