// SPDX-License-Identifier: MPL-2.0
//! Cache of decoded static (cockpit) images.
//!
//! The static image is only decoded when the static view is first shown for a
//! variant. Switching between variants and back should not decode it again,
//! so decoded images are kept in a small LRU keyed by asset path.
//!
//! # Design
//!
//! - **LRU eviction**: Least recently used images are evicted first
//! - **Memory-bounded**: Total cache size limited by a byte budget
//! - **Path-keyed**: Images indexed by their asset path

use super::image::ImageData;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Default byte budget (64 MB).
pub const DEFAULT_STATIC_CACHE_BYTES: usize = 64 * 1024 * 1024;

/// Default maximum number of cached static images.
pub const DEFAULT_STATIC_CACHE_ENTRIES: usize = 8;

const FALLBACK_ENTRIES: NonZeroUsize = match NonZeroUsize::new(DEFAULT_STATIC_CACHE_ENTRIES) {
    Some(n) => n,
    None => NonZeroUsize::MIN,
};

/// LRU cache of decoded static images.
pub struct StaticImageCache {
    cache: LruCache<String, ImageData>,
    max_bytes: usize,
    current_bytes: usize,
}

impl StaticImageCache {
    #[must_use]
    pub fn new(max_entries: usize, max_bytes: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(FALLBACK_ENTRIES);
        Self {
            cache: LruCache::new(capacity),
            max_bytes,
            current_bytes: 0,
        }
    }

    /// Inserts a decoded image.
    ///
    /// Returns `false` if the image alone exceeds the byte budget.
    pub fn insert(&mut self, path: String, image: ImageData) -> bool {
        let size = image.size_bytes();
        if size > self.max_bytes {
            return false;
        }

        if let Some(existing) = self.cache.pop(&path) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes());
        }

        while self.current_bytes + size > self.max_bytes && !self.cache.is_empty() {
            if let Some((_, evicted)) = self.cache.pop_lru() {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes());
            }
        }

        if let Some((_, evicted)) = self.cache.push(path, image) {
            // Capacity eviction by entry count.
            self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes());
        }
        self.current_bytes += size;
        true
    }

    /// Gets an image, marking it as recently used.
    pub fn get(&mut self, path: &str) -> Option<ImageData> {
        self.cache.get(path).cloned()
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.cache.contains(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }
}

impl Default for StaticImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_STATIC_CACHE_ENTRIES, DEFAULT_STATIC_CACHE_BYTES)
    }
}

impl std::fmt::Debug for StaticImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticImageCache")
            .field("entries", &self.cache.len())
            .field("memory_usage", &self.current_bytes)
            .field("max_bytes", &self.max_bytes)
            .finish()
    }
}
