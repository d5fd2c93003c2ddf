//! Keyed raster cache shared by the picker widgets.
//!
//! A cached raster is Clean while its key still matches the state it was
//! built from and Dirty otherwise. Dirty rasters are rebuilt lazily at the
//! next paint, so an invalidation (track resize, hue change) is always
//! visible to the very next paint pass.

use std::sync::Arc;

use floem::peniko::{self, Blob};

pub(crate) struct RasterCache<K> {
    key: Option<K>,
    img: Option<peniko::Image>,
    hash: Vec<u8>,
}

impl<K: PartialEq> RasterCache<K> {
    pub fn new() -> Self {
        Self {
            key: None,
            img: None,
            hash: Vec::new(),
        }
    }

    /// True when the cached raster was built from `key`.
    pub fn is_clean(&self, key: &K) -> bool {
        self.img.is_some() && self.key.as_ref() == Some(key)
    }

    /// Drop the cached raster; the next [`ensure`](Self::ensure) rebuilds it.
    pub fn invalidate(&mut self) {
        self.key = None;
        self.img = None;
    }

    /// Rebuild the raster from `rasterize` unless it is already Clean for
    /// `key`. `rasterize` returns RGBA8 pixels plus width and height.
    pub fn ensure(&mut self, key: K, rasterize: impl FnOnce() -> (Vec<u8>, u32, u32)) {
        if self.is_clean(&key) {
            return;
        }
        let (pixels, width, height) = rasterize();
        let blob = Blob::new(Arc::new(pixels));
        self.hash = blob.id().to_le_bytes().to_vec();
        self.img = Some(peniko::Image::new(
            blob,
            peniko::Format::Rgba8,
            width,
            height,
        ));
        self.key = Some(key);
    }

    /// The cached raster and its draw hash, if one has been built.
    pub fn image(&self) -> Option<(peniko::Image, &[u8])> {
        self.img
            .as_ref()
            .map(|img| (img.clone(), self.hash.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn pixel() -> (Vec<u8>, u32, u32) {
        (vec![0, 0, 0, 255], 1, 1)
    }

    #[test]
    fn rebuilds_only_when_key_changes() {
        let calls = Cell::new(0);
        let mut cache: RasterCache<u32> = RasterCache::new();

        cache.ensure(7, || {
            calls.set(calls.get() + 1);
            pixel()
        });
        assert_eq!(calls.get(), 1);
        assert!(cache.is_clean(&7));
        assert!(cache.image().is_some());

        cache.ensure(7, || {
            calls.set(calls.get() + 1);
            pixel()
        });
        assert_eq!(calls.get(), 1);

        cache.ensure(8, || {
            calls.set(calls.get() + 1);
            pixel()
        });
        assert_eq!(calls.get(), 2);
        assert!(!cache.is_clean(&7));
    }

    #[test]
    fn invalidate_forces_rebuild() {
        let calls = Cell::new(0);
        let mut cache: RasterCache<u64> = RasterCache::new();

        cache.ensure(1, || {
            calls.set(calls.get() + 1);
            pixel()
        });
        cache.invalidate();
        assert!(!cache.is_clean(&1));
        assert!(cache.image().is_none());

        cache.ensure(1, || {
            calls.set(calls.get() + 1);
            pixel()
        });
        assert_eq!(calls.get(), 2);
    }
}
