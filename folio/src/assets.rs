// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named image assets.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::{AssetError, Image};

/// Names of the images a gallery shows when the host supplies none.
pub const DEFAULT_ASSETS: [&str; 6] = ["photo1", "photo2", "photo3", "photo4", "photo5", "photo6"];

/// File extensions [`DirectoryLoader`] tries, in order.
pub const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "webp", "gif", "bmp"];

/// Resolves an asset name to a decoded image.
pub trait AssetLoader {
    /// Loads the image called `name`.
    ///
    /// # Errors
    ///
    /// Returns an [`AssetError`] if the asset does not exist or cannot be
    /// decoded.
    fn load(&self, name: &str) -> Result<Image, AssetError>;
}

/// Loads `<root>/<name>.<ext>` from disk for each of [`IMAGE_EXTENSIONS`].
#[derive(Clone, Debug)]
pub struct DirectoryLoader {
    root: PathBuf,
}

impl DirectoryLoader {
    /// Creates a loader reading from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory assets are read from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn find(&self, name: &str) -> Option<PathBuf> {
        IMAGE_EXTENSIONS
            .iter()
            .map(|ext| self.root.join(format!("{name}.{ext}")))
            .find(|path| path.is_file())
    }
}

impl AssetLoader for DirectoryLoader {
    fn load(&self, name: &str) -> Result<Image, AssetError> {
        let path = self
            .find(name)
            .ok_or_else(|| AssetError::NotFound(name.to_owned()))?;
        let bytes = std::fs::read(&path).map_err(|source| AssetError::Io {
            path: path.clone(),
            source,
        })?;
        let decoded = image::load_from_memory(&bytes)?;
        tracing::debug!(
            path = %path.display(),
            width = decoded.width(),
            height = decoded.height(),
            "decoded asset"
        );
        Image::try_from(decoded.into_rgba8())
    }
}

/// Serves images from memory, for tests and hosts that bundle their assets.
#[derive(Clone, Default)]
pub struct MemoryLoader {
    images: HashMap<String, Image>,
}

impl fmt::Debug for MemoryLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.images.keys().collect();
        names.sort();
        f.debug_struct("MemoryLoader")
            .field("names", &names)
            .finish()
    }
}

impl MemoryLoader {
    /// Creates an empty loader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `image` under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, image: Image) {
        self.images.insert(name.into(), image);
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, image: Image) -> Self {
        self.insert(name, image);
        self
    }

    /// Number of registered images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns `true` if no image is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl AssetLoader for MemoryLoader {
    fn load(&self, name: &str) -> Result<Image, AssetError> {
        self.images
            .get(name)
            .cloned()
            .ok_or_else(|| AssetError::NotFound(name.to_owned()))
    }
}
