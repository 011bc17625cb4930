use std::fmt;
use std::rc::Rc;
use std::time::Duration;
use jiangnan_ui::ImageId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset '{0}' not found")]
    NotFound(String),
    #[error("failed to decode '{key}': {reason}")]
    Decode { key: String, reason: String },
    #[error("failed to open stream '{key}': {reason}")]
    Stream { key: String, reason: String },
}

/// Host-side storage that owns decoded pixels.
pub trait TextureStore {
    fn evict(&self, id: ImageId);
}

/// Exclusive handle to a decoded image. Dropping it evicts the pixels from the
/// host cache, so a scene frees its images by dropping its textures.
pub struct Texture {
    id: ImageId,
    size: (u32, u32),
    store: Rc<dyn TextureStore>,
}

impl Texture {
    pub fn new(id: ImageId, size: (u32, u32), store: Rc<dyn TextureStore>) -> Self {
        Self { id, size, store }
    }

    pub fn id(&self) -> ImageId {
        self.id
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        self.store.evict(self.id);
    }
}

impl fmt::Debug for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Texture")
            .field("id", &self.id)
            .field("size", &self.size)
            .finish()
    }
}

/// An open, forward-only video source.
pub trait MediaStream {
    fn fps(&self) -> f64;
    fn duration(&self) -> Duration;
    /// Next decoded frame, `None` once the stream is exhausted.
    fn next_frame(&mut self) -> Option<Texture>;
}

/// Resolves asset keys (paths relative to the asset root) into decoded resources.
pub trait AssetResolver {
    fn load_image(&mut self, key: &str) -> Result<Texture, AssetError>;

    /// Keys (`dir/name`) of the images directly inside `dir`, sorted.
    fn list_images(&self, dir: &str) -> Vec<String>;

    /// Opens `key` positioned at `start`.
    fn open_stream(&mut self, key: &str, start: Duration) -> Result<Box<dyn MediaStream>, AssetError>;
}
