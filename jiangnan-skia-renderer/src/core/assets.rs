use std::cell::{Cell, Ref, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;
use walkdir::WalkDir;
use skia_safe::{Data, FontMgr, Image};
use skia_safe::textlayout::TypefaceFontProvider;
use jiangnan_core::config::{checked_fps, DEFAULT_VIDEO_FPS};
use jiangnan_core::runtime::TextureStore;
use jiangnan_core::{AssetError, AssetResolver, MediaStream, Texture};
use jiangnan_ui::ImageId;

use crate::core::video::FrameSequence;

/// Decoded images currently owned by some `Texture`.
#[derive(Default)]
pub struct TextureCache {
    images: RefCell<HashMap<ImageId, Image>>,
    next_id: Cell<u64>,
}

impl TextureCache {
    pub fn insert(self: &Rc<Self>, image: Image) -> Texture {
        let id = ImageId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let size = (image.width().max(0) as u32, image.height().max(0) as u32);
        self.images.borrow_mut().insert(id, image);
        Texture::new(id, size, self.clone())
    }

    pub fn images(&self) -> Ref<'_, HashMap<ImageId, Image>> {
        self.images.borrow()
    }

    pub fn len(&self) -> usize {
        self.images.borrow().len()
    }
}

impl TextureStore for TextureCache {
    fn evict(&self, id: ImageId) {
        if self.images.borrow_mut().remove(&id).is_some() {
            log::debug!("Evicted image {:?}, {} left", id, self.len());
        }
    }
}

pub(crate) fn decode(key: &str, path: &Path) -> Result<Image, AssetError> {
    let bytes = fs::read(path).map_err(|e| AssetError::Decode {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    Image::from_encoded(Data::new_copy(&bytes)).ok_or_else(|| AssetError::Decode {
        key: key.to_string(),
        reason: "unsupported image data".to_string(),
    })
}

fn is_image(ext: &str) -> bool {
    matches!(ext, "png" | "jpg" | "jpeg")
}

/// Trailing number of a frame's file name: `video/frame_12.png` is 12.
fn frame_number(key: &str) -> Option<u64> {
    let name = key.rsplit('/').next()?;
    let stem = name.rsplit_once('.').map_or(name, |(stem, _)| stem);
    let prefix = stem.trim_end_matches(|c: char| c.is_ascii_digit());
    stem[prefix.len()..].parse().ok()
}

/// Orders frame keys by their number, so `2.png` plays before `10.png`.
/// Unnumbered names go first, by name.
fn in_playback_order(mut keys: Vec<String>) -> Vec<String> {
    keys.sort_by_cached_key(|k| (frame_number(k), k.clone()));
    keys
}

/// Scans the asset root once and resolves keys (root-relative paths with `/`
/// separators) on demand.
pub struct AssetManager {
    image_paths: BTreeMap<String, PathBuf>,
    audio_paths: HashMap<String, PathBuf>,
    font_paths: HashMap<String, PathBuf>,
    root_path: PathBuf,
    cache: Rc<TextureCache>,
    stream_fps: f64,
}

impl AssetManager {
    pub fn new(root_path: &str, stream_fps: f64) -> Self {
        let stream_fps = checked_fps(stream_fps).unwrap_or_else(|| {
            log::warn!("Invalid [video].fps {}, using {}", stream_fps, DEFAULT_VIDEO_FPS);
            DEFAULT_VIDEO_FPS
        });
        let mut manager = Self {
            image_paths: BTreeMap::new(),
            audio_paths: HashMap::new(),
            font_paths: HashMap::new(),
            root_path: PathBuf::from(root_path),
            cache: Rc::new(TextureCache::default()),
            stream_fps,
        };

        manager.scan_assets();
        manager
    }

    fn key_for(&self, path: &Path) -> Option<String> {
        let rel = path.strip_prefix(&self.root_path).ok()?;
        let parts: Vec<&str> = rel.iter().filter_map(|p| p.to_str()).collect();
        Some(parts.join("/"))
    }

    fn scan_assets(&mut self) {
        log::info!("Scanning assets in {:?}...", self.root_path);

        for entry in WalkDir::new(&self.root_path).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(ext) = path.extension().and_then(|s| s.to_str()) else { continue };
            let Some(key) = self.key_for(path) else { continue };

            match ext.to_lowercase().as_str() {
                e if is_image(e) => {
                    self.image_paths.insert(key, path.to_path_buf());
                }
                "mp3" | "wav" | "ogg" | "flac" => {
                    self.audio_paths.insert(key, path.to_path_buf());
                }
                "ttf" | "otf" | "ttc" => {
                    self.font_paths.insert(key, path.to_path_buf());
                }
                _ => {}
            }
        }

        log::info!("Asset scan complete. Images: {}, Audio: {}, Font: {}",
            self.image_paths.len(), self.audio_paths.len(), self.font_paths.len());
    }

    pub fn cache(&self) -> &Rc<TextureCache> {
        &self.cache
    }

    pub fn get_audio_path(&self, key: &str) -> Option<&PathBuf> {
        self.audio_paths.get(key)
    }

    pub fn register_fonts_to(&self, provider: &mut TypefaceFontProvider, alias: &str) -> usize {
        let mut count = 0;
        for (name, path) in &self.font_paths {
            match fs::read(path) {
                Ok(bytes) => {
                    let data = Data::new_copy(&bytes);
                    if let Some(typeface) = FontMgr::default().new_from_data(&data, None) {
                        provider.register_typeface(typeface, Some(alias));
                        log::info!("Registered bundled font: '{}'", name);
                        count += 1;
                    } else {
                        log::error!("Failed to parse font: {:?}", path);
                    }
                },
                Err(e) => {
                    log::error!("Failed to read font file {:?}: {}", path, e);
                }
            }
        }
        count
    }
}

impl AssetResolver for AssetManager {
    fn load_image(&mut self, key: &str) -> Result<Texture, AssetError> {
        let path = self
            .image_paths
            .get(key)
            .ok_or_else(|| AssetError::NotFound(key.to_string()))?;
        log::debug!("Loading asset: {} -> {:?}", key, path);

        let image = decode(key, path)?;
        Ok(self.cache.insert(image))
    }

    fn list_images(&self, dir: &str) -> Vec<String> {
        let prefix = format!("{}/", dir.trim_end_matches('/'));
        self.image_paths
            .keys()
            .filter(|k| k.strip_prefix(&prefix).is_some_and(|rest| !rest.contains('/')))
            .cloned()
            .collect()
    }

    fn open_stream(&mut self, key: &str, start: Duration) -> Result<Box<dyn MediaStream>, AssetError> {
        let frames: Vec<PathBuf> = in_playback_order(self.list_images(key))
            .iter()
            .filter_map(|k| self.image_paths.get(k).cloned())
            .collect();
        if frames.is_empty() {
            return Err(AssetError::Stream {
                key: key.to_string(),
                reason: "no frames found".to_string(),
            });
        }

        let stream = FrameSequence::new(key, frames, self.stream_fps, self.cache.clone(), start);
        Ok(Box::new(stream))
    }
}
