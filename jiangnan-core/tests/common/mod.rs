#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;
use std::time::Duration;

use jiangnan_core::config::CoreConfig;
use jiangnan_core::runtime::TextureStore;
use jiangnan_core::{AssetError, AssetResolver, MediaStream, Stage, Texture};
use jiangnan_ui::{Alignment, Color, ImageId, Rect, UiRenderer};

/// Tracks which fake textures are still alive.
#[derive(Default)]
pub struct LiveTextures {
    next: Cell<u64>,
    live: RefCell<HashSet<u64>>,
}

impl LiveTextures {
    pub fn make(self: &Rc<Self>, size: (u32, u32)) -> Texture {
        let id = self.next.get() + 1;
        self.next.set(id);
        self.live.borrow_mut().insert(id);
        Texture::new(ImageId(id), size, self.clone())
    }

    pub fn count(&self) -> usize {
        self.live.borrow().len()
    }
}

impl TextureStore for LiveTextures {
    fn evict(&self, id: ImageId) {
        self.live.borrow_mut().remove(&id.0);
    }
}

pub struct FakeStream {
    textures: Rc<LiveTextures>,
    fps: f64,
    remaining: usize,
    total: usize,
}

impl MediaStream for FakeStream {
    fn fps(&self) -> f64 {
        self.fps
    }

    fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.total as f64 / self.fps)
    }

    fn next_frame(&mut self) -> Option<Texture> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.textures.make((700, 394)))
    }
}

/// In-memory resolver: every image key exists unless listed as missing.
pub struct FakeAssets {
    pub textures: Rc<LiveTextures>,
    pub missing: Vec<String>,
    pub gallery: Vec<String>,
    /// (fps, frames) of the video stream, `None` when it is absent
    pub stream: Option<(f64, usize)>,
    pub opened: Vec<(String, Duration)>,
}

impl FakeAssets {
    pub fn new() -> Self {
        Self {
            textures: Rc::new(LiveTextures::default()),
            missing: Vec::new(),
            gallery: vec!["image/a.jpg".into(), "image/b.jpg".into(), "image/guide.png".into()],
            stream: Some((24.0, 48)),
            opened: Vec::new(),
        }
    }

    pub fn without(mut self, key: &str) -> Self {
        self.missing.push(key.to_string());
        self
    }

    pub fn without_stream(mut self) -> Self {
        self.stream = None;
        self
    }

    pub fn live(&self) -> usize {
        self.textures.count()
    }
}

impl AssetResolver for FakeAssets {
    fn load_image(&mut self, key: &str) -> Result<Texture, AssetError> {
        if self.missing.iter().any(|m| m == key) {
            return Err(AssetError::NotFound(key.to_string()));
        }
        Ok(self.textures.make((300, 300)))
    }

    fn list_images(&self, dir: &str) -> Vec<String> {
        self.gallery
            .iter()
            .filter(|k| k.starts_with(&format!("{dir}/")))
            .cloned()
            .collect()
    }

    fn open_stream(&mut self, key: &str, start: Duration) -> Result<Box<dyn MediaStream>, AssetError> {
        self.opened.push((key.to_string(), start));
        let (fps, frames) = self.stream.ok_or_else(|| AssetError::NotFound(key.to_string()))?;
        let skipped = (start.as_secs_f64() * fps) as usize;
        Ok(Box::new(FakeStream {
            textures: self.textures.clone(),
            fps,
            remaining: frames.saturating_sub(skipped),
            total: frames,
        }))
    }
}

/// Records draw calls as short strings.
#[derive(Default)]
pub struct RecordingUi {
    pub calls: Vec<String>,
}

impl RecordingUi {
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| c.strip_prefix("text:"))
            .collect()
    }

    pub fn images(&self) -> usize {
        self.calls.iter().filter(|c| c.starts_with("image:")).count()
    }
}

impl UiRenderer for RecordingUi {
    fn size(&self) -> (f32, f32) {
        (800.0, 600.0)
    }

    fn clear(&mut self, color: Color) {
        self.calls.push(format!("clear:{},{},{}", color.r, color.g, color.b));
    }

    fn draw_rect(&mut self, _rect: Rect, _color: Color) {
        self.calls.push("rect".into());
    }

    fn draw_border(&mut self, _rect: Rect, _color: Color, _width: f32) {
        self.calls.push("border".into());
    }

    fn draw_vertical_gradient(&mut self, _rect: Rect, _top: Color, _bottom: Color) {
        self.calls.push("gradient".into());
    }

    fn draw_text(&mut self, text: &str, _rect: Rect, _color: Color, _size: f32, _align: Alignment) {
        self.calls.push(format!("text:{text}"));
    }

    fn draw_circle(&mut self, _center: (f32, f32), _radius: f32, _color: Color) {
        self.calls.push("circle".into());
    }

    fn draw_image(&mut self, image: ImageId, _src: Option<Rect>, _dst: Rect, _alpha: u8) {
        self.calls.push(format!("image:{}", image.0));
    }
}

pub fn stage() -> Stage {
    let mut config = CoreConfig::default();
    config.presentation.seed = Some(7);
    Stage::new(config)
}
