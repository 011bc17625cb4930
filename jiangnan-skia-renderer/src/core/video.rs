use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;
use jiangnan_core::{MediaStream, Texture};

use crate::core::assets::{decode, TextureCache};

/// A directory of numbered stills played back at a fixed rate.
pub struct FrameSequence {
    key: String,
    frames: Vec<PathBuf>,
    next: usize,
    fps: f64,
    cache: Rc<TextureCache>,
}

impl FrameSequence {
    /// `frames` must already be in playback order.
    pub fn new(key: &str, frames: Vec<PathBuf>, fps: f64, cache: Rc<TextureCache>, start: Duration) -> Self {
        let next = if fps > 0.0 {
            (start.as_secs_f64() * fps) as usize
        } else {
            0
        };
        log::debug!("Stream '{}': {} frames, starting at {}", key, frames.len(), next);

        Self {
            key: key.to_string(),
            frames,
            next,
            fps,
            cache,
        }
    }
}

impl MediaStream for FrameSequence {
    fn fps(&self) -> f64 {
        self.fps
    }

    fn duration(&self) -> Duration {
        if self.fps <= 0.0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.frames.len() as f64 / self.fps)
    }

    fn next_frame(&mut self) -> Option<Texture> {
        while let Some(path) = self.frames.get(self.next) {
            self.next += 1;
            match decode(&self.key, path) {
                Ok(image) => return Some(self.cache.insert(image)),
                // a broken frame is skipped, not fatal
                Err(e) => log::warn!("{}", e),
            }
        }
        None
    }
}
