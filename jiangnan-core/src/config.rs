use std::time::Duration;
use serde::{Deserialize, Serialize};

use crate::scene::SceneRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub assets_path: String,
    pub log_path:    String,
    pub log_level:   String,
}

/// Debounce, cooldown and frame cadence. Both click windows are inclusive:
/// a click exactly `click_delay_ms` after the previous accepted one passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub click_delay_ms:   u64,
    pub swap_cooldown_ms: u64,
    pub frame_rate:       u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartScene {
    Title,
    Quiz,
    Puzzle,
    Video,
    Thanks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    pub width:  u32,
    pub height: u32,
    /// Fixed seed for backgrounds and the puzzle shuffle
    pub seed: Option<u64>,
    pub start_scene: StartScene,
}

pub const DEFAULT_VIDEO_FPS: f64 = 24.0;

/// `fps` when it is a usable playback rate, `None` for zero, negative or NaN.
pub fn checked_fps(fps: f64) -> Option<f64> {
    (fps.is_finite() && fps > 0.0).then_some(fps)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    pub stream: String,
    /// Playback rate of frame-sequence streams
    pub fps: f64,
}

/// Everything the director and the scenes read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoreConfig {
    pub timing: TimingConfig,
    pub presentation: PresentationConfig,
    pub video: VideoConfig,
}

impl CoreConfig {
    /// Reads the `[timing]`, `[presentation]` and `[video]` sections.
    pub fn load() -> Self {
        Self {
            timing: jiangnan_shared::config::get("timing"),
            presentation: jiangnan_shared::config::get("presentation"),
            video: jiangnan_shared::config::get("video"),
        }
    }
}

impl TimingConfig {
    pub fn click_delay(&self) -> Duration {
        Duration::from_millis(self.click_delay_ms)
    }

    pub fn swap_cooldown(&self) -> Duration {
        Duration::from_millis(self.swap_cooldown_ms)
    }
}

impl StartScene {
    pub fn request(self) -> SceneRequest {
        match self {
            StartScene::Title => SceneRequest::Title,
            StartScene::Quiz => SceneRequest::Quiz,
            StartScene::Puzzle => SceneRequest::Puzzle,
            StartScene::Video => SceneRequest::Video,
            StartScene::Thanks => SceneRequest::Thanks,
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            assets_path: "assets/".into(),
            log_path:    "logs/".into(),
            log_level:   "info".into(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            click_delay_ms: 200,
            swap_cooldown_ms: 200,
            frame_rate: 60,
        }
    }
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            seed: None,
            start_scene: StartScene::Title,
        }
    }
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            stream: "video".into(),
            fps: DEFAULT_VIDEO_FPS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiangnan_shared::config::{parse, section};

    #[test]
    fn sections_from_toml() {
        let table = parse(r#"
[timing]
click_delay_ms = 300

[presentation]
seed = 7
start_scene = "puzzle"
"#);
        let timing: TimingConfig = section(&table, "timing");
        assert_eq!(timing.click_delay(), Duration::from_millis(300));
        assert_eq!(timing.swap_cooldown(), Duration::from_millis(200));

        let presentation: PresentationConfig = section(&table, "presentation");
        assert_eq!(presentation.seed, Some(7));
        assert_eq!(presentation.start_scene.request(), SceneRequest::Puzzle);
        assert_eq!((presentation.width, presentation.height), (800, 600));
    }

    #[test]
    fn unusable_fps_is_rejected() {
        assert_eq!(checked_fps(30.0), Some(30.0));
        assert_eq!(checked_fps(0.0), None);
        assert_eq!(checked_fps(-12.0), None);
        assert_eq!(checked_fps(f64::NAN), None);
        assert_eq!(checked_fps(f64::INFINITY), None);
    }
}
