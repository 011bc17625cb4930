use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub resizable: bool,
}

/// Background music played for the whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Asset key of the track, empty to disable
    pub music: String,
    pub music_volume: f32,
    pub music_loop: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "数字江南·智慧苏州".to_string(),
            resizable: true,
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            music: "preview.mp3".to_string(),
            music_volume: 0.3,
            music_loop: true,
        }
    }
}
