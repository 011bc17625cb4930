use std::fs;
use std::path::Path;
use anyhow::Context;
use serde::Serialize;
use jiangnan_core::config::{PresentationConfig, SystemConfig, TimingConfig, VideoConfig};
use jiangnan_skia_renderer::config::{AudioConfig, WindowConfig};

#[derive(Serialize, Default)]
struct FullConfig {
    system: SystemConfig,
    timing: TimingConfig,
    presentation: PresentationConfig,
    window: WindowConfig,
    audio: AudioConfig,
    video: VideoConfig,
}

pub fn default_config() -> anyhow::Result<String> {
    toml::to_string_pretty(&FullConfig::default()).context("Failed to serialize default config")
}

pub fn ensure_config_exists(path: &str) -> anyhow::Result<()> {
    if Path::new(path).exists() {
        return Ok(());
    }

    println!("Creating default configuration at '{}'...", path);
    fs::write(path, default_config()?).with_context(|| format!("Failed to write config file '{}'", path))?;
    println!("Config file created successfully.");
    Ok(())
}
