use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use kira::{AudioManager, DefaultBackend, AudioManagerSettings, Tween, Decibels};
use kira::sound::FromFileError;
use kira::sound::streaming::{StreamingSoundData, StreamingSoundHandle};
use log::{debug, error};

/// Streams long tracks on named channels. Starting a channel replaces what
/// was playing on it.
pub struct AudioPlayer {
    manager: AudioManager<DefaultBackend>,
    active_channels: HashMap<String, StreamingSoundHandle<FromFileError>>,
}

impl AudioPlayer {
    /// `None` when no output device is available; the show runs silent then.
    pub fn new() -> Option<Self> {
        match AudioManager::<DefaultBackend>::new(AudioManagerSettings::default()) {
            Ok(manager) => Some(Self {
                manager,
                active_channels: HashMap::new(),
            }),
            Err(e) => {
                error!("Failed to initialize audio manager: {}", e);
                None
            }
        }
    }

    fn amplitude_to_db(amplitude: f32) -> Decibels {
        if amplitude <= 0.001 {
            Decibels::SILENCE
        } else {
            Decibels(20.0 * amplitude.log10())
        }
    }

    pub fn play(&mut self, channel: &str, path: &Path, volume: f32, looping: bool) {
        self.stop(channel, 0.0);

        let mut data = match StreamingSoundData::from_file(path) {
            Ok(d) => d,
            Err(e) => {
                error!("Failed to open audio {:?}: {}", path, e);
                return;
            }
        };
        if looping {
            data = data.loop_region(..);
        }
        data = data.volume(Self::amplitude_to_db(volume));

        match self.manager.play(data) {
            Ok(handle) => {
                debug!("Audio playing on '{}': {:?}", channel, path);
                self.active_channels.insert(channel.to_string(), handle);
            }
            Err(e) => error!("Kira play error: {}", e),
        }
    }

    pub fn stop(&mut self, channel: &str, fade_out_secs: f32) {
        if let Some(mut handle) = self.active_channels.remove(channel) {
            let tween = if fade_out_secs > 0.0 {
                Tween { duration: Duration::from_secs_f32(fade_out_secs), ..Default::default() }
            } else { Tween::default() };
            handle.stop(tween);
        }
    }

    pub fn stop_all(&mut self) {
        let channels: Vec<String> = self.active_channels.keys().cloned().collect();
        for channel in channels {
            self.stop(&channel, 0.0);
        }
    }
}
