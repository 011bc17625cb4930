use std::time::Duration;
use jiangnan_ui::widgets::{Label, Panel};
use jiangnan_ui::{Color, Rect, UiRenderer};

use crate::clock::Timestamp;
use crate::config::{checked_fps, DEFAULT_VIDEO_FPS};
use crate::event::InputEvent;
use crate::runtime::{MediaStream, SceneCtx, Texture};
use crate::scene::{ClickGate, PendingTransition, Scene, SceneRequest, Transition, TransitionSlot};
use super::content::{VIDEO_SKIP, VIDEO_SUBTITLE, VIDEO_TITLE};
use super::pulse_alpha;

pub const VIEWPORT: Rect = Rect::new(50.0, 100.0, 700.0, 394.0);
pub const PROGRESS_BAR: Rect = Rect::new(50.0, 520.0, 700.0, 10.0);
pub const SKIP_AREA: Rect = Rect::new(650.0, 530.0, 130.0, 50.0);
/// Vertical reach of the progress bar hit area around its centre line
const SEEK_REACH: f32 = 10.0;
const HANDLE_RADIUS: f32 = 8.0;

/// Playback position over an open stream, advanced by wall time.
pub struct StreamCursor {
    stream: Box<dyn MediaStream>,
    frame_time: Duration,
    start: Duration,
    frames: u32,
    accumulated: Duration,
    last_sample: Timestamp,
    frame: Option<Texture>,
}

impl StreamCursor {
    pub fn new(stream: Box<dyn MediaStream>, start: Duration, now: Timestamp) -> Self {
        let fps = checked_fps(stream.fps()).unwrap_or_else(|| {
            log::warn!("Stream reports fps {}, assuming {}", stream.fps(), DEFAULT_VIDEO_FPS);
            DEFAULT_VIDEO_FPS
        });

        Self {
            stream,
            frame_time: Duration::from_secs_f64(1.0 / fps),
            start,
            frames: 0,
            accumulated: Duration::ZERO,
            last_sample: now,
            frame: None,
        }
    }

    /// Pulls every frame that is due by `now`. Returns false once the stream
    /// is exhausted.
    pub fn advance(&mut self, now: Timestamp) -> bool {
        self.accumulated += now.saturating_since(self.last_sample);
        self.last_sample = now;

        while self.accumulated >= self.frame_time {
            match self.stream.next_frame() {
                Some(frame) => {
                    self.frame = Some(frame);
                    self.frames += 1;
                    self.accumulated -= self.frame_time;
                }
                None => {
                    self.frame = None;
                    return false;
                }
            }
        }
        true
    }

    pub fn position(&self) -> Duration {
        self.start + self.frame_time * self.frames
    }

    pub fn duration(&self) -> Duration {
        self.stream.duration()
    }

    /// Played fraction in 0..=1.
    pub fn progress(&self) -> f32 {
        let total = self.duration().as_secs_f64();
        if total <= 0.0 {
            return 0.0;
        }
        (self.position().as_secs_f64() / total).clamp(0.0, 1.0) as f32
    }

    pub fn frame(&self) -> Option<&Texture> {
        self.frame.as_ref()
    }
}

pub struct VideoScene {
    key: String,
    cursor: Option<StreamCursor>,
    skip_alpha: u8,
    gate: ClickGate,
    slot: TransitionSlot,
}

impl VideoScene {
    pub fn new(ctx: &mut SceneCtx) -> Self {
        let key = ctx.config.video.stream.clone();
        let mut slot = TransitionSlot::new();

        let cursor = match ctx.assets.open_stream(&key, Duration::ZERO) {
            Ok(stream) => {
                log::info!("Playing '{}' ({:.1}s)", key, stream.duration().as_secs_f64());
                Some(StreamCursor::new(stream, Duration::ZERO, ctx.now()))
            }
            Err(e) => {
                log::error!("Video unavailable, skipping to the end: {}", e);
                ctx.request(&mut slot, Transition::Goto(SceneRequest::Thanks));
                None
            }
        };

        Self {
            key,
            cursor,
            skip_alpha: 128,
            gate: ClickGate::new(ctx.config.timing.click_delay()),
            slot,
        }
    }

    pub fn cursor(&self) -> Option<&StreamCursor> {
        self.cursor.as_ref()
    }

    fn seek(&mut self, x: f32, ctx: &mut SceneCtx) {
        let Some(cursor) = &self.cursor else { return };
        let fraction = ((x - PROGRESS_BAR.x) / PROGRESS_BAR.w).clamp(0.0, 1.0);
        let start = cursor.duration().mul_f64(fraction as f64);

        match ctx.assets.open_stream(&self.key, start) {
            Ok(stream) => {
                log::debug!("Seek to {:.2}s", start.as_secs_f64());
                // the old stream closes when its cursor drops
                self.cursor = Some(StreamCursor::new(stream, start, ctx.now()));
            }
            Err(e) => log::warn!("Seek failed, keeping current position: {}", e),
        }
    }
}

fn on_progress_bar((x, y): (f32, f32)) -> bool {
    let (_, center_y) = PROGRESS_BAR.center_point();
    (y - center_y).abs() < SEEK_REACH && x >= PROGRESS_BAR.x && x <= PROGRESS_BAR.right()
}

impl Scene for VideoScene {
    fn name(&self) -> &'static str {
        "Video"
    }

    fn handle_input(&mut self, events: &[InputEvent], ctx: &mut SceneCtx) {
        if self.slot.is_set() {
            return;
        }
        for event in events {
            let Some(pos) = event.left_click() else { continue };
            if !self.gate.try_accept(ctx.now()) {
                return;
            }
            if SKIP_AREA.contains(pos.0, pos.1) {
                log::info!("Video skipped");
                self.cursor = None;
                ctx.request(&mut self.slot, Transition::Goto(SceneRequest::Thanks));
                return;
            }
            if on_progress_bar(pos) {
                self.seek(pos.0, ctx);
            }
        }
    }

    fn tick(&mut self, ctx: &mut SceneCtx) {
        let Some(cursor) = &mut self.cursor else { return };

        if !cursor.advance(ctx.now()) {
            log::info!("Video finished");
            self.cursor = None;
            ctx.request(&mut self.slot, Transition::Goto(SceneRequest::Thanks));
            return;
        }
        self.skip_alpha = pulse_alpha(ctx.now());
    }

    fn render(&self, ui: &mut dyn UiRenderer) {
        let (w, h) = ui.size();
        ui.clear(Color::BLACK);

        let Some(cursor) = &self.cursor else { return };

        if let Some(frame) = cursor.frame() {
            ui.draw_image(frame.id(), None, VIEWPORT, 255);
        }

        let (band, _) = Rect::new(0.0, 0.0, w, h).split_top(80.0);
        Panel::new().color(Color::rgba(0, 0, 0, 200)).show(ui, band);
        Label::new(VIDEO_TITLE)
            .color(Color::WHITE)
            .show(ui, Rect::new(20.0, 20.0, w - 40.0, 30.0));
        Label::new(VIDEO_SUBTITLE)
            .color(Color::rgb(200, 200, 200))
            .show(ui, Rect::new(20.0, 50.0, w - 40.0, 30.0));

        ui.draw_rect(PROGRESS_BAR, Color::GRAY);
        let played = PROGRESS_BAR.w * cursor.progress();
        if played > 0.0 {
            let filled = Rect::new(PROGRESS_BAR.x, PROGRESS_BAR.y, played, PROGRESS_BAR.h);
            ui.draw_rect(filled, Color::WHITE);
        }
        let (_, bar_y) = PROGRESS_BAR.center_point();
        ui.draw_circle((PROGRESS_BAR.x + played, bar_y), HANDLE_RADIUS, Color::WHITE);

        Label::new(VIDEO_SKIP)
            .color(Color::WHITE)
            .alpha(self.skip_alpha)
            .show(ui, Rect::new(680.0, 545.0, 120.0, 30.0));
    }

    fn release(&mut self) {
        self.cursor = None;
    }

    fn pending_transition(&self) -> Option<&PendingTransition> {
        self.slot.get()
    }

    fn click_gate(&mut self) -> &mut ClickGate {
        &mut self.gate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_hit_area() {
        assert!(on_progress_bar((50.0, 525.0)));
        assert!(on_progress_bar((750.0, 516.0)));
        assert!(!on_progress_bar((400.0, 535.0)));
        assert!(!on_progress_bar((49.0, 525.0)));
    }
}
