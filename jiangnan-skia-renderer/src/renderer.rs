use crate::core::{fonts, AssetManager, AudioPlayer, Painter};
use crate::config::{AudioConfig, WindowConfig};

use winit::{
    event_loop::{ControlFlow, EventLoop, ActiveEventLoop},
    application::ApplicationHandler,
    window::{Window, WindowId},
    event::{WindowEvent, ElementState, MouseButton},
    dpi::{LogicalSize, PhysicalSize},
    error::EventLoopError,
};
use pixels::{Pixels, SurfaceTexture};
use skia_safe::{surfaces, AlphaType, ColorType, ImageInfo, Surface};
use skia_safe::textlayout::FontCollection;
use std::mem;
use std::sync::Arc;
use std::time::{Duration, Instant};
use jiangnan_core::config::{CoreConfig, SystemConfig};
use jiangnan_core::{
    Clock, Director, FrameStatus, InputEvent, PointerButton, SceneCatalog, Stage, SystemClock,
};
use jiangnan_ui::input::{letterbox, to_logical};

const MUSIC_CHANNEL: &str = "music";

struct Presenter {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    surface: Surface,
}

impl Presenter {
    fn new(window: Arc<Window>) -> Result<Self, String> {
        let size = window.inner_size();
        let (w, h) = (size.width.max(1), size.height.max(1));
        let surface_texture = SurfaceTexture::new(w, h, window.clone());
        let pixels = Pixels::new(w, h, surface_texture).map_err(|e| e.to_string())?;
        let surface = raster_surface(w, h)?;
        Ok(Self { window, pixels, surface })
    }

    fn resize(&mut self, size: PhysicalSize<u32>) -> Result<(), String> {
        if size.width == 0 || size.height == 0 {
            return Ok(());
        }
        self.pixels
            .resize_surface(size.width, size.height)
            .map_err(|e| e.to_string())?;
        self.pixels
            .resize_buffer(size.width, size.height)
            .map_err(|e| e.to_string())?;
        self.surface = raster_surface(size.width, size.height)?;
        Ok(())
    }

    fn size(&self) -> (f32, f32) {
        (self.surface.width() as f32, self.surface.height() as f32)
    }

    /// Copies the skia surface into the pixels frame and presents it.
    fn present(&mut self) -> Result<(), String> {
        let info = rgba_info(self.surface.width() as u32, self.surface.height() as u32);
        let row_bytes = info.min_row_bytes();
        if !self.surface.read_pixels(&info, self.pixels.frame_mut(), row_bytes, (0, 0)) {
            return Err("failed to read back the skia surface".to_string());
        }
        self.pixels.render().map_err(|e| e.to_string())
    }
}

fn rgba_info(w: u32, h: u32) -> ImageInfo {
    ImageInfo::new((w as i32, h as i32), ColorType::RGBA8888, AlphaType::Premul, None)
}

fn raster_surface(w: u32, h: u32) -> Result<Surface, String> {
    surfaces::raster(&rgba_info(w, h), None, None)
        .ok_or_else(|| format!("failed to create a {}x{} raster surface", w, h))
}

pub struct SkiaRenderer {
    presenter: Option<Presenter>,
    assets: AssetManager,
    audio_player: Option<AudioPlayer>,
    fonts: FontCollection,
    director: Director<SceneCatalog>,
    clock: SystemClock,

    design: (f32, f32),
    /// Last cursor position in design coordinates
    pointer_pos: (f32, f32),
    pending_events: Vec<InputEvent>,

    frame_interval: Duration,
    next_frame: Instant,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        let sys_cfg: SystemConfig = jiangnan_shared::config::get("system");
        let core_cfg = CoreConfig::load();
        let audio_cfg: AudioConfig = jiangnan_shared::config::get("audio");

        let mut assets = AssetManager::new(&sys_cfg.assets_path, core_cfg.video.fps);
        let fonts = fonts::build_collection(&assets);
        let clock = SystemClock::new(core_cfg.timing.frame_rate);

        let design = (
            core_cfg.presentation.width as f32,
            core_cfg.presentation.height as f32,
        );
        let first = core_cfg.presentation.start_scene.request();
        let mut director = Director::new(SceneCatalog, Stage::new(core_cfg));
        director.start(first, &clock, &mut assets);

        let mut audio_player = AudioPlayer::new();
        if let Some(player) = audio_player.as_mut() {
            match assets.get_audio_path(&audio_cfg.music) {
                Some(path) => player.play(MUSIC_CHANNEL, path, audio_cfg.music_volume, audio_cfg.music_loop),
                None if audio_cfg.music.is_empty() => {}
                None => log::warn!("Background music '{}' not found", audio_cfg.music),
            }
        }

        Self {
            presenter: None,
            assets,
            audio_player,
            fonts,
            director,
            frame_interval: clock.tick_interval(),
            clock,
            design,
            pointer_pos: (0.0, 0.0),
            pending_events: Vec::new(),
            next_frame: Instant::now(),
        }
    }

    pub fn run(mut self) -> Result<(), EventLoopError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self)
    }

    fn shutdown(&mut self) {
        self.director.shutdown();
        if let Some(player) = self.audio_player.as_mut() {
            player.stop_all();
        }
        log::info!("Shut down, {} images still cached", self.assets.cache().len());
    }

    fn logical_pointer(&self, physical: (f32, f32)) -> (f32, f32) {
        let Some(presenter) = &self.presenter else { return physical };
        let (scale, offset) = letterbox(presenter.size(), self.design);
        to_logical(physical, scale, offset)
    }

    /// Runs one fixed-rate frame: input, tick, swap, render.
    fn step(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now < self.next_frame {
            return;
        }
        self.next_frame = (self.next_frame + self.frame_interval).max(now);

        let events = mem::take(&mut self.pending_events);
        let status = self.director.update(&events, &self.clock, &mut self.assets);
        if status == FrameStatus::Terminated {
            self.shutdown();
            event_loop.exit();
            return;
        }

        if let Err(e) = self.draw(status) {
            log::error!("Present failed: {}", e);
            self.shutdown();
            event_loop.exit();
        }
    }

    /// A swap frame is presented as plain white before the new scene draws.
    fn draw(&mut self, status: FrameStatus) -> Result<(), String> {
        let Some(presenter) = self.presenter.as_mut() else { return Ok(()) };
        let (design_w, design_h) = self.design;
        let (scale, (off_x, off_y)) = letterbox(presenter.size(), self.design);

        {
            let canvas = presenter.surface.canvas();
            canvas.clear(skia_safe::Color::BLACK);
            canvas.save();
            canvas.translate(skia_safe::Vector::new(off_x, off_y));
            canvas.scale((scale, scale));
            canvas.clip_rect(skia_safe::Rect::new(0.0, 0.0, design_w, design_h), None, None);

            let images = self.assets.cache().images();
            let mut painter = Painter::new(canvas, &self.fonts, &images, self.design);
            self.director.render_frame(status, &mut painter);

            canvas.restore();
        }

        presenter.present()
    }
}

impl ApplicationHandler for SkiaRenderer {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.presenter.is_some() {
            return;
        }
        let cfg: WindowConfig = jiangnan_shared::config::get("window");
        let window_attributes = Window::default_attributes()
            .with_title(&cfg.title)
            .with_inner_size(LogicalSize::new(self.design.0 as f64, self.design.1 as f64))
            .with_resizable(cfg.resizable);

        let window = match event_loop.create_window(window_attributes) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                self.shutdown();
                event_loop.exit();
                return;
            }
        };

        match Presenter::new(window) {
            Ok(presenter) => self.presenter = Some(presenter),
            Err(e) => {
                log::error!("Failed to set up presentation: {}", e);
                self.shutdown();
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.pending_events.push(InputEvent::Quit);
                // 立即处理退出，不等下一帧
                self.next_frame = Instant::now();
                self.step(event_loop);
            }

            WindowEvent::Resized(size) => {
                if let Some(presenter) = self.presenter.as_mut() {
                    if let Err(e) = presenter.resize(size) {
                        log::error!("Resize failed: {}", e);
                        self.shutdown();
                        event_loop.exit();
                        return;
                    }
                    presenter.window.request_redraw();
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let pos = self.logical_pointer((position.x as f32, position.y as f32));
                self.pointer_pos = pos;
                self.pending_events.push(InputEvent::PointerMove { pos });
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let button = match button {
                    MouseButton::Left => PointerButton::Left,
                    MouseButton::Right => PointerButton::Right,
                    MouseButton::Middle => PointerButton::Middle,
                    _ => return,
                };
                let pos = self.pointer_pos;
                let event = match state {
                    ElementState::Pressed => InputEvent::PointerDown { button, pos },
                    ElementState::Released => InputEvent::PointerUp { button, pos },
                };
                self.pending_events.push(event);
            }

            WindowEvent::RedrawRequested => self.step(event_loop),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(presenter) = &self.presenter {
            if Instant::now() >= self.next_frame {
                presenter.window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if !self.director.is_terminated() {
            self.shutdown();
        }
    }
}
