use jiangnan_ui::widgets::{Label, Panel};
use jiangnan_ui::{Alignment, Color, Rect, UiRenderer};

use crate::event::InputEvent;
use crate::runtime::{SceneCtx, Texture};
use crate::scene::{ClickGate, PendingTransition, Scene, Transition, TransitionSlot};
use super::content::{IntroPage, CONTINUE_HINT, DEFAULT_PICTURE};
use super::{after_intro, load_optional, pulse_alpha, random_background};

const SPEED: u8 = 8;
const PICTURE_START_X: f32 = 800.0;
const PICTURE_TARGET_X: f32 = 520.0;
const PICTURE_Y: f32 = 160.0;
const PICTURE_SIZE: (f32, f32) = (230.0, 280.0);
const TEXT_X: f32 = 50.0;
const TEXT_Y: f32 = 120.0;
const LINE_HEIGHT: f32 = 35.0;

/// Narrated panel: paragraph and side picture slide/fade in, then a click
/// moves on.
pub struct IntroScene {
    page: usize,
    content: &'static IntroPage,
    background: Option<Texture>,
    picture: Option<Texture>,

    picture_x: f32,
    picture_alpha: u8,
    text_alpha: u8,
    hint_alpha: u8,

    gate: ClickGate,
    slot: TransitionSlot,
}

impl IntroScene {
    pub fn new(page: usize, content: &'static IntroPage, ctx: &mut SceneCtx) -> Self {
        let background = random_background(ctx);
        let picture = load_optional(ctx, content.picture.unwrap_or(DEFAULT_PICTURE));

        Self {
            page,
            content,
            background,
            picture,
            picture_x: PICTURE_START_X,
            picture_alpha: 0,
            text_alpha: 0,
            hint_alpha: 128,
            gate: ClickGate::new(ctx.config.timing.click_delay()),
            slot: TransitionSlot::new(),
        }
    }

    pub fn animation_complete(&self) -> bool {
        self.picture_x <= PICTURE_TARGET_X && self.picture_alpha == 255 && self.text_alpha == 255
    }
}

impl Scene for IntroScene {
    fn name(&self) -> &'static str {
        "Introduction"
    }

    fn handle_input(&mut self, events: &[InputEvent], ctx: &mut SceneCtx) {
        for event in events {
            if event.left_click().is_none() {
                continue;
            }
            // the gate only sees clicks once the panel has settled
            if self.animation_complete() && self.gate.try_accept(ctx.now()) {
                ctx.request(&mut self.slot, Transition::Goto(after_intro(self.page)));
                return;
            }
        }
    }

    fn tick(&mut self, ctx: &mut SceneCtx) {
        if self.picture_x > PICTURE_TARGET_X {
            self.picture_x = (self.picture_x - SPEED as f32).max(PICTURE_TARGET_X);
        }
        self.picture_alpha = self.picture_alpha.saturating_add(SPEED);
        self.text_alpha = self.text_alpha.saturating_add(SPEED);

        if self.animation_complete() {
            self.hint_alpha = pulse_alpha(ctx.now());
        }
    }

    fn render(&self, ui: &mut dyn UiRenderer) {
        let (w, h) = ui.size();
        let screen = Rect::new(0.0, 0.0, w, h);

        ui.clear(Color::WHITE);
        if let Some(bg) = &self.background {
            Panel::new().image(bg.id(), 255).show(ui, screen);
        }
        Panel::new().color(Color::rgba(255, 255, 255, 180)).show(ui, screen);

        let mut y = TEXT_Y;
        for line in self.content.lines {
            if !line.trim().is_empty() {
                Label::new(line)
                    .alpha(self.text_alpha)
                    .show(ui, Rect::new(TEXT_X, y, w - TEXT_X * 2.0, LINE_HEIGHT));
            }
            y += LINE_HEIGHT;
        }

        if let Some(picture) = &self.picture {
            let (pw, ph) = PICTURE_SIZE;
            Panel::new()
                .image(picture.id(), self.picture_alpha)
                .show(ui, Rect::new(self.picture_x, PICTURE_Y, pw, ph));
        }

        if self.animation_complete() {
            Label::new(CONTINUE_HINT)
                .alpha(self.hint_alpha)
                .align(Alignment::Center)
                .show(ui, Rect::from_center(w / 2.0, 550.0, w, 40.0));
        }
    }

    fn release(&mut self) {
        self.background = None;
        self.picture = None;
    }

    fn pending_transition(&self) -> Option<&PendingTransition> {
        self.slot.get()
    }

    fn click_gate(&mut self) -> &mut ClickGate {
        &mut self.gate
    }
}
