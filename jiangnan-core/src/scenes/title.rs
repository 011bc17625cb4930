use jiangnan_ui::widgets::{Label, Panel};
use jiangnan_ui::{Alignment, Color, Rect, UiRenderer};

use crate::event::InputEvent;
use crate::runtime::{SceneCtx, Texture};
use crate::scene::{ClickGate, PendingTransition, Scene, SceneRequest, Transition, TransitionSlot};
use super::content::{COVER_IMAGE, TITLE, TITLE_HINT};
use super::load_optional;

/// Frames between subtitle blinks
const BLINK_FRAMES: u32 = 30;

pub struct TitleScene {
    cover: Option<Texture>,
    show_hint: bool,
    blink_timer: u32,
    gate: ClickGate,
    slot: TransitionSlot,
}

impl TitleScene {
    pub fn new(ctx: &mut SceneCtx) -> Self {
        Self {
            cover: load_optional(ctx, COVER_IMAGE),
            show_hint: true,
            blink_timer: 0,
            gate: ClickGate::new(ctx.config.timing.click_delay()),
            slot: TransitionSlot::new(),
        }
    }

    pub fn hint_visible(&self) -> bool {
        self.show_hint
    }
}

impl Scene for TitleScene {
    fn name(&self) -> &'static str {
        "Title"
    }

    fn handle_input(&mut self, events: &[InputEvent], ctx: &mut SceneCtx) {
        for event in events {
            if event.left_click().is_some() && self.gate.try_accept(ctx.now()) {
                ctx.request(&mut self.slot, Transition::Goto(SceneRequest::Quiz));
            }
        }
    }

    fn tick(&mut self, _ctx: &mut SceneCtx) {
        self.blink_timer += 1;
        if self.blink_timer >= BLINK_FRAMES {
            self.show_hint = !self.show_hint;
            self.blink_timer = 0;
        }
    }

    fn render(&self, ui: &mut dyn UiRenderer) {
        let (w, h) = ui.size();
        let screen = Rect::new(0.0, 0.0, w, h);

        ui.clear(Color::BLACK);
        if let Some(cover) = &self.cover {
            Panel::new().image(cover.id(), 255).show(ui, screen);
        }
        Panel::new().color(Color::rgba(0, 0, 0, 100)).show(ui, screen);

        Label::new(TITLE)
            .size(48.0)
            .color(Color::WHITE)
            .align(Alignment::Center)
            .show(ui, Rect::from_center(w / 2.0, 300.0, w, 80.0));

        if self.show_hint {
            Label::new(TITLE_HINT)
                .color(Color::rgb(200, 200, 200))
                .align(Alignment::Center)
                .show(ui, Rect::from_center(w / 2.0, 500.0, w, 40.0));
        }
    }

    fn release(&mut self) {
        self.cover = None;
    }

    fn pending_transition(&self) -> Option<&PendingTransition> {
        self.slot.get()
    }

    fn click_gate(&mut self) -> &mut ClickGate {
        &mut self.gate
    }
}
