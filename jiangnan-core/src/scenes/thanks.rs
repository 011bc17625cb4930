use jiangnan_ui::widgets::{Label, Panel};
use jiangnan_ui::{Alignment, Color, Rect, UiRenderer};

use crate::event::InputEvent;
use crate::runtime::SceneCtx;
use crate::scene::{ClickGate, PendingTransition, Scene, Transition, TransitionSlot};
use super::content::{THANKS_CONTINUE, THANKS_HINT, THANKS_MESSAGES, THANKS_TITLE};

const FADE_SPEED: u8 = 3;
const BACKGROUND: Color = Color::rgb(245, 245, 240);
const GRADIENT: Color = Color::rgb(220, 220, 215);
const HINT: Color = Color::rgb(150, 150, 150);

/// Closing card. The last scene: a click once it is fully shown quits.
pub struct ThanksScene {
    alpha: u8,
    show_continue: bool,
    gate: ClickGate,
    slot: TransitionSlot,
}

impl ThanksScene {
    pub fn new(ctx: &mut SceneCtx) -> Self {
        Self {
            alpha: 0,
            show_continue: true,
            gate: ClickGate::new(ctx.config.timing.click_delay()),
            slot: TransitionSlot::new(),
        }
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }
}

impl Scene for ThanksScene {
    fn name(&self) -> &'static str {
        "Thanks"
    }

    fn handle_input(&mut self, events: &[InputEvent], ctx: &mut SceneCtx) {
        for event in events {
            if event.left_click().is_some() && self.alpha == 255 && self.gate.try_accept(ctx.now()) {
                log::info!("Presentation finished");
                ctx.request(&mut self.slot, Transition::Quit);
            }
        }
    }

    fn tick(&mut self, ctx: &mut SceneCtx) {
        self.alpha = self.alpha.saturating_add(FADE_SPEED);
        // 1 Hz blink
        self.show_continue = ctx.now().as_millis() % 1000 < 500;
    }

    fn render(&self, ui: &mut dyn UiRenderer) {
        let (w, h) = ui.size();
        let screen = Rect::new(0.0, 0.0, w, h);

        ui.clear(BACKGROUND);
        Panel::new()
            .gradient(GRADIENT.with_alpha(100), GRADIENT.with_alpha(0))
            .show(ui, screen);

        let cx = w / 2.0;
        Label::new(THANKS_TITLE)
            .color(Color::rgb(70, 70, 70))
            .alpha(self.alpha)
            .align(Alignment::Center)
            .show(ui, Rect::from_center(cx, 150.0, w, 40.0));

        for (i, message) in THANKS_MESSAGES.iter().enumerate() {
            Label::new(message)
                .color(Color::GRAY)
                .alpha(self.alpha)
                .align(Alignment::Center)
                .show(ui, Rect::from_center(cx, 250.0 + i as f32 * 50.0, w, 40.0));
        }

        if self.show_continue && self.alpha == 255 {
            Label::new(THANKS_CONTINUE)
                .color(HINT)
                .align(Alignment::Center)
                .show(ui, Rect::from_center(cx, 500.0, w, 40.0));
            Label::new(THANKS_HINT)
                .color(HINT)
                .align(Alignment::Center)
                .show(ui, Rect::from_center(cx, 550.0, w, 40.0));
        }
    }

    fn release(&mut self) {}

    fn pending_transition(&self) -> Option<&PendingTransition> {
        self.slot.get()
    }

    fn click_gate(&mut self) -> &mut ClickGate {
        &mut self.gate
    }
}
