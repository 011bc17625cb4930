use jiangnan_ui::widgets::{Button, Label, Panel};
use jiangnan_ui::{Color, Rect, UiRenderer};

use crate::event::InputEvent;
use crate::runtime::{SceneCtx, Texture};
use crate::scene::{ClickGate, PendingTransition, Scene, SceneRequest, Transition, TransitionSlot};
use super::content::{Question, GUIDE_IMAGE, QUESTIONS};
use super::{after_answer, load_optional, random_background};

const SPEED: u8 = 5;
const DIALOG_START_Y: f32 = -100.0;
const DIALOG_TARGET_Y: f32 = 150.0;
const DIALOG_EASE: f32 = 0.1;
/// Options start fading in once the dialog is this opaque
const OPTIONS_THRESHOLD: u8 = 200;

const GREEN: Color = Color::rgb(0, 155, 0);
const RED: Color = Color::rgb(155, 0, 0);

pub fn option_rect(index: usize) -> Rect {
    Rect::new(200.0, 250.0 + index as f32 * 45.0, 400.0, 40.0)
}

/// One multiple-choice question. Answer with a click, then click again to
/// continue; the shared progress counter moves on the second click.
pub struct QuizScene {
    question: Option<&'static Question>,
    number: usize,
    background: Option<Texture>,
    guide: Option<Texture>,

    dialog_y: f32,
    dialog_alpha: u8,
    options_alpha: u8,

    selected: Option<usize>,

    gate: ClickGate,
    slot: TransitionSlot,
}

impl QuizScene {
    pub fn new(ctx: &mut SceneCtx) -> Self {
        let number = ctx.progress.current();
        let question = QUESTIONS.get(number);

        let mut slot = TransitionSlot::new();
        if question.is_none() {
            log::warn!("Question {} is past the end of the quiz", number + 1);
            ctx.request(&mut slot, Transition::Goto(SceneRequest::Puzzle));
        }

        Self {
            question,
            number,
            background: random_background(ctx),
            guide: load_optional(ctx, GUIDE_IMAGE),
            dialog_y: DIALOG_START_Y,
            dialog_alpha: 0,
            options_alpha: 0,
            selected: None,
            gate: ClickGate::new(ctx.config.timing.click_delay()),
            slot,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn answered_correctly(&self) -> bool {
        match (self.question, self.selected) {
            (Some(q), Some(choice)) => q.correct == choice,
            _ => false,
        }
    }
}

impl Scene for QuizScene {
    fn name(&self) -> &'static str {
        "Quiz"
    }

    fn handle_input(&mut self, events: &[InputEvent], ctx: &mut SceneCtx) {
        let Some(question) = self.question else { return };

        for event in events {
            let Some((x, y)) = event.left_click() else { continue };
            if self.slot.is_set() || !self.gate.try_accept(ctx.now()) {
                return;
            }

            if self.selected.is_none() {
                let hit = (0..question.options.len()).find(|&i| option_rect(i).contains(x, y));
                if let Some(choice) = hit {
                    self.selected = Some(choice);
                    self.dialog_alpha = 255;
                    log::debug!("Question {} answered with {}", self.number + 1, choice);
                }
                return;
            }

            let answered = ctx.progress.advance();
            ctx.request(&mut self.slot, Transition::Goto(after_answer(answered)));
            return;
        }
    }

    fn tick(&mut self, _ctx: &mut SceneCtx) {
        if self.dialog_y < DIALOG_TARGET_Y {
            self.dialog_y += (DIALOG_TARGET_Y - self.dialog_y) * DIALOG_EASE;
        }
        self.dialog_alpha = self.dialog_alpha.saturating_add(SPEED);
        if self.dialog_alpha >= OPTIONS_THRESHOLD {
            self.options_alpha = self.options_alpha.saturating_add(SPEED);
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

        let Some(question) = self.question else { return };

        if let Some(guide) = &self.guide {
            Panel::new().image(guide.id(), 255).show(ui, Rect::new(30.0, 150.0, 150.0, 200.0));
        }

        let heading = format!("第 {} 题", self.number + 1);
        Label::new(&heading).show(ui, Rect::new(30.0, 20.0, 300.0, 30.0));

        let dialog = Rect::new(200.0, self.dialog_y, 500.0, 80.0);
        Panel::new()
            .color(Color::rgb(245, 245, 245).with_alpha(self.dialog_alpha))
            .stroke(Color::GRAY.with_alpha(self.dialog_alpha), 2.0)
            .show(ui, dialog);
        Label::new(question.text)
            .alpha(self.dialog_alpha)
            .show(ui, Rect::new(220.0, self.dialog_y + 20.0, 470.0, 40.0));

        let answered = self.selected.is_some();
        for (i, option) in question.options.iter().enumerate() {
            let text_color = match self.selected {
                Some(_) if i == question.correct => GREEN,
                Some(choice) if choice == i => RED,
                _ => Color::BLACK,
            };
            let text = format!("{}. {}", char::from(b'A' + i as u8), option);

            let mut button = Button::new(&text)
                .text_color(text_color.with_alpha(if answered { 255 } else { self.options_alpha }));
            if self.selected == Some(i) {
                button = button.fill(Color::rgb(220, 220, 220));
            }
            button.show(ui, option_rect(i));
        }

        if answered {
            Panel::new()
                .color(Color::rgba(255, 255, 255, 200))
                .show(ui, Rect::new(200.0, 450.0, 400.0, 100.0));

            let (verdict, color) = if self.answered_correctly() {
                ("回答正确！", Color::rgb(0, 255, 0))
            } else {
                ("回答错误！", Color::rgb(255, 0, 0))
            };
            Label::new(verdict).color(color).show(ui, Rect::new(200.0, 450.0, 400.0, 30.0));
            Label::new(question.description).show(ui, Rect::new(200.0, 480.0, 600.0, 30.0));
            Label::new("点击继续").show(ui, Rect::new(200.0, 550.0, 400.0, 30.0));
        }
    }

    fn release(&mut self) {
        self.background = None;
        self.guide = None;
    }

    fn pending_transition(&self) -> Option<&PendingTransition> {
        self.slot.get()
    }

    fn click_gate(&mut self) -> &mut ClickGate {
        &mut self.gate
    }
}
