use crate::{Rect, Color, UiRenderer, Alignment};

const BORDER_WIDTH: f32 = 2.0;
const FONT_SIZE: f32 = 24.0;
const PADDING: f32 = 20.0;

/// Framed text box. Purely visual: hit testing stays with the caller, which
/// owns the click gate.
pub struct Button<'a> {
    text: &'a str,
    fill: Option<Color>,
    text_color: Color,
}

impl<'a> Button<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            fill: None,
            text_color: Color::BLACK,
        }
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn show(self, ui: &mut dyn UiRenderer, rect: Rect) {
        if let Some(fill) = self.fill {
            ui.draw_rect(rect, fill);
        }
        ui.draw_border(rect, Color::GRAY, BORDER_WIDTH);

        let (_, text_rect) = rect.split_left(PADDING);
        ui.draw_text(self.text, text_rect, self.text_color, FONT_SIZE, Alignment::Start);
    }
}
