use crate::{Rect, Color, UiRenderer, Alignment};

pub struct Label<'a> {
    text: &'a str,
    color: Color,
    size: f32,
    align: Alignment,
}

impl<'a> Label<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            color: Color::BLACK,
            size: 24.0,
            align: Alignment::Start
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Multiplies the current colour alpha by `alpha / 255`.
    pub fn alpha(mut self, alpha: u8) -> Self {
        self.color.a = ((self.color.a as u16 * alpha as u16) / 255) as u8;
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    pub fn show(self, ui: &mut dyn UiRenderer, rect: Rect) {
        if self.color.a == 0 || self.text.is_empty() {
            return;
        }
        ui.draw_text(self.text, rect, self.color, self.size, self.align);
    }
}
