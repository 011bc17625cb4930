use crate::{Rect, UiRenderer, Color, ImageId};

enum Background {
    None,
    Solid(Color),
    Vertical(Color, Color),
    Image(ImageId, u8),
}

pub struct Panel {
    background: Background,
    stroke: Option<(Color, f32)>,
}

impl Panel {
    pub fn new() -> Self {
        Self {
            background: Background::Solid(Color::rgba(0, 0, 0, 200)),
            stroke: None,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.background = Background::Solid(color);
        self
    }

    pub fn gradient(mut self, top: Color, bottom: Color) -> Self {
        self.background = Background::Vertical(top, bottom);
        self
    }

    pub fn image(mut self, id: ImageId, alpha: u8) -> Self {
        self.background = Background::Image(id, alpha);
        self
    }

    pub fn transparent(mut self) -> Self {
        self.background = Background::None;
        self
    }

    pub fn stroke(mut self, color: Color, width: f32) -> Self {
        self.stroke = Some((color, width));
        self
    }

    pub fn show(self, ui: &mut dyn UiRenderer, rect: Rect) {
        match self.background {
            Background::None => {}
            Background::Solid(color) => {
                if color.a > 0 {
                    ui.draw_rect(rect, color);
                }
            }
            Background::Vertical(top, bottom) => ui.draw_vertical_gradient(rect, top, bottom),
            Background::Image(id, alpha) => ui.draw_image(id, None, rect, alpha),
        }
        if let Some((color, width)) = self.stroke {
            ui.draw_border(rect, color, width);
        }
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}
