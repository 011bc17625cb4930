#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255, a: 255 };
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0, a: 255 };
    pub const GRAY: Self = Self { r: 100, g: 100, b: 100, a: 255 };

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn with_alpha(mut self, a: u8) -> Self {
        self.a = a;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Start,
    Center,
    End,
}

/// Host-side handle of a decoded image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_center(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self::new(cx - w / 2.0, cy - h / 2.0, w, h)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn center_point(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.w &&
            y >= self.y && y < self.y + self.h
    }

    pub fn with_pos(&self, x: f32, y: f32) -> Rect {
        Rect::new(x, y, self.w, self.h)
    }

    pub fn split_top(&self, height: f32) -> (Rect, Rect) {
        let h = height.min(self.h);
        let top = Rect::new(self.x, self.y, self.w, h);
        let rest = Rect::new(self.x, self.y + h, self.w, self.h - h);
        (top, rest)
    }

    pub fn split_left(&self, width: f32) -> (Rect, Rect) {
        let w = width.min(self.w);
        let left = Rect::new(self.x, self.y, w, self.h);
        let rest = Rect::new(self.x + w, self.y, self.w - w, self.h);
        (left, rest)
    }
}
