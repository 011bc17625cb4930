use std::collections::HashMap;
use jiangnan_ui::{Alignment, Color, ImageId, Rect, UiRenderer};
use skia_safe::textlayout::{FontCollection, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};
use skia_safe::{canvas::SrcRectConstraint, gradient_shader::linear, Canvas, Image, Paint, Point, Rect as SkRect, TileMode};

use crate::core::fonts::FAMILY;

/// `UiRenderer` over a skia canvas already transformed to design coordinates.
pub struct Painter<'a> {
    canvas: &'a Canvas,
    fonts: &'a FontCollection,
    images: &'a HashMap<ImageId, Image>,
    size: (f32, f32),
}

impl<'a> Painter<'a> {
    pub fn new(
        canvas: &'a Canvas,
        fonts: &'a FontCollection,
        images: &'a HashMap<ImageId, Image>,
        size: (f32, f32),
    ) -> Self {
        Self { canvas, fonts, images, size }
    }

    fn to_skia_rect(&self, r: Rect) -> SkRect {
        SkRect::new(r.x, r.y, r.x + r.w, r.y + r.h)
    }

    fn to_skia_color(&self, c: Color) -> skia_safe::Color {
        skia_safe::Color::from_argb(c.a, c.r, c.g, c.b)
    }

    fn fill(&self, color: Color) -> Paint {
        let mut paint = Paint::default();
        paint.set_color(self.to_skia_color(color));
        paint.set_anti_alias(true);
        paint
    }
}

impl UiRenderer for Painter<'_> {
    fn size(&self) -> (f32, f32) {
        self.size
    }

    fn clear(&mut self, color: Color) {
        self.canvas.clear(self.to_skia_color(color));
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.canvas.draw_rect(self.to_skia_rect(rect), &self.fill(color));
    }

    fn draw_border(&mut self, rect: Rect, color: Color, width: f32) {
        let mut paint = self.fill(color);
        paint.set_style(skia_safe::paint::Style::Stroke);
        paint.set_stroke_width(width);
        self.canvas.draw_rect(self.to_skia_rect(rect), &paint);
    }

    fn draw_vertical_gradient(&mut self, rect: Rect, top_color: Color, bottom_color: Color) {
        let sk_rect = self.to_skia_rect(rect);
        let colors = [self.to_skia_color(top_color), self.to_skia_color(bottom_color)];
        let points = (
            Point::new(sk_rect.center_x(), sk_rect.top()),
            Point::new(sk_rect.center_x(), sk_rect.bottom())
        );

        let shader = linear(
            points,
            colors.as_slice(),
            None,
            TileMode::Clamp,
            None,
            None
        );

        let mut paint = Paint::default();
        paint.set_shader(shader);
        self.canvas.draw_rect(sk_rect, &paint);
    }

    fn draw_text(&mut self, text: &str, rect: Rect, color: Color, size: f32, align: Alignment) {
        let mut ts = TextStyle::new();
        ts.set_color(self.to_skia_color(color));
        ts.set_font_size(size);
        ts.set_font_families(&[FAMILY]);

        let mut ps = ParagraphStyle::new();
        ps.set_text_style(&ts);
        let skia_align = match align {
            Alignment::Start => TextAlign::Left,
            Alignment::Center => TextAlign::Center,
            Alignment::End => TextAlign::Right,
        };
        ps.set_text_align(skia_align);

        let mut builder = ParagraphBuilder::new(&ps, self.fonts);
        builder.push_style(&ts);
        builder.add_text(text);

        let mut paragraph = builder.build();
        paragraph.layout(rect.w);

        // 在 rect 内垂直居中
        let text_height = paragraph.height();
        let y = rect.y + (rect.h - text_height) / 2.0;

        paragraph.paint(self.canvas, Point::new(rect.x, y));
    }

    fn draw_circle(&mut self, center: (f32, f32), radius: f32, color: Color) {
        self.canvas.draw_circle(Point::new(center.0, center.1), radius, &self.fill(color));
    }

    fn draw_image(&mut self, image: ImageId, src: Option<Rect>, dst: Rect, alpha: u8) {
        let Some(img) = self.images.get(&image) else {
            log::trace!("Image {:?} not resident, skipped", image);
            return;
        };
        let mut paint = Paint::default();
        paint.set_alpha(alpha);

        let dst = self.to_skia_rect(dst);
        match src {
            Some(src) => {
                let src = self.to_skia_rect(src);
                self.canvas.draw_image_rect(img, Some((&src, SrcRectConstraint::Fast)), dst, &paint);
            }
            None => {
                self.canvas.draw_image_rect(img, None, dst, &paint);
            }
        }
    }
}
