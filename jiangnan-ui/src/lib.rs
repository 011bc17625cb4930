pub mod input;
pub mod types;
pub mod widgets;

pub use types::{Rect, Color, Alignment, ImageId};

/// Drawing surface handed to scenes each frame.
///
/// Coordinates are logical pixels of the fixed design resolution; the host
/// decides how that maps onto the window.
pub trait UiRenderer {
    /// Logical size of the surface
    fn size(&self) -> (f32, f32);

    /// 整屏填充
    fn clear(&mut self, color: Color);

    /// 绘制实心矩形
    fn draw_rect(&mut self, rect: Rect, color: Color);

    /// 绘制空心矩形（描边）
    fn draw_border(&mut self, rect: Rect, color: Color, width: f32);

    fn draw_vertical_gradient(&mut self, rect: Rect, top: Color, bottom: Color);

    /// 绘制文字，在 rect 内垂直居中
    fn draw_text(&mut self, text: &str, rect: Rect, color: Color, size: f32, align: Alignment);

    /// 绘制圆形
    fn draw_circle(&mut self, center: (f32, f32), radius: f32, color: Color);

    /// Draws `src` of the image (the whole image when `None`) stretched into `dst`.
    fn draw_image(&mut self, image: ImageId, src: Option<Rect>, dst: Rect, alpha: u8);
}
