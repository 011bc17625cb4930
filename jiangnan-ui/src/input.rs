/// Maps a physical window position into the letterboxed logical canvas.
pub fn to_logical(physical: (f32, f32), scale: f32, offset: (f32, f32)) -> (f32, f32) {
    if scale == 0.0 {
        return (0.0, 0.0);
    }
    (
        (physical.0 - offset.0) / scale,
        (physical.1 - offset.1) / scale,
    )
}

/// Uniform scale and centring offset that fit `design` into `window`.
pub fn letterbox(window: (f32, f32), design: (f32, f32)) -> (f32, (f32, f32)) {
    let scale = (window.0 / design.0).min(window.1 / design.1);
    let off_x = (window.0 - design.0 * scale) / 2.0;
    let off_y = (window.1 - design.1 * scale) / 2.0;
    (scale, (off_x, off_y))
}
