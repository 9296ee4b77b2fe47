use web_sys as web;

/// Map a pixel position to normalized surface coordinates with the Y axis
/// flipped so (0, 0) is the bottom-left, matching the shader convention.
/// Returns `None` for a degenerate surface.
#[inline]
pub fn surface_uv(
    px: f32,
    py: f32,
    left: f32,
    top: f32,
    width: f32,
    height: f32,
) -> Option<[f32; 2]> {
    if !(width > 0.0 && height > 0.0) {
        return None;
    }
    let u = ((px - left) / width).clamp(0.0, 1.0);
    let v = (1.0 - (py - top) / height).clamp(0.0, 1.0);
    (u.is_finite() && v.is_finite()).then_some([u, v])
}

#[inline]
pub fn click_surface_uv(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Option<[f32; 2]> {
    let rect = canvas.get_bounding_client_rect();
    surface_uv(
        ev.client_x() as f32,
        ev.client_y() as f32,
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

/// Canvas backing size as a configurable surface extent: zero-sized canvases
/// are skipped and each axis is capped at the device's 2D texture limit.
#[inline]
pub fn surface_extent(width: u32, height: u32, max_dim: u32) -> Option<(u32, u32)> {
    if width == 0 || height == 0 {
        return None;
    }
    Some((width.min(max_dim), height.min(max_dim)))
}
