use glam::DVec2;

/// Map a client-space pointer position into canvas backing pixels.
///
/// `rect_min`/`rect_size` are the canvas' bounding client rect. When the rect
/// is degenerate the CSS offset is returned unscaled.
#[inline]
pub fn client_to_canvas(client: DVec2, rect_min: DVec2, rect_size: DVec2, canvas_size: DVec2) -> DVec2 {
    let css = client - rect_min;
    if rect_size.x > 0.0 && rect_size.y > 0.0 {
        css / rect_size * canvas_size
    } else {
        css
    }
}

/// One canvas dimension: the CSS box size, or a share of the viewport height
/// when layout has not given the canvas a size yet.
#[inline]
pub fn canvas_extent(css_px: f64, viewport_height: f64, fallback_ratio: f64) -> f64 {
    if css_px > 0.0 {
        css_px
    } else {
        viewport_height * fallback_ratio
    }
}
