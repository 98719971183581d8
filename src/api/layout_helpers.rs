pub(super) fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> f64 {
    // Keep this estimate deterministic and backend-independent.
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' | ':' => 0.34,
            '-' | '+' | '%' | '(' | ')' => 0.42,
            ' ' => 0.33,
            'A'..='Z' => 0.68,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}

/// Axis-aligned pixel bounds `[x0, x1] × [y0, y1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct PixelBounds {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl PixelBounds {
    pub(super) fn contains(self, x: f64, y: f64) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}
