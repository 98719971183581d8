use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub circles_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Supports offscreen image-surface rendering through `Renderer::render` and
/// in-place rendering on an external Cairo context through
/// `CairoContextRenderer`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the offscreen surface as PNG.
    pub fn write_png<W: std::io::Write>(&self, stream: &mut W) -> ChartResult<()> {
        self.surface
            .write_to_png(stream)
            .map_err(|err| ChartError::InvalidData(format!("failed to write png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for line in &frame.lines {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }

        for circle in &frame.circles {
            context.new_sub_path();
            context.arc(circle.cx, circle.cy, circle.radius, 0.0, TAU);
            apply_color(context, circle.fill_color);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill circle", err))?;
            stats.circles_drawn += 1;
        }

        for rect in &frame.rects {
            append_rect_path(context, *rect);
            apply_color(context, rect.fill_color);
            if rect.border_width > 0.0 {
                context
                    .fill_preserve()
                    .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
                apply_color(context, rect.border_color);
                context.set_line_width(rect.border_width);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke rectangle border", err))?;
            } else {
                context
                    .fill()
                    .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
            }
            stats.rects_drawn += 1;
        }

        for text in &frame.texts {
            draw_text(context, text)?;
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn draw_text(context: &Context, text: &TextPrimitive) -> ChartResult<()> {
    let layout = pangocairo::functions::create_layout(context);
    let weight = if text.bold { " Bold" } else { "" };
    let font_description =
        FontDescription::from_string(&format!("Sans{weight} {}", text.font_size_px));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, _text_height) = layout.pixel_size();
    let offset_x = match text.h_align {
        TextHAlign::Left => 0.0,
        TextHAlign::Center => -f64::from(text_width) / 2.0,
        TextHAlign::Right => -f64::from(text_width),
    };
    let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);

    context
        .save()
        .map_err(|err| map_backend_error("failed to save cairo state", err))?;
    context.translate(text.x, text.y);
    if text.rotation_deg != 0.0 {
        context.rotate(text.rotation_deg.to_radians());
    }
    apply_color(context, text.color);
    context.move_to(offset_x, -baseline);
    pangocairo::functions::show_layout(context, &layout);
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore cairo state", err))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn append_rect_path(context: &Context, rect: RectPrimitive) {
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
