//! Immediate-mode 2D drawing target.
//!
//! Mirrors the subset of `CanvasRenderingContext2d` the globe and charts use.
//! The web frontend implements it over the real canvas; [`Recording`] keeps
//! the calls for host-side inspection.

pub trait Surface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Angles in radians, clockwise on screen unless `anticlockwise`.
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, anticlockwise: bool);
    fn close_path(&mut self);

    fn set_fill_style(&mut self, style: &str);
    fn set_stroke_style(&mut self, style: &str);
    fn set_line_width(&mut self, width: f64);
    /// Empty slice restores solid strokes.
    fn set_line_dash(&mut self, segments: &[f64]);
    fn set_line_dash_offset(&mut self, offset: f64);

    fn fill(&mut self);
    fn stroke(&mut self);

    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: &str);
    fn set_text_baseline(&mut self, baseline: &str);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Arc { x: f64, y: f64, radius: f64, start: f64, end: f64, anticlockwise: bool },
    ClosePath,
    FillStyle(String),
    StrokeStyle(String),
    LineWidth(f64),
    LineDash(Vec<f64>),
    LineDashOffset(f64),
    Fill,
    Stroke,
    Font(String),
    TextAlign(String),
    TextBaseline(String),
    FillText { text: String, x: f64, y: f64 },
}

/// A surface that records every call in order.
#[derive(Debug, Clone, Default)]
pub struct Recording {
    pub ops: Vec<DrawOp>,
}

impl Recording {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Fill styles in the order their paths were filled.
    pub fn filled_styles(&self) -> Vec<&str> {
        self.painted_styles(|op| matches!(op, DrawOp::Fill), |op| match op {
            DrawOp::FillStyle(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Stroke styles in the order their paths were stroked.
    pub fn stroked_styles(&self) -> Vec<&str> {
        self.painted_styles(|op| matches!(op, DrawOp::Stroke), |op| match op {
            DrawOp::StrokeStyle(s) => Some(s.as_str()),
            _ => None,
        })
    }

    pub fn count(&self, pred: impl Fn(&DrawOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    fn painted_styles<'a>(
        &'a self,
        is_paint: impl Fn(&DrawOp) -> bool,
        style_of: impl Fn(&'a DrawOp) -> Option<&'a str>,
    ) -> Vec<&'a str> {
        let mut current = "";
        let mut out = Vec::new();
        for op in &self.ops {
            if let Some(s) = style_of(op) {
                current = s;
            } else if is_paint(op) {
                out.push(current);
            }
        }
        out
    }
}

impl Surface for Recording {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(DrawOp::ClearRect { x, y, width, height });
    }
    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::MoveTo { x, y });
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::LineTo { x, y });
    }
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, anticlockwise: bool) {
        self.ops.push(DrawOp::Arc {
            x,
            y,
            radius,
            start,
            end,
            anticlockwise,
        });
    }
    fn close_path(&mut self) {
        self.ops.push(DrawOp::ClosePath);
    }
    fn set_fill_style(&mut self, style: &str) {
        self.ops.push(DrawOp::FillStyle(style.to_string()));
    }
    fn set_stroke_style(&mut self, style: &str) {
        self.ops.push(DrawOp::StrokeStyle(style.to_string()));
    }
    fn set_line_width(&mut self, width: f64) {
        self.ops.push(DrawOp::LineWidth(width));
    }
    fn set_line_dash(&mut self, segments: &[f64]) {
        self.ops.push(DrawOp::LineDash(segments.to_vec()));
    }
    fn set_line_dash_offset(&mut self, offset: f64) {
        self.ops.push(DrawOp::LineDashOffset(offset));
    }
    fn fill(&mut self) {
        self.ops.push(DrawOp::Fill);
    }
    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke);
    }
    fn set_font(&mut self, font: &str) {
        self.ops.push(DrawOp::Font(font.to_string()));
    }
    fn set_text_align(&mut self, align: &str) {
        self.ops.push(DrawOp::TextAlign(align.to_string()));
    }
    fn set_text_baseline(&mut self, baseline: &str) {
        self.ops.push(DrawOp::TextBaseline(baseline.to_string()));
    }
    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(DrawOp::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }
}
