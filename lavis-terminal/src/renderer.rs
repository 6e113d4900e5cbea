/// ASCII rasterizer for terminal plots
use crossterm::{
    cursor,
    style::{self, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use lavis_core::{Bounds, Color, Plot};
use nalgebra::Point2;
use std::io::Write;

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f64 = 2.0;

const GRID: char = '·';
const AXIS_H: char = '─';
const AXIS_V: char = '│';
const AXIS_ORIGIN: char = '┼';

/// Width reserved left of the plot for y tick labels
const LABEL_MARGIN: usize = 7;

/// ASCII renderer that converts plots to terminal characters
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    char_buffer: Vec<char>,
    color_buffer: Vec<Color>,
}

/// Placement of the plot area on the canvas
#[derive(Debug, Clone, Copy)]
struct Viewport {
    left: usize,
    top: usize,
    width: usize,
    height: usize,
    bounds: Bounds,
}

impl Viewport {
    fn to_cell(&self, p: &Point2<f64>) -> (i64, i64) {
        let fx = (p.x - self.bounds.min.x) / self.bounds.width();
        let fy = (self.bounds.max.y - p.y) / self.bounds.height();
        (
            self.left as i64 + (fx * (self.width - 1) as f64).round() as i64,
            self.top as i64 + (fy * (self.height - 1) as f64).round() as i64,
        )
    }

    fn bottom(&self) -> usize {
        self.top + self.height
    }
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            char_buffer: vec![' '; size],
            color_buffer: vec![Color::Default; size],
        }
    }

    pub fn clear(&mut self) {
        self.char_buffer.fill(' ');
        self.color_buffer.fill(Color::Default);
    }

    pub fn render_plot(&mut self, plot: &Plot) {
        let text_color = Color::Default;
        self.put_centered(0, 0, self.width, &plot.title, text_color);

        let Some(viewport) = self.layout(plot) else {
            log::warn!(
                "canvas {}x{} too small for plot bounds {:?}",
                self.width,
                self.height,
                plot.bounds
            );
            return;
        };
        log::debug!("plot viewport: {viewport:?}");

        if plot.grid {
            self.render_grid(&viewport);
        }
        if plot.show_axes {
            self.render_axes(&viewport);
            self.render_labels(plot, &viewport);
        }

        for segment in &plot.segments {
            if let Some((a, b)) = clip_segment(&viewport.bounds, segment.from, segment.to) {
                self.render_line(&viewport, &a, &b, segment.color);
            }
        }

        for arrow in &plot.arrows {
            let Some((a, b)) = clip_segment(&viewport.bounds, arrow.from, arrow.to) else {
                continue;
            };
            self.render_line(&viewport, &a, &b, arrow.color);
            if viewport.bounds.contains(&arrow.to) {
                let (x, y) = viewport.to_cell(&arrow.to);
                self.set(x, y, arrow_head(&arrow.from, &arrow.to), arrow.color);
            }
        }
    }

    /// Fit the plot area into the canvas, keeping x and y on the same scale
    fn layout(&self, plot: &Plot) -> Option<Viewport> {
        let bounds = plot.bounds;
        if !(bounds.width() > 0.0 && bounds.height() > 0.0) {
            return None;
        }

        let (margin_left, margin_bottom) = if plot.show_axes {
            (LABEL_MARGIN, 1)
        } else {
            (0, 0)
        };
        let available_width = self.width.saturating_sub(margin_left);
        let available_height = self.height.saturating_sub(1 + margin_bottom);

        let ratio = bounds.width() / bounds.height() * CELL_ASPECT;
        let mut height = available_height;
        let mut width = (height as f64 * ratio).round() as usize;
        if width > available_width {
            width = available_width;
            height = (width as f64 / ratio).round() as usize;
        }

        if width < 2 || height < 2 {
            return None;
        }

        Some(Viewport {
            left: margin_left + (available_width - width) / 2,
            top: 1,
            width,
            height,
            bounds,
        })
    }

    fn render_grid(&mut self, viewport: &Viewport) {
        let bounds = viewport.bounds;
        for x in ticks(bounds.min.x, bounds.max.x) {
            let (col, _) = viewport.to_cell(&Point2::new(x, bounds.min.y));
            for row in viewport.top..viewport.bottom() {
                self.set(col, row as i64, GRID, Color::Grey);
            }
        }
        for y in ticks(bounds.min.y, bounds.max.y) {
            let (_, row) = viewport.to_cell(&Point2::new(bounds.min.x, y));
            for col in viewport.left..viewport.left + viewport.width {
                self.set(col as i64, row, GRID, Color::Grey);
            }
        }
    }

    fn render_axes(&mut self, viewport: &Viewport) {
        let bounds = viewport.bounds;
        let (origin_col, origin_row) = viewport.to_cell(&Point2::origin());
        let has_y_axis = bounds.min.x <= 0.0 && bounds.max.x >= 0.0;
        let has_x_axis = bounds.min.y <= 0.0 && bounds.max.y >= 0.0;

        if has_x_axis {
            for col in viewport.left..viewport.left + viewport.width {
                self.set(col as i64, origin_row, AXIS_H, Color::Grey);
            }
        }
        if has_y_axis {
            for row in viewport.top..viewport.bottom() {
                self.set(origin_col, row as i64, AXIS_V, Color::Grey);
            }
        }
        if has_x_axis && has_y_axis {
            self.set(origin_col, origin_row, AXIS_ORIGIN, Color::Grey);
        }
    }

    fn render_labels(&mut self, plot: &Plot, viewport: &Viewport) {
        let bounds = viewport.bounds;
        let color = Color::Default;
        let label_width = viewport.left.min(LABEL_MARGIN).saturating_sub(1);

        let top = format!("{:.1}", bounds.max.y);
        let bottom = format!("{:.1}", bounds.min.y);
        self.put_right(viewport.top, label_width, &top, color);
        self.put_right(viewport.bottom() - 1, label_width, &bottom, color);
        self.put_str(viewport.top + viewport.height / 2, 0, &plot.y_label, color);

        let row = viewport.bottom();
        let left = format!("{:.1}", bounds.min.x);
        let right = format!("{:.1}", bounds.max.x);
        self.put_str(row, viewport.left, &left, color);
        self.put_right(row, viewport.left + viewport.width, &right, color);
        self.put_centered(row, viewport.left, viewport.width, &plot.x_label, color);
    }

    fn render_line(&mut self, viewport: &Viewport, a: &Point2<f64>, b: &Point2<f64>, color: Color) {
        let (x0, y0) = viewport.to_cell(a);
        let (x1, y1) = viewport.to_cell(b);
        let glyph = slope_glyph(x1 - x0, y1 - y0);

        // Bresenham
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let (mut x, mut y) = (x0, y0);
        let mut err = dx + dy;
        loop {
            self.set(x, y, glyph, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn set(&mut self, x: i64, y: i64, c: char, color: Color) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        self.char_buffer[idx] = c;
        self.color_buffer[idx] = color;
    }

    fn put_str(&mut self, row: usize, col: usize, text: &str, color: Color) {
        for (i, c) in text.chars().enumerate() {
            self.set((col + i) as i64, row as i64, c, color);
        }
    }

    /// Write `text` so that it ends just before column `end`
    fn put_right(&mut self, row: usize, end: usize, text: &str, color: Color) {
        let len = text.chars().count();
        self.put_str(row, end.saturating_sub(len), text, color);
    }

    fn put_centered(&mut self, row: usize, left: usize, width: usize, text: &str, color: Color) {
        let len = text.chars().count();
        self.put_str(row, left + width.saturating_sub(len) / 2, text, color);
    }

    /// Plain-text rows with trailing blanks removed
    pub fn to_lines(&self) -> Vec<String> {
        self.char_buffer
            .chunks(self.width.max(1))
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect()
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for x in 0..self.width {
                let idx = y * self.width + x;
                writer.queue(SetForegroundColor(terminal_color(self.color_buffer[idx])))?;
                writer.queue(Print(self.char_buffer[idx]))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

fn terminal_color(color: Color) -> style::Color {
    match color {
        Color::Default => style::Color::Reset,
        Color::Blue => style::Color::Blue,
        Color::Red => style::Color::Red,
        Color::Green => style::Color::Green,
        Color::Grey => style::Color::DarkGrey,
    }
}

/// Evenly spaced tick positions on whole numbers, thinned out for wide ranges
fn ticks(min: f64, max: f64) -> impl Iterator<Item = f64> {
    let step = ((max - min) / 20.0).ceil().max(1.0);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(move |k| k as f64 * step)
}

/// Pick the character that best follows a line with the given cell deltas
/// (`dy` grows downwards)
fn slope_glyph(dx: i64, dy: i64) -> char {
    if dx == 0 && dy == 0 {
        return '+';
    }
    let angle = (-(dy as f64) * CELL_ASPECT)
        .atan2(dx as f64)
        .to_degrees()
        .rem_euclid(180.0);
    match angle {
        a if a < 22.5 || a >= 157.5 => '-',
        a if a < 67.5 => '/',
        a if a < 112.5 => '|',
        _ => '\\',
    }
}

fn arrow_head(from: &Point2<f64>, to: &Point2<f64>) -> char {
    let d = to - from;
    if d.x == 0.0 && d.y == 0.0 {
        return 'o';
    }
    match d.y.atan2(d.x).to_degrees() {
        a if (-45.0..=45.0).contains(&a) => '>',
        a if (45.0..=135.0).contains(&a) => '^',
        a if (-135.0..-45.0).contains(&a) => 'v',
        _ => '<',
    }
}

/// Liang-Barsky clipping of the segment `a`-`b` against `bounds`
fn clip_segment(bounds: &Bounds, a: Point2<f64>, b: Point2<f64>) -> Option<(Point2<f64>, Point2<f64>)> {
    let d = b - a;
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;

    for (p, q) in [
        (-d.x, a.x - bounds.min.x),
        (d.x, bounds.max.x - a.x),
        (-d.y, a.y - bounds.min.y),
        (d.y, bounds.max.y - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
    }

    Some((a + d * t0, a + d * t1))
}
