/// Backend-independent plot descriptions and the two demo scenes
use nalgebra::{Point2, Point3, Vector2};

use crate::error::{Error, Result};
use crate::geometry::Wireframe;
use crate::projection::{ViewAngles, ViewCamera};
use crate::transform::{IsometricTransform, LinearMap2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Terminal foreground
    #[default]
    Default,
    Blue,
    Red,
    Green,
    Grey,
}

/// A straight line between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point2<f64>,
    pub to: Point2<f64>,
    pub color: Color,
}

/// A segment with a head at `to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub from: Point2<f64>,
    pub to: Point2<f64>,
    pub color: Color,
}

/// Visible region of the plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point2<f64>,
    pub max: Point2<f64>,
}

impl Bounds {
    pub fn new(min: Point2<f64>, max: Point2<f64>) -> Self {
        Self { min, max }
    }

    /// Square bounds `[-r, r]` on both axes
    pub fn symmetric(r: f64) -> Self {
        Self::new(Point2::new(-r, -r), Point2::new(r, r))
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn contains(&self, p: &Point2<f64>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Everything a renderer needs to draw one 2-D figure
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub grid: bool,
    pub show_axes: bool,
    pub bounds: Bounds,
    pub segments: Vec<Segment>,
    pub arrows: Vec<Arrow>,
}

impl Plot {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            grid: false,
            show_axes: true,
            bounds,
            segments: Vec::new(),
            arrows: Vec::new(),
        }
    }

    pub fn add_wireframe(&mut self, wireframe: &Wireframe<Point2<f64>>, color: Color) {
        self.segments.extend(wireframe.segments().map(|(a, b)| Segment {
            from: *a,
            to: *b,
            color,
        }));
    }

    pub fn add_arrow(&mut self, from: Point2<f64>, to: Point2<f64>, color: Color) {
        self.arrows.push(Arrow { from, to, color });
    }

    fn points(&self) -> impl Iterator<Item = &Point2<f64>> + '_ {
        self.segments
            .iter()
            .flat_map(|s| [&s.from, &s.to])
            .chain(self.arrows.iter().flat_map(|a| [&a.from, &a.to]))
    }

    /// Replace the bounds with the smallest square region holding every
    /// primitive, grown by `margin` on each side
    pub fn fit_bounds(&mut self, margin: f64) -> Result<()> {
        let mut points = self.points();
        let first = *points.next().ok_or(Error::EmptyPlot)?;
        let (lo, hi) = points.fold((first, first), |(lo, hi), p| (lo.inf(p), hi.sup(p)));

        let centre = nalgebra::center(&lo, &hi);
        let half = (hi - lo).amax() / 2.0 + margin;
        let half = if half > 0.0 { half } else { 1.0 };
        self.bounds = Bounds::new(
            centre - Vector2::repeat(half),
            centre + Vector2::repeat(half),
        );
        Ok(())
    }
}

/// A vector and a triangle under a 2x2 linear map
#[derive(Debug, Clone, PartialEq)]
pub struct VectorsDemo {
    pub triangle: Wireframe<Point2<f64>>,
    pub map: LinearMap2,
    pub vector: Vector2<f64>,
    /// Also draw the image of the triangle under `map`
    pub show_image_triangle: bool,
}

impl VectorsDemo {
    /// The triangle, `[[2, 1], [-1, 1]]` and `v = (1, 1)`
    pub fn new() -> Result<Self> {
        Ok(Self {
            triangle: Wireframe::triangle()?,
            map: LinearMap2::demo(),
            vector: Vector2::new(1.0, 1.0),
            show_image_triangle: false,
        })
    }

    pub fn transformed(&self) -> Vector2<f64> {
        self.map.apply(&self.vector)
    }

    pub fn plot(&self) -> Plot {
        let mut plot = Plot::new(Bounds::symmetric(3.0));
        plot.title = "Linear Transformation".to_string();
        plot.x_label = "x".to_string();
        plot.y_label = "y".to_string();
        plot.grid = true;

        plot.add_wireframe(&self.triangle, Color::Blue);
        if self.show_image_triangle {
            plot.add_wireframe(&self.map.apply_wireframe(&self.triangle), Color::Red);
        }

        let origin = Point2::origin();
        plot.add_arrow(origin, Point2::from(self.vector), Color::Default);
        plot.add_arrow(origin, Point2::from(self.transformed()), Color::Default);
        plot
    }
}

/// The house wireframe rotated into isometric position and viewed from a fixed angle
#[derive(Debug, Clone, PartialEq)]
pub struct IsometricDemo {
    pub house: Wireframe<Point3<f64>>,
    pub transform: IsometricTransform,
    pub view: ViewAngles,
}

impl IsometricDemo {
    /// The house at `theta = atan(1/2)`, seen from elevation 20 and azimuth -120
    pub fn new() -> Result<Self> {
        Ok(Self {
            house: Wireframe::house()?,
            transform: IsometricTransform::default(),
            view: ViewAngles::default(),
        })
    }

    pub fn transformed(&self) -> Wireframe<Point3<f64>> {
        self.transform.apply_wireframe(&self.house)
    }

    pub fn projected(&self) -> Wireframe<Point2<f64>> {
        let transformed = self.transformed();
        ViewCamera::framing(self.view, &transformed).project_wireframe(&transformed)
    }

    pub fn plot(&self) -> Result<Plot> {
        let mut plot = Plot::new(Bounds::symmetric(1.0));
        plot.show_axes = false;
        plot.add_wireframe(&self.projected(), Color::Default);
        plot.fit_bounds(0.25)?;
        Ok(plot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vectors_plot() {
        let demo = VectorsDemo::new().unwrap();
        assert_eq!(demo.transformed(), Vector2::new(3.0, 0.0));

        let plot = demo.plot();
        assert_eq!(plot.title, "Linear Transformation");
        assert!(plot.grid);
        assert_eq!(plot.bounds, Bounds::symmetric(3.0));
        assert_eq!(plot.segments.len(), 3);
        assert!(plot.segments.iter().all(|s| s.color == Color::Blue));
        assert_eq!(plot.arrows.len(), 2);
        assert_eq!(plot.arrows[1].to, Point2::new(3.0, 0.0));
        assert!(plot.bounds.contains(&plot.arrows[1].to));
    }

    #[test]
    fn test_image_triangle() {
        let demo = VectorsDemo {
            show_image_triangle: true,
            ..VectorsDemo::new().unwrap()
        };
        let plot = demo.plot();
        assert_eq!(plot.segments.len(), 6);
        // (1, 2) maps to (4, 1)
        assert_eq!(plot.segments[3].to, Point2::new(4.0, 1.0));
        assert_eq!(plot.segments[3].color, Color::Red);
    }

    #[test]
    fn test_isometric_plot_fits_everything() {
        let plot = IsometricDemo::new().unwrap().plot().unwrap();
        assert!(!plot.show_axes);
        assert_eq!(plot.segments.len(), 15);
        assert_relative_eq!(plot.bounds.width(), plot.bounds.height(), epsilon = 1e-12);
        for segment in &plot.segments {
            assert!(plot.bounds.contains(&segment.from));
            assert!(plot.bounds.contains(&segment.to));
        }
    }

    #[test]
    fn test_isometric_is_deterministic() {
        assert_eq!(
            IsometricDemo::new().unwrap().plot().unwrap(),
            IsometricDemo::new().unwrap().plot().unwrap()
        );
    }

    #[test]
    fn test_empty_plot_cannot_fit() {
        let mut plot = Plot::new(Bounds::symmetric(1.0));
        assert_eq!(plot.fit_bounds(0.1), Err(Error::EmptyPlot));
    }
}
