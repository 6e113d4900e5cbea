/// Plain-text dumps of the numbers behind each demo
use lavis_core::{IsometricDemo, VectorsDemo};
use std::fmt;

struct Row(Vec<f64>);

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v:>10.6}")?;
        }
        write!(f, "]")
    }
}

fn row<'a>(values: impl IntoIterator<Item = &'a f64>) -> Row {
    Row(values.into_iter().copied().collect())
}

/// `A`, `v`, `A·v` and optionally the image of the triangle
pub struct VectorsReport<'a>(pub &'a VectorsDemo);

impl fmt::Display for VectorsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let demo = self.0;
        let m = &demo.map.matrix;

        writeln!(f, "A =")?;
        for r in 0..2 {
            writeln!(f, "  {}", row(m.row(r).iter()))?;
        }
        writeln!(f, "v   = {}", row(demo.vector.iter()))?;
        writeln!(f, "A·v = {}", row(demo.transformed().iter()))?;

        if demo.show_image_triangle {
            let image = demo.map.apply_wireframe(&demo.triangle);
            writeln!(f, "image of triangle:")?;
            for (i, p) in image.vertices.iter().enumerate() {
                writeln!(f, "  {i}: {}", row(p.coords.iter()))?;
            }
        }
        Ok(())
    }
}

/// `theta`, `M` and the house vertices before and after projection
pub struct IsometricReport<'a>(pub &'a IsometricDemo);

impl fmt::Display for IsometricReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let demo = self.0;
        let m = demo.transform.matrix();

        writeln!(f, "theta = {:.6}", demo.transform.theta)?;
        writeln!(f, "M =")?;
        for r in 0..4 {
            writeln!(f, "  {}", row(m.row(r).iter()))?;
        }
        writeln!(f, "transformed vertices:")?;
        for (i, p) in demo.transformed().vertices.iter().enumerate() {
            writeln!(f, "  {i}: {}", row(p.coords.iter()))?;
        }
        writeln!(
            f,
            "projected vertices (elev {}, azim {}):",
            demo.view.elevation_deg, demo.view.azimuth_deg
        )?;
        for (i, p) in demo.projected().vertices.iter().enumerate() {
            writeln!(f, "  {i}: {}", row(p.coords.iter()))?;
        }
        Ok(())
    }
}
