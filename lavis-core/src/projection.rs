/// Camera and projection utilities
use nalgebra::{Matrix4, Point2, Point3, Vector3};

use crate::geometry::Wireframe;

/// Viewing direction in degrees, measured the way plotting libraries do:
/// elevation above the xy-plane and azimuth around the z-axis from +x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewAngles {
    pub elevation_deg: f64,
    pub azimuth_deg: f64,
}

impl ViewAngles {
    pub fn new(elevation_deg: f64, azimuth_deg: f64) -> Self {
        Self {
            elevation_deg,
            azimuth_deg,
        }
    }

    /// Unit vector pointing from the scene towards the viewer
    pub fn eye_direction(&self) -> Vector3<f64> {
        let (se, ce) = self.elevation_deg.to_radians().sin_cos();
        let (sa, ca) = self.azimuth_deg.to_radians().sin_cos();
        Vector3::new(ce * ca, ce * sa, se)
    }

    /// Screen-up direction. Equals +z at zero elevation and tilts with the
    /// eye, so it is never parallel to the viewing direction.
    pub fn up_direction(&self) -> Vector3<f64> {
        let (se, ce) = self.elevation_deg.to_radians().sin_cos();
        let (sa, ca) = self.azimuth_deg.to_radians().sin_cos();
        Vector3::new(-se * ca, -se * sa, ce)
    }
}

impl Default for ViewAngles {
    fn default() -> Self {
        Self::new(20.0, -120.0)
    }
}

/// Orthographic camera looking at `target` from the direction given by `angles`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewCamera {
    pub angles: ViewAngles,
    pub target: Point3<f64>,
}

impl ViewCamera {
    pub fn new(angles: ViewAngles, target: Point3<f64>) -> Self {
        Self { angles, target }
    }

    /// Camera centred on the bounding box of `wireframe`
    pub fn framing(angles: ViewAngles, wireframe: &Wireframe<Point3<f64>>) -> Self {
        let target = wireframe
            .bounding_box()
            .map_or_else(Point3::origin, |(lo, hi)| nalgebra::center(&lo, &hi));
        Self::new(angles, target)
    }

    /// Create the view matrix (camera transformation)
    pub fn view_matrix(&self) -> Matrix4<f64> {
        // Orthographic, so the distance only has to be positive.
        let eye = self.target + self.angles.eye_direction() * 10.0;
        Matrix4::look_at_rh(&eye, &self.target, &self.angles.up_direction())
    }

    /// Project a 3D point onto the view plane
    pub fn project(&self, point: &Point3<f64>) -> Point2<f64> {
        let view = self.view_matrix().transform_point(point);
        Point2::new(view.x, view.y)
    }

    pub fn project_wireframe(&self, wireframe: &Wireframe<Point3<f64>>) -> Wireframe<Point2<f64>> {
        wireframe.map(|p| self.project(p))
    }
}
