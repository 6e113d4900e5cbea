/// Linear maps and the isometric rotation
use nalgebra::{Matrix2, Matrix3, Matrix4, Point2, Point3, Vector2, Vector3, Vector4};

use crate::error::{Error, Result};
use crate::geometry::Wireframe;

/// A linear map of the plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearMap2 {
    pub matrix: Matrix2<f64>,
}

impl LinearMap2 {
    pub fn new(matrix: Matrix2<f64>) -> Self {
        Self { matrix }
    }

    /// The map `[[2, 1], [-1, 1]]` used by the vectors demo
    pub fn demo() -> Self {
        Self::new(Matrix2::new(2.0, 1.0, -1.0, 1.0))
    }

    /// Build from row-major rows, which must form a 2x2 matrix
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.len() != 2 || rows.iter().any(|row| row.len() != 2) {
            return Err(Error::Dimension {
                expected: (2, 2),
                found: (rows.len(), cols),
            });
        }

        Ok(Self::new(Matrix2::new(
            rows[0][0], rows[0][1], rows[1][0], rows[1][1],
        )))
    }

    pub fn apply(&self, v: &Vector2<f64>) -> Vector2<f64> {
        self.matrix * v
    }

    pub fn apply_point(&self, p: &Point2<f64>) -> Point2<f64> {
        self.matrix * p
    }

    pub fn apply_wireframe(&self, wireframe: &Wireframe<Point2<f64>>) -> Wireframe<Point2<f64>> {
        wireframe.map(|p| self.apply_point(p))
    }
}

impl Default for LinearMap2 {
    fn default() -> Self {
        Self::demo()
    }
}

/// Rotation by a single angle about x, y and z, followed by a translation
///
/// All three rotations share `theta`. The matrices are homogeneous so the
/// translation composes into the same 4x4 product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsometricTransform {
    pub theta: f64,
    pub translation: Vector3<f64>,
}

impl IsometricTransform {
    pub fn new(theta: f64, translation: Vector3<f64>) -> Self {
        Self { theta, translation }
    }

    /// The classic isometric angle, `atan(1/2)`
    pub fn default_theta() -> f64 {
        0.5f64.atan()
    }

    pub fn rx(&self) -> Matrix4<f64> {
        let (s, c) = self.theta.sin_cos();
        Matrix4::new(
            1.0, 0.0, 0.0, 0.0, //
            0.0, c, s, 0.0, //
            0.0, -s, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    pub fn ry(&self) -> Matrix4<f64> {
        let (s, c) = self.theta.sin_cos();
        Matrix4::new(
            c, 0.0, -s, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            s, 0.0, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    pub fn rz(&self) -> Matrix4<f64> {
        let (s, c) = self.theta.sin_cos();
        Matrix4::new(
            c, s, 0.0, 0.0, //
            -s, c, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// `Rx * (Ry * Rz)`
    pub fn rotation(&self) -> Matrix4<f64> {
        self.rx() * (self.ry() * self.rz())
    }

    pub fn translation_matrix(&self) -> Matrix4<f64> {
        Matrix4::new_translation(&self.translation)
    }

    /// The full homogeneous transform `T * R`
    pub fn matrix(&self) -> Matrix4<f64> {
        let m = self.translation_matrix() * self.rotation();
        log::debug!("isometric transform (theta = {}): {}", self.theta, m);
        m
    }

    pub fn apply(&self, p: &Point3<f64>) -> Point3<f64> {
        transform_homogeneous(&self.matrix(), p)
    }

    pub fn apply_wireframe(&self, wireframe: &Wireframe<Point3<f64>>) -> Wireframe<Point3<f64>> {
        let m = self.matrix();
        wireframe.map(|p| {
            let q = transform_homogeneous(&m, p);
            log::trace!("{p} -> {q}");
            q
        })
    }
}

impl Default for IsometricTransform {
    fn default() -> Self {
        Self::new(Self::default_theta(), Vector3::zeros())
    }
}

/// Lift `p` to `(x, y, z, 1)`, multiply by `m` and drop the fourth component
pub fn transform_homogeneous(m: &Matrix4<f64>, p: &Point3<f64>) -> Point3<f64> {
    let h = m * p.to_homogeneous();
    Point3::new(h.x, h.y, h.z)
}

/// Whether `m` is a rigid rotation in homogeneous form
///
/// The upper 3x3 block must satisfy `R^T R = I` and the last row and column
/// must be `[0, 0, 0, 1]`, each within `tol`.
pub fn is_orthogonal(m: &Matrix4<f64>, tol: f64) -> bool {
    let r: Matrix3<f64> = m.fixed_view::<3, 3>(0, 0).into_owned();
    let deviation = (r.transpose() * r - Matrix3::identity()).amax();

    let row = (m.row(3).transpose() - Vector4::w()).amax();
    let column = (m.column(3) - Vector4::w()).amax();

    deviation <= tol && row <= tol && column <= tol
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_demo_map() {
        let v = Vector2::new(1.0, 1.0);
        assert_eq!(LinearMap2::demo().apply(&v), Vector2::new(3.0, 0.0));
    }

    #[test]
    fn test_from_rows_rejects_wrong_shape() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        assert_eq!(
            LinearMap2::from_rows(&rows),
            Err(Error::Dimension {
                expected: (2, 2),
                found: (2, 3)
            })
        );
    }

    #[test]
    fn test_from_rows() {
        let rows = vec![vec![2.0, 1.0], vec![-1.0, 1.0]];
        assert_eq!(LinearMap2::from_rows(&rows).unwrap(), LinearMap2::demo());
    }

    #[test]
    fn test_rotation_is_orthogonal() {
        let transform = IsometricTransform::default();
        let r = transform.rotation();
        assert!(is_orthogonal(&r, 1e-9));
        assert_relative_eq!(r.transpose() * r, Matrix4::identity(), epsilon = 1e-9);
    }

    #[test]
    fn test_individual_rotations_are_orthogonal() {
        let transform = IsometricTransform::new(0.7, Vector3::zeros());
        for m in [transform.rx(), transform.ry(), transform.rz()] {
            assert!(is_orthogonal(&m, 1e-9));
            assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_zero_theta_is_identity() {
        let transform = IsometricTransform::new(0.0, Vector3::zeros());
        assert_eq!(transform.matrix(), Matrix4::identity());
    }

    #[test]
    fn test_translation_is_not_orthogonal() {
        let transform = IsometricTransform::new(0.3, Vector3::new(1.0, 0.0, 0.0));
        assert!(!is_orthogonal(&transform.matrix(), 1e-9));
        assert!(is_orthogonal(&transform.rotation(), 1e-9));
    }

    #[test]
    fn test_opposite_border_errors_do_not_cancel() {
        let mut m = Matrix4::identity();
        m[(3, 0)] = 0.5;
        m[(0, 3)] = -0.5;
        assert!(!is_orthogonal(&m, 1e-9));

        let mut m = Matrix4::identity();
        m[(3, 2)] = 1e-3;
        assert!(!is_orthogonal(&m, 1e-9));
    }

    #[test]
    fn test_translation_moves_points() {
        let transform = IsometricTransform::new(0.0, Vector3::new(1.0, 2.0, 3.0));
        let p = transform.apply(&Point3::new(1.0, 1.0, 1.0));
        assert_eq!(p, Point3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_preserves_distances() {
        let house = Wireframe::house().unwrap();
        let rotated = IsometricTransform::default().apply_wireframe(&house);

        assert_eq!(rotated.edges, house.edges);
        for (before, after) in house
            .pairwise_distances()
            .iter()
            .zip(rotated.pairwise_distances())
        {
            assert_relative_eq!(*before, after, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_deterministic() {
        let house = Wireframe::house().unwrap();
        let a = IsometricTransform::default().apply_wireframe(&house);
        let b = IsometricTransform::default().apply_wireframe(&house);
        assert_eq!(a, b);
    }

    #[test]
    fn test_origin_is_fixed() {
        let p = IsometricTransform::default().apply(&Point3::origin());
        assert_relative_eq!(p, Point3::origin(), epsilon = 1e-12);
    }
}
