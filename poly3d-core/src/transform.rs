/// Axis rotations for 3D points
use nalgebra::Point3;

/// Rotate the coordinate pair `(a1, a2)` by `angle` radians in its plane.
pub fn rotate_pair(a1: f64, a2: f64, angle: f64) -> (f64, f64) {
    (
        a1 * angle.cos() - a2 * angle.sin(),
        a2 * angle.cos() + a1 * angle.sin(),
    )
}

/// Rotation about each coordinate axis, holding the third coordinate fixed.
///
/// These are intrinsic rotations: chaining them applies each one about the
/// point's own evolving axes, so the composition order matters.
pub trait AxisRotations {
    fn rotate_x(&self, angle: f64) -> Self;
    fn rotate_y(&self, angle: f64) -> Self;
    fn rotate_z(&self, angle: f64) -> Self;
}

impl AxisRotations for Point3<f64> {
    fn rotate_x(&self, angle: f64) -> Self {
        let (y, z) = rotate_pair(self.y, self.z, angle);
        Point3::new(self.x, y, z)
    }

    fn rotate_y(&self, angle: f64) -> Self {
        let (x, z) = rotate_pair(self.x, self.z, angle);
        Point3::new(x, self.y, z)
    }

    fn rotate_z(&self, angle: f64) -> Self {
        let (x, y) = rotate_pair(self.x, self.y, angle);
        Point3::new(x, y, self.z)
    }
}

/// One frame of the tumbling motion: X by `step`, then Y at twice the rate,
/// then Z at half. The fixed order must not be reordered.
pub fn tumble(p: &Point3<f64>, step: f64) -> Point3<f64> {
    p.rotate_x(step).rotate_y(2.0 * step).rotate_z(step / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn rotations_preserve_norm() {
        let p = Point3::new(0.3, -1.2, 2.5);
        for angle in [0.01, 0.5, -1.3, std::f64::consts::PI, 42.0] {
            for rotated in [p.rotate_x(angle), p.rotate_y(angle), p.rotate_z(angle)] {
                assert!(
                    (rotated.coords.norm() - p.coords.norm()).abs() < EPS,
                    "norm changed under rotation by {angle}"
                );
            }
        }
    }

    #[test]
    fn zero_angle_is_identity() {
        let p = Point3::new(-1.0, 1.0, -1.0);
        assert_eq!(p.rotate_x(0.0), p);
        assert_eq!(p.rotate_y(0.0), p);
        assert_eq!(p.rotate_z(0.0), p);
    }

    #[test]
    fn composition_order_matters() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let xyz = p.rotate_x(0.4).rotate_y(0.8).rotate_z(0.2);
        let zyx = p.rotate_z(0.2).rotate_y(0.8).rotate_x(0.4);
        assert!((xyz - zyx).norm() > 1e-6);
    }

    #[test]
    fn tumble_matches_hand_computed_step() {
        let q = tumble(&Point3::new(-1.0, 1.0, -1.0), 0.01);
        let expected = Point3::new(
            -0.985_039_801_356_724_9,
            1.005_037_218_204_739_8,
            -1.009_750_850_341_995,
        );
        assert!((q - expected).norm() < EPS);
    }

    #[test]
    fn tumble_preserves_norm() {
        let p = Point3::new(-1.0, 1.0, -1.0);
        let mut q = p;
        for _ in 0..100 {
            q = tumble(&q, 0.01);
        }
        assert!((q.coords.norm() - p.coords.norm()).abs() < 1e-6);
    }
}
