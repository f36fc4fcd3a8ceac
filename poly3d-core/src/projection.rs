/// Orthographic projection onto the canvas
use nalgebra::{Point3, Vector3};

/// Logical canvas size. Positions, button rectangles, and pointer
/// coordinates all live in this space regardless of output resolution.
pub const CANVAS_WIDTH: i32 = 1280;
pub const CANVAS_HEIGHT: i32 = 720;

/// Project a local-space vertex to canvas coordinates: scale by the solid's
/// factor, translate to its position, drop z.
pub fn to_canvas(vertex: &Point3<f64>, factor: f64, pos: (i32, i32)) -> (f64, f64) {
    let p = *vertex * factor + Vector3::new(f64::from(pos.0), f64::from(pos.1), 0.0);
    (p.x, p.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_then_translates() {
        let (x, y) = to_canvas(&Point3::new(-1.0, 1.0, -1.0), 50.0, (400, 300));
        assert_eq!(x, 350.0);
        assert_eq!(y, 350.0);
    }

    #[test]
    fn z_is_discarded() {
        let near = to_canvas(&Point3::new(0.5, 0.5, -7.0), 50.0, (0, 0));
        let far = to_canvas(&Point3::new(0.5, 0.5, 7.0), 50.0, (0, 0));
        assert_eq!(near, far);
    }
}
