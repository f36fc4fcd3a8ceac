/// Scene state: live solids and the shared rotation step
use std::ops::RangeInclusive;

use nalgebra::Point3;

use crate::geometry::Polyhedron;
use crate::transform::tumble;

/// Amount the velocity buttons add to or remove from the spin step.
pub const SPIN_STEP: f64 = 0.01;

/// Canvas region in which newly spawned solids are placed.
pub const SPAWN_X: RangeInclusive<i32> = 200..=1100;
pub const SPAWN_Y: RangeInclusive<i32> = 150..=650;

/// Where the initial solid sits.
pub const HOME_POS: (i32, i32) = (400, 300);

/// A live, positioned occurrence of a polyhedron.
///
/// Owns a mutable copy of the template vertices; the edge table and scale
/// factor stay with the kind.
#[derive(Debug, Clone)]
pub struct Solid {
    pub kind: Polyhedron,
    pub vertices: Vec<Point3<f64>>,
    pub pos: (i32, i32),
}

impl Solid {
    pub fn new(kind: Polyhedron, pos: (i32, i32)) -> Self {
        Self {
            kind,
            vertices: kind.vertices(),
            pos,
        }
    }

    /// Advance the tumbling rotation by one frame.
    pub fn spin(&mut self, step: f64) {
        for v in &mut self.vertices {
            *v = tumble(v, step);
        }
    }
}

/// All mutable demo state, threaded through the frame loop explicitly.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Signed per-frame rotation step shared by every solid.
    pub spin: f64,
    /// Live solids in insertion order, which is also draw order.
    pub solids: Vec<Solid>,
}

impl Scene {
    /// One cube at the home position.
    pub fn new(spin: f64) -> Self {
        Self {
            spin,
            solids: vec![Solid::new(Polyhedron::Cube, HOME_POS)],
        }
    }

    /// Rotate every live solid by the current step.
    pub fn step(&mut self) {
        for solid in &mut self.solids {
            solid.spin(self.spin);
        }
    }

    pub fn reverse(&mut self) {
        self.spin = -self.spin;
    }

    /// Grow the step magnitude, keeping the sign. From a standstill the
    /// step goes negative.
    pub fn speed_up(&mut self) {
        if self.spin > 0.0 {
            self.spin += SPIN_STEP;
        } else {
            self.spin -= SPIN_STEP;
        }
    }

    /// Shrink the step magnitude without crossing zero. The result is
    /// rounded to two decimals so repeated presses land on exact multiples
    /// of the step, and on exactly zero at the bottom.
    pub fn slow_down(&mut self) {
        if self.spin == 0.0 {
            return;
        }
        let magnitude = (self.spin.abs() - SPIN_STEP).max(0.0);
        self.spin = round_hundredths(magnitude.copysign(self.spin));
    }

    pub fn spawn(&mut self, kind: Polyhedron, pos: (i32, i32)) {
        self.solids.push(Solid::new(kind, pos));
    }

    /// Drop the most recently added solid, never going below one.
    pub fn remove_last(&mut self) {
        if self.solids.len() > 1 {
            self.solids.pop();
        }
    }
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
