/// Polyhedron vertex and edge tables
use nalgebra::Point3;

/// Golden ratio, used by the icosahedron vertex construction.
pub const PHI: f64 = 1.618_033_988_749_895;

/// The five regular solids the demo can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polyhedron {
    Cube,
    Tetrahedron,
    Octahedron,
    Dodecahedron,
    Icosahedron,
}

impl Polyhedron {
    pub const ALL: [Polyhedron; 5] = [
        Polyhedron::Cube,
        Polyhedron::Tetrahedron,
        Polyhedron::Octahedron,
        Polyhedron::Dodecahedron,
        Polyhedron::Icosahedron,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Polyhedron::Cube => "Cube",
            Polyhedron::Tetrahedron => "Tetrahedron",
            Polyhedron::Octahedron => "Octahedron",
            Polyhedron::Dodecahedron => "Dodecahedron",
            Polyhedron::Icosahedron => "Icosahedron",
        }
    }

    /// Uniform scale from local units to canvas units at draw time.
    ///
    /// The dodecahedron table is already in near-canvas units, so it gets a
    /// sub-unit factor instead of the default 50.
    pub fn scale_factor(&self) -> f64 {
        match self {
            Polyhedron::Dodecahedron => 0.75,
            _ => 50.0,
        }
    }

    /// Local-space vertices, centered on the origin.
    pub fn vertices(&self) -> Vec<Point3<f64>> {
        match self {
            Polyhedron::Cube => vec![
                Point3::new(-1.0, 1.0, -1.0),
                Point3::new(1.0, 1.0, -1.0),
                Point3::new(1.0, 1.0, 1.0),
                Point3::new(-1.0, 1.0, 1.0),
                Point3::new(-1.0, -1.0, -1.0),
                Point3::new(1.0, -1.0, -1.0),
                Point3::new(1.0, -1.0, 1.0),
                Point3::new(-1.0, -1.0, 1.0),
            ],
            Polyhedron::Tetrahedron => vec![
                Point3::new(1.0, 1.0, 1.0),
                Point3::new(1.0, -1.0, -1.0),
                Point3::new(-1.0, 1.0, -1.0),
                Point3::new(-1.0, -1.0, 1.0),
            ],
            Polyhedron::Octahedron => vec![
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(-1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(0.0, -1.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
                Point3::new(0.0, 0.0, -1.0),
            ],
            Polyhedron::Dodecahedron => vec![
                Point3::new(-55.0, -55.0, 55.0),
                Point3::new(0.0, -89.0, -34.0),
                Point3::new(-55.0, -55.0, -55.0),
                Point3::new(-89.0, -34.0, 0.0),
                Point3::new(-34.0, 0.0, -89.0),
                Point3::new(-55.0, 55.0, 55.0),
                Point3::new(0.0, 89.0, -34.0),
                Point3::new(34.0, 0.0, -89.0),
                Point3::new(-55.0, 55.0, -55.0),
                Point3::new(0.0, -89.0, 34.0),
                Point3::new(-89.0, 34.0, 0.0),
                Point3::new(-34.0, 0.0, 89.0),
                Point3::new(89.0, 34.0, 0.0),
                Point3::new(89.0, -34.0, 0.0),
                Point3::new(55.0, 55.0, 55.0),
                Point3::new(55.0, -55.0, 55.0),
                Point3::new(34.0, 0.0, 89.0),
                Point3::new(55.0, -55.0, -55.0),
                Point3::new(55.0, 55.0, -55.0),
                Point3::new(0.0, 89.0, 34.0),
            ],
            Polyhedron::Icosahedron => vec![
                Point3::new(-1.0, PHI, 0.0),
                Point3::new(1.0, PHI, 0.0),
                Point3::new(-1.0, -PHI, 0.0),
                Point3::new(1.0, -PHI, 0.0),
                Point3::new(0.0, -1.0, PHI),
                Point3::new(0.0, 1.0, PHI),
                Point3::new(0.0, -1.0, -PHI),
                Point3::new(0.0, 1.0, -PHI),
                Point3::new(PHI, 0.0, -1.0),
                Point3::new(PHI, 0.0, 1.0),
                Point3::new(-PHI, 0.0, -1.0),
                Point3::new(-PHI, 0.0, 1.0),
            ],
        }
    }

    /// Undirected wireframe edges, as index pairs into `vertices`.
    pub fn edges(&self) -> &'static [(usize, usize)] {
        match self {
            Polyhedron::Cube => &[
                (0, 1),
                (1, 2),
                (2, 3),
                (3, 0),
                (4, 5),
                (5, 6),
                (6, 7),
                (7, 4),
                (0, 4),
                (3, 7),
                (1, 5),
                (2, 6),
            ],
            Polyhedron::Tetrahedron => &[(0, 1), (1, 2), (2, 0), (0, 3), (1, 3), (2, 3)],
            Polyhedron::Octahedron => &[
                (3, 1),
                (3, 0),
                (3, 4),
                (3, 5),
                (2, 1),
                (2, 0),
                (2, 4),
                (2, 5),
                (5, 1),
                (5, 0),
                (4, 1),
                (4, 0),
            ],
            Polyhedron::Dodecahedron => &[
                (11, 16),
                (4, 7),
                (13, 15),
                (13, 12),
                (13, 17),
                (12, 14),
                (12, 18),
                (17, 7),
                (18, 7),
                (15, 16),
                (14, 16),
                (3, 0),
                (3, 10),
                (3, 2),
                (10, 5),
                (10, 8),
                (2, 4),
                (8, 4),
                (0, 11),
                (5, 11),
                (19, 5),
                (19, 14),
                (19, 6),
                (6, 8),
                (6, 18),
                (9, 0),
                (9, 15),
                (9, 1),
                (1, 2),
                (1, 17),
            ],
            Polyhedron::Icosahedron => &[
                (3, 4),
                (3, 2),
                (2, 4),
                (3, 9),
                (9, 4),
                (4, 11),
                (11, 2),
                (2, 10),
                (10, 11),
                (4, 5),
                (5, 9),
                (5, 11),
                (0, 11),
                (0, 5),
                (0, 10),
                (1, 0),
                (1, 5),
                (1, 9),
                (3, 6),
                (6, 2),
                (6, 10),
                (6, 7),
                (7, 10),
                (7, 0),
                (7, 1),
                (1, 8),
                (8, 7),
                (8, 9),
                (8, 3),
                (8, 6),
            ],
        }
    }
}
