//! 3D OpenSimplex noise.
//!
//! The stretched unit cube splits along its main diagonal into a tetrahedron
//! at the origin (`in_sum <= 1`), an octahedron in the middle and a tetrahedron
//! at the far corner (`in_sum >= 2`). Each region contributes its own vertices
//! plus the two closest lattice vertices outside it.

use std::iter;

use glam::DVec3;

use super::open_simplex::{
    Axes, Cell, NoiseFn, OpenSimplexNoise, collect_offsets, offset_with,
};

const STRETCH: f64 = -1.0 / 6.0;
const SQUISH: f64 = 1.0 / 3.0;
const NORM: f64 = 28.25;

const NEAR_TETRAHEDRON: &[[i32; 3]] = &[[0, 0, 0], [1, 0, 0], [0, 1, 0], [0, 0, 1]];
const OCTAHEDRON: &[[i32; 3]] = &[
    [1, 0, 0],
    [0, 1, 0],
    [0, 0, 1],
    [1, 1, 0],
    [1, 0, 1],
    [0, 1, 1],
];
const FAR_TETRAHEDRON: &[[i32; 3]] = &[[1, 1, 0], [1, 0, 1], [0, 1, 1], [1, 1, 1]];

impl OpenSimplexNoise<3> {
    /// Noise value at `(x, y, z)`, roughly in `[-1, 1]`.
    #[must_use]
    pub fn eval(&self, x: f64, y: f64, z: f64) -> f64 {
        let cell = Cell::locate([x, y, z], STRETCH, SQUISH);
        let in_sum = cell.in_sum();

        let (region, extra) = if in_sum > 1.0 && in_sum < 2.0 {
            (OCTAHEDRON, octahedron_extras(cell.ins))
        } else if in_sum <= 1.0 {
            (NEAR_TETRAHEDRON, near_extras(cell.ins, in_sum))
        } else {
            (FAR_TETRAHEDRON, far_extras(cell.ins, in_sum))
        };

        let value = cell.sum(region.iter().chain(&extra), SQUISH, |lattice| {
            self.table.gradient_3d(lattice)
        });
        value / NORM
    }

    /// [`eval`](Self::eval) at a vector.
    #[must_use]
    pub fn eval_vec(&self, point: DVec3) -> f64 {
        self.eval(point.x, point.y, point.z)
    }
}

impl NoiseFn<3> for OpenSimplexNoise<3> {
    fn sample(&self, [x, y, z]: [f64; 3]) -> f64 {
        self.eval(x, y, z)
    }
}

/// Extra vertices for the tetrahedron at the origin.
fn near_extras([xins, yins, zins]: [f64; 3], in_sum: f64) -> [[i32; 3]; 2] {
    // The two unit vertices closest to the point.
    let (mut a_score, mut a_point) = (xins, Axes::X);
    let (mut b_score, mut b_point) = (yins, Axes::Y);
    if a_score < b_score && zins > a_score {
        (a_score, a_point) = (zins, Axes::Z);
    } else if a_score >= b_score && zins > b_score {
        (b_score, b_point) = (zins, Axes::Z);
    }

    let wins = 1.0 - in_sum;
    if wins > a_score || wins > b_score {
        // The origin is one of the closest two.
        let closest = if b_score > a_score { b_point } else { a_point };
        collect_offsets(closest.stepped_back())
    } else {
        let edge = a_point | b_point;
        collect_offsets(iter::once(edge.corner()).chain(edge.stepped_back()))
    }
}

/// Extra vertices for the tetrahedron at the far corner.
fn far_extras([xins, yins, zins]: [f64; 3], in_sum: f64) -> [[i32; 3]; 2] {
    // The two edge vertices closest to the point.
    let (mut a_score, mut a_point) = (xins, Axes::Y | Axes::Z);
    let (mut b_score, mut b_point) = (yins, Axes::X | Axes::Z);
    if a_score <= b_score && zins < b_score {
        (b_score, b_point) = (zins, Axes::X | Axes::Y);
    } else if a_score > b_score && zins < a_score {
        (a_score, a_point) = (zins, Axes::X | Axes::Y);
    }

    let wins = 3.0 - in_sum;
    if wins < a_score || wins < b_score {
        // (1, 1, 1) is one of the closest two.
        let closest = if b_score < a_score { b_point } else { a_point };
        collect_offsets(closest.pushed_out())
    } else {
        let axis = a_point & b_point;
        collect_offsets(iter::once(axis.corner()).chain(axis.pushed_out()))
    }
}

/// Extra vertices for the octahedron between the two tetrahedra.
fn octahedron_extras([xins, yins, zins]: [f64; 3]) -> [[i32; 3]; 2] {
    // Candidates carry whether they sit on the far side (two axes set) or the
    // near side (one axis set) of the octahedron.
    let p1 = xins + yins;
    let (a_score, mut a_point, mut a_far) = if p1 <= 1.0 {
        (1.0 - p1, Axes::Z, false)
    } else {
        (p1 - 1.0, Axes::X | Axes::Y, true)
    };

    let p2 = xins + zins;
    let (b_score, mut b_point, mut b_far) = if p2 <= 1.0 {
        (1.0 - p2, Axes::Y, false)
    } else {
        (p2 - 1.0, Axes::X | Axes::Z, true)
    };

    let p3 = yins + zins;
    let (score, point, far) = if p3 > 1.0 {
        (p3 - 1.0, Axes::Y | Axes::Z, true)
    } else {
        (1.0 - p3, Axes::X, false)
    };
    if a_score > b_score && b_score < score {
        (b_point, b_far) = (point, far);
    } else if a_score <= b_score && a_score < score {
        (a_point, a_far) = (point, far);
    }

    match (a_far, b_far) {
        (true, true) => [[1, 1, 1], offset_with(0, (a_point & b_point).first_set::<3>(), 2)],
        (false, false) => [
            [0, 0, 0],
            offset_with(1, (a_point | b_point).first_clear::<3>(), -1),
        ],
        _ => {
            let (far_point, near_point) = if a_far {
                (a_point, b_point)
            } else {
                (b_point, a_point)
            };
            [
                offset_with(1, far_point.first_clear::<3>(), -1),
                offset_with(0, near_point.first_set::<3>(), 2),
            ]
        }
    }
}
