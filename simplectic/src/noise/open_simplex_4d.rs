//! 4D OpenSimplex noise.
//!
//! The stretched unit tesseract splits along its main diagonal into five
//! regions by `in_sum`: a pentachoron at the origin (`<= 1`), two rectified
//! pentachora (`<= 2` and `< 3`) and a pentachoron at the far corner (`>= 3`).
//! Each region contributes its own vertices plus the three closest lattice
//! vertices outside it.

use std::iter;

use glam::DVec4;

use super::open_simplex::{
    Axes, Cell, NoiseFn, OpenSimplexNoise, collect_offsets, offset_with,
};

/// `(1 / sqrt(5) - 1) / 4`
const STRETCH: f64 = -0.138_196_601_125_010_53;
/// `(sqrt(5) - 1) / 4`
const SQUISH: f64 = 0.309_016_994_374_947_45;
const NORM: f64 = 30.0;

#[rustfmt::skip]
const NEAR_PENTACHORON: &[[i32; 4]] = &[
    [0, 0, 0, 0],
    [1, 0, 0, 0], [0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1],
];

#[rustfmt::skip]
const NEAR_DISPENTACHORON: &[[i32; 4]] = &[
    [1, 0, 0, 0], [0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1],
    [1, 1, 0, 0], [1, 0, 1, 0], [1, 0, 0, 1], [0, 1, 1, 0], [0, 1, 0, 1], [0, 0, 1, 1],
];

#[rustfmt::skip]
const FAR_DISPENTACHORON: &[[i32; 4]] = &[
    [1, 1, 1, 0], [1, 1, 0, 1], [1, 0, 1, 1], [0, 1, 1, 1],
    [1, 1, 0, 0], [1, 0, 1, 0], [1, 0, 0, 1], [0, 1, 1, 0], [0, 1, 0, 1], [0, 0, 1, 1],
];

#[rustfmt::skip]
const FAR_PENTACHORON: &[[i32; 4]] = &[
    [1, 1, 1, 0], [1, 1, 0, 1], [1, 0, 1, 1], [0, 1, 1, 1],
    [1, 1, 1, 1],
];

impl OpenSimplexNoise<4> {
    /// Noise value at `(x, y, z, w)`, roughly in `[-1, 1]`.
    #[must_use]
    pub fn eval(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let cell = Cell::locate([x, y, z, w], STRETCH, SQUISH);
        let in_sum = cell.in_sum();

        let (region, extra) = if in_sum <= 1.0 {
            (NEAR_PENTACHORON, near_extras(cell.ins, in_sum))
        } else if in_sum >= 3.0 {
            (FAR_PENTACHORON, far_extras(cell.ins, in_sum))
        } else if in_sum <= 2.0 {
            (NEAR_DISPENTACHORON, near_middle_extras(cell.ins, in_sum))
        } else {
            (FAR_DISPENTACHORON, far_middle_extras(cell.ins, in_sum))
        };

        let value = cell.sum(region.iter().chain(&extra), SQUISH, |lattice| {
            self.table.gradient_4d(lattice)
        });
        value / NORM
    }

    /// [`eval`](Self::eval) at a vector.
    #[must_use]
    pub fn eval_vec(&self, point: DVec4) -> f64 {
        self.eval(point.x, point.y, point.z, point.w)
    }
}

impl NoiseFn<4> for OpenSimplexNoise<4> {
    fn sample(&self, [x, y, z, w]: [f64; 4]) -> f64 {
        self.eval(x, y, z, w)
    }
}

/// Extra vertices for the pentachoron at the origin.
fn near_extras([xins, yins, zins, wins]: [f64; 4], in_sum: f64) -> [[i32; 4]; 3] {
    // The two unit vertices closest to the point.
    let (mut a_score, mut a_point) = (xins, Axes::X);
    let (mut b_score, mut b_point) = (yins, Axes::Y);
    for (score, point) in [(zins, Axes::Z), (wins, Axes::W)] {
        if a_score >= b_score && score > b_score {
            (b_score, b_point) = (score, point);
        } else if a_score < b_score && score > a_score {
            (a_score, a_point) = (score, point);
        }
    }

    let uins = 1.0 - in_sum;
    if uins > a_score || uins > b_score {
        // The origin is one of the closest two.
        let closest = if b_score > a_score { b_point } else { a_point };
        collect_offsets(closest.stepped_back())
    } else {
        let edge = a_point | b_point;
        collect_offsets(iter::once(edge.corner()).chain(edge.stepped_back()))
    }
}

/// Extra vertices for the pentachoron at the far corner.
fn far_extras([xins, yins, zins, wins]: [f64; 4], in_sum: f64) -> [[i32; 4]; 3] {
    // The two three-axis vertices closest to the point.
    let (mut a_score, mut a_point) = (xins, Axes::Y | Axes::Z | Axes::W);
    let (mut b_score, mut b_point) = (yins, Axes::X | Axes::Z | Axes::W);
    for (score, point) in [
        (zins, Axes::X | Axes::Y | Axes::W),
        (wins, Axes::X | Axes::Y | Axes::Z),
    ] {
        if a_score <= b_score && score < b_score {
            (b_score, b_point) = (score, point);
        } else if a_score > b_score && score < a_score {
            (a_score, a_point) = (score, point);
        }
    }

    let uins = 4.0 - in_sum;
    if uins < a_score || uins < b_score {
        // (1, 1, 1, 1) is one of the closest two.
        let closest = if b_score < a_score { b_point } else { a_point };
        collect_offsets(closest.pushed_out())
    } else {
        let edge = a_point & b_point;
        collect_offsets(iter::once(edge.corner()).chain(edge.pushed_out()))
    }
}

/// Extra vertices for the rectified pentachoron nearer the origin.
fn near_middle_extras([xins, yins, zins, wins]: [f64; 4], in_sum: f64) -> [[i32; 4]; 3] {
    // Candidates start as two-axis vertices and may be replaced by unit ones.
    let (mut a_score, mut a_point) = if xins + yins > zins + wins {
        (xins + yins, Axes::X | Axes::Y)
    } else {
        (zins + wins, Axes::Z | Axes::W)
    };
    let (mut b_score, mut b_point) = if xins + zins > yins + wins {
        (xins + zins, Axes::X | Axes::Z)
    } else {
        (yins + wins, Axes::Y | Axes::W)
    };
    let (score, point) = if xins + wins > yins + zins {
        (xins + wins, Axes::X | Axes::W)
    } else {
        (yins + zins, Axes::Y | Axes::Z)
    };
    if a_score >= b_score && score > b_score {
        (b_score, b_point) = (score, point);
    } else if a_score < b_score && score > a_score {
        (a_score, a_point) = (score, point);
    }

    let (mut a_is_edge, mut b_is_edge) = (true, true);
    for (ins, point) in [(xins, Axes::X), (yins, Axes::Y), (zins, Axes::Z), (wins, Axes::W)] {
        let score = 2.0 - in_sum + ins;
        if a_score >= b_score && score > b_score {
            (b_score, b_point, b_is_edge) = (score, point, false);
        } else if a_score < b_score && score > a_score {
            (a_score, a_point, a_is_edge) = (score, point, false);
        }
    }

    match (a_is_edge, b_is_edge) {
        (true, true) => {
            let face = a_point | b_point;
            let shared = (a_point & b_point).first_set::<4>();
            collect_offsets(
                iter::once(face.corner())
                    .chain(face.stepped_back())
                    .chain(iter::once(offset_with(0, shared, 2))),
            )
        }
        (false, false) => collect_offsets(
            (a_point | b_point)
                .stepped_back()
                .chain(iter::once([0, 0, 0, 0])),
        ),
        _ => {
            let (edge, unit) = if a_is_edge {
                (a_point, b_point)
            } else {
                (b_point, a_point)
            };
            collect_offsets(
                edge.stepped_back()
                    .chain(iter::once(offset_with(0, unit.first_set::<4>(), 2))),
            )
        }
    }
}

/// Extra vertices for the rectified pentachoron nearer the far corner.
fn far_middle_extras([xins, yins, zins, wins]: [f64; 4], in_sum: f64) -> [[i32; 4]; 3] {
    // Candidates start as two-axis vertices and may be replaced by three-axis ones.
    let (mut a_score, mut a_point) = if xins + yins < zins + wins {
        (xins + yins, Axes::Z | Axes::W)
    } else {
        (zins + wins, Axes::X | Axes::Y)
    };
    let (mut b_score, mut b_point) = if xins + zins < yins + wins {
        (xins + zins, Axes::Y | Axes::W)
    } else {
        (yins + wins, Axes::X | Axes::Z)
    };
    let (score, point) = if xins + wins < yins + zins {
        (xins + wins, Axes::Y | Axes::Z)
    } else {
        (yins + zins, Axes::X | Axes::W)
    };
    if a_score <= b_score && score < b_score {
        (b_score, b_point) = (score, point);
    } else if a_score > b_score && score < a_score {
        (a_score, a_point) = (score, point);
    }

    let (mut a_is_edge, mut b_is_edge) = (true, true);
    for (ins, point) in [
        (xins, Axes::Y | Axes::Z | Axes::W),
        (yins, Axes::X | Axes::Z | Axes::W),
        (zins, Axes::X | Axes::Y | Axes::W),
        (wins, Axes::X | Axes::Y | Axes::Z),
    ] {
        let score = 3.0 - in_sum + ins;
        if a_score <= b_score && score < b_score {
            (b_score, b_point, b_is_edge) = (score, point, false);
        } else if a_score > b_score && score < a_score {
            (a_score, a_point, a_is_edge) = (score, point, false);
        }
    }

    match (a_is_edge, b_is_edge) {
        (true, true) => {
            let unit = a_point & b_point;
            let missing = (a_point | b_point).first_clear::<4>();
            collect_offsets(
                iter::once(unit.corner())
                    .chain(unit.pushed_out())
                    .chain(iter::once(offset_with(1, missing, -1))),
            )
        }
        (false, false) => collect_offsets(
            (a_point & b_point)
                .pushed_out()
                .chain(iter::once([1, 1, 1, 1])),
        ),
        _ => {
            let (edge, face) = if a_is_edge {
                (a_point, b_point)
            } else {
                (b_point, a_point)
            };
            collect_offsets(
                edge.pushed_out()
                    .chain(iter::once(offset_with(1, face.first_clear::<4>(), -1))),
            )
        }
    }
}
