//! 2D OpenSimplex noise over a triangular lattice.

use glam::DVec2;

use super::open_simplex::{Cell, NoiseFn, OpenSimplexNoise};

/// `(1 / sqrt(3) - 1) / 2`
const STRETCH: f64 = -0.211_324_865_405_187_08;
/// `(sqrt(3) - 1) / 2`
const SQUISH: f64 = 0.366_025_403_784_438_6;
const NORM: f64 = 47.0;

/// The two unit vertices shared by both triangles of a cell.
const EDGE: [[i32; 2]; 2] = [[1, 0], [0, 1]];

impl OpenSimplexNoise<2> {
    /// Noise value at `(x, y)`, roughly in `[-1, 1]`.
    #[must_use]
    pub fn eval(&self, x: f64, y: f64) -> f64 {
        let cell = Cell::locate([x, y], STRETCH, SQUISH);
        let [xins, yins] = cell.ins;
        let in_sum = cell.in_sum();

        // The triangle's own corner, then the closest vertex outside it.
        let corners = if in_sum <= 1.0 {
            let zins = 1.0 - in_sum;
            let extra = if zins > xins || zins > yins {
                if xins > yins { [1, -1] } else { [-1, 1] }
            } else {
                [1, 1]
            };
            [[0, 0], extra]
        } else {
            let zins = 2.0 - in_sum;
            let extra = if zins < xins || zins < yins {
                if xins > yins { [2, 0] } else { [0, 2] }
            } else {
                [0, 0]
            };
            [[1, 1], extra]
        };

        let value = cell.sum(EDGE.iter().chain(&corners), SQUISH, |lattice| {
            self.table.gradient_2d(lattice)
        });
        value / NORM
    }

    /// [`eval`](Self::eval) at a vector.
    #[must_use]
    pub fn eval_vec(&self, point: DVec2) -> f64 {
        self.eval(point.x, point.y)
    }
}

impl NoiseFn<2> for OpenSimplexNoise<2> {
    fn sample(&self, [x, y]: [f64; 2]) -> f64 {
        self.eval(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stretch_and_squish_invert_each_other() {
        let stretched = 1.0 + 2.0 * STRETCH;
        let squished = 1.0 + 2.0 * SQUISH;
        assert!((stretched * squished - 1.0).abs() < 1e-12);
    }

    #[test]
    fn origin_is_zero() {
        let noise = OpenSimplexNoise::<2>::default();
        assert!(noise.eval(0.0, 0.0).abs() < 1e-12);
    }

    #[test]
    fn matches_reference_values() {
        let noise = OpenSimplexNoise::<2>::default();
        for (x, y, expected) in [
            (1.5, -2.25, 0.118_473_030_000_105_81),
            (0.5, 0.5, 0.269_328_553_605_280_74),
            (-7.3, 12.9, -0.369_602_372_318_577_07),
        ] {
            let value = noise.eval(x, y);
            assert!((value - expected).abs() < 1e-12, "({x}, {y}): {value}");
        }
    }

    #[test]
    #[allow(clippy::float_cmp, reason = "same computation on the same input")]
    fn vector_and_array_entry_points_agree() {
        let noise = OpenSimplexNoise::<2>::new(42);
        let value = noise.eval(3.25, -0.75);
        assert_eq!(noise.eval_vec(DVec2::new(3.25, -0.75)), value);
        assert_eq!(noise.sample([3.25, -0.75]), value);
    }
}
