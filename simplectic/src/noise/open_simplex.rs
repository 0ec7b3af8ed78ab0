//! The noise field type and the per-vertex machinery every dimension shares.

use std::array;
use std::sync::Arc;

use bitflags::bitflags;

use super::PermutationTable;
use crate::math::{dot, floor};

/// Seed used when seeding is requested without a value.
pub const DEFAULT_SEED: i64 = 0;

/// OpenSimplex noise over `N`-dimensional space.
///
/// `eval` is implemented for `N` = 2, 3 and 4. The permutation table is held
/// behind an [`Arc`], so fields of different dimensions can share one table
/// and a field can be cloned into other threads without copying it.
#[derive(Debug, Clone)]
pub struct OpenSimplexNoise<const N: usize> {
    pub(super) table: Arc<PermutationTable>,
}

impl<const N: usize> OpenSimplexNoise<N> {
    /// Field over a table shuffled from `seed` with the LCG scheme.
    #[must_use]
    pub fn new(seed: i64) -> Self {
        Self::with_table(Arc::new(PermutationTable::from_seed(seed)))
    }

    /// Field over a table shuffled with glibc's `srand(seed)`/`rand()`.
    #[must_use]
    pub fn from_libc_seed(seed: u32) -> Self {
        Self::with_table(Arc::new(PermutationTable::from_libc_seed(seed)))
    }

    /// Field over an explicit table, stored without validation.
    #[must_use]
    pub fn from_perm(perm: &[u8; 256]) -> Self {
        Self::with_table(Arc::new(PermutationTable::from_perm(perm)))
    }

    /// Field over an existing, possibly shared, table.
    #[must_use]
    pub const fn with_table(table: Arc<PermutationTable>) -> Self {
        Self { table }
    }

    /// The table this field hashes lattice points with.
    #[must_use]
    pub const fn table(&self) -> &Arc<PermutationTable> {
        &self.table
    }
}

impl<const N: usize> Default for OpenSimplexNoise<N> {
    /// Field over [`PermutationTable::reference`].
    fn default() -> Self {
        Self::with_table(Arc::new(PermutationTable::reference()))
    }
}

/// A scalar field that can be sampled at `N`-dimensional points.
pub trait NoiseFn<const N: usize> {
    /// Value of the field at `point`.
    fn sample(&self, point: [f64; N]) -> f64;
}

impl<const N: usize, T: NoiseFn<N> + ?Sized> NoiseFn<N> for &T {
    fn sample(&self, point: [f64; N]) -> f64 {
        (**self).sample(point)
    }
}

impl<const N: usize, T: NoiseFn<N> + ?Sized> NoiseFn<N> for Arc<T> {
    fn sample(&self, point: [f64; N]) -> f64 {
        (**self).sample(point)
    }
}

bitflags! {
    /// A vertex of the unit hypercube, one bit per axis.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub(super) struct Axes: u8 {
        const X = 1 << 0;
        const Y = 1 << 1;
        const Z = 1 << 2;
        const W = 1 << 3;
    }
}

impl Axes {
    #[inline]
    const fn has(self, axis: usize) -> bool {
        (self.bits() >> axis) & 1 != 0
    }

    /// The vertex as a lattice offset.
    #[inline]
    pub(super) fn corner<const N: usize>(self) -> [i32; N] {
        array::from_fn(|axis| i32::from(self.has(axis)))
    }

    /// Lowest set axis, or the last axis if none is set.
    #[inline]
    pub(super) const fn first_set<const N: usize>(self) -> usize {
        let axis = self.bits().trailing_zeros() as usize;
        if axis < N { axis } else { N - 1 }
    }

    /// Lowest clear axis, or the last axis if all are set.
    #[inline]
    pub(super) const fn first_clear<const N: usize>(self) -> usize {
        let axis = (!self.bits()).trailing_zeros() as usize;
        if axis < N { axis } else { N - 1 }
    }

    /// The corner once per clear axis, with that axis stepped back to -1.
    #[inline]
    pub(super) fn stepped_back<const N: usize>(self) -> impl Iterator<Item = [i32; N]> {
        self.moved(false, -1)
    }

    /// The corner once per set axis, with that axis pushed out to 2.
    #[inline]
    pub(super) fn pushed_out<const N: usize>(self) -> impl Iterator<Item = [i32; N]> {
        self.moved(true, 2)
    }

    fn moved<const N: usize>(self, set: bool, value: i32) -> impl Iterator<Item = [i32; N]> {
        (0..N)
            .filter(move |&axis| self.has(axis) == set)
            .map(move |axis| {
                let mut offset = self.corner();
                offset[axis] = value;
                offset
            })
    }
}

/// An offset of `fill` on every axis except `axis`, which is `value`.
#[inline]
pub(super) fn offset_with<const N: usize>(fill: i32, axis: usize, value: i32) -> [i32; N] {
    let mut offset = [fill; N];
    offset[axis] = value;
    offset
}

/// Collect exactly `K` offsets.
///
/// Every region yields a fixed number of extra vertices; a short or long
/// iterator is a bug in the region logic and trips the debug assertion.
#[inline]
pub(super) fn collect_offsets<const N: usize, const K: usize>(
    mut offsets: impl Iterator<Item = [i32; N]>,
) -> [[i32; N]; K] {
    let mut missing = 0;
    let collected = array::from_fn(|_| {
        offsets.next().unwrap_or_else(|| {
            missing += 1;
            [0; N]
        })
    });
    debug_assert!(
        missing == 0 && offsets.next().is_none(),
        "expected exactly {K} offsets"
    );
    collected
}

/// The stretched lattice cell containing a point.
pub(super) struct Cell<const N: usize> {
    origin: [i64; N],
    /// Displacement from the cell origin, in input space.
    delta: [f64; N],
    /// Position inside the cell, in stretched space.
    pub(super) ins: [f64; N],
}

impl<const N: usize> Cell<N> {
    #[inline]
    pub(super) fn locate(point: [f64; N], stretch: f64, squish: f64) -> Self {
        let stretch_offset = point.iter().sum::<f64>() * stretch;
        let stretched: [f64; N] = array::from_fn(|i| point[i] + stretch_offset);
        let origin: [i64; N] = stretched.map(floor);

        let squish_offset = origin.iter().map(|&o| o as f64).sum::<f64>() * squish;
        let delta = array::from_fn(|i| point[i] - (origin[i] as f64 + squish_offset));
        let ins = array::from_fn(|i| stretched[i] - origin[i] as f64);
        Self { origin, delta, ins }
    }

    #[inline]
    pub(super) fn in_sum(&self) -> f64 {
        self.ins.iter().sum()
    }

    /// Sum the contributions of the vertices at `offsets` from the origin.
    #[inline]
    pub(super) fn sum<'a>(
        &self,
        offsets: impl IntoIterator<Item = &'a [i32; N]>,
        squish: f64,
        gradient: impl Fn([i64; N]) -> &'static [i8],
    ) -> f64 {
        let mut value = 0.0;
        for offset in offsets {
            value += self.contribution(offset, squish, &gradient);
        }
        value
    }

    /// `(2 - |d|²)⁴ · (g · d)` for the vertex at `offset`, or 0 outside its
    /// radius of influence.
    #[inline]
    fn contribution(
        &self,
        offset: &[i32; N],
        squish: f64,
        gradient: &impl Fn([i64; N]) -> &'static [i8],
    ) -> f64 {
        let steps = f64::from(offset.iter().sum::<i32>());
        let delta: [f64; N] =
            array::from_fn(|i| self.delta[i] - f64::from(offset[i]) - steps * squish);

        let attn = 2.0 - delta.iter().map(|d| d * d).sum::<f64>();
        if attn <= 0.0 {
            return 0.0;
        }

        let lattice = array::from_fn(|i| self.origin[i].wrapping_add(i64::from(offset[i])));
        let attn = attn * attn;
        attn * attn * dot(gradient(lattice), &delta)
    }
}
