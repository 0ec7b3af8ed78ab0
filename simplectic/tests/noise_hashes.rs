//! Noise regression tests.
//!
//! Samples every dimension over a fixed grid for several permutation tables
//! and compares an MD5 hash of the quantized values against recorded hashes.
//!
//! Hashes are loaded from `noise_hashes.json`. Each value is rounded to 1e-9
//! and hashed as a little-endian `i64`, in grid order with the first axis
//! varying fastest.

use std::fmt::Write;

use serde::Deserialize;
use simplectic::{NoiseConfig, NoiseFn, OpenSimplexNoise, TableSource};

/// Top-level JSON structure for noise hashes.
#[derive(Deserialize)]
struct NoiseHashesJson {
    grids: Grids,
    tables: Vec<TableHashes>,
}

#[derive(Deserialize)]
struct Grids {
    #[serde(rename = "2d")]
    plane: Grid,
    #[serde(rename = "3d")]
    volume: Grid,
    #[serde(rename = "4d")]
    hypervolume: Grid,
}

/// A regular grid of `size` points per axis.
#[derive(Deserialize)]
struct Grid {
    origin: Vec<f64>,
    step: f64,
    size: u32,
}

/// Expected hashes for one permutation table.
#[derive(Deserialize)]
struct TableHashes {
    table: TableSource,
    hashes: DimensionHashes,
}

#[derive(Deserialize)]
struct DimensionHashes {
    #[serde(rename = "2d")]
    plane: String,
    #[serde(rename = "3d")]
    volume: String,
    #[serde(rename = "4d")]
    hypervolume: String,
}

fn load_expected_hashes() -> NoiseHashesJson {
    let json_str = include_str!("../test_assets/noise_hashes.json");
    serde_json::from_str(json_str).expect("Failed to parse noise_hashes.json")
}

fn quantize(value: f64) -> i64 {
    let scaled = value * 1e9;
    let rounded = (scaled.abs() + 0.5).floor();
    (if scaled >= 0.0 { rounded } else { -rounded }) as i64
}

fn grid_hash<const N: usize>(noise: &impl NoiseFn<N>, grid: &Grid) -> String {
    assert_eq!(grid.origin.len(), N, "grid dimension");

    let mut ctx = md5::Context::new();
    for i in 0..grid.size.pow(N as u32) {
        let point: [f64; N] = std::array::from_fn(|axis| {
            let index = (i / grid.size.pow(axis as u32)) % grid.size;
            grid.origin[axis] + f64::from(index) * grid.step
        });
        ctx.consume(quantize(noise.sample(point)).to_le_bytes());
    }
    format!("{:x}", ctx.finalize())
}

/// Verify the hashes of one dimension for every recorded table.
fn verify_dimension<const N: usize>(
    tables: &[TableHashes],
    grid: &Grid,
    expected: impl Fn(&TableHashes) -> &str,
    dimension_name: &str,
) where
    OpenSimplexNoise<N>: NoiseFn<N>,
{
    let mut mismatches = Vec::new();

    for entry in tables {
        let noise = NoiseConfig {
            table: entry.table.clone(),
        }
        .build::<N>()
        .expect("recorded tables are valid");
        let actual_hash = grid_hash(&noise, grid);
        let expected_hash = expected(entry);
        if actual_hash != expected_hash {
            mismatches.push((entry.table.clone(), expected_hash.to_owned(), actual_hash));
        }
    }

    if !mismatches.is_empty() {
        let total = tables.len();
        let failed = mismatches.len();
        let mut msg = format!("{dimension_name}: {failed}/{total} tables MISMATCHED:\n");
        for (table, expected, actual) in &mismatches {
            let _ = writeln!(msg, "  {table:?}: expected {expected} got {actual}");
        }
        panic!("{msg}");
    }
}

#[test]
fn quantize_rounds_to_nearest_nanounit() {
    assert_eq!(quantize(0.25), 250_000_000);
    assert_eq!(quantize(-0.25), -250_000_000);
    assert_eq!(quantize(1.6e-9), 2);
    assert_eq!(quantize(-1.6e-9), -2);
    assert_eq!(quantize(1.4e-9), 1);
    assert_eq!(quantize(0.0), 0);
}

#[test]
fn noise_2d_hashes_match() {
    let expected = load_expected_hashes();
    verify_dimension::<2>(
        &expected.tables,
        &expected.grids.plane,
        |t| t.hashes.plane.as_str(),
        "2d",
    );
}

#[test]
fn noise_3d_hashes_match() {
    let expected = load_expected_hashes();
    verify_dimension::<3>(
        &expected.tables,
        &expected.grids.volume,
        |t| t.hashes.volume.as_str(),
        "3d",
    );
}

#[test]
fn noise_4d_hashes_match() {
    let expected = load_expected_hashes();
    verify_dimension::<4>(
        &expected.tables,
        &expected.grids.hypervolume,
        |t| t.hashes.hypervolume.as_str(),
        "4d",
    );
}
