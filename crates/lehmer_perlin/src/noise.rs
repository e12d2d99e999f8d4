//! # Perlin Noise Evaluation
//!
//! Improved Perlin noise over a seed-built `PermutationTable`.
//!
//! ## Hashing
//!
//! Corner hashes add the packed gradient code of one lookup to the next
//! lattice coordinate, then mask to the table period:
//!
//! ```text
//!   A  = (T[X]   + Y) & 31     B  = (T[X+1] + Y) & 31
//!   AA = (T[A]   + Z) & 31     AB = (T[B]   + Z) & 31
//!   BA = (T[A+1] + Z) & 31     BB = (T[B+1] + Z) & 31
//! ```
//!
//! The gradient codes are not uniformly spread over `0..32`, so this hash
//! is weaker than a true permutation. It is kept as is: changing it
//! changes every generated field.
//!
//! ## Determinism Guarantee
//!
//! Given the same `NoiseSeed`, `sample` returns bit-identical values for
//! the same inputs within one floating-point environment.

use crate::point::Point3;
use crate::seed::NoiseSeed;
use crate::table::{PermutationTable, TABLE_MASK};

/// 3D Perlin noise generator.
///
/// Produces smooth, continuous noise values in roughly [-1, 1]. The field
/// repeats every 32 units along each axis.
///
/// # Performance
///
/// - O(1) per sample
/// - No allocations after construction
/// - `Sync`: share one generator between threads freely
///
/// # Example
///
/// ```rust
/// use lehmer_perlin::{NoiseSeed, PerlinNoise};
///
/// let noise = PerlinNoise::new(NoiseSeed::new(42));
/// let a = noise.sample(1.5, 2.25, -3.75);
/// let b = noise.sample(1.5, 2.25, -3.75);
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Debug)]
pub struct PerlinNoise {
    /// The permutation table.
    table: PermutationTable,
}

impl PerlinNoise {
    /// Creates a new noise generator from a seed.
    #[must_use]
    pub fn new(seed: NoiseSeed) -> Self {
        Self {
            table: PermutationTable::build(seed),
        }
    }

    /// Returns the gradient table this generator samples.
    #[must_use]
    pub fn table(&self) -> &PermutationTable {
        &self.table
    }

    /// Samples 3D noise at the given coordinates.
    ///
    /// Inputs must be finite. NaN or infinite coordinates give an
    /// unspecified (but memory-safe) result.
    #[must_use]
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let (xi, x) = lattice(x);
        let (yi, y) = lattice(y);
        let (zi, z) = lattice(z);

        let u = fade(x);
        let v = fade(y);
        let w = fade(z);

        let t = &self.table;
        let a = (t.hash(xi) + yi) & TABLE_MASK;
        let b = (t.hash(xi + 1) + yi) & TABLE_MASK;
        let aa = (t.hash(a) + zi) & TABLE_MASK;
        let ab = (t.hash(b) + zi) & TABLE_MASK;
        let ba = (t.hash(a + 1) + zi) & TABLE_MASK;
        let bb = (t.hash(b + 1) + zi) & TABLE_MASK;

        lerp(
            w,
            lerp(
                v,
                lerp(u, t.get(aa).dot(x, y, z), t.get(ab).dot(x - 1.0, y, z)),
                lerp(
                    u,
                    t.get(ba).dot(x, y - 1.0, z),
                    t.get(bb).dot(x - 1.0, y - 1.0, z),
                ),
            ),
            lerp(
                v,
                lerp(
                    u,
                    t.get(aa + 1).dot(x, y, z - 1.0),
                    t.get(ab + 1).dot(x - 1.0, y, z - 1.0),
                ),
                lerp(
                    u,
                    t.get(ba + 1).dot(x, y - 1.0, z - 1.0),
                    t.get(bb + 1).dot(x - 1.0, y - 1.0, z - 1.0),
                ),
            ),
        )
    }

    /// Samples noise at a point.
    #[inline]
    #[must_use]
    pub fn sample_point(&self, point: Point3) -> f64 {
        self.sample(point.x, point.y, point.z)
    }

    /// Samples a batch of points into `out`.
    ///
    /// Writes `min(points.len(), out.len())` values.
    pub fn sample_into(&self, points: &[Point3], out: &mut [f64]) {
        for (value, point) in out.iter_mut().zip(points) {
            *value = self.sample_point(*point);
        }
    }
}

/// Splits a coordinate into its masked cell index and offset in the cell.
#[inline]
fn lattice(coord: f64) -> (usize, f64) {
    let floor = coord.floor();
    ((floor as i64 as usize) & TABLE_MASK, coord - floor)
}

/// Quintic smoothstep: `6t^5 - 15t^4 + 10t^3`.
#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}
