//! # Lehmer Perlin
//!
//! Deterministic, seedable 3D Perlin noise.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same seed always produces the same noise field
//! 2. **Build once**: The gradient table is computed once per generator
//! 3. **Read-only sampling**: Evaluation never mutates, so one generator
//!    can be shared across threads without locking
//! 4. **Balanced gradients**: Every 12-entry block of the table holds each
//!    of the 12 cube-edge gradients exactly once
//!
//! ## Core Components
//!
//! - `NoiseSeed`: Seed value and its 12!-radix split into three sub-seeds
//! - `lehmer_permutation`: Index-to-permutation mapping (factorial number system)
//! - `GradientCode`: Packed 3D gradient vector
//! - `PermutationTable`: Cyclic 33-entry gradient table
//! - `PerlinNoise`: Improved Perlin evaluation over the table
//! - `NoiseConfig`: TOML-loaded construction settings
//!
//! ## Example
//!
//! ```rust
//! use lehmer_perlin::{NoiseSeed, PerlinNoise};
//!
//! let noise = PerlinNoise::new(NoiseSeed::new(123_456_789));
//!
//! // Integer lattice points are always zero
//! assert_eq!(noise.sample(0.0, 0.0, 0.0), 0.0);
//!
//! let value = noise.sample(0.5, 0.5, 0.5);
//! assert!(value.abs() <= 1.1);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod gradient;
pub mod noise;
pub mod permutation;
pub mod point;
pub mod seed;
pub mod table;

pub use config::NoiseConfig;
pub use error::{NoiseError, NoiseResult};
pub use gradient::{GradientCode, CANONICAL_GRADIENTS};
pub use noise::PerlinNoise;
pub use permutation::{factorial, lehmer_permutation};
pub use point::Point3;
pub use seed::{NoiseSeed, PERMUTATION_COUNT};
pub use table::{PermutationTable, TABLE_MASK, TABLE_SIZE};
