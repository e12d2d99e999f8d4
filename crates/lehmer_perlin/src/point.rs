//! Host-side positions.
//!
//! `Point3` is `#[repr(C)]` and `Pod`, so interleaved xyz buffers coming
//! from an engine can be sampled in place.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::{NoiseError, NoiseResult};

/// 3D sample position.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Point3 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
}

impl Point3 {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Origin
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Converts to array
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Views an interleaved `[x0, y0, z0, x1, ...]` buffer as points.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::MalformedPointBuffer`] if the length is not a
    /// multiple of 3.
    pub fn cast_flat(values: &[f64]) -> NoiseResult<&[Self]> {
        bytemuck::try_cast_slice(values)
            .map_err(|_| NoiseError::MalformedPointBuffer { len: values.len() })
    }
}

impl From<[f64; 3]> for Point3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Point3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}
