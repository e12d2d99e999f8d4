//! # Gradient Codes
//!
//! A gradient is a 3D vector whose components are each -1, 0 or +1,
//! packed into 6 bits as three 2-bit fields:
//!
//! ```text
//!   bit  5 4 | 3 2 | 1 0
//!        x   |  y  |  z        00 = 0, 01 = +1, 10 = -1, 11 = invalid
//! ```
//!
//! Only the 12 cube-edge directions (one zero component, two +-1) are used
//! for noise. The packed value doubles as the table's hash value during
//! evaluation, so the encoding is part of the output contract.

/// Packed 3D gradient vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GradientCode(u8);

/// The 12 canonical gradients, in the order lattice permutations index them.
pub const CANONICAL_GRADIENTS: [GradientCode; 12] = [
    GradientCode::pack(1, 1, 0),
    GradientCode::pack(-1, 1, 0),
    GradientCode::pack(1, -1, 0),
    GradientCode::pack(-1, -1, 0),
    GradientCode::pack(1, 0, 1),
    GradientCode::pack(-1, 0, 1),
    GradientCode::pack(1, 0, -1),
    GradientCode::pack(-1, 0, -1),
    GradientCode::pack(0, 1, 1),
    GradientCode::pack(0, -1, 1),
    GradientCode::pack(0, 1, -1),
    GradientCode::pack(0, -1, -1),
];

const AXIS_ZERO: u8 = 0b00;
const AXIS_POS: u8 = 0b01;
const AXIS_NEG: u8 = 0b10;
const AXIS_MASK: u8 = 0b11;

impl GradientCode {
    /// Packs components known to be in {-1, 0, 1}.
    const fn pack(x: i8, y: i8, z: i8) -> Self {
        Self(encode_axis(x) << 4 | encode_axis(y) << 2 | encode_axis(z))
    }

    /// Creates a code from its components.
    ///
    /// Returns `None` if any component is outside {-1, 0, 1}.
    #[must_use]
    pub const fn from_components(x: i8, y: i8, z: i8) -> Option<Self> {
        if x < -1 || x > 1 || y < -1 || y > 1 || z < -1 || z > 1 {
            return None;
        }
        Some(Self::pack(x, y, z))
    }

    /// Creates a code from its packed form.
    ///
    /// Returns `None` for values above 6 bits or with an `11` field.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        if raw >> 6 != 0
            || raw & AXIS_MASK == AXIS_MASK
            || (raw >> 2) & AXIS_MASK == AXIS_MASK
            || (raw >> 4) & AXIS_MASK == AXIS_MASK
        {
            return None;
        }
        Some(Self(raw))
    }

    /// Returns the packed form.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Unpacks the `(x, y, z)` components.
    #[inline]
    #[must_use]
    pub const fn components(self) -> [i8; 3] {
        [
            decode_axis(self.0 >> 4),
            decode_axis(self.0 >> 2),
            decode_axis(self.0),
        ]
    }

    /// Dot product of this gradient with an offset vector.
    #[inline]
    #[must_use]
    pub fn dot(self, x: f64, y: f64, z: f64) -> f64 {
        let [gx, gy, gz] = self.components();
        f64::from(gx) * x + f64::from(gy) * y + f64::from(gz) * z
    }
}

const fn encode_axis(c: i8) -> u8 {
    match c {
        1 => AXIS_POS,
        -1 => AXIS_NEG,
        _ => AXIS_ZERO,
    }
}

const fn decode_axis(bits: u8) -> i8 {
    match bits & AXIS_MASK {
        AXIS_POS => 1,
        AXIS_NEG => -1,
        _ => 0,
    }
}
