//! Host color values as backend scalars and back.

use core::ops::{Index, IndexMut};

use rgb::RGBA8;

use crate::error::FormatError;
use crate::pixel::ImageFormat;

/// Four numeric slots as consumed by the backend's fill and threshold
/// operations. Slot meaning depends on the [`ImageFormat`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Scalar(pub [f64; 4]);

impl Scalar {
    pub const fn new(v0: f64, v1: f64, v2: f64, v3: f64) -> Self {
        Scalar([v0, v1, v2, v3])
    }

    /// Same value in every slot.
    pub const fn all(v: f64) -> Self {
        Scalar([v; 4])
    }

    /// Slot `i` truncated to 8 bits. Fractions are dropped and out-of-range
    /// values saturate; NaN becomes 0.
    fn u8_at(&self, i: usize) -> u8 {
        self.0[i] as u8
    }
}

impl From<[f64; 4]> for Scalar {
    fn from(v: [f64; 4]) -> Self {
        Scalar(v)
    }
}

impl Index<usize> for Scalar {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl IndexMut<usize> for Scalar {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.0[i]
    }
}

/// Lay out `color` in the channel order of `format`.
///
/// `L_U8` shares the R,G,B,A order of `RGB_U8`; for true grayscale storage
/// the backend only reads slot 0.
pub fn color_to_scalar(color: RGBA8, format: ImageFormat) -> Result<Scalar, FormatError> {
    let (r, g, b, a) = (color.r, color.g, color.b, color.a);
    match format {
        ImageFormat::L8 | ImageFormat::Rgb8 => Ok(Scalar::new(
            f64::from(r),
            f64::from(g),
            f64::from(b),
            f64::from(a),
        )),
        ImageFormat::Bgr8 | ImageFormat::Bgra8 => Ok(Scalar::new(
            f64::from(b),
            f64::from(g),
            f64::from(r),
            f64::from(a),
        )),
        _ => Err(FormatError::unsupported(format)),
    }
}

/// Read a color back out of a scalar laid out for `format`.
///
/// Only `BGRA_U8` carries alpha; the other formats produce an opaque color.
/// `RGB_U8` is rejected: the backend never hands back scalars in that order.
pub fn scalar_to_color(scalar: &Scalar, format: ImageFormat) -> Result<RGBA8, FormatError> {
    match format {
        ImageFormat::L8 => {
            let v = scalar.u8_at(0);
            Ok(RGBA8::new(v, v, v, u8::MAX))
        }
        ImageFormat::Bgr8 => Ok(RGBA8::new(
            scalar.u8_at(2),
            scalar.u8_at(1),
            scalar.u8_at(0),
            u8::MAX,
        )),
        ImageFormat::Bgra8 => Ok(RGBA8::new(
            scalar.u8_at(2),
            scalar.u8_at(1),
            scalar.u8_at(0),
            scalar.u8_at(3),
        )),
        _ => Err(FormatError::unsupported(format)),
    }
}
