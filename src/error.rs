use core::fmt;

use crate::kernel::KernelShape;
use crate::pixel::{ImageFormat, PixelFormat};

/// Either side of the pixel format bijection, as carried by
/// [`FormatError::UnsupportedFormat`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatValue {
    /// A host GUI pixel format.
    Pixel(PixelFormat),
    /// An internal image format tag.
    Image(ImageFormat),
}

impl fmt::Display for FormatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixel(p) => write!(f, "pixel format {p:?}"),
            Self::Image(i) => write!(f, "image format {i}"),
        }
    }
}

impl From<PixelFormat> for FormatValue {
    fn from(p: PixelFormat) -> Self {
        Self::Pixel(p)
    }
}

impl From<ImageFormat> for FormatValue {
    fn from(i: ImageFormat) -> Self {
        Self::Image(i)
    }
}

/// Errors from format table lookups.
///
/// Every variant is a static precondition violation: the same input always
/// fails the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FormatError {
    #[error("unsupported {0}")]
    UnsupportedFormat(FormatValue),

    #[error("unsupported conversion from {src} to {dst}")]
    UnsupportedConversion { src: ImageFormat, dst: ImageFormat },

    #[error("unsupported kernel shape ({0:?})")]
    UnsupportedShape(KernelShape),
}

impl FormatError {
    pub(crate) fn unsupported(value: impl Into<FormatValue>) -> Self {
        let value = value.into();
        log::debug!("format lookup failed: unsupported {value}");
        FormatError::UnsupportedFormat(value)
    }

    pub(crate) fn conversion(src: ImageFormat, dst: ImageFormat) -> Self {
        log::debug!("format lookup failed: no conversion from {src} to {dst}");
        FormatError::UnsupportedConversion { src, dst }
    }

    pub(crate) fn shape(shape: KernelShape) -> Self {
        log::debug!("kernel shape lookup failed: {shape:?}");
        FormatError::UnsupportedShape(shape)
    }
}
