//! # zenformats
//!
//! Translation tables between a GUI toolkit's pixel formats and an
//! image-processing backend's numeric type and operation codes.
//!
//! ## Tables
//!
//! - **Pixel format ↔ image format**: bijection between the host
//!   [`PixelFormat`] and the internal [`ImageFormat`] tag
//!   (`Gray8 ↔ L_U8`, `Bgr24 ↔ BGR_U8`, `Bgra32 ↔ BGRA_U8`, `Rgb24 ↔ RGB_U8`)
//! - **Image format → pixel type**: backend storage descriptor
//!   ([`PixelType`]); `RGB_U8` and `BGR_U8` share one
//! - **(src, dst) → conversion code**: backend color conversion kernel
//!   ([`ConversionCode`]) for every ordered pair of distinct formats
//! - **Kernel shape → shape code**: morphology structuring elements
//!
//! The tables are evaluated at compile time into a `static`
//! [`FormatRegistry`]; lookups are array indexing and never allocate or lock.
//!
//! ## Errors
//!
//! Every lookup returns [`FormatError`] for an unsupported key. There are no
//! fallbacks: an unknown format is never silently mapped to a default.
//! Identity conversions are errors too; use [`plan_conversion`] to get
//! [`ConversionPlan::Identity`] instead.
//!
//! ## Usage
//!
//! ```
//! use zenformats::{Color, ConversionCode, ImageFormat, PixelFormat, PixelType};
//!
//! let fmt = zenformats::to_image_format(PixelFormat::Bgra32)?;
//! assert_eq!(fmt, ImageFormat::Bgra8);
//! assert_eq!(zenformats::to_pixel_type(fmt)?, PixelType::U8C4);
//! assert_eq!(
//!     zenformats::to_conversion_code(fmt, ImageFormat::L8)?,
//!     ConversionCode::BGRA2GRAY
//! );
//!
//! let scalar = zenformats::color_to_scalar(Color::new(10, 20, 30, 255), ImageFormat::Bgr8)?;
//! assert_eq!(scalar.0, [30.0, 20.0, 10.0, 255.0]);
//! # Ok::<(), zenformats::FormatError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

mod conversion;
mod error;
mod kernel;
mod pixel;
mod pixel_type;
mod registry;
mod scalar;

// Re-exports
pub use conversion::{ConversionCode, ConversionPlan};
pub use error::{FormatError, FormatValue};
pub use kernel::KernelShape;
pub use pixel::{ImageFormat, PixelFormat};
pub use pixel_type::{Depth, PixelType};
pub use registry::FormatRegistry;
pub use rgb::RGBA8 as Color;
pub use scalar::{Scalar, color_to_scalar, scalar_to_color};

// ── Lookups on the global registry ───────────────────────────────────

/// Host pixel format to image format tag.
pub fn to_image_format(pixel_format: PixelFormat) -> Result<ImageFormat, FormatError> {
    FormatRegistry::global().to_image_format(pixel_format)
}

/// Image format tag to host pixel format.
pub fn to_pixel_format(image_format: ImageFormat) -> Result<PixelFormat, FormatError> {
    FormatRegistry::global().to_pixel_format(image_format)
}

/// Backend storage type for an image format.
pub fn to_pixel_type(image_format: ImageFormat) -> Result<PixelType, FormatError> {
    FormatRegistry::global().to_pixel_type(image_format)
}

/// Backend conversion code for `src -> dst`. Fails when `src == dst`.
pub fn to_conversion_code(
    src: ImageFormat,
    dst: ImageFormat,
) -> Result<ConversionCode, FormatError> {
    FormatRegistry::global().to_conversion_code(src, dst)
}

/// Conversion code for `src -> dst`, or [`ConversionPlan::Identity`] when
/// they match.
pub fn plan_conversion(src: ImageFormat, dst: ImageFormat) -> Result<ConversionPlan, FormatError> {
    FormatRegistry::global().plan_conversion(src, dst)
}

/// Backend morphology shape code.
pub fn to_kernel_shape_code(shape: KernelShape) -> Result<i32, FormatError> {
    FormatRegistry::global().to_kernel_shape_code(shape)
}
