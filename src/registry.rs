//! The format translation tables.
//!
//! All tables are literal data below. [`FormatRegistry::build`] turns them
//! into dense indexes at compile time, so the process-wide registry is fully
//! built before any code can read it and is never written afterwards.

use crate::conversion::{ConversionCode, ConversionPlan};
use crate::error::FormatError;
use crate::kernel::{KernelShape, MORPH_CROSS, MORPH_ELLIPSE, MORPH_RECT};
use crate::pixel::{ImageFormat, PixelFormat};
use crate::pixel_type::PixelType;

const PIXEL_FORMATS: [(PixelFormat, ImageFormat); 4] = [
    (PixelFormat::Gray8, ImageFormat::L8),
    (PixelFormat::Bgr24, ImageFormat::Bgr8),
    (PixelFormat::Bgra32, ImageFormat::Bgra8),
    (PixelFormat::Rgb24, ImageFormat::Rgb8),
];

const PIXEL_TYPES: [(ImageFormat, PixelType); 4] = [
    (ImageFormat::L8, PixelType::U8C1),
    (ImageFormat::Rgb8, PixelType::U8C3),
    (ImageFormat::Bgr8, PixelType::U8C3),
    (ImageFormat::Bgra8, PixelType::U8C4),
];

const CONVERSIONS: [(ImageFormat, ImageFormat, ConversionCode); 12] = [
    (ImageFormat::L8, ImageFormat::Rgb8, ConversionCode::GRAY2RGB),
    (ImageFormat::L8, ImageFormat::Bgr8, ConversionCode::GRAY2BGR),
    (ImageFormat::L8, ImageFormat::Bgra8, ConversionCode::GRAY2BGRA),
    (ImageFormat::Rgb8, ImageFormat::L8, ConversionCode::RGB2GRAY),
    (ImageFormat::Rgb8, ImageFormat::Bgr8, ConversionCode::RGB2BGR),
    (ImageFormat::Rgb8, ImageFormat::Bgra8, ConversionCode::RGB2BGRA),
    (ImageFormat::Bgr8, ImageFormat::L8, ConversionCode::BGR2GRAY),
    (ImageFormat::Bgr8, ImageFormat::Rgb8, ConversionCode::BGR2RGB),
    (ImageFormat::Bgr8, ImageFormat::Bgra8, ConversionCode::BGR2BGRA),
    (ImageFormat::Bgra8, ImageFormat::L8, ConversionCode::BGRA2GRAY),
    (ImageFormat::Bgra8, ImageFormat::Rgb8, ConversionCode::BGRA2RGB),
    (ImageFormat::Bgra8, ImageFormat::Bgr8, ConversionCode::BGRA2BGR),
];

const KERNEL_SHAPES: [(KernelShape, i32); 3] = [
    (KernelShape::Rect, MORPH_RECT),
    (KernelShape::Cross, MORPH_CROSS),
    (KernelShape::Ellipse, MORPH_ELLIPSE),
];

static REGISTRY: FormatRegistry = FormatRegistry::build();

/// Immutable lookup tables between host pixel formats, image format tags,
/// backend pixel types and conversion codes.
#[derive(Debug)]
pub struct FormatRegistry {
    image_formats: [Option<ImageFormat>; PixelFormat::COUNT],
    pixel_formats: [Option<PixelFormat>; ImageFormat::COUNT],
    pixel_types: [Option<PixelType>; ImageFormat::COUNT],
    conversions: [[Option<ConversionCode>; ImageFormat::COUNT]; ImageFormat::COUNT],
}

impl FormatRegistry {
    /// The process-wide registry.
    pub fn global() -> &'static FormatRegistry {
        &REGISTRY
    }

    /// Index the literal tables. Panics (at compile time for the global
    /// registry) on a duplicate key or an identity conversion.
    const fn build() -> Self {
        let mut reg = FormatRegistry {
            image_formats: [None; PixelFormat::COUNT],
            pixel_formats: [None; ImageFormat::COUNT],
            pixel_types: [None; ImageFormat::COUNT],
            conversions: [[None; ImageFormat::COUNT]; ImageFormat::COUNT],
        };

        let mut i = 0;
        while i < PIXEL_FORMATS.len() {
            let (pixel, image) = PIXEL_FORMATS[i];
            assert!(
                reg.image_formats[pixel.index()].is_none(),
                "pixel format mapped twice"
            );
            assert!(
                reg.pixel_formats[image.index()].is_none(),
                "image format mapped twice"
            );
            reg.image_formats[pixel.index()] = Some(image);
            reg.pixel_formats[image.index()] = Some(pixel);
            i += 1;
        }

        let mut i = 0;
        while i < PIXEL_TYPES.len() {
            let (image, ty) = PIXEL_TYPES[i];
            assert!(
                reg.pixel_types[image.index()].is_none(),
                "pixel type mapped twice"
            );
            reg.pixel_types[image.index()] = Some(ty);
            i += 1;
        }

        let mut i = 0;
        while i < CONVERSIONS.len() {
            let (src, dst, code) = CONVERSIONS[i];
            assert!(src.index() != dst.index(), "identity conversion in table");
            assert!(
                reg.conversions[src.index()][dst.index()].is_none(),
                "conversion mapped twice"
            );
            reg.conversions[src.index()][dst.index()] = Some(code);
            i += 1;
        }

        reg
    }

    /// Host pixel format to image format tag.
    pub fn to_image_format(&self, pixel_format: PixelFormat) -> Result<ImageFormat, FormatError> {
        self.image_formats[pixel_format.index()]
            .ok_or_else(|| FormatError::unsupported(pixel_format))
    }

    /// Image format tag back to the host pixel format.
    pub fn to_pixel_format(&self, image_format: ImageFormat) -> Result<PixelFormat, FormatError> {
        self.pixel_formats[image_format.index()]
            .ok_or_else(|| FormatError::unsupported(image_format))
    }

    /// Backend storage type for an image format.
    pub fn to_pixel_type(&self, image_format: ImageFormat) -> Result<PixelType, FormatError> {
        self.pixel_types[image_format.index()]
            .ok_or_else(|| FormatError::unsupported(image_format))
    }

    /// Backend conversion code for the ordered pair `src -> dst`.
    ///
    /// `src == dst` is an error; see [`plan_conversion`](Self::plan_conversion)
    /// for a variant that reports the no-op instead.
    pub fn to_conversion_code(
        &self,
        src: ImageFormat,
        dst: ImageFormat,
    ) -> Result<ConversionCode, FormatError> {
        self.conversions[src.index()][dst.index()]
            .ok_or_else(|| FormatError::conversion(src, dst))
    }

    /// Like [`to_conversion_code`](Self::to_conversion_code), but `src == dst`
    /// yields [`ConversionPlan::Identity`].
    pub fn plan_conversion(
        &self,
        src: ImageFormat,
        dst: ImageFormat,
    ) -> Result<ConversionPlan, FormatError> {
        if src == dst {
            return Ok(ConversionPlan::Identity);
        }
        self.to_conversion_code(src, dst).map(ConversionPlan::Convert)
    }

    /// Backend morphology shape code.
    pub fn to_kernel_shape_code(&self, shape: KernelShape) -> Result<i32, FormatError> {
        KERNEL_SHAPES
            .iter()
            .find(|(s, _)| *s == shape)
            .map(|&(_, code)| code)
            .ok_or_else(|| FormatError::shape(shape))
    }

    /// Registered `(PixelFormat, ImageFormat)` pairs.
    pub fn pixel_formats(&self) -> impl Iterator<Item = (PixelFormat, ImageFormat)> + '_ {
        PixelFormat::ALL
            .into_iter()
            .filter_map(move |p| self.image_formats[p.index()].map(|i| (p, i)))
    }

    /// Registered `(src, dst, code)` triples.
    pub fn conversions(
        &self,
    ) -> impl Iterator<Item = (ImageFormat, ImageFormat, ConversionCode)> + '_ {
        ImageFormat::ALL.into_iter().flat_map(move |src| {
            ImageFormat::ALL.into_iter().filter_map(move |dst| {
                self.conversions[src.index()][dst.index()].map(|c| (src, dst, c))
            })
        })
    }
}
