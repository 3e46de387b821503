use core::fmt;

use crate::error::FormatError;
use crate::registry::FormatRegistry;

/// Host GUI pixel format.
///
/// Mirrors the windowing toolkit's pixel format enumeration. Only
/// [`Gray8`](Self::Gray8), [`Bgr24`](Self::Bgr24), [`Bgra32`](Self::Bgra32)
/// and [`Rgb24`](Self::Rgb24) have an [`ImageFormat`] counterpart.
#[non_exhaustive]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    Default,
    Indexed1,
    Indexed2,
    Indexed4,
    Indexed8,
    BlackWhite,
    Gray2,
    Gray4,
    /// 8-bit grayscale.
    Gray8,
    Bgr555,
    Bgr565,
    Rgb128Float,
    /// 24-bit B,G,R.
    Bgr24,
    /// 24-bit R,G,B.
    Rgb24,
    Bgr101010,
    /// 32-bit B,G,R with an unused 4th byte.
    Bgr32,
    /// 32-bit B,G,R,A (straight alpha).
    Bgra32,
    /// 32-bit B,G,R,A (premultiplied alpha).
    Pbgra32,
    Rgb48,
    Rgba64,
    Prgba64,
    Gray16,
    Gray32Float,
    Rgba128Float,
    Prgba128Float,
    Cmyk32,
}

impl PixelFormat {
    /// Every host pixel format, in discriminant order.
    pub const ALL: [PixelFormat; 26] = [
        Self::Default,
        Self::Indexed1,
        Self::Indexed2,
        Self::Indexed4,
        Self::Indexed8,
        Self::BlackWhite,
        Self::Gray2,
        Self::Gray4,
        Self::Gray8,
        Self::Bgr555,
        Self::Bgr565,
        Self::Rgb128Float,
        Self::Bgr24,
        Self::Rgb24,
        Self::Bgr101010,
        Self::Bgr32,
        Self::Bgra32,
        Self::Pbgra32,
        Self::Rgb48,
        Self::Rgba64,
        Self::Prgba64,
        Self::Gray16,
        Self::Gray32Float,
        Self::Rgba128Float,
        Self::Prgba128Float,
        Self::Cmyk32,
    ];

    pub(crate) const COUNT: usize = Self::ALL.len();

    /// Look up a pixel format by its raw discriminant.
    pub const fn from_raw(raw: u8) -> Option<Self> {
        if (raw as usize) < Self::COUNT {
            Some(Self::ALL[raw as usize])
        } else {
            None
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Bits per pixel as reported by the host toolkit.
    pub fn bits_per_pixel(&self) -> u32 {
        match self {
            Self::Default => 0,
            Self::Indexed1 | Self::BlackWhite => 1,
            Self::Indexed2 | Self::Gray2 => 2,
            Self::Indexed4 | Self::Gray4 => 4,
            Self::Indexed8 | Self::Gray8 => 8,
            Self::Bgr555 | Self::Bgr565 | Self::Gray16 => 16,
            Self::Bgr24 | Self::Rgb24 => 24,
            Self::Bgr101010
            | Self::Bgr32
            | Self::Bgra32
            | Self::Pbgra32
            | Self::Gray32Float
            | Self::Cmyk32 => 32,
            Self::Rgb48 => 48,
            Self::Rgba64 | Self::Prgba64 => 64,
            Self::Rgb128Float | Self::Rgba128Float | Self::Prgba128Float => 128,
        }
    }
}

impl TryFrom<PixelFormat> for ImageFormat {
    type Error = FormatError;

    fn try_from(p: PixelFormat) -> Result<Self, FormatError> {
        FormatRegistry::global().to_image_format(p)
    }
}

impl TryFrom<ImageFormat> for PixelFormat {
    type Error = FormatError;

    fn try_from(i: ImageFormat) -> Result<Self, FormatError> {
        FormatRegistry::global().to_pixel_format(i)
    }
}

/// Internal image format tag.
///
/// The canonical vocabulary used in place of the host [`PixelFormat`].
/// `Display` prints the tag name (`L_U8`, `BGRA_U8`, ...).
#[non_exhaustive]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// `L_U8`: single channel, 8-bit luminance.
    L8,
    /// `RGB_U8`: 3 channels, 8-bit R,G,B.
    Rgb8,
    /// `BGR_U8`: 3 channels, 8-bit B,G,R.
    Bgr8,
    /// `BGRA_U8`: 4 channels, 8-bit B,G,R,A.
    Bgra8,
    /// `RGBA_U8`: 4 channels, 8-bit R,G,B,A.
    Rgba8,
    /// `L_U16`: single channel, 16-bit luminance.
    L16,
    /// `L_F32`: single channel, 32-bit float luminance.
    LF32,
}

impl ImageFormat {
    /// Every image format tag, in discriminant order.
    pub const ALL: [ImageFormat; 7] = [
        Self::L8,
        Self::Rgb8,
        Self::Bgr8,
        Self::Bgra8,
        Self::Rgba8,
        Self::L16,
        Self::LF32,
    ];

    pub(crate) const COUNT: usize = Self::ALL.len();

    /// Look up an image format by its raw discriminant.
    pub const fn from_raw(raw: u8) -> Option<Self> {
        if (raw as usize) < Self::COUNT {
            Some(Self::ALL[raw as usize])
        } else {
            None
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Canonical tag name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::L8 => "L_U8",
            Self::Rgb8 => "RGB_U8",
            Self::Bgr8 => "BGR_U8",
            Self::Bgra8 => "BGRA_U8",
            Self::Rgba8 => "RGBA_U8",
            Self::L16 => "L_U16",
            Self::LF32 => "L_F32",
        }
    }

    /// Bytes per pixel for this format.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::L8 => 1,
            Self::L16 => 2,
            Self::Rgb8 | Self::Bgr8 => 3,
            Self::Bgra8 | Self::Rgba8 => 4,
            Self::LF32 => 4,
        }
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        match self {
            Self::L8 | Self::L16 | Self::LF32 => 1,
            Self::Rgb8 | Self::Bgr8 => 3,
            Self::Bgra8 | Self::Rgba8 => 4,
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
