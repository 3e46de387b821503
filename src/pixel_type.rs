//! Backend pixel storage descriptors.
//!
//! A [`PixelType`] packs per-channel depth and channel count into one
//! integer: `depth + ((channels - 1) << 3)`. Channel order is not part of
//! the encoding, so `RGB_U8` and `BGR_U8` share a type.

const CN_SHIFT: i32 = 3;
const DEPTH_MASK: i32 = (1 << CN_SHIFT) - 1;
const CN_MAX: i32 = 512;

/// Per-channel sample depth.
#[non_exhaustive]
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Depth {
    U8 = 0,
    I8 = 1,
    U16 = 2,
    I16 = 3,
    I32 = 4,
    F32 = 5,
    F64 = 6,
    F16 = 7,
}

impl Depth {
    /// Bytes per sample.
    pub fn bytes(&self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 | Self::F16 => 2,
            Self::I32 | Self::F32 => 4,
            Self::F64 => 8,
        }
    }
}

/// Packed depth and channel count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelType(i32);

impl PixelType {
    /// 8-bit unsigned, 1 channel.
    pub const U8C1: PixelType = PixelType::new(Depth::U8, 1);
    /// 8-bit unsigned, 3 channels.
    pub const U8C3: PixelType = PixelType::new(Depth::U8, 3);
    /// 8-bit unsigned, 4 channels.
    pub const U8C4: PixelType = PixelType::new(Depth::U8, 4);

    /// Build a descriptor. `channels` must be in `1..=512`.
    pub const fn new(depth: Depth, channels: u16) -> Self {
        assert!(channels >= 1 && channels as i32 <= CN_MAX);
        PixelType(depth as i32 + ((channels as i32 - 1) << CN_SHIFT))
    }

    /// Wrap a raw descriptor received from the backend.
    pub const fn from_raw(raw: i32) -> Self {
        PixelType(raw)
    }

    /// The raw integer the backend expects.
    pub const fn raw(self) -> i32 {
        self.0
    }

    pub fn depth(&self) -> Depth {
        match self.0 & DEPTH_MASK {
            0 => Depth::U8,
            1 => Depth::I8,
            2 => Depth::U16,
            3 => Depth::I16,
            4 => Depth::I32,
            5 => Depth::F32,
            6 => Depth::F64,
            _ => Depth::F16,
        }
    }

    pub fn channels(&self) -> usize {
        (((self.0 >> CN_SHIFT) & (CN_MAX - 1)) + 1) as usize
    }

    pub fn bytes_per_pixel(&self) -> usize {
        self.depth().bytes() * self.channels()
    }
}
