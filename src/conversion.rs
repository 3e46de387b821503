//! Backend color conversion operation codes.

/// Selects a color-space conversion kernel in the backend.
///
/// Values match the backend's own numbering. Several names share a value
/// where one kernel serves both channel orders (`RGB2BGR == BGR2RGB`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConversionCode(i32);

impl ConversionCode {
    pub const BGR2BGRA: ConversionCode = ConversionCode(0);
    pub const RGB2RGBA: ConversionCode = Self::BGR2BGRA;
    pub const BGRA2BGR: ConversionCode = ConversionCode(1);
    pub const RGBA2RGB: ConversionCode = Self::BGRA2BGR;
    pub const BGR2RGBA: ConversionCode = ConversionCode(2);
    pub const RGB2BGRA: ConversionCode = Self::BGR2RGBA;
    pub const RGBA2BGR: ConversionCode = ConversionCode(3);
    pub const BGRA2RGB: ConversionCode = Self::RGBA2BGR;
    pub const BGR2RGB: ConversionCode = ConversionCode(4);
    pub const RGB2BGR: ConversionCode = Self::BGR2RGB;
    pub const BGRA2RGBA: ConversionCode = ConversionCode(5);
    pub const RGBA2BGRA: ConversionCode = Self::BGRA2RGBA;
    pub const BGR2GRAY: ConversionCode = ConversionCode(6);
    pub const RGB2GRAY: ConversionCode = ConversionCode(7);
    pub const GRAY2BGR: ConversionCode = ConversionCode(8);
    pub const GRAY2RGB: ConversionCode = Self::GRAY2BGR;
    pub const GRAY2BGRA: ConversionCode = ConversionCode(9);
    pub const GRAY2RGBA: ConversionCode = Self::GRAY2BGRA;
    pub const BGRA2GRAY: ConversionCode = ConversionCode(10);
    pub const RGBA2GRAY: ConversionCode = ConversionCode(11);

    /// Wrap a raw code received from the backend.
    pub const fn from_raw(raw: i32) -> Self {
        ConversionCode(raw)
    }

    /// The raw integer the backend expects.
    pub const fn raw(self) -> i32 {
        self.0
    }
}

/// What a caller has to do to move pixels from one format to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConversionPlan {
    /// Source and destination match; nothing to run.
    Identity,
    /// Run the backend kernel selected by the code.
    Convert(ConversionCode),
}
