//! Morphology kernel shapes.

/// Structuring element shape as chosen by the host.
#[non_exhaustive]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KernelShape {
    Rect,
    Cross,
    Ellipse,
    /// User-supplied mask. The backend has no shape code for it.
    Custom,
}

impl KernelShape {
    pub const ALL: [KernelShape; 4] = [Self::Rect, Self::Cross, Self::Ellipse, Self::Custom];

    /// Look up a shape by its raw discriminant.
    pub const fn from_raw(raw: u8) -> Option<Self> {
        if (raw as usize) < Self::ALL.len() {
            Some(Self::ALL[raw as usize])
        } else {
            None
        }
    }
}

pub(crate) const MORPH_RECT: i32 = 0;
pub(crate) const MORPH_CROSS: i32 = 1;
pub(crate) const MORPH_ELLIPSE: i32 = 2;
