//! Which canvas regions are visible.
//!
//! Blitters expect a raw bitmask: bits 0–3 for the empty regions (in
//! [`EmptyRegion`] index order), bit 4 for the inner region. Inside the
//! crate the mask is a [`Visibility`] set of [`VisibleRegion`] values; the
//! raw byte only appears through [`Visibility::bits()`].

use core::fmt;

/// Index of an empty border region.
///
/// The discriminant is the index into
/// [`ClippedCanvas::empty_regions`](crate::ClippedCanvas::empty_regions)
/// and the bit position in the visibility mask.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum EmptyRegion {
    Top = 0,
    Bottom = 1,
    Left = 2,
    Right = 3,
}

impl EmptyRegion {
    /// All empty regions in index order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// Array index of this region.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A region that can be flagged visible.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VisibleRegion {
    EmptyTop,
    EmptyBottom,
    EmptyLeft,
    EmptyRight,
    Inner,
}

impl VisibleRegion {
    /// All flaggable regions, in bit order.
    pub const ALL: [Self; 5] = [
        Self::EmptyTop,
        Self::EmptyBottom,
        Self::EmptyLeft,
        Self::EmptyRight,
        Self::Inner,
    ];

    /// Mask bit for this region.
    pub const fn bit(self) -> u8 {
        match self {
            Self::EmptyTop => 1 << EmptyRegion::Top as u8,
            Self::EmptyBottom => 1 << EmptyRegion::Bottom as u8,
            Self::EmptyLeft => 1 << EmptyRegion::Left as u8,
            Self::EmptyRight => 1 << EmptyRegion::Right as u8,
            Self::Inner => 1 << 4,
        }
    }
}

impl From<EmptyRegion> for VisibleRegion {
    fn from(region: EmptyRegion) -> Self {
        match region {
            EmptyRegion::Top => Self::EmptyTop,
            EmptyRegion::Bottom => Self::EmptyBottom,
            EmptyRegion::Left => Self::EmptyLeft,
            EmptyRegion::Right => Self::EmptyRight,
        }
    }
}

/// Set of visible regions.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Visibility {
    bits: u8,
}

impl Visibility {
    /// Nothing visible.
    pub const EMPTY: Self = Self { bits: 0 };

    const MASK: u8 = 0b1_1111;

    /// Set from a raw mask. Bits above bit 4 are dropped.
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            bits: bits & Self::MASK,
        }
    }

    /// Raw mask for blitters.
    pub const fn bits(self) -> u8 {
        self.bits
    }

    /// Whether `region` is in the set.
    pub const fn contains(self, region: VisibleRegion) -> bool {
        self.bits & region.bit() != 0
    }

    /// Whether no region is visible.
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Add `region`.
    pub fn insert(&mut self, region: VisibleRegion) {
        self.bits |= region.bit();
    }

    /// Remove `region`.
    pub fn remove(&mut self, region: VisibleRegion) {
        self.bits &= !region.bit();
    }

    /// Insert or remove `region` depending on `visible`.
    pub fn set(&mut self, region: VisibleRegion, visible: bool) {
        if visible {
            self.insert(region);
        } else {
            self.remove(region);
        }
    }

    /// Visible regions in bit order.
    pub fn iter(self) -> impl Iterator<Item = VisibleRegion> {
        VisibleRegion::ALL
            .into_iter()
            .filter(move |&r| self.contains(r))
    }
}

impl fmt::Debug for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<VisibleRegion> for Visibility {
    fn from_iter<I: IntoIterator<Item = VisibleRegion>>(iter: I) -> Self {
        let mut v = Self::EMPTY;
        for region in iter {
            v.insert(region);
        }
        v
    }
}
