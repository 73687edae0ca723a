//! Geometry, rotation, flag, and color value types used by rendering calls.

use std::ops::{BitOr, BitOrAssign};
use std::os::raw::c_int;

/// Rectangle in bitmap pixel space.
///
/// The engine accepts rectangles that extend past the bitmap; host-side
/// calls clip with [`PdfRect::clipped_to`] before crossing the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PdfRect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl PdfRect {
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// True when the rectangle covers no pixels.
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Intersect with the `bound_width` x `bound_height` rectangle anchored
    /// at the origin. Returns `None` when nothing remains.
    pub fn clipped_to(&self, bound_width: i32, bound_height: i32) -> Option<PdfRect> {
        if self.is_empty() || bound_width <= 0 || bound_height <= 0 {
            return None;
        }
        // Widen to i64 so corner sums cannot overflow.
        let left = (self.left as i64).max(0);
        let top = (self.top as i64).max(0);
        let right = (self.left as i64 + self.width as i64).min(bound_width as i64);
        let bottom = (self.top as i64 + self.height as i64).min(bound_height as i64);
        if right <= left || bottom <= top {
            return None;
        }
        Some(PdfRect {
            left: left as i32,
            top: top as i32,
            width: (right - left) as i32,
            height: (bottom - top) as i32,
        })
    }
}

/// Quarter-turn page rotation applied at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PdfRotation {
    #[default]
    None,
    Degrees90,
    Degrees180,
    Degrees270,
}

impl PdfRotation {
    /// Parse a rotation given in degrees. Only the four quarter turns are
    /// representable.
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees.rem_euclid(360) {
            0 => Some(PdfRotation::None),
            90 => Some(PdfRotation::Degrees90),
            180 => Some(PdfRotation::Degrees180),
            270 => Some(PdfRotation::Degrees270),
            _ => None,
        }
    }

    pub const fn degrees(self) -> i32 {
        match self {
            PdfRotation::None => 0,
            PdfRotation::Degrees90 => 90,
            PdfRotation::Degrees180 => 180,
            PdfRotation::Degrees270 => 270,
        }
    }

    /// The quarter-turn step the engine expects (0..=3, clockwise).
    pub(crate) const fn to_raw(self) -> c_int {
        match self {
            PdfRotation::None => 0,
            PdfRotation::Degrees90 => 1,
            PdfRotation::Degrees180 => 2,
            PdfRotation::Degrees270 => 3,
        }
    }
}

/// Bitmask of render options passed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderFlags(c_int);

impl RenderFlags {
    /// Page content only.
    pub const NONE: RenderFlags = RenderFlags(0);
    /// Also render annotations.
    pub const ANNOTATIONS: RenderFlags = RenderFlags(fpdfview_sys::FPDF_ANNOT);

    /// The raw bitmask.
    pub const fn bits(self) -> c_int {
        self.0
    }

    pub const fn contains(self, other: RenderFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for RenderFlags {
    type Output = RenderFlags;

    fn bitor(self, rhs: RenderFlags) -> RenderFlags {
        RenderFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for RenderFlags {
    fn bitor_assign(&mut self, rhs: RenderFlags) {
        self.0 |= rhs.0;
    }
}

/// Solid fill color. The engine's wire format is packed ARGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PdfColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl PdfColor {
    pub const WHITE: PdfColor = PdfColor::new(0xFF, 0xFF, 0xFF, 0xFF);
    pub const BLACK: PdfColor = PdfColor::new(0x00, 0x00, 0x00, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Packed ARGB, as `FPDFBitmap_FillRect` takes it.
    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Byte layout of one pixel in a BGRA bitmap.
    pub const fn to_bgra(self) -> [u8; 4] {
        [self.b, self.g, self.r, self.a]
    }

    /// Byte layout of one pixel in a BGR bitmap.
    pub const fn to_bgr(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }

    /// Byte value of one pixel in a grayscale bitmap, using the engine's
    /// integer luma weighting (30% red, 59% green, 11% blue).
    pub const fn to_gray(self) -> u8 {
        ((self.r as u32 * 30 + self.g as u32 * 59 + self.b as u32 * 11) / 100) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_keeps_interior_rect() {
        let r = PdfRect::new(2, 3, 10, 10);
        assert_eq!(r.clipped_to(100, 100), Some(r));
    }

    #[test]
    fn clip_trims_overflow_on_right_and_bottom() {
        let r = PdfRect::new(90, 95, 20, 20);
        assert_eq!(r.clipped_to(100, 100), Some(PdfRect::new(90, 95, 10, 5)));
    }

    #[test]
    fn clip_trims_negative_origin() {
        let r = PdfRect::new(-5, -7, 20, 20);
        assert_eq!(r.clipped_to(100, 100), Some(PdfRect::new(0, 0, 15, 13)));
    }

    #[test]
    fn clip_rejects_fully_outside_rects() {
        assert_eq!(PdfRect::new(200, 0, 10, 10).clipped_to(100, 100), None);
        assert_eq!(PdfRect::new(0, -50, 10, 50).clipped_to(100, 100), None);
    }

    #[test]
    fn clip_rejects_empty_rects() {
        assert_eq!(PdfRect::new(0, 0, 0, 10).clipped_to(100, 100), None);
        assert_eq!(PdfRect::new(0, 0, 10, -1).clipped_to(100, 100), None);
    }

    #[test]
    fn clip_survives_corner_overflow() {
        let r = PdfRect::new(i32::MAX - 1, 0, i32::MAX, 10);
        assert_eq!(r.clipped_to(100, 100), None);
    }

    #[test]
    fn rotation_from_degrees_accepts_quarter_turns() {
        assert_eq!(PdfRotation::from_degrees(0), Some(PdfRotation::None));
        assert_eq!(PdfRotation::from_degrees(90), Some(PdfRotation::Degrees90));
        assert_eq!(PdfRotation::from_degrees(180), Some(PdfRotation::Degrees180));
        assert_eq!(PdfRotation::from_degrees(270), Some(PdfRotation::Degrees270));
        assert_eq!(PdfRotation::from_degrees(-90), Some(PdfRotation::Degrees270));
        assert_eq!(PdfRotation::from_degrees(450), Some(PdfRotation::Degrees90));
        assert_eq!(PdfRotation::from_degrees(45), None);
    }

    #[test]
    fn rotation_raw_codes_are_quarter_turn_steps() {
        assert_eq!(PdfRotation::None.to_raw(), 0);
        assert_eq!(PdfRotation::Degrees90.to_raw(), 1);
        assert_eq!(PdfRotation::Degrees180.to_raw(), 2);
        assert_eq!(PdfRotation::Degrees270.to_raw(), 3);
    }

    #[test]
    fn flags_compose_as_bitmask() {
        let flags = RenderFlags::NONE | RenderFlags::ANNOTATIONS;
        assert!(flags.contains(RenderFlags::ANNOTATIONS));
        assert_eq!(flags.bits(), 0x01);

        let mut flags = RenderFlags::NONE;
        assert!(!flags.contains(RenderFlags::ANNOTATIONS));
        flags |= RenderFlags::ANNOTATIONS;
        assert!(flags.contains(RenderFlags::ANNOTATIONS));
    }

    #[test]
    fn color_packs_argb() {
        assert_eq!(PdfColor::WHITE.to_argb(), 0xFFFF_FFFF);
        assert_eq!(PdfColor::BLACK.to_argb(), 0xFF00_0000);
        assert_eq!(PdfColor::new(0x12, 0x34, 0x56, 0x78).to_argb(), 0x7812_3456);
    }

    #[test]
    fn color_pixel_encodings() {
        let c = PdfColor::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.to_bgra(), [0x56, 0x34, 0x12, 0x78]);
        assert_eq!(c.to_bgr(), [0x56, 0x34, 0x12]);
        // (0x12 * 30 + 0x34 * 59 + 0x56 * 11) / 100
        assert_eq!(c.to_gray(), 45);
    }

    #[test]
    fn gray_encoding_preserves_the_extremes() {
        assert_eq!(PdfColor::WHITE.to_gray(), 0xFF);
        assert_eq!(PdfColor::BLACK.to_gray(), 0x00);
    }
}
