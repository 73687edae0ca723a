//! Bitmap handle over a caller-owned pixel buffer.

use crate::error::{PdfError, Result};
use crate::render::{PdfColor, PdfRect};
use fpdfview_sys::FPDF_BITMAP;
use std::marker::PhantomData;
use std::os::raw::{c_int, c_void};

/// Pixel encoding of a bitmap buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfBitmapFormat {
    Unknown,
    /// 1 byte per pixel, grayscale.
    Gray,
    /// 3 bytes per pixel, blue-green-red.
    Bgr,
    /// 4 bytes per pixel, blue-green-red plus an unused byte.
    Bgrx,
    /// 4 bytes per pixel, blue-green-red-alpha.
    Bgra,
}

impl PdfBitmapFormat {
    /// Map a raw `FPDFBitmap_*` format code. Unrecognized codes fold into
    /// [`PdfBitmapFormat::Unknown`].
    pub fn from_raw(raw: c_int) -> Self {
        match raw {
            fpdfview_sys::FPDFBitmap_Gray => PdfBitmapFormat::Gray,
            fpdfview_sys::FPDFBitmap_BGR => PdfBitmapFormat::Bgr,
            fpdfview_sys::FPDFBitmap_BGRx => PdfBitmapFormat::Bgrx,
            fpdfview_sys::FPDFBitmap_BGRA => PdfBitmapFormat::Bgra,
            _ => PdfBitmapFormat::Unknown,
        }
    }

    pub const fn to_raw(self) -> c_int {
        match self {
            PdfBitmapFormat::Unknown => fpdfview_sys::FPDFBitmap_Unknown,
            PdfBitmapFormat::Gray => fpdfview_sys::FPDFBitmap_Gray,
            PdfBitmapFormat::Bgr => fpdfview_sys::FPDFBitmap_BGR,
            PdfBitmapFormat::Bgrx => fpdfview_sys::FPDFBitmap_BGRx,
            PdfBitmapFormat::Bgra => fpdfview_sys::FPDFBitmap_BGRA,
        }
    }

    /// Bytes per pixel, 0 for [`PdfBitmapFormat::Unknown`].
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PdfBitmapFormat::Unknown => 0,
            PdfBitmapFormat::Gray => 1,
            PdfBitmapFormat::Bgr => 3,
            PdfBitmapFormat::Bgrx | PdfBitmapFormat::Bgra => 4,
        }
    }
}

/// Validate a buffer layout before it crosses the FFI boundary.
///
/// Returns the required buffer length, `stride * height`.
pub(crate) fn check_layout(
    width: u32,
    height: u32,
    format: PdfBitmapFormat,
    stride: usize,
    buf_len: usize,
) -> Result<usize> {
    if width == 0 || height == 0 || width > c_int::MAX as u32 || height > c_int::MAX as u32 {
        return Err(PdfError::InvalidBitmapSize { width, height });
    }
    if format == PdfBitmapFormat::Unknown {
        return Err(PdfError::UnknownPixelFormat);
    }
    let minimum = width as usize * format.bytes_per_pixel();
    if stride < minimum || stride > c_int::MAX as usize {
        return Err(PdfError::InvalidStride { stride, minimum });
    }
    let required = stride
        .checked_mul(height as usize)
        .ok_or(PdfError::InvalidBitmapSize { width, height })?;
    if buf_len < required {
        return Err(PdfError::BufferTooSmall {
            required,
            actual: buf_len,
        });
    }
    Ok(required)
}

/// A bitmap handle wrapping a pixel buffer the caller owns.
///
/// The borrow on the caller's buffer lasts as long as the handle, so the
/// "buffer must outlive the bitmap" contract of the C ABI holds by
/// construction. Dropping the handle destroys only the engine-side object;
/// the buffer and its contents are untouched.
pub struct PdfBitmap<'buf> {
    handle: FPDF_BITMAP,
    width: u32,
    height: u32,
    format: PdfBitmapFormat,
    first_scan: *mut u8,
    len: usize,
    _buf: PhantomData<&'buf mut [u8]>,
}

impl<'buf> PdfBitmap<'buf> {
    /// Wrap `buf` as an engine bitmap. Called through
    /// [`Pdfium::bitmap_from_buffer`](crate::Pdfium::bitmap_from_buffer) so
    /// the engine is initialized first.
    pub(crate) fn from_external(
        width: u32,
        height: u32,
        format: PdfBitmapFormat,
        buf: &'buf mut [u8],
        stride: usize,
    ) -> Result<Self> {
        let required = check_layout(width, height, format, stride, buf.len())?;
        let first_scan = buf.as_mut_ptr();
        let handle = unsafe {
            fpdfview_sys::FPDFBitmap_CreateEx(
                width as c_int,
                height as c_int,
                format.to_raw(),
                first_scan as *mut c_void,
                stride as c_int,
            )
        };
        if handle.is_null() {
            return Err(PdfError::CreateBitmap);
        }
        Ok(Self {
            handle,
            width,
            height,
            format,
            first_scan,
            len: required,
            _buf: PhantomData,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PdfBitmapFormat {
        self.format
    }

    /// Row stride in bytes, read back from the engine.
    pub fn stride(&self) -> usize {
        let raw = unsafe { fpdfview_sys::FPDFBitmap_GetStride(self.handle) };
        raw.max(0) as usize
    }

    /// The caller's pixel buffer, read back through the engine's accessor.
    pub fn buffer(&self) -> &[u8] {
        let ptr = unsafe { fpdfview_sys::FPDFBitmap_GetBuffer(self.handle) } as *const u8;
        // The engine hands back the pointer the bitmap was created over.
        debug_assert_eq!(ptr, self.first_scan as *const u8);
        unsafe { std::slice::from_raw_parts(ptr, self.len) }
    }

    /// Fill a sub-rectangle with a solid color.
    ///
    /// The rectangle is clipped to the bitmap bounds; a rectangle that
    /// covers no pixels is a no-op.
    pub fn fill_rect(&mut self, rect: PdfRect, color: PdfColor) {
        let Some(clipped) = rect.clipped_to(self.width as i32, self.height as i32) else {
            return;
        };
        unsafe {
            fpdfview_sys::FPDFBitmap_FillRect(
                self.handle,
                clipped.left,
                clipped.top,
                clipped.width,
                clipped.height,
                color.to_argb(),
            );
        }
    }

    pub(crate) fn handle(&self) -> FPDF_BITMAP {
        self.handle
    }
}

impl Drop for PdfBitmap<'_> {
    fn drop(&mut self) {
        // Releases the handle only; the caller's pixel memory stays put.
        unsafe { fpdfview_sys::FPDFBitmap_Destroy(self.handle) };
    }
}

impl std::fmt::Debug for PdfBitmap<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfBitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stride", &self.stride())
            .field("format", &self.format)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_raw_codes_round_trip() {
        for format in [
            PdfBitmapFormat::Gray,
            PdfBitmapFormat::Bgr,
            PdfBitmapFormat::Bgrx,
            PdfBitmapFormat::Bgra,
        ] {
            assert_eq!(PdfBitmapFormat::from_raw(format.to_raw()), format);
        }
        assert_eq!(PdfBitmapFormat::from_raw(0), PdfBitmapFormat::Unknown);
        assert_eq!(PdfBitmapFormat::from_raw(42), PdfBitmapFormat::Unknown);
    }

    #[test]
    fn bytes_per_pixel_per_format() {
        assert_eq!(PdfBitmapFormat::Gray.bytes_per_pixel(), 1);
        assert_eq!(PdfBitmapFormat::Bgr.bytes_per_pixel(), 3);
        assert_eq!(PdfBitmapFormat::Bgrx.bytes_per_pixel(), 4);
        assert_eq!(PdfBitmapFormat::Bgra.bytes_per_pixel(), 4);
        assert_eq!(PdfBitmapFormat::Unknown.bytes_per_pixel(), 0);
    }

    #[test]
    fn layout_accepts_exact_buffer() {
        let required = check_layout(10, 4, PdfBitmapFormat::Bgra, 40, 160).unwrap();
        assert_eq!(required, 160);
    }

    #[test]
    fn layout_accepts_padded_stride() {
        // 3 bytes/pixel rows often pad to a 4-byte boundary.
        let required = check_layout(10, 4, PdfBitmapFormat::Bgr, 32, 128).unwrap();
        assert_eq!(required, 128);
    }

    #[test]
    fn layout_rejects_zero_dimensions() {
        assert_eq!(
            check_layout(0, 4, PdfBitmapFormat::Bgra, 40, 160),
            Err(PdfError::InvalidBitmapSize {
                width: 0,
                height: 4
            })
        );
        assert_eq!(
            check_layout(10, 0, PdfBitmapFormat::Bgra, 40, 160),
            Err(PdfError::InvalidBitmapSize {
                width: 10,
                height: 0
            })
        );
    }

    #[test]
    fn layout_rejects_unknown_format() {
        assert_eq!(
            check_layout(10, 4, PdfBitmapFormat::Unknown, 40, 160),
            Err(PdfError::UnknownPixelFormat)
        );
    }

    #[test]
    fn layout_rejects_short_stride() {
        assert_eq!(
            check_layout(10, 4, PdfBitmapFormat::Bgra, 39, 160),
            Err(PdfError::InvalidStride {
                stride: 39,
                minimum: 40
            })
        );
    }

    #[test]
    fn layout_rejects_short_buffer() {
        assert_eq!(
            check_layout(10, 4, PdfBitmapFormat::Bgra, 40, 159),
            Err(PdfError::BufferTooSmall {
                required: 160,
                actual: 159
            })
        );
    }
}
