//! Page handle and rendering entry point.

use crate::bitmap::PdfBitmap;
use crate::error::Result;
use crate::render::{PdfRect, PdfRotation, RenderFlags};
use fpdfview_sys::FPDF_PAGE;
use std::marker::PhantomData;

/// One page of a loaded document.
///
/// Borrows its parent [`PdfDocument`](crate::PdfDocument), so the page
/// handle cannot outlive the document handle. Closed on drop.
pub struct PdfPage<'doc> {
    handle: FPDF_PAGE,
    index: usize,
    _doc: PhantomData<&'doc ()>,
}

impl PdfPage<'_> {
    pub(crate) fn new(handle: FPDF_PAGE, index: usize) -> Self {
        Self {
            handle,
            index,
            _doc: PhantomData,
        }
    }

    /// Zero-based index this page was loaded at.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Page width in page-space units (1/72 inch).
    pub fn width(&self) -> f32 {
        unsafe { fpdfview_sys::FPDF_GetPageWidthF(self.handle) }
    }

    /// Page height in page-space units (1/72 inch).
    pub fn height(&self) -> f32 {
        unsafe { fpdfview_sys::FPDF_GetPageHeightF(self.handle) }
    }

    /// Width and height in one call.
    pub fn size(&self) -> (f32, f32) {
        (self.width(), self.height())
    }

    /// Rasterize this page into `dest` within the bitmap.
    ///
    /// The page content is scaled to fill `dest`; the engine clips whatever
    /// falls outside the bitmap. A `dest` covering no pixels is a no-op.
    /// Rendering is synchronous and may take arbitrary time for complex
    /// pages.
    pub fn render_into(
        &self,
        bitmap: &mut PdfBitmap<'_>,
        dest: PdfRect,
        rotation: PdfRotation,
        flags: RenderFlags,
    ) -> Result<()> {
        if dest.is_empty() {
            return Ok(());
        }
        unsafe {
            fpdfview_sys::FPDF_RenderPageBitmap(
                bitmap.handle(),
                self.handle,
                dest.left,
                dest.top,
                dest.width,
                dest.height,
                rotation.to_raw(),
                flags.bits(),
            );
        }
        Ok(())
    }
}

impl Drop for PdfPage<'_> {
    fn drop(&mut self) {
        unsafe { fpdfview_sys::FPDF_ClosePage(self.handle) };
    }
}

impl std::fmt::Debug for PdfPage<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfPage").field("index", &self.index).finish()
    }
}
