//! Document handle and page enumeration.

use crate::error::{PdfError, Result};
use crate::page::PdfPage;
use fpdfview_sys::FPDF_DOCUMENT;
use std::os::raw::c_int;

/// Bytes backing a loaded document.
///
/// `FPDF_LoadMemDocument64` reads the caller's buffer in place for the
/// document's whole lifetime, so the document keeps either a borrow on the
/// caller's slice or ownership of the vector.
pub(crate) enum Backing<'a> {
    Borrowed(&'a [u8]),
    Owned(Vec<u8>),
}

impl Backing<'_> {
    pub(crate) fn as_slice(&self) -> &[u8] {
        match self {
            Backing::Borrowed(data) => data,
            Backing::Owned(data) => data,
        }
    }
}

/// A loaded PDF document.
///
/// Closed exactly once on drop. Pages loaded from it borrow the document,
/// so the compiler rejects closing the document while any page is alive.
pub struct PdfDocument<'a> {
    handle: FPDF_DOCUMENT,
    _backing: Backing<'a>,
}

impl<'a> PdfDocument<'a> {
    pub(crate) fn new(handle: FPDF_DOCUMENT, backing: Backing<'a>) -> Self {
        Self {
            handle,
            _backing: backing,
        }
    }

    /// Number of pages. The engine's non-positive sentinel clamps to 0.
    pub fn page_count(&self) -> usize {
        let raw = unsafe { fpdfview_sys::FPDF_GetPageCount(self.handle) };
        raw.max(0) as usize
    }

    /// Load the page at a zero-based index.
    pub fn page(&self, index: usize) -> Result<PdfPage<'_>> {
        let count = self.page_count();
        if index >= count {
            return Err(PdfError::PageIndexOutOfBounds { index, count });
        }
        let handle = unsafe { fpdfview_sys::FPDF_LoadPage(self.handle, index as c_int) };
        if handle.is_null() {
            return Err(PdfError::LoadPage { index });
        }
        Ok(PdfPage::new(handle, index))
    }

    /// Iterate over all pages in index order.
    pub fn pages(&self) -> PdfPages<'_, 'a> {
        PdfPages {
            document: self,
            next: 0,
            count: self.page_count(),
        }
    }
}

impl Drop for PdfDocument<'_> {
    fn drop(&mut self) {
        unsafe { fpdfview_sys::FPDF_CloseDocument(self.handle) };
        log::debug!("closed document");
    }
}

impl std::fmt::Debug for PdfDocument<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfDocument")
            .field("page_count", &self.page_count())
            .finish()
    }
}

/// Iterator over the pages of a document.
pub struct PdfPages<'doc, 'a> {
    document: &'doc PdfDocument<'a>,
    next: usize,
    count: usize,
}

impl<'doc> Iterator for PdfPages<'doc, '_> {
    type Item = Result<PdfPage<'doc>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let page = self.document.page(self.next);
        self.next += 1;
        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PdfPages<'_, '_> {}
