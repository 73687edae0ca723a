//! Raw FFI bindings to the `fpdfview` C ABI of a PDFium-style rendering
//! engine.
//!
//! # Setup
//!
//! Set the `PDFIUM_LIB_DIR` environment variable to the path containing the
//! native engine library for your target, e.g.:
//!
//! ```sh
//! export PDFIUM_LIB_DIR=/path/to/pdf-engine/lib
//! cargo build
//! ```
//!
//! Alternatively set `PDFIUM_ROOT` to the bundle root; the build script
//! links `$PDFIUM_ROOT/lib`. With neither variable set the crate compiles
//! against stub entry points: every handle-producing call returns null and
//! [`FPDF_GetLastError`] reports [`FPDF_ERR_UNKNOWN`]. Check
//! [`ENGINE_LINKED`] to find out which flavor was built.
//!
//! # Safety
//!
//! All functions in this crate are `unsafe` — they call directly into C
//! code with no Rust-side validation. The engine promises no thread safety
//! and no reentrancy; callers serialize access themselves.

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]

use std::os::raw::{c_char, c_float, c_int, c_uint, c_ulong, c_void};

/// NUL-terminated byte string (document password).
pub type FPDF_BYTESTRING = *const c_char;
/// Opaque handle to a loaded document.
pub type FPDF_DOCUMENT = *mut c_void;
/// Opaque handle to a loaded page.
pub type FPDF_PAGE = *mut c_void;
/// Opaque handle to a bitmap wrapping a caller-owned pixel buffer.
pub type FPDF_BITMAP = *mut c_void;

// Pixel formats accepted by `FPDFBitmap_CreateEx`.
pub const FPDFBitmap_Unknown: c_int = 0;
/// 1 byte per pixel, grayscale.
pub const FPDFBitmap_Gray: c_int = 1;
/// 3 bytes per pixel, blue-green-red.
pub const FPDFBitmap_BGR: c_int = 2;
/// 4 bytes per pixel, blue-green-red with an unused fourth byte.
pub const FPDFBitmap_BGRx: c_int = 3;
/// 4 bytes per pixel, blue-green-red-alpha.
pub const FPDFBitmap_BGRA: c_int = 4;

// Flags for `FPDF_RenderPageBitmap`.
/// Render annotations in addition to page content.
pub const FPDF_ANNOT: c_int = 0x01;

// Error codes reported by `FPDF_GetLastError`.
pub const FPDF_ERR_SUCCESS: c_ulong = 0;
pub const FPDF_ERR_UNKNOWN: c_ulong = 1;
/// File not found or could not be opened.
pub const FPDF_ERR_FILE: c_ulong = 2;
/// Data is not a valid PDF, or is corrupted.
pub const FPDF_ERR_FORMAT: c_ulong = 3;
/// Password required or incorrect.
pub const FPDF_ERR_PASSWORD: c_ulong = 4;
/// Unsupported security scheme.
pub const FPDF_ERR_SECURITY: c_ulong = 5;
/// Page not found or content error.
pub const FPDF_ERR_PAGE: c_ulong = 6;

/// True when the build linked the native engine, false when the stub entry
/// points below are in play.
#[cfg(pdfium_linked)]
pub const ENGINE_LINKED: bool = true;
#[cfg(not(pdfium_linked))]
pub const ENGINE_LINKED: bool = false;

#[cfg(pdfium_linked)]
extern "C" {
    /// Initialize the engine.  Must be called once before any other
    /// function; calling it again before [`FPDF_DestroyLibrary`] is
    /// undefined.
    pub fn FPDF_InitLibrary();

    /// Tear down the engine.  Call once, after every handle has been
    /// released.
    pub fn FPDF_DestroyLibrary();

    /// Load a document from a byte buffer the caller keeps alive for the
    /// document's whole lifetime.  The engine reads the buffer in place.
    ///
    /// Returns null on failure; query [`FPDF_GetLastError`] for the cause.
    pub fn FPDF_LoadMemDocument64(
        data_buf: *const c_void,
        size: usize,
        password: FPDF_BYTESTRING,
    ) -> FPDF_DOCUMENT;

    /// Close a document and free engine-side resources.  All pages loaded
    /// from it must already be closed.
    pub fn FPDF_CloseDocument(document: FPDF_DOCUMENT);

    /// Number of pages in the document, or a non-positive sentinel on
    /// invalid input.
    pub fn FPDF_GetPageCount(document: FPDF_DOCUMENT) -> c_int;

    /// Load a page by zero-based index.  Returns null if the index is out
    /// of range.
    pub fn FPDF_LoadPage(document: FPDF_DOCUMENT, page_index: c_int) -> FPDF_PAGE;

    /// Close a page and free page-level resources only.
    pub fn FPDF_ClosePage(page: FPDF_PAGE);

    /// Page width in page-space units (1/72 inch).
    pub fn FPDF_GetPageWidthF(page: FPDF_PAGE) -> c_float;

    /// Page height in page-space units (1/72 inch).
    pub fn FPDF_GetPageHeightF(page: FPDF_PAGE) -> c_float;

    /// Last error code set by a failed load, one of the `FPDF_ERR_*`
    /// constants.
    pub fn FPDF_GetLastError() -> c_ulong;

    /// Wrap a caller-owned pixel buffer as a bitmap.  `first_scan` must
    /// point to at least `stride * height` bytes and stay valid until
    /// [`FPDFBitmap_Destroy`].  Returns null on failure.
    pub fn FPDFBitmap_CreateEx(
        width: c_int,
        height: c_int,
        format: c_int,
        first_scan: *mut c_void,
        stride: c_int,
    ) -> FPDF_BITMAP;

    /// Destroy the bitmap handle.  Never frees the caller's pixel memory.
    pub fn FPDFBitmap_Destroy(bitmap: FPDF_BITMAP);

    /// Pointer to the pixel buffer the bitmap was created over.
    pub fn FPDFBitmap_GetBuffer(bitmap: FPDF_BITMAP) -> *mut c_void;

    /// Row stride in bytes.
    pub fn FPDFBitmap_GetStride(bitmap: FPDF_BITMAP) -> c_int;

    /// Fill a sub-rectangle of the buffer with a solid ARGB color.
    pub fn FPDFBitmap_FillRect(
        bitmap: FPDF_BITMAP,
        left: c_int,
        top: c_int,
        width: c_int,
        height: c_int,
        color: c_uint,
    );

    /// Rasterize a page into a sub-rectangle of the bitmap.  `rotate` is a
    /// quarter-turn step (0..=3 clockwise), `flags` a bitmask of
    /// [`FPDF_ANNOT`] and friends.
    pub fn FPDF_RenderPageBitmap(
        bitmap: FPDF_BITMAP,
        page: FPDF_PAGE,
        start_x: c_int,
        start_y: c_int,
        size_x: c_int,
        size_y: c_int,
        rotate: c_int,
        flags: c_int,
    );
}

// Stub entry points for builds without the native engine.  Same names and
// signatures as the extern block; every fallible call fails the way the
// ABI fails (null handle, FPDF_ERR_UNKNOWN), every void call is a no-op.
#[cfg(not(pdfium_linked))]
mod unlinked {
    use super::*;

    pub unsafe fn FPDF_InitLibrary() {}

    pub unsafe fn FPDF_DestroyLibrary() {}

    pub unsafe fn FPDF_LoadMemDocument64(
        _data_buf: *const c_void,
        _size: usize,
        _password: FPDF_BYTESTRING,
    ) -> FPDF_DOCUMENT {
        std::ptr::null_mut()
    }

    pub unsafe fn FPDF_CloseDocument(_document: FPDF_DOCUMENT) {}

    pub unsafe fn FPDF_GetPageCount(_document: FPDF_DOCUMENT) -> c_int {
        0
    }

    pub unsafe fn FPDF_LoadPage(_document: FPDF_DOCUMENT, _page_index: c_int) -> FPDF_PAGE {
        std::ptr::null_mut()
    }

    pub unsafe fn FPDF_ClosePage(_page: FPDF_PAGE) {}

    pub unsafe fn FPDF_GetPageWidthF(_page: FPDF_PAGE) -> c_float {
        0.0
    }

    pub unsafe fn FPDF_GetPageHeightF(_page: FPDF_PAGE) -> c_float {
        0.0
    }

    pub unsafe fn FPDF_GetLastError() -> c_ulong {
        FPDF_ERR_UNKNOWN
    }

    pub unsafe fn FPDFBitmap_CreateEx(
        _width: c_int,
        _height: c_int,
        _format: c_int,
        _first_scan: *mut c_void,
        _stride: c_int,
    ) -> FPDF_BITMAP {
        std::ptr::null_mut()
    }

    pub unsafe fn FPDFBitmap_Destroy(_bitmap: FPDF_BITMAP) {}

    pub unsafe fn FPDFBitmap_GetBuffer(_bitmap: FPDF_BITMAP) -> *mut c_void {
        std::ptr::null_mut()
    }

    pub unsafe fn FPDFBitmap_GetStride(_bitmap: FPDF_BITMAP) -> c_int {
        0
    }

    pub unsafe fn FPDFBitmap_FillRect(
        _bitmap: FPDF_BITMAP,
        _left: c_int,
        _top: c_int,
        _width: c_int,
        _height: c_int,
        _color: c_uint,
    ) {
    }

    pub unsafe fn FPDF_RenderPageBitmap(
        _bitmap: FPDF_BITMAP,
        _page: FPDF_PAGE,
        _start_x: c_int,
        _start_y: c_int,
        _size_x: c_int,
        _size_y: c_int,
        _rotate: c_int,
        _flags: c_int,
    ) {
    }
}

#[cfg(not(pdfium_linked))]
pub use unlinked::*;
