//! Library entry point and document loading.

use crate::bitmap::{PdfBitmap, PdfBitmapFormat};
use crate::document::{Backing, PdfDocument};
use crate::error::{EngineError, PdfError, Result};
use std::ffi::CString;
use std::marker::PhantomData;
use std::os::raw::c_void;
use std::ptr;
use std::sync::Once;

/// Engine initialization runs exactly once per process; re-entrant init is
/// undefined in the C ABI, so every `Pdfium` handle funnels through this.
static INIT: Once = Once::new();

/// Entry point for all engine operations.
///
/// Construct one with [`Pdfium::new`] and load documents from it. The
/// engine promises no thread safety, so the handle is neither `Send` nor
/// `Sync`; keep all PDF work on one thread.
///
/// # Example
///
/// ```no_run
/// use fpdfview::Pdfium;
///
/// let pdfium = Pdfium::new()?;
/// let bytes = std::fs::read("document.pdf").unwrap();
/// let doc = pdfium.load_document(&bytes, None)?;
/// println!("{} pages", doc.page_count());
/// # Ok::<(), fpdfview::PdfError>(())
/// ```
pub struct Pdfium {
    _not_thread_safe: PhantomData<*mut ()>,
}

impl Pdfium {
    /// Initialize the engine (once per process) and return a handle.
    ///
    /// Fails with [`PdfError::EngineUnavailable`] when the crate was built
    /// without the native library.
    pub fn new() -> Result<Self> {
        if !fpdfview_sys::ENGINE_LINKED {
            return Err(PdfError::EngineUnavailable);
        }
        INIT.call_once(|| {
            unsafe { fpdfview_sys::FPDF_InitLibrary() };
            log::debug!("engine initialized");
        });
        Ok(Self {
            _not_thread_safe: PhantomData,
        })
    }

    /// Whether this build linked the native engine.
    pub fn is_available() -> bool {
        fpdfview_sys::ENGINE_LINKED
    }

    /// The engine's last-error code, set by a failed load.
    pub fn last_error(&self) -> EngineError {
        EngineError::from_raw(unsafe { fpdfview_sys::FPDF_GetLastError() })
    }

    /// Load a document from bytes the caller keeps alive.
    ///
    /// The engine reads `data` in place, so the returned document borrows
    /// it for its whole lifetime. Use [`Pdfium::load_document_owned`] to
    /// hand the bytes over instead.
    pub fn load_document<'a>(
        &self,
        data: &'a [u8],
        password: Option<&str>,
    ) -> Result<PdfDocument<'a>> {
        self.open(Backing::Borrowed(data), password)
    }

    /// Load a document that takes ownership of its backing bytes.
    pub fn load_document_owned(
        &self,
        data: Vec<u8>,
        password: Option<&str>,
    ) -> Result<PdfDocument<'static>> {
        self.open(Backing::Owned(data), password)
    }

    fn open<'a>(&self, backing: Backing<'a>, password: Option<&str>) -> Result<PdfDocument<'a>> {
        let c_password = match password {
            Some(p) => Some(CString::new(p).map_err(|_| PdfError::InvalidPasswordEncoding)?),
            None => None,
        };
        let password_ptr = c_password
            .as_ref()
            .map(|p| p.as_ptr())
            .unwrap_or(ptr::null());

        // The Vec's heap allocation does not move when `backing` does, so
        // the pointer handed to the engine stays valid after the move into
        // PdfDocument below.
        let bytes = backing.as_slice();
        let handle = unsafe {
            fpdfview_sys::FPDF_LoadMemDocument64(
                bytes.as_ptr() as *const c_void,
                bytes.len(),
                password_ptr,
            )
        };
        if handle.is_null() {
            let cause = self.last_error();
            log::warn!("document load failed: {cause}");
            return Err(match cause {
                EngineError::Password => PdfError::InvalidPassword,
                other => PdfError::LoadDocument(other),
            });
        }
        log::debug!("loaded document ({} bytes)", bytes.len());
        Ok(PdfDocument::new(handle, backing))
    }

    /// Wrap a caller-owned pixel buffer as a render target.
    ///
    /// `buf` must hold at least `stride * height` bytes and `stride` at
    /// least `width * format.bytes_per_pixel()`; both are checked before
    /// the engine is touched. The buffer stays borrowed until the bitmap
    /// is dropped, and its contents survive the drop.
    pub fn bitmap_from_buffer<'buf>(
        &self,
        width: u32,
        height: u32,
        format: PdfBitmapFormat,
        buf: &'buf mut [u8],
        stride: usize,
    ) -> Result<PdfBitmap<'buf>> {
        PdfBitmap::from_external(width, height, format, buf, stride)
    }

    /// Tear down the engine.
    ///
    /// # Safety
    ///
    /// Every document, page, and bitmap must already be dropped, no other
    /// `Pdfium` handle may be used afterward, and the engine cannot be
    /// re-initialized in this process. Most callers never need this; the
    /// engine is reclaimed at process exit.
    pub unsafe fn destroy_library() {
        fpdfview_sys::FPDF_DestroyLibrary();
        log::debug!("engine destroyed");
    }
}

impl std::fmt::Debug for Pdfium {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pdfium")
            .field("available", &Pdfium::is_available())
            .finish()
    }
}
