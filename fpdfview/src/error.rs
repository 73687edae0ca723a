//! Error types for the safe wrapper.
//!
//! The C ABI has two failure channels: sentinel return values (null handle,
//! non-positive count) and a process-wide last-error code. Everything above
//! the FFI boundary folds both into [`PdfError`].

use std::os::raw::c_ulong;
use thiserror::Error;

/// Engine-reported error code, as read back from `FPDF_GetLastError`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("no error")]
    Success,
    #[error("unknown engine error")]
    Unknown,
    #[error("file access error")]
    File,
    #[error("data is not a valid PDF or is corrupted")]
    Format,
    #[error("password required or incorrect")]
    Password,
    #[error("unsupported security scheme")]
    Security,
    #[error("page not found or content error")]
    Page,
}

impl EngineError {
    /// Map a raw `FPDF_ERR_*` code. Codes outside the documented set fold
    /// into [`EngineError::Unknown`].
    pub fn from_raw(code: c_ulong) -> Self {
        match code {
            fpdfview_sys::FPDF_ERR_SUCCESS => EngineError::Success,
            fpdfview_sys::FPDF_ERR_FILE => EngineError::File,
            fpdfview_sys::FPDF_ERR_FORMAT => EngineError::Format,
            fpdfview_sys::FPDF_ERR_PASSWORD => EngineError::Password,
            fpdfview_sys::FPDF_ERR_SECURITY => EngineError::Security,
            fpdfview_sys::FPDF_ERR_PAGE => EngineError::Page,
            _ => EngineError::Unknown,
        }
    }

    /// The raw `FPDF_ERR_*` code for this error.
    pub fn to_raw(self) -> c_ulong {
        match self {
            EngineError::Success => fpdfview_sys::FPDF_ERR_SUCCESS,
            EngineError::Unknown => fpdfview_sys::FPDF_ERR_UNKNOWN,
            EngineError::File => fpdfview_sys::FPDF_ERR_FILE,
            EngineError::Format => fpdfview_sys::FPDF_ERR_FORMAT,
            EngineError::Password => fpdfview_sys::FPDF_ERR_PASSWORD,
            EngineError::Security => fpdfview_sys::FPDF_ERR_SECURITY,
            EngineError::Page => fpdfview_sys::FPDF_ERR_PAGE,
        }
    }
}

/// Primary error type for all wrapper operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PdfError {
    #[error("native engine is not linked into this build")]
    EngineUnavailable,

    #[error("failed to load document: {0}")]
    LoadDocument(EngineError),

    #[error("document password required or incorrect")]
    InvalidPassword,

    #[error("password contains an interior NUL byte")]
    InvalidPasswordEncoding,

    #[error("page index {index} out of bounds (document has {count} pages)")]
    PageIndexOutOfBounds { index: usize, count: usize },

    #[error("engine failed to load page {index}")]
    LoadPage { index: usize },

    #[error("bitmap dimensions must be positive, got {width}x{height}")]
    InvalidBitmapSize { width: u32, height: u32 },

    #[error("cannot create a bitmap with an unknown pixel format")]
    UnknownPixelFormat,

    #[error("stride {stride} is smaller than the minimum row size {minimum}")]
    InvalidStride { stride: usize, minimum: usize },

    #[error("pixel buffer too small: need {required} bytes, got {actual}")]
    BufferTooSmall { required: usize, actual: usize },

    #[error("engine failed to create bitmap")]
    CreateBitmap,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PdfError>;
