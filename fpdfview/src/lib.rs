//! # fpdfview
//!
//! Safe, RAII-style Rust API over the `fpdfview` C ABI of a PDFium-style
//! rendering engine.
//!
//! The raw boundary lives in the companion `fpdfview-sys` crate; this crate
//! wraps every opaque handle in an owner type whose `Drop` makes the
//! matching close/destroy call, so each successful load or create is paired
//! with exactly one release on every exit path:
//!
//! - [`Pdfium`] — process-wide engine init (guarded, once) and loading
//! - [`PdfDocument`] — closes the document; pages borrow it, so they
//!   provably close first
//! - [`PdfPage`] — closes the page; exposes geometry and rendering
//! - [`PdfBitmap`] — destroys the handle over a caller-owned pixel buffer
//!   without ever freeing the buffer itself
//!
//! ## Quick start
//!
//! ```no_run
//! use fpdfview::{PdfBitmapFormat, PdfColor, PdfRect, PdfRotation, Pdfium, RenderFlags};
//!
//! let pdfium = Pdfium::new()?;
//! let bytes = std::fs::read("document.pdf").unwrap();
//! let doc = pdfium.load_document(&bytes, None)?;
//!
//! let page = doc.page(0)?;
//! let (w, h) = page.size();
//! let (px_w, px_h) = (w.ceil() as u32, h.ceil() as u32);
//!
//! let stride = px_w as usize * 4;
//! let mut buf = vec![0u8; stride * px_h as usize];
//! let mut bitmap =
//!     pdfium.bitmap_from_buffer(px_w, px_h, PdfBitmapFormat::Bgra, &mut buf, stride)?;
//!
//! bitmap.fill_rect(PdfRect::new(0, 0, px_w as i32, px_h as i32), PdfColor::WHITE);
//! page.render_into(
//!     &mut bitmap,
//!     PdfRect::new(0, 0, px_w as i32, px_h as i32),
//!     PdfRotation::None,
//!     RenderFlags::ANNOTATIONS,
//! )?;
//! # Ok::<(), fpdfview::PdfError>(())
//! ```
//!
//! ## Threading
//!
//! The engine promises no thread safety and no reentrancy, so every handle
//! type here is `!Send + !Sync`. Keep all PDF work on one thread.

mod bitmap;
mod document;
mod error;
mod page;
mod pdfium;
mod render;

pub use bitmap::{PdfBitmap, PdfBitmapFormat};
pub use document::{PdfDocument, PdfPages};
pub use error::{EngineError, PdfError, Result};
pub use page::PdfPage;
pub use pdfium::Pdfium;
pub use render::{PdfColor, PdfRect, PdfRotation, RenderFlags};
