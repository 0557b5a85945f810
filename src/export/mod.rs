//! Exporters: serialize the active buffer's text into external file
//! formats. Formatting tags are visual-only and intentionally dropped on
//! export; all three writers overwrite the target path without asking.

pub mod docx;
pub mod pdf;
pub mod txt;

pub use docx::write_docx;
pub use pdf::write_pdf;
pub use txt::write_txt;
