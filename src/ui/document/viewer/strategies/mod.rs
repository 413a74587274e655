pub(crate) mod ooxml;
pub(crate) mod pdf;
mod presentation;
mod spreadsheet;
mod text;
mod wordprocessing;

pub use pdf::{PdfEngine, PdfViewStrategy};
pub use presentation::PresentationViewStrategy;
pub use spreadsheet::SpreadsheetViewStrategy;
pub use text::TextViewStrategy;
pub use wordprocessing::WordViewStrategy;
