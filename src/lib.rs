//! Format-dispatch document viewer.
//!
//! An identifier such as `report.pdf` is resolved to a [`FormatCategory`],
//! fetched in the representation that category needs, and handed to the one
//! renderer registered for it. The terminal UI in [`app`] and [`ui`] shows the
//! result; [`session::DocumentSession`] can also be driven headlessly.
//!
//! [`FormatCategory`]: document::FormatCategory

pub mod app;
pub mod config;
pub mod document;
pub mod error;
pub mod event;
pub mod loader;
pub mod session;
pub mod ui;
pub mod util;

