//! Core library for the chapters-tools command line application.
//!
//! The library turns loosely structured exam spreadsheets into a nested
//! chapter taxonomy. Responsibilities are kept narrow: workbook access lives
//! under [`io`], data representations inside [`model`], the heuristic
//! extraction stages in [`extract`], and the file-to-file orchestration in
//! [`pipeline`].

pub mod error;
pub mod extract;
pub mod io;
pub mod model;
pub mod pipeline;

pub use error::{Result, ToolError};
