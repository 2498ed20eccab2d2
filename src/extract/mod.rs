//! Heuristic stages that turn a raw exam sheet into chapter buckets.
//!
//! Data flows one way: [`class_band`] and [`header`] read the banner rows,
//! [`segment`] splits each column's chapter list by class, and [`aggregate`]
//! merges the columns into the exam and workbook documents.

pub mod aggregate;
pub mod alias;
pub mod class_band;
pub mod header;
pub mod segment;

pub use aggregate::{aggregate, aggregate_workbook, extract_column};
pub use alias::ExamAliases;
pub use class_band::locate_class_bands;
pub use header::classify_subject;
pub use segment::{Segmenter, is_noise, segment};
