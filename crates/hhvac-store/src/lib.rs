//! Tabular persistence for accepted vacancies.
//!
//! The sheet is a single CSV file: one header row chosen by [`SheetLayout`]
//! followed by one row per accepted record in encounter order. Every flush
//! rewrites the file from scratch.

pub mod columns;
pub mod error;
pub mod sheet;

pub use error::StoreError;
pub use sheet::{read_sheet, Sheet, SheetBuffer, SheetLayout};
