//! CSV output for tabular data.
//!
//! # Module Architecture
//!
//! The CSV module consists of three components:
//!
//! 1. **escape**: the field escaper applied to every header and value. Each
//!    whitespace character becomes a space; a field holding a comma, a double
//!    quote or a single quote is wrapped in double quotes, with inner double
//!    quotes doubled.
//!
//! 2. **CsvConverter**: writes any [`TabularView`](crate::core::tabular::TabularView)
//!    as one header line plus one line per row, each terminated by `\n`.
//!
//! 3. **StandardCsvConverter**: adapts a batch of raw key-value records and
//!    hands the result to a [`Converter`](crate::core::converter::Converter),
//!    `CsvConverter` by default.
//!
//! # Output format
//!
//! - `,` between fields, `\n` after every line, no trailing blank line
//! - no byte order mark
//! - a single quote triggers quoting on purpose, which strict RFC 4180 does not require
//!
//! # Errors
//!
//! Malformed input is rejected before the first byte is written. A failing
//! sink is reported as [`ConversionError::SinkWrite`](crate::error::ConversionError::SinkWrite),
//! possibly after some lines were already written; write to a buffer first if
//! the output must be all or nothing.
//!
//! # Examples
//!
//! ```
//! use tabular_csv::item::csv::serialize_records;
//!
//! let records = vec![
//!     vec![("city", "Boston"), ("country", "United States")],
//!     vec![("city", "Concord"), ("country", "United States")],
//! ];
//!
//! let mut buffer = Vec::new();
//! serialize_records(&records, &mut buffer).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(buffer).unwrap(),
//!     "city,country\nBoston,United States\nConcord,United States\n"
//! );
//! ```

/// A module providing the field escaper.
pub mod escape;

/// A module providing the CSV converter for tabular views.
pub mod csv_converter;

/// A module providing the CSV converter for raw record batches.
pub mod standard_converter;

#[doc(inline)]
pub use csv_converter::{CsvConverter, serialize};

#[doc(inline)]
pub use standard_converter::{StandardCsvConverter, serialize_records};
