/// This module adapts raw key-value records into tabular views.
pub mod mapper;

/// This module provides the CSV converters and the field escaper.
pub mod csv;
