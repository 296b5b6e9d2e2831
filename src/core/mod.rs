/// Conversion contracts: tabular view to sink, raw records to sink.
pub mod converter;

/// Raw input records and the maps implementing them.
pub mod record;

/// Rows, tabular views and the owned view built by the adapter.
pub mod tabular;

/// Structural checks shared by the adapter and the converters.
pub mod validation;
