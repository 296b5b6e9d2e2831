use std::io::Write;

use crate::error::ConversionResult;

use super::{record::RawRecord, tabular::TabularView};

/// Writes a [`TabularView`] to a byte sink.
pub trait Converter {
    /// Validates `view`, then writes it to `sink` in a single forward pass over its rows.
    ///
    /// # Returns
    /// - `Ok(())` once every line has been written and the sink flushed
    /// - `Err(ConversionError::InvalidCollection)` before any write when the view is malformed
    /// - `Err(ConversionError::SinkWrite)` when the sink fails; earlier lines stay written
    fn convert<V, W>(&self, view: V, sink: &mut W) -> ConversionResult<()>
    where
        V: TabularView,
        W: Write + ?Sized;
}

/// Writes a batch of [`RawRecord`]s to a byte sink.
pub trait StandardConverter {
    fn convert<R, W>(&self, records: &[R], sink: &mut W) -> ConversionResult<()>
    where
        R: RawRecord,
        W: Write + ?Sized;
}
