use std::slice;

use log::debug;

use crate::{
    core::{
        record::RawRecord,
        tabular::{Row, TabularData, TabularDataBuilder},
        validation::validate_batch,
    },
    error::{ConversionError, ConversionResult},
};

/// A [`Row`] answering lookups straight from a borrowed [`RawRecord`].
#[derive(Debug)]
pub struct MapRow<'a, R: ?Sized> {
    record: &'a R,
}

impl<'a, R: RawRecord + ?Sized> MapRow<'a, R> {
    pub fn new(record: &'a R) -> MapRow<'a, R> {
        MapRow { record }
    }
}

impl<R: RawRecord + ?Sized> Row for MapRow<'_, R> {
    fn get(&self, header: &str) -> Option<&str> {
        self.record.field(header)
    }
}

/// Lazily wraps each record of a batch into a [`MapRow`].
#[derive(Debug)]
pub struct MapRows<'a, R> {
    records: slice::Iter<'a, R>,
}

impl<'a, R: RawRecord> Iterator for MapRows<'a, R> {
    type Item = MapRow<'a, R>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records.next().map(MapRow::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }
}

impl<R: RawRecord> ExactSizeIterator for MapRows<'_, R> {}

/// The view produced by [`RecordMapper::to_view`].
pub type RecordView<'a, R> = TabularData<MapRows<'a, R>>;

/// Turns raw records into rows and tabular views.
///
/// The mapper holds no state; construct it wherever it is needed.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordMapper;

impl RecordMapper {
    /// Wraps a single record into a [`Row`].
    ///
    /// An empty record is accepted and answers `None` for every header.
    ///
    /// # Errors
    /// [`ConversionError::NullArgument`] when the record itself is absent.
    pub fn to_row<'a, R: RawRecord>(&self, record: &'a R) -> ConversionResult<MapRow<'a, R>> {
        if record.is_absent() {
            return Err(ConversionError::NullArgument("record"));
        }
        Ok(MapRow::new(record))
    }

    /// Validates a batch and exposes it as a tabular view.
    ///
    /// Headers are the first record's keys in its iteration order; every
    /// record becomes one row, in batch order.
    ///
    /// # Errors
    /// [`ConversionError::InvalidCollection`] when the batch is empty, holds an
    /// empty or absent record, or when key sets differ between records.
    pub fn to_view<'a, R: RawRecord>(
        &self,
        records: &'a [R],
    ) -> ConversionResult<RecordView<'a, R>> {
        let headers = validate_batch(records)?;

        debug!("Adapted {} records with headers {:?}", records.len(), headers);

        Ok(TabularDataBuilder::new()
            .headers(headers)
            .rows(MapRows {
                records: records.iter(),
            })
            .build())
    }
}

/// Validates a batch of raw records and exposes it as a tabular view.
///
/// # Examples
///
/// ```
/// use tabular_csv::core::tabular::{Row, TabularView};
/// use tabular_csv::item::mapper::adapt;
///
/// let records = vec![
///     vec![("h1", "v1"), ("h2", "v2")],
///     vec![("h1", "v3"), ("h2", "v4")],
/// ];
///
/// let view = adapt(&records).unwrap();
/// assert_eq!(view.headers(), Some(vec![Some("h1"), Some("h2")]));
///
/// let values: Vec<_> = view
///     .into_rows()
///     .unwrap()
///     .map(|row| row.get("h1").map(str::to_owned))
///     .collect();
/// assert_eq!(values, vec![Some("v1".to_owned()), Some("v3".to_owned())]);
/// ```
pub fn adapt<R: RawRecord>(records: &[R]) -> ConversionResult<RecordView<'_, R>> {
    RecordMapper.to_view(records)
}

/// Wraps a single raw record into a row. See [`RecordMapper::to_row`].
pub fn adapt_one<R: RawRecord>(record: &R) -> ConversionResult<MapRow<'_, R>> {
    RecordMapper.to_row(record)
}
