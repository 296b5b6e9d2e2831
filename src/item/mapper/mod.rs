/// Adaptation of raw key-value records into tabular views.
///
/// The adapter validates a batch of [`RawRecord`](crate::core::record::RawRecord)s
/// (non-empty, no empty or absent record, identical key sets) and exposes it
/// as a [`TabularData`](crate::core::tabular::TabularData) whose headers are
/// the first record's keys and whose rows borrow the records lazily.
pub mod record_mapper;

#[doc(inline)]
pub use record_mapper::{MapRow, MapRows, RecordMapper, RecordView, adapt, adapt_one};
