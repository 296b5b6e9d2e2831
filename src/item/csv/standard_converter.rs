use std::io::Write;

use log::debug;

use crate::{
    core::{
        converter::{Converter, StandardConverter},
        record::RawRecord,
    },
    error::ConversionResult,
    item::mapper::RecordMapper,
};

use super::csv_converter::CsvConverter;

/// Converts a batch of raw records to CSV.
///
/// The batch is adapted with [`RecordMapper`] and handed to the wrapped
/// [`Converter`]. Unlike the adapter, an empty batch is not an error here: it
/// produces no output at all.
///
/// # Examples
///
/// ```
/// use tabular_csv::core::converter::StandardConverter;
/// use tabular_csv::item::csv::StandardCsvConverter;
///
/// let records = vec![
///     vec![("name", "Alice"), ("role", "Engineer")],
///     vec![("name", "Bob"), ("role", "Designer, senior")],
/// ];
///
/// let converter: StandardCsvConverter = StandardCsvConverter::default();
/// let mut sink = Vec::new();
/// converter.convert(&records, &mut sink).unwrap();
///
/// assert_eq!(
///     String::from_utf8(sink).unwrap(),
///     "name,role\nAlice,Engineer\nBob,\"Designer, senior\"\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct StandardCsvConverter<C = CsvConverter> {
    converter: C,
    mapper: RecordMapper,
}

impl<C: Converter> StandardCsvConverter<C> {
    pub fn new(converter: C) -> StandardCsvConverter<C> {
        StandardCsvConverter {
            converter,
            mapper: RecordMapper,
        }
    }
}

impl Default for StandardCsvConverter {
    fn default() -> Self {
        Self::new(CsvConverter)
    }
}

impl<C: Converter> StandardConverter for StandardCsvConverter<C> {
    fn convert<R, W>(&self, records: &[R], sink: &mut W) -> ConversionResult<()>
    where
        R: RawRecord,
        W: Write + ?Sized,
    {
        if records.is_empty() {
            debug!("Empty collection, nothing to convert");
            return Ok(());
        }

        let view = self.mapper.to_view(records)?;
        self.converter.convert(view, sink)
    }
}

/// Adapts `records` and writes them to `sink` as CSV.
///
/// An empty batch writes nothing and succeeds. Every other error of
/// [`adapt`](crate::item::mapper::adapt) and [`serialize`](super::serialize)
/// is returned as is.
pub fn serialize_records<R, W>(records: &[R], sink: &mut W) -> ConversionResult<()>
where
    R: RawRecord,
    W: Write + ?Sized,
{
    StandardCsvConverter::<CsvConverter>::default().convert(records, sink)
}
