use std::{borrow::Cow, io::Write};

use log::{debug, error};

use crate::{
    core::{
        converter::Converter,
        tabular::{Row, TabularView},
        validation::{validate_headers, validate_rows},
    },
    error::{ConversionError, ConversionResult},
};

use super::escape::{DELIMITER, escape_field};

const TERMINATOR: &[u8] = b"\n";

/// Converts a [`TabularView`] to CSV text.
///
/// The output is one header line followed by one line per row, each ending
/// with `\n`. Fields are joined with `,` and escaped with
/// [`escape_field`]. A row without a value for some header gets an empty
/// field there.
///
/// Nothing is buffered: each line goes to the sink as soon as it is rendered,
/// and the sink is flushed once the last row is written. If the sink fails,
/// the error is returned and the lines written so far stay in the sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvConverter;

impl Converter for CsvConverter {
    fn convert<V, W>(&self, view: V, sink: &mut W) -> ConversionResult<()>
    where
        V: TabularView,
        W: Write + ?Sized,
    {
        let headers: Vec<String> = validate_headers(view.headers())?
            .into_iter()
            .map(str::to_owned)
            .collect();
        let rows = validate_rows(view.into_rows())?;

        debug!("Start of CSV conversion, headers: {:?}", headers);

        let header_fields = headers.iter().map(|header| escape_field(Some(header.as_str())));
        write_line(sink, header_fields)?;

        let mut row_count = 0;
        for row in rows {
            write_line(sink, render_row(&row, &headers))?;
            row_count += 1;
        }

        sink.flush().map_err(sink_failure)?;

        debug!("End of CSV conversion, {} rows written", row_count);

        Ok(())
    }
}

fn render_row<'a, R: Row>(
    row: &'a R,
    headers: &'a [String],
) -> impl Iterator<Item = Cow<'a, str>> {
    headers.iter().map(move |header| escape_field(row.get(header)))
}

fn write_line<'a, W, F>(sink: &mut W, fields: F) -> ConversionResult<()>
where
    W: Write + ?Sized,
    F: Iterator<Item = Cow<'a, str>>,
{
    let mut line = String::new();
    for (index, field) in fields.enumerate() {
        if index > 0 {
            line.push(DELIMITER);
        }
        line.push_str(&field);
    }

    let mut line = line.into_bytes();
    line.extend_from_slice(TERMINATOR);

    sink.write_all(&line).map_err(sink_failure)
}

fn sink_failure(err: std::io::Error) -> ConversionError {
    error!("Error occurred while writing CSV: {}", err);
    ConversionError::SinkWrite(err)
}

/// Validates `view` and writes it to `sink` as CSV. See [`CsvConverter`].
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use tabular_csv::core::tabular::TabularDataBuilder;
/// use tabular_csv::item::csv::serialize;
/// use tabular_csv::item::mapper::MapRow;
///
/// let record = HashMap::from([("a", "x,y"), ("b", "z")]);
/// let view = TabularDataBuilder::new()
///     .headers(["a", "b"])
///     .rows(vec![MapRow::new(&record)])
///     .build();
///
/// let mut sink = Vec::new();
/// serialize(view, &mut sink).unwrap();
///
/// assert_eq!(String::from_utf8(sink).unwrap(), "a,b\n\"x,y\",z\n");
/// ```
pub fn serialize<V, W>(view: V, sink: &mut W) -> ConversionResult<()>
where
    V: TabularView,
    W: Write + ?Sized,
{
    CsvConverter.convert(view, sink)
}
