//! Structural checks shared by the record adapter and the CSV converter.
//!
//! Every check runs before anything is written, so a rejected input never
//! leaves partial output behind.

use std::collections::HashSet;

use log::warn;

use crate::error::Violation;

use super::record::RawRecord;

/// Checks a view's header sequence and returns the header names.
///
/// # Errors
/// - [`Violation::EmptyHeaders`] when the headers are absent or empty
/// - [`Violation::AbsentHeader`] with the position of the first missing name
pub fn validate_headers(headers: Option<Vec<Option<&str>>>) -> Result<Vec<&str>, Violation> {
    let headers = match headers {
        Some(headers) if !headers.is_empty() => headers,
        _ => return Err(reject(Violation::EmptyHeaders)),
    };

    headers
        .into_iter()
        .enumerate()
        .map(|(index, header)| header.ok_or(Violation::AbsentHeader(index)))
        .collect::<Result<Vec<_>, _>>()
        .map_err(reject)
}

/// Checks that a row source exists. Zero rows is fine.
pub fn validate_rows<I>(rows: Option<I>) -> Result<I, Violation> {
    rows.ok_or_else(|| reject(Violation::AbsentRows))
}

/// Checks a batch of raw records and returns the header names taken from the
/// first record, in its iteration order.
///
/// # Errors
/// - [`Violation::EmptyBatch`] when there is no record at all
/// - [`Violation::EmptyRecord`] when a record is absent or has no keys
/// - [`Violation::DuplicateKey`] when a record lists the same key twice
/// - [`Violation::KeySetMismatch`] when a record's key set differs from the first one
pub fn validate_batch<R: RawRecord>(records: &[R]) -> Result<Vec<&str>, Violation> {
    let first = records.first().ok_or_else(|| reject(Violation::EmptyBatch))?;
    let headers = present_names(first, 0)?;
    let expected: HashSet<&str> = headers.iter().copied().collect();

    for (index, record) in records.iter().enumerate().skip(1) {
        let names: HashSet<&str> = present_names(record, index)?.into_iter().collect();
        if names != expected {
            return Err(reject(Violation::KeySetMismatch(index)));
        }
    }

    Ok(headers)
}

fn present_names<R: RawRecord>(record: &R, index: usize) -> Result<Vec<&str>, Violation> {
    let names = match record.field_names() {
        Some(names) if !names.is_empty() => names,
        _ => return Err(reject(Violation::EmptyRecord(index))),
    };

    let mut seen = HashSet::with_capacity(names.len());
    if !names.iter().all(|name| seen.insert(*name)) {
        return Err(reject(Violation::DuplicateKey(index)));
    }

    Ok(names)
}

fn reject(violation: Violation) -> Violation {
    warn!("Rejected tabular input: {}", violation);
    violation
}
