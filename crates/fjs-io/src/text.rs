//! Semicolon-delimited text backend.
//!
//! # Format
//!
//! Header row first, one record per line:
//!
//! ```text
//! OperationID;MachineID;Duration
//! 1;1;4
//! 1;3;5
//! ```
//!
//! On import, lines whose field count differs from the header or whose
//! fields do not parse are skipped and counted; they never abort the read.
//! A header that does not match the expected columns is an error, since it
//! means the wrong file was opened.

use std::io::{Read, Write};

use csv::{ReaderBuilder, Trim, WriterBuilder};
use tracing::debug;

use crate::row::Record;
use crate::{IoError, IoResult};

pub const DELIMITER: u8 = b';';

/// Rows parsed from one text stream plus the number of lines skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOutcome<T> {
    pub rows:    Vec<T>,
    pub skipped: usize,
}

/// Write `rows` with a header line.  An empty slice still yields the header.
pub fn write_records<W: Write, T: Record>(writer: W, rows: &[T]) -> IoResult<()> {
    let mut w = WriterBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .from_writer(writer);
    w.write_record(T::HEADER)?;
    for row in rows {
        w.serialize(row)?;
    }
    w.flush()?;
    Ok(())
}

/// Serialize `rows` into an in-memory buffer.
pub fn to_bytes<T: Record>(rows: &[T]) -> IoResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_records(&mut buf, rows)?;
    Ok(buf)
}

/// Read every well-formed row from `reader`.
pub fn read_records<R: Read, T: Record>(reader: R) -> IoResult<ReadOutcome<T>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let mut outcome = ReadOutcome { rows: Vec::new(), skipped: 0 };
    if headers.is_empty() {
        return Ok(outcome);
    }
    if !headers.iter().eq(T::HEADER.iter().copied()) {
        return Err(IoError::Header {
            expected: T::HEADER.join(";"),
            found:    headers.iter().collect::<Vec<_>>().join(";"),
        });
    }

    for result in rdr.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                debug!(stem = T::STEM, error = %e, "skipping unreadable line");
                outcome.skipped += 1;
                continue;
            }
        };
        if record.len() != headers.len() {
            debug!(
                stem = T::STEM,
                line = record.position().map(|p| p.line()),
                fields = record.len(),
                "skipping line with wrong field count"
            );
            outcome.skipped += 1;
            continue;
        }
        match record.deserialize::<T>(Some(&headers)) {
            Ok(row) => outcome.rows.push(row),
            Err(e) => {
                debug!(stem = T::STEM, error = %e, "skipping malformed line");
                outcome.skipped += 1;
            }
        }
    }
    Ok(outcome)
}
