//! Fixed-size binary record backend.
//!
//! No header; records are written back to back with `bincode`'s default
//! fixed-width little-endian encoding, so a row of `n` `u32` fields always
//! occupies `4 * n` bytes.  A stream whose length is not a multiple of the
//! record size is rejected as truncated before anything is decoded.

use std::io::{Read, Write};

use crate::row::Record;
use crate::{IoError, IoResult};

/// Write `rows` back to back.
pub fn write_records<W: Write, T: Record>(mut writer: W, rows: &[T]) -> IoResult<()> {
    for row in rows {
        bincode::serialize_into(&mut writer, row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Serialize `rows` into an in-memory buffer.
pub fn to_bytes<T: Record>(rows: &[T]) -> IoResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(rows.len() * T::record_size());
    write_records(&mut buf, rows)?;
    Ok(buf)
}

/// Read every record from `reader` until end of stream.
pub fn read_records<R: Read, T: Record>(mut reader: R) -> IoResult<Vec<T>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    from_bytes(&bytes)
}

/// Decode a complete in-memory stream.
pub fn from_bytes<T: Record>(bytes: &[u8]) -> IoResult<Vec<T>> {
    let size = T::record_size();
    if bytes.len() % size != 0 {
        return Err(IoError::Truncated { len: bytes.len(), record_size: size });
    }
    bytes
        .chunks_exact(size)
        .map(|chunk| bincode::deserialize::<T>(chunk).map_err(IoError::from))
        .collect()
}
