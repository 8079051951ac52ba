use bytes::{Buf, BufMut};
use commonware_codec::{Error, FixedSize, ReadExt, Write};

/// Write a string as a u32 length prefix followed by its UTF-8 bytes.
pub fn write_string(s: &str, writer: &mut impl BufMut) {
    (s.len() as u32).write(writer);
    writer.put_slice(s.as_bytes());
}

/// Read a string written by [`write_string`], refusing lengths above
/// `max_len` before touching any payload bytes.
pub fn read_string(reader: &mut impl Buf, max_len: usize) -> Result<String, Error> {
    let len = read_text_len(reader, max_len)?;
    let bytes = reader.copy_to_bytes(len);
    String::from_utf8(bytes.into()).map_err(|_| Error::Invalid("String", "invalid UTF-8"))
}

/// Encoded size of a string written by [`write_string`].
pub fn string_encode_size(s: &str) -> usize {
    u32::SIZE + s.len()
}

// Validates a length prefix against the caller's bound and the bytes left in
// the buffer, so the payload read below cannot over-allocate or run short.
fn read_text_len(reader: &mut impl Buf, max_len: usize) -> Result<usize, Error> {
    let len = u32::read(reader)? as usize;
    if len > max_len {
        return Err(Error::Invalid("String", "too long"));
    }
    if reader.remaining() < len {
        return Err(Error::EndOfBuffer);
    }
    Ok(len)
}

/// Helper to write an optional string as a presence flag plus the string.
pub fn write_opt_string(s: &Option<String>, writer: &mut impl BufMut) {
    match s {
        Some(s) => {
            true.write(writer);
            write_string(s, writer);
        }
        None => false.write(writer),
    }
}

/// Helper to read an optional string written by [`write_opt_string`].
pub fn read_opt_string(reader: &mut impl Buf, max_len: usize) -> Result<Option<String>, Error> {
    let present = bool::read(reader)?;
    if present {
        Ok(Some(read_string(reader, max_len)?))
    } else {
        Ok(None)
    }
}

/// Helper to get encode size of an optional string.
pub fn opt_string_encode_size(s: &Option<String>) -> usize {
    1 + s.as_ref().map(|s| string_encode_size(s)).unwrap_or(0)
}
