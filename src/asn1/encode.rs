use bytes::{BufMut, Bytes, BytesMut};

use super::{BerError, BerResult, Tag};
use crate::oid::Oid;

/// Streaming BER encoder.
///
/// Constructed contexts are composed bottom-up: `enter` pushes a fresh
/// buffer, `leave` wraps whatever accumulated in it with the deferred tag
/// and length and appends the result to the parent. Only definite-length
/// form is ever emitted.
pub struct Encoder {
    out: BytesMut,
    frames: Vec<(Tag, BytesMut)>,
}

impl Encoder {
    pub fn new() -> Self {
        Encoder {
            out: BytesMut::new(),
            frames: Vec::new(),
        }
    }

    fn current(&mut self) -> &mut BytesMut {
        match self.frames.last_mut() {
            Some((_, buf)) => buf,
            None => &mut self.out,
        }
    }

    /// Open a constructed context; its length is emitted on `leave`.
    pub fn enter(&mut self, tag: Tag) -> BerResult<()> {
        if !tag.is_constructed() {
            return Err(BerError::Invariant("enter requires a constructed tag"));
        }
        self.frames.push((tag, BytesMut::new()));
        Ok(())
    }

    /// Finalise the innermost constructed context.
    pub fn leave(&mut self) -> BerResult<()> {
        let (tag, content) = self
            .frames
            .pop()
            .ok_or(BerError::Invariant("leave without matching enter"))?;
        let buf = self.current();
        buf.put_u8(tag as u8);
        put_length(content.len(), buf);
        buf.put_slice(&content);
        Ok(())
    }

    /// Emit tag + length + payload for one primitive TLV.
    pub fn write_primitive(&mut self, tag: Tag, payload: &[u8]) -> BerResult<()> {
        if tag.is_constructed() {
            return Err(BerError::Invariant("write_primitive requires a primitive tag"));
        }
        let buf = self.current();
        buf.put_u8(tag as u8);
        put_length(payload.len(), buf);
        buf.put_slice(payload);
        Ok(())
    }

    pub fn write_integer(&mut self, value: i64) -> BerResult<()> {
        self.write_primitive(Tag::Integer, &integer_bytes(value))
    }

    pub fn write_octet_string(&mut self, data: &[u8]) -> BerResult<()> {
        self.write_primitive(Tag::OctetString, data)
    }

    pub fn write_null(&mut self) -> BerResult<()> {
        self.write_primitive(Tag::Null, &[])
    }

    pub fn write_oid(&mut self, oid: &Oid) -> BerResult<()> {
        let payload = oid_bytes(oid)?;
        self.write_primitive(Tag::ObjectIdentifier, &payload)
    }

    /// The finished byte sequence. Fails while a constructed context is
    /// still open.
    pub fn output(self) -> BerResult<Bytes> {
        if !self.frames.is_empty() {
            return Err(BerError::Invariant("output with unclosed constructed context"));
        }
        Ok(self.out.freeze())
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Encoder::new()
    }
}

/// Length octets: short form below 128, long form `0x80 | n` plus n
/// big-endian bytes otherwise.
fn put_length(len: usize, buf: &mut BytesMut) {
    if len < 128 {
        buf.put_u8(len as u8);
    } else {
        let mut bytes = Vec::new();
        let mut temp = len;
        while temp > 0 {
            bytes.push((temp & 0xFF) as u8);
            temp >>= 8;
        }
        buf.put_u8(0x80 | bytes.len() as u8);
        for byte in bytes.iter().rev() {
            buf.put_u8(*byte);
        }
    }
}

/// Minimal two's-complement payload of an INTEGER.
pub fn integer_bytes(value: i64) -> Vec<u8> {
    let mut len = 1;
    let mut temp = value;
    while temp > 127 || temp < -128 {
        temp >>= 8;
        len += 1;
    }
    (0..len).rev().map(|i| (value >> (i * 8)) as u8).collect()
}

/// Minimal payload of a non-negative integer, padded with a leading zero
/// octet when the top bit would otherwise read as a sign bit.
pub fn unsigned_bytes(value: u64) -> Vec<u8> {
    let mut bytes = Vec::new();
    let mut temp = value;
    loop {
        bytes.push((temp & 0xFF) as u8);
        temp >>= 8;
        if temp == 0 {
            break;
        }
    }
    if bytes.last().copied().unwrap_or(0) & 0x80 != 0 {
        bytes.push(0x00);
    }
    bytes.reverse();
    bytes
}

/// OID payload: the first two components pack into one subidentifier as
/// `40*a + b`, the rest follow as base-128 groups with a continuation bit
/// on all but the last.
pub fn oid_bytes(oid: &Oid) -> BerResult<Vec<u8>> {
    let components = oid.components();
    if components.len() < 2 {
        return Err(BerError::Invariant("OID needs at least 2 components"));
    }
    let mut out = Vec::new();
    put_base128(40 * components[0] + components[1], &mut out);
    for &component in &components[2..] {
        put_base128(component, &mut out);
    }
    Ok(out)
}

fn put_base128(value: u32, out: &mut Vec<u8>) {
    let mut groups = [0u8; 5];
    let mut count = 0;
    let mut temp = value;
    loop {
        groups[count] = (temp & 0x7F) as u8;
        count += 1;
        temp >>= 7;
        if temp == 0 {
            break;
        }
    }
    for i in (0..count).rev() {
        out.push(if i == 0 { groups[i] } else { groups[i] | 0x80 });
    }
}
