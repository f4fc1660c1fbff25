//! Pass-through writer that records the primitive call sequence.

use num_bigint::BigInt;

use super::{BinaryWriter, MsgPackWriter};

/// One primitive-write call, with its argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Str(String),
    Nil,
    ArrayLength(u32),
    MapLength(u32),
    BigInt(BigInt),
}

impl Primitive {
    /// Whether this call is a container header rather than a leaf value.
    pub fn is_header(&self) -> bool {
        matches!(self, Primitive::ArrayLength(_) | Primitive::MapLength(_))
    }
}

/// Records every call as a [`Primitive`], then forwards it to `inner`.
pub struct RecordingWriter<W = MsgPackWriter> {
    inner: W,
    calls: Vec<Primitive>,
}

impl Default for RecordingWriter {
    fn default() -> Self {
        Self::new(MsgPackWriter::new())
    }
}

impl<W: BinaryWriter> RecordingWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[Primitive] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<Primitive> {
        self.calls
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: BinaryWriter> BinaryWriter for RecordingWriter<W> {
    fn write_bool(&mut self, value: bool) {
        self.calls.push(Primitive::Bool(value));
        self.inner.write_bool(value);
    }

    fn write_i8(&mut self, value: i8) {
        self.calls.push(Primitive::I8(value));
        self.inner.write_i8(value);
    }

    fn write_i16(&mut self, value: i16) {
        self.calls.push(Primitive::I16(value));
        self.inner.write_i16(value);
    }

    fn write_i32(&mut self, value: i32) {
        self.calls.push(Primitive::I32(value));
        self.inner.write_i32(value);
    }

    fn write_i64(&mut self, value: i64) {
        self.calls.push(Primitive::I64(value));
        self.inner.write_i64(value);
    }

    fn write_u8(&mut self, value: u8) {
        self.calls.push(Primitive::U8(value));
        self.inner.write_u8(value);
    }

    fn write_u16(&mut self, value: u16) {
        self.calls.push(Primitive::U16(value));
        self.inner.write_u16(value);
    }

    fn write_u32(&mut self, value: u32) {
        self.calls.push(Primitive::U32(value));
        self.inner.write_u32(value);
    }

    fn write_u64(&mut self, value: u64) {
        self.calls.push(Primitive::U64(value));
        self.inner.write_u64(value);
    }

    fn write_f32(&mut self, value: f32) {
        self.calls.push(Primitive::F32(value));
        self.inner.write_f32(value);
    }

    fn write_f64(&mut self, value: f64) {
        self.calls.push(Primitive::F64(value));
        self.inner.write_f64(value);
    }

    fn write_str(&mut self, value: &str) {
        self.calls.push(Primitive::Str(value.to_owned()));
        self.inner.write_str(value);
    }

    fn write_nil(&mut self) {
        self.calls.push(Primitive::Nil);
        self.inner.write_nil();
    }

    fn write_array_length(&mut self, length: u32) {
        self.calls.push(Primitive::ArrayLength(length));
        self.inner.write_array_length(length);
    }

    fn write_map_length(&mut self, length: u32) {
        self.calls.push(Primitive::MapLength(length));
        self.inner.write_map_length(length);
    }

    fn write_big_int(&mut self, value: &BigInt) {
        self.calls.push(Primitive::BigInt(value.clone()));
        self.inner.write_big_int(value);
    }

    fn buffer(&mut self) -> Vec<u8> {
        self.inner.buffer()
    }
}
