//! Primitive-write vocabulary the encoder drives.

mod msgpack;
mod recording;

pub use msgpack::MsgPackWriter;
pub use recording::{Primitive, RecordingWriter};

use num_bigint::BigInt;

/// Sink for wire primitives.
///
/// Implementations own the byte layout; the encoder only guarantees call
/// order and arguments. Writes are infallible.
pub trait BinaryWriter {
    fn write_bool(&mut self, value: bool);
    fn write_i8(&mut self, value: i8);
    fn write_i16(&mut self, value: i16);
    fn write_i32(&mut self, value: i32);
    fn write_i64(&mut self, value: i64);
    fn write_u8(&mut self, value: u8);
    fn write_u16(&mut self, value: u16);
    fn write_u32(&mut self, value: u32);
    fn write_u64(&mut self, value: u64);
    fn write_f32(&mut self, value: f32);
    fn write_f64(&mut self, value: f64);
    fn write_str(&mut self, value: &str);
    fn write_nil(&mut self);
    fn write_array_length(&mut self, length: u32);
    fn write_map_length(&mut self, length: u32);
    fn write_big_int(&mut self, value: &BigInt);

    /// Takes the bytes accumulated so far.
    fn buffer(&mut self) -> Vec<u8>;
}
