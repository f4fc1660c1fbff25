//! `MsgPackWriter`: MessagePack byte layout for each primitive.
//!
//! Integers take the narrowest format that holds the value, whatever the
//! source width. Big integers travel as their base-10 string.

use anypack_buffers::Writer;
use num_bigint::BigInt;

use super::BinaryWriter;

pub struct MsgPackWriter {
    pub writer: Writer,
}

impl Default for MsgPackWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl MsgPackWriter {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            writer: Writer::with_alloc_size(capacity),
        }
    }

    fn write_signed(&mut self, int: i64) {
        if (0..=0x7f).contains(&int) {
            self.writer.u8(int as u8);
        } else if (-0x20..0).contains(&int) {
            // negative fixint: 0xe0..0xff
            self.writer.u8(int as i8 as u8);
        } else if let Ok(v) = i8::try_from(int) {
            self.writer.u8i8(0xd0, v);
        } else if let Ok(v) = i16::try_from(int) {
            self.writer.u8i16(0xd1, v);
        } else if let Ok(v) = i32::try_from(int) {
            self.writer.u8i32(0xd2, v);
        } else {
            self.writer.u8i64(0xd3, int);
        }
    }

    fn write_unsigned(&mut self, uint: u64) {
        if uint <= 0x7f {
            self.writer.u8(uint as u8);
        } else if let Ok(v) = u8::try_from(uint) {
            self.writer.u8u8(0xcc, v);
        } else if let Ok(v) = u16::try_from(uint) {
            self.writer.u8u16(0xcd, v);
        } else if let Ok(v) = u32::try_from(uint) {
            self.writer.u8u32(0xce, v);
        } else {
            self.writer.u8u64(0xcf, uint);
        }
    }

    fn write_str_hdr(&mut self, length: u32) {
        if length <= 0x1f {
            self.writer.u8(0xa0 | length as u8);
        } else if length <= 0xff {
            self.writer.u8u8(0xd9, length as u8);
        } else if length <= 0xffff {
            self.writer.u8u16(0xda, length as u16);
        } else {
            self.writer.u8u32(0xdb, length);
        }
    }
}

impl BinaryWriter for MsgPackWriter {
    fn write_bool(&mut self, value: bool) {
        self.writer.u8(if value { 0xc3 } else { 0xc2 });
    }

    fn write_i8(&mut self, value: i8) {
        self.write_signed(value.into());
    }

    fn write_i16(&mut self, value: i16) {
        self.write_signed(value.into());
    }

    fn write_i32(&mut self, value: i32) {
        self.write_signed(value.into());
    }

    fn write_i64(&mut self, value: i64) {
        self.write_signed(value);
    }

    fn write_u8(&mut self, value: u8) {
        self.write_unsigned(value.into());
    }

    fn write_u16(&mut self, value: u16) {
        self.write_unsigned(value.into());
    }

    fn write_u32(&mut self, value: u32) {
        self.write_unsigned(value.into());
    }

    fn write_u64(&mut self, value: u64) {
        self.write_unsigned(value);
    }

    fn write_f32(&mut self, value: f32) {
        self.writer.u8f32(0xca, value);
    }

    fn write_f64(&mut self, value: f64) {
        self.writer.u8f64(0xcb, value);
    }

    fn write_str(&mut self, value: &str) {
        // Lengths past u32::MAX do not fit str32.
        self.write_str_hdr(value.len() as u32);
        self.writer.utf8(value);
    }

    fn write_nil(&mut self) {
        self.writer.u8(0xc0);
    }

    fn write_array_length(&mut self, length: u32) {
        if length <= 0xf {
            self.writer.u8(0x90 | length as u8);
        } else if length <= 0xffff {
            self.writer.u8u16(0xdc, length as u16);
        } else {
            self.writer.u8u32(0xdd, length);
        }
    }

    fn write_map_length(&mut self, length: u32) {
        if length <= 0xf {
            self.writer.u8(0x80 | length as u8);
        } else if length <= 0xffff {
            self.writer.u8u16(0xde, length as u16);
        } else {
            self.writer.u8u32(0xdf, length);
        }
    }

    fn write_big_int(&mut self, value: &BigInt) {
        self.write_str(&value.to_str_radix(10));
    }

    fn buffer(&mut self) -> Vec<u8> {
        self.writer.flush()
    }
}
