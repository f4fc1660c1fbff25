//! Byte buffer primitives shared by the anypack encoders.

mod writer;

pub use writer::Writer;
