//! Schema-less MessagePack encoding of arbitrary runtime values.
//!
//! Any type implementing [`Reflect`] can be encoded: scalars, strings,
//! sequences, maps, optional values, big integers, and user structs declared
//! with [`record!`]. The [`ValueEncoder`] inspects the value at runtime and
//! drives a [`BinaryWriter`]; [`MsgPackWriter`] is the default byte layout.
//!
//! ```
//! use anypack::{encode, record};
//!
//! struct Order {
//!     name: String,
//!     items: Vec<u8>,
//! }
//!
//! record!(Order { name => "Name", items => "Items" });
//!
//! let order = Order { name: "a".into(), items: vec![1, 2, 3] };
//! let bytes = encode(&order).unwrap();
//! assert_eq!(
//!     bytes,
//!     [0x82, 0xa4, b'n', b'a', b'm', b'e', 0xa1, b'a',
//!      0xa5, b'i', b't', b'e', b'm', b's', 0x93, 0x03, 0x02, 0x01]
//! );
//! ```

mod encoder;
mod error;
mod naming;
mod options;
mod reflect;

pub mod writer;

pub use encoder::ValueEncoder;
pub use error::EncodeError;
pub use naming::{uncapitalize, FieldNaming};
pub use options::{EncoderOptions, MapOrder, SequenceOrder};
pub use reflect::{BigInteger, Field, Kind, Reflect};
pub use writer::{BinaryWriter, MsgPackWriter};

/// Encodes `value` to MessagePack with default options.
pub fn encode(value: &dyn Reflect) -> Result<Vec<u8>, EncodeError> {
    encode_with(value, &EncoderOptions::default())
}

/// Encodes `value` to MessagePack with the given options.
pub fn encode_with(value: &dyn Reflect, options: &EncoderOptions) -> Result<Vec<u8>, EncodeError> {
    ValueEncoder::msgpack(options.clone()).encode(value)
}
