//! `ValueEncoder`: walks a [`Reflect`] value and drives a [`BinaryWriter`].
//!
//! Traversal is iterative over a double-ended work queue. Each composite
//! writes its header, builds the list of sub-items in the order they must be
//! emitted, and places that list at the front of the queue. Emission order:
//!
//! - records: declaration order, each field as `name`, `value`;
//! - sequences: last element first by default ([`SequenceOrder::Reversed`]);
//! - maps: reverse of the collection's iteration order by default, each entry
//!   as `key`, `value`.

use std::borrow::Cow;
use std::collections::VecDeque;

use crate::error::EncodeError;
use crate::options::{EncoderOptions, MapOrder, SequenceOrder};
use crate::reflect::{Kind, Reflect};
use crate::writer::{BinaryWriter, MsgPackWriter};

enum WorkItem<'a> {
    Value(&'a dyn Reflect),
    /// A record field name, already converted to its wire form.
    Key(Cow<'a, str>),
}

type Entry<'a> = (&'a dyn Reflect, &'a dyn Reflect);

/// Single-use encoder: one call, one writer.
pub struct ValueEncoder<W = MsgPackWriter> {
    writer: W,
    options: EncoderOptions,
}

impl ValueEncoder<MsgPackWriter> {
    /// Encoder over a fresh MessagePack writer sized by `options`.
    pub fn msgpack(options: EncoderOptions) -> Self {
        let writer = MsgPackWriter::with_capacity(options.initial_capacity);
        Self { writer, options }
    }
}

impl<W: BinaryWriter> ValueEncoder<W> {
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, EncoderOptions::default())
    }

    pub fn with_options(writer: W, options: EncoderOptions) -> Self {
        Self { writer, options }
    }

    /// Encodes `value` and returns the writer's accumulated bytes.
    pub fn encode(self, value: &dyn Reflect) -> Result<Vec<u8>, EncodeError> {
        let root = value.type_name();
        let mut writer = self.drive(value)?;
        let out = writer.buffer();
        tracing::debug!(root, bytes = out.len(), "encoded value");
        Ok(out)
    }

    /// Runs the traversal and hands back the writer without taking its buffer.
    pub fn drive(mut self, value: &dyn Reflect) -> Result<W, EncodeError> {
        let context = format!("encode value: {}", value.type_name());
        tracing::debug!(%context, "encoding value");
        traverse(&mut self.writer, &self.options, value, &context)?;
        Ok(self.writer)
    }
}

fn traverse<'a, W: BinaryWriter>(
    writer: &mut W,
    options: &EncoderOptions,
    root: &'a dyn Reflect,
    context: &str,
) -> Result<(), EncodeError> {
    let mut queue = VecDeque::from([WorkItem::Value(root)]);
    while let Some(item) = queue.pop_front() {
        let value = match item {
            WorkItem::Key(name) => {
                writer.write_str(&name);
                continue;
            }
            WorkItem::Value(value) => value,
        };
        match value.kind() {
            Kind::Bool(b) => writer.write_bool(b),
            Kind::I8(v) => writer.write_i8(v),
            Kind::I16(v) => writer.write_i16(v),
            Kind::I32(v) => writer.write_i32(v),
            Kind::I64(v) => writer.write_i64(v),
            Kind::U8(v) => writer.write_u8(v),
            Kind::U16(v) => writer.write_u16(v),
            Kind::U32(v) => writer.write_u32(v),
            Kind::U64(v) => writer.write_u64(v),
            Kind::F32(v) => writer.write_f32(v),
            Kind::F64(v) => writer.write_f64(v),
            Kind::Str(s) => writer.write_str(s),
            Kind::Nullable(None) => writer.write_nil(),
            Kind::Nullable(Some(referent)) => queue.push_front(WorkItem::Value(referent)),
            Kind::BigInt(big) => match big.to_big_int() {
                Some(n) => writer.write_big_int(&n),
                None => return Err(unsupported(value, context)),
            },
            Kind::Seq(elements) => {
                let len = wire_length(value, elements.len(), context)?;
                tracing::trace!(len, "array header");
                writer.write_array_length(len);
                let batch: Vec<WorkItem<'a>> = match options.sequence_order {
                    SequenceOrder::Reversed => {
                        elements.into_iter().rev().map(WorkItem::Value).collect()
                    }
                    SequenceOrder::Declared => elements.into_iter().map(WorkItem::Value).collect(),
                };
                prepend(&mut queue, batch);
            }
            Kind::Map(entries) => {
                let len = wire_length(value, entries.len(), context)?;
                tracing::trace!(len, "map header");
                writer.write_map_length(len);
                let batch = order_entries(entries, options, context)?
                    .into_iter()
                    .flat_map(|(k, v)| [WorkItem::Value(k), WorkItem::Value(v)])
                    .collect();
                prepend(&mut queue, batch);
            }
            Kind::Record(fields) => {
                let len = wire_length(value, fields.len(), context)?;
                tracing::trace!(len, record = value.type_name(), "record header");
                writer.write_map_length(len);
                let batch = fields
                    .into_iter()
                    .flat_map(|field| {
                        [
                            WorkItem::Key(options.field_naming.apply(field.name)),
                            WorkItem::Value(field.value),
                        ]
                    })
                    .collect();
                prepend(&mut queue, batch);
            }
            Kind::Unsupported => return Err(unsupported(value, context)),
        }
    }
    Ok(())
}

/// Puts `batch` at the front of the queue, keeping its order.
fn prepend<'a>(queue: &mut VecDeque<WorkItem<'a>>, batch: Vec<WorkItem<'a>>) {
    for item in batch.into_iter().rev() {
        queue.push_front(item);
    }
}

fn order_entries<'a>(
    entries: Vec<Entry<'a>>,
    options: &EncoderOptions,
    context: &str,
) -> Result<Vec<Entry<'a>>, EncodeError> {
    match options.map_order {
        MapOrder::Unspecified => Ok(entries.into_iter().rev().collect()),
        MapOrder::SortedByKey => {
            let mut keyed = entries
                .into_iter()
                .map(|(k, v)| Ok((key_bytes(k, options, context)?, k, v)))
                .collect::<Result<Vec<_>, EncodeError>>()?;
            keyed.sort_by(|a, b| a.0.cmp(&b.0));
            Ok(keyed.into_iter().map(|(_, k, v)| (k, v)).collect())
        }
    }
}

/// MessagePack bytes of a map key, used as its sort key.
fn key_bytes(key: &dyn Reflect, options: &EncoderOptions, context: &str) -> Result<Vec<u8>, EncodeError> {
    let mut writer = MsgPackWriter::with_capacity(64);
    traverse(&mut writer, options, key, context)?;
    Ok(writer.buffer())
}

fn wire_length(value: &dyn Reflect, len: usize, context: &str) -> Result<u32, EncodeError> {
    u32::try_from(len).map_err(|_| unsupported(value, context))
}

fn unsupported(value: &dyn Reflect, context: &str) -> EncodeError {
    let type_name = value.type_name();
    tracing::debug!(type_name, context, "unsupported type");
    EncodeError::unsupported(type_name, context)
}
