//! Encoder configuration.
//!
//! The defaults reproduce the established wire output, including the reversed
//! sequence order existing consumers read. The alternatives are opt-in.

use serde::{Deserialize, Serialize};

use crate::naming::FieldNaming;

/// Order in which sequence elements are emitted after the array header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceOrder {
    /// Last element first. The header still carries the true element count.
    #[default]
    Reversed,
    /// Index order.
    Declared,
}

/// Order in which map entries are emitted after the map header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapOrder {
    /// Reverse of the collection's iteration order. For hash maps this is
    /// effectively arbitrary.
    #[default]
    Unspecified,
    /// Ascending by each key's encoded bytes. Deterministic for any map.
    SortedByKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderOptions {
    pub sequence_order: SequenceOrder,
    pub map_order: MapOrder,
    pub field_naming: FieldNaming,
    /// Allocation chunk for the default MessagePack writer.
    pub initial_capacity: usize,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            sequence_order: SequenceOrder::default(),
            map_order: MapOrder::default(),
            field_naming: FieldNaming::default(),
            initial_capacity: 64 * 1024,
        }
    }
}

impl EncoderOptions {
    pub fn with_sequence_order(mut self, order: SequenceOrder) -> Self {
        self.sequence_order = order;
        self
    }

    pub fn with_map_order(mut self, order: MapOrder) -> Self {
        self.map_order = order;
        self
    }

    pub fn with_field_naming(mut self, naming: FieldNaming) -> Self {
        self.field_naming = naming;
        self
    }

    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_compatible_output() {
        let options = EncoderOptions::default();
        assert_eq!(options.sequence_order, SequenceOrder::Reversed);
        assert_eq!(options.map_order, MapOrder::Unspecified);
        assert_eq!(options.field_naming, FieldNaming::LowerFirst);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let options: EncoderOptions =
            serde_json::from_str(r#"{"sequence_order": "declared", "map_order": "sorted_by_key"}"#)
                .unwrap();
        assert_eq!(options.sequence_order, SequenceOrder::Declared);
        assert_eq!(options.map_order, MapOrder::SortedByKey);
        assert_eq!(options.field_naming, FieldNaming::LowerFirst);
        assert_eq!(options.initial_capacity, 64 * 1024);
    }

    #[test]
    fn round_trips_through_json() {
        let options = EncoderOptions::default().with_field_naming(FieldNaming::Verbatim);
        let text = serde_json::to_string(&options).unwrap();
        assert!(text.contains(r#""field_naming":"verbatim""#));
        let back: EncoderOptions = serde_json::from_str(&text).unwrap();
        assert_eq!(back, options);
    }
}
