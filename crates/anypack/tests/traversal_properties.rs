use std::collections::BTreeMap;

use anypack::writer::{Primitive, RecordingWriter};
use anypack::{encode, encode_with, record, EncoderOptions, SequenceOrder, ValueEncoder};
use proptest::prelude::*;

#[derive(Debug)]
struct Sample {
    id: u32,
    tags: Vec<String>,
    scores: BTreeMap<String, i16>,
    parent: Option<Box<Sample>>,
}

record!(Sample { id => "ID", tags => "Tags", scores => "Scores", parent => "Parent" });

fn sample() -> impl Strategy<Value = Sample> {
    let leaf = (
        any::<u32>(),
        prop::collection::vec("[a-z]{0,8}", 0..6),
        prop::collection::btree_map("[a-z]{1,4}", any::<i16>(), 0..5),
    )
        .prop_map(|(id, tags, scores)| Sample {
            id,
            tags,
            scores,
            parent: None,
        });
    leaf.prop_recursive(3, 16, 1, |inner| {
        (
            any::<u32>(),
            prop::collection::vec("[a-z]{0,8}", 0..6),
            prop::option::of(inner),
        )
            .prop_map(|(id, tags, parent)| Sample {
                id,
                tags,
                scores: BTreeMap::new(),
                parent: parent.map(Box::new),
            })
    })
}

proptest! {
    #[test]
    fn encoding_is_deterministic(value in sample()) {
        prop_assert_eq!(encode(&value).unwrap(), encode(&value).unwrap());
    }

    #[test]
    fn sequences_emit_last_element_first(items in prop::collection::vec(any::<i32>(), 0..40)) {
        let reversed: Vec<i32> = items.iter().rev().copied().collect();
        let declared = EncoderOptions::default().with_sequence_order(SequenceOrder::Declared);
        prop_assert_eq!(encode(&items).unwrap(), encode_with(&reversed, &declared).unwrap());
    }

    #[test]
    fn sequence_header_carries_true_length(items in prop::collection::vec(any::<u8>(), 0..300)) {
        let calls = ValueEncoder::new(RecordingWriter::default())
            .drive(&items)
            .unwrap()
            .into_calls();
        prop_assert_eq!(&calls[0], &Primitive::ArrayLength(items.len() as u32));
        prop_assert_eq!(calls.len(), items.len() + 1);
    }

    #[test]
    fn record_fields_lead_in_declaration_order(value in sample()) {
        let calls = ValueEncoder::new(RecordingWriter::default())
            .drive(&value)
            .unwrap()
            .into_calls();
        prop_assert_eq!(&calls[0], &Primitive::MapLength(4));
        prop_assert_eq!(&calls[1], &Primitive::Str("iD".into()));
        prop_assert_eq!(&calls[2], &Primitive::U32(value.id));
        prop_assert_eq!(&calls[3], &Primitive::Str("tags".into()));
    }
}
