use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::mpsc::{Receiver, Sender, SyncSender};
use std::sync::Arc;

use indexmap::IndexMap;
use num_bigint::{BigInt, BigUint};

use super::{BigInteger, Kind, Reflect};

macro_rules! scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(impl Reflect for $ty {
            fn kind(&self) -> Kind<'_> {
                Kind::$variant(*self)
            }
        })*
    };
}

scalar! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

impl Reflect for isize {
    fn kind(&self) -> Kind<'_> {
        Kind::I64(*self as i64)
    }
}

impl Reflect for usize {
    fn kind(&self) -> Kind<'_> {
        Kind::U64(*self as u64)
    }
}

impl Reflect for str {
    fn kind(&self) -> Kind<'_> {
        Kind::Str(self)
    }
}

impl Reflect for String {
    fn kind(&self) -> Kind<'_> {
        Kind::Str(self)
    }
}

impl Reflect for Cow<'_, str> {
    fn kind(&self) -> Kind<'_> {
        Kind::Str(self)
    }
}

// Nullable and always-present references.

impl<T: Reflect> Reflect for Option<T> {
    fn kind(&self) -> Kind<'_> {
        Kind::Nullable(self.as_ref().map(|v| v as &dyn Reflect))
    }
}

macro_rules! pointer {
    ($($ptr:ty),* $(,)?) => {
        $(impl<T: Reflect + ?Sized> Reflect for $ptr {
            fn kind(&self) -> Kind<'_> {
                (**self).kind()
            }

            fn type_name(&self) -> &'static str {
                (**self).type_name()
            }
        })*
    };
}

pointer!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

// Sequences.

fn elements<T: Reflect>(items: &[T]) -> Kind<'_> {
    Kind::Seq(items.iter().map(|v| v as &dyn Reflect).collect())
}

impl<T: Reflect> Reflect for [T] {
    fn kind(&self) -> Kind<'_> {
        elements(self)
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn kind(&self) -> Kind<'_> {
        elements(self)
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn kind(&self) -> Kind<'_> {
        elements(self)
    }
}

impl<T: Reflect> Reflect for VecDeque<T> {
    fn kind(&self) -> Kind<'_> {
        Kind::Seq(self.iter().map(|v| v as &dyn Reflect).collect())
    }
}

macro_rules! tuple {
    ($(($($name:ident . $idx:tt),+)),* $(,)?) => {
        $(impl<$($name: Reflect),+> Reflect for ($($name,)+) {
            fn kind(&self) -> Kind<'_> {
                Kind::Seq(vec![$(&self.$idx as &dyn Reflect),+])
            }
        })*
    };
}

tuple! {
    (A.0),
    (A.0, B.1),
    (A.0, B.1, C.2),
    (A.0, B.1, C.2, D.3),
    (A.0, B.1, C.2, D.3, E.4),
    (A.0, B.1, C.2, D.3, E.4, F.5),
}

// Maps.

impl<K: Reflect, V: Reflect, S: BuildHasher> Reflect for HashMap<K, V, S> {
    fn kind(&self) -> Kind<'_> {
        Kind::Map(
            self.iter()
                .map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect))
                .collect(),
        )
    }
}

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
    fn kind(&self) -> Kind<'_> {
        Kind::Map(
            self.iter()
                .map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect))
                .collect(),
        )
    }
}

impl<K: Reflect, V: Reflect, S> Reflect for IndexMap<K, V, S> {
    fn kind(&self) -> Kind<'_> {
        Kind::Map(
            self.iter()
                .map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect))
                .collect(),
        )
    }
}

// Arbitrary-precision integers.

impl BigInteger for BigInt {
    fn to_big_int(&self) -> Option<BigInt> {
        Some(self.clone())
    }
}

impl BigInteger for BigUint {
    fn to_big_int(&self) -> Option<BigInt> {
        Some(BigInt::from(self.clone()))
    }
}

impl BigInteger for i128 {
    fn to_big_int(&self) -> Option<BigInt> {
        Some(BigInt::from(*self))
    }
}

impl BigInteger for u128 {
    fn to_big_int(&self) -> Option<BigInt> {
        Some(BigInt::from(*self))
    }
}

macro_rules! big_integer {
    ($($ty:ty),* $(,)?) => {
        $(impl Reflect for $ty {
            fn kind(&self) -> Kind<'_> {
                Kind::BigInt(self)
            }
        })*
    };
}

big_integer!(BigInt, BigUint, i128, u128);

// Values with no encoding rule.

macro_rules! unsupported {
    ($([$($gen:tt)*] $ty:ty),* $(,)?) => {
        $(impl<$($gen)*> Reflect for $ty {
            fn kind(&self) -> Kind<'_> {
                Kind::Unsupported
            }
        })*
    };
}

unsupported! {
    [R] fn() -> R,
    [A, R] fn(A) -> R,
    [A, B, R] fn(A, B) -> R,
    [A, B, C, R] fn(A, B, C) -> R,
    [T: ?Sized] *const T,
    [T: ?Sized] *mut T,
    [T] Sender<T>,
    [T] SyncSender<T>,
    [T] Receiver<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_kinds_keep_width() {
        assert!(matches!(7i8.kind(), Kind::I8(7)));
        assert!(matches!(7u16.kind(), Kind::U16(7)));
        assert!(matches!((-7isize).kind(), Kind::I64(-7)));
        assert!(matches!(7usize.kind(), Kind::U64(7)));
        assert!(matches!(1.5f32.kind(), Kind::F32(v) if v == 1.5));
    }

    #[test]
    fn pointers_resolve_to_referent() {
        let boxed: Box<dyn Reflect> = Box::new(3u32);
        assert!(matches!(boxed.kind(), Kind::U32(3)));
        assert_eq!(boxed.type_name(), "u32");

        let shared = Arc::new(String::from("x"));
        assert!(matches!(shared.kind(), Kind::Str("x")));
    }

    #[test]
    fn option_is_nullable() {
        let absent: Option<u8> = None;
        assert!(matches!(absent.kind(), Kind::Nullable(None)));
        let present = Some(4u8);
        match present.kind() {
            Kind::Nullable(Some(inner)) => assert!(matches!(inner.kind(), Kind::U8(4))),
            _ => panic!("expected present nullable"),
        }
    }

    #[test]
    fn sequences_list_elements_in_index_order() {
        let items = vec![1i32, 2, 3];
        match items.kind() {
            Kind::Seq(elems) => {
                let seen: Vec<i32> = elems
                    .iter()
                    .map(|e| match e.kind() {
                        Kind::I32(v) => v,
                        _ => panic!("expected i32"),
                    })
                    .collect();
                assert_eq!(seen, vec![1, 2, 3]);
            }
            _ => panic!("expected sequence"),
        }
        match (1u8, "two").kind() {
            Kind::Seq(elems) => assert_eq!(elems.len(), 2),
            _ => panic!("expected sequence"),
        }
    }

    #[test]
    fn big_integers_carry_capability() {
        let n = BigInt::from(-5);
        match n.kind() {
            Kind::BigInt(b) => assert_eq!(b.to_big_int(), Some(BigInt::from(-5))),
            _ => panic!("expected bigint"),
        }
        assert!(matches!(u128::MAX.kind(), Kind::BigInt(_)));
    }

    #[test]
    fn functions_and_channels_are_unsupported() {
        let f: fn(u8) -> u8 = |x| x;
        assert!(matches!(f.kind(), Kind::Unsupported));
        let (tx, rx) = std::sync::mpsc::channel::<u8>();
        assert!(matches!(tx.kind(), Kind::Unsupported));
        assert!(matches!(rx.kind(), Kind::Unsupported));
        let p: *const u8 = std::ptr::null();
        assert!(matches!(p.kind(), Kind::Unsupported));
    }
}
