//! Runtime introspection of values whose type the encoder does not know.
//!
//! A [`Reflect`] value reports its [`Kind`]: either a scalar carried by value,
//! or a composite whose sub-values are handed out as `&dyn Reflect` in their
//! natural order (index order, iteration order, declaration order). The encoder
//! decides how to walk them.

mod impls;
mod json;

use num_bigint::BigInt;

/// A value that can describe its own shape at runtime.
pub trait Reflect {
    /// Classifies the value and exposes its sub-values.
    fn kind(&self) -> Kind<'_>;

    /// Concrete type name reported in errors.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Runtime classification of a [`Reflect`] value.
pub enum Kind<'a> {
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
    Str(&'a str),
    /// Ordered elements, in index order.
    Seq(Vec<&'a dyn Reflect>),
    /// Key/value entries, in the collection's iteration order.
    Map(Vec<(&'a dyn Reflect, &'a dyn Reflect)>),
    /// Named fields, in declaration order.
    Record(Vec<Field<'a>>),
    /// A value carrying the arbitrary-precision integer capability.
    BigInt(&'a dyn BigInteger),
    /// A reference that may be absent. `None` encodes as nil, `Some` is
    /// replaced by its referent.
    Nullable(Option<&'a dyn Reflect>),
    /// No encoding rule exists (functions, channels, raw pointers).
    Unsupported,
}

/// One record field: its declared name and its value.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    pub name: &'static str,
    pub value: &'a dyn Reflect,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, value: &'a dyn Reflect) -> Self {
        Self { name, value }
    }
}

/// Capability marker for arbitrary-precision integers.
///
/// Returning `None` means the value claims the capability but has no valid
/// integer representation; the encoder rejects it as an unsupported type.
pub trait BigInteger {
    fn to_big_int(&self) -> Option<BigInt>;
}

/// Implements [`Reflect`] for a struct as a record.
///
/// Fields are listed in declaration order. A field may carry an explicit
/// declared name with `field => "Name"`; otherwise the Rust identifier is used.
///
/// ```
/// use anypack::record;
///
/// struct Point {
///     x: i32,
///     y: i32,
///     label: Option<String>,
/// }
///
/// record!(Point { x, y, label => "Label" });
///
/// let bytes = anypack::encode(&Point { x: 1, y: 2, label: None }).unwrap();
/// assert_eq!(bytes[0], 0x83);
/// ```
#[macro_export]
macro_rules! record {
    (@name $field:ident) => {
        stringify!($field)
    };
    (@name $field:ident $name:literal) => {
        $name
    };
    ($ty:ty { $($field:ident $(=> $name:literal)?),* $(,)? }) => {
        impl $crate::Reflect for $ty {
            fn kind(&self) -> $crate::Kind<'_> {
                $crate::Kind::Record(vec![
                    $($crate::Field::new(
                        $crate::record!(@name $field $($name)?),
                        &self.$field,
                    )),*
                ])
            }
        }
    };
}
