//! Conversions from Rust primitives into the wire [`Value`] union.
//!
//! Each supported type has its own `From` impl, so the variant is chosen by the
//! static type at the call site. Types without an impl are rejected at compile time.

use crate::proto::feast::types::value::Val;
use crate::proto::feast::types::{
    BoolList, BytesList, DoubleList, FloatList, Int32List, Int64List, Null, StringList, Value,
};

macro_rules! impl_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value { val: Some(Val::$variant(v.into())) }
                }
            }
        )*
    };
}

macro_rules! impl_list {
    ($($ty:ty => $variant:ident($list:ident)),* $(,)?) => {
        $(
            impl From<Vec<$ty>> for Value {
                fn from(v: Vec<$ty>) -> Self {
                    Value { val: Some(Val::$variant($list { val: v })) }
                }
            }
        )*
    };
}

impl_scalar! {
    i32 => Int32Val,
    i64 => Int64Val,
    f32 => FloatVal,
    f64 => DoubleVal,
    bool => BoolVal,
    String => StringVal,
    &str => StringVal,
    Vec<u8> => BytesVal,
    &[u8] => BytesVal,
}

impl_list! {
    i32 => Int32ListVal(Int32List),
    i64 => Int64ListVal(Int64List),
    f32 => FloatListVal(FloatList),
    f64 => DoubleListVal(DoubleList),
    bool => BoolListVal(BoolList),
    String => StringListVal(StringList),
    Vec<u8> => BytesListVal(BytesList),
}

impl Value {
    /// An explicit null.
    pub fn null() -> Self {
        Value {
            val: Some(Val::NullVal(Null::Null.into())),
        }
    }

    /// True when no variant is set.
    pub fn is_empty(&self) -> bool {
        self.val.is_none()
    }
}
