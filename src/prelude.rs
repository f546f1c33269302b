pub use crate::error::NullValueError;
pub use crate::nullable::Nullable;
pub use crate::update::NullableExt;

pub fn null<T>() -> Nullable<T> {
    Default::default()
}
