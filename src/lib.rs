//! A wrapper that separates "not supplied" from "supplied as null".
//!
//! `Option<Nullable<T>>` has three states, which is what partial-update
//! methods need: leave the field alone, clear it, or set it.

mod error;
mod nullable;
mod update;

pub mod prelude;
#[cfg(feature = "serde")]
pub mod serde_impl;

pub use error::{NullValueError, Result};
pub use nullable::Nullable;
pub use update::NullableExt;
