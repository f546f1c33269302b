//! Serde support.
//!
//! A `Nullable<T>` is encoded exactly like `Option<T>`. To tell a missing
//! field apart from an explicit `null`, declare the field as
//! `Option<Nullable<T>>` and use [`patch`]:
//!
//! ```
//! use nullability::Nullable;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct FooPatch {
//!     #[serde(default, deserialize_with = "nullability::serde_impl::patch")]
//!     bar: Option<Nullable<i32>>,
//! }
//!
//! let patch: FooPatch = serde_json::from_str(r#"{"bar": null}"#).unwrap();
//! assert_eq!(patch.bar, Some(Nullable::null()));
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::nullable::Nullable;

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Nullable::new)
    }
}

/// `deserialize_with` helper for `Option<Nullable<T>>` fields.
///
/// Only called when the field is present, so a `null` becomes
/// `Some(Nullable::null())`. Pair with `#[serde(default)]`.
pub fn patch<'de, D, T>(deserializer: D) -> Result<Option<Nullable<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Nullable::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_option() {
        assert_eq!(serde_json::to_string(&Nullable::set(1)).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Nullable::<i32>::null()).unwrap(), "null");
    }

    #[test]
    fn deserializes_null() {
        let n: Nullable<String> = serde_json::from_str("null").unwrap();
        assert!(n.is_null());
        let n: Nullable<String> = serde_json::from_str("\"hi\"").unwrap();
        assert_eq!(n, Nullable::set("hi".to_string()));
    }
}
