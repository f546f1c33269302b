use std::fmt;

use crate::error::{NullValueError, Result};

/// A value that was supplied but may itself be null.
///
/// Used as `Option<Nullable<T>>` in update-style APIs: `None` means the
/// argument was not supplied, `Some(Nullable::null())` means "clear it" and
/// `Some(Nullable::set(v))` means "set it to `v`".
///
/// Ordering follows `Option<T>`, so a null instance sorts before any value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nullable<T> {
    value: Option<T>,
}

impl<T> Nullable<T> {
    pub const fn new(value: Option<T>) -> Self {
        Self { value }
    }

    pub const fn null() -> Self {
        Self { value: None }
    }

    pub const fn set(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Wraps `value` only when it is `Some`.
    ///
    /// A `None` input yields no instance at all rather than a null one, so
    /// an absent input reads as "not supplied".
    pub fn if_not_none(value: Option<T>) -> Option<Self> {
        value.map(Self::set)
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn into_value(self) -> Option<T> {
        self.value
    }

    pub fn is_null(&self) -> bool {
        self.value.is_none()
    }

    pub fn try_into_value(self) -> Result<T> {
        self.value.ok_or(NullValueError)
    }

    pub fn as_ref(&self) -> Nullable<&T> {
        Nullable::new(self.value.as_ref())
    }

    pub fn map<U, F>(self, f: F) -> Nullable<U>
    where
        F: FnOnce(T) -> U,
    {
        Nullable::new(self.value.map(f))
    }
}

impl<T> std::default::Default for Nullable<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> std::ops::Deref for Nullable<T> {
    type Target = Option<T>;
    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T> std::convert::From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        Self::new(value)
    }
}

impl<T> std::convert::From<Nullable<T>> for Option<T> {
    fn from(nullable: Nullable<T>) -> Self {
        nullable.value
    }
}

impl<T: fmt::Display> fmt::Display for Nullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "Nullable(value={})", value),
            None => write!(f, "Nullable(value=None)"),
        }
    }
}
