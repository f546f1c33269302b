use crate::nullable::Nullable;

impl<T> Nullable<T> {
    /// Overwrites `slot` with the held value, null included.
    pub fn apply_to(self, slot: &mut Option<T>) {
        *slot = self.into_value();
    }
}

/// Patch helpers for an optional `Nullable` argument.
pub trait NullableExt<T> {
    /// Writes the update into `slot` unless it was not supplied.
    /// Returns whether `slot` was touched.
    fn apply_to(self, slot: &mut Option<T>) -> bool;

    fn is_unchanged(&self) -> bool;
}

impl<T> NullableExt<T> for Option<Nullable<T>> {
    fn apply_to(self, slot: &mut Option<T>) -> bool {
        match self {
            Some(nullable) => {
                nullable.apply_to(slot);
                true
            }
            None => false,
        }
    }

    fn is_unchanged(&self) -> bool {
        self.is_none()
    }
}
