//! # Merge-Patch Machinery
//!
//! One shared mechanism for non-destructive updates to sparse style
//! records. Every style category (typography, spacing, background,
//! overlay, animation) merges through the same code path, so the merge
//! rule cannot drift between categories.
//!
//! ## Merge rule
//!
//! For each field in a patch:
//! - absent (`Keep`) preserves the current value
//! - explicit `null` (`Clear`) deletes the value
//! - any other value (`Set`) overwrites it
//!
//! A record whose fields are all unset after merging collapses to
//! "no record" on the owning block, never to an empty record.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One patch cell for an optional field.
///
/// The JSON mapping follows merge-patch semantics: a key that is absent
/// deserializes to `Keep`, `null` to `Clear`, anything else to `Set`.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    /// Field absent from the patch; current value is preserved.
    Keep,
    /// Field explicitly nulled; current value is deleted.
    Clear,
    /// Field present; current value is overwritten.
    Set(T),
}

impl<T> Field<T> {
    /// Apply this cell to the current value slot.
    pub fn apply(self, slot: &mut Option<T>) {
        match self {
            Field::Keep => {}
            Field::Clear => *slot = None,
            Field::Set(value) => *slot = Some(value),
        }
    }

    pub fn is_keep(&self) -> bool {
        matches!(self, Field::Keep)
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Keep
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Keep is only reachable when the caller forgot
            // `skip_serializing_if = "Field::is_keep"`; emitting null
            // keeps the output valid JSON either way.
            Field::Keep | Field::Clear => serializer.serialize_none(),
            Field::Set(value) => serializer.serialize_some(value),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Field::Set(value),
            None => Field::Clear,
        })
    }
}

/// A sparse record that accepts merge-patches.
pub trait MergePatch: Default {
    type Patch;

    /// Merge a patch into this record, field by field.
    fn merge(&mut self, patch: Self::Patch);

    /// True when every field is unset.
    fn is_empty(&self) -> bool;
}

/// Merge a patch into an optional sub-record slot.
///
/// A missing record is treated as empty for the merge; an all-unset
/// result collapses back to `None`.
pub fn merge_slot<R: MergePatch>(slot: &mut Option<R>, patch: R::Patch) {
    let mut record = slot.take().unwrap_or_default();
    record.merge(patch);
    *slot = if record.is_empty() { None } else { Some(record) };
}

/// Declare a sparse style record together with its patch type and
/// `MergePatch` impl. Record and patch share one field list, so the
/// two cannot fall out of sync.
macro_rules! sparse_record {
    (
        $(#[$record_meta:meta])*
        $record:ident / $patch:ident {
            $( $(#[$field_meta:meta])* $field:ident : $ty:ty ),+ $(,)?
        }
    ) => {
        $(#[$record_meta])*
        #[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $record {
            $(
                $(#[$field_meta])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )+
        }

        #[doc = concat!("Merge-patch for [`", stringify!($record), "`].")]
        #[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $patch {
            $(
                #[serde(skip_serializing_if = "Field::is_keep")]
                pub $field: $crate::merge::Field<$ty>,
            )+
        }

        impl $patch {
            /// True when no field would change anything.
            pub fn is_noop(&self) -> bool {
                $( self.$field.is_keep() )&&+
            }
        }

        impl $crate::merge::MergePatch for $record {
            type Patch = $patch;

            fn merge(&mut self, patch: $patch) {
                $( patch.$field.apply(&mut self.$field); )+
            }

            fn is_empty(&self) -> bool {
                $( self.$field.is_none() )&&+
            }
        }
    };
}

pub(crate) use sparse_record;
