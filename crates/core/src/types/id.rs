//! Newtype IDs for type-safe catalog references.
//!
//! Use the `define_id!` macro to create string ID wrappers that prevent
//! accidentally mixing restaurant ids with menu item ids.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - A `placeholder()` constructor used when stored data lacks the id
/// - `From<&str>`, `From<String>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use foodhub_core::define_id;
/// define_id!(StallId, "s");
/// define_id!(DishId, "d");
///
/// let stall = StallId::new("s1");
/// let dish = DishId::new("s1");
/// assert_eq!(stall.as_str(), dish.as_str());
///
/// // These are different types, so this won't compile:
/// // let _: StallId = dish;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $placeholder:literal) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Value used when a stored record carries no usable id.
            pub const PLACEHOLDER: &'static str = $placeholder;

            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// The fallback ID for records missing this field.
            #[must_use]
            pub fn placeholder() -> Self {
                Self(Self::PLACEHOLDER.to_owned())
            }

            /// Get the underlying string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(RestaurantId, "r");
define_id!(ItemId, "x");

/// Unique key of a cart line.
///
/// Derived from the restaurant and item ids as `"{restaurant}__{item}"`, but a
/// stored key is kept as-is even when it does not follow that shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineKey(String);

impl LineKey {
    /// Separator between the restaurant id and the item id.
    pub const SEPARATOR: &'static str = "__";

    /// Wrap an existing key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Derive the key for a restaurant/item pair.
    #[must_use]
    pub fn derive(restaurant: &RestaurantId, item: &ItemId) -> Self {
        Self(format!("{restaurant}{}{item}", Self::SEPARATOR))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LineKey {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl std::str::FromStr for LineKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_key() {
        let key = LineKey::derive(&RestaurantId::new("r7"), &ItemId::new("m3"));
        assert_eq!(key.as_str(), "r7__m3");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(RestaurantId::placeholder().as_str(), "r");
        assert_eq!(ItemId::placeholder().as_str(), "x");
        assert_eq!(
            LineKey::derive(&RestaurantId::placeholder(), &ItemId::placeholder()).as_str(),
            "r__x"
        );
    }

    #[test]
    fn test_serde_transparent() {
        let id = RestaurantId::new("biryani-house");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"biryani-house\"");

        let parsed: RestaurantId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_key_from_str() {
        let key: LineKey = "custom-key".parse().unwrap();
        assert_eq!(key.to_string(), "custom-key");
    }
}
