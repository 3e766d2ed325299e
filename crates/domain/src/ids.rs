use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Catalog ids are opaque strings in the campaign document (older documents used
// millisecond timestamps), so ids wrap a String rather than a Uuid.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generates a fresh random id.
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Catalog entity IDs
define_id!(WeaponId);
define_id!(GearId);
define_id!(ItemId);
define_id!(SpellId);
define_id!(RaceId);
define_id!(ClassId);
define_id!(NpcId);
define_id!(CreatureId);

// Character IDs
define_id!(CharacterId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_bare_strings() {
        let id = GearId::from("g1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"g1\"");
        let back: GearId = serde_json::from_str("\"g1\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn new_ids_are_unique() {
        assert_ne!(WeaponId::new(), WeaponId::new());
    }
}
