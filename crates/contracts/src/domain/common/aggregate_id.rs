use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of a backend-owned record.
///
/// Ids are always assigned by the backend; the panel only parses them out of
/// responses and formats them back into request paths.
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Path segment / display form of the id
    fn as_string(&self) -> String;

    /// Parse an id taken from a path, query string or form control
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Declares a numeric id newtype that is transparent on the wire.
macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl $crate::domain::common::AggregateId for $name {
            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                s.trim()
                    .parse::<i64>()
                    .map($name)
                    .map_err(|e| format!("Invalid {}: {}", stringify!($name), e))
            }
        }
    };
}

pub(crate) use numeric_id;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_vendor::VendorId;

    #[test]
    fn test_numeric_id_round_trips_through_strings() {
        assert_eq!(VendorId::from_string(" 42 ").unwrap(), VendorId(42));
        assert_eq!(VendorId(7).as_string(), "7");
        assert!(VendorId::from_string("seven").is_err());
    }

    #[test]
    fn test_numeric_id_is_transparent_on_the_wire() {
        let id: VendorId = serde_json::from_str("13").unwrap();
        assert_eq!(id, VendorId(13));
        assert_eq!(serde_json::to_string(&id).unwrap(), "13");
        assert!(serde_json::from_str::<VendorId>("\"13\"").is_err());
    }
}
