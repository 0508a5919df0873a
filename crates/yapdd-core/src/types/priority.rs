use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Record priority as reported by the API.
///
/// The service sends `""` for records without a priority, and either a
/// number or a numeric string otherwise. A missing field or `null` is also
/// "not set". `Priority::from(0)` and `Priority::NONE` are different values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Priority(Option<u16>);

impl Priority {
    /// No priority
    pub const NONE: Self = Self(None);

    /// The priority value, if set
    #[must_use]
    pub const fn get(self) -> Option<u16> {
        self.0
    }

    /// Returns true if a priority is present
    #[must_use]
    pub const fn is_set(self) -> bool {
        self.0.is_some()
    }
}

impl From<u16> for Priority {
    fn from(value: u16) -> Self {
        Self(Some(value))
    }
}

impl From<Option<u16>> for Priority {
    fn from(value: Option<u16>) -> Self {
        Self(value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v}"),
            None => Ok(()),
        }
    }
}

impl Serialize for Priority {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Some(v) => serializer.serialize_some(&v),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PriorityVisitor;

        impl Visitor<'_> for PriorityVisitor {
            type Value = Priority;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an integer, a numeric string, an empty string or null")
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Priority::NONE)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Priority::NONE)
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                u16::try_from(v)
                    .map(Priority::from)
                    .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                u16::try_from(v)
                    .map(Priority::from)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if v.is_empty() {
                    return Ok(Priority::NONE);
                }
                v.parse::<u16>()
                    .map(Priority::from)
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(PriorityVisitor)
    }
}
