//! JSON helpers for big amounts.
//!
//! Amounts are written as decimal strings so values above 2^53 survive
//! JavaScript clients. Reading accepts either a string or a plain integer.

/// `#[serde(with = "amount_serde")]` for `Amount` fields
pub mod amount_serde {
    use crate::Amount;
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S>(value: &Amount, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Amount, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AmountVisitor)
    }

    struct AmountVisitor;

    impl<'de> Visitor<'de> for AmountVisitor {
        type Value = Amount;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a non-negative integer or a decimal string")
        }

        fn visit_str<E>(self, text: &str) -> Result<Amount, E>
        where
            E: de::Error,
        {
            text.trim()
                .parse::<Amount>()
                .map_err(|e| E::custom(format!("invalid amount '{}': {}", text, e)))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Amount, E>
        where
            E: de::Error,
        {
            Ok(Amount::from(value))
        }

        fn visit_u128<E>(self, value: u128) -> Result<Amount, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<Amount, E>
        where
            E: de::Error,
        {
            Amount::try_from(value)
                .map_err(|_| E::custom(format!("invalid amount {}: must not be negative", value)))
        }

        // JSON integers past u64::MAX arrive here as floats and have already lost precision
        fn visit_f64<E>(self, value: f64) -> Result<Amount, E>
        where
            E: de::Error,
        {
            Err(E::custom(format!(
                "invalid amount {}: amounts above u64::MAX must be strings",
                value
            )))
        }
    }
}
