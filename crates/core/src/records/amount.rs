//! Lenient decoding for stored monetary amounts.
//!
//! Amounts come from loosely typed documents. Non-negative numbers and numeric
//! strings are accepted; anything else, negative values included, decodes as
//! zero and is logged, so one bad record never poisons an aggregate.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserializer;
use tracing::warn;

/// Deserializes an amount, falling back to zero for malformed input.
///
/// Use with `#[serde(default, deserialize_with = "amount::lenient")]`.
pub fn lenient<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientAmountVisitor)
}

/// Parses decimal text, accepting plain and scientific notation.
fn parse_decimal(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

struct LenientAmountVisitor;

impl LenientAmountVisitor {
    fn malformed(kind: &str) -> Decimal {
        warn!(kind, "Malformed amount decoded as zero");
        Decimal::ZERO
    }

    fn non_negative(value: Decimal) -> Decimal {
        if value < Decimal::ZERO {
            warn!(%value, "Negative amount decoded as zero");
            Decimal::ZERO
        } else {
            value
        }
    }
}

impl<'de> Visitor<'de> for LenientAmountVisitor {
    type Value = Decimal;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number or numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
        Ok(Self::non_negative(Decimal::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
        Ok(Decimal::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
        Ok(Decimal::try_from(v).map_or_else(
            |_| Self::malformed("non-finite number"),
            Self::non_negative,
        ))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
        Ok(parse_decimal(v).map_or_else(
            || Self::malformed("non-numeric string"),
            Self::non_negative,
        ))
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Decimal, E> {
        Ok(Self::malformed("boolean"))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Decimal, E> {
        Ok(Self::malformed("null"))
    }

    fn visit_none<E: de::Error>(self) -> Result<Decimal, E> {
        Ok(Self::malformed("null"))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Decimal, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Decimal, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Self::malformed("array"))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Decimal, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Self::malformed("object"))
    }
}
