use {
    bigdecimal::BigDecimal,
    serde::{Deserializer, Serializer, de},
    serde_with::{DeserializeAs, SerializeAs},
    std::{fmt, str::FromStr},
};

/// Serde adapter for exact decimal amounts.
///
/// Deserializes from either a decimal string (`"94.97"`) or a plain number
/// (`94.97`, `0`). Floating point numbers are converted through their
/// shortest round-tripping representation, so `94.97` is read as exactly
/// `94.97` and not as the nearest binary fraction.
///
/// Always serializes as a decimal string, so that no precision is lost when
/// the value is written back.
///
/// Strings in scientific notation are limited to exponents within
/// ±[`MAX_EXPONENT`].
pub struct DecimalOrNumber;

pub const MAX_EXPONENT: i64 = 10_000;

impl SerializeAs<BigDecimal> for DecimalOrNumber {
    fn serialize_as<S>(source: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(source)
    }
}

impl<'de> DeserializeAs<'de, BigDecimal> for DecimalOrNumber {
    fn deserialize_as<D>(deserializer: D) -> Result<BigDecimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Visitor;

        impl de::Visitor<'_> for Visitor {
            type Value = BigDecimal;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a decimal number or a string containing one")
            }

            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let s = s.trim();

                // `bigdecimal` overflows on exponents close to `i64` bounds.
                if let Some((_, exponent)) = s.split_once(['e', 'E']) {
                    let in_range = exponent
                        .parse::<i64>()
                        .is_ok_and(|exponent| exponent.abs() <= MAX_EXPONENT);
                    if !in_range {
                        return Err(E::custom(format!(
                            "decimal exponent in {s:?} is outside of ±{MAX_EXPONENT}"
                        )));
                    }
                }

                BigDecimal::from_str(s).map_err(|err| {
                    E::custom(format!("failed to parse {s:?} as a decimal: {err}"))
                })
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(BigDecimal::from(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(BigDecimal::from(v))
            }

            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if !v.is_finite() {
                    return Err(E::custom(format!("{v} is not a finite decimal")));
                }
                self.visit_str(&v.to_string())
            }
        }

        deserializer.deserialize_any(Visitor)
    }
}
