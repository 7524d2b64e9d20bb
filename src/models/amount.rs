//! JSON encoding of monetary amounts.
//!
//! Amounts travel as JSON numbers and are held as `Decimal`. Accepted values
//! have at most two decimal places and stay below `MAX_AMOUNT`, so they
//! fit in 15 significant digits and survive the trip through an f64 in both
//! directions without changing.
//!
//! Use with `#[serde(with = "crate::models::amount")]`.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serializer, de::Error as _, ser::Error as _};

/// Most decimal places an amount may carry.
pub const MAX_SCALE: u32 = 2;

/// Exclusive upper bound for amounts and balances: 10^13.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_316_134_912, 2_328, 0, false, 0);

/// Convert a parsed JSON number into an exact `Decimal`.
///
/// The number goes through its shortest decimal representation, so `0.1`
/// becomes exactly `0.1`. Negative values and zero are passed through; the
/// services decide whether they are acceptable.
pub fn from_json_number(value: f64) -> Result<Decimal, String> {
    if !value.is_finite() || value.abs() >= 1e13 {
        return Err("amount exceeds the supported range".to_string());
    }

    let too_precise = || format!("amount must have at most {MAX_SCALE} decimal places");

    let amount = Decimal::from_str(&value.to_string()).map_err(|_| too_precise())?;
    // A tiny non-zero input can round to zero while parsing
    if amount.normalize().scale() > MAX_SCALE || (amount.is_zero() && value != 0.0) {
        return Err(too_precise());
    }

    Ok(amount.normalize())
}

/// Convert an amount to the f64 written on the wire.
///
/// Parses the decimal text, which yields the nearest f64 for every amount
/// within bounds.
pub fn to_json_number(amount: Decimal) -> Result<f64, std::num::ParseFloatError> {
    amount.to_string().parse()
}

pub fn serialize<S>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let value = to_json_number(*amount).map_err(S::Error::custom)?;
    serializer.serialize_f64(value)
}

/// Accepts JSON numbers only; strings such as `"5"` are rejected.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    from_json_number(value).map_err(D::Error::custom)
}
