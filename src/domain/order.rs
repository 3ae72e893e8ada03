//! Inbound order requests and their validation.
//!
//! Requests arrive as loosely-typed JSON: numeric fields may be JSON numbers
//! or numeric strings. Everything is normalized into an [`OrderRequest`]
//! before any conversion to token units happens.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;
use serde_json::{Map, Value};

use super::error::ValidationError;
use super::money::{Amount, Price, Token};

/// Default order lifetime on the venue, in minutes.
pub const DEFAULT_EXPIRY_MINUTES: u32 = 1;

/// Default delay before the order is signed and executed, in minutes.
pub const DEFAULT_AFTER_MINUTES: u32 = 0;

/// Order side, from the perspective of SOL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Spend USDC to buy SOL.
    Buy,
    /// Sell SOL for USDC.
    Sell,
}

impl Side {
    /// Token given up by the maker.
    #[must_use]
    pub const fn input_token(self) -> Token {
        match self {
            Self::Buy => Token::Usdc,
            Self::Sell => Token::Sol,
        }
    }

    /// Token received by the maker.
    #[must_use]
    pub const fn output_token(self) -> Token {
        match self {
            Self::Buy => Token::Sol,
            Self::Sell => Token::Usdc,
        }
    }
}

impl FromStr for Side {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("buy") {
            Ok(Self::Buy)
        } else if trimmed.eq_ignore_ascii_case("sell") {
            Ok(Self::Sell)
        } else {
            Err(ValidationError::InvalidSide {
                side: s.to_string(),
            })
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// A validated order request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    /// USD amount for buys, SOL amount for sells.
    pub amount: Amount,
    pub side: Side,
    /// USD per SOL.
    pub price: Price,
    /// Order time-to-live on the venue, in minutes.
    pub expiry_minutes: u32,
    /// Delay before execution, in minutes.
    pub after_minutes: u32,
}

impl OrderRequest {
    /// Parse an order request from a JSON body.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if a required field is missing, a field
    /// cannot be parsed, or `side` is not buy/sell.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let fields = body.as_object().ok_or(ValidationError::NotAnObject)?;

        let amount = decimal_field(fields, "amount")?;
        let side = string_field(fields, "side")?;
        let price = decimal_field(fields, "price")?;
        let expiry_minutes = minutes_field(fields, "expiry", DEFAULT_EXPIRY_MINUTES)?;
        let after_minutes = minutes_field(fields, "aftertime", DEFAULT_AFTER_MINUTES)?;

        Ok(Self {
            amount,
            side: side.parse()?,
            price,
            expiry_minutes,
            after_minutes,
        })
    }

    /// Delay before the execution job fires, in seconds.
    #[must_use]
    pub fn delay_seconds(&self) -> u64 {
        u64::from(self.after_minutes) * 60
    }

    /// Delay before the execution job fires.
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_seconds())
    }

    /// Absolute unix deadline after which the venue cancels the order.
    #[must_use]
    pub fn expires_at(&self, now_unix: i64) -> i64 {
        now_unix.saturating_add(i64::from(self.expiry_minutes) * 60)
    }
}

fn decimal_field(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<Decimal, ValidationError> {
    let invalid = |reason: String| ValidationError::InvalidField { field, reason };

    match fields.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField { field }),
        Some(Value::Number(n)) => parse_decimal(&n.to_string()).map_err(invalid),
        Some(Value::String(s)) => parse_decimal(s.trim()).map_err(invalid),
        Some(other) => Err(invalid(format!("expected a number, got {other}"))),
    }
}

fn parse_decimal(s: &str) -> Result<Decimal, String> {
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|e| format!("'{s}' is not a decimal number: {e}"))
}

fn string_field<'a>(
    fields: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    match fields.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField { field }),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(ValidationError::InvalidField {
            field,
            reason: format!("expected a string, got {other}"),
        }),
    }
}

fn minutes_field(
    fields: &Map<String, Value>,
    field: &'static str,
    default: u32,
) -> Result<u32, ValidationError> {
    let invalid = |reason: String| ValidationError::InvalidField { field, reason };

    let minutes = match fields.get(field) {
        None | Some(Value::Null) => return Ok(default),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(whole) => whole,
            // Fractional minutes truncate toward zero.
            None => {
                return float_minutes(n.as_f64())
                    .ok_or_else(|| invalid(format!("{n} is out of range")));
            }
        },
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|e| invalid(format!("'{s}' is not an integer: {e}")))?,
        Some(other) => return Err(invalid(format!("expected an integer, got {other}"))),
    };

    u32::try_from(minutes).map_err(|_| invalid(format!("{minutes} is out of range")))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn float_minutes(value: Option<f64>) -> Option<u32> {
    let truncated = value.filter(|v| v.is_finite())?.trunc();
    (0.0..=f64::from(u32::MAX))
        .contains(&truncated)
        .then_some(truncated as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn side_is_case_insensitive_and_trimmed() {
        for raw in ["buy", "BUY", "Buy", "  buy "] {
            assert_eq!(raw.parse::<Side>().unwrap(), Side::Buy);
        }
        assert_eq!("SeLL".parse::<Side>().unwrap(), Side::Sell);
    }

    #[test]
    fn side_rejects_other_values() {
        let err = "hold".parse::<Side>().unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidSide {
                side: "hold".into()
            }
        );
    }

    #[test]
    fn side_selects_input_and_output_tokens() {
        assert_eq!(Side::Buy.input_token(), Token::Usdc);
        assert_eq!(Side::Buy.output_token(), Token::Sol);
        assert_eq!(Side::Sell.input_token(), Token::Sol);
        assert_eq!(Side::Sell.output_token(), Token::Usdc);
    }

    #[test]
    fn parses_numbers_and_applies_defaults() {
        let request =
            OrderRequest::from_json(&json!({"amount": 100, "side": "buy", "price": 136.5}))
                .unwrap();

        assert_eq!(request.amount, dec!(100));
        assert_eq!(request.price, dec!(136.5));
        assert_eq!(request.side, Side::Buy);
        assert_eq!(request.expiry_minutes, DEFAULT_EXPIRY_MINUTES);
        assert_eq!(request.after_minutes, DEFAULT_AFTER_MINUTES);
        assert_eq!(request.delay_seconds(), 0);
    }

    #[test]
    fn accepts_numeric_strings() {
        let request = OrderRequest::from_json(&json!({
            "amount": "2.5",
            "side": "Sell",
            "price": " 150 ",
            "expiry": "5",
            "aftertime": "3"
        }))
        .unwrap();

        assert_eq!(request.amount, dec!(2.5));
        assert_eq!(request.price, dec!(150));
        assert_eq!(request.expiry_minutes, 5);
        assert_eq!(request.delay_seconds(), 180);
        assert_eq!(request.delay(), Duration::from_secs(180));
    }

    #[test]
    fn null_optional_fields_fall_back_to_defaults() {
        let request = OrderRequest::from_json(&json!({
            "amount": 1, "side": "buy", "price": 1, "expiry": null, "aftertime": null
        }))
        .unwrap();

        assert_eq!(request.expiry_minutes, 1);
        assert_eq!(request.after_minutes, 0);
    }

    #[test]
    fn missing_required_field_is_reported() {
        let err = OrderRequest::from_json(&json!({"side": "buy", "price": 150})).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "amount" });
    }

    #[test]
    fn unparseable_amount_is_reported() {
        let err =
            OrderRequest::from_json(&json!({"amount": "lots", "side": "buy", "price": 150}))
                .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidField { field: "amount", .. }));
    }

    #[test]
    fn negative_minutes_are_rejected() {
        for aftertime in [json!(-1), json!(-2.5), json!("-1")] {
            let err = OrderRequest::from_json(&json!({
                "amount": 1, "side": "buy", "price": 1, "aftertime": aftertime
            }))
            .unwrap_err();
            assert!(matches!(err, ValidationError::InvalidField { field: "aftertime", .. }));
        }
    }

    #[test]
    fn float_minutes_truncate_toward_zero() {
        let request = OrderRequest::from_json(&json!({
            "amount": 1, "side": "buy", "price": 1, "expiry": 5.0, "aftertime": 1.5
        }))
        .unwrap();

        assert_eq!(request.expiry_minutes, 5);
        assert_eq!(request.after_minutes, 1);
        assert_eq!(request.delay_seconds(), 60);

        let below_one = OrderRequest::from_json(&json!({
            "amount": 1, "side": "buy", "price": 1, "aftertime": -0.5
        }))
        .unwrap();
        assert_eq!(below_one.after_minutes, 0);
    }

    #[test]
    fn fractional_minute_strings_are_rejected() {
        let err = OrderRequest::from_json(&json!({
            "amount": 1, "side": "buy", "price": 1, "expiry": "1.5"
        }))
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidField { field: "expiry", .. }));
    }

    #[test]
    fn huge_float_minutes_are_rejected() {
        let err = OrderRequest::from_json(&json!({
            "amount": 1, "side": "buy", "price": 1, "expiry": 1e300
        }))
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidField { field: "expiry", .. }));
    }

    #[test]
    fn non_object_body_is_rejected() {
        let err = OrderRequest::from_json(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err, ValidationError::NotAnObject);
    }

    #[test]
    fn expiry_is_relative_to_now() {
        let request = OrderRequest::from_json(&json!({
            "amount": 2, "side": "sell", "price": 150, "expiry": 5
        }))
        .unwrap();

        assert_eq!(request.expires_at(1_700_000_000), 1_700_000_300);
    }
}
