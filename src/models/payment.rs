use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Surrogate key assigned by the store when a payment is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct PaymentId(pub i64);

impl fmt::Display for PaymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PaymentId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(PaymentId)
    }
}

/// A row of the `payments` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Payment {
    pub id: PaymentId,
    pub amount: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a payment. Carries no id; the store assigns one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewPayment {
    /// Must be a JSON number; quoted amounts are rejected.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_payment_accepts_json_number_amount() {
        let payment: NewPayment =
            serde_json::from_str(r#"{"amount":100.5,"status":"initiated"}"#).unwrap();
        assert_eq!(payment.amount, Decimal::new(1005, 1));
        assert_eq!(payment.status, "initiated");
    }

    #[test]
    fn test_new_payment_accepts_integer_amount() {
        let payment: NewPayment =
            serde_json::from_str(r#"{"amount":25,"status":"initiated"}"#).unwrap();
        assert_eq!(payment.amount, Decimal::new(25, 0));
    }

    #[test]
    fn test_new_payment_rejects_quoted_amount() {
        let result =
            serde_json::from_str::<NewPayment>(r#"{"amount":"100.5","status":"initiated"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_payment_rejects_missing_status() {
        assert!(serde_json::from_str::<NewPayment>(r#"{"amount":10}"#).is_err());
    }

    #[test]
    fn test_payment_id_parsing() {
        assert_eq!("12".parse::<PaymentId>(), Ok(PaymentId(12)));
        assert!("abc".parse::<PaymentId>().is_err());
        assert!("".parse::<PaymentId>().is_err());
        assert!("1.5".parse::<PaymentId>().is_err());
    }

    #[test]
    fn test_payment_id_serializes_as_plain_integer() {
        assert_eq!(serde_json::to_string(&PaymentId(7)).unwrap(), "7");
    }
}
