use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::PaymentConfig;

/// Client for the external payment-intent provider (Stripe wire format).
/// The provider's internals are out of scope; this crate only creates
/// intents and hands the client secret back to the caller.
#[derive(Clone)]
pub struct PaymentIntentClient {
    http: reqwest::Client,
    base_url: String,
    secret_key: String,
    currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("payment provider secret key is not configured")]
    NotConfigured,

    #[error("provider error: {0}")]
    Provider(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl PaymentIntentClient {
    pub fn from_config(config: &PaymentConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            secret_key: config.secret_key.clone(),
            currency: config.currency.clone(),
        }
    }

    /// Create a payment intent for the given amount (major currency units).
    pub async fn create(&self, amount: Decimal) -> Result<PaymentIntent, PaymentError> {
        if self.secret_key.is_empty() {
            return Err(PaymentError::NotConfigured);
        }

        let minor_units = to_minor_units(amount)?;

        let response = self
            .http
            .post(format!("{}/v1/payment_intents", self.base_url))
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&[
                ("amount", minor_units.to_string()),
                ("currency", self.currency.clone()),
                ("payment_method_types[]", "card".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PaymentError::Provider(format!("{}: {}", status, body)));
        }

        let intent = response.json::<PaymentIntent>().await?;
        Ok(intent)
    }
}

/// Convert a major-unit amount into the provider's integer minor units.
/// Rejects non-positive amounts and sub-cent precision.
fn to_minor_units(amount: Decimal) -> Result<i64, PaymentError> {
    if amount <= Decimal::ZERO {
        return Err(PaymentError::InvalidAmount(format!(
            "amount must be positive, got {}",
            amount
        )));
    }

    let minor = amount * Decimal::from(100);
    if minor.fract() != Decimal::ZERO {
        return Err(PaymentError::InvalidAmount(format!(
            "amount {} has sub-cent precision",
            amount
        )));
    }

    minor
        .to_i64()
        .ok_or_else(|| PaymentError::InvalidAmount(format!("amount {} out of range", amount)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn converts_major_to_minor_units() {
        let amount = Decimal::from_str("12.34").unwrap();
        assert_eq!(to_minor_units(amount).unwrap(), 1234);
    }

    #[test]
    fn whole_amounts_convert() {
        assert_eq!(to_minor_units(Decimal::from(50)).unwrap(), 5000);
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert!(to_minor_units(Decimal::ZERO).is_err());
        assert!(to_minor_units(Decimal::from(-5)).is_err());
    }

    #[test]
    fn rejects_sub_cent_precision() {
        let amount = Decimal::from_str("0.001").unwrap();
        assert!(matches!(
            to_minor_units(amount),
            Err(PaymentError::InvalidAmount(_))
        ));
    }
}
