//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are persisted as a bare decimal amount (`"29.50"`), matching the
//! records written by the seeder. The currency is not stored and decodes as
//! the default, [`CurrencyCode::USD`].

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Decimal", into = "Decimal")]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a USD price from an amount in cents.
    ///
    /// ```
    /// use demo_shop_core::Price;
    ///
    /// assert_eq!(Price::from_cents(2950).to_string(), "$29.50");
    /// ```
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self::new(Decimal::new(cents, 2), CurrencyCode::USD)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::default())
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.amount
    }
}

/// Formats as a currency amount: symbol, thousands separators, two decimals.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let digits = format!("{:.2}", rounded.abs());
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        write!(
            f,
            "{sign}{}{}.{fraction}",
            self.currency_code.symbol(),
            group_thousands(whole)
        )
    }
}

fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// ISO 4217 currency codes. The storefront only sells in US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD => "$",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_to_two_decimals() {
        assert_eq!(Price::from_cents(8900).to_string(), "$89.00");
        assert_eq!(Price::from(Decimal::new(5, 0)).to_string(), "$5.00");
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Price::from_cents(123_456_789).to_string(), "$1,234,567.89");
        assert_eq!(Price::from_cents(100_000).to_string(), "$1,000.00");
        assert_eq!(Price::from_cents(99_999).to_string(), "$999.99");
    }

    #[test]
    fn test_display_rounds_half_away_from_zero() {
        assert_eq!(Price::from(Decimal::new(19_995, 3)).to_string(), "$20.00");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Price::from_cents(-500).to_string(), "-$5.00");
    }

    #[test]
    fn test_display_uses_currency_symbol() {
        let price = Price::new(Decimal::new(1050, 2), CurrencyCode::USD);
        assert_eq!(price.to_string(), "$10.50");
        assert_eq!(CurrencyCode::default().symbol(), "$");
    }

    #[test]
    fn test_serializes_as_bare_amount() {
        let json = serde_json::to_string(&Price::from_cents(2950)).unwrap();
        assert_eq!(json, "\"29.50\"");
    }

    #[test]
    fn test_deserializes_from_number_or_string() {
        let from_number: Price = serde_json::from_str("29.5").unwrap();
        let from_string: Price = serde_json::from_str("\"29.50\"").unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(from_number.currency_code, CurrencyCode::USD);
    }
}
