//! Currency-checked monetary amounts.
//!
//! Amounts are held as minor units (hundredths) so that sums stay exact once a
//! value has been rounded on the way in. Every currency uses two decimals.
//! Rounding happens in decimal, half away from zero.

use core::str::FromStr;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{DomainResult, ValidationError};
use crate::value_object::ValueObject;

const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// Accepted currency codes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Jpy,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Eur, Currency::Gbp, Currency::Jpy];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
        }
    }
}

impl ValueObject for Currency {}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|c| c.code() == s)
            .ok_or_else(|| ValidationError::new(format!("Unsupported currency code: {s}")))
    }
}

/// Non-negative amount in a single currency.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyParts")]
pub struct Money {
    minor_units: i64,
    currency: Currency,
}

/// Wire shape of [`Money`]; validated on the way in.
#[derive(Deserialize)]
struct MoneyParts {
    minor_units: i64,
    currency: Currency,
}

impl TryFrom<MoneyParts> for Money {
    type Error = ValidationError;

    fn try_from(parts: MoneyParts) -> Result<Self, Self::Error> {
        Money::from_minor_units(parts.minor_units, parts.currency)
    }
}

impl Money {
    /// Build from a decimal amount, rounding half-up to two decimals.
    pub fn new(amount: f64, currency: Currency) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(ValidationError::new("Money amount must be a finite number"));
        }
        if amount < 0.0 {
            return Err(ValidationError::new("Money amount cannot be negative"));
        }
        let minor_units = to_decimal(amount)?
            .checked_mul(Decimal::from(MINOR_UNITS_PER_MAJOR))
            .ok_or_else(too_large)
            .and_then(round_to_minor_units)?;
        Ok(Self {
            minor_units,
            currency,
        })
    }

    pub fn from_minor_units(minor_units: i64, currency: Currency) -> DomainResult<Self> {
        if minor_units < 0 {
            return Err(ValidationError::new("Money amount cannot be negative"));
        }
        Ok(Self {
            minor_units,
            currency,
        })
    }

    pub fn zero(currency: Currency) -> Self {
        Self {
            minor_units: 0,
            currency,
        }
    }

    pub fn amount(&self) -> f64 {
        self.minor_units as f64 / MINOR_UNITS_PER_MAJOR as f64
    }

    pub fn minor_units(&self) -> i64 {
        self.minor_units
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn add(&self, other: &Money) -> DomainResult<Money> {
        if self.currency != other.currency {
            return Err(ValidationError::new(format!(
                "Cannot add money in different currencies: {} and {}",
                self.currency, other.currency
            )));
        }
        let minor_units = self
            .minor_units
            .checked_add(other.minor_units)
            .ok_or_else(too_large)?;
        Ok(Money {
            minor_units,
            currency: self.currency,
        })
    }

    pub fn multiply(&self, factor: f64) -> DomainResult<Money> {
        if !factor.is_finite() {
            return Err(ValidationError::new("Multiplication factor must be a finite number"));
        }
        if factor < 0.0 {
            return Err(ValidationError::new("Multiplication factor cannot be negative"));
        }
        let minor_units = Decimal::from(self.minor_units)
            .checked_mul(to_decimal(factor)?)
            .ok_or_else(too_large)
            .and_then(round_to_minor_units)?;
        Ok(Money {
            minor_units,
            currency: self.currency,
        })
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} {}.{:02}",
            self.currency,
            self.minor_units / MINOR_UNITS_PER_MAJOR,
            self.minor_units % MINOR_UNITS_PER_MAJOR
        )
    }
}

fn too_large() -> ValidationError {
    ValidationError::new("Money amount is too large")
}

// Callers have already rejected non-finite input; `None` here means out of range.
fn to_decimal(value: f64) -> DomainResult<Decimal> {
    Decimal::from_f64(value).ok_or_else(too_large)
}

fn round_to_minor_units(scaled: Decimal) -> DomainResult<i64> {
    scaled
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(too_large)
}
