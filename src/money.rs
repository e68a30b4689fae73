//! Money Helpers
//!
//! Prices are kept as whole cents so totals sum exactly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Currency markers accepted in front of a typed price
const CURRENCY_PREFIXES: &[&str] = &["Rs.", "Rs", "₹", "$"];

/// Largest typed price accepted, in cents
pub const MAX_PRICE_CENTS: i64 = 1_000_000_000_000;

/// Amount in hundredths of the currency unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cents(pub i64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Cents {
    type Output = Cents;

    fn add(self, rhs: Cents) -> Cents {
        Cents(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Cents {
    fn add_assign(&mut self, rhs: Cents) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sum for Cents {
    fn sum<I: Iterator<Item = Cents>>(iter: I) -> Cents {
        iter.fold(Cents::ZERO, Add::add)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// Parse a typed price such as `10`, `5.50`, `$1,200.00` or `Rs 99`.
///
/// Returns `None` for empty, non-numeric, non-finite, or out-of-range
/// input (beyond `MAX_PRICE_CENTS`), and for a doubled sign.
pub fn parse_price(text: &str) -> Option<Cents> {
    let mut rest = text.trim();
    let negative = rest.starts_with('-');
    if negative {
        rest = rest[1..].trim_start();
    }
    for prefix in CURRENCY_PREFIXES {
        if let Some(stripped) = rest.strip_prefix(prefix) {
            rest = stripped.trim_start();
            break;
        }
    }
    let cleaned: String = rest.chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() || cleaned.starts_with(|c: char| c == '-' || c == '+') {
        return None;
    }

    let value: f64 = cleaned.parse().ok()?;
    let scaled = (value * 100.0).round();
    if !scaled.is_finite() || scaled > MAX_PRICE_CENTS as f64 {
        return None;
    }
    let cents = scaled as i64;
    Some(Cents(if negative { -cents } else { cents }))
}

/// Price guard: anything unparseable contributes zero
pub fn price_or_zero(text: &str) -> Cents {
    parse_price(text).unwrap_or(Cents::ZERO)
}

/// Format with two decimals and a currency symbol, e.g. `$15.50`
pub fn format_money(amount: Cents, symbol: &str) -> String {
    let sign = if amount.0 < 0 { "-" } else { "" };
    let abs = amount.0.unsigned_abs();
    format!("{}{}{}.{:02}", sign, symbol, abs / 100, abs % 100)
}
