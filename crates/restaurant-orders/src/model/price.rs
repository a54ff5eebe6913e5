use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A non-negative amount of money, in the smallest currency unit (cents).
///
/// Integer cents keep totals exact: `$12.99 + $8.99` is exactly `$21.98`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// `None` if the result does not fit.
    pub fn checked_add(self, rhs: Price) -> Option<Price> {
        self.0.checked_add(rhs.0).map(Price)
    }

    /// Adds up `prices`, or `None` as soon as the running total overflows.
    pub fn checked_sum<I: IntoIterator<Item = Price>>(prices: I) -> Option<Price> {
        prices
            .into_iter()
            .try_fold(Price::ZERO, Price::checked_add)
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}
