//! # Stock Items
//!
//! A `Stock` is one line of the inventory: what it is, how many are on hand,
//! how fast it gets used up, and when it was created / last touched.
//!
//! Stocks are treated as values. Operations that change something return a
//! new `Stock` rather than mutating in place, so the dispatcher decides when
//! a change is actually committed to the inventory.

use crate::core::date::Date;

/// Name given to stocks created with an empty name.
pub const PLACEHOLDER_NAME: &str = "Unnamed item";

#[derive(Debug, Clone, PartialEq)]
pub struct Stock {
    pub name: String,
    pub amount: u32,
    /// Units per day, derived from observed usage.
    pub consumption_rate: f32,
    /// Units per day, as guessed by the user.
    pub estimated_consumption_rate: f32,
    pub creation_date: Date,
    pub last_modified: Date,
}

impl Stock {
    pub fn new(
        name: impl Into<String>,
        amount: u32,
        consumption_rate: f32,
        creation_date: Date,
        last_modified: Date,
    ) -> Self {
        let name = name.into();
        let name = if name.trim().is_empty() {
            PLACEHOLDER_NAME.to_string()
        } else {
            name
        };
        Self {
            name,
            amount,
            consumption_rate: non_negative(consumption_rate),
            estimated_consumption_rate: 0.0,
            creation_date,
            last_modified,
        }
    }

    /// A fresh, empty stock created today.
    pub fn stub(name: impl Into<String>, today: Date) -> Self {
        Self::new(name, 0, 0.0, today, today)
    }

    pub fn with_estimated_rate(mut self, rate: f32) -> Self {
        self.estimated_consumption_rate = non_negative(rate);
        self
    }

    pub fn age_in_days(&self, reference: Date) -> i64 {
        reference.days_since(self.creation_date)
    }

    pub fn days_since_modified(&self, reference: Date) -> i64 {
        reference.days_since(self.last_modified)
    }

    /// Returns a copy with `amount` shifted by `delta`, floored at zero.
    ///
    /// `last_modified` is left alone; stamping it is a separate, confirmed step
    /// (see [`Stock::touch`]).
    pub fn adjust_amount(&self, delta: i64) -> Stock {
        let amount = (i64::from(self.amount) + delta).clamp(0, i64::from(u32::MAX)) as u32;
        Stock {
            amount,
            ..self.clone()
        }
    }

    /// Returns a copy with `last_modified` set to `today`.
    pub fn touch(&self, today: Date) -> Stock {
        Stock {
            last_modified: today,
            ..self.clone()
        }
    }

    /// The rate used for projections: observed if known, otherwise the estimate.
    pub fn effective_rate(&self) -> f32 {
        if self.consumption_rate > 0.0 {
            self.consumption_rate
        } else {
            self.estimated_consumption_rate
        }
    }

    /// Days until the stock runs out at the effective rate.
    pub fn days_remaining(&self) -> Option<f32> {
        let rate = self.effective_rate();
        (rate > 0.0).then(|| self.amount as f32 / rate)
    }
}

fn non_negative(rate: f32) -> f32 {
    if rate.is_nan() { 0.0 } else { rate.max(0.0) }
}
