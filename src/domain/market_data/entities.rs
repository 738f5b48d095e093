use super::value_objects::{DateKey, Price, Timestamp};
use crate::domain::errors::AppError;
use crate::time_utils::date_key;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Domain entity - one day of the history series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: DateKey,
    pub price: Price,
}

impl PricePoint {
    pub fn new(date: DateKey, price: Price) -> Self {
        Self { date, price }
    }
}

/// Domain entity - date-keyed daily price series.
///
/// Dates keep the position of their first appearance. A later sample for
/// a date already present replaces the stored price.
#[derive(Debug, Clone, Default)]
pub struct PriceHistory {
    points: Vec<PricePoint>,
    index: HashMap<DateKey, usize>,
}

impl PriceHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reshape raw `[epoch-ms, price]` samples into the daily series.
    pub fn from_samples<I>(samples: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = (Timestamp, Price)>,
    {
        let mut history = Self::new();
        for (timestamp, price) in samples {
            let date = date_key(timestamp).ok_or_else(|| {
                AppError::ParseError(format!("timestamp {} is out of range", timestamp.value()))
            })?;
            history.insert(date, price);
        }
        Ok(history)
    }

    pub fn insert(&mut self, date: DateKey, price: Price) {
        match self.index.get(&date) {
            Some(&slot) => self.points[slot].price = price,
            None => {
                self.index.insert(date.clone(), self.points.len());
                self.points.push(PricePoint::new(date, price));
            }
        }
    }

    pub fn get(&self, date: &DateKey) -> Option<Price> {
        self.index.get(date).map(|&slot| self.points[slot].price)
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn labels(&self) -> impl Iterator<Item = &DateKey> {
        self.points.iter().map(|p| &p.date)
    }

    pub fn prices(&self) -> impl Iterator<Item = Price> + '_ {
        self.points.iter().map(|p| p.price)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
