//! Stock levels: on-hand quantity plus its inclusive bounds.

use serde::{Deserialize, Serialize};

use partstock_core::{DomainError, DomainResult, ValueObject};

/// Validated `(stock, min, max)` triple.
///
/// Invariants: `min <= max` and `min <= stock <= max`. The only ways to obtain a
/// value are [`StockLevels::new`] and deserialization, both of which check them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawStockLevels")]
pub struct StockLevels {
    stock: i32,
    min: i32,
    max: i32,
}

impl StockLevels {
    pub fn new(stock: i32, min: i32, max: i32) -> DomainResult<Self> {
        if min > max {
            return Err(DomainError::validation(format!(
                "min ({min}) must not exceed max ({max})"
            )));
        }
        if stock < min || stock > max {
            return Err(DomainError::validation(format!(
                "stock ({stock}) must be between min ({min}) and max ({max})"
            )));
        }
        Ok(Self { stock, min, max })
    }

    /// Built-in records only; the values are checked by the seed tests.
    pub(crate) const fn trusted(stock: i32, min: i32, max: i32) -> Self {
        Self { stock, min, max }
    }

    pub fn stock(&self) -> i32 {
        self.stock
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }
}

impl ValueObject for StockLevels {}

#[derive(Deserialize)]
struct RawStockLevels {
    stock: i32,
    min: i32,
    max: i32,
}

impl TryFrom<RawStockLevels> for StockLevels {
    type Error = DomainError;

    fn try_from(raw: RawStockLevels) -> Result<Self, Self::Error> {
        StockLevels::new(raw.stock, raw.min, raw.max)
    }
}
