//! Part records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use partstock_core::{Entity, PartId};

use crate::levels::StockLevels;

/// Where a part comes from. Fixed when the part is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PartSource {
    /// Manufactured on one of our own machines.
    InHouse { machine_id: i32 },
    /// Bought from an outside company.
    Outsourced { company_name: String },
}

impl PartSource {
    pub fn kind(&self) -> PartKind {
        match self {
            PartSource::InHouse { .. } => PartKind::InHouse,
            PartSource::Outsourced { .. } => PartKind::Outsourced,
        }
    }
}

/// Payload-free discriminant of [`PartSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartKind {
    InHouse,
    Outsourced,
}

impl PartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartKind::InHouse => "in_house",
            PartKind::Outsourced => "outsourced",
        }
    }
}

impl core::fmt::Display for PartKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A purchasable or manufacturable component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    id: PartId,
    name: String,
    price: Decimal,
    levels: StockLevels,
    source: PartSource,
}

impl Part {
    pub fn new(
        id: PartId,
        name: impl Into<String>,
        price: Decimal,
        levels: StockLevels,
        source: PartSource,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            levels,
            source,
        }
    }

    pub fn id_typed(&self) -> PartId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn levels(&self) -> StockLevels {
        self.levels
    }

    pub fn stock(&self) -> i32 {
        self.levels.stock()
    }

    pub fn min(&self) -> i32 {
        self.levels.min()
    }

    pub fn max(&self) -> i32 {
        self.levels.max()
    }

    pub fn source(&self) -> &PartSource {
        &self.source
    }

    pub fn kind(&self) -> PartKind {
        self.source.kind()
    }

    /// Machine id for in-house parts.
    pub fn machine_id(&self) -> Option<i32> {
        match &self.source {
            PartSource::InHouse { machine_id } => Some(*machine_id),
            PartSource::Outsourced { .. } => None,
        }
    }

    /// Supplier name for outsourced parts.
    pub fn company_name(&self) -> Option<&str> {
        match &self.source {
            PartSource::Outsourced { company_name } => Some(company_name),
            PartSource::InHouse { .. } => None,
        }
    }
}

impl Entity for Part {
    type Id = PartId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
