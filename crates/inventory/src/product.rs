//! Product records and their associated parts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use partstock_core::{Entity, PartId, ProductId};

use crate::levels::StockLevels;
use crate::part::Part;

/// A sellable item built from zero or more parts.
///
/// Associated parts are snapshots of the part records at the time they were
/// associated. The product does not own those parts: deleting or replacing a
/// part in the inventory leaves the product's copy untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Decimal,
    levels: StockLevels,
    associated_parts: Vec<Part>,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Decimal, levels: StockLevels) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            levels,
            associated_parts: Vec::new(),
        }
    }

    pub fn id_typed(&self) -> ProductId {
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

    pub fn associated_parts(&self) -> &[Part] {
        &self.associated_parts
    }

    pub fn has_associated_parts(&self) -> bool {
        !self.associated_parts.is_empty()
    }

    /// Append `part`. The same part may be associated more than once.
    pub fn add_associated_part(&mut self, part: Part) {
        self.associated_parts.push(part);
    }

    /// Remove the first associated part with the same id as `part`.
    pub fn remove_associated_part(&mut self, part: &Part) -> bool {
        self.remove_associated_part_id(part.id_typed())
    }

    /// Remove the first associated part with id `part_id`.
    pub fn remove_associated_part_id(&mut self, part_id: PartId) -> bool {
        match self
            .associated_parts
            .iter()
            .position(|p| p.id_typed() == part_id)
        {
            Some(index) => {
                self.associated_parts.remove(index);
                true
            }
            None => false,
        }
    }

    /// Same id, new field values, associated parts carried over.
    pub(crate) fn with_details(&self, name: String, price: Decimal, levels: StockLevels) -> Self {
        Self {
            id: self.id,
            name,
            price,
            levels,
            associated_parts: self.associated_parts.clone(),
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::PartSource;

    fn boat() -> Product {
        Product::new(
            ProductId::new(5001),
            "Stone Boats",
            Decimal::new(199, 2),
            StockLevels::new(8, 0, 20).unwrap(),
        )
    }

    fn part(id: u32) -> Part {
        Part::new(
            PartId::new(id),
            format!("part-{id}"),
            Decimal::ONE,
            StockLevels::new(1, 0, 5).unwrap(),
            PartSource::InHouse { machine_id: 7 },
        )
    }

    #[test]
    fn new_product_has_no_associated_parts() {
        let product = boat();
        assert!(!product.has_associated_parts());
        assert!(product.associated_parts().is_empty());
    }

    #[test]
    fn duplicates_are_allowed_and_removed_one_at_a_time() {
        let mut product = boat();
        product.add_associated_part(part(1001));
        product.add_associated_part(part(1002));
        product.add_associated_part(part(1001));
        assert_eq!(product.associated_parts().len(), 3);

        assert!(product.remove_associated_part(&part(1001)));
        let ids: Vec<u32> = product
            .associated_parts()
            .iter()
            .map(|p| p.id_typed().get())
            .collect();
        assert_eq!(ids, vec![1002, 1001]);
    }

    #[test]
    fn removing_absent_part_reports_false() {
        let mut product = boat();
        product.add_associated_part(part(1001));
        assert!(!product.remove_associated_part_id(PartId::new(9999)));
        assert_eq!(product.associated_parts().len(), 1);
    }

    #[test]
    fn with_details_keeps_id_and_parts() {
        let mut product = boat();
        product.add_associated_part(part(1003));
        let edited = product.with_details(
            "Granite Boats".to_string(),
            Decimal::new(299, 2),
            StockLevels::new(3, 0, 5).unwrap(),
        );
        assert_eq!(edited.id_typed(), product.id_typed());
        assert_eq!(edited.name(), "Granite Boats");
        assert_eq!(edited.associated_parts(), product.associated_parts());
    }
}
