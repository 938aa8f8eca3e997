//! Inventory data service: the single owner of all parts and products.
//!
//! Construct one instance at startup and hand it to every caller. All reads and
//! writes of inventory state go through it. Each call either completes fully or
//! leaves both collections untouched.

use partstock_core::{DomainError, DomainResult, Entity, PartId, ProductId};

use crate::form::{PartForm, ProductForm};
use crate::part::Part;
use crate::product::Product;
use crate::seed;
use crate::sequence::IdSequence;

/// First id of the part number series.
pub const PART_ID_BASE: u32 = 1001;

/// First id of the product number series.
pub const PRODUCT_ID_BASE: u32 = 5001;

#[derive(Debug, Clone)]
pub struct InventoryService {
    parts: Vec<Part>,
    products: Vec<Product>,
    part_ids: IdSequence<PartId>,
    product_ids: IdSequence<ProductId>,
}

impl Default for InventoryService {
    fn default() -> Self {
        Self::empty()
    }
}

impl InventoryService {
    /// No records; ids start at the beginning of each series.
    pub fn empty() -> Self {
        Self::with_sequences(PART_ID_BASE, PRODUCT_ID_BASE)
    }

    /// No records; ids start at the given values.
    pub fn with_sequences(first_part_id: u32, first_product_id: u32) -> Self {
        Self {
            parts: Vec::new(),
            products: Vec::new(),
            part_ids: IdSequence::starting_at(first_part_id),
            product_ids: IdSequence::starting_at(first_product_id),
        }
    }

    /// The built-in sample records, with id counters past them.
    pub fn seeded() -> Self {
        let mut service =
            Self::with_sequences(seed::FIRST_FREE_PART_ID, seed::FIRST_FREE_PRODUCT_ID);
        for part in seed::sample_parts() {
            service.add_part(part);
        }
        for product in seed::sample_products() {
            service.add_product(product);
        }
        service
    }

    // ---------------------------------------------------------------------
    // Collections
    // ---------------------------------------------------------------------

    /// Append as-is. Id uniqueness is the id allocator's job, not re-checked here.
    pub fn add_part(&mut self, part: Part) {
        self.parts.push(part);
    }

    /// Append as-is. Id uniqueness is the id allocator's job, not re-checked here.
    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// All parts in insertion order.
    pub fn all_parts(&self) -> &[Part] {
        &self.parts
    }

    /// All products in insertion order.
    pub fn all_products(&self) -> &[Product] {
        &self.products
    }

    // ---------------------------------------------------------------------
    // Lookups
    // ---------------------------------------------------------------------

    pub fn find_part_by_id(&self, id: PartId) -> Option<&Part> {
        self.parts.iter().find(|p| p.id() == id)
    }

    pub fn find_product_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Case-sensitive substring match, in insertion order. `""` matches every part.
    pub fn find_parts_by_name(&self, text: &str) -> Vec<&Part> {
        self.parts.iter().filter(|p| p.name().contains(text)).collect()
    }

    /// Case-sensitive substring match, in insertion order. `""` matches every product.
    pub fn find_products_by_name(&self, text: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.name().contains(text))
            .collect()
    }

    /// Search-box semantics: a name search first; only when no name matches
    /// is the query tried as an id.
    pub fn search_parts(&self, query: &str) -> Vec<&Part> {
        let hits = self.find_parts_by_name(query);
        if !hits.is_empty() {
            return hits;
        }
        query
            .parse::<PartId>()
            .ok()
            .and_then(|id| self.find_part_by_id(id))
            .into_iter()
            .collect()
    }

    /// Product counterpart of [`InventoryService::search_parts`].
    pub fn search_products(&self, query: &str) -> Vec<&Product> {
        let hits = self.find_products_by_name(query);
        if !hits.is_empty() {
            return hits;
        }
        query
            .parse::<ProductId>()
            .ok()
            .and_then(|id| self.find_product_by_id(id))
            .into_iter()
            .collect()
    }

    /// Display position of the part with `id`.
    pub fn part_index(&self, id: PartId) -> Option<usize> {
        self.parts.iter().position(|p| p.id() == id)
    }

    /// Display position of the product with `id`.
    pub fn product_index(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id() == id)
    }

    // ---------------------------------------------------------------------
    // Replacement / removal
    // ---------------------------------------------------------------------

    /// Replace the part at `index`. The replacement's id is not compared with
    /// the one it replaces.
    pub fn update_part_at(&mut self, index: usize, part: Part) -> DomainResult<()> {
        let len = self.parts.len();
        let slot = self
            .parts
            .get_mut(index)
            .ok_or_else(|| DomainError::not_found(format!("part index {index} (len {len})")))?;
        *slot = part;
        Ok(())
    }

    /// Replace the product at `index`. The replacement's id is not compared
    /// with the one it replaces.
    pub fn update_product_at(&mut self, index: usize, product: Product) -> DomainResult<()> {
        let len = self.products.len();
        let slot = self
            .products
            .get_mut(index)
            .ok_or_else(|| DomainError::not_found(format!("product index {index} (len {len})")))?;
        *slot = product;
        Ok(())
    }

    /// Remove the first part with the same id. Products that list the part
    /// keep their copy of it.
    pub fn delete_part(&mut self, part: &Part) -> bool {
        match self.parts.iter().position(|p| p.same_entity(part)) {
            Some(index) => {
                self.parts.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove the stored product with the same id, unless it still has
    /// associated parts.
    ///
    /// The stored record is the one checked, not the caller's copy.
    pub fn try_delete_product(&mut self, product: &Product) -> DomainResult<()> {
        let index = self
            .products
            .iter()
            .position(|p| p.same_entity(product))
            .ok_or_else(|| DomainError::not_found(format!("product {}", product.id())))?;

        let stored = &self.products[index];
        if stored.has_associated_parts() {
            return Err(DomainError::constraint(format!(
                "product {} still has {} associated part(s)",
                stored.id(),
                stored.associated_parts().len()
            )));
        }

        self.products.remove(index);
        Ok(())
    }

    /// Boolean form of [`InventoryService::try_delete_product`].
    pub fn delete_product(&mut self, product: &Product) -> bool {
        self.try_delete_product(product).is_ok()
    }

    // ---------------------------------------------------------------------
    // Id allocation
    // ---------------------------------------------------------------------

    /// Fails with `ConstraintViolation` once the part id space is used up.
    pub fn next_unique_part_id(&mut self) -> DomainResult<PartId> {
        self.part_ids.next_id()
    }

    /// Fails with `ConstraintViolation` once the product id space is used up.
    pub fn next_unique_product_id(&mut self) -> DomainResult<ProductId> {
        self.product_ids.next_id()
    }

    // ---------------------------------------------------------------------
    // Associated parts
    // ---------------------------------------------------------------------

    /// Append a copy of part `part_id` to product `product_id`'s associated parts.
    pub fn associate_part(&mut self, product_id: ProductId, part_id: PartId) -> DomainResult<()> {
        let part = self
            .find_part_by_id(part_id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("part {part_id}")))?;
        self.product_mut(product_id)?.add_associated_part(part);
        Ok(())
    }

    /// Drop the first associated part with id `part_id` from product
    /// `product_id`. The part need not still exist in the inventory.
    pub fn dissociate_part(&mut self, product_id: ProductId, part_id: PartId) -> DomainResult<bool> {
        Ok(self.product_mut(product_id)?.remove_associated_part_id(part_id))
    }

    fn product_mut(&mut self, id: ProductId) -> DomainResult<&mut Product> {
        self.products
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))
    }

    // ---------------------------------------------------------------------
    // Validated create / modify
    // ---------------------------------------------------------------------

    /// Validate `form`, allocate an id and append the new part.
    ///
    /// Nothing is allocated or stored when validation fails.
    pub fn create_part(&mut self, form: &PartForm) -> DomainResult<PartId> {
        let draft = form.parse()?;
        let id = self.next_unique_part_id()?;
        self.add_part(draft.into_part(id));
        Ok(id)
    }

    /// Validate `form` and replace part `id` in place, keeping its id and
    /// display position. The part kind cannot change.
    pub fn modify_part(&mut self, id: PartId, form: &PartForm) -> DomainResult<()> {
        let index = self
            .part_index(id)
            .ok_or_else(|| DomainError::not_found(format!("part {id}")))?;
        let draft = form.parse()?;

        let current = self.parts[index].kind();
        if draft.kind() != current {
            return Err(DomainError::validation(format!(
                "part {id} is {current}; its kind cannot change to {}",
                draft.kind()
            )));
        }

        self.update_part_at(index, draft.into_part(id))
    }

    /// Validate `form`, resolve `associated` part ids, allocate an id and
    /// append the new product.
    ///
    /// Nothing is allocated or stored when validation or resolution fails.
    pub fn create_product(
        &mut self,
        form: &ProductForm,
        associated: &[PartId],
    ) -> DomainResult<ProductId> {
        let draft = form.parse()?;
        let parts = associated
            .iter()
            .map(|&part_id| {
                self.find_part_by_id(part_id)
                    .cloned()
                    .ok_or_else(|| DomainError::not_found(format!("part {part_id}")))
            })
            .collect::<DomainResult<Vec<Part>>>()?;

        let id = self.next_unique_product_id()?;
        let mut product = draft.into_product(id);
        for part in parts {
            product.add_associated_part(part);
        }
        self.add_product(product);
        Ok(id)
    }

    /// Validate `form` and replace product `id` in place, keeping its id,
    /// display position and associated parts.
    pub fn modify_product(&mut self, id: ProductId, form: &ProductForm) -> DomainResult<()> {
        let index = self
            .product_index(id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))?;
        let draft = form.parse()?;

        let edited = self.products[index].with_details(draft.name, draft.price, draft.levels);
        self.update_product_at(index, edited)
    }
}
