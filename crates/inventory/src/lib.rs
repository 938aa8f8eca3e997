//! Inventory domain module.
//!
//! This crate owns the parts/products inventory: validated records, unique id
//! allocation, associated-part linkage and lookups. It is pure, synchronous
//! domain logic (no IO, no logging, no UI).

pub mod form;
pub mod levels;
pub mod part;
pub mod product;
pub mod seed;
pub mod sequence;
pub mod service;

pub use form::{PartDraft, PartForm, ProductDraft, ProductForm};
pub use levels::StockLevels;
pub use part::{Part, PartKind, PartSource};
pub use product::Product;
pub use sequence::IdSequence;
pub use service::InventoryService;

pub use partstock_core::{DomainError, DomainResult, PartId, ProductId};
pub use rust_decimal::Decimal;
