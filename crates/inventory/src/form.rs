//! Raw user input and its validation.
//!
//! The presentation layer collects every field as text. A form is parsed into a
//! draft (all numbers parsed, stock levels checked) before anything touches the
//! inventory; a draft only becomes a record once an id is attached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use partstock_core::{DomainError, DomainResult, PartId, ProductId};

use crate::levels::StockLevels;
use crate::part::{Part, PartKind, PartSource};
use crate::product::Product;

/// Unparsed part fields as entered by a user.
///
/// `source` is the machine id for [`PartKind::InHouse`] and the company name
/// for [`PartKind::Outsourced`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartForm {
    pub kind: PartKind,
    pub name: String,
    pub price: String,
    pub stock: String,
    pub min: String,
    pub max: String,
    pub source: String,
}

/// Unparsed product fields as entered by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub stock: String,
    pub min: String,
    pub max: String,
}

/// A validated part without an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartDraft {
    pub name: String,
    pub price: Decimal,
    pub levels: StockLevels,
    pub source: PartSource,
}

/// A validated product without an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub price: Decimal,
    pub levels: StockLevels,
}

impl PartForm {
    /// Parse and validate every field. Names are taken verbatim (empty allowed).
    pub fn parse(&self) -> DomainResult<PartDraft> {
        let price = parse_price(&self.price)?;
        let stock = parse_int("inventory", &self.stock)?;
        let min = parse_int("min", &self.min)?;
        let max = parse_int("max", &self.max)?;
        let source = match self.kind {
            PartKind::InHouse => PartSource::InHouse {
                machine_id: parse_int("machine id", &self.source)?,
            },
            PartKind::Outsourced => PartSource::Outsourced {
                company_name: self.source.clone(),
            },
        };
        let levels = StockLevels::new(stock, min, max)?;

        Ok(PartDraft {
            name: self.name.clone(),
            price,
            levels,
            source,
        })
    }
}

impl ProductForm {
    /// Parse and validate every field. Names are taken verbatim (empty allowed).
    pub fn parse(&self) -> DomainResult<ProductDraft> {
        let price = parse_price(&self.price)?;
        let stock = parse_int("inventory", &self.stock)?;
        let min = parse_int("min", &self.min)?;
        let max = parse_int("max", &self.max)?;
        let levels = StockLevels::new(stock, min, max)?;

        Ok(ProductDraft {
            name: self.name.clone(),
            price,
            levels,
        })
    }
}

impl PartDraft {
    pub fn kind(&self) -> PartKind {
        self.source.kind()
    }

    pub fn into_part(self, id: PartId) -> Part {
        Part::new(id, self.name, self.price, self.levels, self.source)
    }
}

impl ProductDraft {
    pub fn into_product(self, id: ProductId) -> Product {
        Product::new(id, self.name, self.price, self.levels)
    }
}

fn parse_int(field: &str, text: &str) -> DomainResult<i32> {
    text.trim()
        .parse::<i32>()
        .map_err(|_| DomainError::validation(format!("{field} must be a whole number (got {text:?})")))
}

fn parse_price(text: &str) -> DomainResult<Decimal> {
    text.trim()
        .parse::<Decimal>()
        .map_err(|_| DomainError::validation(format!("price must be a number (got {text:?})")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bolts_form() -> PartForm {
        PartForm {
            kind: PartKind::InHouse,
            name: "Bolts".to_string(),
            price: "0.99".to_string(),
            stock: "50".to_string(),
            min: "10".to_string(),
            max: "100".to_string(),
            source: "42".to_string(),
        }
    }

    #[test]
    fn parses_in_house_form() {
        let draft = bolts_form().parse().unwrap();
        assert_eq!(draft.name, "Bolts");
        assert_eq!(draft.price, Decimal::new(99, 2));
        assert_eq!(draft.levels, StockLevels::new(50, 10, 100).unwrap());
        assert_eq!(draft.source, PartSource::InHouse { machine_id: 42 });
    }

    #[test]
    fn outsourced_form_keeps_company_text_verbatim() {
        let form = PartForm {
            kind: PartKind::Outsourced,
            source: " Acme Corp ".to_string(),
            ..bolts_form()
        };
        let draft = form.parse().unwrap();
        assert_eq!(
            draft.source,
            PartSource::Outsourced {
                company_name: " Acme Corp ".to_string()
            }
        );
    }

    #[test]
    fn surrounding_whitespace_in_numbers_is_ignored() {
        let form = PartForm {
            price: " 1.50 ".to_string(),
            stock: " 20".to_string(),
            ..bolts_form()
        };
        let draft = form.parse().unwrap();
        assert_eq!(draft.price, Decimal::new(150, 2));
        assert_eq!(draft.levels.stock(), 20);
    }

    #[test]
    fn empty_name_is_accepted() {
        let form = PartForm {
            name: String::new(),
            ..bolts_form()
        };
        assert_eq!(form.parse().unwrap().name, "");
    }

    #[test]
    fn unparsable_numbers_are_validation_errors() {
        for form in [
            PartForm { price: "ten".to_string(), ..bolts_form() },
            PartForm { stock: "5.5".to_string(), ..bolts_form() },
            PartForm { min: "".to_string(), ..bolts_form() },
            PartForm { max: "lots".to_string(), ..bolts_form() },
            PartForm { source: "M-42".to_string(), ..bolts_form() },
        ] {
            let err = form.parse().unwrap_err();
            assert!(err.is_validation(), "{form:?} -> {err:?}");
        }
    }

    #[test]
    fn bound_violations_are_validation_errors() {
        let inverted = PartForm { min: "200".to_string(), ..bolts_form() };
        assert!(inverted.parse().unwrap_err().is_validation());

        let over = PartForm { stock: "101".to_string(), ..bolts_form() };
        assert!(over.parse().unwrap_err().is_validation());
    }

    #[test]
    fn product_form_parses_and_validates() {
        let form = ProductForm {
            name: "Stone Boats".to_string(),
            price: "1.99".to_string(),
            stock: "8".to_string(),
            min: "0".to_string(),
            max: "20".to_string(),
        };
        let product = form.parse().unwrap().into_product(ProductId::new(5001));
        assert_eq!(product.name(), "Stone Boats");
        assert_eq!(product.price(), Decimal::new(199, 2));
        assert_eq!(product.stock(), 8);

        let bad = ProductForm { stock: "21".to_string(), ..form };
        assert!(bad.parse().unwrap_err().is_validation());
    }
}
