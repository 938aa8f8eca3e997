//! Built-in sample records loaded at startup.

use rust_decimal::Decimal;

use partstock_core::{PartId, ProductId};

use crate::levels::StockLevels;
use crate::part::{Part, PartSource};
use crate::product::Product;

/// First part id not taken by [`sample_parts`].
pub const FIRST_FREE_PART_ID: u32 = 1006;

/// First product id not taken by [`sample_products`].
pub const FIRST_FREE_PRODUCT_ID: u32 = 5004;

/// Parts 1001..=1005, in display order.
pub fn sample_parts() -> Vec<Part> {
    vec![
        in_house(1001, "Widgets", Decimal::new(1099, 2), (12, 1, 15), 2025),
        in_house(1002, "Lasers", Decimal::new(1499, 2), (27, 0, 35), 2035),
        in_house(1003, "Rocks", Decimal::new(299, 2), (10000, 1000, 30000), 2030),
        outsourced(1004, "Space Dust", Decimal::new(9999, 2), (1200, 100, 15000), "Tesla"),
        outsourced(1005, "Water", Decimal::new(599, 2), (347, 20, 500), "SpaceX"),
    ]
}

/// Products 5001..=5003, in display order, with no associated parts.
pub fn sample_products() -> Vec<Product> {
    vec![
        product(5001, "Stone Boats", Decimal::new(199, 2), (8, 0, 20)),
        product(5002, "X-Ray Visors", Decimal::new(99999, 2), (1, 0, 10)),
        product(5003, "Ice Sculptures", Decimal::new(2099, 2), (215, 1, 1000)),
    ]
}

fn levels((stock, min, max): (i32, i32, i32)) -> StockLevels {
    StockLevels::trusted(stock, min, max)
}

fn in_house(id: u32, name: &str, price: Decimal, lv: (i32, i32, i32), machine_id: i32) -> Part {
    Part::new(
        PartId::new(id),
        name,
        price,
        levels(lv),
        PartSource::InHouse { machine_id },
    )
}

fn outsourced(id: u32, name: &str, price: Decimal, lv: (i32, i32, i32), company: &str) -> Part {
    Part::new(
        PartId::new(id),
        name,
        price,
        levels(lv),
        PartSource::Outsourced {
            company_name: company.to_string(),
        },
    )
}

fn product(id: u32, name: &str, price: Decimal, lv: (i32, i32, i32)) -> Product {
    Product::new(ProductId::new(id), name, price, levels(lv))
}
