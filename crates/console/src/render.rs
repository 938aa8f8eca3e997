//! Plain-text tables for parts and products.

use std::fmt::Write as _;

use partstock_inventory::{Part, PartSource, Product};

const PART_HEADER: &str = "ID     Name                   Price       Inv    Min    Max    Source";
const PRODUCT_HEADER: &str = "ID     Name                   Price       Inv    Min    Max    Parts";

pub fn parts_table<'a>(parts: impl IntoIterator<Item = &'a Part>) -> String {
    let mut out = String::from(PART_HEADER);
    out.push('\n');
    for part in parts {
        let source = match part.source() {
            PartSource::InHouse { machine_id } => format!("machine {machine_id}"),
            PartSource::Outsourced { company_name } => format!("company {company_name}"),
        };
        let _ = writeln!(
            out,
            "{:<6} {:<22} {:>10}  {:>5}  {:>5}  {:>5}    {}",
            part.id_typed(),
            part.name(),
            part.price(),
            part.stock(),
            part.min(),
            part.max(),
            source
        );
    }
    out
}

pub fn products_table<'a>(products: impl IntoIterator<Item = &'a Product>) -> String {
    let mut out = String::from(PRODUCT_HEADER);
    out.push('\n');
    for product in products {
        let parts = product
            .associated_parts()
            .iter()
            .map(|p| p.id_typed().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(
            out,
            "{:<6} {:<22} {:>10}  {:>5}  {:>5}  {:>5}    {}",
            product.id_typed(),
            product.name(),
            product.price(),
            product.stock(),
            product.min(),
            product.max(),
            if parts.is_empty() { "-" } else { parts.as_str() }
        );
    }
    out
}
