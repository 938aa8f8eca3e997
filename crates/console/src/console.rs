//! Command dispatch against a single inventory instance.

use std::io::Write;

use serde::Serialize;
use tracing::{debug, info, warn};

use partstock_inventory::{DomainError, InventoryService, Part, Product};

use crate::command::{Command, CommandError, HELP};
use crate::render;

/// Whether the read loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Serialize)]
struct Snapshot<'a> {
    parts: &'a [Part],
    products: &'a [Product],
}

/// Owns the inventory for the session and writes rendered output to `out`.
pub struct Console<W> {
    inventory: InventoryService,
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(inventory: InventoryService, out: W) -> Self {
        Self { inventory, out }
    }

    pub fn inventory(&self) -> &InventoryService {
        &self.inventory
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn prompt(&mut self) -> std::io::Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()
    }

    /// Handle one input line. Rejections are reported to the user, not returned;
    /// only write failures on `out` are errors.
    pub fn handle_line(&mut self, line: &str) -> anyhow::Result<Flow> {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(err) => {
                self.report(&err)?;
                return Ok(Flow::Continue);
            }
        };

        debug!(?command, "dispatching");
        match self.execute(command) {
            Ok(flow) => Ok(flow),
            Err(CommandError::Output(err)) => Err(err.into()),
            Err(err) => {
                self.report(&err)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn report(&mut self, err: &CommandError) -> anyhow::Result<()> {
        warn!(error = %err, "command rejected");
        let text = match err {
            CommandError::Usage(msg) => format!("error: {msg}"),
            CommandError::Output(err) => format!("error: {err}"),
            CommandError::Domain(DomainError::Validation(msg)) => format!("invalid input: {msg}"),
            CommandError::Domain(DomainError::NotFound(msg)) => format!("not found: {msg}"),
            CommandError::Domain(DomainError::ConstraintViolation(msg)) => {
                format!("refused: {msg}")
            }
        };
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    fn execute(&mut self, command: Command) -> Result<Flow, CommandError> {
        match command {
            Command::ListParts => self.print(&render::parts_table(self.inventory.all_parts())),
            Command::ListProducts => {
                self.print(&render::products_table(self.inventory.all_products()))
            }
            Command::FindPart(query) => {
                let hits = self.inventory.search_parts(&query);
                if hits.is_empty() {
                    self.print(&format!("no parts match {query:?}"))
                } else {
                    self.print(&render::parts_table(hits))
                }
            }
            Command::FindProduct(query) => {
                let hits = self.inventory.search_products(&query);
                if hits.is_empty() {
                    self.print(&format!("no products match {query:?}"))
                } else {
                    self.print(&render::products_table(hits))
                }
            }
            Command::AddPart(form) => {
                let id = self.inventory.create_part(&form)?;
                info!(part_id = %id, kind = %form.kind, "part created");
                self.print(&format!("added part {id}"))
            }
            Command::AddProduct { form, parts } => {
                let id = self.inventory.create_product(&form, &parts)?;
                info!(product_id = %id, associated = parts.len(), "product created");
                self.print(&format!("added product {id}"))
            }
            Command::ModifyPart { id, form } => {
                self.inventory.modify_part(id, &form)?;
                info!(part_id = %id, "part modified");
                self.print(&format!("modified part {id}"))
            }
            Command::ModifyProduct { id, form } => {
                self.inventory.modify_product(id, &form)?;
                info!(product_id = %id, "product modified");
                self.print(&format!("modified product {id}"))
            }
            Command::Associate { product, part } => {
                self.inventory.associate_part(product, part)?;
                info!(product_id = %product, part_id = %part, "part associated");
                self.print(&format!("part {part} associated with product {product}"))
            }
            Command::Dissociate { product, part } => {
                if self.inventory.dissociate_part(product, part)? {
                    info!(product_id = %product, part_id = %part, "part dissociated");
                    self.print(&format!("part {part} removed from product {product}"))
                } else {
                    Err(DomainError::not_found(format!(
                        "part {part} is not associated with product {product}"
                    ))
                    .into())
                }
            }
            Command::DeletePart(id) => {
                let part = self
                    .inventory
                    .find_part_by_id(id)
                    .cloned()
                    .ok_or_else(|| DomainError::not_found(format!("part {id}")))?;
                if !self.inventory.delete_part(&part) {
                    return Err(DomainError::not_found(format!("part {id}")).into());
                }
                info!(part_id = %id, "part deleted");
                self.print(&format!("deleted part {id}"))
            }
            Command::DeleteProduct(id) => {
                let product = self
                    .inventory
                    .find_product_by_id(id)
                    .cloned()
                    .ok_or_else(|| DomainError::not_found(format!("product {id}")))?;
                self.inventory.try_delete_product(&product)?;
                info!(product_id = %id, "product deleted");
                self.print(&format!("deleted product {id}"))
            }
            Command::Json => {
                let snapshot = Snapshot {
                    parts: self.inventory.all_parts(),
                    products: self.inventory.all_products(),
                };
                let json = serde_json::to_string_pretty(&snapshot).map_err(std::io::Error::from)?;
                self.print(&json)
            }
            Command::Help => self.print(HELP),
            Command::Quit => Ok(Flow::Quit),
        }
    }

    fn print(&mut self, text: &str) -> Result<Flow, CommandError> {
        writeln!(self.out, "{}", text.trim_end())?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(lines: &[&str]) -> (String, InventoryService) {
        let mut console = Console::new(InventoryService::seeded(), Vec::new());
        for line in lines {
            console.handle_line(line).unwrap();
        }
        let inventory = console.inventory().clone();
        (String::from_utf8(console.into_output()).unwrap(), inventory)
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut console = Console::new(InventoryService::seeded(), Vec::new());
        assert_eq!(console.handle_line("quit").unwrap(), Flow::Quit);
        assert_eq!(console.handle_line("").unwrap(), Flow::Continue);
    }

    #[test]
    fn add_then_find_by_id() {
        let (out, inventory) = run(&["add-inhouse Bolts,0.99,50,10,100,42", "find-part 1006"]);
        assert!(out.contains("added part 1006"));
        assert!(out.contains("1006   Bolts"));
        assert_eq!(inventory.all_parts().len(), 6);
    }

    #[test]
    fn validation_failure_is_reported_not_stored() {
        let (out, inventory) = run(&["add-outsourced Nuts,1,500,1,10,Acme"]);
        assert!(out.starts_with("invalid input: stock (500)"));
        assert_eq!(inventory.all_parts().len(), 5);
    }

    #[test]
    fn delete_of_product_with_parts_is_refused() {
        let (out, inventory) = run(&["associate 5001 1001", "delete-product 5001"]);
        assert!(out.contains("refused: product 5001 still has 1 associated part(s)"));
        assert_eq!(inventory.all_products().len(), 3);
    }

    #[test]
    fn dissociate_then_delete_succeeds() {
        let (out, inventory) = run(&[
            "associate 5002 1003",
            "dissociate 5002 1003",
            "dissociate 5002 1003",
            "delete-product 5002",
        ]);
        assert!(out.contains("not found: part 1003 is not associated with product 5002"));
        assert!(out.contains("deleted product 5002"));
        assert_eq!(inventory.all_products().len(), 2);
    }

    #[test]
    fn repeated_part_delete_reports_not_found() {
        let (out, inventory) = run(&["delete-part 1002", "delete-part 1002"]);
        assert!(out.contains("deleted part 1002"));
        assert_eq!(out.matches("deleted part 1002").count(), 1);
        assert!(out.contains("not found: part 1002"));
        assert_eq!(inventory.all_parts().len(), 4);
    }

    #[test]
    fn search_without_hits_says_so() {
        let (out, _) = run(&["find-product zzz-no-match"]);
        assert_eq!(out.trim(), "no products match \"zzz-no-match\"");
    }

    #[test]
    fn json_dump_lists_both_collections() {
        let (out, _) = run(&["json"]);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["parts"].as_array().unwrap().len(), 5);
        assert_eq!(value["products"][0]["name"], "Stone Boats");
        assert_eq!(value["parts"][4]["source"]["company_name"], "SpaceX");
    }

    #[test]
    fn unknown_command_points_to_help() {
        let (out, _) = run(&["launch"]);
        assert!(out.contains("unknown command \"launch\""));
    }
}
