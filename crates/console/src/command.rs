//! Command-line grammar.
//!
//! One command per line: a verb, then arguments. Record fields are given as a
//! single comma-separated list (`name,price,inventory,min,max[,extra]`), so
//! names may contain spaces but not commas.

use thiserror::Error;

use partstock_inventory::{DomainError, PartForm, PartId, PartKind, ProductForm, ProductId};

#[derive(Debug, Error)]
pub enum CommandError {
    /// The line could not be understood.
    #[error("{0}")]
    Usage(String),

    /// The service refused the operation.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Writing the response failed.
    #[error("output failed: {0}")]
    Output(#[from] std::io::Error),
}

impl CommandError {
    fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ListParts,
    ListProducts,
    FindPart(String),
    FindProduct(String),
    AddPart(PartForm),
    AddProduct {
        form: ProductForm,
        parts: Vec<PartId>,
    },
    ModifyPart {
        id: PartId,
        form: PartForm,
    },
    ModifyProduct {
        id: ProductId,
        form: ProductForm,
    },
    Associate {
        product: ProductId,
        part: PartId,
    },
    Dissociate {
        product: ProductId,
        part: PartId,
    },
    DeletePart(PartId),
    DeleteProduct(ProductId),
    Json,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  parts | products                      list everything
  find-part <query>                     id or name fragment (empty lists all)
  find-product <query>
  add-inhouse <name,price,inv,min,max,machine-id>
  add-outsourced <name,price,inv,min,max,company>
  add-product <name,price,inv,min,max[,part-id part-id ...]>
  modify-part <id> <inhouse|outsourced> <fields as for add>
  modify-product <id> <name,price,inv,min,max>
  associate <product-id> <part-id>
  dissociate <product-id> <part-id>
  delete-part <id> | delete-product <id>
  json                                  dump inventory as JSON
  help | quit";

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb {
            "parts" => Command::ListParts,
            "products" => Command::ListProducts,
            "find-part" => Command::FindPart(rest.to_string()),
            "find-product" => Command::FindProduct(rest.to_string()),
            "add-inhouse" => Command::AddPart(part_form(PartKind::InHouse, rest)?),
            "add-outsourced" => Command::AddPart(part_form(PartKind::Outsourced, rest)?),
            "add-product" => {
                let (form, extra) = product_form(rest, true)?;
                let parts = match extra {
                    Some(list) => list
                        .split_whitespace()
                        .map(|s| s.parse::<PartId>())
                        .collect::<Result<Vec<_>, _>>()?,
                    None => Vec::new(),
                };
                Command::AddProduct { form, parts }
            }
            "modify-part" => {
                let (id, rest) = next_arg(rest, "part id")?;
                let (kind, fields) = next_arg(rest, "part kind")?;
                let kind = match kind {
                    "inhouse" | "in-house" => PartKind::InHouse,
                    "outsourced" => PartKind::Outsourced,
                    other => {
                        return Err(CommandError::usage(format!(
                            "unknown part kind {other:?} (expected inhouse or outsourced)"
                        )));
                    }
                };
                Command::ModifyPart {
                    id: id.parse::<PartId>()?,
                    form: part_form(kind, fields)?,
                }
            }
            "modify-product" => {
                let (id, fields) = next_arg(rest, "product id")?;
                let (form, _) = product_form(fields, false)?;
                Command::ModifyProduct {
                    id: id.parse::<ProductId>()?,
                    form,
                }
            }
            "associate" | "dissociate" => {
                let (product, rest) = next_arg(rest, "product id")?;
                let (part, _) = next_arg(rest, "part id")?;
                let (product, part) = (product.parse::<ProductId>()?, part.parse::<PartId>()?);
                if verb == "associate" {
                    Command::Associate { product, part }
                } else {
                    Command::Dissociate { product, part }
                }
            }
            "delete-part" => Command::DeletePart(next_arg(rest, "part id")?.0.parse::<PartId>()?),
            "delete-product" => {
                Command::DeleteProduct(next_arg(rest, "product id")?.0.parse::<ProductId>()?)
            }
            "json" => Command::Json,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => {
                return Err(CommandError::usage(format!(
                    "unknown command {other:?}; type `help`"
                )));
            }
        };
        Ok(Some(command))
    }
}

fn next_arg<'a>(input: &'a str, what: &str) -> Result<(&'a str, &'a str), CommandError> {
    let input = input.trim_start();
    if input.is_empty() {
        return Err(CommandError::usage(format!("missing {what}")));
    }
    Ok(match input.split_once(char::is_whitespace) {
        Some((arg, rest)) => (arg, rest.trim_start()),
        None => (input, ""),
    })
}

fn fields(input: &str, expected: usize, allow_extra: bool) -> Result<Vec<&str>, CommandError> {
    let fields: Vec<&str> = input.split(',').collect();
    let ok = fields.len() == expected || (allow_extra && fields.len() == expected + 1);
    if !ok {
        return Err(CommandError::usage(format!(
            "expected {expected} comma-separated fields, got {}",
            fields.len()
        )));
    }
    Ok(fields)
}

fn part_form(kind: PartKind, input: &str) -> Result<PartForm, CommandError> {
    let f = fields(input, 6, false)?;
    Ok(PartForm {
        kind,
        name: f[0].trim().to_string(),
        price: f[1].to_string(),
        stock: f[2].to_string(),
        min: f[3].to_string(),
        max: f[4].to_string(),
        source: f[5].trim().to_string(),
    })
}

fn product_form(input: &str, allow_extra: bool) -> Result<(ProductForm, Option<&str>), CommandError> {
    let f = fields(input, 5, allow_extra)?;
    let form = ProductForm {
        name: f[0].trim().to_string(),
        price: f[1].to_string(),
        stock: f[2].to_string(),
        min: f[3].to_string(),
        max: f[4].to_string(),
    };
    Ok((form, f.get(5).copied()))
}
