use std::io::{self, BufRead, Write};

use log::debug;

use super::prompt::{parse_optional, parse_required, Prompter};
use crate::storage::{Inventory, Listing, Price, Product, ProductUpdate, StoreError};

pub const MENU: &str = "
===== INVENTORY SYSTEM =====
1. Show products
2. Add product
3. Update product
4. Remove product
5. Exit";

/// Choices offered by the inventory menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    ShowAll,
    Add,
    Update,
    Remove,
    /// Close the current session
    Exit,
}

/// What the session should do after a command ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

impl MenuCommand {
    /// Runs the command against `inventory`, collecting any needed fields
    /// through `prompter`. Only terminal I/O failures are returned as errors.
    pub fn execute<R: BufRead, W: Write>(
        &self,
        inventory: &mut Inventory,
        prompter: &mut Prompter<R, W>,
    ) -> io::Result<Flow> {
        debug!("executing {self:?}");

        match self {
            Self::ShowAll => {
                match inventory.list() {
                    Listing::Empty => prompter.say("Inventory is empty.")?,
                    Listing::Products(products) => {
                        prompter.say("\n=== INVENTORY ===")?;
                        for product in products {
                            prompter.say(product)?;
                        }
                    }
                }
                Ok(Flow::Continue)
            }
            Self::Add => {
                let Some(product) = ask_product(prompter)? else {
                    return Ok(Flow::Exit);
                };

                match product {
                    Some(product) => report(prompter, inventory.add(product), "Product added.")?,
                    None => prompter.say("error: invalid data.")?,
                }
                Ok(Flow::Continue)
            }
            Self::Update => {
                let Some(id) = prompter.ask("Product ID: ")? else {
                    return Ok(Flow::Exit);
                };
                let Some(id) = parse_required::<i64>(&id) else {
                    prompter.say("error: invalid data.")?;
                    return Ok(Flow::Continue);
                };
                let Some(quantity) = prompter.ask("New quantity (enter to skip): ")? else {
                    return Ok(Flow::Exit);
                };
                let Some(price) = prompter.ask("New price (enter to skip): ")? else {
                    return Ok(Flow::Exit);
                };

                let parsed = (
                    parse_optional::<i64>(&quantity),
                    parse_optional::<Price>(&price),
                );
                match parsed {
                    (Ok(quantity), Ok(price)) => {
                        let result = inventory.update(id, ProductUpdate { quantity, price });
                        report(prompter, result, "Product updated.")?;
                    }
                    _ => prompter.say("error: invalid data.")?,
                }
                Ok(Flow::Continue)
            }
            Self::Remove => {
                let Some(id) = prompter.ask("ID to remove: ")? else {
                    return Ok(Flow::Exit);
                };

                match parse_required::<i64>(&id) {
                    Some(id) => report(prompter, inventory.remove(id), "Product removed.")?,
                    None => prompter.say("error: invalid ID.")?,
                }
                Ok(Flow::Continue)
            }
            Self::Exit => {
                prompter.say("Goodbye.")?;
                Ok(Flow::Exit)
            }
        }
    }
}

impl TryFrom<&str> for MenuCommand {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "1" => Ok(Self::ShowAll),
            "2" => Ok(Self::Add),
            "3" => Ok(Self::Update),
            "4" => Ok(Self::Remove),
            "5" => Ok(Self::Exit),
            _ => Err(format!("invalid option `{value}`.")),
        }
    }
}

/// Asks for every field of a new product, stopping at the first invalid one.
///
/// The outer `None` means the input ran out.
fn ask_product<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> io::Result<Option<Option<Product>>> {
    let Some(id) = prompter.ask("ID: ")? else {
        return Ok(None);
    };
    let Some(id) = parse_required::<i64>(&id) else {
        return Ok(Some(None));
    };

    let Some(name) = prompter.ask("Name: ")? else {
        return Ok(None);
    };

    let Some(quantity) = prompter.ask("Quantity: ")? else {
        return Ok(None);
    };
    let Some(quantity) = parse_required::<i64>(&quantity) else {
        return Ok(Some(None));
    };

    let Some(price) = prompter.ask("Price: ")? else {
        return Ok(None);
    };
    let Some(price) = parse_required::<Price>(&price) else {
        return Ok(Some(None));
    };

    Ok(Some(Some(Product::new(id, name, quantity, price))))
}

fn report<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    result: Result<(), StoreError>,
    success: &str,
) -> io::Result<()> {
    match result {
        Ok(()) => {
            prompter.say("Inventory saved.")?;
            prompter.say(success)
        }
        Err(err) => prompter.say(format!("error: {err}")),
    }
}
