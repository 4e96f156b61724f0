use std::{fmt::Display, str::FromStr};

use super::error::{DecodeError, PriceError};

/// Field separator of the backing file line format
pub const FIELD_SEPARATOR: char = ',';

/// Unit price of a product.
///
/// Keeps the literal text it was parsed from so a loaded price is written back
/// exactly as it was read (`2.50` stays `2.50`). Equality only looks at the
/// numeric value. Parsing rejects `nan` and infinities, so only finite prices
/// reach the backing file through text.
#[derive(Debug, Clone)]
pub struct Price {
    value: f64,
    literal: String,
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Self {
            value,
            literal: value.to_string(),
        }
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let literal = s.trim();
        let value: f64 = literal.parse()?;
        if !value.is_finite() {
            return Err(PriceError::NotFinite(literal.to_string()));
        }

        Ok(Self {
            value,
            literal: literal.to_string(),
        })
    }
}

impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.literal)
    }
}

/// A single inventory entry
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub price: Price,
}

impl Product {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        quantity: i64,
        price: impl Into<Price>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            price: price.into(),
        }
    }

    /// Encodes the product as a backing file line, without the trailing newline.
    ///
    /// The name is written verbatim. A name containing the field separator
    /// produces a line that no longer decodes.
    pub fn to_line(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}{sep}{}",
            self.id,
            self.name,
            self.quantity,
            self.price,
            sep = FIELD_SEPARATOR
        )
    }
}

impl TryFrom<&str> for Product {
    type Error = DecodeError;

    fn try_from(line: &str) -> Result<Self, Self::Error> {
        let fields: Vec<&str> = line.trim().split(FIELD_SEPARATOR).collect();
        let [id, name, quantity, price] = fields[..] else {
            return Err(DecodeError::FieldCount {
                found: fields.len(),
            });
        };

        let id = id
            .trim()
            .parse::<i64>()
            .map_err(|_| DecodeError::InvalidId(id.to_string()))?;
        let quantity = quantity
            .trim()
            .parse::<i64>()
            .map_err(|_| DecodeError::InvalidQuantity(quantity.to_string()))?;
        let price = price
            .parse::<Price>()
            .map_err(|_| DecodeError::InvalidPrice(price.to_string()))?;

        Ok(Self {
            id,
            name: name.to_string(),
            quantity,
            price,
        })
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID:{} | {} | Quantity:{} | Price:{}",
            self.id, self.name, self.quantity, self.price
        )
    }
}
