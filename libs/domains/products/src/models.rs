use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// Rejects empty and whitespace-only names
fn validate_not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

fn validate_non_negative(price: &Decimal) -> Result<(), ValidationError> {
    if *price < Decimal::ZERO {
        return Err(ValidationError::new("negative_price")
            .with_message("must be greater than or equal to 0".into()));
    }
    Ok(())
}

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Store-assigned identifier, `null` until first save
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[schema(example = "Laptop")]
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 999.99)]
    pub price: Decimal,
}

/// Payload for creating or replacing a product
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
pub struct ProductInput {
    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "Laptop")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom(function = "validate_non_negative"))]
    #[schema(value_type = f64, example = 999.99)]
    pub price: Decimal,
}

/// Query parameters for listing products
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ProductQuery {
    /// Case-insensitive name fragment; blank lists every product
    pub q: Option<String>,
}

impl Product {
    /// Unsaved product built from `input`
    pub fn new(input: ProductInput) -> Self {
        Self {
            id: None,
            name: input.name,
            description: input.description,
            price: input.price,
        }
    }

    /// Overwrite every mutable field with `input`. The id is kept.
    pub fn apply(&mut self, input: ProductInput) {
        self.name = input.name;
        self.description = input.description;
        self.price = input.price;
    }
}
