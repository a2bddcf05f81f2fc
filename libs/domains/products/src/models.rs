use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};

/// Ordering of listed products by creation time
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[strum(to_string = "asc", serialize = "ascending")]
    Asc,
    #[strum(to_string = "desc", serialize = "descending")]
    Desc,
}

impl SortDirection {
    /// Parse a caller-supplied direction. Only `desc` and `descending` sort
    /// newest first; any other value, including the empty string, is ascending.
    pub fn parse_or_default(raw: &str) -> Self {
        match raw.parse() {
            Ok(SortDirection::Desc) => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }
}

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Product {
    /// Assigned at construction, never supplied by callers
    pub id: Uuid,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// Default sort key for listings
    pub created_at: DateTime<Utc>,
}

/// DTO for constructing or revising a product
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProduct {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
}

impl Product {
    /// Build a new product with a fresh identifier and creation time.
    pub fn new(input: CreateProduct) -> ProductResult<Self> {
        Self::with_id(Uuid::now_v7(), input)
    }

    /// Build the replacement record for an existing product.
    ///
    /// `created_at` is provisional; the service keeps the stored timestamp when
    /// the record is written.
    pub fn with_id(id: Uuid, input: CreateProduct) -> ProductResult<Self> {
        let product = Self {
            id,
            name: input.name,
            price: input.price,
            created_at: Utc::now(),
        };
        product.check()?;
        Ok(product)
    }

    /// Re-check the field invariants. Fields are public, so records handed
    /// back to the service are validated again before they are written.
    pub fn check(&self) -> ProductResult<()> {
        self.validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        // `range` lets NaN through
        if !self.price.is_finite() {
            return Err(ProductError::Validation(
                "price: must be a finite number".to_string(),
            ));
        }

        Ok(())
    }
}
