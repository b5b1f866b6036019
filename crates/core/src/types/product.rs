//! The `Product` entity and its unsaved draft form.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ProductId;

/// Client-side validation failures for product input.
///
/// Every violation is caught before a draft reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name is empty or whitespace-only.
    #[error("product name must not be empty")]
    EmptyName,

    /// Price is zero or negative.
    #[error("product price must be greater than zero, got {0}")]
    NonPositivePrice(Decimal),

    /// Description is empty or whitespace-only.
    #[error("product description must not be empty")]
    EmptyDescription,

    /// Price input could not be parsed as a decimal number.
    #[error("invalid price input: {0:?}")]
    UnparsablePrice(String),
}

/// A product record as exchanged with the remote store.
///
/// `id` is absent until the backend persists the record and assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Backend-assigned identifier. `None` for unsaved drafts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    /// Display name. Never empty once validated.
    pub name: String,
    /// Unit price. Strictly positive once validated.
    pub price: Decimal,
    /// Free-text description. Never empty once validated.
    pub description: String,
}

impl Product {
    /// Validate the invariants required for submission.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule: non-empty name, price > 0,
    /// non-empty description.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.name, self.price, &self.description)
    }
}

/// Unvalidated form input for creating or editing a product.
///
/// Mirrors what a form screen collects; [`ProductDraft::validate`] gates
/// the submission path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductDraft {
    /// Display name as entered.
    pub name: String,
    /// Unit price as entered.
    pub price: Decimal,
    /// Description as entered.
    pub description: String,
}

impl ProductDraft {
    /// Build a draft from raw form input, parsing the price field.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnparsablePrice`] when the price input
    /// is not a decimal number. Other rules are checked at
    /// [`ProductDraft::validate`] time, not here.
    pub fn from_input(name: &str, price: &str, description: &str) -> Result<Self, ValidationError> {
        let price = price
            .trim()
            .parse::<Decimal>()
            .map_err(|_| ValidationError::UnparsablePrice(price.to_string()))?;
        Ok(Self {
            name: name.to_string(),
            price,
            description: description.to_string(),
        })
    }

    /// Validate the invariants required for submission.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule: non-empty name, price > 0,
    /// non-empty description.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.name, self.price, &self.description)
    }

    /// Attach an existing ID, producing the record form used on update.
    #[must_use]
    pub fn into_product(self, id: Option<ProductId>) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            description: self.description,
        }
    }
}

impl From<Product> for ProductDraft {
    /// Reopen a persisted product for editing, dropping the ID.
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            price: product.price,
            description: product.description,
        }
    }
}

fn validate_fields(name: &str, price: Decimal, description: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if price <= Decimal::ZERO {
        return Err(ValidationError::NonPositivePrice(price));
    }
    if description.trim().is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn draft(name: &str, price: &str, description: &str) -> ProductDraft {
        ProductDraft::from_input(name, price, description).unwrap()
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(draft("Apple", "1.50", "fruit").validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(
            draft("   ", "1.50", "fruit").validate(),
            Err(ValidationError::EmptyName)
        );
    }

    #[test]
    fn test_negative_price_rejected() {
        let d = draft("X", "-1", "d");
        assert_eq!(
            d.validate(),
            Err(ValidationError::NonPositivePrice(Decimal::from(-1)))
        );
    }

    #[test]
    fn test_zero_price_rejected() {
        let d = draft("X", "0", "d");
        assert!(matches!(
            d.validate(),
            Err(ValidationError::NonPositivePrice(_))
        ));
    }

    #[test]
    fn test_empty_description_rejected() {
        assert_eq!(
            draft("X", "2", "").validate(),
            Err(ValidationError::EmptyDescription)
        );
    }

    #[test]
    fn test_unparsable_price_input() {
        assert_eq!(
            ProductDraft::from_input("X", "abc", "d"),
            Err(ValidationError::UnparsablePrice("abc".to_string()))
        );
    }

    #[test]
    fn test_product_json_shape() {
        let p = Product {
            id: Some(ProductId::new(1)),
            name: "Apple".to_string(),
            price: Decimal::new(150, 2),
            description: "fruit".to_string(),
        };
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Apple");
        assert_eq!(json["price"], 1.5);
        assert_eq!(json["description"], "fruit");
    }

    #[test]
    fn test_draft_omits_id_in_json() {
        let d = draft("Apple", "1.50", "fruit");
        let json = serde_json::to_value(d.into_product(None)).unwrap();
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_product_roundtrip_from_backend_json() {
        let p: Product =
            serde_json::from_str(r#"{"id":3,"name":"Bread","price":3,"description":"bakery item"}"#)
                .unwrap();
        assert_eq!(p.id, Some(ProductId::new(3)));
        assert_eq!(p.price, Decimal::from(3));
    }
}
