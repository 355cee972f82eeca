//! Request/response types shared between handlers and `OpenAPI` generation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Closed set of model names accepted by `/models/{model_name}`.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModelName {
    Alexnet,
    Resnet,
    Lenet,
}

impl ModelName {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alexnet => "alexnet",
            Self::Resnet => "resnet",
            Self::Lenet => "lenet",
        }
    }

    /// Canned message returned for each model.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Alexnet => "Deep Learning FTW!",
            Self::Lenet => "LeCNN all the images",
            Self::Resnet => "Have some residuals",
        }
    }
}

/// Product payload accepted by the `POST` product routes.
///
/// Optional fields left out of the request stay out of the response.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<f64>,
}

impl Product {
    /// `price + tax`, only when a tax was supplied.
    #[must_use]
    pub fn total_price(&self) -> Option<f64> {
        self.tax.map(|tax| self.price + tax)
    }
}

#[derive(ToSchema, Serialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(ToSchema, Serialize, Debug)]
pub struct ItemResponse {
    pub item: i64,
}

#[derive(ToSchema, Serialize, Debug)]
pub struct UserResponse {
    pub user_id: String,
}

#[derive(ToSchema, Serialize, Debug)]
pub struct ModelResponse {
    pub model_name: ModelName,
    pub message: String,
}

#[derive(ToSchema, Serialize, Debug)]
pub struct FileResponse {
    pub file_path: String,
}

#[derive(ToSchema, Serialize, Debug)]
pub struct OwnedItemResponse {
    pub item_id: String,
    pub owner_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(ToSchema, Serialize, Debug)]
pub struct ProductLookupResponse {
    pub product_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
}

#[derive(ToSchema, Serialize, Debug)]
pub struct ProductNumberResponse {
    pub product_id: String,
    pub product_number: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
}

#[derive(ToSchema, Serialize, Debug)]
pub struct PricedProductResponse {
    #[serde(flatten)]
    pub product: Product,
    #[serde(rename = "Total_price", skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
}

#[derive(ToSchema, Serialize, Debug)]
pub struct IdentifiedProductResponse {
    pub product_id: i64,
    #[serde(flatten)]
    pub product: Product,
}

#[derive(ToSchema, Serialize, Debug)]
pub struct SuppliedProductResponse {
    pub product_id: i64,
    #[serde(flatten)]
    pub product: Product,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    #[test]
    fn model_name_wire_form() -> Result<()> {
        for model in [ModelName::Alexnet, ModelName::Resnet, ModelName::Lenet] {
            assert_eq!(serde_json::to_value(model)?, json!(model.as_str()));
        }
        assert!(serde_json::from_value::<ModelName>(json!("foo")).is_err());
        assert!(serde_json::from_value::<ModelName>(json!("AlexNet")).is_err());
        Ok(())
    }

    #[test]
    fn model_messages() {
        assert_eq!(ModelName::Alexnet.message(), "Deep Learning FTW!");
        assert_eq!(ModelName::Lenet.message(), "LeCNN all the images");
        assert_eq!(ModelName::Resnet.message(), "Have some residuals");
    }

    #[test]
    fn product_omits_absent_optionals() -> Result<()> {
        let product: Product =
            serde_json::from_value(json!({"id": 1, "name": "x", "price": 10.0}))?;
        assert_eq!(product.total_price(), None);
        assert_eq!(
            serde_json::to_value(&product)?,
            json!({"id": 1, "name": "x", "price": 10.0})
        );
        Ok(())
    }

    #[test]
    fn priced_product_flattens() -> Result<()> {
        let product: Product =
            serde_json::from_value(json!({"id": 1, "name": "x", "price": 10.0, "tax": 2.0}))?;
        let response = PricedProductResponse {
            total_price: product.total_price(),
            product,
        };
        assert_eq!(
            serde_json::to_value(&response)?,
            json!({"id": 1, "name": "x", "price": 10.0, "tax": 2.0, "Total_price": 12.0})
        );
        Ok(())
    }
}
