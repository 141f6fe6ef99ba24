use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Product names of one category, per locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryProducts {
    /// Indonesian product names
    #[schema(example = json!(["apel"]))]
    pub id: Vec<String>,
    /// English product names
    #[schema(example = json!(["apple"]))]
    pub en: Vec<String>,
}

/// Category key → localized product names. Also the seed payload.
pub type ProductCatalog = BTreeMap<String, CategoryProducts>;

/// A named group of localized product names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub key: String,
    pub products: CategoryProducts,
}

impl Category {
    pub fn new(key: impl Into<String>, products: CategoryProducts) -> Self {
        Self {
            key: key.into(),
            products,
        }
    }
}

/// One locale's product list as stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalizedProducts {
    #[serde(default)]
    pub products: Vec<String>,
}

/// Storage shape in the `categories` collection:
/// `{ key, id: { products: [..] }, en: { products: [..] } }`.
///
/// `_id` is assigned by the server and not read back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDocument {
    pub key: String,
    #[serde(rename = "id", default)]
    pub indonesian: LocalizedProducts,
    #[serde(default)]
    pub en: LocalizedProducts,
}

impl From<&Category> for CategoryDocument {
    fn from(category: &Category) -> Self {
        Self {
            key: category.key.clone(),
            indonesian: LocalizedProducts {
                products: category.products.id.clone(),
            },
            en: LocalizedProducts {
                products: category.products.en.clone(),
            },
        }
    }
}

impl From<CategoryDocument> for Category {
    fn from(doc: CategoryDocument) -> Self {
        Category::new(
            doc.key,
            CategoryProducts {
                id: doc.indonesian.products,
                en: doc.en.products,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn test_document_nests_products_per_locale() {
        let category = Category::new(
            "fruits",
            CategoryProducts {
                id: vec!["apel".to_string()],
                en: vec!["apple".to_string()],
            },
        );

        let stored = bson::to_document(&CategoryDocument::from(&category)).unwrap();
        assert_eq!(
            stored,
            doc! {
                "key": "fruits",
                "id": { "products": ["apel"] },
                "en": { "products": ["apple"] },
            }
        );
    }

    #[test]
    fn test_document_tolerates_server_id_and_missing_locale() {
        let raw = doc! {
            "_id": bson::oid::ObjectId::new(),
            "key": "veg",
            "id": { "products": ["bayam"] },
        };

        let category = Category::from(bson::from_document::<CategoryDocument>(raw).unwrap());
        assert_eq!(category.key, "veg");
        assert_eq!(category.products.id, vec!["bayam"]);
        assert!(category.products.en.is_empty());
    }

    #[test]
    fn test_catalog_rejects_missing_locale() {
        let payload = serde_json::json!({ "fruits": { "id": ["apel"] } });
        assert!(serde_json::from_value::<ProductCatalog>(payload).is_err());
    }
}
