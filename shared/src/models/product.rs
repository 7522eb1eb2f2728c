//! Product Model

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// Per-language product names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductTranslations {
    pub en: String,
    pub es: String,
    pub fr: String,
    pub de: String,
}

/// Product entity
///
/// Immutable once the catalog is loaded. `barcode` is not guaranteed unique
/// across products; lookups take the first match in catalog order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    /// Default name (English)
    pub name: String,
    #[serde(rename = "nameTranslations", skip_serializing_if = "Option::is_none")]
    pub name_translations: Option<ProductTranslations>,
    /// Price in currency units
    pub price: f64,
    pub category: String,
    /// Image asset reference
    pub image: String,
    pub barcode: String,
}

impl Product {
    /// Display name for a language, falling back to the default name when no
    /// translation table is present
    pub fn name_for(&self, language: Language) -> &str {
        match &self.name_translations {
            Some(t) => match language {
                Language::En => &t.en,
                Language::Es => &t.es,
                Language::Fr => &t.fr,
                Language::De => &t.de,
            },
            None => &self.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_with_translations() -> Product {
        Product {
            id: "1".to_string(),
            name: "Fresh Apples".to_string(),
            name_translations: Some(ProductTranslations {
                en: "Fresh Apples".to_string(),
                es: "Manzanas Frescas".to_string(),
                fr: "Pommes Fraîches".to_string(),
                de: "Frische Äpfel".to_string(),
            }),
            price: 3.99,
            category: "Fruits".to_string(),
            image: "apple.jpg".to_string(),
            barcode: "1234567890123".to_string(),
        }
    }

    #[test]
    fn test_name_for_language() {
        let product = product_with_translations();
        assert_eq!(product.name_for(Language::Es), "Manzanas Frescas");
        assert_eq!(product.name_for(Language::De), "Frische Äpfel");
    }

    #[test]
    fn test_name_for_falls_back_to_default() {
        let mut product = product_with_translations();
        product.name_translations = None;
        assert_eq!(product.name_for(Language::Fr), "Fresh Apples");
    }
}
