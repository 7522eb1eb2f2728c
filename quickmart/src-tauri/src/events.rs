//! Tauri event definitions for cart notifications
//!
//! The frontend listens on a single channel and picks the toast to show
//! from the event kind: "added" for a product entering the cart, or
//! "incremented" for a repeat add of something already there.

use serde::{Deserialize, Serialize};

use checkout_core::CartEvent;
use shared::i18n::Language;
use shared::models::Product;

/// Channel name for cart change notifications
pub const CART_CHANGED: &str = "cart://changed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CartChangeKind {
    Added,
    Incremented,
}

/// Payload emitted to the frontend after a successful add
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartChangedEvent {
    pub kind: CartChangeKind,
    pub product_id: String,
    /// Display name in the session language
    pub name: String,
    /// Line quantity after the change
    pub quantity: u32,
}

impl CartChangedEvent {
    pub fn new(product: &Product, event: CartEvent, language: Language) -> Self {
        let (kind, quantity) = match event {
            CartEvent::Added => (CartChangeKind::Added, 1),
            CartEvent::Incremented { quantity } => (CartChangeKind::Incremented, quantity),
        };
        Self {
            kind,
            product_id: product.id.clone(),
            name: product.name_for(language).to_string(),
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ProductTranslations;

    fn product() -> Product {
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
            image: String::new(),
            barcode: String::new(),
        }
    }

    #[test]
    fn test_first_add_event() {
        let event = CartChangedEvent::new(&product(), CartEvent::Added, Language::En);
        assert_eq!(event.kind, CartChangeKind::Added);
        assert_eq!(event.quantity, 1);
        assert_eq!(event.name, "Fresh Apples");
    }

    #[test]
    fn test_increment_event_is_localized() {
        let event = CartChangedEvent::new(
            &product(),
            CartEvent::Incremented { quantity: 3 },
            Language::Es,
        );
        assert_eq!(event.kind, CartChangeKind::Incremented);
        assert_eq!(event.quantity, 3);
        assert_eq!(event.name, "Manzanas Frescas");
    }

    #[test]
    fn test_event_serialization_kind_is_lowercase() {
        let event = CartChangedEvent::new(&product(), CartEvent::Added, Language::En);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "added");
    }
}
