//! Localized labels for core-owned user-facing text
//!
//! The web UI owns the bulk of the translation catalog; this table only
//! carries the strings the backend itself renders (receipt labels and the
//! user-facing rejection messages). Lookup is static and loaded at startup;
//! unknown language tags fall back to English.

use serde::{Deserialize, Serialize};

use crate::models::PaymentMethod;

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
}

impl Language {
    /// Parse a language tag ("es", "es-MX", "FR"). Unknown tags fall back
    /// to English.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or(tag);
        match primary.to_ascii_lowercase().as_str() {
            "es" => Self::Es,
            "fr" => Self::Fr,
            "de" => Self::De,
            _ => Self::En,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
        }
    }
}

/// Fixed label set used on receipts and core error surfaces
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub store_name: &'static str,
    pub receipt_title: &'static str,
    pub receipt_thanks: &'static str,
    pub order_id: &'static str,
    pub date: &'static str,
    pub payment: &'static str,
    pub card: &'static str,
    pub cash: &'static str,
    pub items: &'static str,
    pub subtotal: &'static str,
    pub discount: &'static str,
    pub total: &'static str,
    pub items_purchased: &'static str,
    pub footer_visit: &'static str,
    pub footer_tagline: &'static str,
    pub invalid_coupon: &'static str,
    pub cart_empty: &'static str,
}

impl Labels {
    /// Static label table for a language
    pub const fn for_language(language: Language) -> &'static Labels {
        match language {
            Language::En => &EN,
            Language::Es => &ES,
            Language::Fr => &FR,
            Language::De => &DE,
        }
    }

    /// Label for a payment method
    pub fn payment_label(&self, method: PaymentMethod) -> &'static str {
        match method {
            PaymentMethod::Card => self.card,
            PaymentMethod::Cash => self.cash,
        }
    }
}

static EN: Labels = Labels {
    store_name: "QuickMart",
    receipt_title: "Self-Checkout Receipt",
    receipt_thanks: "Thank you for shopping with us!",
    order_id: "Order ID:",
    date: "Date:",
    payment: "Payment:",
    card: "Card",
    cash: "Cash",
    items: "Items:",
    subtotal: "Subtotal:",
    discount: "Discount",
    total: "TOTAL:",
    items_purchased: "Items Purchased:",
    footer_visit: "Visit us again soon!",
    footer_tagline: "QuickMart - Your Friendly Neighborhood Store",
    invalid_coupon: "Invalid coupon code",
    cart_empty: "Your cart is empty",
};

static ES: Labels = Labels {
    store_name: "QuickMart",
    receipt_title: "Recibo de Auto-Pago",
    receipt_thanks: "¡Gracias por tu compra!",
    order_id: "Pedido #",
    date: "Fecha:",
    payment: "Pago:",
    card: "Tarjeta",
    cash: "Efectivo",
    items: "Artículos:",
    subtotal: "Subtotal:",
    discount: "Descuento",
    total: "TOTAL:",
    items_purchased: "Artículos Comprados:",
    footer_visit: "¡Vuelve pronto!",
    footer_tagline: "QuickMart - Tu Tienda de Barrio",
    invalid_coupon: "Código de cupón inválido",
    cart_empty: "Tu carrito está vacío",
};

static FR: Labels = Labels {
    store_name: "QuickMart",
    receipt_title: "Reçu Libre-Service",
    receipt_thanks: "Merci pour votre achat!",
    order_id: "Commande #",
    date: "Date:",
    payment: "Paiement:",
    card: "Carte",
    cash: "Espèces",
    items: "Articles:",
    subtotal: "Sous-total:",
    discount: "Réduction",
    total: "TOTAL:",
    items_purchased: "Articles Achetés:",
    footer_visit: "À bientôt!",
    footer_tagline: "QuickMart - Votre Magasin de Quartier",
    invalid_coupon: "Code promo invalide",
    cart_empty: "Votre panier est vide",
};

static DE: Labels = Labels {
    store_name: "QuickMart",
    receipt_title: "Selbstbedienungs-Beleg",
    receipt_thanks: "Vielen Dank für Ihren Einkauf!",
    order_id: "Bestellung #",
    date: "Datum:",
    payment: "Zahlung:",
    card: "Karte",
    cash: "Bargeld",
    items: "Artikel:",
    subtotal: "Zwischensumme:",
    discount: "Rabatt",
    total: "GESAMT:",
    items_purchased: "Gekaufte Artikel:",
    footer_visit: "Besuchen Sie uns bald wieder!",
    footer_tagline: "QuickMart - Ihr Laden um die Ecke",
    invalid_coupon: "Ungültiger Gutscheincode",
    cart_empty: "Ihr Warenkorb ist leer",
};
