//! Static product catalog
//!
//! Read-only at runtime. Barcodes are not guaranteed unique across
//! products; `find_by_barcode` returns the first match in catalog order.

use shared::models::{Product, ProductTranslations};

/// The purchasable product list, loaded once
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Catalog from an explicit product list
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in store catalog
    pub fn builtin() -> Self {
        Self::new(builtin_products())
    }

    /// All products in catalog order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Product by id
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// First product whose barcode matches exactly, in catalog order
    pub fn find_by_barcode(&self, barcode: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.barcode == barcode)
    }

    /// Unique category names, in catalog order
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }

    /// Products whose name or category contains the query,
    /// case-insensitively. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                query.is_empty()
                    || p.name.to_lowercase().contains(&query)
                    || p.category.to_lowercase().contains(&query)
            })
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn product(
    id: &str,
    names: [&str; 4],
    price: f64,
    category: &str,
    image: &str,
    barcode: &str,
) -> Product {
    let [en, es, fr, de] = names;
    Product {
        id: id.to_string(),
        name: en.to_string(),
        name_translations: Some(ProductTranslations {
            en: en.to_string(),
            es: es.to_string(),
            fr: fr.to_string(),
            de: de.to_string(),
        }),
        price,
        category: category.to_string(),
        image: image.to_string(),
        barcode: barcode.to_string(),
    }
}

fn builtin_products() -> Vec<Product> {
    vec![
        product(
            "1",
            [
                "Fresh Apples",
                "Manzanas Frescas",
                "Pommes Fraîches",
                "Frische Äpfel",
            ],
            3.99,
            "Fruits",
            "apple.jpg",
            "1234567890123",
        ),
        product(
            "2",
            [
                "Organic Milk",
                "Leche Orgánica",
                "Lait Biologique",
                "Bio-Milch",
            ],
            4.49,
            "Dairy",
            "milk.jpg",
            "2234567890123",
        ),
        product(
            "3",
            [
                "Whole Wheat Bread",
                "Pan Integral",
                "Pain Complet",
                "Vollkornbrot",
            ],
            2.99,
            "Bakery",
            "bread.jpg",
            "3234567890123",
        ),
        product(
            "4",
            [
                "Orange Juice",
                "Jugo de Naranja",
                "Jus d'Orange",
                "Orangensaft",
            ],
            5.99,
            "Beverages",
            "juice.jpg",
            "4234567890123",
        ),
        product(
            "5",
            ["Bananas", "Plátanos", "Bananes", "Bananen"],
            1.99,
            "Fruits",
            "banana.jpg",
            "5234567890123",
        ),
        product(
            "6",
            [
                "Farm Fresh Eggs",
                "Huevos Frescos de Granja",
                "Œufs Frais de Ferme",
                "Frische Bauernhof-Eier",
            ],
            6.49,
            "Dairy",
            "eggs.jpg",
            "6234567890123",
        ),
    ]
}
