// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

/// Id of a product that hasn't been saved yet.
pub const NEW_PRODUCT_ID: u32 = 0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub product_name: String,
    pub product_code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub star_rating: f32,
}

impl Product {
    /// Blank product shown when the user starts adding a new one.
    #[must_use]
    pub fn new_unsaved() -> Self {
        Self {
            id: NEW_PRODUCT_ID,
            product_name: String::new(),
            product_code: "New".to_string(),
            description: String::new(),
            star_rating: 0.0,
        }
    }

    #[must_use]
    pub fn is_new(&self) -> bool { self.id == NEW_PRODUCT_ID }
}

/// The catalogue the in memory service starts with, when no seed file is given.
#[must_use]
pub fn demo_catalogue() -> Vec<Product> {
    let make = |id, name: &str, code: &str, description: &str, star_rating| Product {
        id,
        product_name: name.to_string(),
        product_code: code.to_string(),
        description: description.to_string(),
        star_rating,
    };
    vec![
        make(1, "Leaf Rake", "GDN-0011", "Leaf rake with 48-inch wooden handle", 3.2),
        make(2, "Garden Cart", "GDN-0023", "15 gallon capacity rolling garden cart", 4.2),
        make(5, "Hammer", "TBX-0048", "Curved claw steel hammer", 4.8),
        make(8, "Saw", "TBX-0022", "15-inch steel blade hand saw", 3.7),
        make(
            10,
            "Video Game Controller",
            "GMG-0042",
            "Standard two-button video game controller",
            4.6,
        ),
    ]
}
