//! The product record shown on the detail screen.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Rating as supplied by the catalog: either a display string or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rating {
    Number(f64),
    Text(String),
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Number(value) => write!(f, "{}", value),
            Rating::Text(text) => f.write_str(text),
        }
    }
}

/// Immutable product record.
///
/// Values are displayed as given; nothing here is validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    /// Price of a single unit.
    #[serde(alias = "price")]
    pub unit_price: f64,
    /// URI or path of the hero image.
    pub image: String,
    pub rating: Rating,
    pub calories: i64,
    /// Preparation time range in minutes, e.g. "15-25".
    #[serde(alias = "time")]
    pub prep_time: String,
    pub description: String,
}

impl Product {
    /// The built-in demo product.
    pub fn sample() -> Self {
        Self {
            name: "Blueberry and Raspberry Pancakes".to_string(),
            unit_price: 25.0,
            image: "https://static.vecteezy.com/system/resources/previews/008/601/556/non_2x/flat-pancake-animation-cartoon-with-blueberry-and-strawberry-illustration-image-vector.jpg".to_string(),
            rating: Rating::Text("5.0".to_string()),
            calories: 450,
            prep_time: "15-25".to_string(),
            description: "This vibrant and fruity addition brings a burst of flavor and color to your morning stack, making every bite a celebration of fresh, juicy berries.".to_string(),
        }
    }

    /// Load a product from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let product: Product = serde_json::from_str(&data).map_err(|source| AppError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded product '{}' from {}", product.name, path.display());
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_rating_display() {
        assert_eq!(Rating::Text("5.0".to_string()).to_string(), "5.0");
        assert_eq!(Rating::Number(4.55).to_string(), "4.55");
        assert_eq!(Rating::Number(4.25).to_string(), "4.25");
        assert_eq!(Rating::Number(5.0).to_string(), "5");
    }

    #[test]
    fn test_parse_catalog_field_names() {
        let json = r#"{
            "name": "Pancakes",
            "price": 25,
            "rating": "5.0",
            "calories": 450,
            "time": "15-25",
            "description": "Fluffy.",
            "image": "pancakes.png"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.unit_price, 25.0);
        assert_eq!(product.prep_time, "15-25");
        assert_eq!(product.image, "pancakes.png");
        assert_eq!(product.rating, Rating::Text("5.0".to_string()));
    }

    #[test]
    fn test_numeric_rating_and_negative_price_pass_through() {
        let json = r#"{
            "name": "Odd",
            "unit_price": -3.5,
            "rating": 4.5,
            "calories": -1,
            "prep_time": "5",
            "description": "",
            "image": ""
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.unit_price, -3.5);
        assert_eq!(product.calories, -1);
        assert_eq!(product.rating, Rating::Number(4.5));
        assert_eq!(product.rating.to_string(), "4.5");
    }

    #[test]
    fn test_load_reports_path_on_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = Product::load(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Json { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_load_round_trip_of_sample() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&Product::sample()).unwrap();
        file.write_all(json.as_bytes()).unwrap();
        assert_eq!(Product::load(file.path()).unwrap(), Product::sample());
    }
}
