//! Catalog

use std::{fs, path::Path};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::products::{FormatError, Product};

/// Errors that can occur when loading a product catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading the catalog file
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid expiry date on a catalog entry
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// A product catalog parsed from YAML.
#[derive(Debug, Deserialize)]
pub struct Catalog {
    /// Entries in catalog order.
    pub products: Vec<CatalogProduct>,
}

/// One catalog entry.
///
/// The expiry date stays textual until [`CatalogProduct::into_product`] so a
/// malformed date surfaces as the same [`FormatError`] direct construction
/// produces.
#[derive(Debug, Deserialize)]
pub struct CatalogProduct {
    /// Product name
    pub name: String,

    /// Unit price
    pub price: Decimal,

    /// Opening stock level
    pub stock: i64,

    /// Reorder threshold
    pub min_stock: i64,

    /// Expiry date in `YYYY-MM-DD` form
    pub expiry_date: String,
}

impl Catalog {
    /// Loads a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)?;

        Ok(Self::from_yaml(&raw)?)
    }

    /// Parses a catalog from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML does not match the catalog shape.
    pub fn from_yaml(raw: &str) -> Result<Self, serde_norway::Error> {
        serde_norway::from_str(raw)
    }

    /// Converts every entry into a product, preserving catalog order.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] on the first entry with a malformed expiry
    /// date.
    pub fn into_products(self) -> Result<Vec<Product>, CatalogError> {
        self.products
            .into_iter()
            .map(CatalogProduct::into_product)
            .collect()
    }
}

impl CatalogProduct {
    /// Converts this entry into a product.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the expiry date is malformed.
    pub fn into_product(self) -> Result<Product, CatalogError> {
        Ok(Product::new(
            self.name,
            self.price,
            self.stock,
            self.min_stock,
            &self.expiry_date,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const CATALOG_YAML: &str = "\
products:
  - name: Aspirin
    price: \"0.50\"
    stock: 100
    min_stock: 20
    expiry_date: \"2025-12-31\"
  - name: Tylenol
    price: \"1.00\"
    stock: 50
    min_stock: 10
    expiry_date: \"2024-06-30\"
";

    #[test]
    fn catalog_parses_entries_in_order() -> TestResult {
        let catalog = Catalog::from_yaml(CATALOG_YAML)?;
        let products = catalog.into_products()?;

        let names: Vec<&str> = products.iter().map(Product::name).collect();

        assert_eq!(names, ["Aspirin", "Tylenol"]);

        Ok(())
    }

    #[test]
    fn catalog_entries_keep_price_and_stock() -> TestResult {
        let products = Catalog::from_yaml(CATALOG_YAML)?.into_products()?;
        let aspirin = products.first().expect("catalog should not be empty");

        assert_eq!(aspirin.price(), Decimal::new(50, 2));
        assert_eq!(aspirin.stock(), 100);
        assert_eq!(aspirin.min_stock(), 20);

        Ok(())
    }

    #[test]
    fn malformed_expiry_date_surfaces_as_a_format_error() -> TestResult {
        let raw = "\
products:
  - name: Aspirin
    price: \"0.50\"
    stock: 100
    min_stock: 20
    expiry_date: \"soon\"
";

        let result = Catalog::from_yaml(raw)?.into_products();

        assert!(matches!(result, Err(CatalogError::Format(_))));

        Ok(())
    }
}
