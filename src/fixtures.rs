//! Fixtures

use crate::{
    catalog::{Catalog, CatalogError},
    products::Product,
};

/// Demo pharmacy catalog in YAML form.
pub const PHARMACY_CATALOG_YAML: &str = include_str!("../fixtures/pharmacy.yml");

/// Builds the demo pharmacy products used by the demo driver and tests.
///
/// The set deliberately includes one product whose expiry date is in the
/// past, so expired-sale handling shows up in a full demo run.
///
/// # Errors
///
/// Returns a [`CatalogError`] if the embedded catalog fails to parse, which
/// indicates a broken fixture file.
pub fn pharmacy_products() -> Result<Vec<Product>, CatalogError> {
    Catalog::from_yaml(PHARMACY_CATALOG_YAML)?.into_products()
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn pharmacy_fixture_parses() -> TestResult {
        let products = pharmacy_products()?;

        let names: Vec<&str> = products.iter().map(Product::name).collect();

        assert_eq!(names, ["Aspirin", "Tylenol", "Amoxicillin"]);

        Ok(())
    }
}
