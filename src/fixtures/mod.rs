//! Fixtures
//!
//! Named sets of products, pricing rules and scans loaded from YAML files
//! laid out as `<base>/{products,rules,scans}/<name>.yml`.

use std::{fs, path::PathBuf};

use rusty_money::iso::Currency;
use thiserror::Error;

use crate::{
    catalog::{Catalog, CatalogError},
    checkout::{Checkout, CheckoutError},
    fixtures::{products::ProductsFixture, rules::RulesFixture, scans::ScansFixture},
    rules::PricingRule,
};

pub mod products;
pub mod rules;
pub mod scans;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid percentage format
    #[error("Invalid percentage format: {0}")]
    InvalidPercentage(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Currency mismatch between the catalog and a rule price
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No products loaded yet
    #[error("No products loaded yet; currency unknown")]
    NoCurrency,

    /// Catalog construction error
    #[error("Failed to build catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// Scanning a fixture item failed
    #[error("Failed to scan fixture item: {0}")]
    Checkout(#[from] CheckoutError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture<'a> {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Catalog, created when the first product is loaded
    catalog: Option<Catalog<'a>>,

    /// Pricing rules in evaluation order
    rules: Vec<PricingRule<'a>>,

    /// SKUs in scan order
    scans: Vec<String>,
}

impl<'a> Fixture<'a> {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            catalog: None,
            rules: Vec::new(),
            scans: Vec::new(),
        }
    }

    /// Load products from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or if a product
    /// clashes with the catalog (currency or SKU). The catalog is left as it
    /// was on error.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: ProductsFixture = self.read("products", name)?;
        let mut catalog = self.catalog.clone();

        for (sku, product_fixture) in fixture.products {
            let product = product_fixture.try_into_product(sku)?;

            catalog
                .get_or_insert_with(|| Catalog::new(product.price.currency()))
                .insert(product)?;
        }

        self.catalog = catalog;

        Ok(self)
    }

    /// Load pricing rules from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if no products
    /// are loaded yet, or if a rule does not fit the loaded catalog.
    pub fn load_rules(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: RulesFixture = self.read("rules", name)?;
        let catalog = self.catalog.as_ref().ok_or(FixtureError::NoCurrency)?;

        let rules = fixture
            .rules
            .into_iter()
            .map(|rule| rule.try_into_rule(catalog))
            .collect::<Result<Vec<_>, _>>()?;

        self.rules.extend(rules);

        Ok(self)
    }

    /// Load scans from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or if a scanned
    /// SKU is not in the loaded catalog.
    pub fn load_scans(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: ScansFixture = self.read("scans", name)?;
        let catalog = self.catalog.as_ref().ok_or(FixtureError::NoCurrency)?;

        if let Some(unknown) = fixture.scans.iter().find(|sku| !catalog.contains(sku)) {
            return Err(FixtureError::ProductNotFound(unknown.clone()));
        }

        self.scans.extend(fixture.scans);

        Ok(self)
    }

    /// Load a complete fixture set (products, rules, and scans with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture
            .load_products(name)?
            .load_rules(name)?
            .load_scans(name)?;

        Ok(fixture)
    }

    /// Get the catalog
    ///
    /// # Errors
    ///
    /// Returns an error if no products have been loaded yet.
    pub fn catalog(&self) -> Result<&Catalog<'a>, FixtureError> {
        self.catalog.as_ref().ok_or(FixtureError::NoCurrency)
    }

    /// Get all pricing rules
    pub fn rules(&self) -> &[PricingRule<'a>] {
        &self.rules
    }

    /// Get all scans
    pub fn scans(&self) -> &[String] {
        &self.scans
    }

    /// Get the currency
    ///
    /// # Errors
    ///
    /// Returns an error if no products have been loaded yet.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        self.catalog().map(Catalog::currency)
    }

    /// Create a checkout with the fixture's rules and every scan applied
    ///
    /// # Errors
    ///
    /// Returns an error if no products are loaded or a scan fails.
    pub fn checkout(&self) -> Result<Checkout<'_>, FixtureError> {
        let mut checkout = Checkout::new(self.catalog()?, self.rules.clone());

        for sku in &self.scans {
            checkout.scan(sku)?;
        }

        Ok(checkout)
    }

    fn read<T: serde::de::DeserializeOwned>(
        &self,
        category: &str,
        name: &str,
    ) -> Result<T, FixtureError> {
        let file_path = self.base_path.join(category).join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        Ok(serde_norway::from_str(&contents)?)
    }
}

impl Default for Fixture<'_> {
    fn default() -> Self {
        Self::new()
    }
}
