//! Catalog
//!
//! A read-only lookup from SKU to [`Product`]. Built once, then shared by
//! reference with every checkout that prices against it.

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::products::Product;

/// Errors raised while building a catalog.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// A product is priced in a different currency (SKU, product currency, catalog currency).
    #[error("Product {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(String, &'static str, &'static str),

    /// A product with the same SKU is already in the catalog.
    #[error("Duplicate product SKU: {0}")]
    DuplicateProduct(String),
}

/// Product catalog keyed by SKU.
#[derive(Debug, Clone)]
pub struct Catalog<'a> {
    products: FxHashMap<String, Product<'a>>,
    currency: &'static Currency,
}

impl<'a> Catalog<'a> {
    /// Create an empty catalog priced in the given currency.
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            products: FxHashMap::default(),
            currency,
        }
    }

    /// Create a catalog holding the given products.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if a product has the wrong currency or a
    /// SKU appears twice.
    pub fn with_products(
        products: impl IntoIterator<Item = Product<'a>>,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new(currency);

        products
            .into_iter()
            .try_for_each(|product| catalog.insert(product))?;

        Ok(catalog)
    }

    /// Add a product to the catalog.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::CurrencyMismatch`]: the product is not priced in the catalog currency.
    /// - [`CatalogError::DuplicateProduct`]: the SKU is already present.
    pub fn insert(&mut self, product: Product<'a>) -> Result<(), CatalogError> {
        if product.price.currency() != self.currency {
            let product_code = product.price.currency().iso_alpha_code;

            return Err(CatalogError::CurrencyMismatch(
                product.sku,
                product_code,
                self.currency.iso_alpha_code,
            ));
        }

        if self.products.contains_key(&product.sku) {
            return Err(CatalogError::DuplicateProduct(product.sku));
        }

        self.products.insert(product.sku.clone(), product);

        Ok(())
    }

    /// Look up a product by SKU.
    pub fn get(&self, sku: &str) -> Option<&Product<'a>> {
        self.products.get(sku)
    }

    /// Whether a product with this SKU exists.
    pub fn contains(&self, sku: &str) -> bool {
        self.products.contains_key(sku)
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterate over the products, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Product<'a>> {
        self.products.values()
    }

    /// Currency every product in the catalog is priced in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
