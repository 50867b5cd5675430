//! Till
//!
//! Scans a list of SKUs against a catalog and prints the basket total.

use std::io;

use anyhow::Context;
use tracing::{debug, info, warn};

use till::prelude::*;

use crate::config::TillConfig;

mod config;
mod demo;
mod logging;

fn main() -> anyhow::Result<()> {
    let config = TillConfig::load().unwrap_or_else(|err| err.exit());

    logging::init(&config.logging).context("failed to initialise logging")?;

    match &config.fixture {
        Some(name) => run_fixture(&config, name),
        None => run_demo(&config),
    }
}

fn run_demo(config: &TillConfig) -> anyhow::Result<()> {
    let catalog = demo::catalog()?;

    let scans = if config.skus.is_empty() {
        demo::scans()
    } else {
        config.skus.clone()
    };

    info!(products = catalog.len(), "using built-in demo catalog");

    price(config, Checkout::new(&catalog, demo::rules()), &scans)
}

fn run_fixture(config: &TillConfig, name: &str) -> anyhow::Result<()> {
    let mut fixture = Fixture::with_base_path(&config.fixtures_dir);

    fixture
        .load_products(name)
        .and_then(|fixture| fixture.load_rules(name))
        .with_context(|| format!("failed to load fixture set {name}"))?;

    if config.skus.is_empty() {
        fixture
            .load_scans(name)
            .with_context(|| format!("failed to load scans for fixture set {name}"))?;
    }

    let scans: &[String] = if config.skus.is_empty() {
        fixture.scans()
    } else {
        &config.skus
    };

    info!(
        fixture = name,
        products = fixture.catalog()?.len(),
        rules = fixture.rules().len(),
        "loaded fixture set"
    );

    price(
        config,
        Checkout::new(fixture.catalog()?, fixture.rules().to_vec()),
        scans,
    )
}

fn price(config: &TillConfig, mut checkout: Checkout<'_>, scans: &[String]) -> anyhow::Result<()> {
    for sku in scans {
        checkout
            .scan(sku)
            .inspect_err(|err| warn!(%sku, "{err}"))?;

        debug!(%sku, items = checkout.len(), "scanned");
    }

    if config.receipt {
        Receipt::from_checkout(&checkout).write_to(io::stdout().lock())?;
    }

    let total = format_money(&checkout.total());

    info!(%total, items = checkout.len(), "priced checkout");

    #[expect(clippy::print_stdout, reason = "the total is the program's output")]
    {
        println!("Total: {total}");
    }

    Ok(())
}
