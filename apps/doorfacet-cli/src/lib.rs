//! doorfacet-cli
//!
//! Command-line front end for the filter engine: it loads configuration and a
//! catalog, turns flags into a selection state, and prints results, option
//! counts and active chips.
pub mod args;
pub mod render;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use doorfacet_core::config::Config;
use doorfacet_core::{Catalog, Product};
use doorfacet_filter::{ActiveChip, FacetSchema, FacetedSearch, Page};

use crate::args::{Cli, Command};

pub fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

pub fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_file(path),
        None => Config::load(),
    };
    config.context("loading configuration")
}

/// `[[facets]]` from the configuration when present, else the base schema.
pub fn load_schema(config: &Config) -> Result<FacetSchema> {
    let schema = config.get_opt::<FacetSchema>("facets").context("reading facet schema")?;
    Ok(schema.unwrap_or_else(FacetSchema::base))
}

#[derive(Serialize)]
struct ListingOutput<'a> {
    page: &'a Page<&'a Product>,
    chips: &'a [ActiveChip],
    active_filters: usize,
}

pub fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let schema = load_schema(&config)?;

    if let Command::Schema { json } = &cli.command {
        if *json {
            println!("{}", serde_json::to_string_pretty(&schema)?);
        } else {
            print!("{}", render::schema(&schema));
        }
        return Ok(());
    }

    let catalog_path = match &cli.catalog {
        Some(p) => p.clone(),
        None => config.catalog_path()?,
    };
    let catalog = Catalog::load(&catalog_path).with_context(|| format!("loading catalog {}", catalog_path.display()))?;
    let search = FacetedSearch::new(catalog.products(), &schema);

    match &cli.command {
        Command::List(args) => {
            let state = args.selection.to_state(&schema)?;
            let page_size = match args.page_size {
                Some(size) => size,
                None => config.settings()?.listing.page_size,
            };
            let page = search.page(&state, args.page, page_size);
            let chips = search.chips(&state);
            tracing::debug!(matched = page.total, total = search.total(), "listing");
            if args.json {
                let output = ListingOutput { page: &page, chips: &chips, active_filters: search.active_filter_count(&state) };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print!("{}", render::listing(&page, search.total(), &chips));
            }
        }
        Command::Counts(args) => {
            let state = args.selection.to_state(&schema)?;
            let counts = search.facet_counts(&state);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&counts)?);
            } else {
                println!("{} of {} products match", search.count(&state), search.total());
                print!("{}", render::counts(&counts));
            }
        }
        Command::Schema { .. } => {}
    }
    Ok(())
}
