use std::path::PathBuf;
use std::str::FromStr;

use clap::{ArgAction, Args, Parser, Subcommand};

use doorfacet_core::error::{Error, Result};
use doorfacet_filter::{reducer, FacetSchema, FilterState, RangeBound};

#[derive(Parser)]
#[command(name = "doorfacet")]
#[command(version, about = "Faceted filtering over a door catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (defaults to ./doorfacet.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Catalog file or directory, overriding `catalog.path`
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the products matching a selection
    List(ListArgs),
    /// Print what-if counts for every categorical option
    Counts(CountsArgs),
    /// Print the effective facet schema
    Schema {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct SelectionArgs {
    /// Select an option, e.g. `-s styles=Modern` (repeatable)
    #[arg(short = 's', long = "select", value_name = "KEY=VALUE")]
    pub select: Vec<Selection>,

    /// Constrain a range facet, e.g. `-r width=40:60` (repeatable)
    #[arg(short = 'r', long = "range", value_name = "KEY=LOW:HIGH")]
    pub range: Vec<RangeArg>,
}

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Overrides `listing.page_size`
    #[arg(long)]
    pub page_size: Option<usize>,

    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CountsArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub key: String,
    pub value: String,
}

impl FromStr for Selection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let usage = || format!("expected KEY=VALUE, got '{s}'");
        let (key, value) = s.split_once('=').ok_or_else(usage)?;
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            return Err(usage());
        }
        Ok(Self { key: key.to_string(), value: value.to_string() })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeArg {
    pub key: String,
    pub low: f64,
    pub high: f64,
}

impl FromStr for RangeArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let usage = || format!("expected KEY=LOW:HIGH, got '{s}'");
        let (key, bounds) = s.split_once('=').ok_or_else(usage)?;
        let (low, high) = bounds.split_once(':').ok_or_else(usage)?;
        let low: f64 = low.trim().parse().map_err(|_| usage())?;
        let high: f64 = high.trim().parse().map_err(|_| usage())?;
        if key.trim().is_empty() || !low.is_finite() || !high.is_finite() {
            return Err(usage());
        }
        Ok(Self { key: key.trim().to_string(), low, high })
    }
}

impl SelectionArgs {
    /// Builds a validated state from the flags.
    ///
    /// Range input is ordered and clamped into the facet's bound here, the way
    /// a slider would, so the engine never sees an inverted interval.
    pub fn to_state(&self, schema: &FacetSchema) -> Result<FilterState> {
        let mut state = reducer::reset(schema);
        for sel in &self.select {
            if !state.is_selected(&sel.key, &sel.value) {
                state = reducer::toggle_categorical(&state, &sel.key, &sel.value);
            }
        }
        for r in &self.range {
            let facet = schema.range_facet(&r.key).ok_or_else(|| Error::UnknownFacet(r.key.clone()))?;
            state = reducer::set_range(&state, &r.key, RangeBound::clamped(r.low, r.high, facet.bounds()));
        }
        schema.validate_state(&state)?;
        Ok(state)
    }
}
