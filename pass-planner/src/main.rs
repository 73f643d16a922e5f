use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::EnvFilter;

use pass_planner::catalog::{Catalog, zurich_sample};
use pass_planner::domain::AgeBracket;
use pass_planner::planner::{Planner, SearchRequest};
use pass_planner::report::{BracketResult, render_json, render_text};

/// Find the cheapest combination of transit subscriptions for a year of
/// travel.
#[derive(Parser, Debug)]
#[command(name = "pass-planner", version, about)]
struct Cli {
    /// JSON catalog of journeys and products (defaults to the built-in
    /// Zurich sample).
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Age bracket to plan for; repeat for several (defaults to every
    /// bracket in the catalog).
    #[arg(long = "age")]
    ages: Vec<u16>,

    /// Number of plans to show per bracket.
    #[arg(short = 'k', long = "top", default_value_t = 5)]
    top: usize,

    /// Product to include in every plan; repeat for several (defaults to
    /// the catalog's fixed products).
    #[arg(long = "fixed", conflicts_with = "no_fixed")]
    fixed: Vec<String>,

    /// Ignore the catalog's fixed products.
    #[arg(long)]
    no_fixed: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => match Catalog::load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                error!(error = %e, "Failed to load catalog");
                return ExitCode::FAILURE;
            }
        },
        None => zurich_sample(),
    };

    let ages: Vec<AgeBracket> = if cli.ages.is_empty() {
        catalog.age_brackets()
    } else {
        cli.ages.iter().copied().map(AgeBracket).collect()
    };

    let fixed = if cli.no_fixed {
        Vec::new()
    } else if cli.fixed.is_empty() {
        catalog.fixed.clone()
    } else {
        cli.fixed.clone()
    };

    let planner = Planner::new(&catalog.products, &catalog.tariff);
    let mut results = Vec::with_capacity(ages.len());

    for age in ages {
        let request =
            SearchRequest::new(&catalog.journeys, age, cli.top).with_fixed(fixed.iter().cloned());
        let result = planner.search(&request);
        match cli.format {
            Format::Text => print!("{}", render_text(age, cli.top, &result.plans)),
            Format::Json => results.push(BracketResult::new(age, &result.plans)),
        }
    }

    if let Format::Json = cli.format {
        match render_json(&results) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!(error = %e, "Failed to render results");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
