use anyhow::Result;
use clap::Parser;

use std::{path::PathBuf, time::Instant};

use sales_report::{aggregate, loader, sales, PriceList, Report, RESULTS_FILE};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Price catalogue JSON file
    price_catalogue: PathBuf,
    /// Sales record JSON file
    sales_record: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let raw_prices = loader::load(&cli.price_catalogue)?;
    let raw_sales = loader::load(&cli.sales_record)?;

    let (prices, warnings) = PriceList::from_raw(&raw_prices);
    for warning in &warnings {
        eprintln!("{warning}");
    }
    let (sales, warnings) = sales::normalize(&raw_sales);
    for warning in &warnings {
        eprintln!("{warning}");
    }

    let start = Instant::now();
    let totals = aggregate(&prices, &sales);
    let elapsed = start.elapsed();

    let report = Report::new(totals, elapsed);
    println!("{report}");
    report.save(RESULTS_FILE)?;
    Ok(())
}
