/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use crate::config::config_file::{Config, Settings};
use crate::listing::listing::Listing;
use crate::occupancy::engine::{compute, compute_monthly, compute_observed};
use crate::occupancy::observer::{LogObserver, OccupancyObserver, Silent};
use crate::occupancy::range::QueryRange;
use crate::parsing::filesystem::Filesystem;
use crate::parsing::reader::Reader;
use crate::reports::listing_reporter::ListingReporter;
use crate::reports::occupancy_reporter::OccupancyReporter;
use crate::util::date::Date;
use crate::util::quant::Quant;
use anyhow::{bail, Error};
use clap::{Parser, ValueEnum};
use log::{warn, LevelFilter};

mod config;
mod listing;
mod occupancy;
mod parsing;
mod reports;
mod util;

#[derive(Parser)]
#[command(
	name = "bookrate",
	version,
	about = "Occupancy and revenue of a short-term rental reservation ledger"
)]
struct Cli {
	// ----------------
	// -- POSITIONAL --
	// ----------------
	/// The command to execute
	command: Directive,

	// -----------
	// -- FLAGS --
	// -----------
	/// Specifies the reservation ledger (default: from config, else
	/// data/reservations.csv)
	#[arg(short)]
	file: Option<String>,

	/// First night of the range (YYYY-MM-DD, default: today)
	#[arg(short, long)]
	begin: Option<String>,

	/// Day the range ends, exclusive (YYYY-MM-DD, default: first day of
	/// next month)
	#[arg(short, long)]
	end: Option<String>,

	/// Custom config file location (default: ~/.config/bookrate/config.toml)
	#[arg(long)]
	config: Option<String>,

	/// Status value that marks a reservation as confirmed
	#[arg(long)]
	confirmed: Option<String>,

	/// Currency symbol every price in the ledger starts with
	#[arg(long)]
	symbol: Option<String>,

	/// Decimal places to show for revenue (default: as many as the ledger's
	/// prices use)
	#[arg(short, long)]
	precision: Option<u32>,

	/// Log how each reservation contributes to the result
	#[arg(short, long)]
	verbose: bool,
}

impl Cli {
	/// As far as revenue can be rounded without overflowing
	const MAX_PRECISION: u32 = Quant::MAX_DECIMAL_PLACES;

	/// Extra validations on top of what clap does
	fn validate(&self) -> Result<(), Error> {
		if let Some(prec) = self.precision {
			if prec > Cli::MAX_PRECISION {
				bail!("Maximum precision is {}", Cli::MAX_PRECISION);
			}
		}

		Ok(())
	}

	/// Config file values, overridden by whatever was given on the command
	/// line
	fn settings(&self, config: &Config) -> Settings {
		let mut settings = config.settings();
		if let Some(file) = &self.file {
			settings.file = file.clone();
		}
		if let Some(confirmed) = &self.confirmed {
			settings.confirmed_status = confirmed.clone();
		}
		if let Some(symbol) = &self.symbol {
			settings.currency_symbol = symbol.clone();
		}
		settings
	}
}

#[derive(ValueEnum, Clone, PartialEq)]
enum Directive {
	Rate,    // book rate and revenue over the range
	Monthly, // the same, broken down by calendar month
	List,    // confirmed reservations
	Check,   // find possible data integrity concerns
}

fn main() -> Result<(), Error> {
	let args = Cli::parse();
	args.validate()?;
	init_logging(args.verbose);

	let fs = Filesystem::new();
	let config = fs.get_config(args.config.as_ref())?;
	let settings = args.settings(&config);

	let listing = Reader::new(&settings)?.load(&settings.file)?;
	if listing.is_empty() {
		warn!(
			"No reservation in {} has status '{}'",
			settings.file, settings.confirmed_status
		);
	}
	let precision = args
		.precision
		.unwrap_or(listing.price_precision().min(Cli::MAX_PRECISION));

	match args.command {
		Directive::Rate => rate(&listing, &args, &settings, precision)?,
		Directive::Monthly => {
			let (from, to) = get_range(&args)?;
			let mut observer = make_observer(args.verbose, precision);
			let months = compute_monthly(
				&listing,
				&QueryRange::new(from, to)?,
				observer.as_mut(),
			)?;
			OccupancyReporter::new(&settings.currency_symbol, precision)
				.print_monthly(&months)?;
		},
		Directive::List => ListingReporter::new(&listing).print_reservations(),
		Directive::Check => {
			// warnings about individual rows are also logged while loading
			ListingReporter::new(&listing).print_integrity_check()
		},
	}

	Ok(())
}

fn rate(
	listing: &Listing,
	args: &Cli,
	settings: &Settings,
	precision: u32,
) -> Result<(), Error> {
	let (from, to) = get_range(args)?;

	let occupancy = if args.verbose {
		compute_observed(
			listing,
			&QueryRange::new(from, to)?,
			&mut LogObserver::new(precision),
		)?
	} else {
		compute(listing, from, to)?
	};

	OccupancyReporter::new(&settings.currency_symbol, precision)
		.print_summary(&occupancy)
}

fn make_observer(verbose: bool, precision: u32) -> Box<dyn OccupancyObserver> {
	if verbose {
		Box::new(LogObserver::new(precision))
	} else {
		Box::new(Silent)
	}
}

/// Defaults cover today through the end of the current month. The range is
/// only checked for emptiness once it reaches the engine.
fn get_range(args: &Cli) -> Result<(Date, Date), Error> {
	let today = Date::today();

	let begin = match &args.begin {
		Some(b) => Date::from_str(b)?,
		None => today,
	};
	let end = match &args.end {
		Some(e) => Date::from_str(e)?,
		None => today.first_of_next_month(),
	};

	Ok((begin, end))
}

fn init_logging(verbose: bool) {
	let level = if verbose {
		LevelFilter::Debug
	} else {
		LevelFilter::Warn
	};

	env_logger::Builder::new()
		.filter_level(level)
		.parse_default_env()
		.format_timestamp(None)
		.init();
}
