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
use crate::config::config_file::Settings;
use crate::listing::listing::Listing;
use crate::listing::reservation::{Reservation, Status};
use crate::parsing::filesystem::Filesystem;
use crate::util::amount::Amount;
use crate::util::date::Date;
use crate::util::error::IngestionError;
use crate::util::quant::Quant;
use anyhow::{anyhow, bail, Context, Error};
use log::{debug, info, warn};
use regex::Regex;
use serde::Deserialize;
use std::io;

/// One row of the reservation export, as text. Columns not named here
/// (phone number, guest counts, confirmation date, flat) are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
	#[serde(default)]
	reservation_code: Option<String>,
	status: String,
	name: String,
	start_date: String,
	end_date: String,
	nights: String,
	price: String,
}

/// Turns a reservation export into a `Listing`. Every row must parse, whatever
/// its status, or nothing is returned.
pub struct Reader {
	fs: Filesystem,
	settings: Settings,
	price_regex: Regex,
}

impl Reader {
	pub fn new(settings: &Settings) -> Result<Self, Error> {
		// the amount may use commas to group thousands
		let price_regex = Regex::new(&format!(
			r"^{}\s*([0-9][0-9,]*(?:\.[0-9]+)?)$",
			regex::escape(&settings.currency_symbol)
		))?;

		Ok(Self {
			fs: Filesystem::new(),
			settings: settings.clone(),
			price_regex,
		})
	}

	/// Reads the ledger at `file_path`. The file is opened read-only and is
	/// never created.
	pub fn load(&self, file_path: &str) -> Result<Listing, Error> {
		self.fs
			.open(file_path)
			.and_then(|file| self.read_from(file))
			.with_context(|| IngestionError {
				path: file_path.to_string(),
			})
	}

	pub fn read_from<R: io::Read>(&self, input: R) -> Result<Listing, Error> {
		let mut csv_reader = csv::ReaderBuilder::new()
			.trim(csv::Trim::All)
			.from_reader(input);

		let mut reservations = vec![];
		for (i, row) in csv_reader.deserialize::<RawRecord>().enumerate() {
			// the header is row 1
			let row_number = i + 2;
			let reservation = row
				.map_err(Error::from)
				.and_then(|raw| self.to_reservation(raw))
				.map_err(|e| anyhow!("{} (row {})", e, row_number))?;
			reservations.push(reservation);
		}

		for reservation in &reservations {
			if let Status::Other(token) = reservation.status() {
				debug!(
					"Dropping {} with unrecognized status '{}'",
					reservation, token
				);
			}
		}

		let rows_read = reservations.len();
		let listing = Listing::from_reservations(reservations);

		for reservation in listing.iter().filter(|r| !r.nights_match_dates()) {
			warn!(
				"{} records {} nights but its dates span {}; pricing by recorded nights",
				reservation.name(),
				reservation.nights(),
				reservation.span_nights()
			);
		}

		info!(
			"Read {} reservations, kept {} confirmed",
			rows_read,
			listing.len()
		);

		Ok(listing)
	}

	fn to_reservation(&self, raw: RawRecord) -> Result<Reservation, Error> {
		let start_date = Date::from_str(&raw.start_date)?;
		let end_date = Date::from_str(&raw.end_date)?;
		if start_date >= end_date {
			bail!(
				"Reservation must end after it starts, got {} to {}",
				start_date,
				end_date
			);
		}

		let nights = raw
			.nights
			.parse::<i64>()
			.map_err(|_| anyhow!("Invalid number of nights '{}'", raw.nights))?;
		if nights <= 0 {
			bail!("Reservation must have at least one night, got {}", nights);
		}

		let price = self.parse_price(&raw.price)?;

		Ok(Reservation::new(
			raw.reservation_code,
			Status::from_token(&raw.status, &self.settings),
			raw.name,
			start_date,
			end_date,
			nights,
			price,
		))
	}

	/// Parses a currency-tagged price such as `€16.94`
	fn parse_price(&self, input: &str) -> Result<Amount, Error> {
		let Some(captures) = self.price_regex.captures(input) else {
			bail!(
				"Price must be {} followed by an amount, got '{}'",
				self.settings.currency_symbol,
				input
			);
		};

		let value = Quant::from_str(&captures[1].replace(',', ""))?;
		Ok(Amount::new(value, &self.settings.currency_symbol))
	}
}
