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
use serde::Deserialize;

pub const DEFAULT_LEDGER_FILE: &str = "data/reservations.csv";
pub const DEFAULT_CONFIRMED_STATUS: &str = "已确认";
pub const DEFAULT_CANCELLED_STATUS: &str = "已取消";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "€";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
	pub listing: Option<ListingConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListingConfig {
	/// Ledger to read when none is given on the command line
	pub file: Option<String>,

	/// Status column values, as exported by the booking platform
	pub confirmed_status: Option<String>,
	pub cancelled_status: Option<String>,

	/// Prefix every price in the ledger is tagged with
	pub currency_symbol: Option<String>,
}

/// Fully resolved settings: config file values with defaults filled in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
	pub file: String,
	pub confirmed_status: String,
	pub cancelled_status: String,
	pub currency_symbol: String,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			file: DEFAULT_LEDGER_FILE.to_string(),
			confirmed_status: DEFAULT_CONFIRMED_STATUS.to_string(),
			cancelled_status: DEFAULT_CANCELLED_STATUS.to_string(),
			currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
		}
	}
}

impl Config {
	pub fn settings(&self) -> Settings {
		let defaults = Settings::default();
		let Some(listing) = &self.listing else {
			return defaults;
		};

		Settings {
			file: listing.file.clone().unwrap_or(defaults.file),
			confirmed_status: listing
				.confirmed_status
				.clone()
				.unwrap_or(defaults.confirmed_status),
			cancelled_status: listing
				.cancelled_status
				.clone()
				.unwrap_or(defaults.cancelled_status),
			currency_symbol: listing
				.currency_symbol
				.clone()
				.unwrap_or(defaults.currency_symbol),
		}
	}
}
