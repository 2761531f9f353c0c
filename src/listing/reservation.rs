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
use crate::util::amount::Amount;
use crate::util::date::Date;
use crate::util::error::ContractViolation;
use crate::util::quant::Quant;
use anyhow::Error;
use std::fmt;

/// Booking state as written in the ledger. Only confirmed bookings count
/// towards occupancy; anything unrecognized is kept verbatim so it can be
/// reported, but is treated like a cancellation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
	Confirmed,
	Cancelled,
	Other(String),
}

impl Status {
	pub fn from_token(token: &str, settings: &Settings) -> Status {
		if token == settings.confirmed_status {
			Status::Confirmed
		} else if token == settings.cancelled_status {
			Status::Cancelled
		} else {
			Status::Other(token.to_string())
		}
	}
}

/// A single stay. Dates describe the half-open interval of occupied nights:
/// the guest sleeps there on `start_date` and leaves on `end_date`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reservation {
	code: Option<String>,
	status: Status,
	name: String,
	start_date: Date,
	end_date: Date,

	/// As recorded. Authoritative for the nightly price even when it
	/// disagrees with the dates, which stay authoritative for overlap.
	nights: i64,

	/// Total price of the whole stay
	price: Amount,
}

impl Reservation {
	pub fn new(
		code: Option<String>,
		status: Status,
		name: String,
		start_date: Date,
		end_date: Date,
		nights: i64,
		price: Amount,
	) -> Self {
		Self {
			code,
			status,
			name,
			start_date,
			end_date,
			nights,
			price,
		}
	}

	pub fn code(&self) -> Option<&str> {
		self.code.as_deref()
	}

	pub fn status(&self) -> &Status {
		&self.status
	}

	pub fn is_confirmed(&self) -> bool {
		self.status == Status::Confirmed
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn start_date(&self) -> Date {
		self.start_date
	}

	pub fn end_date(&self) -> Date {
		self.end_date
	}

	pub fn nights(&self) -> i64 {
		self.nights
	}

	pub fn price(&self) -> &Amount {
		&self.price
	}

	/// Nights implied by the dates, which may differ from `nights()` in a
	/// badly kept ledger.
	pub fn span_nights(&self) -> i64 {
		self.start_date.nights_until(&self.end_date)
	}

	pub fn nights_match_dates(&self) -> bool {
		self.span_nights() == self.nights
	}

	pub fn nightly_price(&self) -> Result<Quant, Error> {
		if self.nights <= 0 {
			return Err(ContractViolation(format!(
				"reservation for {} starting {} has {} nights",
				self.name, self.start_date, self.nights
			))
			.into());
		}

		Ok(self.price.value / self.nights as i128)
	}
}

impl fmt::Display for Reservation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} ({} to {}, {} nights, {})",
			self.name, self.start_date, self.end_date, self.nights, self.price
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn reservation(start: &str, end: &str, nights: i64, price: &str) -> Reservation {
		Reservation::new(
			Some("HM1".to_string()),
			Status::Confirmed,
			"Ada".to_string(),
			Date::from_str(start).unwrap(),
			Date::from_str(end).unwrap(),
			nights,
			Amount::new(Quant::from_str(price).unwrap(), "€"),
		)
	}

	#[test]
	fn test_status_tokens() {
		let settings = Settings::default();
		assert_eq!(Status::from_token("已确认", &settings), Status::Confirmed);
		assert_eq!(Status::from_token("已取消", &settings), Status::Cancelled);
		assert_eq!(
			Status::from_token("pending", &settings),
			Status::Other("pending".to_string())
		);
	}

	#[test]
	fn test_nightly_price() {
		let r = reservation("2019-09-13", "2019-09-18", 5, "16.94");
		assert_eq!(r.nightly_price().unwrap(), Quant::from_str("3.388").unwrap());
		assert!(r.nights_match_dates());
	}

	#[test]
	fn test_nightly_price_uses_recorded_nights() {
		let r = reservation("2019-09-13", "2019-09-18", 4, "20");
		assert_eq!(r.span_nights(), 5);
		assert!(!r.nights_match_dates());
		assert_eq!(r.nightly_price().unwrap(), Quant::from_str("5").unwrap());
	}

	#[test]
	fn test_zero_nights_is_contract_violation() {
		let r = reservation("2019-09-13", "2019-09-18", 0, "20");
		let err = r.nightly_price().unwrap_err();
		assert!(err.downcast_ref::<ContractViolation>().is_some());
	}

	#[test]
	fn test_display() {
		let r = reservation("2019-09-13", "2019-09-18", 5, "16.94");
		assert_eq!(
			r.to_string(),
			"Ada (2019-09-13 to 2019-09-18, 5 nights, 16.94 €)"
		);
	}
}
