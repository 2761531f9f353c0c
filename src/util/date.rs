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

use anyhow::{bail, Error};
use chrono::{Datelike, Local};
use std::fmt;

/// A whole calendar date with no time-of-day or timezone component. Field
/// order matters: the derived ordering compares year, then month, then day.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Date {
	year: u32,
	month: u8,
	day: u8,
}

impl Date {
	/// Constructor to parse a string in the strict "YYYY-MM-DD" format. Unlike
	/// a lenient split on dashes, unpadded months or days are rejected.
	pub fn from_str(date_str: &str) -> Result<Date, Error> {
		let bytes = date_str.as_bytes();
		let well_formed = bytes.len() == 10
			&& bytes[4] == b'-'
			&& bytes[7] == b'-'
			&& bytes
				.iter()
				.enumerate()
				.all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

		if !well_formed {
			bail!("Date format must be YYYY-MM-DD, got '{}'", date_str);
		}

		let year = date_str[0..4].parse::<u32>()?;
		let month = date_str[5..7].parse::<u8>()?;
		let day = date_str[8..10].parse::<u8>()?;

		Date::from_ymd(year, month, day)
	}

	pub fn from_ymd(year: u32, month: u8, day: u8) -> Result<Date, Error> {
		if !Date::is_valid_date(year, month, day) {
			bail!("Invalid date {:04}-{:02}-{:02}", year, month, day);
		}

		Ok(Date { year, month, day })
	}

	/// The current local calendar date
	pub fn today() -> Date {
		let now = Local::now().date_naive();
		Date {
			year: now.year() as u32,
			month: now.month() as u8,
			day: now.day() as u8,
		}
	}

	/// The first day of the following month, which is where a half-open range
	/// covering the rest of this month ends.
	pub fn first_of_next_month(&self) -> Date {
		if self.month == 12 {
			Date {
				year: self.year + 1,
				month: 1,
				day: 1,
			}
		} else {
			Date {
				year: self.year,
				month: self.month + 1,
				day: 1,
			}
		}
	}

	/// Signed number of nights from this date to the other one. Negative when
	/// the other date is earlier.
	pub fn nights_until(&self, other: &Date) -> i64 {
		other.day_number() - self.day_number()
	}

	/// Days elapsed since 0001-01-01, which is day zero
	fn day_number(&self) -> i64 {
		let prior_years = self.year as i64 - 1;
		let days_in_prior_years = prior_years * 365 + prior_years / 4
			- prior_years / 100
			+ prior_years / 400;

		days_in_prior_years
			+ Date::days_since_year_start(self.year, self.month, self.day)
			- 1
	}

	/// Number of days since the start of the given year, counting the
	/// given day itself
	fn days_since_year_start(year: u32, month: u8, day: u8) -> i64 {
		let full_months: i64 = (1..month)
			.map(|m| Date::days_in_month(year, m) as i64)
			.sum();
		full_months + day as i64
	}

	fn is_leap_year(year: u32) -> bool {
		(year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
	}

	fn days_in_month(year: u32, month: u8) -> u8 {
		match month {
			1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
			4 | 6 | 9 | 11 => 30,
			2 if Date::is_leap_year(year) => 29,
			2 => 28,
			_ => 0,
		}
	}

	fn is_valid_date(year: u32, month: u8, day: u8) -> bool {
		(1..=9999).contains(&year)
			&& (1..=12).contains(&month)
			&& day >= 1
			&& day <= Date::days_in_month(year, month)
	}
}

impl fmt::Display for Date {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
	}
}
