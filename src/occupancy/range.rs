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
use crate::util::date::Date;
use crate::util::error::ContractViolation;
use anyhow::Error;
use std::fmt;

/// The half-open range of nights `[from, to)` a query asks about. Never
/// empty: `from` is strictly earlier than `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryRange {
	from: Date,
	to: Date,
}

impl QueryRange {
	pub fn new(from: Date, to: Date) -> Result<Self, Error> {
		if from >= to {
			return Err(ContractViolation(format!(
				"query range must start before it ends, got {} to {}",
				from, to
			))
			.into());
		}

		Ok(Self { from, to })
	}

	/// Number of nights available in the range; always positive
	pub fn nights(&self) -> i64 {
		self.from.nights_until(&self.to)
	}

	/// Nights of the stay `[start, end)` that fall inside this range, if any
	pub fn overlap(&self, start: Date, end: Date) -> Option<i64> {
		let overlap_start = self.from.max(start);
		let overlap_end = self.to.min(end);

		if overlap_end <= overlap_start {
			return None;
		}

		Some(overlap_start.nights_until(&overlap_end))
	}

	/// Cuts the range at every first-of-month inside it. The pieces adjoin,
	/// so together they cover exactly the same nights.
	pub fn months(&self) -> Vec<QueryRange> {
		let mut pieces = vec![];
		let mut start = self.from;

		while start < self.to {
			let end = start.first_of_next_month().min(self.to);
			pieces.push(QueryRange { from: start, to: end });
			start = end;
		}

		pieces
	}
}

impl fmt::Display for QueryRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} to {}", self.from, self.to)
	}
}
