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
use crate::listing::listing::Listing;
use crate::occupancy::observer::{OccupancyObserver, Silent};
use crate::occupancy::range::QueryRange;
use crate::util::date::Date;
use crate::util::quant::Quant;
use anyhow::Error;

/// What a listing earned over one query range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Occupancy {
	range: QueryRange,
	booked_nights: i64,
	/// Exact, in the ledger's currency
	revenue: Quant,
}

impl Occupancy {
	pub fn range(&self) -> &QueryRange {
		&self.range
	}

	pub fn booked_nights(&self) -> i64 {
		self.booked_nights
	}

	pub fn available_nights(&self) -> i64 {
		self.range.nights()
	}

	/// Booked nights over available nights. Not clamped: a ledger with
	/// overlapping stays can exceed 1.
	pub fn rate(&self) -> f64 {
		self.booked_nights as f64 / self.range.nights() as f64
	}

	pub fn revenue(&self) -> Quant {
		self.revenue
	}
}

/// Book rate and revenue of the listing over `[from, to)`. Fails with a
/// `ContractViolation` when `from` is not before `to`.
pub fn compute(listing: &Listing, from: Date, to: Date) -> Result<Occupancy, Error> {
	compute_observed(listing, &QueryRange::new(from, to)?, &mut Silent)
}

/// Every reservation is tested against the range; the listing's ordering
/// only makes the observer's view deterministic. A reservation contributes
/// the nights of `[start_date, end_date)` that fall in the range, each at its
/// nightly price.
pub fn compute_observed<O: OccupancyObserver + ?Sized>(
	listing: &Listing,
	range: &QueryRange,
	observer: &mut O,
) -> Result<Occupancy, Error> {
	let (booked_nights, revenue) = listing.iter().try_fold(
		(0i64, Quant::zero()),
		|(nights, revenue), reservation| -> Result<(i64, Quant), Error> {
			// checked for every reservation, overlapping or not
			let nightly_price = reservation.nightly_price()?;

			let Some(overlap) =
				range.overlap(reservation.start_date(), reservation.end_date())
			else {
				return Ok((nights, revenue));
			};

			let earned = nightly_price * overlap as i128;
			observer.observe(reservation, overlap, &earned)?;

			Ok((nights + overlap, revenue + earned))
		},
	)?;

	Ok(Occupancy {
		range: *range,
		booked_nights,
		revenue,
	})
}

/// One result per calendar month the range touches, with the first and last
/// months cut to the range.
pub fn compute_monthly(
	listing: &Listing,
	range: &QueryRange,
	observer: &mut dyn OccupancyObserver,
) -> Result<Vec<Occupancy>, Error> {
	range
		.months()
		.iter()
		.map(|month| compute_observed(listing, month, &mut *observer))
		.collect()
}
