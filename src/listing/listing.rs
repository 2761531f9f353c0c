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
use crate::listing::reservation::Reservation;

/// The confirmed reservations of one ledger, ordered by start date. Ties keep
/// the order they had in the ledger. A listing is built once per load and
/// never changes afterwards, so any number of queries can share it.
#[derive(Debug, Default)]
pub struct Listing {
	reservations: Vec<Reservation>,
}

impl Listing {
	/// Drops every reservation that is not confirmed and sorts the rest.
	pub fn from_reservations(reservations: Vec<Reservation>) -> Self {
		let mut reservations: Vec<Reservation> = reservations
			.into_iter()
			.filter(Reservation::is_confirmed)
			.collect();

		// sort_by_key is stable
		reservations.sort_by_key(Reservation::start_date);

		Self { reservations }
	}

	pub fn reservations(&self) -> &[Reservation] {
		&self.reservations
	}

	pub fn iter(&self) -> impl Iterator<Item = &Reservation> {
		self.reservations.iter()
	}

	pub fn len(&self) -> usize {
		self.reservations.len()
	}

	pub fn is_empty(&self) -> bool {
		self.reservations.is_empty()
	}

	/// Most decimal places used by any price, for rendering totals
	pub fn price_precision(&self) -> u32 {
		self.reservations
			.iter()
			.map(|r| r.price().value.render_precision())
			.max()
			.unwrap_or(0)
	}

	/// Finds records that are well-formed but inconsistent: nights that do
	/// not agree with the dates, and stays that overlap an earlier stay. The
	/// occupancy engine does not correct either; overlapping stays can push
	/// the book rate above 100%.
	pub fn integrity_warnings(&self) -> Vec<String> {
		let mut warnings = vec![];

		// reservation with the latest end date seen so far
		let mut furthest: Option<&Reservation> = None;

		for reservation in &self.reservations {
			if !reservation.nights_match_dates() {
				warnings.push(format!(
					"{} records {} nights but its dates span {}",
					reservation,
					reservation.nights(),
					reservation.span_nights()
				));
			}

			if let Some(previous) = furthest {
				if reservation.start_date() < previous.end_date() {
					warnings.push(format!(
						"{} overlaps {}",
						reservation, previous
					));
				}
			}

			if furthest.map_or(true, |f| reservation.end_date() > f.end_date()) {
				furthest = Some(reservation);
			}
		}

		warnings
	}
}
