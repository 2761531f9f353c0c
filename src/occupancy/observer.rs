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
use crate::util::quant::Quant;
use anyhow::Error;
use log::debug;

/// Watches the occupancy engine work through a listing. Called once for
/// every reservation that has at least one night inside the query range,
/// with the nights it contributes and the revenue apportioned to them. An
/// error stops the computation.
pub trait OccupancyObserver {
	fn observe(
		&mut self,
		reservation: &Reservation,
		nights: i64,
		revenue: &Quant,
	) -> Result<(), Error>;
}

/// Observes nothing.
pub struct Silent;

impl OccupancyObserver for Silent {
	fn observe(&mut self, _: &Reservation, _: i64, _: &Quant) -> Result<(), Error> {
		Ok(())
	}
}

/// Writes each contribution to the debug log.
pub struct LogObserver {
	/// Decimal places for logged revenue
	precision: u32,
}

impl LogObserver {
	pub fn new(precision: u32) -> Self {
		Self { precision }
	}
}

impl OccupancyObserver for LogObserver {
	fn observe(
		&mut self,
		reservation: &Reservation,
		nights: i64,
		revenue: &Quant,
	) -> Result<(), Error> {
		debug!(
			"{}'s booking ({} to {}): {} of {} nights in range, {} {}",
			reservation.name(),
			reservation.start_date(),
			reservation.end_date(),
			nights,
			reservation.nights(),
			revenue.rounded(self.precision)?,
			reservation.price().currency,
		);
		Ok(())
	}
}
