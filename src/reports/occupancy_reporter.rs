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
use crate::occupancy::engine::Occupancy;
use crate::reports::table::Table;
use crate::util::amount::Amount;
use crate::util::quant::Quant;
use anyhow::Error;

/// Renders query results. Revenue is exact until it reaches this point and
/// is rounded here for display only.
pub struct OccupancyReporter {
	currency: String,
	precision: u32,
}

impl OccupancyReporter {
	pub fn new(currency: &str, precision: u32) -> Self {
		Self {
			currency: currency.to_string(),
			precision,
		}
	}

	pub fn print_summary(&self, occupancy: &Occupancy) -> Result<(), Error> {
		for line in self.summary_lines(occupancy)? {
			println!("{}", line);
		}
		Ok(())
	}

	pub fn print_monthly(&self, months: &[Occupancy]) -> Result<(), Error> {
		self.monthly_table(months)?.print();
		Ok(())
	}

	fn summary_lines(&self, occupancy: &Occupancy) -> Result<Vec<String>, Error> {
		Ok(vec![
			format!("{:<11}{}", "Range:", occupancy.range()),
			format!(
				"{:<11}{} of {} nights",
				"Booked:",
				occupancy.booked_nights(),
				occupancy.available_nights()
			),
			format!("{:<11}{}", "Book rate:", percentage(occupancy.rate())),
			format!("{:<11}{}", "Revenue:", self.money(occupancy.revenue())?),
		])
	}

	fn monthly_table(&self, months: &[Occupancy]) -> Result<Table, Error> {
		let mut table = Table::new(5);
		table.add_header(vec!["Period", "Booked", "Nights", "Rate", "Revenue"]);
		table.add_separator();
		table.right_align(vec![1, 2, 3, 4]);

		for month in months {
			table.add_row(vec![
				month.range().to_string(),
				month.booked_nights().to_string(),
				month.available_nights().to_string(),
				percentage(month.rate()),
				self.money(month.revenue())?,
			]);
		}

		let booked: i64 = months.iter().map(Occupancy::booked_nights).sum();
		let available: i64 = months.iter().map(Occupancy::available_nights).sum();
		let revenue: Quant = months.iter().map(Occupancy::revenue).sum();

		table.add_separator();
		table.add_row(vec![
			"Total".to_string(),
			booked.to_string(),
			available.to_string(),
			percentage(if available > 0 {
				booked as f64 / available as f64
			} else {
				0.0
			}),
			self.money(revenue)?,
		]);

		Ok(table)
	}

	fn money(&self, value: Quant) -> Result<String, Error> {
		Ok(Amount::new(value, &self.currency)
			.rounded(self.precision)?
			.to_string())
	}
}

fn percentage(rate: f64) -> String {
	format!("{:.2}%", rate * 100.0)
}
