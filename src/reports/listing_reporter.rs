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
use crate::reports::table::Table;

pub struct ListingReporter<'a> {
	listing: &'a Listing,
}

impl<'a> ListingReporter<'a> {
	pub fn new(listing: &'a Listing) -> Self {
		Self { listing }
	}

	/// One line per confirmed reservation, in start date order
	pub fn print_reservations(&self) {
		self.reservation_table().print();
	}

	/// Prints every integrity warning on its own line, then a closing line
	pub fn print_integrity_check(&self) {
		for warning in self.listing.integrity_warnings() {
			println!("Warning: {}", warning);
		}
		println!("Done");
	}

	fn reservation_table(&self) -> Table {
		let mut table = Table::new(6);
		table.add_header(vec!["Code", "Name", "Start", "End", "Nights", "Price"]);
		table.add_separator();
		table.right_align(vec![4, 5]);

		for reservation in self.listing.reservations() {
			table.add_row(vec![
				reservation.code().unwrap_or("-").to_string(),
				reservation.name().to_string(),
				reservation.start_date().to_string(),
				reservation.end_date().to_string(),
				reservation.nights().to_string(),
				reservation.price().to_string(),
			]);
		}

		table
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::config_file::Settings;
	use crate::parsing::reader::Reader;

	#[test]
	fn test_reservation_table() {
		let input = "reservation_code,status,name,start_date,end_date,nights,price\n\
			HMBQ42,已确认,Bo,2019-12-27,2019-12-30,3,€10.155\n\
			,已确认,Ada,2019-09-13,2019-09-18,5,€16.94\n";
		let listing = Reader::new(&Settings::default())
			.unwrap()
			.read_from(input.as_bytes())
			.unwrap();

		assert_eq!(
			ListingReporter::new(&listing).reservation_table().render(),
			vec![
				" Code  | Name |   Start    |    End     | Nights |  Price",
				"-----------------------------------------------------------",
				"-        Ada    2019-09-13   2019-09-18        5    16.94 €",
				"HMBQ42   Bo     2019-12-27   2019-12-30        3   10.155 €",
			]
		);
	}
}
