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

/// Standard table printer for reports that list many single-line objects,
/// such as reservations or monthly results.
///
/// Widths are measured in characters rather than bytes, since guest names and
/// currency symbols are frequently outside ASCII.
pub struct Table {
	column_count: usize,
	rows: Vec<Row>,
	right_align: Vec<bool>, // indicates columns by index
}

pub enum Row {
	Header(Vec<String>),
	Data(Vec<String>),
	Separator,
}

impl Table {
	pub fn new(column_count: usize) -> Self {
		Self {
			column_count,
			rows: Vec::new(),
			right_align: vec![false; column_count],
		}
	}

	/// Adds a header row.
	pub fn add_header(&mut self, row: Vec<&str>) {
		self.rows.push(Row::Header(
			row.into_iter().map(|s| s.to_string()).collect(),
		));
	}

	/// Adds a data row.
	pub fn add_row(&mut self, row: Vec<String>) {
		self.rows.push(Row::Data(row));
	}

	/// Adds a full separator row.
	pub fn add_separator(&mut self) {
		self.rows.push(Row::Separator);
	}

	/// Specifies columns that should be right-aligned by index.
	pub fn right_align(&mut self, cols: Vec<usize>) {
		for col in cols {
			self.right_align[col] = true;
		}
	}

	pub fn print(&self) {
		println!();
		for line in self.render() {
			println!("{}", line);
		}
	}

	/// Lays out every row, with trailing whitespace removed.
	pub fn render(&self) -> Vec<String> {
		let mut max_widths = vec![0; self.column_count];

		for row in &self.rows {
			if let Row::Data(cells) | Row::Header(cells) = row {
				for (i, value) in cells.iter().enumerate() {
					max_widths[i] = max_widths[i].max(value.chars().count());
				}
			}
		}

		self.rows
			.iter()
			.map(|row| match row {
				Row::Header(cells) => cells
					.iter()
					.enumerate()
					.map(|(i, value)| Table::center_align(value, max_widths[i]))
					.collect::<Vec<String>>()
					.join(" | "),
				Row::Data(cells) => cells
					.iter()
					.enumerate()
					.map(|(i, value)| self.align(i, value, max_widths[i]))
					.collect::<Vec<String>>()
					.join("   "),
				Row::Separator => {
					let total_width: usize = max_widths.iter().sum::<usize>()
						+ (3 * (self.column_count - 1));
					"-".repeat(total_width)
				},
			})
			.map(|line| line.trim_end().to_string())
			.collect()
	}

	fn align(&self, col: usize, value: &str, width: usize) -> String {
		let padding = " ".repeat(width.saturating_sub(value.chars().count()));
		if self.right_align[col] {
			format!("{}{}", padding, value)
		} else {
			format!("{}{}", value, padding)
		}
	}

	fn center_align(value: &str, width: usize) -> String {
		let len = value.chars().count();
		if len >= width {
			return value.to_string();
		}
		let total_padding = width - len;
		let left_padding = total_padding / 2;
		let right_padding = total_padding - left_padding;

		format!(
			"{}{}{}",
			" ".repeat(left_padding),
			value,
			" ".repeat(right_padding)
		)
	}
}
