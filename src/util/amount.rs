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
use crate::util::quant::Quant;
use anyhow::Error;
use std::fmt;

/// A quant value with a currency.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Amount {
	pub currency: String,
	pub value: Quant,
}

impl Amount {
	pub fn new(value: Quant, currency: &str) -> Self {
		Self {
			value,
			currency: currency.to_string(),
		}
	}

	/// Rounds for presentation; the currency is kept.
	pub fn rounded(&self, decimal_places: u32) -> Result<Self, Error> {
		Ok(Self::new(self.value.rounded(decimal_places)?, &self.currency))
	}
}

impl fmt::Display for Amount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.value, self.currency)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display() {
		let amount = Amount::new(Quant::from_str("16.94").unwrap(), "€");
		assert_eq!(amount.to_string(), "16.94 €");
		assert_eq!(Amount::new(Quant::zero(), "€").to_string(), "0 €");
	}

	#[test]
	fn test_rounded_keeps_currency() {
		let amount = Amount::new(Quant::from_str("10").unwrap() / 3, "€")
			.rounded(2)
			.unwrap();
		assert_eq!(amount.to_string(), "3.33 €");
		assert_eq!(amount.currency, "€");
	}
}
