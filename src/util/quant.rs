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
use anyhow::{anyhow, bail, Error};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// An exact rational number used for every money calculation. Prices are
/// divided into nightly rates and multiplied back out by overlapping nights;
/// doing that in binary floating point would make revenue drift by fractions
/// of a cent depending on how a date range is split, so the value is kept as
/// a reduced fraction instead and only rounded when rendered.
#[derive(Clone, Copy, Debug)]
pub struct Quant {
	/// Carries the sign of the value.
	numerator: i128,
	/// Always positive, and coprime with the numerator.
	denominator: i128,

	/// How many decimal places to render when asked to print. Has no effect
	/// on the underlying fraction.
	render_precision: u32,
}

impl Quant {
	/// The most decimal places `rounded` accepts. Leaves room in `i128` for
	/// the scaled numerator of any realistic money amount.
	pub const MAX_DECIMAL_PLACES: u32 = 18;

	pub fn zero() -> Self {
		Self {
			numerator: 0,
			denominator: 1,
			render_precision: 0,
		}
	}

	/// Parses a plain decimal such as `16.94`, `-3` or `0.125`. The number of
	/// digits after the point becomes the render precision.
	pub fn from_str(input: &str) -> Result<Self, Error> {
		let (is_negative, unsigned) = match input.strip_prefix('-') {
			Some(rest) => (true, rest),
			None => (false, input),
		};

		let (whole, fraction) = match unsigned.split_once('.') {
			Some((w, f)) => (w, f),
			None => (unsigned, ""),
		};

		let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
		if whole.is_empty()
			|| !all_digits(whole)
			|| !all_digits(fraction)
			|| (unsigned.contains('.') && fraction.is_empty())
		{
			bail!("Invalid decimal format: '{}'", input);
		}

		let precision = fraction.len() as u32;
		let scale = 10i128
			.checked_pow(precision)
			.ok_or_else(|| anyhow!("Too many decimal places: '{}'", input))?;

		let mut numerator = whole
			.parse::<i128>()
			.ok()
			.and_then(|w| w.checked_mul(scale))
			.ok_or_else(|| anyhow!("Amount out of range: '{}'", input))?;
		if !fraction.is_empty() {
			numerator = numerator
				.checked_add(fraction.parse::<i128>()?)
				.ok_or_else(|| anyhow!("Amount out of range: '{}'", input))?;
		}
		if is_negative {
			numerator = -numerator;
		}

		let mut out = Self {
			numerator,
			denominator: scale,
			render_precision: precision,
		};
		out.reduce();
		Ok(out)
	}

	/// Returns a copy rounded to the given number of decimal places with
	/// banker's rounding (round half to even), rendered at that precision.
	/// Fails rather than overflow when the value cannot be scaled that far.
	pub fn rounded(&self, decimal_places: u32) -> Result<Self, Error> {
		let out_of_range = || {
			anyhow!(
				"Cannot round {} to {} decimal places",
				self,
				decimal_places
			)
		};
		if decimal_places > Self::MAX_DECIMAL_PLACES {
			return Err(out_of_range());
		}

		let scale = 10i128.checked_pow(decimal_places).ok_or_else(out_of_range)?;
		let scaled = self
			.numerator
			.abs()
			.checked_mul(scale)
			.ok_or_else(out_of_range)?;
		let quotient = scaled / self.denominator;
		let twice_remainder = (scaled % self.denominator)
			.checked_mul(2)
			.ok_or_else(out_of_range)?;

		let magnitude = if twice_remainder > self.denominator
			|| (twice_remainder == self.denominator && quotient % 2 != 0)
		{
			quotient + 1
		} else {
			quotient
		};

		let mut out = Self {
			numerator: magnitude * self.numerator.signum(),
			denominator: scale,
			render_precision: decimal_places,
		};
		out.reduce();
		Ok(out)
	}

	pub fn render_precision(&self) -> u32 {
		self.render_precision
	}

	fn reduce(&mut self) {
		if self.numerator == 0 {
			self.denominator = 1;
			return;
		}
		let gcd = Self::gcd(self.numerator.abs(), self.denominator);
		self.numerator /= gcd;
		self.denominator /= gcd;
	}

	fn gcd(mut a: i128, mut b: i128) -> i128 {
		while b != 0 {
			let temp = b;
			b = a % b;
			a = temp;
		}
		a
	}
}

impl fmt::Display for Quant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let precision = f.precision().unwrap_or(self.render_precision as usize);
		let denominator = self.denominator.unsigned_abs();
		let magnitude = self.numerator.unsigned_abs();

		let integer_part = magnitude / denominator;
		let mut remainder = magnitude % denominator;

		let mut fraction_str = String::with_capacity(precision);
		for _ in 0..precision {
			remainder *= 10;
			let digit = (remainder / denominator) as u32;
			remainder %= denominator;
			fraction_str.push(char::from_digit(digit, 10).unwrap_or('0'));
		}

		let digits = integer_part.to_string();
		let mut int_str = String::with_capacity(digits.len() + digits.len() / 3);
		for (i, c) in digits.chars().enumerate() {
			if i > 0 && (digits.len() - i) % 3 == 0 {
				int_str.push(',');
			}
			int_str.push(c);
		}

		let sign = if self.numerator < 0 { "-" } else { "" };
		if fraction_str.is_empty() {
			write!(f, "{}{}", sign, int_str)
		} else {
			write!(f, "{}{}.{}", sign, int_str, fraction_str)
		}
	}
}

// -----------------
// -- BOILERPLATE --
// -----------------

impl Add for Quant {
	type Output = Self;

	fn add(self, rhs: Self) -> Self::Output {
		// scale to the least common denominator to limit overflow
		let gcd = Self::gcd(self.denominator, rhs.denominator);
		let lcm = self.denominator / gcd * rhs.denominator;

		let mut out = Self {
			numerator: self.numerator * (lcm / self.denominator)
				+ rhs.numerator * (lcm / rhs.denominator),
			denominator: lcm,
			render_precision: self.render_precision.max(rhs.render_precision),
		};
		out.reduce();
		out
	}
}

impl AddAssign for Quant {
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

impl Sum for Quant {
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Quant::zero(), |acc, quant| acc + quant)
	}
}

impl Sub for Quant {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self::Output {
		self + (-rhs)
	}
}

impl Mul<i128> for Quant {
	type Output = Self;

	fn mul(self, rhs: i128) -> Self::Output {
		// cancel against the denominator first
		let gcd = Self::gcd(rhs.abs(), self.denominator).max(1);

		let mut out = Self {
			numerator: self.numerator * (rhs / gcd),
			denominator: self.denominator / gcd,
			render_precision: self.render_precision,
		};
		out.reduce();
		out
	}
}

impl Div<i128> for Quant {
	type Output = Self;

	fn div(self, rhs: i128) -> Self::Output {
		if rhs == 0 {
			panic!("Attempt to divide by zero");
		}

		let gcd = Self::gcd(self.numerator.abs(), rhs.abs()).max(1);

		let mut out = Self {
			numerator: self.numerator / gcd * rhs.signum(),
			denominator: self.denominator * (rhs.abs() / gcd),
			render_precision: self.render_precision,
		};
		out.reduce();
		out
	}
}

impl Neg for Quant {
	type Output = Self;

	fn neg(self) -> Self::Output {
		Self {
			numerator: -self.numerator,
			..self
		}
	}
}

/// Fractions are always kept reduced with a positive denominator, so two
/// values are equal exactly when their parts are.
impl PartialEq for Quant {
	fn eq(&self, other: &Self) -> bool {
		self.numerator == other.numerator
			&& self.denominator == other.denominator
	}
}

impl Eq for Quant {}

impl PartialOrd for Quant {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Quant {
	fn cmp(&self, other: &Self) -> Ordering {
		let gcd = Self::gcd(self.denominator, other.denominator);
		let left = self.numerator * (other.denominator / gcd);
		let right = other.numerator * (self.denominator / gcd);
		left.cmp(&right)
	}
}

impl Hash for Quant {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.numerator.hash(state);
		self.denominator.hash(state);
		// `render_precision` intentionally excluded from the hash
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn q(s: &str) -> Quant {
		Quant::from_str(s).unwrap()
	}

	mod parsing {
		use super::*;

		#[test]
		fn test_plain_decimal() {
			let value = q("16.94");
			assert_eq!(value, q("1694") / 100);
			assert_eq!(value.render_precision(), 2);
		}

		#[test]
		fn test_integer_and_negative() {
			assert_eq!(q("42") / 42, q("1"));
			assert_eq!(q("-3.5"), q("-7") / 2);
			assert_eq!(q("-0"), Quant::zero());
		}

		#[test]
		fn test_trailing_zeros_keep_precision() {
			let value = q("10.500");
			assert_eq!(value, q("21") / 2);
			assert_eq!(value.render_precision(), 3);
		}

		#[test]
		fn test_rejects_malformed() {
			for bad in [
				"",
				"-",
				".5",
				"5.",
				"1.2.3",
				"1,000",
				"€10",
				"1e3",
				" 1",
				"1000.0000000000000000000000000000000000001",
				"999999999999999999999999999999999999999999",
			] {
				assert!(Quant::from_str(bad).is_err(), "{} should not parse", bad);
			}
		}
	}

	mod arithmetic {
		use super::*;

		#[test]
		fn test_add_and_sub() {
			assert_eq!(q("0.1") + q("0.2"), q("0.3"));
			assert_eq!(q("1.25") - q("2"), q("-0.75"));
			assert_eq!((q("1.5") + q("0.25")).render_precision(), 2);
		}

		#[test]
		fn test_division_is_exact() {
			let nightly = q("10") / 3;
			assert_eq!(nightly * 3, q("10"));
			assert_eq!(nightly + nightly + nightly, q("10"));
		}

		#[test]
		fn test_negative_divisor() {
			assert_eq!(q("6") / -4, q("-1.5"));
		}

		#[test]
		#[should_panic]
		fn test_divide_by_zero() {
			let _ = q("1") / 0;
		}

		#[test]
		fn test_sum() {
			let total: Quant = vec![q("1.1"), q("2.2"), q("3.3")].into_iter().sum();
			assert_eq!(total, q("6.6"));
		}

		#[test]
		fn test_ordering() {
			assert!(q("0.333") < q("1") / 3);
			assert!(q("-2") < q("-1.5"));
			assert!(q("3.388") > q("3.385"));
		}
	}

	mod rounding {
		use super::*;

		#[test]
		fn test_round_half_to_even() {
			assert_eq!(q("0.125").rounded(2).unwrap(), q("0.12"));
			assert_eq!(q("0.135").rounded(2).unwrap(), q("0.14"));
			assert_eq!(q("2.5").rounded(0).unwrap(), q("2"));
			assert_eq!(q("3.5").rounded(0).unwrap(), q("4"));
		}

		#[test]
		fn test_round_repeating_fraction() {
			let value = (q("16.94") / 5) * 2;
			assert_eq!(value.rounded(2).unwrap(), q("6.78"));
			assert_eq!((q("7") / -3).rounded(0).unwrap(), q("-2"));
		}

		#[test]
		fn test_rounded_sets_render_precision() {
			assert_eq!(q("1").rounded(2).unwrap().render_precision(), 2);
			assert_eq!(q("1").rounded(2).unwrap().to_string(), "1.00");
		}

		#[test]
		fn test_round_to_max_decimal_places() {
			let nightly = q("16.94") / 5;
			let rounded = nightly.rounded(Quant::MAX_DECIMAL_PLACES).unwrap();
			assert_eq!(rounded, q("3.388"));
			assert_eq!(rounded.to_string(), "3.388000000000000000");
		}

		#[test]
		fn test_rounding_that_would_overflow_fails() {
			assert!((q("16.94") / 5).rounded(36).is_err());
			assert!((q("16.94") / 5)
				.rounded(Quant::MAX_DECIMAL_PLACES + 1)
				.is_err());
			let huge = q("100000000000000000000000");
			assert!(huge.rounded(Quant::MAX_DECIMAL_PLACES).is_err());
			assert!(huge.rounded(2).is_ok());
		}
	}

	mod display {
		use super::*;

		#[test]
		fn test_pads_to_render_precision() {
			assert_eq!(q("16.90").to_string(), "16.90");
			assert_eq!(q("-0.5").to_string(), "-0.5");
		}

		#[test]
		fn test_thousands_separators() {
			assert_eq!(q("1234567.89").to_string(), "1,234,567.89");
			assert_eq!(q("999").to_string(), "999");
			assert_eq!(q("1000").to_string(), "1,000");
		}

		#[test]
		fn test_explicit_precision() {
			assert_eq!(format!("{:.3}", q("1") / 3), "0.333");
			assert_eq!(format!("{:.0}", q("12.9")), "12");
		}
	}
}
