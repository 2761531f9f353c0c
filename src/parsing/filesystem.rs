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
use crate::config::config_file::Config;
use anyhow::{anyhow, Error};
use dirs::home_dir;
use std::fs;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Read-only access to the files the tool consumes. Nothing here creates or
/// writes files; a ledger that does not exist is an error.
pub struct Filesystem {}

impl Filesystem {
	pub fn new() -> Self {
		Self {}
	}

	pub fn open(&self, file_path: &str) -> Result<File, Error> {
		let path = Path::new(file_path);
		File::open(path).map_err(|e| anyhow!("Cannot open {}: {}", file_path, e))
	}

	/// Fetches the config from the given path, or the default path if none.
	/// A missing default config just means defaults; a missing custom config
	/// is an error, since it was asked for by name.
	pub fn get_config(
		&self,
		custom_config_path: Option<&String>,
	) -> Result<Config, Error> {
		let config_path = match custom_config_path {
			Some(p) => PathBuf::from(p),
			None => match home_dir() {
				Some(home) => home.join(".config/bookrate/config.toml"),
				None => return Ok(Config::default()),
			},
		};

		if !config_path.exists() && custom_config_path.is_none() {
			return Ok(Config::default());
		}

		let content = fs::read_to_string(&config_path).map_err(|e| {
			anyhow!("Cannot read config {}: {}", config_path.display(), e)
		})?;

		toml::from_str(&content)
			.map_err(|e| anyhow!("failed to parse config: {}", e))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_open_missing_file_fails() {
		let fs = Filesystem::new();
		let err = fs.open("tests/test_data/does_not_exist.csv").unwrap_err();
		assert!(err.to_string().contains("does_not_exist.csv"));
		assert!(!Path::new("tests/test_data/does_not_exist.csv").exists());
	}

	#[test]
	fn test_missing_custom_config_fails() {
		let fs = Filesystem::new();
		let path = "tests/test_data/config/missing.toml".to_string();
		assert!(fs.get_config(Some(&path)).is_err());
	}

	#[test]
	fn test_custom_config() {
		let fs = Filesystem::new();
		let path = "tests/test_data/config/usd.toml".to_string();
		let settings = fs.get_config(Some(&path)).unwrap().settings();
		assert_eq!(settings.currency_symbol, "$");
		assert_eq!(settings.confirmed_status, "confirmed");
		assert_eq!(settings.cancelled_status, "cancelled");
	}
}
