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
use std::fs;
use std::process::Command;

const DEFAULT_CONFIG: &str = "tests/test_data/config/default.toml";

/// Dynamically collects test cases from a given directory: each `_in.csv`
/// ledger, with its `_out.txt` expected output if there is one.
fn collect_test_cases(subfolder: &str) -> Vec<(String, Option<String>)> {
	let dir_path = format!("tests/test_data/{}", subfolder);

	let mut inputs = vec![];
	let mut outputs = vec![];

	if let Ok(entries) = fs::read_dir(&dir_path) {
		for entry in entries.flatten() {
			let file_name =
				entry.file_name().into_string().unwrap_or_default();
			if file_name.ends_with("_in.csv") {
				inputs.push(file_name);
			} else if file_name.ends_with("_out.txt") {
				outputs.push(file_name);
			}
		}
	}

	inputs.sort();

	let test_cases: Vec<(String, Option<String>)> = inputs
		.into_iter()
		.map(|input_file| {
			let output_file = input_file.replace("_in.csv", "_out.txt");
			let expected = outputs.contains(&output_file).then_some(output_file);
			(input_file, expected)
		})
		.collect();

	assert!(!test_cases.is_empty(), "no test cases in {}", dir_path);
	test_cases
}

#[test]
fn test_integration_rate() {
	let test_cases = collect_test_cases("rate");
	execute(
		"rate",
		test_cases,
		true,
		"rate",
		vec!["-b", "2019-09-13", "-e", "2019-09-19"],
	);
}

#[test]
fn test_integration_range_starting_at_checkout() {
	let test_cases = collect_test_cases("boundary");
	execute(
		"boundary",
		test_cases,
		true,
		"rate",
		vec!["-b", "2019-09-18", "-e", "2019-09-19"],
	);
}

#[test]
fn test_integration_verbose_does_not_change_output() {
	let test_cases = collect_test_cases("winter");
	execute(
		"winter",
		test_cases,
		true,
		"rate",
		vec!["-b", "2019-12-13", "-e", "2020-01-01", "-v"],
	);
}

#[test]
fn test_integration_monthly() {
	let test_cases = collect_test_cases("monthly");
	execute(
		"monthly",
		test_cases,
		true,
		"monthly",
		vec!["-b", "2019-09-01", "-e", "2019-11-01"],
	);
}

#[test]
fn test_integration_list() {
	let test_cases = collect_test_cases("list");
	execute("list", test_cases, true, "list", vec![]);
}

#[test]
fn test_integration_check() {
	let test_cases = collect_test_cases("check");
	execute("check", test_cases, true, "check", vec![]);
}

#[test]
fn test_integration_custom_config() {
	let test_cases = collect_test_cases("usd");
	execute(
		"usd",
		test_cases,
		true,
		"rate",
		vec![
			"--config",
			"tests/test_data/config/usd.toml",
			"-b",
			"2019-09-01",
			"-e",
			"2019-10-01",
		],
	);
}

#[test]
fn test_integration_should_fail() {
	let test_cases = collect_test_cases("failures");
	execute(
		"failures",
		test_cases,
		false,
		"rate",
		vec!["-b", "2019-09-13", "-e", "2019-09-19"],
	);
}

#[test]
fn test_integration_inverted_range_fails() {
	let test_cases = collect_test_cases("inverted");
	execute(
		"inverted",
		test_cases,
		false,
		"rate",
		vec!["-b", "2019-09-19", "-e", "2019-09-13"],
	);
}

#[test]
fn test_integration_max_precision() {
	let test_cases = collect_test_cases("precision");
	execute(
		"precision",
		test_cases,
		true,
		"rate",
		vec!["-b", "2019-09-13", "-e", "2019-09-19", "-p", "18"],
	);
}

#[test]
fn test_integration_precision_above_max_fails() {
	let test_cases = collect_test_cases("precision");
	execute(
		"precision",
		test_cases,
		false,
		"rate",
		vec!["-b", "2019-09-13", "-e", "2019-09-19", "-p", "19"],
	);
}

#[test]
fn test_integration_missing_ledger_fails() {
	let output = Command::new("cargo")
		.args([
			"run",
			"--",
			"-f",
			"tests/test_data/nowhere_in.csv",
			"list",
			"--config",
			DEFAULT_CONFIG,
		])
		.output()
		.expect("Failed to execute process");

	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr)
		.contains("Failed to load reservations from tests/test_data/nowhere_in.csv"));
	assert!(!std::path::Path::new("tests/test_data/nowhere_in.csv").exists());
}

fn execute(
	subfolder: &str,
	test_cases: Vec<(String, Option<String>)>,
	should_succeed: bool,
	cmd: &str,
	args: Vec<&str>,
) {
	for (input_file, expected_output_file) in test_cases {
		println!("running for {}...", input_file);

		let loc = format!("{}/{}/{}", "tests/test_data", subfolder, input_file);

		let mut all_args =
			[vec!["run", "--", "-f", loc.as_str(), cmd], args.clone()].concat();
		if !args.contains(&"--config") {
			all_args.extend(["--config", DEFAULT_CONFIG]);
		}

		let output = Command::new("cargo")
			.args(all_args)
			.output()
			.expect("Failed to execute process");

		if !should_succeed {
			assert!(
				!output.status.success(),
				"{} unexpectedly succeeded!",
				input_file
			);
			continue;
		}

		assert!(
			output.status.success(),
			"{} failed processing: {}",
			input_file,
			String::from_utf8_lossy(&output.stderr)
		);

		let stdout = String::from_utf8_lossy(&output.stdout);

		let expected_output_file = expected_output_file
			.unwrap_or_else(|| panic!("no expected output for {}", input_file));
		let expected_output = fs::read_to_string(format!(
			"{}/{}/{}",
			"tests/test_data", subfolder, expected_output_file
		))
		.expect("Failed to read expected output file");

		assert_eq!(
			stdout.trim(),
			expected_output.trim(),
			"Output did not match for {}; expected:\n{}\ngot:\n{}",
			input_file,
			expected_output.trim(),
			stdout.trim()
		);
	}
}
