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
use thiserror::Error;

/// Attached as context to every failure while loading a reservation ledger.
/// Loading is all-or-nothing, so seeing this means no listing was produced.
#[derive(Debug, Error)]
#[error("Failed to load reservations from {path}")]
pub struct IngestionError {
	pub path: String,
}

/// A caller handed the occupancy engine something it must never receive:
/// an empty or inverted date range, or a reservation without nights.
#[derive(Debug, Error)]
#[error("Contract violation: {0}")]
pub struct ContractViolation(pub String);
