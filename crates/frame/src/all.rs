// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colsel_type::Value;

use crate::{ColumnData, Frame, RowRef};

impl ColumnData {
	/// True when every value satisfies `predicate`; vacuously true when empty.
	pub fn all(&self, predicate: impl Fn(&Value) -> bool) -> bool {
		self.iter().all(|v| predicate(&v))
	}

	pub fn all_undefined(&self) -> bool {
		self.is_empty() || (0..self.len()).all(|i| self.is_undefined(i))
	}
}

impl Frame {
	pub fn all_rows(&self, predicate: impl Fn(&RowRef<'_>) -> bool) -> bool {
		self.iter().all(|row| predicate(&row))
	}
}

impl RowRef<'_> {
	pub fn all_undefined(&self) -> bool {
		self.values().iter().all(|v| v.is_undefined())
	}
}
