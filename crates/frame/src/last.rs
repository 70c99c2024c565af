// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colsel_type::{Error, NotFoundKind, Result, Value};

use crate::{ColumnData, Frame, RowRef};

impl ColumnData {
	pub fn last(&self) -> Result<Value> {
		self.last_or_none()
			.ok_or_else(|| Error::not_found(NotFoundKind::Value, "column is empty. Use `last_or_none`"))
	}

	pub fn last_or_none(&self) -> Option<Value> {
		self.len().checked_sub(1).and_then(|index| self.get(index))
	}

	pub fn last_where(&self, predicate: impl Fn(&Value) -> bool) -> Result<Value> {
		self.last_where_or_none(predicate)
			.ok_or_else(|| Error::not_found(NotFoundKind::Value, "no value matches the predicate"))
	}

	/// Scans from the end.
	pub fn last_where_or_none(&self, predicate: impl Fn(&Value) -> bool) -> Option<Value> {
		self.iter().rev().find(|v| predicate(v))
	}
}

impl Frame {
	pub fn last_row(&self) -> Result<RowRef<'_>> {
		self.last_row_or_none()
			.ok_or_else(|| Error::not_found(NotFoundKind::Row, "frame has no rows. Use `last_row_or_none`"))
	}

	pub fn last_row_or_none(&self) -> Option<RowRef<'_>> {
		self.row_count().checked_sub(1).and_then(|index| self.row(index))
	}

	pub fn last_row_where(&self, predicate: impl Fn(&RowRef<'_>) -> bool) -> Result<RowRef<'_>> {
		self.last_row_where_or_none(predicate)
			.ok_or_else(|| Error::not_found(NotFoundKind::Row, "no row matches the predicate"))
	}

	pub fn last_row_where_or_none(&self, predicate: impl Fn(&RowRef<'_>) -> bool) -> Option<RowRef<'_>> {
		self.iter().rev().find(|row| predicate(row))
	}
}
