// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colsel_type::{Error, NotFoundKind, Result, Value};

use crate::{ColumnData, Frame, RowRef};

impl ColumnData {
	pub fn first(&self) -> Result<Value> {
		self.first_or_none()
			.ok_or_else(|| Error::not_found(NotFoundKind::Value, "column is empty. Use `first_or_none`"))
	}

	pub fn first_or_none(&self) -> Option<Value> {
		self.get(0)
	}

	pub fn first_where(&self, predicate: impl Fn(&Value) -> bool) -> Result<Value> {
		self.first_where_or_none(predicate)
			.ok_or_else(|| Error::not_found(NotFoundKind::Value, "no value matches the predicate"))
	}

	pub fn first_where_or_none(&self, predicate: impl Fn(&Value) -> bool) -> Option<Value> {
		self.iter().find(|v| predicate(v))
	}
}

impl Frame {
	pub fn first_row(&self) -> Result<RowRef<'_>> {
		self.first_row_or_none()
			.ok_or_else(|| Error::not_found(NotFoundKind::Row, "frame has no rows. Use `first_row_or_none`"))
	}

	pub fn first_row_or_none(&self) -> Option<RowRef<'_>> {
		self.row(0)
	}

	pub fn first_row_where(&self, predicate: impl Fn(&RowRef<'_>) -> bool) -> Result<RowRef<'_>> {
		self.first_row_where_or_none(predicate)
			.ok_or_else(|| Error::not_found(NotFoundKind::Row, "no row matches the predicate"))
	}

	pub fn first_row_where_or_none(&self, predicate: impl Fn(&RowRef<'_>) -> bool) -> Option<RowRef<'_>> {
		self.iter().find(|row| predicate(row))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Column, ValueRef};

	#[test]
	fn test_first() {
		let data = ColumnData::utf8(["a", "b", "c"].map(String::from));
		assert_eq!(data.first().unwrap(), Value::utf8("a"));
		assert_eq!(data.first_where(|v| *v == Value::utf8("b")).unwrap(), Value::utf8("b"));
	}

	#[test]
	fn test_first_missing() {
		let data = ColumnData::utf8(["a", "b", "c"].map(String::from));
		let err = data.first_where(|v| *v == Value::utf8("missing")).unwrap_err();
		assert_eq!(err.code(), "SELECT_002");
		assert_eq!(data.first_where_or_none(|v| *v == Value::utf8("missing")), None);
	}

	#[test]
	fn test_first_empty() {
		let data = ColumnData::int4([]);
		assert!(data.first().is_err());
		assert_eq!(data.first_or_none(), None);
		assert_eq!(data.first_where_or_none(|_| true), None);
	}

	#[test]
	fn test_first_row() {
		let frame = Frame::new(vec![Column::int4("id", [1, 2, 3])]);
		assert_eq!(frame.first_row().unwrap().index(), 0);

		let row = frame.first_row_where(|r| r.get("id") == Some(ValueRef::Int4(&2))).unwrap();
		assert_eq!(row.index(), 1);
	}

	#[test]
	fn test_first_row_empty_frame() {
		let frame = Frame::empty();
		let err = frame.first_row().unwrap_err();
		assert_eq!(err.to_string(), "row not found: frame has no rows. Use `first_row_or_none`");
		assert!(frame.first_row_or_none().is_none());
	}
}
