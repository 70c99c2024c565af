// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colsel_type::Value;

use crate::ValueRef;

#[derive(Clone, Debug, PartialEq)]
pub enum ColumnData {
	// value, is_valid
	Bool(Vec<bool>, Vec<bool>),
	Float8(Vec<f64>, Vec<bool>),
	Int4(Vec<i32>, Vec<bool>),
	Int8(Vec<i64>, Vec<bool>),
	Utf8(Vec<String>, Vec<bool>),

	// special case: all undefined
	Undefined(usize),
}

impl ColumnData {
	pub fn bool(values: impl IntoIterator<Item = bool>) -> Self {
		let values: Vec<bool> = values.into_iter().collect();
		let valid = vec![true; values.len()];
		ColumnData::Bool(values, valid)
	}

	pub fn bool_with_validity(cells: impl IntoIterator<Item = (bool, bool)>) -> Self {
		let (values, valid) = cells.into_iter().unzip();
		ColumnData::Bool(values, valid)
	}

	pub fn float8(values: impl IntoIterator<Item = f64>) -> Self {
		let values: Vec<f64> = values.into_iter().collect();
		let valid = vec![true; values.len()];
		ColumnData::Float8(values, valid)
	}

	pub fn float8_with_validity(cells: impl IntoIterator<Item = (f64, bool)>) -> Self {
		let (values, valid) = cells.into_iter().unzip();
		ColumnData::Float8(values, valid)
	}

	pub fn int4(values: impl IntoIterator<Item = i32>) -> Self {
		let values: Vec<i32> = values.into_iter().collect();
		let valid = vec![true; values.len()];
		ColumnData::Int4(values, valid)
	}

	pub fn int4_with_validity(cells: impl IntoIterator<Item = (i32, bool)>) -> Self {
		let (values, valid) = cells.into_iter().unzip();
		ColumnData::Int4(values, valid)
	}

	pub fn int8(values: impl IntoIterator<Item = i64>) -> Self {
		let values: Vec<i64> = values.into_iter().collect();
		let valid = vec![true; values.len()];
		ColumnData::Int8(values, valid)
	}

	pub fn utf8(values: impl IntoIterator<Item = String>) -> Self {
		let values: Vec<String> = values.into_iter().collect();
		let valid = vec![true; values.len()];
		ColumnData::Utf8(values, valid)
	}

	pub fn utf8_with_validity(cells: impl IntoIterator<Item = (String, bool)>) -> Self {
		let (values, valid) = cells.into_iter().unzip();
		ColumnData::Utf8(values, valid)
	}

	pub fn undefined(len: usize) -> Self {
		ColumnData::Undefined(len)
	}

	pub fn len(&self) -> usize {
		match self {
			ColumnData::Bool(_, b) => b.len(),
			ColumnData::Float8(_, b) => b.len(),
			ColumnData::Int4(_, b) => b.len(),
			ColumnData::Int8(_, b) => b.len(),
			ColumnData::Utf8(_, b) => b.len(),
			ColumnData::Undefined(n) => *n,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn is_undefined(&self, index: usize) -> bool {
		match self {
			ColumnData::Bool(_, b)
			| ColumnData::Float8(_, b)
			| ColumnData::Int4(_, b)
			| ColumnData::Int8(_, b)
			| ColumnData::Utf8(_, b) => !b.get(index).copied().unwrap_or(false),
			ColumnData::Undefined(_) => true,
		}
	}

	/// Borrowed view of the value at `index`, `None` when out of bounds.
	pub fn get_ref(&self, index: usize) -> Option<ValueRef<'_>> {
		if index >= self.len() {
			return None;
		}
		if self.is_undefined(index) {
			return Some(ValueRef::Undefined);
		}
		// a validity slot without a value reads as undefined
		let value = match self {
			ColumnData::Bool(v, _) => v.get(index).map(ValueRef::Boolean),
			ColumnData::Float8(v, _) => v.get(index).map(ValueRef::Float8),
			ColumnData::Int4(v, _) => v.get(index).map(ValueRef::Int4),
			ColumnData::Int8(v, _) => v.get(index).map(ValueRef::Int8),
			ColumnData::Utf8(v, _) => v.get(index).map(|s| ValueRef::Utf8(s.as_str())),
			ColumnData::Undefined(_) => None,
		};
		Some(value.unwrap_or(ValueRef::Undefined))
	}

	pub fn get(&self, index: usize) -> Option<Value> {
		self.get_ref(index).map(|v| v.as_value())
	}

	pub fn iter(&self) -> impl DoubleEndedIterator<Item = Value> + '_ {
		(0..self.len()).map(move |i| self.get(i).unwrap_or(Value::Undefined))
	}
}
