// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colsel_type::{ColumnPath, Value};

use crate::{Column, Frame};

/// A borrowed view of one row of a [`Frame`].
#[derive(Debug, Clone, Copy)]
pub struct RowRef<'df> {
	pub(crate) frame: &'df Frame,
	pub(crate) index: usize,
}

impl<'df> RowRef<'df> {
	pub fn index(&self) -> usize {
		self.index
	}

	/// Value of the value column at `path`; `None` when the path does not
	/// name a value column.
	pub fn get(&self, path: impl Into<ColumnPath>) -> Option<ValueRef<'df>> {
		match self.frame.find(&path.into())? {
			Column::Value(column) => column.data.get_ref(self.index),
			Column::Group(_) => None,
		}
	}

	/// Values of all value columns, nested ones included, in declaration order.
	pub fn values(&self) -> Vec<ValueRef<'df>> {
		self.frame
			.as_group()
			.leaves()
			.into_iter()
			.map(|(_, column)| column.data.get_ref(self.index).unwrap_or(ValueRef::Undefined))
			.collect()
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValueRef<'a> {
	Boolean(&'a bool),
	Float8(&'a f64),
	Int4(&'a i32),
	Int8(&'a i64),
	Utf8(&'a str),
	Undefined,
}

impl<'a> ValueRef<'a> {
	pub fn as_value(&self) -> Value {
		match self {
			ValueRef::Boolean(b) => Value::Boolean(**b),
			ValueRef::Float8(v) => Value::float8(**v),
			ValueRef::Int4(v) => Value::Int4(**v),
			ValueRef::Int8(v) => Value::Int8(**v),
			ValueRef::Utf8(s) => Value::Utf8(s.to_string()),
			ValueRef::Undefined => Value::Undefined,
		}
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, ValueRef::Undefined)
	}
}
