// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Debug, Formatter},
	marker::PhantomData,
};

use colsel_frame::{Column, RowRef};
use colsel_type::{ColumnPath, GetType, Type, Value};

use crate::ColumnWithPath;

/// Anything that names a column.
///
/// A plain name is a one-segment path; use [`ColumnPath`] or
/// [`path_of`](colsel_type::path_of) for nested columns.
pub trait ToColumnPath {
	fn to_column_path(&self) -> ColumnPath;
}

impl ToColumnPath for str {
	fn to_column_path(&self) -> ColumnPath {
		ColumnPath::from(self)
	}
}

impl ToColumnPath for String {
	fn to_column_path(&self) -> ColumnPath {
		ColumnPath::from(self.as_str())
	}
}

impl ToColumnPath for ColumnPath {
	fn to_column_path(&self) -> ColumnPath {
		self.clone()
	}
}

impl<T: ToColumnPath + ?Sized> ToColumnPath for &T {
	fn to_column_path(&self) -> ColumnPath {
		(**self).to_column_path()
	}
}

impl ToColumnPath for ColumnWithPath<'_> {
	fn to_column_path(&self) -> ColumnPath {
		self.path.clone()
	}
}

/// A top-level column, named by itself.
impl ToColumnPath for Column {
	fn to_column_path(&self) -> ColumnPath {
		ColumnPath::from(self.name())
	}
}

/// Typed handle of a column whose values are of type `T`.
pub struct ColumnAccessor<T> {
	path: ColumnPath,
	_marker: PhantomData<fn() -> T>,
}

impl<T> ColumnAccessor<T> {
	pub fn new(path: impl Into<ColumnPath>) -> Self {
		Self {
			path: path.into(),
			_marker: PhantomData,
		}
	}

	pub fn path(&self) -> &ColumnPath {
		&self.path
	}

	/// The value of this column in `row`, if the column exists there.
	pub fn value(&self, row: &RowRef<'_>) -> Option<Value> {
		row.get(self.path.clone()).map(|v| v.as_value())
	}
}

impl<T: GetType> ColumnAccessor<T> {
	pub fn ty(&self) -> Type {
		T::get_type()
	}
}

impl<T> Clone for ColumnAccessor<T> {
	fn clone(&self) -> Self {
		Self::new(self.path.clone())
	}
}

impl<T> Debug for ColumnAccessor<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("ColumnAccessor").field("path", &self.path).finish()
	}
}

impl<T> ToColumnPath for ColumnAccessor<T> {
	fn to_column_path(&self) -> ColumnPath {
		self.path.clone()
	}
}

/// Static descriptor of a record field that maps onto a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Property {
	name: &'static str,
}

impl Property {
	pub const fn new(name: &'static str) -> Self {
		Self {
			name,
		}
	}

	pub const fn name(&self) -> &'static str {
		self.name
	}
}

impl ToColumnPath for Property {
	fn to_column_path(&self) -> ColumnPath {
		ColumnPath::from(self.name)
	}
}
