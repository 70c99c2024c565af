// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub use data::ColumnData;

mod data;

use colsel_type::ColumnPath;

/// A column holding values.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueColumn {
	pub name: String,
	pub data: ColumnData,
}

/// A column whose cells are themselves rows; its children are ordinary columns.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnGroup {
	pub name: String,
	pub columns: Vec<Column>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Column {
	Value(ValueColumn),
	Group(ColumnGroup),
}

impl Column {
	pub fn new(name: &str, data: ColumnData) -> Self {
		Column::Value(ValueColumn {
			name: name.to_string(),
			data,
		})
	}

	pub fn bool(name: &str, values: impl IntoIterator<Item = bool>) -> Self {
		Self::new(name, ColumnData::bool(values))
	}

	/// Column from `(value, is_valid)` cells.
	pub fn bool_with_validity(name: &str, cells: impl IntoIterator<Item = (bool, bool)>) -> Self {
		Self::new(name, ColumnData::bool_with_validity(cells))
	}

	pub fn float8(name: &str, values: impl IntoIterator<Item = f64>) -> Self {
		Self::new(name, ColumnData::float8(values))
	}

	pub fn int4(name: &str, values: impl IntoIterator<Item = i32>) -> Self {
		Self::new(name, ColumnData::int4(values))
	}

	pub fn int4_with_validity(name: &str, cells: impl IntoIterator<Item = (i32, bool)>) -> Self {
		Self::new(name, ColumnData::int4_with_validity(cells))
	}

	pub fn int8(name: &str, values: impl IntoIterator<Item = i64>) -> Self {
		Self::new(name, ColumnData::int8(values))
	}

	pub fn utf8<'a>(name: &str, values: impl IntoIterator<Item = &'a str>) -> Self {
		Self::new(name, ColumnData::utf8(values.into_iter().map(|s| s.to_string())))
	}

	pub fn utf8_with_validity<'a>(name: &str, cells: impl IntoIterator<Item = (&'a str, bool)>) -> Self {
		Self::new(name, ColumnData::utf8_with_validity(cells.into_iter().map(|(s, valid)| (s.to_string(), valid))))
	}

	pub fn undefined(name: &str, len: usize) -> Self {
		Self::new(name, ColumnData::undefined(len))
	}

	pub fn group(name: &str, columns: Vec<Column>) -> Self {
		Column::Group(ColumnGroup::new(name, columns))
	}

	pub fn name(&self) -> &str {
		match self {
			Column::Value(column) => &column.name,
			Column::Group(group) => &group.name,
		}
	}

	pub fn is_group(&self) -> bool {
		matches!(self, Column::Group(_))
	}

	pub fn as_group(&self) -> Option<&ColumnGroup> {
		match self {
			Column::Group(group) => Some(group),
			Column::Value(_) => None,
		}
	}

	pub fn as_value(&self) -> Option<&ValueColumn> {
		match self {
			Column::Value(column) => Some(column),
			Column::Group(_) => None,
		}
	}

	/// Number of cells; a group has as many rows as its children.
	pub fn len(&self) -> usize {
		match self {
			Column::Value(column) => column.data.len(),
			Column::Group(group) => group.row_count(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl ColumnGroup {
	pub fn new(name: &str, columns: Vec<Column>) -> Self {
		Self {
			name: name.to_string(),
			columns,
		}
	}

	pub fn row_count(&self) -> usize {
		self.columns.first().map_or(0, Column::len)
	}

	pub fn get(&self, name: &str) -> Option<&Column> {
		self.columns.iter().find(|c| c.name() == name)
	}

	/// Looks a column up by its path relative to this group.
	pub fn find(&self, path: &ColumnPath) -> Option<&Column> {
		let (first, rest) = path.split_first()?;
		let column = self.get(first)?;
		if rest.is_empty() {
			return Some(column);
		}
		column.as_group()?.find(&ColumnPath::new(rest.to_vec()))
	}

	/// All value columns below this group in declaration order, with their
	/// paths relative to the group.
	pub fn leaves(&self) -> Vec<(ColumnPath, &ValueColumn)> {
		let mut result = Vec::new();
		collect_leaves(self, &ColumnPath::root(), &mut result);
		result
	}
}

fn collect_leaves<'a>(group: &'a ColumnGroup, prefix: &ColumnPath, out: &mut Vec<(ColumnPath, &'a ValueColumn)>) {
	for column in &group.columns {
		let path = prefix.child(column.name());
		match column {
			Column::Value(value) => out.push((path, value)),
			Column::Group(nested) => collect_leaves(nested, &path, out),
		}
	}
}
