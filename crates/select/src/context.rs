// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colsel_frame::{Column, ColumnGroup, Frame, ValueColumn};
use colsel_type::{ColumnPath, Error, Result};
use tracing::debug;

use crate::{ResolveConfig, UnresolvedColumnsPolicy};

/// Read-only snapshot a selector is resolved against.
#[derive(Debug, Clone, Copy)]
pub struct ColumnResolutionContext<'a> {
	frame: &'a Frame,
	config: ResolveConfig,
}

impl<'a> ColumnResolutionContext<'a> {
	pub fn new(frame: &'a Frame) -> Self {
		Self::with_config(frame, ResolveConfig::default())
	}

	pub fn with_config(frame: &'a Frame, config: ResolveConfig) -> Self {
		Self {
			frame,
			config,
		}
	}

	pub fn frame(&self) -> &'a Frame {
		self.frame
	}

	pub fn config(&self) -> &ResolveConfig {
		&self.config
	}

	/// The frame itself, seen as a column group at the root path.
	pub fn root(&self) -> ColumnWithPath<'a> {
		ColumnWithPath {
			column: ColumnRef::Group(self.frame.as_group()),
			path: ColumnPath::root(),
		}
	}

	/// Finds the column at `path`, applying the configured unresolved-columns policy.
	pub fn lookup(&self, path: &ColumnPath) -> Result<Option<ColumnWithPath<'a>>> {
		match self.frame.find(path) {
			Some(column) => Ok(Some(ColumnWithPath::new(column, path.clone()))),
			None => match self.config.unresolved {
				UnresolvedColumnsPolicy::Fail => Err(Error::ColumnNotFound {
					path: path.clone(),
				}),
				UnresolvedColumnsPolicy::Skip => {
					debug!(%path, "skipping unresolved column");
					Ok(None)
				}
			},
		}
	}
}

/// Borrowed handle of a resolved column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnRef<'a> {
	Value(&'a ValueColumn),
	Group(&'a ColumnGroup),
}

impl<'a> ColumnRef<'a> {
	pub fn name(&self) -> &'a str {
		match *self {
			ColumnRef::Value(column) => &column.name,
			ColumnRef::Group(group) => &group.name,
		}
	}

	pub fn is_group(&self) -> bool {
		matches!(self, ColumnRef::Group(_))
	}

	pub fn as_group(&self) -> Option<&'a ColumnGroup> {
		match *self {
			ColumnRef::Group(group) => Some(group),
			ColumnRef::Value(_) => None,
		}
	}

	pub fn to_column(&self) -> Column {
		match *self {
			ColumnRef::Value(column) => Column::Value(column.clone()),
			ColumnRef::Group(group) => Column::Group(group.clone()),
		}
	}
}

impl<'a> From<&'a Column> for ColumnRef<'a> {
	fn from(column: &'a Column) -> Self {
		match column {
			Column::Value(value) => ColumnRef::Value(value),
			Column::Group(group) => ColumnRef::Group(group),
		}
	}
}

/// A resolved column together with its location in the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnWithPath<'a> {
	pub column: ColumnRef<'a>,
	pub path: ColumnPath,
}

impl<'a> ColumnWithPath<'a> {
	pub fn new(column: &'a Column, path: ColumnPath) -> Self {
		Self {
			column: column.into(),
			path,
		}
	}

	pub fn name(&self) -> &'a str {
		self.column.name()
	}

	pub fn is_group(&self) -> bool {
		self.column.is_group()
	}

	/// Direct children of a column group; empty for value columns.
	pub fn children(&self) -> Vec<ColumnWithPath<'a>> {
		match self.column {
			ColumnRef::Group(group) => {
				group.columns.iter().map(|c| ColumnWithPath::new(c, self.path.child(c.name()))).collect()
			}
			ColumnRef::Value(_) => Vec::new(),
		}
	}

	/// All columns below this one, depth first, each group before its children.
	pub fn descendants(&self) -> Vec<ColumnWithPath<'a>> {
		let mut result = Vec::new();
		for child in self.children() {
			let nested = child.descendants();
			result.push(child);
			result.extend(nested);
		}
		result
	}
}
