// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::{Deref, Index};

use colsel_type::{ColumnPath, Error, Result};

use crate::{Column, ColumnGroup, FrameIter, RowRef};

/// An ordered collection of equally long columns.
///
/// The frame itself behaves as an unnamed column group: its top-level columns
/// are the children of [`Frame::as_group`], addressed by the root path.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
	root: ColumnGroup,
}

impl Deref for Frame {
	type Target = [Column];

	fn deref(&self) -> &Self::Target {
		&self.root.columns
	}
}

impl Index<usize> for Frame {
	type Output = Column;

	fn index(&self, index: usize) -> &Self::Output {
		self.root.columns.index(index)
	}
}

impl Frame {
	pub fn new(columns: Vec<Column>) -> Self {
		Self {
			root: ColumnGroup {
				name: String::new(),
				columns,
			},
		}
	}

	pub fn empty() -> Self {
		Self::new(Vec::new())
	}

	pub fn columns(&self) -> &[Column] {
		&self.root.columns
	}

	pub fn into_columns(self) -> Vec<Column> {
		self.root.columns
	}

	pub fn as_group(&self) -> &ColumnGroup {
		&self.root
	}

	pub fn row_count(&self) -> usize {
		self.root.row_count()
	}

	pub fn find(&self, path: &ColumnPath) -> Option<&Column> {
		self.root.find(path)
	}

	pub fn row(&self, index: usize) -> Option<RowRef<'_>> {
		if index >= self.row_count() {
			return None;
		}
		Some(RowRef {
			frame: self,
			index,
		})
	}

	/// Like [`row`](Self::row), but an index past the last row is an error.
	pub fn try_row(&self, index: usize) -> Result<RowRef<'_>> {
		self.row(index).ok_or(Error::IndexOutOfBounds {
			index,
			len: self.row_count(),
		})
	}

	pub fn iter(&self) -> FrameIter<'_> {
		FrameIter {
			frame: self,
			row_index: 0,
			row_total: self.row_count(),
		}
	}
}
