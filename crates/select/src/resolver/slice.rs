// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colsel_type::ColumnPath;

use super::Resolved;
use crate::ColumnWithPath;

/// Which side of the anchor column a [`Slice`] keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceKind {
	After,
	From,
	Before,
	UpTo,
}

/// Positional cut of an ordered column sequence at an anchor column.
///
/// The anchor matches a column whose path equals it, or whose path relative
/// to the column group the sequence was taken from equals it. A column that
/// satisfies both forms is one match. Only the first match in the sequence
/// moves the cut; later columns equal to the anchor are ordinary columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice {
	pub kind: SliceKind,
	pub anchor: ColumnPath,
}

impl Slice {
	pub fn new(kind: SliceKind, anchor: ColumnPath) -> Self {
		Self {
			kind,
			anchor,
		}
	}

	pub(crate) fn apply<'a>(&self, resolved: Resolved<'a>) -> Resolved<'a> {
		let Resolved {
			columns,
			scope,
		} = resolved;
		let columns = SliceIter::new(self, &scope, columns.into_iter()).collect();
		Resolved::scoped(columns, scope)
	}

	fn matches(&self, scope: &ColumnPath, column: &ColumnWithPath<'_>) -> bool {
		column.path == self.anchor || column.path.strip_prefix(scope).is_some_and(|p| p == self.anchor)
	}
}

/// Single forward scan carrying one "emit now" flag.
struct SliceIter<'s, I> {
	slice: &'s Slice,
	scope: &'s ColumnPath,
	inner: I,
	take: bool,
	done: bool,
}

impl<'s, I> SliceIter<'s, I> {
	fn new(slice: &'s Slice, scope: &'s ColumnPath, inner: I) -> Self {
		let take = matches!(slice.kind, SliceKind::Before | SliceKind::UpTo);
		Self {
			slice,
			scope,
			inner,
			take,
			done: false,
		}
	}
}

impl<'a, I> Iterator for SliceIter<'_, I>
where
	I: Iterator<Item = ColumnWithPath<'a>>,
{
	type Item = ColumnWithPath<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}
		loop {
			let column = self.inner.next()?;
			if self.take && matches!(self.slice.kind, SliceKind::After | SliceKind::From) {
				return Some(column);
			}
			if !self.slice.matches(self.scope, &column) {
				if self.take {
					return Some(column);
				}
				continue;
			}
			match self.slice.kind {
				SliceKind::After => self.take = true,
				SliceKind::From => {
					self.take = true;
					return Some(column);
				}
				SliceKind::Before => {
					self.done = true;
					return None;
				}
				SliceKind::UpTo => {
					self.done = true;
					return Some(column);
				}
			}
		}
	}
}
