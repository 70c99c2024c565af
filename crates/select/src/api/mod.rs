// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Combinators for building column selections.
//!
//! Free functions start from the frame itself; [`ColumnSetDsl`] and
//! [`SingleColumnDsl`] chain further steps onto an existing resolver.
//! Combinators on a single column treat it as a column group and work on its
//! children.

mod all;
mod cols;
mod first;
mod last;
mod none;

pub use all::{all, all_after, all_before, all_from, all_up_to};
pub use cols::{col, cols, column_group, root};
pub use first::{first, first_where};
pub use last::{last, last_where};
pub use none::none;

use crate::{
	ColumnWithPath, ToColumnPath,
	resolver::{
		ColumnFilter, ColumnSet, ColumnsResolver, SingleColumn, SliceKind, TransformableColumnSet, TransformableSingleColumn,
	},
};

pub trait ColumnSetDsl: Into<ColumnSet> {
	/// Every column of this set, unchanged.
	fn all(self) -> TransformableColumnSet {
		all::expand(ColumnsResolver::Set(self.into()))
	}

	fn all_after(self, anchor: impl ToColumnPath) -> TransformableColumnSet {
		all::slice(ColumnsResolver::Set(self.into()), SliceKind::After, &anchor)
	}

	fn all_from(self, anchor: impl ToColumnPath) -> TransformableColumnSet {
		all::slice(ColumnsResolver::Set(self.into()), SliceKind::From, &anchor)
	}

	fn all_before(self, anchor: impl ToColumnPath) -> TransformableColumnSet {
		all::slice(ColumnsResolver::Set(self.into()), SliceKind::Before, &anchor)
	}

	fn all_up_to(self, anchor: impl ToColumnPath) -> TransformableColumnSet {
		all::slice(ColumnsResolver::Set(self.into()), SliceKind::UpTo, &anchor)
	}

	fn first(self) -> TransformableSingleColumn {
		first::pick(ColumnsResolver::Set(self.into()), ColumnFilter::always())
	}

	fn first_where<F>(self, predicate: F) -> TransformableSingleColumn
	where
		F: Fn(&ColumnWithPath<'_>) -> bool + Send + Sync + 'static,
	{
		first::pick(ColumnsResolver::Set(self.into()), ColumnFilter::new(predicate))
	}

	fn last(self) -> TransformableSingleColumn {
		last::pick(ColumnsResolver::Set(self.into()), ColumnFilter::always())
	}

	fn last_where<F>(self, predicate: F) -> TransformableSingleColumn
	where
		F: Fn(&ColumnWithPath<'_>) -> bool + Send + Sync + 'static,
	{
		last::pick(ColumnsResolver::Set(self.into()), ColumnFilter::new(predicate))
	}

	fn filter<F>(self, predicate: F) -> TransformableColumnSet
	where
		F: Fn(&ColumnWithPath<'_>) -> bool + Send + Sync + 'static,
	{
		cols::filter(ColumnsResolver::Set(self.into()), ColumnFilter::new(predicate))
	}

	/// The only column of this set; more than one is an error.
	fn single(self) -> TransformableSingleColumn {
		cols::single(ColumnsResolver::Set(self.into()), ColumnFilter::always())
	}

	fn single_where<F>(self, predicate: F) -> TransformableSingleColumn
	where
		F: Fn(&ColumnWithPath<'_>) -> bool + Send + Sync + 'static,
	{
		cols::single(ColumnsResolver::Set(self.into()), ColumnFilter::new(predicate))
	}

	/// This set followed by `other`, without repeating columns.
	fn and(self, other: impl Into<ColumnsResolver>) -> ColumnSet {
		cols::union(ColumnsResolver::Set(self.into()), other.into())
	}
}

impl<T: Into<ColumnSet>> ColumnSetDsl for T {}

pub trait SingleColumnDsl: Into<SingleColumn> {
	/// All children of this column group.
	fn all_cols(self) -> TransformableColumnSet {
		all::expand(group(self))
	}

	fn all_cols_after(self, anchor: impl ToColumnPath) -> TransformableColumnSet {
		all::slice(group(self), SliceKind::After, &anchor)
	}

	fn all_cols_from(self, anchor: impl ToColumnPath) -> TransformableColumnSet {
		all::slice(group(self), SliceKind::From, &anchor)
	}

	fn all_cols_before(self, anchor: impl ToColumnPath) -> TransformableColumnSet {
		all::slice(group(self), SliceKind::Before, &anchor)
	}

	fn all_cols_up_to(self, anchor: impl ToColumnPath) -> TransformableColumnSet {
		all::slice(group(self), SliceKind::UpTo, &anchor)
	}

	fn first_child(self) -> TransformableSingleColumn {
		first::pick(group(self), ColumnFilter::always())
	}

	fn first_child_where<F>(self, predicate: F) -> TransformableSingleColumn
	where
		F: Fn(&ColumnWithPath<'_>) -> bool + Send + Sync + 'static,
	{
		first::pick(group(self), ColumnFilter::new(predicate))
	}

	fn last_col(self) -> TransformableSingleColumn {
		last::pick(group(self), ColumnFilter::always())
	}

	fn last_col_where<F>(self, predicate: F) -> TransformableSingleColumn
	where
		F: Fn(&ColumnWithPath<'_>) -> bool + Send + Sync + 'static,
	{
		last::pick(group(self), ColumnFilter::new(predicate))
	}

	fn and(self, other: impl Into<ColumnsResolver>) -> ColumnSet {
		cols::union(ColumnsResolver::Single(self.into()), other.into())
	}
}

impl<T: Into<SingleColumn>> SingleColumnDsl for T {}

fn group(column: impl Into<SingleColumn>) -> ColumnsResolver {
	ColumnsResolver::Single(column.into().into_group())
}
