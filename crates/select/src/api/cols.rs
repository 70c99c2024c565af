// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::all::expand;
use crate::{
	ToColumnPath,
	resolver::{
		ColumnFilter, ColumnSet, ColumnsResolver, SetStep, SingleColumn, SingleStep, TransformableColumnSet,
		TransformableSingleColumn,
	},
};

/// The frame itself, as an unnamed column group.
pub fn root() -> SingleColumn {
	SingleColumn::Root
}

/// The column at `path`.
pub fn col(path: impl ToColumnPath) -> SingleColumn {
	SingleColumn::Path(path.to_column_path())
}

/// The column group at `path`; resolving fails if it is a value column.
pub fn column_group(path: impl ToColumnPath) -> SingleColumn {
	col(path).into_group()
}

/// The given columns, in the given order.
pub fn cols<I>(paths: I) -> ColumnSet
where
	I: IntoIterator,
	I::Item: ToColumnPath,
{
	ColumnSet::List(paths.into_iter().map(|p| p.to_column_path()).collect())
}

pub(super) fn filter(source: ColumnsResolver, filter: ColumnFilter) -> TransformableColumnSet {
	TransformableColumnSet::new(expand(source), SetStep::Filter(filter))
}

pub(super) fn single(source: ColumnsResolver, filter: ColumnFilter) -> TransformableSingleColumn {
	TransformableSingleColumn::new(
		expand(source),
		SingleStep::Single {
			filter,
		},
	)
}

pub(super) fn union(left: ColumnsResolver, right: ColumnsResolver) -> ColumnSet {
	let mut parts = match left {
		ColumnsResolver::Set(ColumnSet::Union(parts)) => parts,
		other => vec![other],
	};
	parts.push(right);
	ColumnSet::Union(parts)
}
