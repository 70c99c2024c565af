// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::{SingleColumnDsl, all::expand, root};
use crate::{
	ColumnWithPath,
	resolver::{ColumnFilter, ColumnsResolver, PickEnd, SingleStep, TransformableSingleColumn},
};

/// The first top-level column. Resolving fails if the frame has no columns.
pub fn first() -> TransformableSingleColumn {
	root().first_child()
}

/// The first top-level column matching `predicate`.
pub fn first_where<F>(predicate: F) -> TransformableSingleColumn
where
	F: Fn(&ColumnWithPath<'_>) -> bool + Send + Sync + 'static,
{
	root().first_child_where(predicate)
}

pub(super) fn pick(source: ColumnsResolver, filter: ColumnFilter) -> TransformableSingleColumn {
	TransformableSingleColumn::new(
		expand(source),
		SingleStep::Pick {
			end: PickEnd::First,
			filter,
		},
	)
}
