// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::{SingleColumnDsl, root};
use crate::{
	ToColumnPath,
	resolver::{ColumnsResolver, SetStep, Slice, SliceKind, TransformableColumnSet},
};

/// Every top-level column of the frame.
pub fn all() -> TransformableColumnSet {
	root().all_cols()
}

/// Top-level columns following `anchor`.
pub fn all_after(anchor: impl ToColumnPath) -> TransformableColumnSet {
	root().all_cols_after(anchor)
}

/// Top-level columns from `anchor` on, `anchor` included.
pub fn all_from(anchor: impl ToColumnPath) -> TransformableColumnSet {
	root().all_cols_from(anchor)
}

/// Top-level columns preceding `anchor`.
pub fn all_before(anchor: impl ToColumnPath) -> TransformableColumnSet {
	root().all_cols_before(anchor)
}

/// Top-level columns up to `anchor`, `anchor` included.
pub fn all_up_to(anchor: impl ToColumnPath) -> TransformableColumnSet {
	root().all_cols_up_to(anchor)
}

pub(super) fn expand(source: ColumnsResolver) -> TransformableColumnSet {
	TransformableColumnSet::new(source, SetStep::Expand)
}

pub(super) fn slice(source: ColumnsResolver, kind: SliceKind, anchor: &impl ToColumnPath) -> TransformableColumnSet {
	let slice = Slice::new(kind, anchor.to_column_path());
	TransformableColumnSet::new(expand(source), SetStep::Slice(slice))
}
