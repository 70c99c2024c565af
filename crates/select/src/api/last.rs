// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::{SingleColumnDsl, all::expand, root};
use crate::{
	ColumnWithPath,
	resolver::{ColumnFilter, ColumnsResolver, PickEnd, SingleStep, TransformableSingleColumn},
};

pub fn last() -> TransformableSingleColumn {
	root().last_col()
}

/// The last top-level column matching `predicate`, searching backwards.
pub fn last_where<F>(predicate: F) -> TransformableSingleColumn
where
	F: Fn(&ColumnWithPath<'_>) -> bool + Send + Sync + 'static,
{
	root().last_col_where(predicate)
}

pub(super) fn pick(source: ColumnsResolver, filter: ColumnFilter) -> TransformableSingleColumn {
	TransformableSingleColumn::new(
		expand(source),
		SingleStep::Pick {
			end: PickEnd::Last,
			filter,
		},
	)
}

#[cfg(test)]
mod tests {
	use colsel_frame::{Column, Frame};
	use colsel_type::{Error, NotFoundKind};

	use super::*;
	use crate::{ColumnResolutionContext, SingleColumn, col, column_group};

	fn frame() -> Frame {
		Frame::new(vec![
			Column::int4("a", [1]),
			Column::int4("b", [1]),
			Column::group("info", vec![Column::int4("x", [1]), Column::int4("y", [1])]),
			Column::int4("c", [1]),
		])
	}

	fn resolve(resolver: impl Into<SingleColumn>, frame: &Frame) -> Result<Option<String>, Error> {
		let ctx = ColumnResolutionContext::new(frame);
		Ok(resolver.into().resolve(&ctx)?.map(|c| c.path.to_string()))
	}

	#[test]
	fn test_last() {
		let frame = frame();
		assert_eq!(resolve(last(), &frame).unwrap().as_deref(), Some("c"));
		assert_eq!(resolve(last_where(|c| !c.is_group() && c.name() < "c"), &frame).unwrap().as_deref(), Some("b"));
	}

	#[test]
	fn test_last_col_of_group() {
		let frame = frame();
		assert_eq!(resolve(column_group("info").last_col(), &frame).unwrap().as_deref(), Some("info.y"));
	}

	#[test]
	fn test_last_col_on_value_column() {
		let frame = frame();
		assert!(matches!(resolve(col("a").last_col(), &frame), Err(Error::InvalidGroupReference { .. })));
	}

	#[test]
	fn test_last_on_empty_frame() {
		let frame = Frame::empty();
		assert!(matches!(
			resolve(last(), &frame),
			Err(Error::NotFound {
				kind: NotFoundKind::Column,
				..
			})
		));
	}
}
