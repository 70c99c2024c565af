// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colsel_frame::{Column, Frame};
use colsel_type::{ColumnPath, Result};
use tracing::{debug, instrument};

use crate::{ColumnResolutionContext, ColumnsResolver, ResolveConfig};

/// Builds a new frame from the columns `resolver` picks out of `frame`.
///
/// Columns keep their own names and land at the top level of the result, in
/// resolution order. Selecting the frame root copies all its columns.
pub fn select(frame: &Frame, resolver: impl Into<ColumnsResolver>) -> Result<Frame> {
	select_with(frame, resolver, ResolveConfig::default())
}

#[instrument(name = "select::select", level = "trace", skip_all)]
pub fn select_with(frame: &Frame, resolver: impl Into<ColumnsResolver>, config: ResolveConfig) -> Result<Frame> {
	let ctx = ColumnResolutionContext::with_config(frame, config);
	let resolved = resolver.into().resolve(&ctx)?;

	let mut columns: Vec<Column> = Vec::with_capacity(resolved.len());
	for column in resolved {
		if column.path.is_root() {
			columns.extend(frame.columns().iter().cloned());
		} else {
			columns.push(column.column.to_column());
		}
	}

	debug!(columns = columns.len(), "selected columns");
	Ok(Frame::new(columns))
}

/// Paths of the columns `resolver` picks out of `frame`.
#[instrument(name = "select::resolve_paths", level = "trace", skip_all)]
pub fn resolve_paths(frame: &Frame, resolver: impl Into<ColumnsResolver>) -> Result<Vec<ColumnPath>> {
	let ctx = ColumnResolutionContext::new(frame);
	Ok(resolver.into().resolve(&ctx)?.into_iter().map(|c| c.path).collect())
}

#[cfg(test)]
mod tests {
	use colsel_type::{Error, Value, path_of};

	use super::*;
	use crate::{SingleColumnDsl, all, col, cols, root};

	fn frame() -> Frame {
		Frame::new(vec![
			Column::int4("id", [1, 2]),
			Column::group("info", vec![Column::utf8("name", ["a", "bc"]), Column::int8("age", [30, 40])]),
		])
	}

	#[test]
	fn test_select_top_level() {
		let frame = frame();
		let selected = select(&frame, cols(["info", "id"])).unwrap();
		assert_eq!(selected.len(), 2);
		assert_eq!(selected[0].name(), "info");
		assert_eq!(selected[1].name(), "id");
		assert_eq!(selected.row_count(), 2);
	}

	#[test]
	fn test_select_group_children() {
		let frame = frame();
		let selected = select(&frame, col("info").all_cols_from("age")).unwrap();
		assert_eq!(selected.len(), 1);
		assert_eq!(selected.row(1).unwrap().get("age").map(|v| v.as_value()), Some(Value::int8(40)));
	}

	#[test]
	fn test_select_root() {
		let frame = frame();
		assert_eq!(select(&frame, root()).unwrap(), frame);
		assert_eq!(select(&frame, all()).unwrap(), frame);
	}

	#[test]
	fn test_select_with_skip() {
		let frame = frame();
		let selected = select_with(&frame, cols(["missing", "id"]), ResolveConfig::skip_unresolved()).unwrap();
		assert_eq!(selected.len(), 1);

		assert_eq!(
			select(&frame, cols(["missing", "id"])).unwrap_err(),
			Error::ColumnNotFound {
				path: path_of(["missing"])
			}
		);
	}

	#[test]
	fn test_resolve_paths() {
		let frame = frame();
		assert_eq!(
			resolve_paths(&frame, all().at_any_depth_leaves()).unwrap(),
			vec![path_of(["id"]), path_of(["info", "name"]), path_of(["info", "age"])]
		);
	}
}
