// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colsel_type::Result;
use tracing::trace;

use super::{ColumnSet, ColumnsResolver, ColumnsResolverTransformer, Resolved, SingleColumn};
use crate::ColumnResolutionContext;

/// Replaces a resolver with all columns nested below its result.
///
/// A column set is flattened pre-order, each column followed by its
/// descendants. A single column group is replaced by its descendants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtAnyDepth {
	pub include_groups: bool,
}

impl Default for AtAnyDepth {
	fn default() -> Self {
		Self {
			include_groups: true,
		}
	}
}

impl AtAnyDepth {
	pub fn leaves() -> Self {
		Self {
			include_groups: false,
		}
	}

	fn descendants(&self, source: ColumnsResolver) -> ColumnsResolver {
		ColumnsResolver::Set(ColumnSet::Descendants {
			source: Box::new(source),
			include_groups: self.include_groups,
		})
	}
}

impl ColumnsResolverTransformer for AtAnyDepth {
	fn transform_set(&self, set: &ColumnSet) -> ColumnsResolver {
		self.descendants(ColumnsResolver::Set(set.clone()))
	}

	fn transform_single(&self, column: &SingleColumn) -> ColumnsResolver {
		self.descendants(ColumnsResolver::Single(column.clone()))
	}
}

pub(super) fn resolve_descendants<'a>(
	source: &ColumnsResolver,
	include_groups: bool,
	ctx: &ColumnResolutionContext<'a>,
) -> Result<Resolved<'a>> {
	let resolved = source.resolve_scoped(ctx)?;

	let mut result = match resolved.columns.as_slice() {
		[group] if source.is_single() && group.is_group() => {
			trace!(path = %group.path, "descending into column group");
			Resolved::scoped(group.descendants(), group.path.clone())
		}
		columns => {
			let mut flattened = Vec::new();
			for column in columns {
				flattened.push(column.clone());
				flattened.extend(column.descendants());
			}
			Resolved::scoped(flattened, resolved.scope.clone())
		}
	};

	if !include_groups {
		result.columns.retain(|c| !c.is_group());
	}
	Ok(result)
}

#[cfg(test)]
mod tests {
	use colsel_frame::{Column, Frame};
	use colsel_type::{ColumnPath, path_of};

	use super::*;

	fn frame() -> Frame {
		Frame::new(vec![
			Column::int4("a", [1]),
			Column::group(
				"info",
				vec![Column::int4("x", [1]), Column::group("deep", vec![Column::int4("y", [1])])],
			),
		])
	}

	fn resolve(resolver: ColumnsResolver, frame: &Frame) -> Vec<ColumnPath> {
		let ctx = ColumnResolutionContext::new(frame);
		resolver.resolve(&ctx).unwrap().into_iter().map(|c| c.path).collect()
	}

	#[test]
	fn test_single_group_is_replaced() {
		let frame = frame();
		let resolver = AtAnyDepth::default().transform_single(&SingleColumn::Path(path_of(["info"])));
		assert_eq!(
			resolve(resolver, &frame),
			vec![path_of(["info", "x"]), path_of(["info", "deep"]), path_of(["info", "deep", "y"])]
		);
	}

	#[test]
	fn test_set_is_flattened() {
		let frame = frame();
		let set = ColumnSet::List(vec![path_of(["info"]), path_of(["a"])]);
		let resolver = AtAnyDepth::default().transform_set(&set);
		assert_eq!(
			resolve(resolver, &frame),
			vec![
				path_of(["info"]),
				path_of(["info", "x"]),
				path_of(["info", "deep"]),
				path_of(["info", "deep", "y"]),
				path_of(["a"]),
			]
		);
	}

	#[test]
	fn test_leaves_only() {
		let frame = frame();
		let resolver = AtAnyDepth::leaves().transform_single(&SingleColumn::Root);
		assert_eq!(resolve(resolver, &frame), vec![path_of(["a"]), path_of(["info", "x"]), path_of(["info", "deep", "y"])]);
	}

	#[test]
	fn test_single_value_column_stays() {
		let frame = frame();
		let resolver = AtAnyDepth::default().transform_single(&SingleColumn::Path(path_of(["a"])));
		assert_eq!(resolve(resolver, &frame), vec![path_of(["a"])]);
	}
}
