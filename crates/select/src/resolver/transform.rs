// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{fmt::Debug, sync::Arc};

use colsel_type::Result;

use super::{
	AtAnyDepth, ColumnFilter, ColumnSet, ColumnsResolver, Expansion, Resolved, SingleColumn, Slice,
	no_column_matches, single_of,
};
use crate::ColumnResolutionContext;

/// Rewrites a resolver before it is resolved.
///
/// The transformer is handed the innermost untransformed source of a
/// [`TransformableColumnSet`] or [`TransformableSingleColumn`]; every step
/// stacked on top of that source then runs on the rewritten resolver.
pub trait ColumnsResolverTransformer: Debug + Send + Sync {
	fn transform(&self, resolver: &ColumnsResolver) -> ColumnsResolver {
		match resolver {
			ColumnsResolver::Set(set) => self.transform_set(set),
			ColumnsResolver::Single(column) => self.transform_single(column),
		}
	}

	fn transform_set(&self, set: &ColumnSet) -> ColumnsResolver;

	fn transform_single(&self, column: &SingleColumn) -> ColumnsResolver;
}

#[derive(Debug, Clone)]
pub(crate) enum SetStep {
	/// Enter the source when it is a single column group.
	Expand,
	Filter(ColumnFilter),
	Slice(Slice),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PickEnd {
	First,
	Last,
}

#[derive(Debug, Clone)]
pub(crate) enum SingleStep {
	/// First or last matching column; nothing matching is an error.
	Pick {
		end: PickEnd,
		filter: ColumnFilter,
	},
	/// The only matching column, if any.
	Single {
		filter: ColumnFilter,
	},
}

/// A column set built from another resolver by one step, open to transformation.
#[derive(Debug, Clone)]
pub struct TransformableColumnSet {
	source: Box<ColumnsResolver>,
	step: SetStep,
}

/// A single column picked from another resolver, open to transformation.
#[derive(Debug, Clone)]
pub struct TransformableSingleColumn {
	source: Box<ColumnsResolver>,
	step: SingleStep,
}

impl TransformableColumnSet {
	pub(crate) fn new(source: impl Into<ColumnsResolver>, step: SetStep) -> Self {
		Self {
			source: Box::new(source.into()),
			step,
		}
	}

	/// Attaches `transformer`, applied to the innermost source on every resolution.
	pub fn transform_with(self, transformer: Arc<dyn ColumnsResolverTransformer>) -> ColumnSet {
		ColumnSet::Transformed {
			set: self,
			transformer,
		}
	}

	/// Descends into nested column groups: every column at any depth, groups included.
	pub fn at_any_depth(self) -> ColumnSet {
		self.transform_with(Arc::new(AtAnyDepth::default()))
	}

	/// Like [`at_any_depth`](Self::at_any_depth), but only value columns are kept.
	pub fn at_any_depth_leaves(self) -> ColumnSet {
		self.transform_with(Arc::new(AtAnyDepth::leaves()))
	}

	pub(crate) fn resolve_with<'a>(
		&self,
		ctx: &ColumnResolutionContext<'a>,
		transformer: Option<&dyn ColumnsResolverTransformer>,
	) -> Result<Resolved<'a>> {
		let (resolved, single) = resolve_source(&self.source, ctx, transformer)?;
		match &self.step {
			SetStep::Expand => Ok(Expansion::classify(resolved.columns, single).expand(resolved.scope)),
			SetStep::Filter(filter) => {
				let Resolved {
					mut columns,
					scope,
				} = resolved;
				columns.retain(|c| filter.matches(c));
				Ok(Resolved::scoped(columns, scope))
			}
			SetStep::Slice(slice) => Ok(slice.apply(resolved)),
		}
	}
}

impl TransformableSingleColumn {
	pub(crate) fn new(source: impl Into<ColumnsResolver>, step: SingleStep) -> Self {
		Self {
			source: Box::new(source.into()),
			step,
		}
	}

	pub fn transform_with(self, transformer: Arc<dyn ColumnsResolverTransformer>) -> SingleColumn {
		SingleColumn::Transformed {
			column: self,
			transformer,
		}
	}

	/// Searches columns at any depth instead of only the receiver's own level.
	pub fn at_any_depth(self) -> SingleColumn {
		self.transform_with(Arc::new(AtAnyDepth::default()))
	}

	pub(crate) fn resolve_with<'a>(
		&self,
		ctx: &ColumnResolutionContext<'a>,
		transformer: Option<&dyn ColumnsResolverTransformer>,
	) -> Result<Resolved<'a>> {
		let (resolved, _) = resolve_source(&self.source, ctx, transformer)?;
		let Resolved {
			columns,
			scope,
		} = resolved;

		let picked = match &self.step {
			SingleStep::Pick {
				end: PickEnd::First,
				filter,
			} => Some(columns.into_iter().find(|c| filter.matches(c)).ok_or_else(no_column_matches)?),
			SingleStep::Pick {
				end: PickEnd::Last,
				filter,
			} => Some(columns.into_iter().rev().find(|c| filter.matches(c)).ok_or_else(no_column_matches)?),
			SingleStep::Single {
				filter,
			} => single_of(columns.into_iter().filter(|c| filter.matches(c)).collect())?,
		};
		Ok(Resolved::scoped(picked.into_iter().collect(), scope))
	}
}

/// Resolves `source`, first rewriting its innermost untransformed resolver
/// when a transformer is active. Also reports whether the effective source is
/// a single-column resolver.
fn resolve_source<'a>(
	source: &ColumnsResolver,
	ctx: &ColumnResolutionContext<'a>,
	transformer: Option<&dyn ColumnsResolverTransformer>,
) -> Result<(Resolved<'a>, bool)> {
	let Some(transformer) = transformer else {
		return Ok((source.resolve_scoped(ctx)?, source.is_single()));
	};

	match source {
		ColumnsResolver::Set(ColumnSet::Transformable(inner)) => {
			Ok((inner.resolve_with(ctx, Some(transformer))?, false))
		}
		ColumnsResolver::Single(SingleColumn::Transformable(inner)) => {
			Ok((inner.resolve_with(ctx, Some(transformer))?, true))
		}
		other => {
			let transformed = transformer.transform(other);
			Ok((transformed.resolve_scoped(ctx)?, transformed.is_single()))
		}
	}
}
