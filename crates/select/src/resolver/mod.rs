// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Lazily evaluated column selections.
//!
//! A [`ColumnsResolver`] is a description of which columns to pick. Nothing
//! touches a frame until [`ColumnsResolver::resolve`] is called with a
//! [`ColumnResolutionContext`]; the same resolver can be resolved any number
//! of times against different frames.

mod depth;
mod slice;
mod transform;

use std::{
	collections::HashSet,
	fmt::{self, Debug, Formatter},
	sync::Arc,
};

use colsel_type::{ColumnPath, Error, NotFoundKind, Result};
pub use depth::AtAnyDepth;
pub use slice::{Slice, SliceKind};
pub use transform::{ColumnsResolverTransformer, TransformableColumnSet, TransformableSingleColumn};
pub(crate) use transform::{PickEnd, SetStep, SingleStep};
use tracing::{instrument, trace};

use crate::{ColumnResolutionContext, ColumnWithPath};

/// Anything that resolves to an ordered, duplicate free list of columns.
#[derive(Debug, Clone)]
pub enum ColumnsResolver {
	Set(ColumnSet),
	Single(SingleColumn),
}

/// Resolves to zero or more columns.
#[derive(Debug, Clone)]
pub enum ColumnSet {
	/// Always resolves to nothing.
	Empty,
	/// Explicit columns, in the given order.
	List(Vec<ColumnPath>),
	Transformable(TransformableColumnSet),
	Transformed {
		set: TransformableColumnSet,
		transformer: Arc<dyn ColumnsResolverTransformer>,
	},
	/// Every resolved column followed by all columns nested below it.
	Descendants {
		source: Box<ColumnsResolver>,
		include_groups: bool,
	},
	/// Concatenation of several resolvers, first occurrence wins.
	Union(Vec<ColumnsResolver>),
}

/// Resolves to at most one column.
#[derive(Debug, Clone)]
pub enum SingleColumn {
	/// The frame itself, as an unnamed column group.
	Root,
	Path(ColumnPath),
	/// The inner column, which must be a column group.
	Group(Box<SingleColumn>),
	Transformable(TransformableSingleColumn),
	Transformed {
		column: TransformableSingleColumn,
		transformer: Arc<dyn ColumnsResolverTransformer>,
	},
}

/// Predicate over resolved columns.
#[derive(Clone)]
pub struct ColumnFilter(Arc<dyn Fn(&ColumnWithPath<'_>) -> bool + Send + Sync>);

impl ColumnFilter {
	pub fn new<F>(predicate: F) -> Self
	where
		F: Fn(&ColumnWithPath<'_>) -> bool + Send + Sync + 'static,
	{
		Self(Arc::new(predicate))
	}

	pub fn always() -> Self {
		Self::new(|_| true)
	}

	pub fn matches(&self, column: &ColumnWithPath<'_>) -> bool {
		(self.0)(column)
	}
}

impl Debug for ColumnFilter {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str("ColumnFilter(..)")
	}
}

/// Intermediate result of a resolution step.
///
/// `scope` is the path of the column group the columns were taken from, so
/// that anchors can be given relative to it.
#[derive(Debug)]
pub(crate) struct Resolved<'a> {
	pub(crate) columns: Vec<ColumnWithPath<'a>>,
	pub(crate) scope: ColumnPath,
}

impl<'a> Resolved<'a> {
	pub(crate) fn new(columns: Vec<ColumnWithPath<'a>>) -> Self {
		Self {
			columns,
			scope: ColumnPath::root(),
		}
	}

	pub(crate) fn scoped(columns: Vec<ColumnWithPath<'a>>, scope: ColumnPath) -> Self {
		Self {
			columns,
			scope,
		}
	}

	fn dedup(mut self) -> Self {
		let mut seen = HashSet::new();
		self.columns.retain(|c| seen.insert(c.path.clone()));
		self
	}
}

impl ColumnsResolver {
	pub fn is_single(&self) -> bool {
		matches!(self, ColumnsResolver::Single(_))
	}

	/// Resolves against `ctx` into concrete columns, in selection order.
	#[instrument(name = "select::resolve", level = "trace", skip_all)]
	pub fn resolve<'a>(&self, ctx: &ColumnResolutionContext<'a>) -> Result<Vec<ColumnWithPath<'a>>> {
		Ok(self.resolve_scoped(ctx)?.columns)
	}

	pub(crate) fn resolve_scoped<'a>(&self, ctx: &ColumnResolutionContext<'a>) -> Result<Resolved<'a>> {
		let resolved = match self {
			ColumnsResolver::Set(set) => set.resolve_scoped(ctx)?,
			ColumnsResolver::Single(single) => single.resolve_scoped(ctx)?,
		};
		Ok(resolved.dedup())
	}
}

impl ColumnSet {
	pub fn resolve<'a>(&self, ctx: &ColumnResolutionContext<'a>) -> Result<Vec<ColumnWithPath<'a>>> {
		Ok(self.resolve_scoped(ctx)?.dedup().columns)
	}

	pub(crate) fn resolve_scoped<'a>(&self, ctx: &ColumnResolutionContext<'a>) -> Result<Resolved<'a>> {
		match self {
			ColumnSet::Empty => Ok(Resolved::new(Vec::new())),
			ColumnSet::List(paths) => {
				let mut columns = Vec::with_capacity(paths.len());
				for path in paths {
					if let Some(column) = ctx.lookup(path)? {
						columns.push(column);
					}
				}
				Ok(Resolved::new(columns))
			}
			ColumnSet::Transformable(set) => set.resolve_with(ctx, None),
			ColumnSet::Transformed {
				set,
				transformer,
			} => set.resolve_with(ctx, Some(transformer.as_ref())),
			ColumnSet::Descendants {
				source,
				include_groups,
			} => depth::resolve_descendants(source, *include_groups, ctx),
			ColumnSet::Union(parts) => {
				let mut columns = Vec::new();
				for part in parts {
					columns.extend(part.resolve_scoped(ctx)?.columns);
				}
				Ok(Resolved::new(columns))
			}
		}
	}
}

impl SingleColumn {
	/// Resolves to the column, or `None` when nothing matched.
	pub fn resolve<'a>(&self, ctx: &ColumnResolutionContext<'a>) -> Result<Option<ColumnWithPath<'a>>> {
		let resolved = self.resolve_scoped(ctx)?;
		single_of(resolved.columns)
	}

	/// Wraps `self` so that it only resolves to a column group.
	pub fn into_group(self) -> SingleColumn {
		match self {
			SingleColumn::Root | SingleColumn::Group(_) => self,
			other => SingleColumn::Group(Box::new(other)),
		}
	}

	pub(crate) fn resolve_scoped<'a>(&self, ctx: &ColumnResolutionContext<'a>) -> Result<Resolved<'a>> {
		match self {
			SingleColumn::Root => Ok(Resolved::new(vec![ctx.root()])),
			SingleColumn::Path(path) => Ok(Resolved::new(ctx.lookup(path)?.into_iter().collect())),
			SingleColumn::Group(inner) => {
				let resolved = inner.resolve_scoped(ctx)?;
				if let Some(column) = resolved.columns.iter().find(|c| !c.is_group()) {
					return Err(Error::InvalidGroupReference {
						path: column.path.clone(),
					});
				}
				Ok(resolved)
			}
			SingleColumn::Transformable(column) => column.resolve_with(ctx, None),
			SingleColumn::Transformed {
				column,
				transformer,
			} => column.resolve_with(ctx, Some(transformer.as_ref())),
		}
	}
}

/// How a resolution looks from the point of view of group expansion.
#[derive(Debug)]
pub(crate) enum Expansion<'a> {
	Empty,
	SingleGroup(ColumnWithPath<'a>),
	Other(Vec<ColumnWithPath<'a>>),
}

impl<'a> Expansion<'a> {
	/// Only a single-column resolver yielding exactly one group is entered.
	pub(crate) fn classify(mut columns: Vec<ColumnWithPath<'a>>, single: bool) -> Self {
		if columns.is_empty() {
			return Expansion::Empty;
		}
		if single && columns.len() == 1 && columns[0].is_group() {
			if let Some(group) = columns.pop() {
				return Expansion::SingleGroup(group);
			}
		}
		Expansion::Other(columns)
	}

	pub(crate) fn expand(self, scope: ColumnPath) -> Resolved<'a> {
		match self {
			Expansion::Empty => Resolved::scoped(Vec::new(), scope),
			Expansion::SingleGroup(group) => {
				trace!(path = %group.path, "entering column group");
				Resolved::scoped(group.children(), group.path)
			}
			Expansion::Other(columns) => Resolved::scoped(columns, scope),
		}
	}
}

pub(crate) fn single_of(mut columns: Vec<ColumnWithPath<'_>>) -> Result<Option<ColumnWithPath<'_>>> {
	match columns.len() {
		0 | 1 => Ok(columns.pop()),
		count => Err(Error::AmbiguousSingleColumn {
			count,
		}),
	}
}

pub(crate) fn no_column_matches() -> Error {
	Error::not_found(NotFoundKind::Column, "no column matches the predicate")
}

impl From<ColumnSet> for ColumnsResolver {
	fn from(set: ColumnSet) -> Self {
		ColumnsResolver::Set(set)
	}
}

impl From<SingleColumn> for ColumnsResolver {
	fn from(column: SingleColumn) -> Self {
		ColumnsResolver::Single(column)
	}
}

impl From<TransformableColumnSet> for ColumnSet {
	fn from(set: TransformableColumnSet) -> Self {
		ColumnSet::Transformable(set)
	}
}

impl From<TransformableColumnSet> for ColumnsResolver {
	fn from(set: TransformableColumnSet) -> Self {
		ColumnsResolver::Set(set.into())
	}
}

impl From<TransformableSingleColumn> for SingleColumn {
	fn from(column: TransformableSingleColumn) -> Self {
		SingleColumn::Transformable(column)
	}
}

impl From<TransformableSingleColumn> for ColumnsResolver {
	fn from(column: TransformableSingleColumn) -> Self {
		ColumnsResolver::Single(column.into())
	}
}
