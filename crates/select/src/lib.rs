// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Column selection over [`Frame`](colsel_frame::Frame)s.
//!
//! Selections are built from small combinators into a [`ColumnsResolver`]
//! expression and resolved later against a [`ColumnResolutionContext`]:
//!
//! ```
//! use colsel_frame::{Column, Frame};
//! use colsel_select::{SingleColumnDsl, col, resolve_paths};
//! use colsel_type::path_of;
//!
//! let frame = Frame::new(vec![Column::group(
//! 	"info",
//! 	vec![Column::int4("x", [1]), Column::int4("y", [2]), Column::int4("z", [3])],
//! )]);
//!
//! let paths = resolve_paths(&frame, col("info").all_cols_after("x")).unwrap();
//! assert_eq!(paths, vec![path_of(["info", "y"]), path_of(["info", "z"])]);
//! ```

mod api;
mod config;
mod context;
mod reference;
pub mod resolver;
mod select;

pub use api::{
	ColumnSetDsl, SingleColumnDsl, all, all_after, all_before, all_from, all_up_to, col, cols, column_group,
	first, first_where, last, last_where, none, root,
};
pub use config::{ResolveConfig, UnresolvedColumnsPolicy};
pub use context::{ColumnRef, ColumnResolutionContext, ColumnWithPath};
pub use reference::{ColumnAccessor, Property, ToColumnPath};
pub use resolver::{
	AtAnyDepth, ColumnFilter, ColumnSet, ColumnsResolver, ColumnsResolverTransformer, SingleColumn,
	TransformableColumnSet, TransformableSingleColumn,
};
pub use select::{resolve_paths, select, select_with};
