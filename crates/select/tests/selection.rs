// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use colsel_frame::{Column, ColumnData, Frame};
use colsel_select::{
	AtAnyDepth, ColumnAccessor, ColumnResolutionContext, ColumnSet, ColumnSetDsl, ColumnsResolver,
	ColumnsResolverTransformer, Property, ResolveConfig, SingleColumn, SingleColumnDsl, all, col, cols, column_group,
	first, resolve_paths, select, select_with,
};
use colsel_type::{Error, NotFoundKind, Value, path_of};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.with_test_writer()
		.try_init();
}

fn people() -> Frame {
	Frame::new(vec![
		Column::int4("id", [1, 2, 3]),
		Column::group(
			"info",
			vec![
				Column::utf8("name", ["ann", "bob", "cid"]),
				Column::group("address", vec![Column::utf8("city", ["x", "y", "z"])]),
				Column::int4_with_validity("age", [(30, true), (0, false), (50, true)]),
			],
		),
		Column::bool("active", [true, false, true]),
	])
}

#[test]
fn test_at_any_depth_over_frame() {
	init_tracing();
	let frame = people();
	assert_eq!(
		resolve_paths(&frame, all().at_any_depth()).unwrap(),
		vec![
			path_of(["id"]),
			path_of(["info"]),
			path_of(["info", "name"]),
			path_of(["info", "address"]),
			path_of(["info", "address", "city"]),
			path_of(["info", "age"]),
			path_of(["active"]),
		]
	);
}

#[test]
fn test_at_any_depth_below_group() {
	let frame = people();
	assert_eq!(
		resolve_paths(&frame, col("info").all_cols().at_any_depth_leaves()).unwrap(),
		vec![path_of(["info", "name"]), path_of(["info", "address", "city"]), path_of(["info", "age"])]
	);
}

#[test]
fn test_slice_runs_over_transformed_columns() {
	let frame = people();
	let resolver = all().all_after(path_of(["info", "address"])).at_any_depth();
	assert_eq!(
		resolve_paths(&frame, resolver).unwrap(),
		vec![path_of(["info", "address", "city"]), path_of(["info", "age"]), path_of(["active"])]
	);
}

#[test]
fn test_filter_at_any_depth() {
	let frame = people();
	let ctx = ColumnResolutionContext::new(&frame);
	let leaves = all()
		.filter(|c| c.column.as_group().is_none() && c.name() != "active")
		.at_any_depth()
		.resolve(&ctx)
		.unwrap();
	let names: Vec<_> = leaves.iter().map(|c| c.name()).collect();
	assert_eq!(names, ["id", "name", "city", "age"]);
}

#[derive(Debug)]
struct OnlyFirstChild;

impl ColumnsResolverTransformer for OnlyFirstChild {
	fn transform_set(&self, set: &ColumnSet) -> ColumnsResolver {
		set.clone().first().into()
	}

	fn transform_single(&self, column: &SingleColumn) -> ColumnsResolver {
		column.clone().first_child().into()
	}
}

#[test]
fn test_custom_transformer() {
	let frame = people();
	let resolver = column_group("info").all_cols().transform_with(Arc::new(OnlyFirstChild));
	assert_eq!(resolve_paths(&frame, resolver).unwrap(), vec![path_of(["info", "name"])]);

	let resolver = cols(["active", "id"]).all().transform_with(Arc::new(OnlyFirstChild));
	assert_eq!(resolve_paths(&frame, resolver).unwrap(), vec![path_of(["active"])]);
}

#[test]
fn test_depth_transformer_on_plain_set() {
	let set = cols(["info"]);
	let frame = people();
	let resolver = AtAnyDepth::leaves().transform_set(&set);
	assert_eq!(resolve_paths(&frame, resolver).unwrap().len(), 3);
}

#[test]
fn test_unresolved_policy() {
	init_tracing();
	let frame = people();
	let resolver = cols([path_of(["info", "nickname"]), path_of(["id"])]);

	let err = select(&frame, resolver.clone()).unwrap_err();
	assert_eq!(err.code(), "QUERY_001");
	assert_eq!(err.to_string(), "column 'info.nickname' not found");

	let config: ResolveConfig = serde_json::from_str(r#"{"unresolved":"skip"}"#).unwrap();
	let selected = select_with(&frame, resolver, config).unwrap();
	assert_eq!(selected.len(), 1);
	assert_eq!(selected[0].name(), "id");
}

#[test]
fn test_all_cols_on_value_column_fails() {
	let frame = people();
	let err = resolve_paths(&frame, col("id").all_cols_after("x")).unwrap_err();
	assert_eq!(
		err,
		Error::InvalidGroupReference {
			path: path_of(["id"])
		}
	);
	assert_eq!(err.code(), "SELECT_005");
}

#[test]
fn test_single_is_ambiguous() {
	let frame = people();
	let err = resolve_paths(&frame, col("info").all_cols().single()).unwrap_err();
	assert_eq!(
		err,
		Error::AmbiguousSingleColumn {
			count: 3
		}
	);
}

#[test]
fn test_column_references_are_interchangeable() {
	const ACTIVE: Property = Property::new("active");
	let frame = people();
	let accessor = ColumnAccessor::<bool>::new("active");
	let column = Column::bool("active", [true]);

	let expected = vec![path_of(["active"])];
	assert_eq!(resolve_paths(&frame, col("active")).unwrap(), expected);
	assert_eq!(resolve_paths(&frame, col(String::from("active"))).unwrap(), expected);
	assert_eq!(resolve_paths(&frame, col(&accessor)).unwrap(), expected);
	assert_eq!(resolve_paths(&frame, col(ACTIVE)).unwrap(), expected);
	assert_eq!(resolve_paths(&frame, col(&column)).unwrap(), expected);
	assert_eq!(resolve_paths(&frame, all().all_from(ACTIVE)).unwrap(), expected);
}

#[test]
fn test_resolved_column_feeds_row_access() {
	let frame = people();
	let ctx = ColumnResolutionContext::new(&frame);
	let age = SingleColumn::from(col("info").last_col()).resolve(&ctx).unwrap().unwrap();
	assert_eq!(age.path, path_of(["info", "age"]));

	let accessor = ColumnAccessor::<i32>::new(age.path.clone());
	let row = frame.last_row_where(|row| accessor.value(row).is_some_and(|v| !v.is_undefined())).unwrap();
	assert_eq!(row.index(), 2);
	assert_eq!(accessor.value(&row), Some(Value::int4(50)));
}

#[test]
fn test_scalar_analogs() {
	let empty = ColumnData::int4(Vec::<i32>::new());
	assert_eq!(empty.first_or_none(), None);
	assert_eq!(empty.last_or_none(), None);
	assert!(matches!(
		empty.first(),
		Err(Error::NotFound {
			kind: NotFoundKind::Value,
			..
		})
	));
	assert!(empty.last().is_err());
	assert!(empty.all_undefined());

	let frame = people();
	let ctx = ColumnResolutionContext::new(&frame);
	let picked = SingleColumn::from(first()).resolve(&ctx).unwrap().map(|c| c.path);
	assert_eq!(picked, Some(path_of(["id"])));

	let err = Frame::empty().first_row().unwrap_err();
	assert_eq!(err.code(), "SELECT_003");
}

#[test]
fn test_after_keeps_repeated_anchor_at_any_depth() {
	let frame = Frame::new(vec![Column::group(
		"info",
		vec![Column::int4("x", [1]), Column::group("info", vec![Column::int4("x", [1])]), Column::int4("y", [1])],
	)]);
	let anchor = path_of(["info", "x"]);

	let after = resolve_paths(&frame, col("info").all_cols_after(&anchor).at_any_depth()).unwrap();
	let from = resolve_paths(&frame, col("info").all_cols_from(&anchor).at_any_depth()).unwrap();

	assert_eq!(from[0], anchor);
	assert_eq!(after, from[1..]);
	assert!(after.contains(&path_of(["info", "info", "x"])));
}
