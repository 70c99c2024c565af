// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

/// Location of a column inside a frame, root to leaf, through nested column groups.
///
/// The empty path denotes the frame itself. Comparison is segment-wise.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColumnPath(Vec<String>);

/// Builds a [`ColumnPath`] from its segments.
pub fn path_of<I, S>(segments: I) -> ColumnPath
where
	I: IntoIterator<Item = S>,
	S: Into<String>,
{
	ColumnPath(segments.into_iter().map(Into::into).collect())
}

impl ColumnPath {
	pub fn new(segments: Vec<String>) -> Self {
		Self(segments)
	}

	pub fn root() -> Self {
		Self(Vec::new())
	}

	pub fn is_root(&self) -> bool {
		self.0.is_empty()
	}

	pub fn segments(&self) -> &[String] {
		&self.0
	}

	/// The last segment, i.e. the column's own name.
	pub fn name(&self) -> Option<&str> {
		self.0.last().map(String::as_str)
	}

	pub fn parent(&self) -> Option<ColumnPath> {
		if self.0.is_empty() {
			return None;
		}
		Some(Self(self.0[..self.0.len() - 1].to_vec()))
	}

	pub fn child(&self, name: impl Into<String>) -> ColumnPath {
		let mut segments = self.0.clone();
		segments.push(name.into());
		Self(segments)
	}

	pub fn starts_with(&self, prefix: &ColumnPath) -> bool {
		self.0.starts_with(&prefix.0)
	}

	/// The remainder of this path below `prefix`, if `prefix` is an ancestor (or equal).
	pub fn strip_prefix(&self, prefix: &ColumnPath) -> Option<ColumnPath> {
		self.0.strip_prefix(prefix.0.as_slice()).map(|rest| Self(rest.to_vec()))
	}
}

impl Deref for ColumnPath {
	type Target = [String];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Display for ColumnPath {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0.join("."))
	}
}

impl From<&str> for ColumnPath {
	fn from(name: &str) -> Self {
		Self(vec![name.to_string()])
	}
}

impl From<String> for ColumnPath {
	fn from(name: String) -> Self {
		Self(vec![name])
	}
}

impl From<Vec<String>> for ColumnPath {
	fn from(segments: Vec<String>) -> Self {
		Self(segments)
	}
}

impl From<&[&str]> for ColumnPath {
	fn from(segments: &[&str]) -> Self {
		path_of(segments.iter().copied())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_structural_equality() {
		assert_eq!(path_of(["a", "b"]), ColumnPath::from(&["a", "b"][..]));
		assert_ne!(path_of(["a", "b"]), path_of(["b", "a"]));
		assert_ne!(path_of(["a"]), path_of(["a", "b"]));
	}

	#[test]
	fn test_parent_and_child() {
		let path = path_of(["info", "x"]);
		assert_eq!(path.parent(), Some(ColumnPath::from("info")));
		assert_eq!(ColumnPath::from("info").child("x"), path);
		assert_eq!(ColumnPath::root().parent(), None);
		assert_eq!(path.name(), Some("x"));
	}

	#[test]
	fn test_strip_prefix() {
		let path = path_of(["a", "b", "c"]);
		assert_eq!(path.strip_prefix(&path_of(["a"])), Some(path_of(["b", "c"])));
		assert_eq!(path.strip_prefix(&path_of(["b"])), None);
		assert_eq!(path.strip_prefix(&ColumnPath::root()), Some(path.clone()));
		assert!(path.starts_with(&path_of(["a", "b"])));
	}

	#[test]
	fn test_display() {
		assert_eq!(path_of(["info", "x"]).to_string(), "info.x");
		assert_eq!(ColumnPath::root().to_string(), "");
	}

	#[test]
	fn test_serde() {
		let path = path_of(["info", "x"]);
		let json = serde_json::to_string(&path).unwrap();
		assert_eq!(json, r#"["info","x"]"#);
		assert_eq!(serde_json::from_str::<ColumnPath>(&json).unwrap(), path);
	}
}
