// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use crate::ColumnPath;

pub type Result<T> = std::result::Result<T, Error>;

/// What a failed single-result lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundKind {
	Column,
	Value,
	Row,
}

impl Display for NotFoundKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			NotFoundKind::Column => f.write_str("column"),
			NotFoundKind::Value => f.write_str("value"),
			NotFoundKind::Row => f.write_str("row"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
	/// A strict single-result operation had nothing to return.
	#[error("{kind} not found: {message}")]
	NotFound {
		kind: NotFoundKind,
		message: String,
	},

	#[error("expected at most one column, but {count} columns were resolved")]
	AmbiguousSingleColumn {
		count: usize,
	},

	#[error("column '{path}' is not a column group")]
	InvalidGroupReference {
		path: ColumnPath,
	},

	#[error("column '{path}' not found")]
	ColumnNotFound {
		path: ColumnPath,
	},

	#[error("index {index} out of bounds for length {len}")]
	IndexOutOfBounds {
		index: usize,
		len: usize,
	},
}

impl Error {
	pub fn not_found(kind: NotFoundKind, message: impl Into<String>) -> Self {
		Error::NotFound {
			kind,
			message: message.into(),
		}
	}

	pub fn code(&self) -> &'static str {
		match self {
			Error::NotFound {
				kind: NotFoundKind::Column,
				..
			} => "SELECT_001",
			Error::NotFound {
				kind: NotFoundKind::Value,
				..
			} => "SELECT_002",
			Error::NotFound {
				kind: NotFoundKind::Row,
				..
			} => "SELECT_003",
			Error::AmbiguousSingleColumn {
				..
			} => "SELECT_004",
			Error::InvalidGroupReference {
				..
			} => "SELECT_005",
			Error::ColumnNotFound {
				..
			} => "QUERY_001",
			Error::IndexOutOfBounds {
				..
			} => "FRAME_001",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::path_of;

	#[test]
	fn test_display() {
		let err = Error::InvalidGroupReference {
			path: path_of(["info", "x"]),
		};
		assert_eq!(err.to_string(), "column 'info.x' is not a column group");

		let err = Error::not_found(NotFoundKind::Row, "frame has no rows");
		assert_eq!(err.to_string(), "row not found: frame has no rows");
	}

	#[test]
	fn test_codes_are_distinct() {
		let errors = [
			Error::not_found(NotFoundKind::Column, ""),
			Error::not_found(NotFoundKind::Value, ""),
			Error::not_found(NotFoundKind::Row, ""),
			Error::AmbiguousSingleColumn {
				count: 2,
			},
			Error::InvalidGroupReference {
				path: ColumnPath::root(),
			},
			Error::ColumnNotFound {
				path: ColumnPath::root(),
			},
			Error::IndexOutOfBounds {
				index: 1,
				len: 0,
			},
		];

		let mut codes: Vec<_> = errors.iter().map(Error::code).collect();
		codes.sort();
		codes.dedup();
		assert_eq!(codes.len(), errors.len());
	}
}
