// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

mod get;

pub use get::GetType;

/// Logical type of a value column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	Boolean,
	Float8,
	Int4,
	Int8,
	Utf8,
	Undefined,
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Type::Boolean => f.write_str("BOOLEAN"),
			Type::Float8 => f.write_str("FLOAT8"),
			Type::Int4 => f.write_str("INT4"),
			Type::Int8 => f.write_str("INT8"),
			Type::Utf8 => f.write_str("UTF8"),
			Type::Undefined => f.write_str("UNDEFINED"),
		}
	}
}
