// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod error;
mod path;
pub mod value;

pub use error::{Error, NotFoundKind, Result};
pub use path::{ColumnPath, path_of};
pub use value::{GetType, OrderedF64, Type, Value};
