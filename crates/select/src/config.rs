// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// What to do with a column reference whose path does not exist in the frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedColumnsPolicy {
	/// Raise `ColumnNotFound`.
	#[default]
	Fail,
	/// Resolve the reference to nothing.
	Skip,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
	pub unresolved: UnresolvedColumnsPolicy,
}

impl ResolveConfig {
	pub fn skip_unresolved() -> Self {
		Self {
			unresolved: UnresolvedColumnsPolicy::Skip,
		}
	}
}
