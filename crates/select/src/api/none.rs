// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::ColumnSet;

/// Selects nothing, whatever the frame looks like.
pub fn none() -> ColumnSet {
	ColumnSet::Empty
}

#[cfg(test)]
mod tests {
	use colsel_frame::{Column, Frame};

	use super::*;
	use crate::{ColumnResolutionContext, ColumnSetDsl, ResolveConfig};

	#[test]
	fn test_none_is_empty() {
		for frame in [Frame::empty(), Frame::new(vec![Column::int4("a", [1])])] {
			let ctx = ColumnResolutionContext::new(&frame);
			assert!(none().resolve(&ctx).unwrap().is_empty());
			assert!(none().all().at_any_depth().resolve(&ctx).unwrap().is_empty());

			let ctx = ColumnResolutionContext::with_config(&frame, ResolveConfig::skip_unresolved());
			assert!(none().resolve(&ctx).unwrap().is_empty());
		}
	}
}
