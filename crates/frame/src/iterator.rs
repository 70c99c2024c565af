// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{Frame, RowRef};

pub struct FrameIter<'df> {
	pub(crate) frame: &'df Frame,
	pub(crate) row_index: usize,
	pub(crate) row_total: usize,
}

impl<'df> Iterator for FrameIter<'df> {
	type Item = RowRef<'df>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.row_index >= self.row_total {
			return None;
		}

		let index = self.row_index;
		self.row_index += 1;

		Some(RowRef {
			frame: self.frame,
			index,
		})
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.row_total - self.row_index;
		(remaining, Some(remaining))
	}
}

impl<'df> DoubleEndedIterator for FrameIter<'df> {
	fn next_back(&mut self) -> Option<Self::Item> {
		if self.row_index >= self.row_total {
			return None;
		}

		self.row_total -= 1;

		Some(RowRef {
			frame: self.frame,
			index: self.row_total,
		})
	}
}

impl ExactSizeIterator for FrameIter<'_> {}
