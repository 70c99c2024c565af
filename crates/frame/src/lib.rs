// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! In-memory frames whose columns are either value columns or column groups.
//!
//! A [`Frame`] is an ordered list of top-level [`Column`]s. A column group
//! nests further columns, so every column is located by a
//! [`ColumnPath`](colsel_type::ColumnPath) from the frame root.

mod all;
mod column;
mod first;
mod frame;
mod iterator;
mod last;
mod reference;

pub use column::{Column, ColumnData, ColumnGroup, ValueColumn};
pub use frame::Frame;
pub use iterator::FrameIter;
pub use reference::{RowRef, ValueRef};
