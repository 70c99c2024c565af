// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::{
	cmp::Ordering,
	fmt::{self, Display, Formatter},
	hash::{Hash, Hasher},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

/// An `f64` that is never NaN, and therefore totally ordered.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct OrderedF64(f64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NanError;

impl Display for NanError {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str("NaN cannot be represented as an ordered float")
	}
}

impl OrderedF64 {
	pub fn zero() -> Self {
		Self(0.0)
	}

	pub fn value(&self) -> f64 {
		self.0
	}
}

impl TryFrom<f64> for OrderedF64 {
	type Error = NanError;

	fn try_from(value: f64) -> Result<Self, Self::Error> {
		if value.is_nan() {
			Err(NanError)
		} else {
			// -0.0 and 0.0 compare equal, keep a single representation for hashing
			Ok(Self(if value == 0.0 { 0.0 } else { value }))
		}
	}
}

impl From<OrderedF64> for f64 {
	fn from(value: OrderedF64) -> Self {
		value.0
	}
}

impl Deref for OrderedF64 {
	type Target = f64;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl PartialEq for OrderedF64 {
	fn eq(&self, other: &Self) -> bool {
		self.0 == other.0
	}
}

impl Eq for OrderedF64 {}

impl PartialOrd for OrderedF64 {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for OrderedF64 {
	fn cmp(&self, other: &Self) -> Ordering {
		self.0.total_cmp(&other.0)
	}
}

impl Hash for OrderedF64 {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.to_bits().hash(state);
	}
}

impl Display for OrderedF64 {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}
