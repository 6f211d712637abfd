// Copyright (c) unicol contributors 2025
// This file is licensed under the MIT, see license.md file

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
	hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

/// Error returned when constructing an ordered float from NaN.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotANumber;

impl Display for NotANumber {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("NaN is not an ordered float")
	}
}

impl std::error::Error for NotANumber {}

macro_rules! ordered_float {
	($name:ident, $primitive:ty, $primitive_name:literal) => {
		/// A totally ordered, hashable float wrapper. NaN is rejected
		/// at construction, so `Eq`/`Ord`/`Hash` are consistent.
		#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
		#[serde(try_from = $primitive_name, into = $primitive_name)]
		pub struct $name($primitive);

		impl $name {
			pub fn value(&self) -> $primitive {
				self.0
			}

			pub fn zero() -> Self {
				Self(0.0)
			}
		}

		impl TryFrom<$primitive> for $name {
			type Error = NotANumber;

			fn try_from(value: $primitive) -> Result<Self, Self::Error> {
				if value.is_nan() {
					Err(NotANumber)
				} else {
					Ok(Self(value))
				}
			}
		}

		impl From<$name> for $primitive {
			fn from(value: $name) -> Self {
				value.0
			}
		}

		impl PartialEq for $name {
			fn eq(&self, other: &Self) -> bool {
				self.0.total_cmp(&other.0) == Ordering::Equal
			}
		}

		impl Eq for $name {}

		impl PartialOrd for $name {
			fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
				Some(self.cmp(other))
			}
		}

		impl Ord for $name {
			fn cmp(&self, other: &Self) -> Ordering {
				self.0.total_cmp(&other.0)
			}
		}

		impl Hash for $name {
			fn hash<H: Hasher>(&self, state: &mut H) {
				self.0.to_bits().hash(state);
			}
		}

		impl Display for $name {
			fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
				Display::fmt(&self.0, f)
			}
		}

		impl Default for $name {
			fn default() -> Self {
				Self::zero()
			}
		}
	};
}

ordered_float!(OrderedF32, f32, "f32");
ordered_float!(OrderedF64, f64, "f64");

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_nan_rejected() {
		assert_eq!(OrderedF32::try_from(f32::NAN), Err(NotANumber));
		assert_eq!(OrderedF64::try_from(f64::NAN), Err(NotANumber));
	}

	#[test]
	fn test_ordering() {
		let a = OrderedF64::try_from(-1.0).unwrap();
		let b = OrderedF64::try_from(2.0).unwrap();
		assert!(a < b);
		assert_eq!(a, a);
	}

	#[test]
	fn test_value_roundtrip() {
		let v = OrderedF32::try_from(3.25).unwrap();
		assert_eq!(v.value(), 3.25);
		assert_eq!(f32::from(v), 3.25);
	}
}
