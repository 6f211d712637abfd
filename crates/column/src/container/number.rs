// Copyright (c) unicol contributors 2025
// This file is licensed under the MIT, see license.md file

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use unicol_type::{BitVec, CowVec, IsNumber, Value};

/// A fixed-width numeric column: payload vector plus a definedness
/// bitmap. Payload slots under an undefined row hold `T::default()` and
/// are masked by the bitmap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: DeserializeOwned"))]
pub struct NumberContainer<T: IsNumber> {
	data: CowVec<T>,
	bitvec: BitVec,
}

impl<T: IsNumber> NumberContainer<T> {
	pub fn new() -> Self {
		Self::with_capacity(0)
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			data: CowVec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
		}
	}

	pub fn from_vec(data: Vec<T>) -> Self {
		let len = data.len();
		Self {
			data: CowVec::new(data),
			bitvec: BitVec::repeat(len, true),
		}
	}

	pub fn len(&self) -> usize {
		debug_assert_eq!(self.data.len(), self.bitvec.len());
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn capacity(&self) -> usize {
		self.data.capacity().min(self.bitvec.capacity())
	}

	pub fn push(&mut self, value: T) {
		self.data.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(T::default());
		self.bitvec.push(false);
	}

	/// Positional write. Rows between the current length and `idx` are
	/// padded as undefined.
	pub fn set(&mut self, idx: usize, value: T) {
		self.grow_to(idx + 1);
		self.data.set(idx, value);
		self.bitvec.set(idx, true);
	}

	pub fn set_undefined(&mut self, idx: usize) {
		self.grow_to(idx + 1);
		self.bitvec.set(idx, false);
	}

	pub fn get(&self, idx: usize) -> Option<T> {
		if self.is_defined(idx) {
			self.data.get(idx).copied()
		} else {
			None
		}
	}

	pub fn get_value(&self, idx: usize) -> Value {
		self.get(idx).map(IsNumber::into_value).unwrap_or(Value::Undefined)
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		idx < self.len() && self.bitvec.get(idx)
	}

	pub fn resize(&mut self, new_len: usize) {
		self.data.resize(new_len, T::default());
		self.bitvec.resize(new_len, false);
	}

	pub fn data(&self) -> &[T] {
		self.data.as_slice()
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<T>> + '_ {
		(0..self.len()).map(move |idx| self.get(idx))
	}

	fn grow_to(&mut self, len: usize) {
		if self.len() < len {
			self.resize(len);
		}
	}
}

impl<T: IsNumber> Default for NumberContainer<T> {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_push() {
		let mut container = NumberContainer::<i32>::new();
		container.push(10);
		container.push_undefined();
		container.push(-3);

		assert_eq!(container.len(), 3);
		assert_eq!(container.get(0), Some(10));
		assert_eq!(container.get(1), None);
		assert_eq!(container.get(2), Some(-3));
		assert_eq!(container.data(), &[10, 0, -3]);
	}

	#[test]
	fn test_sparse_set_pads_undefined() {
		let mut container = NumberContainer::<i64>::new();
		container.set(2, 100);

		assert_eq!(container.len(), 3);
		assert!(!container.is_defined(0));
		assert!(!container.is_defined(1));
		assert_eq!(container.get(2), Some(100));
	}

	#[test]
	fn test_overwrite_same_row() {
		let mut container = NumberContainer::<i32>::new();
		container.set(1, 5);
		container.set(1, 5);

		assert_eq!(container.len(), 2);
		assert_eq!(container.get(1), Some(5));
	}

	#[test]
	fn test_get_value() {
		let container = NumberContainer::<u8>::from_vec(vec![7]);
		assert_eq!(container.get_value(0), Value::Uint1(7));
		assert_eq!(container.get_value(9), Value::Undefined);
	}

	#[test]
	fn test_resize_truncates() {
		let mut container = NumberContainer::<i32>::from_vec(vec![1, 2, 3]);
		container.resize(1);
		assert_eq!(container.len(), 1);
		assert_eq!(container.get(0), Some(1));
	}
}
