// Copyright (c) unicol contributors 2025
// This file is licensed under the MIT, see license.md file

use serde::{Deserialize, Serialize};
use unicol_type::{BitVec, Value};

/// A boolean column: bit-packed payload plus a definedness bitmap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoolContainer {
	data: BitVec,
	bitvec: BitVec,
}

impl BoolContainer {
	pub fn new() -> Self {
		Self::with_capacity(0)
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			data: BitVec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
		}
	}

	pub fn from_vec(data: Vec<bool>) -> Self {
		let len = data.len();
		Self {
			data: BitVec::from_slice(&data),
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

	pub fn push(&mut self, value: bool) {
		self.data.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(false);
		self.bitvec.push(false);
	}

	/// Positional write. Rows between the current length and `idx` are
	/// padded as undefined.
	pub fn set(&mut self, idx: usize, value: bool) {
		self.grow_to(idx + 1);
		self.data.set(idx, value);
		self.bitvec.set(idx, true);
	}

	pub fn set_undefined(&mut self, idx: usize) {
		self.grow_to(idx + 1);
		self.bitvec.set(idx, false);
	}

	pub fn get(&self, idx: usize) -> Option<bool> {
		if self.is_defined(idx) {
			Some(self.data.get(idx))
		} else {
			None
		}
	}

	pub fn get_value(&self, idx: usize) -> Value {
		self.get(idx).map(Value::Boolean).unwrap_or(Value::Undefined)
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		idx < self.len() && self.bitvec.get(idx)
	}

	pub fn resize(&mut self, new_len: usize) {
		self.data.resize(new_len, false);
		self.bitvec.resize(new_len, false);
	}

	pub fn data(&self) -> &BitVec {
		&self.data
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<bool>> + '_ {
		(0..self.len()).map(move |idx| self.get(idx))
	}

	fn grow_to(&mut self, len: usize) {
		if self.len() < len {
			self.resize(len);
		}
	}
}

impl Default for BoolContainer {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_push() {
		let mut container = BoolContainer::new();
		container.push(true);
		container.push_undefined();
		container.push(false);

		assert_eq!(container.len(), 3);
		assert_eq!(container.get(0), Some(true));
		assert_eq!(container.get(1), None);
		assert_eq!(container.get(2), Some(false));
	}

	#[test]
	fn test_sparse_set_pads_undefined() {
		let mut container = BoolContainer::new();
		container.set(3, true);

		assert_eq!(container.len(), 4);
		assert!(!container.is_defined(0));
		assert!(!container.is_defined(2));
		assert_eq!(container.get(3), Some(true));
	}

	#[test]
	fn test_set_undefined_masks_value() {
		let mut container = BoolContainer::from_vec(vec![true, true]);
		container.set_undefined(1);

		assert_eq!(container.get(0), Some(true));
		assert_eq!(container.get(1), None);
		assert_eq!(container.get_value(1), Value::Undefined);
	}

	#[test]
	fn test_resize() {
		let mut container = BoolContainer::from_vec(vec![true]);
		container.resize(3);

		assert_eq!(container.len(), 3);
		assert!(container.is_defined(0));
		assert!(!container.is_defined(1));
		assert!(!container.is_defined(2));
	}

	#[test]
	fn test_out_of_range_reads_undefined() {
		let container = BoolContainer::from_vec(vec![true]);
		assert!(!container.is_defined(5));
		assert_eq!(container.get(5), None);
	}
}
