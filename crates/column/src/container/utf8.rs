// Copyright (c) unicol contributors 2025
// This file is licensed under the MIT, see license.md file

use serde::{Deserialize, Serialize};
use unicol_type::{BitVec, CowVec, Value};

/// A variable-width text column: payload vector plus a definedness
/// bitmap. Undefined rows hold an empty string masked by the bitmap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Utf8Container {
	data: CowVec<String>,
	bitvec: BitVec,
}

impl Utf8Container {
	pub fn new() -> Self {
		Self::with_capacity(0)
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			data: CowVec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
		}
	}

	pub fn from_vec(data: Vec<String>) -> Self {
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

	pub fn push(&mut self, value: String) {
		self.data.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(String::new());
		self.bitvec.push(false);
	}

	/// Positional write. Rows between the current length and `idx` are
	/// padded as undefined.
	pub fn set(&mut self, idx: usize, value: String) {
		self.grow_to(idx + 1);
		self.data.set(idx, value);
		self.bitvec.set(idx, true);
	}

	pub fn set_undefined(&mut self, idx: usize) {
		self.grow_to(idx + 1);
		self.bitvec.set(idx, false);
	}

	pub fn get(&self, idx: usize) -> Option<&String> {
		if self.is_defined(idx) {
			self.data.get(idx)
		} else {
			None
		}
	}

	pub fn get_value(&self, idx: usize) -> Value {
		self.get(idx).map(|v| Value::Utf8(v.clone())).unwrap_or(Value::Undefined)
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		idx < self.len() && self.bitvec.get(idx)
	}

	pub fn resize(&mut self, new_len: usize) {
		self.data.resize(new_len, String::new());
		self.bitvec.resize(new_len, false);
	}

	pub fn data(&self) -> &[String] {
		self.data.as_slice()
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<&String>> + '_ {
		(0..self.len()).map(move |idx| self.get(idx))
	}

	fn grow_to(&mut self, len: usize) {
		if self.len() < len {
			self.resize(len);
		}
	}
}

impl Default for Utf8Container {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_push() {
		let mut container = Utf8Container::new();
		container.push("a".to_string());
		container.push_undefined();

		assert_eq!(container.get(0), Some(&"a".to_string()));
		assert_eq!(container.get(1), None);
	}

	#[test]
	fn test_sparse_set() {
		let mut container = Utf8Container::new();
		container.set(2, "late".to_string());

		assert_eq!(container.len(), 3);
		assert!(!container.is_defined(0));
		assert_eq!(container.get_value(2), Value::utf8("late"));
	}
}
