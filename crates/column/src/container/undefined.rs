// Copyright (c) unicol contributors 2025
// This file is licensed under the MIT, see license.md file

use serde::{Deserialize, Serialize};
use unicol_type::Value;

/// A column no typed value has been written to yet. Only the row count
/// is tracked; every row reads back undefined.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UndefinedContainer {
	len: usize,
}

impl UndefinedContainer {
	pub fn new(len: usize) -> Self {
		Self {
			len,
		}
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn capacity(&self) -> usize {
		self.len
	}

	pub fn push_undefined(&mut self) {
		self.len += 1;
	}

	pub fn set_undefined(&mut self, idx: usize) {
		if idx >= self.len {
			self.len = idx + 1;
		}
	}

	pub fn is_defined(&self, _idx: usize) -> bool {
		false
	}

	pub fn get_value(&self, _idx: usize) -> Value {
		Value::Undefined
	}

	pub fn resize(&mut self, new_len: usize) {
		self.len = new_len;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_all_rows_undefined() {
		let mut container = UndefinedContainer::new(2);
		container.push_undefined();
		container.set_undefined(5);

		assert_eq!(container.len(), 6);
		assert!(!container.is_defined(0));
		assert_eq!(container.get_value(3), Value::Undefined);
	}
}
