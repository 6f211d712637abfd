// Copyright (c) unicol contributors 2025
// This file is licensed under the MIT, see license.md file

use serde::{Deserialize, Serialize};

/// A bit-packed sequence of booleans.
///
/// Backs both boolean column payloads and the definedness bitmap every
/// container carries next to its data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitVec {
	bits: Vec<u8>,
	len: usize,
}

impl BitVec {
	pub fn new(len: usize, value: bool) -> Self {
		Self::repeat(len, value)
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			bits: Vec::with_capacity(capacity.div_ceil(8)),
			len: 0,
		}
	}

	pub fn repeat(len: usize, value: bool) -> Self {
		let fill = if value {
			0xFF
		} else {
			0x00
		};
		let mut result = Self {
			bits: vec![fill; len.div_ceil(8)],
			len,
		};
		result.mask_tail();
		result
	}

	pub fn from_slice(values: &[bool]) -> Self {
		let mut result = Self::with_capacity(values.len());
		for &value in values {
			result.push(value);
		}
		result
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn capacity(&self) -> usize {
		self.bits.capacity() * 8
	}

	pub fn push(&mut self, value: bool) {
		if self.len % 8 == 0 {
			self.bits.push(0);
		}
		let idx = self.len;
		self.len += 1;
		if value {
			self.bits[idx / 8] |= 1 << (idx % 8);
		}
	}

	pub fn get(&self, idx: usize) -> bool {
		assert!(idx < self.len, "index {} out of bounds (len {})", idx, self.len);
		self.bits[idx / 8] & (1 << (idx % 8)) != 0
	}

	pub fn set(&mut self, idx: usize, value: bool) {
		assert!(idx < self.len, "index {} out of bounds (len {})", idx, self.len);
		if value {
			self.bits[idx / 8] |= 1 << (idx % 8);
		} else {
			self.bits[idx / 8] &= !(1 << (idx % 8));
		}
	}

	pub fn resize(&mut self, new_len: usize, value: bool) {
		if new_len < self.len {
			self.len = new_len;
			self.bits.truncate(new_len.div_ceil(8));
			self.mask_tail();
		} else {
			while self.len < new_len {
				self.push(value);
			}
		}
	}

	pub fn extend(&mut self, other: &BitVec) {
		for value in other.iter() {
			self.push(value);
		}
	}

	pub fn clear(&mut self) {
		self.bits.clear();
		self.len = 0;
	}

	pub fn count_ones(&self) -> usize {
		self.iter().filter(|&b| b).count()
	}

	pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
		(0..self.len).map(move |idx| self.get(idx))
	}

	// Bits past `len` in the last byte must stay zero so that equality
	// and extension work on the raw bytes.
	fn mask_tail(&mut self) {
		let tail = self.len % 8;
		if tail != 0 {
			if let Some(last) = self.bits.last_mut() {
				*last &= (1 << tail) - 1;
			}
		}
	}
}

impl FromIterator<bool> for BitVec {
	fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
		let mut result = Self::with_capacity(0);
		for value in iter {
			result.push(value);
		}
		result
	}
}
