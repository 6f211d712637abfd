// Copyright (c) unicol contributors 2025
// This file is licensed under the MIT, see license.md file

use std::{
	ops::{Deref, Index},
	sync::Arc,
};

use serde::{Deserialize, Serialize};

/// A copy-on-write vector.
///
/// Cloning is O(1); the backing storage is only copied when a writer
/// mutates a shared instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CowVec<T> {
	inner: Arc<Vec<T>>,
}

impl<T: Clone> CowVec<T> {
	pub fn new(data: Vec<T>) -> Self {
		Self {
			inner: Arc::new(data),
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			inner: Arc::new(Vec::with_capacity(capacity)),
		}
	}

	pub fn len(&self) -> usize {
		self.inner.len()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	pub fn capacity(&self) -> usize {
		self.inner.capacity()
	}

	pub fn get(&self, idx: usize) -> Option<&T> {
		self.inner.get(idx)
	}

	pub fn as_slice(&self) -> &[T] {
		self.inner.as_slice()
	}

	pub fn push(&mut self, value: T) {
		self.make_mut().push(value);
	}

	pub fn set(&mut self, idx: usize, value: T) {
		self.make_mut()[idx] = value;
	}

	pub fn resize(&mut self, new_len: usize, value: T) {
		self.make_mut().resize(new_len, value);
	}

	pub fn extend_from_slice(&mut self, other: &[T]) {
		self.make_mut().extend_from_slice(other);
	}

	pub fn clear(&mut self) {
		self.make_mut().clear();
	}

	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.inner.iter()
	}

	pub fn make_mut(&mut self) -> &mut Vec<T> {
		Arc::make_mut(&mut self.inner)
	}

	/// Recover the owned vector when this handle is the only one,
	/// cloning otherwise.
	pub fn into_vec(self) -> Vec<T> {
		Arc::try_unwrap(self.inner).unwrap_or_else(|shared| shared.as_ref().clone())
	}
}

impl<T: Clone> Default for CowVec<T> {
	fn default() -> Self {
		Self::new(Vec::new())
	}
}

impl<T> Deref for CowVec<T> {
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		self.inner.as_slice()
	}
}

impl<T> Index<usize> for CowVec<T> {
	type Output = T;

	fn index(&self, idx: usize) -> &Self::Output {
		&self.inner[idx]
	}
}

impl<T: Clone> FromIterator<T> for CowVec<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}
