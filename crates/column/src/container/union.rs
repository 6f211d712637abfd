// Copyright (c) unicol contributors 2025
// This file is licensed under the MIT, see license.md file

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;
use unicol_type::{CowVec, Type, Value};

use crate::{data::ColumnData, error::Result};

/// A column holding heterogeneous per-row values.
///
/// Every row carries a type tag (`Type::Undefined` = unset); the value
/// itself lives in exactly one per-type variant column, created lazily
/// on the first write of that type and never removed. The tag is the
/// single source of truth for nullity: variant-level definedness bits
/// below an unset tag are irrelevant and never consulted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnionContainer {
	tags: CowVec<Type>,
	variants: BTreeMap<Type, ColumnData>,
}

impl UnionContainer {
	pub fn new() -> Self {
		Self::with_capacity(0)
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			tags: CowVec::with_capacity(capacity),
			variants: BTreeMap::new(),
		}
	}

	/// Wrap an existing single-type column as the first variant,
	/// reconstructing the tag sequence from the column's own
	/// definedness reporting. The column's buffers are transferred in
	/// place; no value is copied or re-encoded.
	pub fn from_column(column: ColumnData) -> Self {
		let tag = column.get_type();
		debug_assert!(tag.is_value_type());

		let mut tags = CowVec::with_capacity(column.len());
		for idx in 0..column.len() {
			tags.push(if column.is_defined(idx) {
				tag
			} else {
				Type::Undefined
			});
		}

		let mut variants = BTreeMap::new();
		variants.insert(tag, column);

		Self {
			tags,
			variants,
		}
	}

	pub fn len(&self) -> usize {
		self.tags.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tags.is_empty()
	}

	pub fn capacity(&self) -> usize {
		self.tags.capacity()
	}

	/// Positional write. Creates the variant for the value's type on
	/// demand; the tag is set last, after all growth and the variant
	/// write succeeded, so a failed write leaves the row's previous
	/// tag intact.
	pub fn set(&mut self, idx: usize, value: Value) -> Result<()> {
		if value.is_undefined() {
			self.set_undefined(idx);
			return Ok(());
		}

		let target = value.get_type();
		self.grow_to(idx + 1);

		let variant = self.variants.entry(target).or_insert_with(|| {
			trace!(%target, "creating union variant");
			ColumnData::with_capacity(target, idx + 1)
		});
		variant.set_value(idx, value)?;

		self.tags.set(idx, target);
		Ok(())
	}

	pub fn set_undefined(&mut self, idx: usize) {
		self.grow_to(idx + 1);
		self.tags.set(idx, Type::Undefined);
	}

	pub fn push_undefined(&mut self) {
		self.tags.push(Type::Undefined);
	}

	/// The tag alone decides: variant columns are never consulted for
	/// nullity.
	pub fn is_defined(&self, idx: usize) -> bool {
		idx < self.len() && !self.tags[idx].is_undefined()
	}

	/// The type holding the row, `Type::Undefined` when the row is
	/// unset or out of range.
	pub fn type_at(&self, idx: usize) -> Type {
		self.tags.get(idx).copied().unwrap_or(Type::Undefined)
	}

	pub fn get(&self, idx: usize) -> Option<Value> {
		if !self.is_defined(idx) {
			return None;
		}
		self.variants.get(&self.tags[idx]).map(|variant| variant.get_value(idx))
	}

	pub fn get_value(&self, idx: usize) -> Value {
		self.get(idx).unwrap_or(Value::Undefined)
	}

	/// Propagate the logical row count to the tag sequence and every
	/// variant column.
	pub fn resize(&mut self, new_len: usize) {
		self.tags.resize(new_len, Type::Undefined);
		for variant in self.variants.values_mut() {
			variant.resize(new_len);
		}
	}

	pub fn variant(&self, target: Type) -> Option<&ColumnData> {
		self.variants.get(&target)
	}

	pub fn variant_types(&self) -> impl Iterator<Item = Type> + '_ {
		self.variants.keys().copied()
	}

	pub fn variant_count(&self) -> usize {
		self.variants.len()
	}

	pub fn tags(&self) -> &[Type] {
		self.tags.as_slice()
	}

	fn grow_to(&mut self, len: usize) {
		if self.tags.len() < len {
			self.tags.resize(len, Type::Undefined);
		}
	}
}

impl Default for UnionContainer {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_variants_created_lazily() {
		let mut union = UnionContainer::new();
		assert_eq!(union.variant_count(), 0);

		union.set(0, Value::Boolean(true)).unwrap();
		assert_eq!(union.variant_count(), 1);

		union.set(1, Value::Int4(10)).unwrap();
		assert_eq!(union.variant_count(), 2);

		union.set(2, Value::Int4(11)).unwrap();
		assert_eq!(union.variant_count(), 2);

		assert_eq!(union.variant_types().collect::<Vec<_>>(), vec![Type::Boolean, Type::Int4]);
	}

	#[test]
	fn test_tag_governs_nullity() {
		let mut union = UnionContainer::new();
		union.set(0, Value::Int4(1)).unwrap();
		union.set(1, Value::Int4(2)).unwrap();

		// Clearing the tag makes the row undefined even though the
		// variant still holds a value at that index.
		union.set_undefined(1);
		assert!(union.is_defined(0));
		assert!(!union.is_defined(1));
		assert_eq!(union.get(1), None);
		assert!(union.variant(Type::Int4).unwrap().is_defined(1));
	}

	#[test]
	fn test_row_moves_between_types() {
		let mut union = UnionContainer::new();
		union.set(0, Value::Boolean(false)).unwrap();
		assert_eq!(union.type_at(0), Type::Boolean);

		union.set(0, Value::utf8("x")).unwrap();
		assert_eq!(union.type_at(0), Type::Utf8);
		assert_eq!(union.get_value(0), Value::utf8("x"));
	}

	#[test]
	fn test_sparse_rows_undefined() {
		let mut union = UnionContainer::new();
		union.set(4, Value::Int8(9)).unwrap();

		assert_eq!(union.len(), 5);
		for idx in 0..4 {
			assert!(!union.is_defined(idx));
			assert_eq!(union.type_at(idx), Type::Undefined);
		}
		assert_eq!(union.get_value(4), Value::Int8(9));
	}

	#[test]
	fn test_from_column_retags_defined_rows() {
		let mut column = ColumnData::bool([]);
		column.set_value(0, Value::Boolean(true)).unwrap();
		column.set_value(2, Value::Boolean(false)).unwrap();

		let union = UnionContainer::from_column(column);
		assert_eq!(union.len(), 3);
		assert_eq!(union.type_at(0), Type::Boolean);
		assert_eq!(union.type_at(1), Type::Undefined);
		assert_eq!(union.type_at(2), Type::Boolean);
		assert_eq!(union.get_value(0), Value::Boolean(true));
		assert_eq!(union.get_value(2), Value::Boolean(false));
	}

	#[test]
	fn test_resize_propagates_to_variants() {
		let mut union = UnionContainer::new();
		union.set(0, Value::Int4(1)).unwrap();
		union.set(1, Value::utf8("a")).unwrap();

		union.resize(4);
		assert_eq!(union.len(), 4);
		assert_eq!(union.variant(Type::Int4).unwrap().len(), 4);
		assert_eq!(union.variant(Type::Utf8).unwrap().len(), 4);
		assert!(!union.is_defined(3));
	}

	#[test]
	fn test_write_undefined_clears_tag() {
		let mut union = UnionContainer::new();
		union.set(0, Value::Int4(1)).unwrap();
		union.set(0, Value::Undefined).unwrap();
		assert!(!union.is_defined(0));
	}
}
