// Copyright (c) unicol contributors 2025
// This file is licensed under the MIT, see license.md file

mod push;
mod set;

use serde::{Deserialize, Serialize};
use unicol_type::{Type, Value};

use crate::{
	container::{
		BoolContainer, NumberContainer, UndefinedContainer,
		UnionContainer, Utf8Container,
	},
	error::{Error, Result},
};

/// Initial capacity for lazily created columns and union variants.
pub const DEFAULT_CAPACITY: usize = 16;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
	Bool(BoolContainer),
	Float4(NumberContainer<f32>),
	Float8(NumberContainer<f64>),
	Int1(NumberContainer<i8>),
	Int2(NumberContainer<i16>),
	Int4(NumberContainer<i32>),
	Int8(NumberContainer<i64>),
	Int16(NumberContainer<i128>),
	Uint1(NumberContainer<u8>),
	Uint2(NumberContainer<u16>),
	Uint4(NumberContainer<u32>),
	Uint8(NumberContainer<u64>),
	Uint16(NumberContainer<u128>),
	Utf8(Utf8Container),
	// polymorphic rows, one sub-column per type ever written
	Union(UnionContainer),
	// special case: all undefined
	Undefined(UndefinedContainer),
}

macro_rules! with_container {
	($self:expr, |$container:ident| $body:expr) => {
		match $self {
			ColumnData::Bool($container) => $body,
			ColumnData::Float4($container) => $body,
			ColumnData::Float8($container) => $body,
			ColumnData::Int1($container) => $body,
			ColumnData::Int2($container) => $body,
			ColumnData::Int4($container) => $body,
			ColumnData::Int8($container) => $body,
			ColumnData::Int16($container) => $body,
			ColumnData::Uint1($container) => $body,
			ColumnData::Uint2($container) => $body,
			ColumnData::Uint4($container) => $body,
			ColumnData::Uint8($container) => $body,
			ColumnData::Uint16($container) => $body,
			ColumnData::Utf8($container) => $body,
			ColumnData::Union($container) => $body,
			ColumnData::Undefined($container) => $body,
		}
	};
}

macro_rules! number_factory {
	($($name:ident => $variant:ident($primitive:ty)),* $(,)?) => {
		impl ColumnData {
			$(
				pub fn $name(values: impl IntoIterator<Item = $primitive>) -> Self {
					ColumnData::$variant(NumberContainer::from_vec(values.into_iter().collect()))
				}
			)*
		}
	};
}

number_factory!(
	float4 => Float4(f32),
	float8 => Float8(f64),
	int1 => Int1(i8),
	int2 => Int2(i16),
	int4 => Int4(i32),
	int8 => Int8(i64),
	int16 => Int16(i128),
	uint1 => Uint1(u8),
	uint2 => Uint2(u16),
	uint4 => Uint4(u32),
	uint8 => Uint8(u64),
	uint16 => Uint16(u128),
);

impl ColumnData {
	pub fn bool(values: impl IntoIterator<Item = bool>) -> Self {
		ColumnData::Bool(BoolContainer::from_vec(values.into_iter().collect()))
	}

	pub fn utf8<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
		ColumnData::Utf8(Utf8Container::from_vec(values.into_iter().map(Into::into).collect()))
	}

	pub fn undefined(len: usize) -> Self {
		ColumnData::Undefined(UndefinedContainer::new(len))
	}

	pub fn union(container: UnionContainer) -> Self {
		ColumnData::Union(container)
	}

	pub fn with_capacity(target: Type, capacity: usize) -> Self {
		match target {
			Type::Boolean => ColumnData::Bool(BoolContainer::with_capacity(capacity)),
			Type::Float4 => ColumnData::Float4(NumberContainer::with_capacity(capacity)),
			Type::Float8 => ColumnData::Float8(NumberContainer::with_capacity(capacity)),
			Type::Int1 => ColumnData::Int1(NumberContainer::with_capacity(capacity)),
			Type::Int2 => ColumnData::Int2(NumberContainer::with_capacity(capacity)),
			Type::Int4 => ColumnData::Int4(NumberContainer::with_capacity(capacity)),
			Type::Int8 => ColumnData::Int8(NumberContainer::with_capacity(capacity)),
			Type::Int16 => ColumnData::Int16(NumberContainer::with_capacity(capacity)),
			Type::Uint1 => ColumnData::Uint1(NumberContainer::with_capacity(capacity)),
			Type::Uint2 => ColumnData::Uint2(NumberContainer::with_capacity(capacity)),
			Type::Uint4 => ColumnData::Uint4(NumberContainer::with_capacity(capacity)),
			Type::Uint8 => ColumnData::Uint8(NumberContainer::with_capacity(capacity)),
			Type::Uint16 => ColumnData::Uint16(NumberContainer::with_capacity(capacity)),
			Type::Utf8 => ColumnData::Utf8(Utf8Container::with_capacity(capacity)),
			Type::Union => ColumnData::Union(UnionContainer::with_capacity(capacity)),
			Type::Undefined => ColumnData::Undefined(UndefinedContainer::new(0)),
		}
	}

	pub fn get_type(&self) -> Type {
		match self {
			ColumnData::Bool(_) => Type::Boolean,
			ColumnData::Float4(_) => Type::Float4,
			ColumnData::Float8(_) => Type::Float8,
			ColumnData::Int1(_) => Type::Int1,
			ColumnData::Int2(_) => Type::Int2,
			ColumnData::Int4(_) => Type::Int4,
			ColumnData::Int8(_) => Type::Int8,
			ColumnData::Int16(_) => Type::Int16,
			ColumnData::Uint1(_) => Type::Uint1,
			ColumnData::Uint2(_) => Type::Uint2,
			ColumnData::Uint4(_) => Type::Uint4,
			ColumnData::Uint8(_) => Type::Uint8,
			ColumnData::Uint16(_) => Type::Uint16,
			ColumnData::Utf8(_) => Type::Utf8,
			ColumnData::Union(_) => Type::Union,
			ColumnData::Undefined(_) => Type::Undefined,
		}
	}

	pub fn is_union(&self) -> bool {
		matches!(self, ColumnData::Union(_))
	}

	pub fn as_union(&self) -> Option<&UnionContainer> {
		match self {
			ColumnData::Union(container) => Some(container),
			_ => None,
		}
	}

	pub fn len(&self) -> usize {
		with_container!(self, |container| container.len())
	}

	pub fn is_empty(&self) -> bool {
		with_container!(self, |container| container.is_empty())
	}

	pub fn capacity(&self) -> usize {
		with_container!(self, |container| container.capacity())
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		with_container!(self, |container| container.is_defined(idx))
	}

	pub fn get_value(&self, idx: usize) -> Value {
		with_container!(self, |container| container.get_value(idx))
	}

	pub fn get(&self, idx: usize) -> Option<Value> {
		if self.is_defined(idx) {
			Some(self.get_value(idx))
		} else {
			None
		}
	}

	/// Explicit "value absent" outcome for callers that did not probe
	/// nullity first.
	pub fn try_get(&self, idx: usize) -> Result<Value> {
		self.get(idx).ok_or(Error::UndefinedRow {
			row: idx,
		})
	}

	pub fn push_undefined(&mut self) {
		with_container!(self, |container| container.push_undefined())
	}

	pub fn set_undefined(&mut self, idx: usize) {
		with_container!(self, |container| container.set_undefined(idx))
	}

	/// Propagate the logical row count: the `setValueCount` contract.
	pub fn resize(&mut self, new_len: usize) {
		with_container!(self, |container| container.resize(new_len))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_factories() {
		assert_eq!(ColumnData::bool([true]).get_type(), Type::Boolean);
		assert_eq!(ColumnData::int4([1, 2]).len(), 2);
		assert_eq!(ColumnData::utf8(["a"]).get_type(), Type::Utf8);
		assert_eq!(ColumnData::undefined(3).len(), 3);
	}

	#[test]
	fn test_with_capacity_matches_type() {
		for target in [Type::Boolean, Type::Int1, Type::Uint16, Type::Float8, Type::Utf8, Type::Union, Type::Undefined] {
			let data = ColumnData::with_capacity(target, 8);
			assert_eq!(data.get_type(), target);
			assert!(data.is_empty());
		}
	}

	#[test]
	fn test_try_get() {
		let data = ColumnData::int4([5]);
		assert_eq!(data.try_get(0), Ok(Value::Int4(5)));
		assert_eq!(
			data.try_get(1),
			Err(Error::UndefinedRow {
				row: 1
			})
		);
	}

	#[test]
	fn test_resize_pads_undefined() {
		let mut data = ColumnData::bool([true]);
		data.resize(3);
		assert_eq!(data.len(), 3);
		assert_eq!(data.get(0), Some(Value::Boolean(true)));
		assert_eq!(data.get(2), None);
	}
}
