// Copyright (c) unicol contributors 2025
// This file is licensed under the MIT, see license.md file

use unicol_type::Value;

use crate::{
	data::{ColumnData, DEFAULT_CAPACITY},
	error::{Error, Result},
};

impl ColumnData {
	/// Append `value` after the last row.
	///
	/// An `Undefined` column observing its first typed value is
	/// materialized in place as a leaf of that type, carrying the
	/// already-recorded undefined prefix. Appending a differently-typed
	/// value to a typed leaf is rejected; type switching is the
	/// promoting writer's job.
	pub fn push_value(&mut self, value: Value) -> Result<()> {
		if value.is_undefined() {
			self.push_undefined();
			return Ok(());
		}

		match (&mut *self, value) {
			(ColumnData::Union(container), value) => {
				let idx = container.len();
				container.set(idx, value)
			}
			(ColumnData::Undefined(container), value) => {
				let prefix = container.len();
				let mut new_container = ColumnData::with_capacity(
					value.get_type(),
					(prefix + 1).max(DEFAULT_CAPACITY),
				);
				new_container.resize(prefix);
				new_container.push_value(value)?;
				*self = new_container;
				Ok(())
			}
			(ColumnData::Bool(container), Value::Boolean(v)) => {
				container.push(v);
				Ok(())
			}
			(ColumnData::Float4(container), Value::Float4(v)) => {
				container.push(v.value());
				Ok(())
			}
			(ColumnData::Float8(container), Value::Float8(v)) => {
				container.push(v.value());
				Ok(())
			}
			(ColumnData::Int1(container), Value::Int1(v)) => {
				container.push(v);
				Ok(())
			}
			(ColumnData::Int2(container), Value::Int2(v)) => {
				container.push(v);
				Ok(())
			}
			(ColumnData::Int4(container), Value::Int4(v)) => {
				container.push(v);
				Ok(())
			}
			(ColumnData::Int8(container), Value::Int8(v)) => {
				container.push(v);
				Ok(())
			}
			(ColumnData::Int16(container), Value::Int16(v)) => {
				container.push(v);
				Ok(())
			}
			(ColumnData::Uint1(container), Value::Uint1(v)) => {
				container.push(v);
				Ok(())
			}
			(ColumnData::Uint2(container), Value::Uint2(v)) => {
				container.push(v);
				Ok(())
			}
			(ColumnData::Uint4(container), Value::Uint4(v)) => {
				container.push(v);
				Ok(())
			}
			(ColumnData::Uint8(container), Value::Uint8(v)) => {
				container.push(v);
				Ok(())
			}
			(ColumnData::Uint16(container), Value::Uint16(v)) => {
				container.push(v);
				Ok(())
			}
			(ColumnData::Utf8(container), Value::Utf8(v)) => {
				container.push(v);
				Ok(())
			}
			(data, value) => Err(Error::TypeMismatch {
				expected: data.get_type(),
				found: value.get_type(),
			}),
		}
	}
}

#[cfg(test)]
mod tests {
	use unicol_type::Type;

	use super::*;

	#[test]
	fn test_push_same_type() {
		let mut data = ColumnData::int4([]);
		data.push_value(Value::Int4(1)).unwrap();
		data.push_value(Value::Undefined).unwrap();
		data.push_value(Value::Int4(3)).unwrap();

		assert_eq!(data.len(), 3);
		assert_eq!(data.get(0), Some(Value::Int4(1)));
		assert_eq!(data.get(1), None);
		assert_eq!(data.get(2), Some(Value::Int4(3)));
	}

	#[test]
	fn test_push_materializes_undefined_column() {
		let mut data = ColumnData::undefined(2);
		data.push_value(Value::Boolean(true)).unwrap();

		assert_eq!(data.get_type(), Type::Boolean);
		assert_eq!(data.len(), 3);
		assert!(!data.is_defined(0));
		assert!(!data.is_defined(1));
		assert_eq!(data.get(2), Some(Value::Boolean(true)));
	}

	#[test]
	fn test_push_mismatch_rejected() {
		let mut data = ColumnData::bool([true]);
		let err = data.push_value(Value::Int4(1)).unwrap_err();
		assert_eq!(
			err,
			Error::TypeMismatch {
				expected: Type::Boolean,
				found: Type::Int4
			}
		);
	}

	#[test]
	fn test_push_into_union_appends() {
		let mut data = ColumnData::union(crate::container::UnionContainer::new());
		data.push_value(Value::Boolean(true)).unwrap();
		data.push_value(Value::Int4(2)).unwrap();

		assert_eq!(data.len(), 2);
		assert_eq!(data.get(0), Some(Value::Boolean(true)));
		assert_eq!(data.get(1), Some(Value::Int4(2)));
	}
}
