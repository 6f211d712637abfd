// Copyright (c) unicol contributors 2025
// This file is licensed under the MIT, see license.md file

use unicol_type::Value;

use crate::{
	data::{ColumnData, DEFAULT_CAPACITY},
	error::{Error, Result},
};

impl ColumnData {
	/// Positional write of `value` at row `idx`. Rows between the
	/// current length and `idx` are padded as undefined; sparse writes
	/// are legal and skipped rows read back undefined.
	///
	/// The target must be type-compatible: a union, an `Undefined`
	/// column (materialized in place on first typed write), or a leaf
	/// of the value's own type. A type-mismatched leaf is rejected
	/// with `TypeMismatch` — converting that situation into a union is
	/// the promoting writer's job.
	pub fn set_value(&mut self, idx: usize, value: Value) -> Result<()> {
		if value.is_undefined() {
			self.set_undefined(idx);
			return Ok(());
		}

		match (&mut *self, value) {
			(ColumnData::Union(container), value) => container.set(idx, value),
			(ColumnData::Undefined(container), value) => {
				let prefix = container.len();
				let mut new_container = ColumnData::with_capacity(
					value.get_type(),
					(idx + 1).max(DEFAULT_CAPACITY),
				);
				new_container.resize(prefix);
				new_container.set_value(idx, value)?;
				*self = new_container;
				Ok(())
			}
			(ColumnData::Bool(container), Value::Boolean(v)) => {
				container.set(idx, v);
				Ok(())
			}
			(ColumnData::Float4(container), Value::Float4(v)) => {
				container.set(idx, v.value());
				Ok(())
			}
			(ColumnData::Float8(container), Value::Float8(v)) => {
				container.set(idx, v.value());
				Ok(())
			}
			(ColumnData::Int1(container), Value::Int1(v)) => {
				container.set(idx, v);
				Ok(())
			}
			(ColumnData::Int2(container), Value::Int2(v)) => {
				container.set(idx, v);
				Ok(())
			}
			(ColumnData::Int4(container), Value::Int4(v)) => {
				container.set(idx, v);
				Ok(())
			}
			(ColumnData::Int8(container), Value::Int8(v)) => {
				container.set(idx, v);
				Ok(())
			}
			(ColumnData::Int16(container), Value::Int16(v)) => {
				container.set(idx, v);
				Ok(())
			}
			(ColumnData::Uint1(container), Value::Uint1(v)) => {
				container.set(idx, v);
				Ok(())
			}
			(ColumnData::Uint2(container), Value::Uint2(v)) => {
				container.set(idx, v);
				Ok(())
			}
			(ColumnData::Uint4(container), Value::Uint4(v)) => {
				container.set(idx, v);
				Ok(())
			}
			(ColumnData::Uint8(container), Value::Uint8(v)) => {
				container.set(idx, v);
				Ok(())
			}
			(ColumnData::Uint16(container), Value::Uint16(v)) => {
				container.set(idx, v);
				Ok(())
			}
			(ColumnData::Utf8(container), Value::Utf8(v)) => {
				container.set(idx, v);
				Ok(())
			}
			(data, value) => Err(Error::TypeMismatch {
				expected: data.get_type(),
				found: value.get_type(),
			}),
		}
	}
}
