// Copyright (c) unicol contributors 2025
// This file is licensed under the MIT, see license.md file

use std::mem;

use tracing::{debug, trace};
use unicol_type::{Type, Value};

use crate::{
	columns::{Column, Columns},
	container::UnionContainer,
	data::{ColumnData, DEFAULT_CAPACITY},
};

/// A cursor-based writer bound to one named column.
///
/// Every write resolves the column currently bound to the name and, on
/// a type-mismatched write against a single-type column, promotes it in
/// place to a union column before delegating the write. Promotion is
/// monotonic: once a name is bound to a union it stays a union, however
/// uniform the writes that follow.
pub struct ColumnWriter<'a> {
	columns: &'a mut Columns,
	name: String,
	row: usize,
	// resolved position of the bound column, filled on first write
	slot: Option<usize>,
}

impl<'a> ColumnWriter<'a> {
	pub fn new(columns: &'a mut Columns, name: impl Into<String>) -> Self {
		Self {
			columns,
			name: name.into(),
			row: 0,
			slot: None,
		}
	}

	/// Move the cursor. No constraints, no side effects: positions may
	/// move backwards and skip rows, and skipped rows read back
	/// undefined.
	pub fn set_position(&mut self, row: usize) {
		self.row = row;
	}

	pub fn position(&self) -> usize {
		self.row
	}

	/// Bracket a root-level writing session. A no-op at the leaf
	/// level, kept for protocol symmetry with nested writers that
	/// track child counts.
	pub fn start(&mut self) {}

	/// See [`ColumnWriter::start`].
	pub fn end(&mut self) {}

	/// Write a value of any supported type at the current position,
	/// promoting the bound column first if its type differs.
	pub fn write_value(&mut self, value: Value) {
		let target = value.get_type();
		let idx = self.resolve(target);

		let data = &mut self.columns[idx].data;
		let bound = data.get_type();
		if bound.is_value_type() && target.is_value_type() && bound != target {
			promote(&self.name, data);
		}

		let row = self.row;
		if data.set_value(row, value).is_err() {
			unreachable!("promotion resolves type mismatches before the write")
		}
	}

	pub fn write<V: Into<Value>>(&mut self, value: V) {
		self.write_value(value.into());
	}

	/// Mark the current row undefined without changing the bound
	/// column's type.
	pub fn write_undefined(&mut self) {
		let idx = self.resolve(Type::Undefined);
		let row = self.row;
		self.columns[idx].data.set_undefined(row);
	}

	// Steps 1 and 2 of a write: find the column bound to the name,
	// creating a leaf of the requested type on first touch. The slot
	// position is cached so repeated writes skip the name lookup.
	fn resolve(&mut self, target: Type) -> usize {
		match self.slot {
			Some(idx) => idx,
			None => {
				let idx = match self.columns.index_of(&self.name) {
					Some(idx) => idx,
					None => {
						trace!(column = self.name.as_str(), %target, "creating column");
						self.columns.push(Column::new(
							&self.name,
							ColumnData::with_capacity(target, DEFAULT_CAPACITY),
						));
						self.columns.len() - 1
					}
				};
				self.slot = Some(idx);
				idx
			}
		}
	}
}

// The promotion itself: take the mismatched leaf out of the slot, wrap
// it as the union's first variant with its buffers intact, and rebind
// the slot to the union. Tags for already-written rows are
// reconstructed from the leaf's own definedness bitmap.
fn promote(name: &str, data: &mut ColumnData) {
	let leaf = mem::replace(data, ColumnData::undefined(0));
	let from = leaf.get_type();
	let union = UnionContainer::from_column(leaf);
	debug!(column = name, %from, rows = union.len(), "promoting column to union");
	*data = ColumnData::Union(union);
}

macro_rules! typed_writer {
	($($method:ident => $writer:ident($primitive:ty)),* $(,)?) => {
		$(
			/// A sub-writer bound to one value type.
			pub struct $writer<'w, 'a> {
				writer: &'w mut ColumnWriter<'a>,
			}

			impl $writer<'_, '_> {
				pub fn write(&mut self, value: $primitive) {
					self.writer.write_value(Value::from(value));
				}
			}

			impl<'a> ColumnWriter<'a> {
				pub fn $method(&mut self) -> $writer<'_, 'a> {
					$writer {
						writer: self,
					}
				}
			}
		)*
	};
}

typed_writer!(
	bool => BoolWriter(bool),
	float4 => Float4Writer(f32),
	float8 => Float8Writer(f64),
	int1 => Int1Writer(i8),
	int2 => Int2Writer(i16),
	int4 => Int4Writer(i32),
	int8 => Int8Writer(i64),
	int16 => Int16Writer(i128),
	uint1 => Uint1Writer(u8),
	uint2 => Uint2Writer(u16),
	uint4 => Uint4Writer(u32),
	uint8 => Uint8Writer(u64),
	uint16 => Uint16Writer(u128),
);

/// A sub-writer bound to one value type.
pub struct Utf8Writer<'w, 'a> {
	writer: &'w mut ColumnWriter<'a>,
}

impl Utf8Writer<'_, '_> {
	pub fn write(&mut self, value: impl Into<String>) {
		self.writer.write_value(Value::Utf8(value.into()));
	}
}

impl<'a> ColumnWriter<'a> {
	pub fn utf8(&mut self) -> Utf8Writer<'_, 'a> {
		Utf8Writer {
			writer: self,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_first_write_creates_leaf() {
		let mut columns = Columns::new();
		let mut writer = ColumnWriter::new(&mut columns, "a");
		writer.set_position(0);
		writer.int4().write(7);

		assert_eq!(columns.get("a").unwrap().data.get_type(), Type::Int4);
		assert_eq!(columns.get("a").unwrap().data.get(0), Some(Value::Int4(7)));
	}

	#[test]
	fn test_same_type_never_promotes() {
		let mut columns = Columns::new();
		let mut writer = ColumnWriter::new(&mut columns, "a");
		for row in 0..10 {
			writer.set_position(row);
			writer.bool().write(row % 2 == 0);
		}

		assert_eq!(columns.get("a").unwrap().data.get_type(), Type::Boolean);
	}

	#[test]
	fn test_mismatched_write_promotes() {
		let mut columns = Columns::new();
		let mut writer = ColumnWriter::new(&mut columns, "a");
		writer.set_position(0);
		writer.bool().write(true);
		writer.set_position(1);
		writer.int4().write(10);

		let data = &columns.get("a").unwrap().data;
		assert!(data.is_union());
		assert_eq!(data.get(0), Some(Value::Boolean(true)));
		assert_eq!(data.get(1), Some(Value::Int4(10)));
	}

	#[test]
	fn test_promotion_is_monotonic() {
		let mut columns = Columns::new();
		let mut writer = ColumnWriter::new(&mut columns, "a");
		writer.set_position(0);
		writer.bool().write(true);
		writer.set_position(1);
		writer.int4().write(1);
		// back to the original type only
		for row in 2..20 {
			writer.set_position(row);
			writer.bool().write(false);
		}

		assert!(columns.get("a").unwrap().data.is_union());
	}

	#[test]
	fn test_cursor_does_not_allocate() {
		let mut columns = Columns::new();
		let mut writer = ColumnWriter::new(&mut columns, "a");
		writer.set_position(100);
		writer.start();
		writer.end();

		assert!(columns.get("a").is_none());
	}

	#[test]
	fn test_write_undefined_without_prior_type() {
		let mut columns = Columns::new();
		let mut writer = ColumnWriter::new(&mut columns, "a");
		writer.set_position(2);
		writer.write_undefined();

		let data = &columns.get("a").unwrap().data;
		assert_eq!(data.get_type(), Type::Undefined);
		assert_eq!(data.len(), 3);
	}

	#[test]
	fn test_generic_write() {
		let mut columns = Columns::new();
		let mut writer = ColumnWriter::new(&mut columns, "a");
		writer.write(1i64);
		writer.set_position(1);
		writer.write("text");

		let data = &columns.get("a").unwrap().data;
		assert!(data.is_union());
		assert_eq!(data.get(1), Some(Value::utf8("text")));
	}
}
