// Copyright (c) unicol contributors 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod get;

pub use get::GetType;

/// All data types a column can hold.
///
/// `Undefined` doubles as the unset row tag of a union column;
/// `Union` only ever describes a column, never a single row value.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// A boolean: true or false.
	Boolean,
	/// A 4-byte floating point
	Float4,
	/// An 8-byte floating point
	Float8,
	/// A 1-byte signed integer
	Int1,
	/// A 2-byte signed integer
	Int2,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// A 16-byte signed integer
	Int16,
	/// A 1-byte unsigned integer
	Uint1,
	/// A 2-byte unsigned integer
	Uint2,
	/// A 4-byte unsigned integer
	Uint4,
	/// A 8-byte unsigned integer
	Uint8,
	/// A 16-byte unsigned integer
	Uint16,
	/// A UTF-8 encoded text
	Utf8,
	/// A column holding mixed row types, one sub-column per type
	Union,
	/// Value is not defined (think null in common programming languages)
	Undefined,
}

impl Type {
	pub fn is_number(&self) -> bool {
		self.is_integer() || self.is_floating_point()
	}

	pub fn is_bool(&self) -> bool {
		matches!(self, Type::Boolean)
	}

	pub fn is_signed_integer(&self) -> bool {
		matches!(self, Type::Int1 | Type::Int2 | Type::Int4 | Type::Int8 | Type::Int16)
	}

	pub fn is_unsigned_integer(&self) -> bool {
		matches!(self, Type::Uint1 | Type::Uint2 | Type::Uint4 | Type::Uint8 | Type::Uint16)
	}

	pub fn is_integer(&self) -> bool {
		self.is_signed_integer() || self.is_unsigned_integer()
	}

	pub fn is_floating_point(&self) -> bool {
		matches!(self, Type::Float4 | Type::Float8)
	}

	pub fn is_utf8(&self) -> bool {
		matches!(self, Type::Utf8)
	}

	pub fn is_union(&self) -> bool {
		matches!(self, Type::Union)
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Type::Undefined)
	}

	/// True for types a single row value can carry, i.e. everything a
	/// union variant can be keyed by.
	pub fn is_value_type(&self) -> bool {
		!self.is_union() && !self.is_undefined()
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			Type::Boolean => "Boolean",
			Type::Float4 => "Float4",
			Type::Float8 => "Float8",
			Type::Int1 => "Int1",
			Type::Int2 => "Int2",
			Type::Int4 => "Int4",
			Type::Int8 => "Int8",
			Type::Int16 => "Int16",
			Type::Uint1 => "Uint1",
			Type::Uint2 => "Uint2",
			Type::Uint4 => "Uint4",
			Type::Uint8 => "Uint8",
			Type::Uint16 => "Uint16",
			Type::Utf8 => "Utf8",
			Type::Union => "Union",
			Type::Undefined => "Undefined",
		};
		f.write_str(name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_classification() {
		assert!(Type::Int4.is_number());
		assert!(Type::Int4.is_signed_integer());
		assert!(Type::Uint8.is_unsigned_integer());
		assert!(Type::Float4.is_floating_point());
		assert!(!Type::Boolean.is_number());
		assert!(Type::Utf8.is_utf8());
	}

	#[test]
	fn test_value_type() {
		assert!(Type::Boolean.is_value_type());
		assert!(Type::Utf8.is_value_type());
		assert!(!Type::Union.is_value_type());
		assert!(!Type::Undefined.is_value_type());
	}
}
