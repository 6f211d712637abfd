// Copyright (c) unicol contributors 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::Debug;

use crate::value::{GetType, Value};

/// Marker bound for the element types a numeric container can hold.
pub trait IsNumber: Copy + Clone + Debug + Default + PartialEq + GetType {
	fn into_value(self) -> Value;
}

macro_rules! is_number {
	($($primitive:ty),*) => {
		$(
			impl IsNumber for $primitive {
				fn into_value(self) -> Value {
					Value::from(self)
				}
			}
		)*
	};
}

is_number!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);
