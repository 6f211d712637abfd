// Copyright (c) unicol contributors 2025
// This file is licensed under the MIT, see license.md file

pub mod util;
pub mod value;

pub use util::{BitVec, CowVec};
pub use value::{GetType, IsNumber, OrderedF32, OrderedF64, Type, Value};
