// Copyright (c) unicol contributors 2025
// This file is licensed under the MIT, see license.md file

//! Columnar containers with transparent type promotion.
//!
//! Columns normally hold a single concrete type. When a writer is asked
//! to place a differently-typed value into an already-typed column, the
//! column is promoted in place to a union column that stores a per-row
//! type tag plus one sub-column per type ever written. Rows never
//! visited keep reading back as undefined.

pub mod columns;
pub mod container;
pub mod data;
mod error;
pub mod writer;

pub use columns::{Column, Columns};
pub use container::{
	BoolContainer, NumberContainer, UndefinedContainer, UnionContainer,
	Utf8Container,
};
pub use data::ColumnData;
pub use error::{Error, Result};
pub use unicol_type::{Type, Value};
pub use writer::ColumnWriter;
