// Copyright (c) unicol contributors 2025
// This file is licensed under the MIT, see license.md file

use std::ops::{Deref, Index, IndexMut};

use serde::{Deserialize, Serialize};
use unicol_type::Type;

use crate::{
	data::{ColumnData, DEFAULT_CAPACITY},
	error::{Error, Result},
};

/// A named column. The container owns the data; writers only ever
/// borrow it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
	pub name: String,
	pub data: ColumnData,
}

impl Column {
	pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
		Self {
			name: name.into(),
			data,
		}
	}
}

/// An ordered set of named columns. Each name is bound to exactly one
/// column at a time; `replace` rebinds a name during promotion.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Columns {
	columns: Vec<Column>,
}

impl Columns {
	pub fn new() -> Self {
		Self {
			columns: Vec::new(),
		}
	}

	pub fn with_columns(columns: Vec<Column>) -> Self {
		Self {
			columns,
		}
	}

	pub fn push(&mut self, column: Column) {
		self.columns.push(column);
	}

	pub fn index_of(&self, name: &str) -> Option<usize> {
		self.columns.iter().position(|column| column.name == name)
	}

	pub fn get(&self, name: &str) -> Option<&Column> {
		self.columns.iter().find(|column| column.name == name)
	}

	pub fn get_mut(&mut self, name: &str) -> Option<&mut Column> {
		self.columns.iter_mut().find(|column| column.name == name)
	}

	/// Look the name up, creating a column of `target` type on first
	/// touch. The first write observed for a name determines its
	/// initial concrete type.
	pub fn get_or_create(&mut self, name: &str, target: Type) -> &mut ColumnData {
		let idx = match self.index_of(name) {
			Some(idx) => idx,
			None => {
				self.columns.push(Column::new(name, ColumnData::with_capacity(target, DEFAULT_CAPACITY)));
				self.columns.len() - 1
			}
		};
		&mut self.columns[idx].data
	}

	/// Rebind `name` to `data`, handing back the displaced column data.
	pub fn replace(&mut self, name: &str, data: ColumnData) -> Result<ColumnData> {
		match self.get_mut(name) {
			Some(column) => Ok(std::mem::replace(&mut column.data, data)),
			None => Err(Error::ColumnNotFound {
				name: name.to_string(),
			}),
		}
	}

	/// Propagate the logical row count to every column.
	pub fn set_row_count(&mut self, row_count: usize) {
		for column in &mut self.columns {
			column.data.resize(row_count);
		}
	}

	pub fn row_count(&self) -> usize {
		self.columns.iter().map(|column| column.data.len()).max().unwrap_or(0)
	}
}

impl Deref for Columns {
	type Target = [Column];

	fn deref(&self) -> &Self::Target {
		&self.columns
	}
}

impl Index<usize> for Columns {
	type Output = Column;

	fn index(&self, idx: usize) -> &Self::Output {
		&self.columns[idx]
	}
}

impl IndexMut<usize> for Columns {
	fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
		&mut self.columns[idx]
	}
}

impl IntoIterator for Columns {
	type Item = Column;
	type IntoIter = std::vec::IntoIter<Column>;

	fn into_iter(self) -> Self::IntoIter {
		self.columns.into_iter()
	}
}
