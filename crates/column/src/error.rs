// Copyright (c) unicol contributors 2025
// This file is licensed under the MIT, see license.md file

use unicol_type::Type;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
	#[error("column `{name}` not found")]
	ColumnNotFound { name: String },

	#[error("row {row} is undefined")]
	UndefinedRow { row: usize },

	#[error("cannot write {found} into a {expected} column")]
	TypeMismatch { expected: Type, found: Type },
}

pub type Result<T> = std::result::Result<T, Error>;
