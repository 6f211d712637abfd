// Copyright (c) unicol contributors 2025
// This file is licensed under the MIT, see license.md file

mod bool;
mod number;
mod undefined;
mod union;
mod utf8;

pub use bool::BoolContainer;
pub use number::NumberContainer;
pub use undefined::UndefinedContainer;
pub use union::UnionContainer;
pub use utf8::Utf8Container;
