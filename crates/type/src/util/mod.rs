// Copyright (c) unicol contributors 2025
// This file is licensed under the MIT, see license.md file

mod bitvec;
mod cowvec;

pub use bitvec::BitVec;
pub use cowvec::CowVec;
