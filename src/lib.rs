// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub use crate::core::converter::convert_numeral;
pub use crate::core::engine::NumeralEngine;
pub use crate::core::ordinal::convert_ordinal;
pub use crate::error::{ConversionError, Error};
