//! Error types shared by every converter.

use crate::decimal::Decimal;
use thiserror::Error;

/// Everything that can go wrong while building, mutating or converting a quantity.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// A magnitude-only quantity (bytes, distance, mass, time, speed) was given or would reach a value below zero.
    #[error("negative magnitude is not allowed: {value}")]
    NegativeMagnitude {
        /// The rejected value: the input in the unit it was supplied in, or the would-be total in the base unit when
        /// an accumulating `add_*` call fails.
        value: Decimal,
    },

    /// Division by an exact zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Text (or a non-finite float) that does not describe a decimal number.
    #[error("invalid decimal format: {0:?}")]
    InvalidFormat(String),

    /// Conversion between units of different dimensions.
    #[error("cannot convert {from} to {to}: different dimensions")]
    UnsupportedConversion {
        /// Symbol of the source unit.
        from: &'static str,
        /// Symbol of the requested unit.
        to: &'static str,
    },

    /// A display ladder whose tiers are not strictly descending.
    #[error("scale ladder is not strictly descending at tier {index}")]
    UnorderedLadder {
        /// Index of the first tier that is not smaller than its predecessor.
        index: usize,
    },

    /// A configuration document that could not be read.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias used across the workspace.
pub type ConversionResult<T> = Result<T, ConversionError>;
