use crate::core::models::sequence::SequenceError;
use crate::core::tables::TableError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum DescriptorError {
    #[error("Invalid sequence: {source}")]
    InvalidSequence {
        #[from]
        source: SequenceError,
    },

    #[error(
        "Sequence of length {actual} is too short for {parameter} = {value} (needs at least {required} residues)"
    )]
    InsufficientSequenceLength {
        parameter: &'static str,
        value: usize,
        required: usize,
        actual: usize,
    },

    #[error("Invalid table: {source}")]
    InvalidTable {
        #[from]
        source: TableError,
    },

    #[error("Property '{property}' is constant along the sequence; its variance is zero")]
    DegenerateProperty { property: String },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
