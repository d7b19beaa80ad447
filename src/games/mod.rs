//! Game implementations.

pub mod word_scramble;
