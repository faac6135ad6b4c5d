//! Main module for lawtext library functionality

pub mod ast;
pub mod decoration;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod numerals;
pub mod parsing;
pub mod testing;
pub mod token;
