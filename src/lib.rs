//! Synthetic soccer match-performance dataset feeding a two-sheet BI workbook.

pub mod catalog;
pub mod export;
pub mod generator;
pub mod score;
pub mod summary;
pub mod tier;
