//! Shared test support: builders for records, drafts, and stores.

#![allow(unused)]

pub mod builders;

pub use builders::*;
