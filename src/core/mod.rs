//! Core library components.
//!
//! This module contains the conversion logic (path classification and body
//! extraction) plus the plumbing around it: store enumeration, decryption
//! through external tools, and CSV output.

pub mod cipher;
pub mod classify;
pub mod config;
pub mod constants;
pub mod convert;
pub mod domain;
pub mod export;
pub mod extract;
pub mod migrate;
pub mod store;
pub mod types;
