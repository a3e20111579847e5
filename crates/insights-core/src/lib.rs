//! # insights-core
//!
//! Core types for the insights service.
//!
//! This crate provides the foundational types shared across all insights crates:
//! - The persisted `Insight` record
//! - The two mutating commands (`CreateInsight`, `DeleteInsight`)
//! - Boundary validation from untyped JSON into those commands
//! - The validation fault type
//! - HTTP response body types

pub mod commands;
pub mod entities;
pub mod errors;
pub mod responses;
pub mod validation;
