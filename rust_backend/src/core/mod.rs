//! Core domain models for crime incident data.
//!
//! This module defines the fundamental data structures used throughout the CII system:
//! the typed incident record and the canonical column schema.

pub mod domain;
pub mod schema;
