//! Core character logic for unicode-cleaner
//!
//! This module contains pure text transforms with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Mode, the tag table)
//! - `services/` - The printability predicate and the three transforms

pub mod models;
pub mod services;
