//! Dashboard handlers
//!
//! This module contains the user-facing operations of `Dashboard`.
//! Each group of handlers is in a separate file for better organization.

pub mod calendar;
pub mod course;
pub mod resource;
pub mod session;
pub mod stats;
