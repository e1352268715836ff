//! Domain logic
//!
//! This module contains domain-specific types and rules:
//! - Driver records as served by the fleet API
//! - The driver creation draft
//! - Table column definitions (headers, accessors, rendering)
//! - Client-side routes
//! - Text fitting utilities

pub mod column;
pub mod driver;
pub mod profile;
pub mod route;
pub mod text;
