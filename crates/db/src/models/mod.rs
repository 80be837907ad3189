//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - Nested view structs for reads that eagerly join related rows

pub mod answer;
pub mod genre;
pub mod question;
