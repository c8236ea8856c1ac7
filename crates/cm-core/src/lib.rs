//! `cm-core` — foundational types for the `campus_map` workspace.
//!
//! This crate is a dependency of every other `cm-*` crate.  It has no `cm-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`                                              |
//! | [`geo`]         | `Point`, Euclidean pixel distance                     |
//! | [`location`]    | `Location`, `LocationCode`                            |
//! | [`config`]      | `DisplayConfig`, `EditorConfig`                       |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod location;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DisplayConfig, EditorConfig};
pub use error::{CoreError, CoreResult};
pub use geo::Point;
pub use ids::NodeId;
pub use location::{Location, LocationCode};
