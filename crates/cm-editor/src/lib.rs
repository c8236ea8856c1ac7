//! `cm-editor` — interactive editing of a campus map.
//!
//! The host UI forwards pointer events (in screen pixels) to a [`MapEditor`],
//! which converts them to map pixels through a [`Viewport`], hit-tests them
//! against the graph, and adds buildings, path junctions, edges, and labels
//! according to the current [`EditMode`].  Names for new buildings and labels
//! come from the host through the [`NamePrompt`] trait.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`mode`]     | `EditMode`                                            |
//! | [`viewport`] | `Viewport` (screen ↔ map scaling)                     |
//! | [`prompt`]   | `NamePrompt` trait, `PromptKind`, `PromptReply`       |
//! | [`editor`]   | `MapEditor`, `EditOutcome`                            |
//! | [`error`]    | `EditorError`, `EditorResult<T>`                      |

pub mod editor;
pub mod error;
pub mod mode;
pub mod prompt;
pub mod viewport;

#[cfg(test)]
mod tests;

pub use editor::{EditOutcome, MapEditor};
pub use error::{EditorError, EditorResult};
pub use mode::EditMode;
pub use prompt::{NamePrompt, PromptKind, PromptReply};
pub use viewport::Viewport;
