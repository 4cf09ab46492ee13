//! Jump from one editor to the same file, line, and column in another.
//!
//! Two paths lead to a launched process: [`builtin`] holds hard-coded
//! argument shaping for well-known editors, and [`template`] resolves
//! user-defined editors from a command template. [`switcher`] ties both
//! to the persistent [`config`] and hands the result to [`launcher`].

pub mod builtin;
pub mod config;
pub mod context;
pub mod custom;
pub mod launcher;
pub mod switcher;
pub mod template;
pub mod validate;

pub use builtin::BuiltinEditor;
pub use config::Config;
pub use context::EditorContext;
pub use custom::{CustomEditor, EditorSet, Surface};
pub use validate::Validation;
