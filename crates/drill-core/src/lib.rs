//! Data types and persistence for the guided typing engine: the
//! reference buffer, slot annotations, input classification, snippet
//! storage, settings and ambient audio synthesis.

pub mod annotations;
pub mod classify;
pub mod layout;
pub mod reference;
pub mod samples;
pub mod settings;
pub mod snippets;
pub mod tone;
