pub mod sample_ops;
pub mod settings_ops;
pub mod simulate;
pub mod snippet_ops;
