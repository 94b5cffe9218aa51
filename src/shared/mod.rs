//! Geteilte Konfiguration beider Anwendungen.

pub mod options;

pub use options::EditorOptions;
