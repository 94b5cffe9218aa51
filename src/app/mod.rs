//! Application-Layer: Controller, State, Events und Use-Cases beider Apps.

pub mod command_log;
pub mod mesh;
pub mod picker;

pub use command_log::CommandLog;
