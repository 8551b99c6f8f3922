//! taskdeck library - todos, deadlines and events tracked in a flat datafile

pub mod cli;
pub mod config;
pub mod task;
