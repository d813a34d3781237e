//! CLI commands for marginalia

pub mod delete;
pub mod dispatch;
pub mod edit;
pub mod format;
pub mod init;
pub mod input;
pub mod list;
pub mod new;
pub mod preview;
pub mod publish;
pub mod show;
