//! Integration tests for the marginalia CLI
//!
//! These tests run the marginalia binary against temporary project roots.

mod delete;
mod init;
mod list;
mod preview;
mod publish;
mod show;
