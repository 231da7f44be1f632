//! Validated Entity Tests
//!
//! End-to-end tests of the validated property installer:
//! - Construction and declaration errors
//! - Kind enforcement on writes
//! - Structural seal
//! - Teardown lifecycle
//! - Typed entities and schema configuration

#[macro_use]
#[path = "../common/mod.rs"]
mod common;

mod config_loading;
mod typed;
