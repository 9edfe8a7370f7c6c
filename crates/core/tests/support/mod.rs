//! Shared test helpers for `czds-core` integration tests.
//!
//! Provides an in-memory [`RemoteInvoker`] and record fixtures so the
//! workflow tests can focus on behaviour and call sequencing.

#![allow(dead_code)]

pub mod fixtures;
pub mod invoker;

pub use fixtures::*;
pub use invoker::{FakeRemoteInvoker, FAKE_BASE_URL};
