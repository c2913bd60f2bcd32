//! Unit tests for the service layer, run against in-memory databases.

#![expect(
    clippy::expect_used,
    reason = "test setup failures should panic with context"
)]

mod behaviour;
mod support;
