//! Shared test harness modules for the profile scoring CLI.
#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

use super::*;

mod helpers;
mod score_steps;
