//! Unit test suite for profiledep
//!
//! Black-box tests against the public API, organized by functionality area:
//! - **spec_tests**: specification grammar edge cases
//! - **pipeline_tests**: scanner-to-resolver flow across profiles
//! - **tree_tests**: configuration merge contract
//!
//! # Running Unit Tests
//!
//! ```bash
//! cargo test --test unit
//! ```

mod pipeline_tests;
mod spec_tests;
mod tree_tests;
