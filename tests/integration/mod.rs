//! Integration test suite for profiledep
//!
//! End-to-end flows through the lifecycle entry points, using the
//! `test-utils` fixtures in place of a real build environment.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **lifecycle_tests**: dependency attachment, classifier resolution, and
//!   the strict/tolerant duality
//! - **ear_tests**: EAR module generation and configuration splicing

mod ear_tests;

/// Installs a fmt subscriber honoring `RUST_LOG`, once per process.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
