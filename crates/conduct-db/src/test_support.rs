//! Shared test utilities for conduct-db tests.
