//! Property-based tests for field coercion.
