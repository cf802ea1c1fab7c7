//! Integration tests for Layer 3: Runtime
//!
//! Tests for tag sources, sessions, and report rendering.
