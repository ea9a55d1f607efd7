//! Integration tests for Layer 1: Composite data
//!
//! Tests for the composite store, the ExpectData fast path, label
//! registration, and diagnostics.

mod diagnostics;
mod expect;
mod labels;
