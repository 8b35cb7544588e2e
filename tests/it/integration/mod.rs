//! Multi-component workflow tests.
