//! Property-based tests for the stack against a plain `Vec` model.
