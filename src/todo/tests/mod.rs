//! Unit tests for the todo context.
