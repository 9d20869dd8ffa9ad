//! Unit tests for the ingest context.

mod status_transition_tests;
