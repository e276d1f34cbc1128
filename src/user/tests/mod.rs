//! Unit tests for the user credential module.
