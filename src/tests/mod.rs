//! Unit tests for the task list core.

mod postgres_row_tests;
mod support;
mod view_tests;
