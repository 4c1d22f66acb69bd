//! pathovar-test-utils — Canned service payloads shared by the workspace tests.

pub mod fixtures;
