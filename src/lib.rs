//! Workspace-level integration tests for sortbatch live in `tests/`.
