//! HTTP-level integration tests against the in-memory backend.

mod dashboard;
mod helpers;
mod panels;
mod preview;
