//! HTTP surface of WebInvite: the dashboard, the feature panels and the live
//! preview, served with salvo.

pub mod app;
pub mod backend_handler;
pub mod config;
pub mod error;
