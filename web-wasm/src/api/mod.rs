//! バックエンドAPI

pub mod client;
