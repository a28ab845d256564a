//! Style Advisor CLI
//!
//! 体型解析サーバーに写真を送り、おすすめコーデを端末に表示する

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod rate;
pub mod terminal;
