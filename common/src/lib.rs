//! Style Advisor Common Library
//!
//! ブラウザ(WASM)とCLIで共有される型・HTTP契約・表示モデル

pub mod api;
pub mod error;
pub mod feedback;
pub mod render;
pub mod session;
pub mod types;

pub use api::{parse_analysis, server_error_message, validate_submission};
pub use error::{Error, Result};
pub use feedback::{FeedbackEvent, FeedbackStatus, Rating};
pub use render::{AnalysisView, CardKey, CardView, RecommendationsView};
pub use session::{FormState, Session, SubmitTicket};
pub use types::{AnalysisResult, Recommendation, StylePreference};
