//! フィードバック（👍/👎）
//!
//! `/feedback` に送るJSONと、送信結果ごとの表示メッセージ。
//! 再送・連打防止は行わない。クリックのたびに1回送り、結果で表示を上書きする。

use serde::{Serialize, Serializer};

use crate::types::Recommendation;

/// 評価（0 = 👎, 1 = 👍）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rating {
    Down,
    Up,
}

impl Rating {
    pub fn as_u8(&self) -> u8 {
        match self {
            Rating::Down => 0,
            Rating::Up => 1,
        }
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Rating::Down),
            1 => Some(Rating::Up),
            _ => None,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Rating::Down => "👎",
            Rating::Up => "👍",
        }
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

/// `/feedback` のリクエスト本文
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackEvent {
    pub shape: String,
    pub style: String,
    pub recommendation: String,
    pub rating: Rating,
}

impl FeedbackEvent {
    pub fn new(
        shape: impl Into<String>,
        style: impl Into<String>,
        recommendation: &Recommendation,
        rating: Rating,
    ) -> Self {
        Self {
            shape: shape.into(),
            style: style.into(),
            recommendation: recommendation.identifier().to_string(),
            rating,
        }
    }
}

/// 送信結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackStatus {
    Saved,
    Noted,
    ServerError,
    NetworkError,
}

impl FeedbackStatus {
    /// 2xxを受け取った場合（評価によって文言が変わる）
    pub fn accepted(rating: Rating) -> Self {
        match rating {
            Rating::Up => FeedbackStatus::Saved,
            Rating::Down => FeedbackStatus::Noted,
        }
    }

    pub fn note(&self) -> &'static str {
        match self {
            FeedbackStatus::Saved => "Thanks — saved",
            FeedbackStatus::Noted => "Feedback noted",
            FeedbackStatus::ServerError => "Error saving feedback",
            FeedbackStatus::NetworkError => "Network error",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FeedbackStatus::Saved | FeedbackStatus::Noted)
    }
}
