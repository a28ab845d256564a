//! エラー型定義
//!
//! 解析フローのエラーは3種類のみ:
//! - Validation: リクエスト前にクライアント側で検出（ファイル未選択など）
//! - Server: 2xx以外のレスポンス（本文の`error`から取得）
//! - Transport: リクエスト自体の失敗（オフライン、CORSなど）

use thiserror::Error;

use crate::api::UNEXPECTED_ERROR_MESSAGE;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Server(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("A submission is already in progress")]
    Busy,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// ユーザーに表示するメッセージ
    ///
    /// 通信エラーは詳細を出さず汎用メッセージにする（詳細はログへ）
    pub fn user_message(&self) -> String {
        match self {
            Error::Validation(msg) | Error::Server(msg) => msg.clone(),
            Error::Transport(_) | Error::Json(_) => UNEXPECTED_ERROR_MESSAGE.to_string(),
            Error::Busy => self.to_string(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
