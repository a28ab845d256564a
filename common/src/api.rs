//! サーバーとのHTTP契約
//!
//! エンドポイントのパス、フォームのフィールド名、ユーザー向けメッセージ、
//! レスポンス本文の解釈をまとめる。通信そのものはブラウザ側(fetch)と
//! CLI側(reqwest)がそれぞれ行う。

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::AnalysisResult;

pub const ANALYZE_PATH: &str = "/analyze";
pub const FEEDBACK_PATH: &str = "/feedback";
pub const TRAIN_REWARD_PATH: &str = "/train-reward";

/// multipartのフィールド名
pub const FILE_FIELD: &str = "file";
pub const STYLE_FIELD: &str = "style";

pub const NO_FILE_MESSAGE: &str = "Please upload an image.";
pub const EMPTY_FILE_MESSAGE: &str = "The selected image is empty.";
pub const NO_RECOMMENDATIONS_MESSAGE: &str = "No recommendations available.";
/// 本文がJSONとして読めない場合
pub const GENERIC_SERVER_ERROR: &str = "Server error";
/// JSONだが`error`が無い場合
pub const UPLOAD_FAILED_MESSAGE: &str = "Upload failed";
pub const UNEXPECTED_ERROR_MESSAGE: &str =
    "An unexpected error occurred. Check the browser console for details.";

/// ファイル数を検証（0件ならリクエストを作らない）
pub fn validate_submission(file_count: usize) -> Result<()> {
    if file_count == 0 {
        return Err(Error::Validation(NO_FILE_MESSAGE.to_string()));
    }
    Ok(())
}

/// 2xx以外のレスポンス本文からエラーメッセージを取り出す
pub fn server_error_message(body: &[u8]) -> String {
    match serde_json::from_slice::<Value>(body) {
        Ok(value) => match value.get("error") {
            Some(Value::String(msg)) if !msg.is_empty() => msg.clone(),
            _ => UPLOAD_FAILED_MESSAGE.to_string(),
        },
        Err(_) => GENERIC_SERVER_ERROR.to_string(),
    }
}

/// 2xxレスポンス本文を解析結果に変換
pub fn parse_analysis(body: &[u8]) -> Result<AnalysisResult> {
    Ok(serde_json::from_slice(body)?)
}

/// `/train-reward` の成功レスポンス
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: String,
}
