//! バックエンドHTTPクライアント
//!
//! ブラウザ版と同じ契約（`/analyze`, `/feedback`）に加えて `/train-reward` を呼ぶ。
//! 再送はしない。

use crate::error::{AdvisorError, Result};
use reqwest::multipart::{Form, Part};
use std::path::Path;
use std::time::Duration;
use style_advisor_common::{
    api, parse_analysis, server_error_message, AnalysisResult, Error, FeedbackEvent,
    FeedbackStatus, StylePreference,
};
use tracing::{debug, warn};

/// アップロードする画像
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(AdvisorError::FileNotFound(path.display().to_string()));
        }

        let bytes = std::fs::read(path)?;
        if bytes.is_empty() {
            return Err(Error::Validation(api::EMPTY_FILE_MESSAGE.to_string()).into());
        }
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload".to_string());

        Ok(Self {
            mime_type: mime_type_for(path),
            file_name,
            bytes,
        })
    }
}

/// 拡張子からMIMEタイプを推定
pub fn mime_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

fn transport(err: reqwest::Error) -> Error {
    Error::Transport(err.to_string())
}

pub struct AdvisorClient {
    http: reqwest::Client,
    base_url: String,
}

impl AdvisorClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 画像とスタイルを `/analyze` に送信
    pub async fn analyze(
        &self,
        image: &ImageUpload,
        style: StylePreference,
    ) -> style_advisor_common::Result<AnalysisResult> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(image.mime_type)
            .map_err(transport)?;
        let form = Form::new()
            .part(api::FILE_FIELD, part)
            .text(api::STYLE_FIELD, style.value());

        debug!(file = %image.file_name, bytes = image.bytes.len(), style = %style, "POST {}", api::ANALYZE_PATH);

        let resp = self
            .http
            .post(self.url(api::ANALYZE_PATH))
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;

        let status = resp.status();
        let body = resp.bytes().await;

        if !status.is_success() {
            let body = body.unwrap_or_default();
            warn!(%status, "analysis rejected by server");
            return Err(Error::Server(server_error_message(&body)));
        }

        let body = body.map_err(transport)?;
        parse_analysis(&body)
    }

    /// フィードバックを `/feedback` に送信
    pub async fn send_feedback(&self, event: &FeedbackEvent) -> FeedbackStatus {
        debug!(recommendation = %event.recommendation, rating = event.rating.as_u8(), "POST {}", api::FEEDBACK_PATH);

        match self
            .http
            .post(self.url(api::FEEDBACK_PATH))
            .json(event)
            .send()
            .await
        {
            Ok(resp) if resp.status().is_success() => FeedbackStatus::accepted(event.rating),
            Ok(resp) => {
                warn!(status = %resp.status(), "feedback rejected by server");
                FeedbackStatus::ServerError
            }
            Err(err) => {
                warn!(error = %err, "feedback request failed");
                FeedbackStatus::NetworkError
            }
        }
    }

    /// サーバーの報酬モデルを再学習させる
    pub async fn train_reward(&self) -> style_advisor_common::Result<String> {
        let resp = self
            .http
            .post(self.url(api::TRAIN_REWARD_PATH))
            .send()
            .await
            .map_err(transport)?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(transport)?;

        if !status.is_success() {
            return Err(Error::Server(server_error_message(&body)));
        }

        let parsed: api::StatusResponse = serde_json::from_slice(&body)?;
        Ok(parsed.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_mime_type_for() {
        assert_eq!(mime_type_for(Path::new("me.JPG")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("me.png")), "image/png");
        assert_eq!(mime_type_for(Path::new("me")), "application/octet-stream");
    }

    #[test]
    fn test_upload_from_missing_path() {
        let err = ImageUpload::from_path(Path::new("/nonexistent/photo.jpg")).unwrap_err();
        assert!(matches!(err, AdvisorError::FileNotFound(_)));
    }

    #[test]
    fn test_upload_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("full_body.jpeg");
        std::fs::write(&path, [0xFF, 0xD8, 0xFF]).unwrap();

        let upload = ImageUpload::from_path(&path).unwrap();
        assert_eq!(upload.file_name, "full_body.jpeg");
        assert_eq!(upload.mime_type, "image/jpeg");
        assert_eq!(upload.bytes.len(), 3);
    }

    #[test]
    fn test_upload_rejects_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.jpg");
        std::fs::write(&path, b"").unwrap();

        let err = ImageUpload::from_path(&path).unwrap_err();
        assert!(matches!(err, AdvisorError::Advisor(Error::Validation(_))));
        assert_eq!(err.to_string(), api::EMPTY_FILE_MESSAGE);
        assert!(!err.is_transport());
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = AdvisorClient::new("http://localhost:5000/", None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.url(api::ANALYZE_PATH), "http://localhost:5000/analyze");
    }
}
