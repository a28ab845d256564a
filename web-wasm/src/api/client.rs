//! バックエンド連携（`/analyze`, `/feedback`）
//!
//! fetch APIを直接呼ぶ。JS境界のエラー(JsValue)はここで共通エラーに変換し、
//! コンポーネントには `style_advisor_common::Error` だけを渡す。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, Response};
use style_advisor_common::{
    api, AnalysisResult, Error, FeedbackEvent, FeedbackStatus, Result,
};

/// JsValueのエラーを読める文字列にする
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", value)
}

fn transport(value: JsValue) -> Error {
    Error::Transport(describe_js_error(&value))
}

/// POSTを送ってResponseを得る
async fn fetch(request: &Request) -> std::result::Result<Response, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
    let value = JsFuture::from(window.fetch_with_request(request)).await?;
    value.dyn_into()
}

async fn read_text(resp: &Response) -> std::result::Result<String, JsValue> {
    let text = JsFuture::from(resp.text()?).await?;
    Ok(text.as_string().unwrap_or_default())
}

/// 画像とスタイルを `/analyze` に送信
///
/// # Arguments
/// * `file` - 選択された画像ファイル
/// * `style` - スタイル選択の値（自動なら空文字）
///
/// # Returns
/// 2xxなら解析結果、それ以外は Server / Transport / Json エラー
pub async fn submit_analysis(file: &File, style: &str) -> Result<AnalysisResult> {
    let form = FormData::new().map_err(transport)?;
    form.append_with_blob(api::FILE_FIELD, file).map_err(transport)?;
    form.append_with_str(api::STYLE_FIELD, style).map_err(transport)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(api::ANALYZE_PATH, &opts).map_err(transport)?;
    let resp = fetch(&request).await.map_err(transport)?;

    if !resp.ok() {
        // 本文が読めなくても汎用メッセージで表示する
        let body = read_text(&resp).await.unwrap_or_default();
        return Err(Error::Server(api::server_error_message(body.as_bytes())));
    }

    let body = read_text(&resp).await.map_err(transport)?;
    api::parse_analysis(body.as_bytes())
}

/// フィードバックを `/feedback` に送信（再送なし）
pub async fn send_feedback(event: &FeedbackEvent) -> FeedbackStatus {
    match post_feedback(event).await {
        Ok(resp) if resp.ok() => FeedbackStatus::accepted(event.rating),
        Ok(resp) => {
            gloo::console::warn!(format!("feedback rejected: HTTP {}", resp.status()));
            FeedbackStatus::ServerError
        }
        Err(err) => {
            gloo::console::error!(format!("feedback request failed: {}", describe_js_error(&err)));
            FeedbackStatus::NetworkError
        }
    }
}

async fn post_feedback(event: &FeedbackEvent) -> std::result::Result<Response, JsValue> {
    let body = serde_json::to_string(event).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(api::FEEDBACK_PATH, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    fetch(&request).await
}
