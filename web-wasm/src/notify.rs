//! ユーザー通知（alert）と診断ログ

use style_advisor_common::Error;

/// ブロッキングのalertダイアログを表示
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// 解析フローのエラーを通知する
///
/// 通信エラーと本文の解析エラーはコンソールに詳細を出し、画面には汎用メッセージのみ。
pub fn report_analysis_error(error: &Error) {
    match error {
        Error::Transport(_) | Error::Json(_) => {
            gloo::console::error!(format!("analysis request failed: {}", error));
        }
        Error::Busy => {
            gloo::console::warn!("submission ignored: a request is already in flight");
            return;
        }
        Error::Validation(_) | Error::Server(_) => {}
    }
    alert(&error.user_message());
}
