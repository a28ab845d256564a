//! メインアプリケーションコンポーネント
//!
//! 状態は `Session`（送信状態 + 現在の表示）とカードごとのフィードバック表示のみ。
//! 描画は状態からの純粋な変換で、イベントハンドラだけが状態を書き換える。

use std::collections::HashMap;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::FileList;
use style_advisor_common::{
    validate_submission, CardKey, FeedbackStatus, Rating, Session,
};

use crate::api::client;
use crate::components::{
    header::Header,
    recommendation_list::RecommendationList,
    upload_form::UploadForm,
};
use crate::notify;

#[component]
pub fn App() -> impl IntoView {
    let session = RwSignal::new(Session::new());
    let notes = RwSignal::new(HashMap::<CardKey, FeedbackStatus>::new());

    let is_submitting = Signal::derive(move || session.with(|s| s.is_submitting()));
    let analysis = Signal::derive(move || session.with(|s| s.view().cloned()));

    // 解析送信ハンドラ
    let on_submit = move |files: Option<FileList>, style: String| {
        let count = files.as_ref().map(|f| f.length() as usize).unwrap_or(0);
        if let Err(e) = validate_submission(count) {
            notify::report_analysis_error(&e);
            return;
        }
        let Some(file) = files.and_then(|f| f.get(0)) else {
            return;
        };

        let ticket = match session.try_update(|s| s.begin_submit()) {
            Some(Ok(ticket)) => ticket,
            Some(Err(e)) => {
                notify::report_analysis_error(&e);
                return;
            }
            None => return,
        };

        spawn_local(async move {
            let outcome = client::submit_analysis(&file, &style).await;
            let succeeded = outcome.is_ok();

            match session.try_update(|s| s.complete(ticket, outcome)) {
                Some(Err(e)) => notify::report_analysis_error(&e),
                Some(Ok(())) if succeeded => notes.set(HashMap::new()),
                _ => {}
            }
        });
    };

    // フィードバックハンドラ
    let on_feedback = move |key: CardKey, rating: Rating| {
        let Some(event) = session.with_untracked(|s| s.feedback_for(key, rating)) else {
            gloo::console::warn!(format!("feedback ignored for stale card {}", key.dom_id()));
            return;
        };

        spawn_local(async move {
            let status = client::send_feedback(&event).await;
            notes.update(|n| {
                n.insert(key, status);
            });
        });
    };

    let shape = move || session.with(|s| s.view().map(|v| v.shape.clone()).unwrap_or_default());
    let category = move || session.with(|s| s.view().map(|v| v.category.clone()).unwrap_or_default());

    view! {
        <div class="container">
            <Header />

            <UploadForm is_submitting=is_submitting on_submit=on_submit />

            <div class="results">
                <p>"Body shape: " <strong id="shape">{shape}</strong></p>
                <p>"Style category: " <strong id="category">{category}</strong></p>
                <RecommendationList analysis=analysis notes=notes on_feedback=on_feedback />
            </div>
        </div>
    }
}
