//! アップロードフォームコンポーネント
//!
//! 画像ファイルとスタイル選択を集めて親に渡すだけ。検証と送信は親が行う。

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use web_sys::FileList;
use style_advisor_common::StylePreference;

#[component]
pub fn UploadForm<F>(
    is_submitting: Signal<bool>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(Option<FileList>, String) + 'static + Clone + Send + Sync,
{
    let file_input: NodeRef<html::Input> = NodeRef::new();
    let style_select: NodeRef<html::Select> = NodeRef::new();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let files = file_input.get().and_then(|input| input.files());
        let style = style_select
            .get()
            .map(|select| select.value())
            .unwrap_or_default();
        on_submit(files, style);
    };

    view! {
        <form id="uploadForm" class="upload-form" on:submit=handle_submit>
            <div class="form-group">
                <label for="fileInput">"Your photo"</label>
                <input type="file" id="fileInput" name="file" accept="image/*" node_ref=file_input />
            </div>

            <div class="form-group">
                <label for="style">"Preferred style"</label>
                <select id="style" name="style" node_ref=style_select>
                    {StylePreference::ALL
                        .iter()
                        .map(|style| view! { <option value=style.value()>{style.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <button type="submit" class="btn btn-primary" disabled=move || is_submitting.get()>
                {move || if is_submitting.get() { "Analyzing..." } else { "Get recommendations" }}
            </button>
        </form>
    }
}
