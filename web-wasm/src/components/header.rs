//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Style Advisor"</h1>
            <p class="text-muted">"Upload a full-body photo and get outfit and fabric recommendations for your shape."</p>
        </header>
    }
}
