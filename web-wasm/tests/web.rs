//! ブラウザ上でのUIテスト
//!
//! `window.fetch` と `window.alert` を差し替え、フォーム送信とフィードバックを
//! 実際のDOM操作で検証する。
//! `wasm-pack test --headless --chrome web-wasm` で実行する

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use serde_json::json;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, HtmlInputElement};
use style_advisor_common::api::{NO_FILE_MESSAGE, UNEXPECTED_ERROR_MESSAGE};
use style_advisor_wasm::api::client::describe_js_error;

wasm_bindgen_test_configure!(run_in_browser);

/// 差し替えたfetchが返すレスポンス
enum Reply {
    Json(u16, String),
    Offline,
}

/// fetch / alert の差し替え
#[derive(Clone, Default)]
struct FakeBackend {
    replies: Rc<RefCell<VecDeque<Reply>>>,
    requests: Rc<RefCell<Vec<String>>>,
    alerts: Rc<RefCell<Vec<String>>>,
}

impl FakeBackend {
    fn install() -> Self {
        let backend = Self::default();
        let window = web_sys::window().unwrap();

        let fetch = {
            let backend = backend.clone();
            Closure::wrap(Box::new(move |input: JsValue| -> js_sys::Promise {
                let url = input
                    .dyn_ref::<web_sys::Request>()
                    .map(|r| r.url())
                    .unwrap_or_else(|| input.as_string().unwrap_or_default());
                backend.requests.borrow_mut().push(url);

                match backend.replies.borrow_mut().pop_front() {
                    Some(Reply::Json(status, body)) => {
                        let init = web_sys::ResponseInit::new();
                        init.set_status(status);
                        let resp = web_sys::Response::new_with_opt_str_and_init(Some(&body), &init)
                            .unwrap();
                        js_sys::Promise::resolve(&resp.into())
                    }
                    Some(Reply::Offline) | None => {
                        js_sys::Promise::reject(&js_sys::Error::new("Failed to fetch").into())
                    }
                }
            }) as Box<dyn FnMut(JsValue) -> js_sys::Promise>)
        };
        js_sys::Reflect::set(&window, &JsValue::from_str("fetch"), fetch.as_ref()).unwrap();
        fetch.forget();

        let alert = {
            let backend = backend.clone();
            Closure::wrap(Box::new(move |message: JsValue| {
                backend
                    .alerts
                    .borrow_mut()
                    .push(message.as_string().unwrap_or_default());
            }) as Box<dyn FnMut(JsValue)>)
        };
        js_sys::Reflect::set(&window, &JsValue::from_str("alert"), alert.as_ref()).unwrap();
        alert.forget();

        backend
    }

    fn reply(&self, reply: Reply) {
        self.replies.borrow_mut().push_back(reply);
    }

    fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

fn document() -> web_sys::Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("document not available")
}

/// テストごとに独立したコンテナへAppをマウント
fn mount_app() -> HtmlElement {
    let doc = document();
    let container: HtmlElement = doc.create_element("div").unwrap().dyn_into().unwrap();
    doc.body().unwrap().append_child(&container).unwrap();
    std::mem::forget(leptos::mount::mount_to(container.clone(), style_advisor_wasm::App));
    container
}

fn find(root: &Element, selector: &str) -> Element {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("missing {}", selector))
}

fn text_of(root: &Element, selector: &str) -> String {
    find(root, selector).text_content().unwrap_or_default()
}

fn click(root: &Element, selector: &str) {
    find(root, selector).dyn_into::<HtmlElement>().unwrap().click();
}

fn select_photo(root: &Element) {
    let input: HtmlInputElement = find(root, "#fileInput").dyn_into().unwrap();
    let parts = js_sys::Array::of1(&JsValue::from_str("jpeg-bytes"));
    let file = web_sys::File::new_with_str_sequence(&parts, "me.jpg").unwrap();
    let transfer = web_sys::DataTransfer::new().unwrap();
    transfer.items().add_with_file(&file).unwrap();
    input.set_files(transfer.files().as_ref());
}

fn price_titles(root: &Element) -> Vec<String> {
    let nodes = root.query_selector_all(".recommendation-card .price-title").unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .map(|node| node.text_content().unwrap_or_default())
        .collect()
}

/// spawn_localのタスクとfetchのPromiseを消化させる
async fn settle() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 50)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn analysis_reply() -> Reply {
    let body = json!({
        "shape": "Hourglass",
        "category": "Wedding_occasion",
        "recommendations": [
            { "name": "Occasion 1", "image": "static/styles/Wedding_occasion/occasion_1.jpg",
              "price": 8000, "fabrics": ["Lace, Sample"], "price_breakdown": ["Lace (Sample) = ₦8000 per yard"] },
            { "image": "//static/styles/Wedding_occasion/occasion_3.jpg",
              "price": null, "fabrics": [], "price_breakdown": [] },
            { "name": "Occasion 7", "price": 25000,
              "fabrics": ["Lace, Beaded(luxury)"], "price_breakdown": [] }
        ]
    });
    Reply::Json(200, body.to_string())
}

/// 解析を1回成功させる
async fn render_three_cards(backend: &FakeBackend, root: &Element) {
    select_photo(root);
    backend.reply(analysis_reply());
    click(root, "button[type=submit]");
    settle().await;
}

// =============================================
// DOM契約
// =============================================

#[wasm_bindgen_test]
fn app_renders_dom_contract() {
    let root = mount_app();
    for selector in ["#uploadForm", "#fileInput", "#style", "#shape", "#category", "#recommendations", ".results"] {
        find(&root, selector);
    }
    let options = find(&root, "#style").query_selector_all("option").unwrap();
    assert_eq!(options.length(), 4);
    assert!(price_titles(&root).is_empty());
}

#[wasm_bindgen_test]
fn js_errors_are_described() {
    assert_eq!(describe_js_error(&JsValue::from_str("offline")), "offline");

    let err = js_sys::Error::new("Failed to fetch");
    assert_eq!(describe_js_error(&err.into()), "Failed to fetch");
}

// =============================================
// 解析送信
// =============================================

#[wasm_bindgen_test]
async fn submit_without_file_alerts_and_sends_nothing() {
    let backend = FakeBackend::install();
    let root = mount_app();

    click(&root, "button[type=submit]");
    settle().await;

    assert_eq!(backend.alerts(), vec![NO_FILE_MESSAGE.to_string()]);
    assert!(backend.requests().is_empty());
}

#[wasm_bindgen_test]
async fn successful_analysis_renders_cards_in_order() {
    let backend = FakeBackend::install();
    let root = mount_app();

    render_three_cards(&backend, &root).await;

    assert_eq!(backend.requests().len(), 1);
    assert!(backend.requests()[0].ends_with("/analyze"));
    assert!(backend.alerts().is_empty());
    assert_eq!(text_of(&root, "#shape"), "Hourglass");
    assert_eq!(text_of(&root, "#category"), "Wedding_occasion");
    assert_eq!(
        text_of(&root, ".results-header"),
        "3 outfits recommended for your Hourglass shape"
    );
    assert_eq!(
        price_titles(&root),
        vec!["Cost per yard: ₦8000", "Cost per yard: ₦N/A", "Cost per yard: ₦25000"]
    );

    let images = root.query_selector_all(".recommendation-card img").unwrap();
    assert_eq!(images.length(), 2);
    let second: Element = images.get(1).unwrap().dyn_into().unwrap();
    assert_eq!(
        second.get_attribute("src").as_deref(),
        Some("/static/styles/Wedding_occasion/occasion_3.jpg")
    );
}

#[wasm_bindgen_test]
async fn empty_recommendations_render_placeholder() {
    let backend = FakeBackend::install();
    let root = mount_app();

    select_photo(&root);
    backend.reply(Reply::Json(200, json!({ "shape": "Pear", "recommendations": [] }).to_string()));
    click(&root, "button[type=submit]");
    settle().await;

    assert_eq!(text_of(&root, ".placeholder"), "No recommendations available.");
    assert_eq!(root.query_selector_all(".placeholder").unwrap().length(), 1);
    assert!(price_titles(&root).is_empty());
    assert_eq!(text_of(&root, "#category"), "Unknown");
}

#[wasm_bindgen_test]
async fn server_error_is_alerted() {
    let backend = FakeBackend::install();
    let root = mount_app();

    select_photo(&root);
    backend.reply(Reply::Json(
        400,
        json!({ "error": "Detection failed: Body not detected" }).to_string(),
    ));
    click(&root, "button[type=submit]");
    settle().await;

    assert_eq!(backend.alerts(), vec!["Detection failed: Body not detected".to_string()]);
    assert!(price_titles(&root).is_empty());
}

#[wasm_bindgen_test]
async fn transport_failure_keeps_previous_cards() {
    let backend = FakeBackend::install();
    let root = mount_app();
    render_three_cards(&backend, &root).await;
    let before = price_titles(&root);

    backend.reply(Reply::Offline);
    click(&root, "button[type=submit]");
    settle().await;

    assert_eq!(backend.requests().len(), 2);
    assert_eq!(backend.alerts(), vec![UNEXPECTED_ERROR_MESSAGE.to_string()]);
    assert_eq!(price_titles(&root), before);
    assert_eq!(text_of(&root, "#shape"), "Hourglass");

    let button: web_sys::HtmlButtonElement = find(&root, "button[type=submit]").dyn_into().unwrap();
    assert!(!button.disabled());
}

// =============================================
// フィードバック
// =============================================

#[wasm_bindgen_test]
async fn feedback_note_changes_only_after_response() {
    let backend = FakeBackend::install();
    let root = mount_app();
    render_three_cards(&backend, &root).await;

    let third = root.query_selector_all(".recommendation-card").unwrap().get(2).unwrap();
    let third: Element = third.dyn_into().unwrap();

    backend.reply(Reply::Json(200, json!({ "status": "saved" }).to_string()));
    click(&third, "button[title=Helpful]");
    assert_eq!(text_of(&root, "#note-1-2"), "");

    settle().await;
    assert!(backend.requests().last().unwrap().ends_with("/feedback"));
    assert_eq!(text_of(&root, "#note-1-2"), "Thanks — saved");
    assert_eq!(text_of(&root, "#note-1-0"), "");

    backend.reply(Reply::Json(500, json!({ "error": "disk full" }).to_string()));
    click(&third, "button[title='Not helpful']");
    settle().await;
    assert_eq!(text_of(&root, "#note-1-2"), "Error saving feedback");

    backend.reply(Reply::Offline);
    click(&third, "button[title='Not helpful']");
    settle().await;
    assert_eq!(text_of(&root, "#note-1-2"), "Network error");

    backend.reply(Reply::Json(200, json!({ "status": "saved" }).to_string()));
    click(&third, "button[title='Not helpful']");
    settle().await;
    assert_eq!(text_of(&root, "#note-1-2"), "Feedback noted");
    assert_eq!(backend.requests().len(), 5);
}
