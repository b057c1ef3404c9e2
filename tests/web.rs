//! Browser tests. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use notfound_web::{mount, run, run_with_config, Config, Error, NotFound};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn pathname() -> String {
    document().location().unwrap().pathname().unwrap()
}

fn history() -> web_sys::History {
    web_sys::window().unwrap().history().unwrap()
}

fn navigate(path: &str) {
    history()
        .push_state_with_url(&JsValue::NULL, "", Some(path))
        .unwrap();
}

/// Creates a new empty element attached to the document body.
fn host() -> Element {
    let document = document();
    let element = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&element).unwrap();
    element
}

/// Lets the renderer settle.
async fn tick() {
    TimeoutFuture::new(10).await;
}

/// `history.back()` fires `popstate` asynchronously, so wait a bit longer.
async fn settle_navigation() {
    TimeoutFuture::new(100).await;
}

fn texts(root: &Element, tag: &str) -> Vec<String> {
    let collection = root.get_elements_by_tag_name(tag);

    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .map(|e| e.text_content().unwrap_or_default())
        .collect()
}

fn assert_not_found(root: &Element) {
    assert_eq!(texts(root, "h1"), vec!["404".to_string()]);
    assert_eq!(texts(root, "p"), vec!["Página não encontrada".to_string()]);
    assert_eq!(texts(root, "a").len(), 1);

    let link = root.get_elements_by_tag_name("a").item(0).unwrap();
    assert_eq!(link.get_attribute("href").as_deref(), Some("/"));
    assert_eq!(link.text_content().unwrap().trim(), "Voltar ao início");

    let container = root.first_element_child().unwrap();
    assert_eq!(container.tag_name().to_lowercase(), "div");
    let class = container.get_attribute("class").unwrap();
    for name in ["min-h-screen", "flex", "items-center", "justify-center"] {
        assert!(class.split_whitespace().any(|c| c == name), "missing {}", name);
    }
}

#[wasm_bindgen_test]
async fn test_not_found_renders() {
    let root = host();
    yew::start_app_in_element::<NotFound>(root.clone());
    tick().await;

    assert_not_found(&root);
    root.remove();
}

#[wasm_bindgen_test]
async fn test_not_found_render_is_idempotent() {
    let first = host();
    let second = host();

    yew::start_app_in_element::<NotFound>(first.clone());
    yew::start_app_in_element::<NotFound>(second.clone());
    tick().await;

    assert_not_found(&first);
    assert_eq!(first.inner_html(), second.inner_html());

    first.remove();
    second.remove();
}

#[wasm_bindgen_test]
async fn test_unknown_path_shows_not_found_and_links_home() {
    navigate("/this-path-does-not-exist");

    let root = host();
    mount(root.clone());
    tick().await;

    assert_not_found(&root);

    let link: HtmlElement = root
        .get_elements_by_tag_name("a")
        .item(0)
        .unwrap()
        .dyn_into()
        .unwrap();
    link.click();
    tick().await;

    assert_eq!(pathname(), "/");
    assert!(texts(&root, "p").is_empty());
    assert_eq!(texts(&root, "h1"), vec!["Início".to_string()]);

    history().back().unwrap();
    settle_navigation().await;

    assert_eq!(pathname(), "/this-path-does-not-exist");
    assert_not_found(&root);

    history().forward().unwrap();
    settle_navigation().await;

    assert_eq!(pathname(), "/");
    assert_eq!(texts(&root, "h1"), vec!["Início".to_string()]);

    root.remove();
}

#[wasm_bindgen_test]
fn test_run_with_missing_mountpoint() {
    let config = Config {
        mountpoint: "no-such-element".into(),
        ..Config::default()
    };

    match run_with_config(config) {
        Err(Error::MountpointNotFound(id)) => assert_eq!(id, "no-such-element"),
        res => panic!("expected MountpointNotFound, got {:?}", res),
    }
}

#[wasm_bindgen_test]
async fn test_run_with_invalid_config_does_not_mount() {
    let root = host();
    root.set_id("app");

    run(JsValue::from(42));
    tick().await;

    assert_eq!(root.child_element_count(), 0);
    assert!(root.inner_html().is_empty());

    root.remove();
}

#[wasm_bindgen_test]
fn test_config_from_js() {
    assert_eq!(Config::from_js(JsValue::UNDEFINED).unwrap(), Config::default());
    assert_eq!(Config::from_js(JsValue::NULL).unwrap(), Config::default());

    assert!(matches!(
        Config::from_js(JsValue::from(42)),
        Err(Error::Config(_))
    ));
}

#[wasm_bindgen_test]
async fn test_index_path_shows_home() {
    navigate("/");

    let root = host();
    mount(root.clone());
    tick().await;

    assert_eq!(texts(&root, "h1"), vec!["Início".to_string()]);
    assert_eq!(texts(&root, "a").len(), 0);

    root.remove();
}
