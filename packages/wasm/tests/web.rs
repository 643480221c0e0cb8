//! Browser tests for the JS-facing handle. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use webcraft_wasm::EditorHandle;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_handle_drag_reorder_in_browser() {
    let mut handle = EditorHandle::new("Landing");
    handle.add_block("hero-modern").unwrap();
    handle.add_block("footer-simple").unwrap();

    handle.drag_start(1).unwrap();
    assert!(handle.drag_over(0));
    assert_eq!(handle.drop_on_target().unwrap(), r#"{"from":1,"to":0}"#);
    assert_eq!(handle.drag_end().unwrap(), "null");

    let html = handle.render_html().unwrap();
    assert!(html.find("webcraft-footer") < html.find("webcraft-hero"));
}

#[wasm_bindgen_test]
fn test_handle_rejects_unknown_template_in_browser() {
    let mut handle = EditorHandle::new("Landing");
    let err = handle.add_block("hero-nope").unwrap_err();
    assert_eq!(err.as_string().as_deref(), Some("Unknown template: hero-nope"));
    assert_eq!(handle.block_count(), 0);
}
