//! Browser bindings for the block editor. The host page drives the canvas
//! (clicks, drag events, sidebar) and keeps one [`EditorHandle`] per open
//! document. Persistence stays on the host side: `toJson` hands over the
//! blocks for saving, `EditorHandle.fromJson` restores them.

mod editor;

use wasm_bindgen::prelude::*;
use webcraft_model::BlockId;

pub use editor::{list_templates, BindingError, DocumentJson, Editor};

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_err(err: BindingError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Built-in templates for the sidebar as JSON
#[wasm_bindgen(js_name = listTemplates)]
pub fn list_templates_js(category: &str, search: &str) -> Result<String, JsValue> {
    list_templates(category, search).map_err(js_err)
}

#[wasm_bindgen]
pub struct EditorHandle {
    inner: Editor,
}

#[wasm_bindgen]
impl EditorHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(name: &str) -> EditorHandle {
        EditorHandle {
            inner: Editor::new(name),
        }
    }

    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<EditorHandle, JsValue> {
        Editor::from_json(json)
            .map(|inner| EditorHandle { inner })
            .map_err(js_err)
    }

    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.inner.to_json().map_err(js_err)
    }

    /// `true` makes an un-dropped drag end commit the hovered move
    #[wasm_bindgen(js_name = setCommitOnDragEnd)]
    pub fn set_commit_on_drag_end(&mut self, commit: bool) {
        self.inner.set_drag_end_policy(commit);
    }

    #[wasm_bindgen(getter, js_name = blockCount)]
    pub fn block_count(&self) -> usize {
        self.inner.session().document.len()
    }

    #[wasm_bindgen(getter, js_name = isDirty)]
    pub fn is_dirty(&self) -> bool {
        self.inner.session().document.is_dirty()
    }

    pub fn blocks(&self) -> Result<String, JsValue> {
        self.inner.blocks_json().map_err(js_err)
    }

    #[wasm_bindgen(js_name = addBlock)]
    pub fn add_block(&mut self, template_id: &str) -> Result<String, JsValue> {
        self.inner.add_block(template_id).map_err(js_err)
    }

    /// Apply a `{ "type": ... }` mutation
    pub fn apply(&mut self, mutation: &str) -> Result<bool, JsValue> {
        self.inner.apply_json(mutation).map_err(js_err)
    }

    #[wasm_bindgen(js_name = updateBlock)]
    pub fn update_block(&mut self, id: &str, update: &str) -> Result<bool, JsValue> {
        self.inner.update_block(id, update).map_err(js_err)
    }

    #[wasm_bindgen(js_name = deleteBlock)]
    pub fn delete_block(&mut self, id: &str) -> Result<bool, JsValue> {
        self.inner
            .session_mut()
            .delete_block(&BlockId::from(id))
            .map(|result| result.changed)
            .map_err(|e| js_err(e.into()))
    }

    #[wasm_bindgen(js_name = moveBlock)]
    pub fn move_block(&mut self, from: usize, to: usize) -> Result<bool, JsValue> {
        self.inner
            .session_mut()
            .move_block(from, to)
            .map(|result| result.changed)
            .map_err(|e| js_err(e.into()))
    }

    #[wasm_bindgen(js_name = moveUp)]
    pub fn move_up(&mut self, id: &str) -> Result<bool, JsValue> {
        self.inner
            .session_mut()
            .move_up(&BlockId::from(id))
            .map(|moved| moved.is_some())
            .map_err(|e| js_err(e.into()))
    }

    #[wasm_bindgen(js_name = moveDown)]
    pub fn move_down(&mut self, id: &str) -> Result<bool, JsValue> {
        self.inner
            .session_mut()
            .move_down(&BlockId::from(id))
            .map(|moved| moved.is_some())
            .map_err(|e| js_err(e.into()))
    }

    pub fn select(&mut self, id: &str) {
        self.inner.session_mut().select(&BlockId::from(id));
    }

    #[wasm_bindgen(js_name = clearSelection)]
    pub fn clear_selection(&mut self) {
        self.inner.session_mut().clear_selection();
    }

    #[wasm_bindgen(getter, js_name = selectedId)]
    pub fn selected_id(&self) -> Option<String> {
        self.inner
            .session()
            .selected_id()
            .map(|id| id.as_str().to_string())
    }

    /// The selected block as JSON, or `null`
    #[wasm_bindgen(js_name = selectedBlock)]
    pub fn selected_block(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.session().selected_block())
            .map_err(|e| js_err(e.into()))
    }

    #[wasm_bindgen(js_name = openStylePanel)]
    pub fn open_style_panel(&mut self) -> bool {
        self.inner.session_mut().open_style_panel()
    }

    #[wasm_bindgen(js_name = closeStylePanel)]
    pub fn close_style_panel(&mut self) {
        self.inner.session_mut().close_style_panel();
    }

    #[wasm_bindgen(getter, js_name = isStylePanelOpen)]
    pub fn is_style_panel_open(&self) -> bool {
        self.inner.session().is_style_panel_open()
    }

    #[wasm_bindgen(js_name = dragStart)]
    pub fn drag_start(&mut self, index: usize) -> Result<(), JsValue> {
        self.inner
            .session_mut()
            .drag_start(index)
            .map_err(|e| js_err(e.into()))
    }

    /// Returns `true` when the hovered index changed and the canvas needs a repaint
    #[wasm_bindgen(js_name = dragOver)]
    pub fn drag_over(&mut self, index: usize) -> bool {
        self.inner.session_mut().drag_over(index)
    }

    /// The applied move as `{from, to}`, or `null`
    #[wasm_bindgen(js_name = drop)]
    pub fn drop_on_target(&mut self) -> Result<String, JsValue> {
        self.inner.drop_json().map_err(js_err)
    }

    #[wasm_bindgen(js_name = dragEnd)]
    pub fn drag_end(&mut self) -> Result<String, JsValue> {
        self.inner.drag_end_json().map_err(js_err)
    }

    /// Pointer left the canvas or the gesture was aborted with Escape
    #[wasm_bindgen(js_name = cancelDrag)]
    pub fn cancel_drag(&mut self) {
        self.inner.session_mut().cancel_drag();
    }

    #[wasm_bindgen(js_name = dragState)]
    pub fn drag_state(&self) -> Result<String, JsValue> {
        self.inner.drag_state_json().map_err(js_err)
    }

    #[wasm_bindgen(js_name = dragIndicator)]
    pub fn drag_indicator(&self, index: usize) -> Result<String, JsValue> {
        self.inner.drag_indicator_json(index).map_err(js_err)
    }

    #[wasm_bindgen(js_name = renderHtml)]
    pub fn render_html(&self) -> Result<String, JsValue> {
        self.inner.render_html().map_err(js_err)
    }
}
