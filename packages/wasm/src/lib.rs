use resume_editor::{
    DragEvent, EditSession, ElementHandle, Mutation, Panel, RenderOptions, RenderPlan,
    SessionEvent,
};
use resume_model::{CollectionKind, Document, EntryField, ProfileField};
use serde::Serialize;
use std::fmt::Display;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_error(context: &str, err: impl Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, err))
}

fn to_json(value: &impl Serialize) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| js_error("Serialization error", e))
}

fn parse<T: std::str::FromStr>(value: &str) -> Result<T, JsValue>
where
    T::Err: Display,
{
    value.parse().map_err(|e| js_error("Invalid argument", e))
}

/// Editing session driven from JavaScript.
///
/// Every document-changing method returns the render plan as JSON,
/// `{"form": "<collection>" | null, "preview": bool}`, telling the host
/// which DOM regions to rebuild from `formJson()` / `previewHtml()`.
#[wasm_bindgen]
pub struct ResumeEditor {
    session: EditSession,
}

#[wasm_bindgen]
impl ResumeEditor {
    /// Start from the sample document
    #[wasm_bindgen(constructor)]
    pub fn new() -> ResumeEditor {
        ResumeEditor {
            session: EditSession::new(Document::seeded()),
        }
    }

    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(source: &str) -> Result<ResumeEditor, JsValue> {
        let document = Document::from_json(source).map_err(|e| js_error("Document error", e))?;
        Ok(ResumeEditor {
            session: EditSession::new(document),
        })
    }

    #[wasm_bindgen(js_name = setProfileField)]
    pub fn set_profile_field(&mut self, field: &str, value: &str) -> Result<String, JsValue> {
        let field: ProfileField = parse(field)?;
        self.apply(Mutation::SetProfileField {
            field,
            value: value.to_string(),
        })
    }

    #[wasm_bindgen(js_name = addEntry)]
    pub fn add_entry(&mut self, collection: &str) -> Result<String, JsValue> {
        let collection: CollectionKind = parse(collection)?;
        self.apply(Mutation::AddEntry { collection })
    }

    #[wasm_bindgen(js_name = removeEntry)]
    pub fn remove_entry(&mut self, collection: &str, id: u32) -> Result<String, JsValue> {
        let collection: CollectionKind = parse(collection)?;
        self.apply(Mutation::RemoveEntry { collection, id })
    }

    #[wasm_bindgen(js_name = updateEntryField)]
    pub fn update_entry_field(
        &mut self,
        collection: &str,
        id: u32,
        field: &str,
        value: &str,
    ) -> Result<String, JsValue> {
        let collection: CollectionKind = parse(collection)?;
        let field =
            EntryField::parse(collection, field).map_err(|e| js_error("Invalid argument", e))?;
        self.apply(Mutation::UpdateEntryField {
            id,
            field,
            value: value.to_string(),
        })
    }

    #[wasm_bindgen(js_name = reorderEntry)]
    pub fn reorder_entry(
        &mut self,
        collection: &str,
        old_index: usize,
        new_index: usize,
    ) -> Result<String, JsValue> {
        let collection: CollectionKind = parse(collection)?;
        let change = self
            .session
            .on_drag_end(DragEvent::new(collection, old_index, new_index))
            .map_err(|e| js_error("Editor error", e))?;
        to_json(&RenderPlan::for_change(&change))
    }

    /// Change event on a form element, by the handle from `formJson()`
    pub fn input(&mut self, handle: u64, value: &str) -> Result<String, JsValue> {
        let change = self
            .session
            .input(ElementHandle::from(handle), value)
            .map_err(|e| js_error("Editor error", e))?;
        to_json(&RenderPlan::for_change(&change))
    }

    pub fn click(&mut self, handle: u64) -> Result<String, JsValue> {
        let change = self
            .session
            .click(ElementHandle::from(handle))
            .map_err(|e| js_error("Editor error", e))?;
        to_json(&RenderPlan::for_change(&change))
    }

    pub fn focus(&mut self, handle: u64) -> Result<(), JsValue> {
        self.session
            .focus(ElementHandle::from(handle))
            .map_err(|e| js_error("Editor error", e))
    }

    pub fn blur(&mut self) {
        self.session.blur();
    }

    /// Serialized `SessionEvent`
    pub fn dispatch(&mut self, event: &str) -> Result<String, JsValue> {
        let event: SessionEvent =
            serde_json::from_str(event).map_err(|e| js_error("Invalid event", e))?;
        let plan = self
            .session
            .dispatch(event)
            .map_err(|e| js_error("Editor error", e))?;
        to_json(&plan)
    }

    /// Sidebar order as a JSON array of section ids; returns skipped ids
    #[wasm_bindgen(js_name = arrangeSections)]
    pub fn arrange_sections(&mut self, order: &str) -> Result<String, JsValue> {
        let order: Vec<String> =
            serde_json::from_str(order).map_err(|e| js_error("Invalid section order", e))?;
        let skipped = self
            .session
            .on_sections_arranged(order.iter().map(String::as_str));
        to_json(&skipped)
    }

    #[wasm_bindgen(js_name = togglePanel)]
    pub fn toggle_panel(&mut self, panel: &str) -> Result<bool, JsValue> {
        let panel: Panel = serde_json::from_value(serde_json::Value::String(panel.to_string()))
            .map_err(|e| js_error("Invalid panel", e))?;
        Ok(self.session.toggle_panel(panel))
    }

    #[wasm_bindgen(js_name = zoomIn)]
    pub fn zoom_in(&mut self) -> String {
        self.session.zoom_in().label()
    }

    #[wasm_bindgen(js_name = zoomOut)]
    pub fn zoom_out(&mut self) -> String {
        self.session.zoom_out().label()
    }

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f32 {
        self.session.preview().zoom().scale()
    }

    #[wasm_bindgen(js_name = previewHtml)]
    pub fn preview_html(&self, pretty: bool) -> String {
        let options = RenderOptions {
            pretty,
            ..RenderOptions::default()
        };
        self.session.preview().html(&options)
    }

    #[wasm_bindgen(js_name = formJson)]
    pub fn form_json(&self) -> Result<String, JsValue> {
        to_json(self.session.form())
    }

    #[wasm_bindgen(js_name = documentJson)]
    pub fn document_json(&self) -> Result<String, JsValue> {
        to_json(self.session.document())
    }
}

impl ResumeEditor {
    fn apply(&mut self, mutation: Mutation) -> Result<String, JsValue> {
        let change = self
            .session
            .apply(mutation)
            .map_err(|e| js_error("Editor error", e))?;
        to_json(&RenderPlan::for_change(&change))
    }
}

impl Default for ResumeEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutations_return_render_plans() {
        let mut editor = ResumeEditor::new();

        let plan = editor.set_profile_field("fullName", "Ada").unwrap();
        assert_eq!(plan, r#"{"form":null,"preview":true}"#);

        let plan = editor.add_entry("customSections").unwrap();
        assert_eq!(plan, r#"{"form":"customSections","preview":true}"#);

        let plan = editor
            .update_entry_field("customSections", 1, "icon", "fa-solid fa-code")
            .unwrap();
        assert_eq!(plan, r#"{"form":"customSections","preview":true}"#);

        let plan = editor.remove_entry("education", 99).unwrap();
        assert_eq!(plan, r#"{"form":null,"preview":false}"#);

        let plan = editor.reorder_entry("experience", 0, 1).unwrap();
        assert_eq!(plan, r#"{"form":null,"preview":true}"#);

        assert!(editor.preview_html(false).contains("Ada"));
    }

    #[test]
    fn test_dispatch_and_view_state() {
        let mut editor = ResumeEditor::new();
        let plan = editor
            .dispatch(r#"{"event": "mutate", "mutation": {"op": "addEntry", "collection": "education"}}"#)
            .unwrap();
        assert_eq!(plan, r#"{"form":"education","preview":true}"#);

        assert_eq!(editor.zoom_in(), "110%");
        assert_eq!(editor.zoom_out(), "100%");
        assert_eq!(editor.arrange_sections(r#"["skills", "x"]"#).unwrap(), r#"["x"]"#);
        assert!(!editor.toggle_panel("personal").unwrap());

        let form: serde_json::Value = serde_json::from_str(&editor.form_json().unwrap()).unwrap();
        assert_eq!(form["lists"][1]["collection"], "education");
    }
}
