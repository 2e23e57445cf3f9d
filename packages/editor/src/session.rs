//! # Edit Session
//!
//! One user's editing session: the document (sole source of truth), the
//! form view and the preview view derived from it, and the view-only state
//! around them (focus, zoom, panel and card expansion, section layout).
//!
//! Every document change goes through [`EditSession::apply`] or one of the
//! typed wrappers around it. Each change is classified by the document,
//! turned into a [`RenderPlan`], and the plan is executed before the call
//! returns, so the views never lag behind the document.

use crate::coordinator::RenderPlan;
use crate::events::SessionEvent;
use crate::export::Exporter;
use crate::form::{ElementHandle, FormElement, FormView, HandleAllocator, Panel};
use crate::preview_view::{PreviewView, Zoom};
use crate::reorder::DragEvent;
use crate::EditorError;
use resume_model::{Change, CollectionKind, Document, EntryField, EntryId, Mutation, ProfileField};
use tracing::{debug, info, warn};

pub struct EditSession {
    document: Document,
    form: FormView,
    pub(crate) preview: PreviewView,
    handles: HandleAllocator,
    focused: Option<ElementHandle>,
    exporter: Option<Box<dyn Exporter>>,
}

impl EditSession {
    /// Start a session and render both views once
    pub fn new(document: Document) -> Self {
        let mut handles = HandleAllocator::default();
        let form = FormView::build(&document, &mut handles);
        let preview = PreviewView::new(&document);
        info!(
            experience = document.experience().len(),
            education = document.education().len(),
            custom_sections = document.custom_sections().len(),
            "Started edit session"
        );

        Self {
            document,
            form,
            preview,
            handles,
            focused: None,
            exporter: None,
        }
    }

    pub fn with_exporter(mut self, exporter: impl Exporter + 'static) -> Self {
        self.set_exporter(exporter);
        self
    }

    pub fn set_exporter(&mut self, exporter: impl Exporter + 'static) {
        self.exporter = Some(Box::new(exporter));
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn form(&self) -> &FormView {
        &self.form
    }

    pub fn preview(&self) -> &PreviewView {
        &self.preview
    }

    pub fn focused(&self) -> Option<ElementHandle> {
        self.focused
    }

    /// Apply a mutation and bring both views up to date
    pub fn apply(&mut self, mutation: Mutation) -> Result<Change, EditorError> {
        let change = self.document.apply(&mutation).map_err(|err| {
            warn!(%err, ?mutation, "Rejected mutation");
            err
        })?;
        self.commit(&change);
        Ok(change)
    }

    pub fn set_profile_field(&mut self, field: ProfileField, value: impl Into<String>) -> Change {
        let change = self.document.set_profile_field(field, value);
        self.commit(&change);
        change
    }

    pub fn add_entry(&mut self, collection: CollectionKind) -> Change {
        let change = self.document.add_entry(collection);
        self.commit(&change);
        change
    }

    pub fn remove_entry(&mut self, collection: CollectionKind, id: EntryId) -> Change {
        let change = self.document.remove_entry(collection, id);
        self.commit(&change);
        change
    }

    pub fn update_entry_field(
        &mut self,
        id: EntryId,
        field: EntryField,
        value: impl Into<String>,
    ) -> Change {
        let change = self.document.update_entry_field(id, field, value);
        self.commit(&change);
        change
    }

    pub fn reorder_entry(
        &mut self,
        collection: CollectionKind,
        old_index: usize,
        new_index: usize,
    ) -> Result<Change, EditorError> {
        let change = self
            .document
            .reorder_entry(collection, old_index, new_index)
            .map_err(|err| {
                warn!(%err, "Rejected reorder");
                err
            })?;
        self.commit(&change);
        Ok(change)
    }

    /// Execute the render plan for a change the document already took
    fn commit(&mut self, change: &Change) -> RenderPlan {
        let plan = RenderPlan::for_change(change);

        // Reorders only come from a drag, which already moved the card
        if let Change::Reordered {
            collection,
            old_index,
            new_index,
        } = *change
        {
            self.form.settle_drag(collection, old_index, new_index);
        }

        // Field edits keep their controls; only the bound value follows
        self.form.sync_field(change, &self.document);

        if let Some(collection) = plan.form {
            self.form
                .render_list(collection, &self.document, &mut self.handles);
            if let Some(handle) = self.focused {
                if !self.form.contains(handle) {
                    warn!(%handle, %collection, "Focused element was regenerated");
                    self.focused = None;
                }
            }
        }
        if plan.preview {
            self.preview.regenerate(&self.document);
        }

        debug!(%plan, "Rendered");
        plan
    }

    // Form element events

    pub fn focus(&mut self, handle: ElementHandle) -> Result<(), EditorError> {
        if !self.form.contains(handle) {
            return Err(EditorError::UnknownElement(handle));
        }
        self.focused = Some(handle);
        Ok(())
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// A change event on an input: store the control's value and forward it
    pub fn input(
        &mut self,
        handle: ElementHandle,
        value: impl Into<String>,
    ) -> Result<Change, EditorError> {
        match self.form.element(handle) {
            Some(FormElement::Input(_)) => {}
            Some(_) => return Err(EditorError::NotAnInput(handle)),
            None => {
                warn!(%handle, "Input on unknown element");
                return Err(EditorError::UnknownElement(handle));
            }
        }
        let Some(input) = self.form.input_mut(handle) else {
            return Err(EditorError::UnknownElement(handle));
        };
        let value = value.into();
        input.value = value.clone();
        let mutation = input
            .binding
            .on_input(&value)
            .ok_or(EditorError::NotAnInput(handle))?;

        self.focused = Some(handle);
        self.apply(mutation)
    }

    pub fn click(&mut self, handle: ElementHandle) -> Result<Change, EditorError> {
        let mutation = match self.form.element(handle) {
            Some(FormElement::Button(button)) => button.binding.on_click(),
            Some(_) => None,
            None => {
                warn!(%handle, "Click on unknown element");
                return Err(EditorError::UnknownElement(handle));
            }
        }
        .ok_or(EditorError::NotAButton(handle))?;

        self.apply(mutation)
    }

    pub fn toggle_panel(&mut self, panel: Panel) -> bool {
        self.form.toggle_panel(panel)
    }

    /// Collapse or expand a custom-section card by its handle
    pub fn toggle_card(&mut self, handle: ElementHandle) -> Result<bool, EditorError> {
        self.form
            .toggle_card(handle)
            .ok_or(EditorError::UnknownElement(handle))
    }

    // Preview view-only state

    pub fn zoom_in(&mut self) -> Zoom {
        self.zoom(1)
    }

    pub fn zoom_out(&mut self) -> Zoom {
        self.zoom(-1)
    }

    /// Jump to a percentage, clamped like the step buttons
    pub fn set_zoom(&mut self, percent: u16) -> Zoom {
        let zoom = self.preview.zoom_mut();
        *zoom = Zoom::new(percent);
        *zoom
    }

    fn zoom(&mut self, steps: i32) -> Zoom {
        let zoom = self.preview.zoom_mut();
        zoom.adjust(steps);
        *zoom
    }

    /// Hand the current preview to the configured exporter
    pub fn export(&mut self) -> Result<(), EditorError> {
        let exporter = self.exporter.as_mut().ok_or(EditorError::NoExporter)?;
        exporter.export(self.preview.tree())?;
        Ok(())
    }

    /// Route a serialized event; returns what was regenerated
    pub fn dispatch(&mut self, event: SessionEvent) -> Result<RenderPlan, EditorError> {
        match event {
            SessionEvent::Mutate { mutation } => {
                let change = self.apply(mutation)?;
                Ok(RenderPlan::for_change(&change))
            }
            SessionEvent::DragEnd {
                collection,
                old_index,
                new_index,
            } => {
                let change =
                    self.on_drag_end(DragEvent::new(collection, old_index, new_index))?;
                Ok(RenderPlan::for_change(&change))
            }
            SessionEvent::ArrangeSections { order } => {
                self.on_sections_arranged(order.iter().map(String::as_str));
                Ok(RenderPlan::NOTHING)
            }
            SessionEvent::Zoom { steps } => {
                self.zoom(steps);
                Ok(RenderPlan::NOTHING)
            }
            SessionEvent::TogglePanel { panel } => {
                self.toggle_panel(panel);
                Ok(RenderPlan::NOTHING)
            }
            SessionEvent::Export => {
                self.export()?;
                Ok(RenderPlan::NOTHING)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportError;
    use resume_model::{CustomSectionField, ExperienceField};
    use resume_preview::PreviewDocument;
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Warnings emitted while `run` executes
    fn warnings(run: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        tracing::subscriber::with_default(subscriber, run);
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_rejected_reorder_is_warned() {
        let mut session = EditSession::new(Document::seeded());
        let logs = warnings(|| {
            let result = session.on_drag_end(DragEvent::new(CollectionKind::Experience, 0, 7));
            assert!(matches!(result, Err(EditorError::Mutation(_))));
            let result = session.reorder_entry(CollectionKind::Education, 3, 0);
            assert!(matches!(result, Err(EditorError::Mutation(_))));
        });
        assert!(logs.contains("WARN"));
        assert!(logs.contains("Rejected mutation"));
        assert!(logs.contains("Rejected reorder"));
    }

    #[test]
    fn test_dropped_focus_is_warned() {
        let mut session = EditSession::new(Document::new());
        session.add_entry(CollectionKind::CustomSections);
        let title = session.form().list(CollectionKind::CustomSections).cards()[0]
            .input(EntryField::CustomSections(CustomSectionField::Title))
            .unwrap()
            .handle;
        session.focus(title).unwrap();

        let logs = warnings(|| {
            session.add_entry(CollectionKind::CustomSections);
        });
        assert_eq!(session.focused(), None);
        assert!(logs.contains("Focused element was regenerated"));
    }

    #[test]
    fn test_input_edits_document_and_keeps_focus() {
        let mut session = EditSession::new(Document::seeded());
        let handle = session.form().list(CollectionKind::Experience).cards()[0]
            .input(EntryField::Experience(ExperienceField::Company))
            .unwrap()
            .handle;

        session.focus(handle).unwrap();
        let change = session.input(handle, "Globex").unwrap();

        assert_eq!(
            change,
            Change::EntryField {
                id: 1,
                field: EntryField::Experience(ExperienceField::Company)
            }
        );
        assert_eq!(session.focused(), Some(handle));
        assert_eq!(
            session.document().experience().get(1).unwrap().company,
            "Globex"
        );
    }

    #[test]
    fn test_icon_select_drops_focus() {
        let mut session = EditSession::new(Document::new());
        session.add_entry(CollectionKind::CustomSections);
        let select = session.form().list(CollectionKind::CustomSections).cards()[0]
            .input(EntryField::CustomSections(CustomSectionField::Icon))
            .unwrap()
            .handle;

        session.input(select, "fa-solid fa-code").unwrap();
        assert_eq!(session.focused(), None);
        assert!(!session.form().contains(select));
        let card = &session.form().list(CollectionKind::CustomSections).cards()[0];
        assert_eq!(card.header.as_ref().unwrap().icon, "fa-solid fa-code");
    }

    #[test]
    fn test_click_routing() {
        let mut session = EditSession::new(Document::seeded());
        let add = session
            .form()
            .add_button(CollectionKind::Education)
            .unwrap()
            .handle;
        assert_eq!(
            session.click(add).unwrap(),
            Change::Added {
                collection: CollectionKind::Education,
                id: 2
            }
        );

        let input = session.form().profile_input(ProfileField::Email).unwrap().handle;
        assert!(matches!(session.click(input), Err(EditorError::NotAButton(_))));
        assert!(matches!(session.input(add, "x"), Err(EditorError::NotAnInput(_))));
        assert!(matches!(
            session.click(ElementHandle::from(9_999)),
            Err(EditorError::UnknownElement(_))
        ));
    }

    #[test]
    fn test_export_requires_exporter() {
        let mut session = EditSession::new(Document::seeded());
        assert!(matches!(session.export(), Err(EditorError::NoExporter)));

        let exported = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&exported);
        session.set_exporter(move |_: &PreviewDocument| {
            *counter.borrow_mut() += 1;
            Ok::<(), ExportError>(())
        });
        session.dispatch(SessionEvent::Export).unwrap();
        assert_eq!(*exported.borrow(), 1);
    }

    #[test]
    fn test_zoom_is_view_only() {
        let mut session = EditSession::new(Document::seeded());
        let generation = session.preview().generation();
        assert_eq!(session.zoom_in().label(), "110%");
        assert_eq!(session.zoom_out().label(), "100%");
        session.dispatch(SessionEvent::Zoom { steps: -20 }).unwrap();
        assert_eq!(session.preview().zoom().percent(), Zoom::MIN);
        assert_eq!(session.set_zoom(400).percent(), Zoom::MAX);
        session.dispatch(SessionEvent::Zoom { steps: i32::MIN }).unwrap();
        assert_eq!(session.preview().zoom().percent(), Zoom::MIN);
        session.dispatch(SessionEvent::Zoom { steps: i32::MAX }).unwrap();
        assert_eq!(session.preview().zoom().percent(), Zoom::MAX);
        assert_eq!(session.preview().generation(), generation);
    }
}
