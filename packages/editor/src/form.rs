//! # Form View
//!
//! Editable representation of the document: static profile inputs and add
//! buttons, plus one regenerable list of cards per collection.
//!
//! Every element gets an [`ElementHandle`] when it is created. A list that
//! is regenerated gets fresh handles, a list that is left alone keeps them,
//! so "was this element destroyed?" is a handle comparison. Each element
//! carries its [`Binding`], registered when the element is built, which
//! names the mutation an event on it issues.

use resume_model::{
    Change, CollectionKind, CustomSection, CustomSectionField, Document, Education,
    EducationField, Entry, EntryField, EntryId, Experience, ExperienceField, Mutation,
    ProfileField, DEFAULT_ICON, ICON_OPTIONS,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Referential identity of a form element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ElementHandle(u64);

impl ElementHandle {
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ElementHandle {
    fn from(raw: u64) -> Self {
        ElementHandle(raw)
    }
}

impl fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out handles; never reuses one
#[derive(Debug, Default)]
pub struct HandleAllocator {
    next: u64,
}

impl HandleAllocator {
    pub fn allocate(&mut self) -> ElementHandle {
        self.next += 1;
        ElementHandle(self.next)
    }
}

/// What an event on an element does to the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Binding {
    ProfileField { field: ProfileField },
    EntryField { id: EntryId, field: EntryField },
    AddEntry { collection: CollectionKind },
    RemoveEntry { collection: CollectionKind, id: EntryId },
}

impl Binding {
    /// Mutation for a change event carrying the control's full value
    pub fn on_input(&self, value: &str) -> Option<Mutation> {
        match self {
            Binding::ProfileField { field } => Some(Mutation::SetProfileField {
                field: *field,
                value: value.to_string(),
            }),
            Binding::EntryField { id, field } => Some(Mutation::UpdateEntryField {
                id: *id,
                field: *field,
                value: value.to_string(),
            }),
            Binding::AddEntry { .. } | Binding::RemoveEntry { .. } => None,
        }
    }

    /// Mutation for a click
    pub fn on_click(&self) -> Option<Mutation> {
        match self {
            Binding::AddEntry { collection } => Some(Mutation::AddEntry {
                collection: *collection,
            }),
            Binding::RemoveEntry { collection, id } => Some(Mutation::RemoveEntry {
                collection: *collection,
                id: *id,
            }),
            Binding::ProfileField { .. } | Binding::EntryField { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Control {
    Text,
    TextArea { rows: u8 },
    /// `(value, label)` pairs
    Select { options: Vec<(String, String)> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormInput {
    pub handle: ElementHandle,
    pub label: String,
    pub placeholder: String,
    pub control: Control,
    /// Live value of the control
    pub value: String,
    pub binding: Binding,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormButton {
    pub handle: ElementHandle,
    pub label: String,
    pub binding: Binding,
}

/// Icon and title shown on a custom-section card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardHeader {
    pub icon: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormCard {
    pub handle: ElementHandle,
    pub entry_id: EntryId,
    pub header: Option<CardHeader>,
    pub inputs: Vec<FormInput>,
    pub remove: FormButton,
    pub expanded: bool,
}

impl FormCard {
    pub fn input(&self, field: EntryField) -> Option<&FormInput> {
        self.inputs
            .iter()
            .find(|input| matches!(input.binding, Binding::EntryField { field: f, .. } if f == field))
    }
}

/// Cards of one collection, rebuilt as a whole
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormList {
    pub collection: CollectionKind,
    /// Bumped on every regeneration
    pub generation: u64,
    cards: Vec<FormCard>,
}

impl FormList {
    pub fn cards(&self) -> &[FormCard] {
        &self.cards
    }

    pub fn card(&self, id: EntryId) -> Option<&FormCard> {
        self.cards.iter().find(|card| card.entry_id == id)
    }

    pub fn entry_ids(&self) -> Vec<EntryId> {
        self.cards.iter().map(|card| card.entry_id).collect()
    }

    /// Every handle owned by the list, cards first then their children
    pub fn handles(&self) -> Vec<ElementHandle> {
        let mut handles = Vec::new();
        for card in &self.cards {
            handles.push(card.handle);
            handles.extend(card.inputs.iter().map(|input| input.handle));
            handles.push(card.remove.handle);
        }
        handles
    }
}

/// Collapsible panels of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Panel {
    Personal,
    Summary,
    Experience,
    Education,
    Skills,
    CustomSections,
}

impl Panel {
    pub const ALL: [Panel; 6] = [
        Panel::Personal,
        Panel::Summary,
        Panel::Experience,
        Panel::Education,
        Panel::Skills,
        Panel::CustomSections,
    ];
}

/// Any element of the form, by reference
#[derive(Debug, Clone, Copy)]
pub enum FormElement<'a> {
    Input(&'a FormInput),
    Button(&'a FormButton),
    Card(&'a FormCard),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    profile: Vec<FormInput>,
    add_buttons: Vec<FormButton>,
    lists: [FormList; 3],
    panels: Vec<(Panel, bool)>,
}

impl FormView {
    /// Build every part of the form from the document
    pub fn build(doc: &Document, handles: &mut HandleAllocator) -> Self {
        let profile = ProfileField::ALL
            .into_iter()
            .map(|field| profile_input(field, doc.profile().get(field), handles))
            .collect();

        let add_buttons = CollectionKind::ALL
            .into_iter()
            .map(|collection| FormButton {
                handle: handles.allocate(),
                label: add_label(collection).to_string(),
                binding: Binding::AddEntry { collection },
            })
            .collect();

        let lists = CollectionKind::ALL.map(|collection| FormList {
            collection,
            generation: 1,
            cards: build_cards(collection, doc, handles),
        });

        Self {
            profile,
            add_buttons,
            lists,
            panels: Panel::ALL.into_iter().map(|panel| (panel, true)).collect(),
        }
    }

    /// Regenerate one collection's list from scratch
    pub fn render_list(
        &mut self,
        collection: CollectionKind,
        doc: &Document,
        handles: &mut HandleAllocator,
    ) {
        let cards = build_cards(collection, doc, handles);
        let list = self.list_mut(collection);
        list.cards = cards;
        list.generation += 1;
    }

    pub fn list(&self, collection: CollectionKind) -> &FormList {
        &self.lists[slot(collection)]
    }

    fn list_mut(&mut self, collection: CollectionKind) -> &mut FormList {
        &mut self.lists[slot(collection)]
    }

    pub fn profile_inputs(&self) -> &[FormInput] {
        &self.profile
    }

    pub fn profile_input(&self, field: ProfileField) -> Option<&FormInput> {
        self.profile
            .iter()
            .find(|input| input.binding == Binding::ProfileField { field })
    }

    pub fn add_button(&self, collection: CollectionKind) -> Option<&FormButton> {
        self.add_buttons
            .iter()
            .find(|button| button.binding == Binding::AddEntry { collection })
    }

    pub fn element(&self, handle: ElementHandle) -> Option<FormElement<'_>> {
        if let Some(input) = self.profile.iter().find(|i| i.handle == handle) {
            return Some(FormElement::Input(input));
        }
        if let Some(button) = self.add_buttons.iter().find(|b| b.handle == handle) {
            return Some(FormElement::Button(button));
        }
        for card in self.lists.iter().flat_map(|list| list.cards.iter()) {
            if card.handle == handle {
                return Some(FormElement::Card(card));
            }
            if card.remove.handle == handle {
                return Some(FormElement::Button(&card.remove));
            }
            if let Some(input) = card.inputs.iter().find(|i| i.handle == handle) {
                return Some(FormElement::Input(input));
            }
        }
        None
    }

    pub fn contains(&self, handle: ElementHandle) -> bool {
        self.element(handle).is_some()
    }

    pub(crate) fn input_mut(&mut self, handle: ElementHandle) -> Option<&mut FormInput> {
        let card_inputs = self
            .lists
            .iter_mut()
            .flat_map(|list| list.cards.iter_mut())
            .flat_map(|card| card.inputs.iter_mut());
        self.profile
            .iter_mut()
            .chain(card_inputs)
            .find(|input| input.handle == handle)
    }

    /// Copy a field's stored value into its bound control, keeping the handle
    pub(crate) fn sync_field(&mut self, change: &Change, doc: &Document) {
        let (binding, value) = match *change {
            Change::ProfileField { field } => (
                Binding::ProfileField { field },
                doc.profile().get(field).to_string(),
            ),
            Change::EntryField { id, field } => match entry_value(doc, id, field) {
                Some(value) => (Binding::EntryField { id, field }, value.to_string()),
                None => return,
            },
            _ => return,
        };

        let card_inputs = self
            .lists
            .iter_mut()
            .flat_map(|list| list.cards.iter_mut())
            .flat_map(|card| card.inputs.iter_mut());
        if let Some(input) = self
            .profile
            .iter_mut()
            .chain(card_inputs)
            .find(|input| input.binding == binding)
        {
            input.value = value;
        }
    }

    /// Mirror a completed drag: the drag surface already moved the card
    pub(crate) fn settle_drag(
        &mut self,
        collection: CollectionKind,
        old_index: usize,
        new_index: usize,
    ) {
        let list = self.list_mut(collection);
        if old_index < list.cards.len() && new_index < list.cards.len() {
            let card = list.cards.remove(old_index);
            list.cards.insert(new_index, card);
        }
    }

    pub fn is_expanded(&self, panel: Panel) -> bool {
        self.panels
            .iter()
            .find(|(p, _)| *p == panel)
            .map_or(true, |(_, expanded)| *expanded)
    }

    /// Flip a panel; returns the new state
    pub fn toggle_panel(&mut self, panel: Panel) -> bool {
        match self.panels.iter_mut().find(|(p, _)| *p == panel) {
            Some((_, expanded)) => {
                *expanded = !*expanded;
                *expanded
            }
            None => {
                self.panels.push((panel, false));
                false
            }
        }
    }

    /// Flip a card; `None` when the handle is not a card
    pub(crate) fn toggle_card(&mut self, handle: ElementHandle) -> Option<bool> {
        let card = self
            .lists
            .iter_mut()
            .flat_map(|list| list.cards.iter_mut())
            .find(|card| card.handle == handle)?;
        card.expanded = !card.expanded;
        Some(card.expanded)
    }
}

fn entry_value(doc: &Document, id: EntryId, field: EntryField) -> Option<&str> {
    match field {
        EntryField::Experience(f) => doc.experience().get(id).map(|entry| entry.get(f)),
        EntryField::Education(f) => doc.education().get(id).map(|entry| entry.get(f)),
        EntryField::CustomSections(f) => doc.custom_sections().get(id).map(|entry| entry.get(f)),
    }
}

fn slot(collection: CollectionKind) -> usize {
    match collection {
        CollectionKind::Experience => 0,
        CollectionKind::Education => 1,
        CollectionKind::CustomSections => 2,
    }
}

fn add_label(collection: CollectionKind) -> &'static str {
    match collection {
        CollectionKind::Experience => "Add Experience",
        CollectionKind::Education => "Add Education",
        CollectionKind::CustomSections => "Add Custom Section",
    }
}

fn profile_input(field: ProfileField, value: &str, handles: &mut HandleAllocator) -> FormInput {
    let control = match field {
        ProfileField::Summary => Control::TextArea { rows: 4 },
        ProfileField::Skills => Control::TextArea { rows: 2 },
        _ => Control::Text,
    };
    FormInput {
        handle: handles.allocate(),
        label: field.label().to_string(),
        placeholder: String::new(),
        control,
        value: value.to_string(),
        binding: Binding::ProfileField { field },
    }
}

fn build_cards(
    collection: CollectionKind,
    doc: &Document,
    handles: &mut HandleAllocator,
) -> Vec<FormCard> {
    match collection {
        CollectionKind::Experience => doc
            .experience()
            .iter()
            .map(|entry| experience_card(entry, handles))
            .collect(),
        CollectionKind::Education => doc
            .education()
            .iter()
            .map(|entry| education_card(entry, handles))
            .collect(),
        CollectionKind::CustomSections => doc
            .custom_sections()
            .iter()
            .map(|entry| custom_section_card(entry, handles))
            .collect(),
    }
}

struct InputSpec<'a> {
    field: EntryField,
    label: &'a str,
    placeholder: &'a str,
    control: Control,
}

fn card<T: Entry>(
    entry: &T,
    header: Option<CardHeader>,
    specs: Vec<InputSpec<'_>>,
    value_of: impl Fn(EntryField) -> String,
    handles: &mut HandleAllocator,
) -> FormCard {
    let handle = handles.allocate();
    let inputs = specs
        .into_iter()
        .map(|spec| FormInput {
            handle: handles.allocate(),
            label: spec.label.to_string(),
            placeholder: spec.placeholder.to_string(),
            control: spec.control,
            value: value_of(spec.field),
            binding: Binding::EntryField {
                id: entry.id(),
                field: spec.field,
            },
        })
        .collect();
    let remove = FormButton {
        handle: handles.allocate(),
        label: "Remove".to_string(),
        binding: Binding::RemoveEntry {
            collection: T::KIND,
            id: entry.id(),
        },
    };

    FormCard {
        handle,
        entry_id: entry.id(),
        header,
        inputs,
        remove,
        expanded: true,
    }
}

fn experience_card(entry: &Experience, handles: &mut HandleAllocator) -> FormCard {
    let spec = |field, placeholder, control| InputSpec {
        field: EntryField::Experience(field),
        label: "",
        placeholder,
        control,
    };
    card(
        entry,
        None,
        vec![
            spec(ExperienceField::Title, "Title", Control::Text),
            spec(ExperienceField::Company, "Company", Control::Text),
            spec(ExperienceField::Date, "Date (e.g. 2020-Present)", Control::Text),
            spec(
                ExperienceField::Description,
                "Description",
                Control::TextArea { rows: 3 },
            ),
        ],
        |field| match field {
            EntryField::Experience(f) => entry.get(f).to_string(),
            _ => String::new(),
        },
        handles,
    )
}

fn education_card(entry: &Education, handles: &mut HandleAllocator) -> FormCard {
    let spec = |field, placeholder, control| InputSpec {
        field: EntryField::Education(field),
        label: "",
        placeholder,
        control,
    };
    card(
        entry,
        None,
        vec![
            spec(EducationField::Degree, "Degree", Control::Text),
            spec(EducationField::School, "School", Control::Text),
            spec(EducationField::Date, "Date", Control::Text),
            spec(
                EducationField::Description,
                "Description (Optional)",
                Control::TextArea { rows: 2 },
            ),
        ],
        |field| match field {
            EntryField::Education(f) => entry.get(f).to_string(),
            _ => String::new(),
        },
        handles,
    )
}

fn custom_section_card(entry: &CustomSection, handles: &mut HandleAllocator) -> FormCard {
    let header = CardHeader {
        icon: if entry.icon.is_empty() {
            DEFAULT_ICON.to_string()
        } else {
            entry.icon.clone()
        },
        title: if entry.title.is_empty() {
            "Custom Section".to_string()
        } else {
            entry.title.clone()
        },
    };
    let icon_options = ICON_OPTIONS
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect();

    card(
        entry,
        Some(header),
        vec![
            InputSpec {
                field: EntryField::CustomSections(CustomSectionField::Title),
                label: "Section Title",
                placeholder: "e.g. Languages",
                control: Control::Text,
            },
            InputSpec {
                field: EntryField::CustomSections(CustomSectionField::Icon),
                label: "Icon",
                placeholder: "",
                control: Control::Select {
                    options: icon_options,
                },
            },
            InputSpec {
                field: EntryField::CustomSections(CustomSectionField::Items),
                label: "Details / Items",
                placeholder: "e.g. English (Fluent), French (Basic)",
                control: Control::TextArea { rows: 2 },
            },
        ],
        |field| match field {
            EntryField::CustomSections(f) => entry.get(f).to_string(),
            _ => String::new(),
        },
        handles,
    )
}
