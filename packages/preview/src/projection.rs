//! # Preview Projection
//!
//! Pure function from a [`Document`] to a [`PreviewDocument`]. The whole tree
//! is rebuilt on every call; there is no incremental diffing.
//!
//! ```text
//! header.resume-header      name / title / contact line (fixed, never moved)
//! section#summary           professional summary
//! section#experience        one .resume-item per identified entry
//! section#education         one .resume-item per identified entry
//! section#skills            one .skill-tag per skill (absent when no skills)
//! div#custom-sections       one section.resume-section per identified entry
//! ```

use crate::layout::SectionId;
use crate::text::{display_link, parse_description, tokenize_skills, DescriptionBlock};
use crate::vdom::{PreviewDocument, PreviewSection, VNode};
use resume_model::{CustomSection, Document, Education, Entry, Experience, Profile};
use tracing::{debug, instrument};

pub const NAME_PLACEHOLDER: &str = "Your Name";
pub const TITLE_PLACEHOLDER: &str = "Job Title";

/// Project a document into its preview
#[instrument(skip_all)]
pub fn project(doc: &Document) -> PreviewDocument {
    let profile = doc.profile();
    let mut sections = vec![
        PreviewSection {
            id: SectionId::Summary,
            node: summary_section(profile),
        },
        PreviewSection {
            id: SectionId::Experience,
            node: entry_section(
                SectionId::Experience,
                "Experience",
                doc.experience().iter(),
                experience_item,
            ),
        },
        PreviewSection {
            id: SectionId::Education,
            node: entry_section(
                SectionId::Education,
                "Education",
                doc.education().iter(),
                education_item,
            ),
        },
    ];

    if let Some(node) = skills_section(&profile.skills) {
        sections.push(PreviewSection {
            id: SectionId::Skills,
            node,
        });
    }

    sections.push(PreviewSection {
        id: SectionId::CustomSections,
        node: VNode::element("div")
            .with_id(SectionId::CustomSections.as_str())
            .with_children(identified(doc.custom_sections().iter(), custom_section_item)),
    });

    debug!(sections = sections.len(), "Projected preview");

    PreviewDocument {
        header: header(profile),
        sections,
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

fn header(profile: &Profile) -> VNode {
    let contact = VNode::element("div")
        .with_class("contact-info")
        .with_child(VNode::text_element("span", &profile.email).with_id("previewEmail"))
        .with_child(VNode::text_element("span", &profile.phone).with_id("previewPhone"))
        .with_child(
            VNode::text_element("span", display_link(&profile.linkedin)).with_id("previewLinkedin"),
        )
        .with_child(VNode::text_element("span", &profile.location).with_id("previewLocation"));

    VNode::element("header")
        .with_class("resume-header")
        .with_child(
            VNode::text_element("h1", or_placeholder(&profile.full_name, NAME_PLACEHOLDER))
                .with_id("previewName"),
        )
        .with_child(
            VNode::text_element("p", or_placeholder(&profile.job_title, TITLE_PLACEHOLDER))
                .with_class("job-title")
                .with_id("previewTitle"),
        )
        .with_child(contact)
}

fn section_shell(id: SectionId, title: &str) -> VNode {
    VNode::element("section")
        .with_class("resume-section")
        .with_id(id.as_str())
        .with_child(VNode::text_element("h2", title).with_class("section-title"))
}

fn summary_section(profile: &Profile) -> VNode {
    section_shell(SectionId::Summary, "Professional Summary")
        .with_child(VNode::text_element("p", &profile.summary).with_id("previewSummary"))
}

/// Entries whose identifying fields are all empty are left out
fn identified<'a, T: Entry + 'a>(
    entries: impl Iterator<Item = &'a T>,
    render: fn(&T) -> VNode,
) -> Vec<VNode> {
    entries
        .filter(|entry| !entry.is_unidentified())
        .map(|entry| render(entry).with_key(format!("{}-{}", T::KIND, entry.id())))
        .collect()
}

fn entry_section<'a, T: Entry + 'a>(
    id: SectionId,
    title: &str,
    entries: impl Iterator<Item = &'a T>,
    render: fn(&T) -> VNode,
) -> VNode {
    section_shell(id, title).with_child(
        VNode::element("div")
            .with_class("section-items")
            .with_children(identified(entries, render)),
    )
}

fn item_header(title: String, date: &str) -> VNode {
    VNode::element("div")
        .with_class("item-header")
        .with_child(VNode::text_element("div", title).with_class("item-title"))
        .with_child(VNode::text_element("div", date).with_class("item-date"))
}

fn experience_item(entry: &Experience) -> VNode {
    let description = parse_description(&entry.description)
        .into_iter()
        .map(|block| match block {
            DescriptionBlock::Paragraph(text) => VNode::text_element("p", text),
            DescriptionBlock::List(items) => VNode::element("ul").with_children(
                items
                    .into_iter()
                    .map(|item| VNode::text_element("li", item))
                    .collect(),
            ),
        })
        .collect();

    VNode::element("div")
        .with_class("resume-item")
        .with_child(item_header(
            format!("{} at {}", entry.title, entry.company),
            &entry.date,
        ))
        .with_child(
            VNode::element("div")
                .with_class("item-description")
                .with_children(description),
        )
}

fn education_item(entry: &Education) -> VNode {
    VNode::element("div")
        .with_class("resume-item")
        .with_child(item_header(entry.school.clone(), &entry.date))
        .with_child(VNode::text_element("div", &entry.degree).with_class("item-subtitle"))
        .with_child(
            VNode::element("div")
                .with_class("item-description")
                .with_child(VNode::text_element("p", &entry.description)),
        )
}

fn custom_section_item(entry: &CustomSection) -> VNode {
    VNode::element("section")
        .with_class("resume-section")
        .with_child(VNode::text_element("h2", &entry.title).with_class("section-title"))
        .with_child(VNode::element("hr"))
        .with_child(
            VNode::element("div")
                .with_class("item-description")
                .with_child(VNode::text_element("p", &entry.items)),
        )
}

/// Skills section, or `None` when there is nothing to show
fn skills_section(skills: &str) -> Option<VNode> {
    let tags = tokenize_skills(skills);
    if tags.is_empty() {
        return None;
    }

    Some(
        section_shell(SectionId::Skills, "Skills").with_child(
            VNode::element("div")
                .with_class("skills-list")
                .with_id("previewSkills")
                .with_children(
                    tags.into_iter()
                        .map(|skill| VNode::text_element("span", skill).with_class("skill-tag"))
                        .collect(),
                ),
        ),
    )
}
