/// Projection tests: placeholders, omission rules, text transforms, ordering
use crate::*;
use resume_model::{
    CollectionKind, CustomSection, CustomSectionField, Document, Education, EducationField,
    EntryField, Experience, Profile, ProfileField,
};

#[cfg(test)]
mod projection_tests {
    use super::*;

    fn texts(nodes: Vec<&VNode>) -> Vec<String> {
        nodes.into_iter().map(VNode::text_content).collect()
    }

    fn section_node(preview: &PreviewDocument, id: SectionId) -> &VNode {
        &preview.section(id).expect("section present").node
    }

    #[test]
    fn test_placeholders_for_empty_name_and_title() {
        let preview = project(&Document::new());
        assert_eq!(texts(preview.header.find_by_tag("h1")), vec!["Your Name"]);
        assert_eq!(
            texts(preview.header.find_by_class("job-title")),
            vec!["Job Title"]
        );

        // Other scalars render empty
        let contact = preview.header.find_by_class("contact-info");
        assert_eq!(contact[0].text_content(), "");
    }

    #[test]
    fn test_profile_values_replace_placeholders() {
        let mut doc = Document::new();
        doc.set_profile_field(ProfileField::FullName, "Alice Doe");
        doc.set_profile_field(ProfileField::JobTitle, "Engineer");
        let preview = project(&doc);
        assert_eq!(texts(preview.header.find_by_tag("h1")), vec!["Alice Doe"]);
        assert_eq!(
            texts(preview.header.find_by_class("job-title")),
            vec!["Engineer"]
        );
    }

    #[test]
    fn test_social_link_protocol_stripped_for_display_only() {
        let mut doc = Document::new();
        doc.set_profile_field(ProfileField::Linkedin, "https://linkedin.com/in/alice");
        let preview = project(&doc);

        let spans = preview.header.find_by_tag("span");
        let link = spans
            .iter()
            .find(|node| node.attr("id") == Some("previewLinkedin"))
            .unwrap();
        assert_eq!(link.text_content(), "linkedin.com/in/alice");
        assert_eq!(doc.profile().linkedin, "https://linkedin.com/in/alice");
    }

    #[test]
    fn test_skills_tags_in_split_order() {
        let mut doc = Document::new();
        doc.set_profile_field(ProfileField::Skills, "Go, , Rust ,Go");
        let preview = project(&doc);
        let skills = section_node(&preview, SectionId::Skills);
        assert_eq!(
            texts(skills.find_by_class("skill-tag")),
            vec!["Go", "Rust", "Go"]
        );
    }

    #[test]
    fn test_skills_section_absent_when_empty() {
        let mut doc = Document::new();
        doc.set_profile_field(ProfileField::Skills, " ,  , ");
        let preview = project(&doc);
        assert!(preview.section(SectionId::Skills).is_none());
        assert!(!preview.section_ids().contains(&SectionId::Skills));
    }

    #[test]
    fn test_experience_description_markup() {
        let doc = Document::from_parts(
            Profile::default(),
            vec![Experience::new(
                1,
                "Dev",
                "Acme",
                "2020",
                "Intro line\n• did X\n• did Y\nOutro",
            )],
            vec![],
            vec![],
        )
        .unwrap();
        let preview = project(&doc);
        let found = section_node(&preview, SectionId::Experience).find_by_class("item-description");
        let description = found[0];

        let blocks: Vec<(&str, String)> = description
            .children()
            .iter()
            .map(|node| (node.tag().unwrap(), node.text_content()))
            .collect();
        assert_eq!(
            blocks,
            vec![
                ("p", "Intro line".to_string()),
                ("ul", "did Xdid Y".to_string()),
                ("p", "Outro".to_string()),
            ]
        );
        assert_eq!(texts(description.find_by_tag("li")), vec!["did X", "did Y"]);
    }

    #[test]
    fn test_experience_title_reads_title_at_company() {
        let preview = project(&Document::seeded());
        let titles = texts(section_node(&preview, SectionId::Experience).find_by_class("item-title"));
        assert_eq!(
            titles,
            vec![
                "Senior Software Engineer at Tech Solutions Inc.",
                "Software Developer at Web Corp",
            ]
        );
    }

    #[test]
    fn test_omission_rule_per_collection() {
        let doc = Document::from_parts(
            Profile::default(),
            vec![
                Experience::new(1, "", "", "2020", "only a description"),
                Experience::new(2, "", "Acme", "", ""),
            ],
            vec![
                Education::new(1, "", "", "2010", "x"),
                Education::new(2, "BSc", "", "", ""),
            ],
            vec![
                CustomSection::new(1, "", "", "fa-solid fa-code"),
                CustomSection::new(2, "", "English", "fa-solid fa-language"),
            ],
        )
        .unwrap();
        let preview = project(&doc);

        let exp = section_node(&preview, SectionId::Experience).find_by_class("resume-item");
        assert_eq!(exp.len(), 1);
        assert_eq!(exp[0].key(), Some("experience-2"));

        let edu = section_node(&preview, SectionId::Education).find_by_class("resume-item");
        assert_eq!(edu.len(), 1);
        assert_eq!(edu[0].key(), Some("education-2"));

        let custom = section_node(&preview, SectionId::CustomSections);
        assert_eq!(custom.children().len(), 1);
        assert_eq!(custom.children()[0].key(), Some("customSections-2"));
    }

    #[test]
    fn test_any_identifying_field_makes_entry_visible() {
        let mut doc = Document::new();
        doc.add_entry(CollectionKind::Education);
        assert!(section_node(&project(&doc), SectionId::Education)
            .find_by_class("resume-item")
            .is_empty());

        doc.update_entry_field(1, EntryField::Education(EducationField::School), "MIT");
        assert_eq!(
            section_node(&project(&doc), SectionId::Education)
                .find_by_class("resume-item")
                .len(),
            1
        );
    }

    #[test]
    fn test_custom_section_renders_raw_items_without_bullets() {
        let mut doc = Document::new();
        doc.add_entry(CollectionKind::CustomSections);
        doc.update_entry_field(
            1,
            EntryField::CustomSections(CustomSectionField::Items),
            "• English\n• French",
        );
        let preview = project(&doc);
        let custom = section_node(&preview, SectionId::CustomSections);

        assert!(custom.find_by_tag("li").is_empty());
        assert_eq!(texts(custom.find_by_tag("h2")), vec!["New Section"]);
        assert_eq!(texts(custom.find_by_tag("p")), vec!["• English\n• French"]);
    }

    #[test]
    fn test_collections_render_in_stored_order() {
        let mut doc = Document::seeded();
        doc.reorder_entry(CollectionKind::Experience, 1, 0).unwrap();

        let preview = project(&doc);
        let items = section_node(&preview, SectionId::Experience).find_by_class("resume-item");
        let keys: Vec<&str> = items.iter().filter_map(|node| node.key()).collect();
        assert_eq!(keys, vec!["experience-2", "experience-1"]);
    }

    #[test]
    fn test_education_layout() {
        let preview = project(&Document::seeded());
        let found = section_node(&preview, SectionId::Education).find_by_class("resume-item");
        let item = found[0];
        assert_eq!(
            texts(item.find_by_class("item-title")),
            vec!["University of Technology"]
        );
        assert_eq!(
            texts(item.find_by_class("item-subtitle")),
            vec!["B.Sc. Computer Science"]
        );
        assert_eq!(texts(item.find_by_class("item-date")), vec!["2013 - 2017"]);
    }

    #[test]
    fn test_default_section_order() {
        let mut doc = Document::new();
        doc.set_profile_field(ProfileField::Skills, "Rust");
        assert_eq!(project(&doc).section_ids(), SectionId::ALL.to_vec());
    }

    #[test]
    fn test_layout_applies_to_fresh_projection() {
        let mut doc = Document::seeded();
        let mut layout = SectionLayout::new();
        layout.arrange(["education", "experience", "summary", "skills", "custom-sections"]);

        let mut preview = project(&doc);
        layout.apply(&mut preview);
        assert_eq!(
            preview.section_ids(),
            vec![
                SectionId::Education,
                SectionId::Experience,
                SectionId::Summary,
                SectionId::CustomSections,
            ]
        );

        doc.set_profile_field(ProfileField::Skills, "Rust");
        let mut preview = project(&doc);
        layout.apply(&mut preview);
        assert_eq!(
            preview.section_ids(),
            vec![
                SectionId::Education,
                SectionId::Experience,
                SectionId::Summary,
                SectionId::Skills,
                SectionId::CustomSections,
            ]
        );
    }

    #[test]
    fn test_page_escapes_user_text() {
        let mut doc = Document::new();
        doc.set_profile_field(ProfileField::Summary, "<script>alert(1)</script>");
        let html = render_page(&project(&doc), &RenderOptions::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_projection_is_pure() {
        let doc = Document::seeded();
        assert_eq!(project(&doc), project(&doc));
    }
}
