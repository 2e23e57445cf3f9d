use criterion::{black_box, criterion_group, criterion_main, Criterion};
use resume_model::{CollectionKind, Document, EntryField, ExperienceField, ProfileField};
use resume_preview::{project, render_page, RenderOptions};

fn large_document() -> Document {
    let mut doc = Document::seeded();
    doc.set_profile_field(ProfileField::Skills, "Rust, Go, TypeScript, SQL, Kubernetes, Terraform");
    for _ in 0..50 {
        if let resume_model::Change::Added { id, .. } = doc.add_entry(CollectionKind::Experience) {
            doc.update_entry_field(id, EntryField::Experience(ExperienceField::Title), "Engineer");
            doc.update_entry_field(
                id,
                EntryField::Experience(ExperienceField::Description),
                "Summary line\n• first bullet\n• second bullet\nClosing line",
            );
        }
    }
    doc
}

fn project_seeded_document(c: &mut Criterion) {
    let doc = Document::seeded();

    c.bench_function("project_seeded_document", |b| b.iter(|| project(black_box(&doc))));
}

fn project_large_document(c: &mut Criterion) {
    let doc = large_document();

    c.bench_function("project_large_document", |b| b.iter(|| project(black_box(&doc))));
}

fn render_large_page(c: &mut Criterion) {
    let preview = project(&large_document());
    let options = RenderOptions::default();

    c.bench_function("render_large_page", |b| {
        b.iter(|| render_page(black_box(&preview), &options))
    });
}

criterion_group!(
    benches,
    project_seeded_document,
    project_large_document,
    render_large_page
);
criterion_main!(benches);
