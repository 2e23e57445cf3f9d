//! Property-style tests over long, deterministic mutation sequences
//!
//! Sequences come from a small LCG so every run exercises the same cases.

use resume_model::{
    Change, CollectionKind, Document, EntryField, EntryId, ExperienceField, Mutation,
    MutationError,
};

struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next() % n as u64) as usize
    }
}

#[test]
fn test_ids_unique_and_increasing_in_assignment_order() {
    for seed in 0..20 {
        let mut rng = Lcg(seed);
        let mut doc = Document::new();
        let mut assigned: Vec<EntryId> = Vec::new();

        for _ in 0..200 {
            let ids = doc.ids(CollectionKind::Education);
            if ids.is_empty() || rng.below(3) > 0 {
                match doc.add_entry(CollectionKind::Education) {
                    Change::Added { id, .. } => {
                        let expected = ids.iter().max().map_or(1, |m| m + 1);
                        assert_eq!(id, expected);
                        assigned.push(id);
                    }
                    other => panic!("Expected Added, got {:?}", other),
                }
            } else {
                let victim = ids[rng.below(ids.len())];
                doc.remove_entry(CollectionKind::Education, victim);
            }

            let mut ids = doc.ids(CollectionKind::Education);
            let len = ids.len();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), len, "duplicate id after seed {}", seed);
        }

        // Assignment order never goes backwards while the max survives
        let live = doc.ids(CollectionKind::Education);
        let mut sorted_live = live.clone();
        sorted_live.sort_unstable();
        assert_eq!(live, sorted_live, "appends keep ids ascending in stored order");
        assert!(!assigned.is_empty());
    }
}

#[test]
fn test_removed_id_not_reused_while_larger_id_exists() {
    let mut doc = Document::seeded();
    assert_eq!(doc.ids(CollectionKind::Experience), vec![1, 2]);

    doc.remove_entry(CollectionKind::Experience, 1);
    let change = doc.add_entry(CollectionKind::Experience);

    assert_eq!(
        change,
        Change::Added {
            collection: CollectionKind::Experience,
            id: 3
        }
    );
}

#[test]
fn test_add_after_emptying_starts_at_one() {
    let mut doc = Document::seeded();
    doc.remove_entry(CollectionKind::Education, 1);
    assert_eq!(
        doc.add_entry(CollectionKind::Education),
        Change::Added {
            collection: CollectionKind::Education,
            id: 1
        }
    );
}

#[test]
fn test_reorder_round_trip_restores_order() {
    let mut doc = Document::new();
    for _ in 0..6 {
        doc.add_entry(CollectionKind::CustomSections);
    }
    let original = doc.ids(CollectionKind::CustomSections);

    for i in 0..6 {
        for j in 0..6 {
            if i == j {
                continue;
            }
            doc.reorder_entry(CollectionKind::CustomSections, i, j).unwrap();
            assert_ne!(doc.ids(CollectionKind::CustomSections), original);
            doc.reorder_entry(CollectionKind::CustomSections, j, i).unwrap();
            assert_eq!(doc.ids(CollectionKind::CustomSections), original);
        }
    }
}

#[test]
fn test_field_edits_never_change_structure() {
    let mut rng = Lcg(7);
    let mut doc = Document::seeded();
    for _ in 0..3 {
        doc.add_entry(CollectionKind::Experience);
    }
    let order = doc.ids(CollectionKind::Experience);
    let fields = [
        ExperienceField::Title,
        ExperienceField::Company,
        ExperienceField::Date,
        ExperienceField::Description,
    ];

    for step in 0..100 {
        let id = order[rng.below(order.len())];
        let field = fields[rng.below(fields.len())];
        let mutation = Mutation::UpdateEntryField {
            id,
            field: EntryField::Experience(field),
            value: format!("value {}", step),
        };
        let change = doc.apply(&mutation).unwrap();
        assert!(!change.is_structural());
        assert_eq!(doc.ids(CollectionKind::Experience), order);
    }
}

#[test]
fn test_out_of_range_reorder_rejected_for_every_collection() {
    let mut doc = Document::seeded();
    for collection in CollectionKind::ALL {
        let len = doc.len(collection);
        let before = doc.ids(collection);
        let result = doc.reorder_entry(collection, 0, len);
        assert_eq!(
            result,
            Err(MutationError::IndexOutOfRange {
                collection,
                index: if len == 0 { 0 } else { len },
                len,
            })
        );
        assert_eq!(doc.ids(collection), before);
    }
}
