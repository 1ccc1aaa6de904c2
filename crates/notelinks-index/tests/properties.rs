//! Property tests for the reference index.

use notelinks_core::Occurrence;
use notelinks_index::ReferenceIndex;
use proptest::prelude::*;

fn note_path() -> impl Strategy<Value = String> {
    "[a-e]\\.md"
}

fn occurrence() -> impl Strategy<Value = Occurrence<u32>> {
    (note_path(), note_path(), "[a-z ]{0,12}", any::<u32>()).prop_map(
        |(source, mentioner, text, node)| Occurrence {
            link_target: source.clone(),
            source_note_path: source,
            mentioning_note_path: mentioner,
            matched_text: text,
            containing_node: node,
            matched_node: node.wrapping_add(1),
        },
    )
}

#[derive(Debug, Clone)]
enum Op {
    Add(Occurrence<u32>),
    Delete(String, String),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => occurrence().prop_map(Op::Add),
        1 => (note_path(), note_path()).prop_map(|(s, m)| Op::Delete(s, m)),
    ]
}

fn apply(index: &mut ReferenceIndex<u32>, op: Op) {
    match op {
        Op::Add(o) => {
            let (source, mentioner) = (o.source_note_path.clone(), o.mentioning_note_path.clone());
            index.add_reference(&source, &mentioner, o);
        }
        Op::Delete(source, mentioner) => {
            index.delete_references(&source, &mentioner);
        }
    }
}

proptest! {
    #[test]
    fn added_occurrence_is_last_and_related(ops in prop::collection::vec(op(), 0..30), o in occurrence()) {
        prop_assume!(o.source_note_path != o.mentioning_note_path);
        let mut index = ReferenceIndex::new();
        for op in ops {
            apply(&mut index, op);
        }

        let (a, b) = (o.source_note_path.clone(), o.mentioning_note_path.clone());
        index.add_reference(&a, &b, o.clone());

        prop_assert_eq!(index.get_references(&a, &b).last(), Some(&o));
        prop_assert!(index.has_relation(&a, &b));
        prop_assert!(index.has_relation(&b, &a));
        prop_assert!(index.note_has_references(&a));
    }

    #[test]
    fn self_references_never_change_the_index(ops in prop::collection::vec(op(), 0..30), path in note_path(), node in any::<u32>()) {
        let mut index = ReferenceIndex::new();
        for op in ops {
            apply(&mut index, op);
        }
        let before = index.stats();
        let related: Vec<bool> = ["a.md", "b.md", "c.md"]
            .iter()
            .map(|other| index.has_relation(&path, other))
            .collect();

        let o = Occurrence {
            source_note_path: path.clone(),
            mentioning_note_path: path.clone(),
            matched_text: "self".to_string(),
            link_target: path.clone(),
            containing_node: node,
            matched_node: node,
        };
        index.add_reference(&path, &path, o);

        prop_assert!(index.get_references(&path, &path).is_empty());
        prop_assert_eq!(index.stats(), before);
        let after: Vec<bool> = ["a.md", "b.md", "c.md"]
            .iter()
            .map(|other| index.has_relation(&path, other))
            .collect();
        prop_assert_eq!(related, after);
    }

    #[test]
    fn delete_empties_pair_and_is_idempotent(ops in prop::collection::vec(op(), 0..30), a in note_path(), b in note_path()) {
        prop_assume!(a != b);
        let mut index = ReferenceIndex::new();
        for op in ops {
            apply(&mut index, op);
        }

        index.delete_references(&a, &b);
        prop_assert!(index.get_references(&a, &b).is_empty());

        let stats = index.stats();
        prop_assert_eq!(index.delete_references(&a, &b), 0);
        prop_assert_eq!(index.stats(), stats);
    }

    #[test]
    fn has_relation_is_reflexive_and_symmetric(ops in prop::collection::vec(op(), 0..30), a in note_path(), b in note_path()) {
        let mut index = ReferenceIndex::new();
        for op in ops {
            apply(&mut index, op);
        }

        prop_assert!(index.has_relation(&a, &a));
        prop_assert_eq!(index.has_relation(&a, &b), index.has_relation(&b, &a));
    }

    #[test]
    fn no_empty_entries_survive(ops in prop::collection::vec(op(), 0..60)) {
        let mut index = ReferenceIndex::new();
        for op in ops {
            apply(&mut index, op);
        }

        let referenced: Vec<String> = index.referenced_notes().map(str::to_string).collect();
        for note in referenced {
            prop_assert!(index.note_has_references(&note));
            for (mentioner, occ) in index.backlinks(&note) {
                prop_assert_ne!(mentioner, note.as_str());
                prop_assert!(!occ.is_empty());
            }
        }
    }

    #[test]
    fn occurrences_keep_insertion_order(nodes in prop::collection::vec(any::<u32>(), 1..10)) {
        let mut index = ReferenceIndex::new();
        for &node in &nodes {
            index.add_reference("project.md", "daily.md", Occurrence {
                source_note_path: "project.md".to_string(),
                mentioning_note_path: "daily.md".to_string(),
                matched_text: "[[project]]".to_string(),
                link_target: "project.md".to_string(),
                containing_node: node,
                matched_node: node,
            });
        }

        let stored: Vec<u32> = index
            .get_references("project.md", "daily.md")
            .iter()
            .map(|o| o.containing_node)
            .collect();
        prop_assert_eq!(stored, nodes);
    }
}

#[test]
fn fresh_index_has_no_references() {
    let index: ReferenceIndex<u32> = ReferenceIndex::new();
    for note in ["a.md", "daily.md", "project.md"] {
        assert!(!index.note_has_references(note));
    }
}
