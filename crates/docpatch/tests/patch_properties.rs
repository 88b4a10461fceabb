//! Property tests for the patch primitive.

use docpatch::{get, patch, Document, Segment};
use proptest::prelude::*;
use std::sync::Arc;

fn doc_strategy() -> impl Strategy<Value = Document> {
    let leaf = prop_oneof![
        Just(Document::Null),
        any::<bool>().prop_map(Document::Bool),
        any::<i32>().prop_map(|n| Document::Number(n.into())),
        "[a-z]{0,6}".prop_map(Document::String),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone().prop_map(Arc::new), 0..4)
                .prop_map(Document::Array),
            proptest::collection::vec(("[a-z]{1,3}", inner.prop_map(Arc::new)), 0..4)
                .prop_map(|entries| Document::Object(entries.into_iter().collect())),
        ]
    })
}

fn segment_strategy() -> impl Strategy<Value = Segment> {
    prop_oneof![
        (0usize..4).prop_map(Segment::Index),
        "[a-z]{1,3}".prop_map(Segment::Key),
    ]
}

fn path_strategy() -> impl Strategy<Value = Vec<Segment>> {
    proptest::collection::vec(segment_strategy(), 0..4)
}

proptest! {
    // patch(d, [], v) == v
    #[test]
    fn identity_on_empty_path(d in doc_strategy(), v in doc_strategy()) {
        let root = Arc::new(d);
        let value = Arc::new(v);
        let result = patch(Some(&root), &[], value.clone());
        prop_assert!(Arc::ptr_eq(&result, &value));
    }

    // The input document is unchanged, observed by deep equality.
    #[test]
    fn input_never_mutated(d in doc_strategy(), path in path_strategy(), v in doc_strategy()) {
        let root = Arc::new(d);
        let before = root.to_value();
        let _ = patch(Some(&root), &path, Arc::new(v));
        prop_assert_eq!(root.to_value(), before);
    }

    // Reading back the patched path yields exactly the written value.
    #[test]
    fn targeted_write_reads_back(d in doc_strategy(), path in path_strategy(), v in doc_strategy()) {
        let root = Arc::new(d);
        let value = Arc::new(v);
        let result = patch(Some(&root), &path, value.clone());
        prop_assert_eq!(get(&result, &path), Some(value.as_ref()));
    }

    // Patching the same path with the same value twice equals patching once.
    #[test]
    fn repeated_patch_idempotent(d in doc_strategy(), path in path_strategy(), v in doc_strategy()) {
        let root = Arc::new(d);
        let value = Arc::new(v);
        let once = patch(Some(&root), &path, value.clone());
        let twice = patch(Some(&once), &path, value);
        prop_assert_eq!(once, twice);
    }

    // Same inputs, same output.
    #[test]
    fn patch_is_deterministic(d in doc_strategy(), path in path_strategy(), v in doc_strategy()) {
        let root = Arc::new(d);
        let value = Arc::new(v);
        let a = patch(Some(&root), &path, value.clone());
        let b = patch(Some(&root), &path, value);
        prop_assert_eq!(a, b);
    }

    // Sibling entries at the divergence point are untouched and shared by
    // reference, not copied.
    #[test]
    fn siblings_preserved_and_shared(d in doc_strategy(), path in path_strategy(), v in doc_strategy()) {
        let root = Arc::new(d);
        let result = patch(Some(&root), &path, Arc::new(v));
        match (path.first(), root.as_ref(), result.as_ref()) {
            (Some(Segment::Key(k)), Document::Object(old), Document::Object(new)) => {
                for (k2, child) in old {
                    if k2 != k {
                        prop_assert!(Arc::ptr_eq(&new[k2], child));
                    }
                }
            }
            (Some(Segment::Index(i)), Document::Array(old), Document::Array(new)) => {
                for (j, child) in old.iter().enumerate() {
                    if j != *i {
                        prop_assert!(Arc::ptr_eq(&new[j], child));
                    }
                }
            }
            _ => {}
        }
    }

    // Patching from nothing and patching a Null root agree.
    #[test]
    fn absent_and_null_roots_agree(path in path_strategy(), v in doc_strategy()) {
        let value = Arc::new(v);
        let from_nothing = patch(None, &path, value.clone());
        let null_root = Arc::new(Document::Null);
        let from_null = patch(Some(&null_root), &path, value);
        prop_assert_eq!(from_nothing, from_null);
    }

    // Serialization round-trips through serde_json.
    #[test]
    fn serde_roundtrip(d in doc_strategy()) {
        let text = serde_json::to_string(&d).unwrap();
        let back: Document = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(back, d);
    }
}
