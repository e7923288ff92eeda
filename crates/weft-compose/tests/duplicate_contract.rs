use weft_compose::{duplicate, DuplicateFidelity, IdPort, SequentialIds, COPY_SUFFIX};
use weft_model::{ComponentDescriptor, ComponentId, ItemId, ItemRecord, Percent, Sourcing};

fn cid(id: &str) -> ComponentId {
    ComponentId::parse(id).expect("component id")
}

fn source_record() -> ItemRecord {
    let mut record = ItemRecord::new_manufactured(
        ItemId::parse("item-0001").expect("item id"),
        "Raw Fabric A",
    )
    .expect("record");
    for (id, ratio) in [("yarn-a", 60.0), ("yarn-c", 40.0)] {
        record
            .composition
            .add(&ComponentDescriptor::new(
                cid(id),
                "yarn".to_string(),
                format!("Yarn {id}"),
                "ecru".to_string(),
            ))
            .expect("add");
        record
            .composition
            .set_ratio(&cid(id), Percent::new(ratio).expect("pct"))
            .expect("ratio");
    }
    record
}

fn ids() -> SequentialIds {
    SequentialIds::new("copy").expect("id prefix")
}

// P6: fresh identity, and the copy owns its composition.
#[test]
fn duplicate_never_reuses_the_source_identity() {
    let source = source_record();
    let copy = duplicate(&source, DuplicateFidelity::Detailed, &ids());
    assert_ne!(copy.id, source.id);
}

#[test]
fn detailed_copy_is_deep() {
    let source = source_record();
    let mut copy = duplicate(&source, DuplicateFidelity::Detailed, &ids());

    copy.composition
        .set_ratio(&cid("yarn-c"), Percent::new(10.0).expect("pct"))
        .expect("ratio");
    copy.composition.remove(&cid("yarn-a")).expect("remove");

    assert_eq!(source.composition.len(), 2);
    assert_eq!(
        source.composition.get(&cid("yarn-c")).expect("entry").ratio.value(),
        40.0
    );
}

// P7: fidelity decides whether the composition carries over.
#[test]
fn fidelity_controls_the_composition() {
    let source = source_record();

    let simple = duplicate(&source, DuplicateFidelity::Simple, &ids());
    assert!(simple.composition.is_empty());

    let detailed = duplicate(&source, DuplicateFidelity::Detailed, &ids());
    assert_eq!(detailed.composition.entries(), source.composition.entries());
}

#[test]
fn copy_suffix_is_always_appended() {
    let source = source_record();
    let copy = duplicate(&source, DuplicateFidelity::Simple, &ids());
    assert_eq!(copy.display_name, format!("Raw Fabric A{COPY_SUFFIX}"));
    assert_eq!(copy.sourcing, Sourcing::Manufactured);
}

#[test]
fn direct_purchase_source_ignores_fidelity() {
    let source = ItemRecord::new_direct_purchase(
        ItemId::parse("item-0009").expect("item id"),
        "Imported Lining",
    )
    .expect("record");

    let allocator = ids();
    let detailed = duplicate(&source, DuplicateFidelity::Detailed, &allocator);
    let simple = duplicate(&source, DuplicateFidelity::Simple, &allocator);

    assert!(detailed.composition.is_empty());
    assert!(simple.composition.is_empty());
    assert!(detailed.is_direct_purchase());
    assert_eq!(detailed.display_name, simple.display_name);
    assert_ne!(detailed.id, simple.id);
}

#[test]
fn fidelity_uses_snake_case_tags() {
    assert_eq!(
        serde_json::to_value(DuplicateFidelity::Detailed).expect("serialize"),
        serde_json::json!("detailed")
    );
    assert_eq!(
        serde_json::from_value::<DuplicateFidelity>(serde_json::json!("simple"))
            .expect("deserialize"),
        DuplicateFidelity::Simple
    );
}

#[test]
fn sequential_ids_are_distinct() {
    let allocator = ids();
    let a = allocator.next_item_id();
    let b = allocator.next_item_id();
    assert_ne!(a, b);
}
