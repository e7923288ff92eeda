use weft_compose::options_including;
use weft_model::{ComponentDescriptor, ComponentId, CompositionSet};

fn yarn(id: &str, name: &str) -> ComponentDescriptor {
    ComponentDescriptor::new(
        ComponentId::parse(id).expect("component id"),
        "yarn".to_string(),
        name.to_string(),
        "ecru".to_string(),
    )
}

#[test]
fn uncataloged_selection_is_appended_as_an_option() {
    // The persisted record references a yarn the catalog no longer lists.
    let mut set = CompositionSet::new();
    set.add(&yarn("yarn-z", "Discontinued Blend")).expect("add");
    let entry = set.entries().first().expect("entry");

    let options = options_including(vec![yarn("yarn-a", "Cotton 30/1")], Some(entry));
    assert_eq!(options.len(), 2);
    assert_eq!(options[1].id, entry.component_id);
    assert_eq!(options[1].display_name, "Discontinued Blend");
}

#[test]
fn cataloged_selection_is_not_duplicated() {
    let mut set = CompositionSet::new();
    set.add(&yarn("yarn-a", "Cotton 30/1")).expect("add");
    let entry = set.entries().first().expect("entry");

    let options = options_including(vec![yarn("yarn-a", "Cotton 30/1")], Some(entry));
    assert_eq!(options.len(), 1);
}

#[test]
fn no_selection_leaves_the_options_untouched() {
    let options = options_including(vec![yarn("yarn-a", "Cotton 30/1")], None);
    assert_eq!(options.len(), 1);
}
