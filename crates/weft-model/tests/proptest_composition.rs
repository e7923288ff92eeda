use proptest::prelude::*;
use proptest::test_runner::Config;
use std::collections::BTreeSet;
use weft_model::{ComponentDescriptor, ComponentId, CompositionSet, Percent, RATIO_FULL};

fn descriptor(index: usize) -> ComponentDescriptor {
    let id = format!("yarn-{index:02}");
    ComponentDescriptor::new(
        ComponentId::parse(&id).expect("component id"),
        "yarn".to_string(),
        format!("Yarn {index:02}"),
        "raw".to_string(),
    )
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn component_ids_stay_unique_under_random_ops(
        ops in proptest::collection::vec((0usize..8, 0.0f64..200.0, any::<bool>()), 0..40)
    ) {
        let mut set = CompositionSet::new();
        for (index, ratio, remove) in ops {
            let descriptor = descriptor(index);
            if remove {
                let _ = set.remove(&descriptor.id);
            } else if set.get(&descriptor.id).is_none() {
                set.add(&descriptor).expect("add unique");
                set.set_ratio(&descriptor.id, Percent::new(ratio).expect("pct"))
                    .expect("ratio");
            } else {
                prop_assert!(set.add(&descriptor).is_err());
            }
        }
        let mut seen = BTreeSet::new();
        for entry in set.entries() {
            prop_assert!(seen.insert(entry.component_id.as_str().to_string()));
        }
    }

    #[test]
    fn total_ratio_is_the_sum_of_stored_ratios(
        ratios in proptest::collection::vec(0.0f64..150.0, 0..8)
    ) {
        let mut set = CompositionSet::new();
        for (index, ratio) in ratios.iter().enumerate() {
            let descriptor = descriptor(index);
            set.add(&descriptor).expect("add");
            set.set_ratio(&descriptor.id, Percent::new(*ratio).expect("pct"))
                .expect("ratio");
        }
        let expected: f64 = ratios.iter().sum();
        prop_assert!((set.total_ratio() - expected).abs() < 1e-9);
        prop_assert_eq!(set.has_ratio_overflow(), expected > RATIO_FULL);
    }
}
