use criterion::{black_box, criterion_group, criterion_main, Criterion};
use weft_compose::signature_of;
use weft_model::{ComponentDescriptor, ComponentId, CompositionSet, Percent};

fn build_set(size: usize) -> CompositionSet {
    let mut set = CompositionSet::new();
    for index in 0..size {
        let id = ComponentId::parse(&format!("yarn-{index:03}")).expect("component id");
        let descriptor = ComponentDescriptor::new(
            id.clone(),
            "yarn".to_string(),
            format!("Yarn {index:03}"),
            "raw".to_string(),
        );
        set.add(&descriptor).expect("add");
        set.set_ratio(&id, Percent::new(100.0 / size as f64).expect("pct"))
            .expect("ratio");
        set.set_loss(&id, Percent::new(2.5).expect("pct")).expect("loss");
    }
    set
}

fn bench_signature_of(c: &mut Criterion) {
    // Real compositions hold a handful of yarns; 64 is a stress size.
    for size in [4usize, 16, 64] {
        let set = build_set(size);
        c.bench_function(&format!("signature_of/{size}"), |b| {
            b.iter(|| signature_of(black_box(&set)))
        });
    }
}

criterion_group!(benches, bench_signature_of);
criterion_main!(benches);
