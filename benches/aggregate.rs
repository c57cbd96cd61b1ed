use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pcomms::aggregate::FlowTable;
use pcomms::models::{PacketObservation, SortKey};

fn observations() -> Vec<PacketObservation> {
    (0..10_000u64)
        .map(|i| PacketObservation {
            source: format!("10.0.{}.{}", i % 16, i % 251),
            destination: "192.168.0.1".to_string(),
            frame_len: 64 + i % 1400,
            protocol: None,
        })
        .collect()
}

fn bench_observe(c: &mut Criterion) {
    let packets = observations();
    c.bench_function("observe_10k_packets", |b| {
        b.iter(|| {
            let mut table = FlowTable::new();
            for obs in &packets {
                table.observe(black_box(obs.clone()));
            }
            table.into_sorted(SortKey::Frames)
        })
    });
}

criterion_group!(benches, bench_observe);
criterion_main!(benches);
