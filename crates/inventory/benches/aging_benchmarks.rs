use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use gildedrose_inventory::{Item, advance_one_day};

const NAMES: [&str; 5] = [
    "+5 Dexterity Vest",
    "Aged Brie",
    "Sulfuras, Hand of Ragnaros",
    "Backstage passes to a TAFKAL80ETC concert",
    "Conjured Mana Cake",
];

/// Deterministic mixed batch covering every category.
fn mixed_batch(len: usize) -> Vec<Item> {
    (0..len)
        .map(|i| {
            let name = NAMES[i % NAMES.len()];
            let quality = if name.starts_with("Sulfuras") { 80 } else { (i % 51) as i32 };
            Item::new(name, (i % 30) as i32 - 5, quality)
        })
        .collect()
}

fn bench_advance_one_day(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_one_day");

    for len in [100usize, 10_000, 100_000] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let batch = mixed_batch(len);
            b.iter_batched_ref(
                || batch.clone(),
                |items| advance_one_day(black_box(items.as_mut_slice())),
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_advance_one_day);
criterion_main!(benches);
