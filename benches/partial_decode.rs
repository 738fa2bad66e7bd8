use std::hint::black_box;

use apache_avro::{
    from_avro_datum, to_avro_datum,
    types::Value,
    Schema,
};
use avro_partial::{build_partial, parse_strict};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

const SUPER_SCHEMA: &str = r#"{
    "type": "record",
    "name": "Envelope",
    "fields": [
        {"name": "f0", "type": "string"},
        {"name": "header", "type": "long"},
        {"name": "f1", "type": "bytes"}
    ]
}"#;

const NUM_RECORDS: usize = 512;
const STRING_SIZE_LIMIT: usize = 256;
const BYTES_SIZE_LIMIT: usize = 64 * 1024;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_ ";

/// Generate a random value for the handful of schema types the benchmark uses.
fn random_value(schema: &Schema, rng: &mut StdRng) -> Value {
    match schema {
        Schema::Record(record) => Value::Record(
            record
                .fields
                .iter()
                .map(|f| (f.name.clone(), random_value(&f.schema, rng)))
                .collect(),
        ),
        Schema::String => {
            let len = rng.gen_range(0..=STRING_SIZE_LIMIT);
            Value::String(
                (0..len)
                    .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
                    .collect(),
            )
        }
        Schema::Long => Value::Long(rng.gen()),
        Schema::Bytes => {
            let len = rng.gen_range(0..=BYTES_SIZE_LIMIT);
            let mut buf = vec![0u8; len];
            rng.fill_bytes(&mut buf);
            Value::Bytes(buf)
        }
        other => panic!("no generator for schema type {:?}", other),
    }
}

fn decode_benchmark(c: &mut Criterion) {
    let full = parse_strict(SUPER_SCHEMA).unwrap();
    let partial = build_partial(&full, "header").unwrap();

    let mut rng = StdRng::seed_from_u64(42);
    let corpus: Vec<Vec<u8>> = (0..NUM_RECORDS)
        .map(|_| to_avro_datum(&full, random_value(&full, &mut rng)).unwrap())
        .collect();

    let mut group = c.benchmark_group("decode");
    group.bench_function("full", |b| {
        b.iter(|| {
            for datum in &corpus {
                black_box(from_avro_datum(&full, &mut &datum[..], None).unwrap());
            }
        });
    });

    group.bench_function("partial", |b| {
        b.iter(|| {
            for datum in &corpus {
                black_box(from_avro_datum(&partial, &mut &datum[..], None).unwrap());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, decode_benchmark);
criterion_main!(benches);
