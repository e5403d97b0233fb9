use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use receipt_token_core::{decode, encode, share_url, ReceiptData};

fn receipts() -> Vec<(&'static str, ReceiptData)> {
    vec![
        ("blank", ReceiptData::default()),
        ("sample", ReceiptData::sample()),
        (
            "long_text",
            ReceiptData {
                company_name: "株式会社ランディット".repeat(20),
                parking_lot_name: "綾瀬第2駐車場".repeat(20),
                recipient_name: "山田 太郎 様".repeat(20),
                ..ReceiptData::sample()
            },
        ),
    ]
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for (name, receipt) in receipts() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &receipt, |b, r| {
            b.iter(|| encode(black_box(r)).unwrap());
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for (name, receipt) in receipts() {
        let token = encode(&receipt).unwrap();

        group.throughput(Throughput::Bytes(token.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &token, |b, t| {
            b.iter(|| decode(black_box(t)).unwrap());
        });
    }

    group.finish();
}

fn bench_share_url(c: &mut Criterion) {
    let receipt = ReceiptData::sample();

    c.bench_function("share_url", |b| {
        b.iter(|| share_url(black_box("https://receipts.example.com/?lang=ja"), &receipt).unwrap());
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_share_url);
criterion_main!(benches);
