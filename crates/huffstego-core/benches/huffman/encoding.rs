use criterion::{criterion_group, criterion_main, Criterion};
use huffstego_core::huffman::HuffmanTree;

const TEXT: &str = "It was the best of times, it was the worst of times, it was the age of \
wisdom, it was the age of foolishness, it was the epoch of belief, it was the epoch of \
incredulity, it was the season of Light, it was the season of Darkness.";

pub fn huffman_encoding(c: &mut Criterion) {
    let text = TEXT.repeat(50);

    c.bench_function("Huffman Tree", |b| {
        b.iter(|| HuffmanTree::from_text(&text))
    });

    let tree = HuffmanTree::from_text(&text);
    let codes = tree.code_table();
    c.bench_function("Huffman Encoding", |b| {
        b.iter(|| codes.encode(&text).expect("Cannot encode text"))
    });

    let bits = codes.encode(&text).expect("Cannot encode text");
    c.bench_function("Huffman Decoding", |b| {
        b.iter(|| tree.decode(&bits).expect("Cannot decode bits"))
    });
}

criterion_group!(benches, huffman_encoding);
criterion_main!(benches);
