use criterion::{criterion_group, criterion_main, Criterion};
use huffstego_core::{DistortionMetrics, EncodedMessage, LsbCodec};
use image::{Rgb, RgbImage};

pub fn image_embedding(c: &mut Criterion) {
    let carrier = RgbImage::from_fn(512, 512, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8]));
    let message = EncodedMessage::from_text(&"Hello World! ".repeat(1000))
        .expect("Cannot encode secret message");

    c.bench_function("Image Embedding", |b| {
        let mut image = carrier.clone();
        b.iter(|| LsbCodec::embed(&mut image, message.bits()).expect("Cannot embed bits"))
    });

    let mut stego = carrier.clone();
    LsbCodec::embed(&mut stego, message.bits()).expect("Cannot embed bits");
    c.bench_function("Image Extraction", |b| {
        b.iter(|| LsbCodec::extract(&stego, message.bits().len()))
    });

    c.bench_function("Distortion Metrics", |b| {
        b.iter(|| DistortionMetrics::measure(&carrier, &stego).expect("Same dimensions"))
    });
}

criterion_group!(benches, image_embedding);
criterion_main!(benches);
