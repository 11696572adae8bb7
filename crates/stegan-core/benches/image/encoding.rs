use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stegan_core::{embed, PixelBuffer, PixelLayout};

pub fn image_encoding(c: &mut Criterion) {
    let plain_image = PixelBuffer::from_fn(512, 512, PixelLayout::Rgba, |x, y, c| {
        (x ^ y) as u8 ^ (c as u8 * 85)
    });
    let secret_message = vec![0x5a; 16 * 1024];

    c.bench_function("Image Encoding", |b| {
        b.iter(|| {
            embed(
                black_box(&plain_image),
                "secret.bin",
                &secret_message,
                "SuperSecret42",
                2,
            )
            .expect("Cannot hide secret message")
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
