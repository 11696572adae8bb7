use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stegan_core::{embed, extract, PixelBuffer, PixelLayout};

pub fn image_decoding(c: &mut Criterion) {
    let plain_image = PixelBuffer::from_fn(512, 512, PixelLayout::Rgba, |x, y, c| {
        (x ^ y) as u8 ^ (c as u8 * 85)
    });
    let secret_image = embed(&plain_image, "secret.bin", &[0x5a; 16 * 1024], "Secret42", 2)
        .expect("Cannot hide secret message");

    c.bench_function("Image Decoding", |b| {
        b.iter(|| {
            extract(black_box(&secret_image), "Secret42", 2)
                .expect("Cannot unveil secret message")
                .expect("No secret message found")
        })
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
