use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgb, RgbImage};
use seamcarve::{SeamCarver, SeamFinder};
use std::hint::black_box;

fn sample(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([(x * 7 % 256) as u8, (y * 13 % 256) as u8, ((x ^ y) % 256) as u8])
    })
}

fn construction(c: &mut Criterion) {
    let image = sample(320, 240);
    c.bench_function("energy map 320x240", |b| {
        b.iter(|| SeamCarver::new(black_box(&image)).unwrap())
    });
}

fn vertical_cycles(c: &mut Criterion) {
    let image = sample(320, 240);
    c.bench_function("ten vertical seams 320x240", |b| {
        b.iter(|| {
            let mut carver = SeamCarver::new(&image).unwrap();
            for _ in 0..10 {
                let seam = carver.find_vertical_seam();
                carver.remove_vertical_seam(black_box(&seam)).unwrap();
            }
            carver
        })
    });
}

fn alternating_cycles(c: &mut Criterion) {
    let image = sample(320, 240);
    c.bench_function("five seams each way 320x240", |b| {
        b.iter(|| {
            let mut carver = SeamCarver::new(&image).unwrap();
            for _ in 0..5 {
                let seam = carver.find_vertical_seam();
                carver.remove_vertical_seam(&seam).unwrap();
                let seam = carver.find_horizontal_seam();
                carver.remove_horizontal_seam(&seam).unwrap();
            }
            carver
        })
    });
}

criterion_group!(benches, construction, vertical_cycles, alternating_cycles);
criterion_main!(benches);
