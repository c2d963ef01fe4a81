use criterion::{black_box, criterion_group, criterion_main, Criterion};
use graphseam::{Picture, SeamCarver, SeamFinder};
use itertools::iproduct;

fn picture(width: u32, height: u32) -> Picture {
    let data: Vec<u8> = iproduct!(0..height, 0..width)
        .flat_map(|(y, x)| vec![(x * 7 + y) as u8, (x ^ y) as u8, (x * y) as u8])
        .collect();
    Picture::from_raw_rgb(width, height, &data).unwrap()
}

fn seam_search(c: &mut Criterion) {
    let carver = SeamCarver::new(&picture(128, 96));
    c.bench_function("find vertical seam 128x96", |b| {
        b.iter(|| black_box(carver.find_vertical_seam().unwrap()))
    });
    c.bench_function("find horizontal seam 128x96", |b| {
        b.iter(|| black_box(carver.find_horizontal_seam().unwrap()))
    });
}

fn carve(c: &mut Criterion) {
    let source = picture(64, 48);
    c.bench_function("carve 64x48 to 56x44", |b| {
        b.iter(|| {
            let mut carver = SeamCarver::new(&source);
            carver.carve(56, 44).unwrap();
            black_box(carver.into_picture())
        })
    });
}

criterion_group!(benches, seam_search, carve);
criterion_main!(benches);
