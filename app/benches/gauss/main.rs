use criterion::{criterion_group, criterion_main, Criterion};
use gaussblur::{
    gaussian_blur, gaussian_blur_f32, AlphaMode, BitDepth, BlurImage, BlurImageMut, EdgeMode,
    GaussianBlurFilter, ThreadingPolicy,
};

const WIDTH: u32 = 1024;
const HEIGHT: u32 = 768;

fn make_source(depth: BitDepth) -> Vec<u8> {
    let stride = depth.row_stride(WIDTH as usize).unwrap();
    let mut state = 0x2545_f491u32;
    (0..stride * HEIGHT as usize)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        })
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut c = c.benchmark_group("Gauss");
    c.sample_size(10);

    let rgba = make_source(BitDepth::Rgbx32);
    let src_image = BlurImage::borrow(&rgba, WIDTH, HEIGHT as i32, BitDepth::Rgbx32);

    for sigma in [1.0f64, 4.0] {
        c.bench_function(format!("RGBX gauss sigma {sigma}: single"), |b| {
            let mut dst = BlurImageMut::alloc(WIDTH, HEIGHT as i32, BitDepth::Rgbx32).unwrap();
            b.iter(|| {
                gaussian_blur(
                    &src_image,
                    &mut dst,
                    sigma,
                    EdgeMode::Clamp,
                    ThreadingPolicy::Single,
                )
                .unwrap();
            })
        });

        c.bench_function(format!("RGBX gauss sigma {sigma}: adaptive"), |b| {
            let mut dst = BlurImageMut::alloc(WIDTH, HEIGHT as i32, BitDepth::Rgbx32).unwrap();
            b.iter(|| {
                gaussian_blur(
                    &src_image,
                    &mut dst,
                    sigma,
                    EdgeMode::Clamp,
                    ThreadingPolicy::Adaptive,
                )
                .unwrap();
            })
        });

        c.bench_function(format!("RGBX gauss f32 sigma {sigma}: adaptive"), |b| {
            let mut dst = BlurImageMut::alloc(WIDTH, HEIGHT as i32, BitDepth::Rgbx32).unwrap();
            b.iter(|| {
                gaussian_blur_f32(
                    &src_image,
                    &mut dst,
                    sigma as f32,
                    EdgeMode::Clamp,
                    ThreadingPolicy::Adaptive,
                )
                .unwrap();
            })
        });
    }

    {
        let mut filter = GaussianBlurFilter::<f64>::with_sigma(3.).unwrap();
        filter.set_alpha_mode(AlphaMode::Blur);
        filter.set_threads(4);
        c.bench_function("RGBX reused filter sigma 3 alpha blurred: 4 threads", |b| {
            let mut dst = BlurImageMut::alloc(WIDTH, HEIGHT as i32, BitDepth::Rgbx32).unwrap();
            b.iter(|| {
                filter.filter_image(&src_image, &mut dst).unwrap();
            })
        });
    }

    {
        let rgb = make_source(BitDepth::Rgb24);
        let mut dst = vec![0u8; rgb.len()];
        let mut filter = GaussianBlurFilter::<f64>::with_sigma(2.).unwrap();
        filter.set_threads(4);
        c.bench_function("RGB raw buffer sigma 2: 4 threads", |b| {
            b.iter(|| {
                filter
                    .filter(&rgb, &mut dst, WIDTH, -(HEIGHT as i32), 24)
                    .unwrap();
            })
        });
    }

    {
        let plane = make_source(BitDepth::Gray8);
        let src_plane = BlurImage::borrow(&plane, WIDTH, HEIGHT as i32, BitDepth::Gray8);
        c.bench_function("Plane gauss sigma 8: adaptive", |b| {
            let mut dst = BlurImageMut::default();
            b.iter(|| {
                gaussian_blur(
                    &src_plane,
                    &mut dst,
                    8.,
                    EdgeMode::Reflect101,
                    ThreadingPolicy::Adaptive,
                )
                .unwrap();
            })
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
