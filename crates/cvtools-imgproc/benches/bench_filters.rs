use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use cvtools_image::Image;
use cvtools_imgproc::filter::{convolve2d, kernels, PaddingMode};

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Convolve2d");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image_data = (0..width * height).map(|x| (x % 256) as f32).collect();
        let image = Image::new([*width, *height].into(), image_data).unwrap();
        let kernel = kernels::sobel_kernel_x_3x3();

        group.bench_with_input(
            BenchmarkId::new("sobel3x3_same", &parameter_string),
            &image,
            |b, i| b.iter(|| black_box(convolve2d(i, &kernel, PaddingMode::Same))),
        );

        group.bench_with_input(
            BenchmarkId::new("sobel3x3_valid", &parameter_string),
            &image,
            |b, i| b.iter(|| black_box(convolve2d(i, &kernel, PaddingMode::Valid))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_filters);
criterion_main!(benches);
