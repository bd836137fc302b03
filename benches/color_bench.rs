use {
    criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main},
    image::{DynamicImage, Rgba, RgbaImage},
    std::{hint::black_box, time::Duration},
    themesmith::{
        color::{hex_to_hsl, hsl_to_hex, palette::generate_harmonious_palette, parse_hex},
        history::History,
        manifest::{ColorFallback, SchemaVersion, compile},
        package::Packager,
        raster::{encode_png, placeholder_icon, resize_raster_asset},
        theme::{ImageAsset, ThemeState},
    },
    tokio::runtime::Runtime,
};

const BASES: [(&str, &str); 4] = [
    ("blue", "#4285f4"),
    ("black", "#000000"),
    ("white", "#ffffff"),
    ("purple", "#a855f7"),
];

fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversions");

    for (name, hex) in BASES {
        group.bench_with_input(BenchmarkId::new("parse_hex", name), hex, |b, hex| {
            b.iter(|| parse_hex(black_box(hex)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("hsl_round_trip", name), hex, |b, hex| {
            b.iter(|| hsl_to_hex(hex_to_hsl(black_box(hex))))
        });

        group.bench_with_input(BenchmarkId::new("palette", name), hex, |b, hex| {
            b.iter(|| generate_harmonious_palette(black_box(hex)))
        });
    }

    group.finish();
}

fn bench_raster(c: &mut Criterion) {
    let mut group = c.benchmark_group("raster");
    let icon = encode_png(&DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        128,
        128,
        Rgba([66, 133, 244, 255]),
    )))
    .unwrap();

    for size in [16, 48] {
        group.bench_with_input(BenchmarkId::new("resize_icon", size), &size, |b, size| {
            b.iter(|| resize_raster_asset(black_box(&icon), *size).unwrap())
        });
    }

    group.bench_function("placeholder/128", |b| {
        b.iter(|| placeholder_icon(black_box(128)).unwrap())
    });

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let rt = Runtime::new().unwrap();

    let mut state = ThemeState::default();
    state.colors = generate_harmonious_palette("#4285f4");
    state.icon = Some(ImageAsset::from_bytes(
        "icon.png",
        encode_png(&DynamicImage::ImageRgba8(RgbaImage::new(128, 128))).unwrap(),
    ));

    for schema in [SchemaVersion::V2, SchemaVersion::V3] {
        group.bench_with_input(
            BenchmarkId::new("compile", schema),
            &schema,
            |b, schema| b.iter(|| compile(black_box(&state), *schema, ColorFallback::Black)),
        );

        let manifest = compile(&state, schema, ColorFallback::Black).unwrap();
        group.bench_with_input(
            BenchmarkId::new("package", schema),
            &manifest,
            |b, manifest| {
                b.to_async(&rt)
                    .iter(|| async { Packager::default().package(&state, manifest).await.unwrap() })
            },
        );
    }

    group.bench_function("history/push_past_capacity", |b| {
        b.iter_batched(
            || History::with_max_len(state.clone(), 50),
            |mut history| {
                for _ in 0..100 {
                    history.push(state.clone());
                }
                history
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group! {
    name = color_bench;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(3))
        .sample_size(300);
    targets = bench_conversions
}

criterion_group! {
    name = raster_bench;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(50);
    targets = bench_raster, bench_pipeline
}

criterion_main!(color_bench, raster_bench);
