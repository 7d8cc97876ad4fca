//! Benchmarks for scheme construction and role resolution.
//!
//! Run with: cargo bench -p tonelab-scheme

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tonelab_hct::Hct;
use tonelab_scheme::{DynamicScheme, Role, SpecVersion, Variant};

fn bench_scheme_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("scheme/build");

    for (name, variant) in [
        ("tonal_spot", Variant::TonalSpot),
        ("vibrant", Variant::Vibrant),
        ("cmf", Variant::Cmf),
    ] {
        group.bench_with_input(BenchmarkId::new("light", name), &variant, |b, &variant| {
            b.iter(|| {
                let scheme = DynamicScheme::builder(Hct::from(280.0, 40.0, 50.0))
                    .variant(variant)
                    .spec_version(SpecVersion::Spec2026)
                    .build();
                black_box(scheme)
            })
        });
    }

    group.finish();
}

fn bench_role_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("scheme/resolve");

    for version in SpecVersion::ALL {
        let scheme = DynamicScheme::builder(Hct::from(280.0, 40.0, 50.0))
            .variant(Variant::TonalSpot)
            .spec_version(version)
            .build();

        group.bench_with_input(
            BenchmarkId::new("primary", format!("{version:?}")),
            &scheme,
            |b, scheme| b.iter(|| black_box(scheme.argb(Role::Primary))),
        );

        group.bench_with_input(
            BenchmarkId::new("all_roles", format!("{version:?}")),
            &scheme,
            |b, scheme| {
                b.iter(|| {
                    for role in Role::ALL {
                        black_box(scheme.argb(role));
                    }
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_scheme_build, bench_role_resolution);
criterion_main!(benches);
