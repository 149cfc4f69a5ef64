//! # HK Service Benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hk_lib::hk::{HkParams, HkService, LimitParams, ParamId, HK_PACKET_SIZE};

fn hk_benchmark(c: &mut Criterion) {
    // ---- Build a fully populated service ----

    let mut hk = HkService::with_params(HkParams {
        limits: vec![
            LimitParams { param: ParamId::BattVoltage, low: 3000, high: 4200 },
            LimitParams { param: ParamId::BattTemp, low: 0, high: 45 },
            LimitParams { param: ParamId::SolarPanelX, low: 0, high: 180 },
            LimitParams { param: ParamId::Altitude, low: 350, high: 450 },
        ],
    });

    for (i, id) in ParamId::ALL.iter().enumerate() {
        hk.update(*id, 100 * i as u32, 1000)
            .expect("Parameter should be valid");
    }

    // ---- Benchmarks ----

    c.bench_function("hk serialize", |b| {
        let mut buffer = [0u8; HK_PACKET_SIZE];
        b.iter(|| hk.serialize(black_box(&mut buffer)))
    });

    c.bench_function("hk to_packet", |b| b.iter(|| black_box(hk.to_packet())));

    c.bench_function("hk check_limits all", |b| {
        b.iter(|| {
            for id in ParamId::ALL.iter() {
                let _ = black_box(hk.check_limits(*id));
            }
        })
    });
}

criterion_group!(benches, hk_benchmark);
criterion_main!(benches);
