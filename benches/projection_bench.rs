use chainview::camera::CameraController;
use chainview::chain::{Chain, ChainParams};
use chainview::options::{Options, ViewportOptions};
use chainview::renderer::command::CommandList;
use chainview::renderer::ChainRenderer;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn chain_of(count: usize) -> Chain {
    let mut rng = StdRng::seed_from_u64(0xBEEF);
    Chain::generate_with_rng(ChainParams::new(count, 300.0), &mut rng)
}

fn generation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for count in [100, 1000] {
        group.bench_function(format!("{count}_residues"), |b| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| {
                let chain = Chain::generate_with_rng(
                    ChainParams::new(black_box(count), 300.0),
                    &mut rng,
                );
                black_box(chain.calculate_coordinates(3.0))
            });
        });
    }
    group.finish();
}

fn projection_benchmark(c: &mut Criterion) {
    let coords = chain_of(1000).calculate_coordinates(3.0);
    let mut camera = CameraController::default();
    camera.rotate(DVec2::new(35.0, -20.0));
    let projector = camera.projector(&ViewportOptions::default());

    c.bench_function("project_1000", |b| {
        b.iter(|| black_box(projector.project_all(black_box(&coords))));
    });
}

fn render_benchmark(c: &mut Criterion) {
    let chain = chain_of(1000);
    let coords = chain.calculate_coordinates(3.0);
    let options = Options::default();
    let projection = CameraController::default()
        .projector(&options.viewport)
        .project_all(&coords);
    let renderer = ChainRenderer::new(options.colors, options.viewport);
    let mut list = CommandList::default();

    c.bench_function("render_1000", |b| {
        b.iter(|| {
            renderer.render(&mut list, black_box(&projection.points), &chain);
            black_box(list.commands.len())
        });
    });
}

criterion_group!(
    benches,
    generation_benchmark,
    projection_benchmark,
    render_benchmark
);
criterion_main!(benches);
