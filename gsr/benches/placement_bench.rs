use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gsr::generator::generate_irregular_polygon;
use gsr::opt::placement::GridPlacer;
use gsr::opt::refinement::HillClimber;
use polypack::entities::{Canvas, Item};
use rand::SeedableRng;
use rand::prelude::SmallRng;

criterion_main!(benches);
criterion_group!(benches, grid_placement_bench, refinement_bench);

const N_ITEMS: usize = 10;
const N_VERTICES: usize = 8;
const PERTURB_STRENGTH: f64 = 0.3;
const CANVAS_SIZE: f64 = 10.0;

fn create_items(n_items: usize, rng: &mut SmallRng) -> Vec<Item> {
    (0..n_items)
        .map(|id| {
            let shape = generate_irregular_polygon(N_VERTICES, PERTURB_STRENGTH, rng).unwrap();
            Item::new(id, shape)
        })
        .collect()
}

fn grid_placement_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0);
    let items = create_items(N_ITEMS, &mut rng);
    let canvas = Canvas::square(CANVAS_SIZE).unwrap();

    let mut group = c.benchmark_group("grid_placement");
    for resolution in [11, 51, 101] {
        let placer = GridPlacer::new(canvas, resolution);
        group.bench_with_input(
            BenchmarkId::from_parameter(resolution),
            &resolution,
            |b, _| b.iter(|| placer.place(&items)),
        );
    }
    group.finish();
}

fn refinement_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0);
    let items = create_items(N_ITEMS, &mut rng);
    let canvas = Canvas::square(CANVAS_SIZE).unwrap();
    let (layout, _) = GridPlacer::new(canvas, 101).place(&items);
    let climber = HillClimber::new(0.5);

    c.bench_function("refine_1000", |b| {
        b.iter(|| {
            let mut rng = SmallRng::seed_from_u64(0);
            climber.refine(layout.clone(), 1000, &mut rng)
        })
    });
}
