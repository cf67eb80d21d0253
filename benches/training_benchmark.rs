use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hestia::belief::{initial_belief, update_histogram, Histogram};
use hestia::config::QLearningConfig;
use hestia::learning::QLearner;
use hestia::models::{BurningRoomObservation, BurningRoomTransition};
use hestia::table::ActionValueTable;
use hestia::types::{Action, Observation, Preference, State};

fn bench_training(c: &mut Criterion) {
    let mut group = c.benchmark_group("training");

    for episodes in [100usize, 1000] {
        group.bench_with_input(BenchmarkId::new("episodes", episodes), &episodes, |b, &episodes| {
            b.iter(|| {
                let config = QLearningConfig {
                    num_episodes: episodes,
                    seed: Some(42),
                    ..Default::default()
                };
                let mut learner = QLearner::from_config(config).unwrap();
                let mut table = ActionValueTable::new();
                black_box(learner.train(&mut table).unwrap())
            });
        });
    }

    group.finish();
}

fn bench_step(c: &mut Criterion) {
    let config = QLearningConfig {
        seed: Some(42),
        ..Default::default()
    };
    let mut learner = QLearner::from_config(config).unwrap();
    let mut table = ActionValueTable::new();

    c.bench_function("single_step", |b| {
        b.iter(|| black_box(learner.step(&mut table).unwrap()))
    });
}

fn bench_belief_update(c: &mut Criterion) {
    let prior = initial_belief().unwrap();
    let uniform = Histogram::uniform(&State::all()).unwrap();
    let transition = BurningRoomTransition::default();
    let observation_model = BurningRoomObservation::new();
    let observation = Observation::new(true, Preference::Object);

    c.bench_function("belief_update_prior_ask", |b| {
        b.iter(|| {
            black_box(
                update_histogram(&prior, Action::Ask, &observation, &transition, &observation_model)
                    .unwrap(),
            )
        })
    });

    c.bench_function("belief_update_uniform_short_grab", |b| {
        b.iter(|| {
            black_box(
                update_histogram(
                    &uniform,
                    Action::ShortGrab,
                    &Observation::unknown(),
                    &transition,
                    &observation_model,
                )
                .unwrap(),
            )
        })
    });
}

criterion_group!(benches, bench_training, bench_step, bench_belief_update);
criterion_main!(benches);
