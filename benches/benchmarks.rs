criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        extracting_tagged_proposals,
        cleaning_noisy_proposals,
        rendering_pairwise_prompt,
        expanding_lookahead_tree,
        judging_round_robin_tournament,
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime")
}

fn completion(n: usize) -> String {
    (0..n)
        .map(|i| format!("<think>option {}</think>\n<action>move {}</action>", i, i % (n / 2).max(1)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn line(n: usize, seed: usize) -> Trajectory {
    (0..n)
        .map(|i| match i % 2 {
            0 => Action::new(Role::Agent, format!("agent move {} {}", seed, i)),
            _ => Action::new(Role::Opponent, format!("opponent move {} {}", seed, i)),
        })
        .collect()
}

/// Proposes eight moves for either side; judges always prefer the first future.
fn instant(messages: &[Message]) -> String {
    match messages.first().map(|m| m.content.as_str()) {
        Some(PLAYER_DIRECTIVE) => (0..8)
            .flat_map(|i| [Role::Agent, Role::Opponent].map(|r| Action::new(r, format!("m{}", i))))
            .map(|a| a.tagged())
            .collect::<Vec<_>>()
            .join("\n"),
        _ => "[[1]]".to_string(),
    }
}

fn extracting_tagged_proposals(c: &mut criterion::Criterion) {
    let text = completion(64);
    c.bench_function("extract proposals from a 64-option completion", |b| {
        b.iter(|| proposals(&text, Role::Agent))
    });
}

fn cleaning_noisy_proposals(c: &mut criterion::Criterion) {
    let raw = proposals(&completion(64), Role::Agent);
    c.bench_function("dedup and cut 64 proposals to 5", |b| {
        b.iter(|| Hygiene::new(Role::Agent, BRANCHING).apply(raw.clone()))
    });
}

fn rendering_pairwise_prompt(c: &mut criterion::Criterion) {
    let registry = Registry::default();
    let a = line(6, 0).render();
    let b = line(6, 1).disguised();
    c.bench_function("render a pairwise judgment prompt", |bench| {
        bench.iter(|| {
            registry.pairwise().render(&[
                ("base_state", "board"),
                ("future_1", a.as_str()),
                ("future_2", b.as_str()),
            ])
        })
    });
}

fn expanding_lookahead_tree(c: &mut criterion::Criterion) {
    let runtime = runtime();
    let registry = Registry::default();
    let oracle = Stub::new(instant);
    c.bench_function("expand a depth-3 branching-5 tree", |b| {
        b.iter(|| {
            runtime.block_on(
                Lookahead::new(&oracle, &registry, "generic", "board")
                    .depth(3)
                    .branching(5)
                    .search(Role::Agent),
            )
        })
    });
}

fn judging_round_robin_tournament(c: &mut criterion::Criterion) {
    let runtime = runtime();
    let registry = Registry::default();
    let oracle = Stub::new(instant);
    let candidates = (0..25).map(|i| line(4, i)).collect::<Vec<_>>();
    c.bench_function("judge a 25-candidate round robin", |b| {
        b.iter(|| {
            runtime.block_on(
                Tournament::new(registry.pairwise().clone()).choose(&oracle, "board", &candidates),
            )
        })
    });
}

use foresight::*;
