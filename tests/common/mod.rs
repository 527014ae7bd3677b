use mdp_vi::*;
use rand::prelude::*;

/// Random MDP with `n` states; the last two are terminal. Every other state
/// gets 1..=3 actions, each reaching 1..=3 random states.
#[allow(dead_code)]
pub fn random_mdp(seed: u64, n: usize) -> TabularMdp {
    let rng = &mut StdRng::seed_from_u64(seed);
    let names = (0..n).map(|i| format!("s{i}")).collect::<Vec<_>>();

    let mut mdp = TabularMdp::new(names.clone())
        .with_terminal(&names[n - 1])
        .with_terminal(&names[n - 2]);
    for s in names.iter().take(n - 2) {
        for a in 0..rng.gen_range(1..=3) {
            let weights = (0..rng.gen_range(1..=3))
                .map(|_| rng.gen_range(0.1..1.0))
                .collect::<Vec<f64>>();
            let total: f64 = weights.iter().sum();
            for w in weights {
                let next = names.choose(rng).unwrap();
                mdp = mdp.with_transition(
                    s.as_str(),
                    format!("a{a}"),
                    next.as_str(),
                    w / total,
                    rng.gen_range(-1.0..1.0),
                );
            }
        }
    }

    mdp
}

#[allow(dead_code)]
pub fn state_values(agent: &ValueIterationAgent<TabularMdp>) -> Vec<f64> {
    agent
        .mdp()
        .states()
        .iter()
        .map(|s| agent.value(s))
        .collect()
}
