//! In-process determinism lock tests.
//!
//! Proves:
//! 1. Independent runs over the same world produce identical trace bytes,
//!    trace digests, chain heads and snapshot digests
//! 2. Trace chain heads diverge as soon as the runs diverge
//! 3. Trace, snapshot and policy digests are domain-separated

use pathlab_harness::contract::GraphWorld;
use pathlab_harness::worlds::builtin_worlds;
use pathlab_harness::worlds::reference::Reference;
use pathlab_search::{Agent, GraphProblem, SearchPolicy, SearchSnapshot, Strategy};

fn solved(world: &dyn GraphWorld, policy: SearchPolicy) -> GraphProblem {
    let mut p = GraphProblem::new(
        world.graph().unwrap(),
        world.default_start(),
        world.default_goal(),
        policy,
    )
    .unwrap();
    Agent::new(&mut p).solve(None).unwrap();
    p
}

#[test]
fn repeated_runs_are_byte_identical() {
    for world in builtin_worlds() {
        let a = solved(world.as_ref(), SearchPolicy::default());
        let b = solved(world.as_ref(), SearchPolicy::default());
        assert_eq!(
            a.trace().to_canonical_json_bytes().unwrap(),
            b.trace().to_canonical_json_bytes().unwrap(),
            "{}: trace bytes",
            world.world_id()
        );
        assert_eq!(a.trace().digest().unwrap(), b.trace().digest().unwrap());
        assert_eq!(a.trace().chain_head().unwrap(), b.trace().chain_head().unwrap());
        assert_eq!(
            SearchSnapshot::capture(&a).digest().unwrap(),
            SearchSnapshot::capture(&b).digest().unwrap()
        );
    }
}

#[test]
fn chain_head_diverges_with_strategy() {
    let astar = solved(&Reference, SearchPolicy::default());
    let ucs = solved(
        &Reference,
        SearchPolicy {
            strategy: Strategy::UniformCost,
            ..SearchPolicy::default()
        },
    );
    assert_ne!(
        astar.trace().chain_head().unwrap(),
        ucs.trace().chain_head().unwrap()
    );
}

#[test]
fn replayed_prefix_is_a_prefix_of_the_full_run() {
    let full = solved(&Reference, SearchPolicy::default());
    let mut prefix = GraphProblem::new(
        Reference.graph().unwrap(),
        "A",
        "O",
        SearchPolicy::default(),
    )
    .unwrap();
    Agent::new(&mut prefix).replay(2).unwrap();
    assert_eq!(prefix.trace().events(), &full.trace().events()[..2]);
    assert_ne!(
        prefix.trace().chain_head().unwrap(),
        full.trace().chain_head().unwrap()
    );
}

#[test]
fn digests_are_domain_separated() {
    let p = solved(&Reference, SearchPolicy::default());
    let trace = p.trace().digest().unwrap();
    let snapshot = SearchSnapshot::capture(&p).digest().unwrap();
    let policy = p.policy().digest().unwrap();
    let topology = p.graph().topology_digest().unwrap();
    let all = [&trace, &snapshot, &policy, &topology];
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
