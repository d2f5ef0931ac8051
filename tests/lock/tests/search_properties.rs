//! Search invariants checked over every built-in world and every start/goal
//! pair of the reference world.
//!
//! Proves:
//! 1. Reset: frontier == [start], explored empty, g(start) == 0
//! 2. Frontier duplicate-free and disjoint from explored after every step
//! 3. Committed g never increases
//! 4. Edge distance is symmetric
//! 5. Solve terminates within node count; reachable goals end solved
//! 6. Path to goal runs start → goal with strictly increasing depth
//! 7. Uniform-cost and A* agree on path cost for the reference world, at
//!    the default unit and when the scrubber overrides the unit

use std::collections::BTreeSet;

use pathlab_harness::config::ScrubberConfig;
use pathlab_harness::contract::GraphWorld;
use pathlab_harness::scrubber::Scrubber;
use pathlab_harness::worlds::builtin_worlds;
use pathlab_harness::worlds::reference::Reference;
use pathlab_kernel::graph::{Cost, Graph};
use pathlab_search::{Agent, GraphProblem, SearchPolicy, Strategy};

fn keys(graph: &Graph) -> Vec<String> {
    graph.nodes().iter().map(|n| n.key().to_string()).collect()
}

fn every_reference_pair() -> Vec<(String, String)> {
    let graph = Reference.graph().unwrap();
    let keys = keys(&graph);
    let mut pairs = Vec::new();
    for a in &keys {
        for b in &keys {
            pairs.push((a.clone(), b.clone()));
        }
    }
    pairs
}

fn problem(graph: Graph, start: &str, goal: &str, policy: SearchPolicy) -> GraphProblem {
    GraphProblem::new(graph, start, goal, policy).unwrap()
}

// ---------------------------------------------------------------------------
// 1. Reset
// ---------------------------------------------------------------------------

#[test]
fn reset_restores_pristine_state_after_any_progress() {
    for world in builtin_worlds() {
        let mut p = problem(
            world.graph().unwrap(),
            world.default_start(),
            world.default_goal(),
            SearchPolicy::default(),
        );
        Agent::new(&mut p).solve(None).unwrap();
        p.reset();
        assert_eq!(p.frontier(), [world.default_start()]);
        assert!(p.explored().is_empty());
        assert_eq!(p.node_state(world.default_start()).unwrap().cost_so_far, 0);
        assert!(p.trace().is_empty());
        for key in keys(p.graph()) {
            let state = p.node_state(&key).unwrap();
            if key != world.default_start() {
                assert!(!state.scored, "{key} kept a score across reset");
                assert_eq!(state.parent, None);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 2 + 3. Bookkeeping and monotonicity, step by step
// ---------------------------------------------------------------------------

#[test]
fn bookkeeping_and_monotonicity_hold_at_every_step() {
    let graph = Reference.graph().unwrap();
    let all_keys = keys(&graph);
    for (start, goal) in every_reference_pair() {
        let mut p = problem(graph.clone(), &start, &goal, SearchPolicy::default());
        let mut committed: Vec<Option<Cost>> = vec![None; all_keys.len()];
        let mut agent = Agent::new(&mut p);
        while agent.step().unwrap().is_some() {
            let frontier = agent.problem().frontier();
            let explored = agent.problem().explored();
            let frontier_set: BTreeSet<&str> = frontier.iter().copied().collect();
            let explored_set: BTreeSet<&str> = explored.iter().copied().collect();
            assert_eq!(frontier_set.len(), frontier.len(), "duplicate in frontier");
            assert_eq!(explored_set.len(), explored.len(), "duplicate in explored");
            assert!(
                frontier_set.is_disjoint(&explored_set),
                "{start}->{goal}: frontier and explored overlap"
            );

            for (i, key) in all_keys.iter().enumerate() {
                let state = agent.problem().node_state(key).unwrap();
                if !state.scored {
                    continue;
                }
                if let Some(prev) = committed[i] {
                    assert!(
                        state.cost_so_far <= prev,
                        "{start}->{goal}: g({key}) rose from {prev} to {}",
                        state.cost_so_far
                    );
                }
                committed[i] = Some(state.cost_so_far);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 4. Symmetry
// ---------------------------------------------------------------------------

#[test]
fn distance_is_symmetric_for_every_pair() {
    let p = problem(Reference.graph().unwrap(), "A", "O", SearchPolicy::default());
    for (a, b) in every_reference_pair() {
        assert_eq!(
            p.distance(&a, &b).unwrap(),
            p.distance(&b, &a).unwrap(),
            "distance({a}, {b})"
        );
    }
}

// ---------------------------------------------------------------------------
// 5 + 6. Termination and path shape
// ---------------------------------------------------------------------------

#[test]
fn solve_terminates_and_path_reaches_goal() {
    let graph = Reference.graph().unwrap();
    let node_count = graph.len() as u64;
    for (start, goal) in every_reference_pair() {
        let mut p = problem(graph.clone(), &start, &goal, SearchPolicy::default());
        let executed = Agent::new(&mut p).solve(None).unwrap();
        assert!(executed <= node_count, "{start}->{goal}: {executed} expansions");
        assert!(p.is_solved(), "{start}->{goal} not solved");

        let path = p.path_to(&goal).unwrap();
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        let depths: Vec<u32> = path
            .iter()
            .map(|k| p.node_state(k).unwrap().depth)
            .collect();
        assert!(
            depths.windows(2).all(|w| w[0] < w[1]),
            "{start}->{goal}: depths {depths:?}"
        );
        assert_eq!(p.path_to(&goal).unwrap(), path, "path reconstruction changed");
    }
}

#[test]
fn unreachable_goal_terminates_unsolved() {
    let world = pathlab_harness::worlds::disconnected::Disconnected;
    let graph = world.graph().unwrap();
    let node_count = graph.len() as u64;
    let mut p = problem(graph, "A", "E", SearchPolicy::default());
    let executed = Agent::new(&mut p).solve(None).unwrap();
    assert!(executed <= node_count);
    assert!(p.frontier().is_empty());
    assert!(!p.is_solved());
}

#[test]
fn triangle_scenario_picks_two_hop_path() {
    let world = pathlab_harness::worlds::triangle::Triangle;
    let mut p = problem(world.graph().unwrap(), "A", "C", SearchPolicy::default());
    Agent::new(&mut p).solve(None).unwrap();
    assert_eq!(p.path_to("C").unwrap(), ["A", "B", "C"]);
}

// ---------------------------------------------------------------------------
// 7. Strategy agreement
// ---------------------------------------------------------------------------

#[test]
fn a_star_matches_uniform_cost_on_every_reference_pair() {
    let graph = Reference.graph().unwrap();
    let ucs_policy = SearchPolicy {
        strategy: Strategy::UniformCost,
        ..SearchPolicy::default()
    };
    for (start, goal) in every_reference_pair() {
        let mut ucs = problem(graph.clone(), &start, &goal, ucs_policy.clone());
        Agent::new(&mut ucs).solve(None).unwrap();
        let mut astar = problem(graph.clone(), &start, &goal, SearchPolicy::default());
        Agent::new(&mut astar).solve(None).unwrap();

        let optimal = ucs.node_state(&goal).unwrap().cost_so_far;
        let found = astar.node_state(&goal).unwrap().cost_so_far;
        assert_eq!(found, optimal, "{start}->{goal}: A* {found}, uniform-cost {optimal}");
    }
}

fn scrubbed_goal_cost(start: &str, goal: &str, strategy: Strategy, unit: i64) -> Cost {
    let config = ScrubberConfig {
        start: Some(start.to_string()),
        goal: Some(goal.to_string()),
        strategy: Some(strategy),
        unit_distance: Some(unit),
        ..ScrubberConfig::default()
    };
    let mut scrubber = Scrubber::for_world(&Reference, &config).unwrap();
    scrubber.seek(scrubber.max_iterations_count()).unwrap();
    assert!(scrubber.snapshot().solved, "{start}->{goal} at unit {unit}");
    scrubber.problem().node_state(goal).unwrap().cost_so_far
}

#[test]
fn unit_override_rescales_edges_and_keeps_a_star_optimal() {
    for unit in [8, 16] {
        let graph = Scrubber::for_world(
            &Reference,
            &ScrubberConfig {
                unit_distance: Some(unit),
                ..ScrubberConfig::default()
            },
        )
        .unwrap()
        .problem()
        .graph()
        .clone();
        assert_eq!(graph.unit_distance(), Some(unit));

        for (start, goal) in every_reference_pair() {
            let optimal = scrubbed_goal_cost(&start, &goal, Strategy::UniformCost, unit);
            let found = scrubbed_goal_cost(&start, &goal, Strategy::AStar, unit);
            assert_eq!(
                found, optimal,
                "{start}->{goal} at unit {unit}: A* {found}, uniform-cost {optimal}"
            );
        }
    }
}

#[test]
fn mismatched_unit_is_rejected_for_a_prebuilt_graph() {
    let policy = SearchPolicy {
        unit_distance: 8,
        ..SearchPolicy::default()
    };
    let err = GraphProblem::new(Reference.graph().unwrap(), "A", "O", policy).unwrap_err();
    assert!(
        matches!(err, pathlab_search::SearchError::InvalidPolicy { .. }),
        "{err:?}"
    );
}
