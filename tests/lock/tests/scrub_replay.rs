//! Scrubbing lock tests.
//!
//! Proves:
//! 1. `seek(n)` reproduces exactly the state reached by `n` incremental steps
//! 2. Seeking in any order lands on the same snapshot for the same step
//! 3. The precomputed step count equals the expansions of a full solve
//! 4. Retargeting recomputes the step count from scratch

use pathlab_harness::config::ScrubberConfig;
use pathlab_harness::contract::GraphWorld;
use pathlab_harness::scrubber::Scrubber;
use pathlab_harness::worlds::builtin_worlds;
use pathlab_harness::worlds::reference::Reference;
use pathlab_search::{Agent, GraphProblem, SearchSnapshot};

fn incremental_snapshots(world: &dyn GraphWorld) -> Vec<SearchSnapshot> {
    let mut problem = GraphProblem::new(
        world.graph().unwrap(),
        world.default_start(),
        world.default_goal(),
        ScrubberConfig::default().policy(),
    )
    .unwrap();
    let mut snapshots = vec![SearchSnapshot::capture(&problem)];
    let mut agent = Agent::new(&mut problem);
    while agent.step().unwrap().is_some() {
        snapshots.push(SearchSnapshot::capture(agent.problem()));
    }
    snapshots
}

// ---------------------------------------------------------------------------
// 1 + 3. Seek vs incremental stepping
// ---------------------------------------------------------------------------

#[test]
fn seek_matches_incremental_steps_for_every_world() {
    for world in builtin_worlds() {
        let expected = incremental_snapshots(world.as_ref());
        let mut scrubber = Scrubber::for_world(world.as_ref(), &ScrubberConfig::default()).unwrap();
        assert_eq!(
            scrubber.max_iterations_count() as usize + 1,
            expected.len(),
            "{}: step count",
            world.world_id()
        );
        for (n, snapshot) in expected.iter().enumerate() {
            scrubber.seek(n as u64).unwrap();
            assert_eq!(
                &scrubber.snapshot(),
                snapshot,
                "{}: step {n}",
                world.world_id()
            );
        }
    }
}

// ---------------------------------------------------------------------------
// 2. Seek order independence
// ---------------------------------------------------------------------------

#[test]
fn seek_order_does_not_matter() {
    let mut scrubber = Scrubber::for_world(&Reference, &ScrubberConfig::default()).unwrap();
    let max = scrubber.max_iterations_count();

    let mut forward = Vec::new();
    for n in 0..=max {
        scrubber.seek(n).unwrap();
        forward.push(scrubber.snapshot().digest().unwrap());
    }

    for n in (0..=max).rev() {
        scrubber.seek(n).unwrap();
        assert_eq!(
            scrubber.snapshot().digest().unwrap(),
            forward[n as usize],
            "step {n} differs when reached backwards"
        );
    }

    // Step buttons agree with seek.
    scrubber.seek(0).unwrap();
    while scrubber.can_step_forward() {
        let n = scrubber.step_forward().unwrap();
        assert_eq!(scrubber.snapshot().digest().unwrap(), forward[n as usize]);
    }
    while scrubber.can_step_backward() {
        let n = scrubber.step_backward().unwrap();
        assert_eq!(scrubber.snapshot().digest().unwrap(), forward[n as usize]);
    }
}

// ---------------------------------------------------------------------------
// 4. Retargeting
// ---------------------------------------------------------------------------

#[test]
fn retarget_recomputes_step_count() {
    let mut scrubber = Scrubber::for_world(&Reference, &ScrubberConfig::default()).unwrap();
    scrubber.seek(2).unwrap();

    scrubber.set_goal("A").unwrap();
    assert_eq!(scrubber.iterations_count(), 0);
    assert_eq!(scrubber.max_iterations_count(), 0);
    assert!(scrubber.snapshot().solved);

    scrubber.set_start("O").unwrap();
    let config = ScrubberConfig {
        start: Some("O".into()),
        goal: Some("A".into()),
        ..ScrubberConfig::default()
    };
    let fresh = Scrubber::for_world(&Reference, &config).unwrap();
    assert_eq!(scrubber.max_iterations_count(), fresh.max_iterations_count());
    assert_eq!(scrubber.snapshot(), fresh.snapshot());
}
