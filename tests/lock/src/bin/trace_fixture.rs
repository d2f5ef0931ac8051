//! Tiny binary that solves a built-in world and prints deterministic digest
//! lines for cross-process verification.
//!
//! Usage: `trace_fixture [world_id]` (default `reference`)
//! Output: one `key=value` line each for
//!   `world`, `topology_digest`, `policy_digest`, `max_iterations`,
//!   `trace_digest`, `chain_head`, `snapshot_digest`, `path`, `solved`.
//!
//! Diagnostics go to stderr through `tracing-subscriber`, filtered by
//! `RUST_LOG` (default `warn`), so they never disturb stdout.

use pathlab_harness::config::ScrubberConfig;
use pathlab_harness::scrubber::Scrubber;
use pathlab_harness::worlds::builtin_world;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let world_id = std::env::args().nth(1).unwrap_or_else(|| "reference".into());
    let world = builtin_world(&world_id).ok_or_else(|| format!("unknown world {world_id:?}"))?;
    let mut scrubber = Scrubber::for_world(world.as_ref(), &ScrubberConfig::default())?;
    scrubber.seek(scrubber.max_iterations_count())?;

    let problem = scrubber.problem();
    let snapshot = scrubber.snapshot();

    println!("world={}", world.world_id());
    println!("topology_digest={}", problem.graph().topology_digest()?);
    println!("policy_digest={}", problem.policy().digest()?);
    println!("max_iterations={}", scrubber.max_iterations_count());
    println!("trace_digest={}", problem.trace().digest()?);
    println!("chain_head={}", problem.trace().chain_head()?);
    println!("snapshot_digest={}", snapshot.digest()?);
    println!("path={}", snapshot.path.join(","));
    println!("solved={}", snapshot.solved);
    Ok(())
}
