//! `SearchTrace`: expansion-event audit log.
//!
//! Every call to [`crate::Agent::expand`] appends one [`ExpandEvent`],
//! except the goal short-circuit, which leaves the problem untouched. The
//! ordered event list is the normative record of a run: two runs with equal
//! traces made identical decisions. Traces are cleared by `reset`, so a
//! trace always describes the current run only.
//!
//! Two digests are offered:
//! - [`SearchTrace::digest`]: hash of the whole canonical JSON document;
//! - [`SearchTrace::chain_head`]: rolling hash chain
//!   `h0 = H(domain || header)`, `h_i = H(domain || h_{i-1} || event_i)`,
//!   which lets a consumer verify a prefix of a replay without the rest.

use sha2::{Digest, Sha256};

use pathlab_kernel::graph::Cost;
use pathlab_kernel::proof::canon::canonical_json_bytes;
use pathlab_kernel::proof::hash::{canonical_hash, domain_digest, ContentHash, HashDomain};

use crate::agent::ExpandOutcome;
use crate::error::SearchError;
use crate::node::FrontierPopKey;
use crate::policy::{SolvedWhen, Strategy};

/// What a run was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceHeader {
    pub start: String,
    pub goal: String,
    pub strategy: Strategy,
    pub solved_when: SolvedWhen,
    pub heuristic: String,
}

/// What happened to one successor during a relaxation round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelaxationOutcome {
    /// New best path committed.
    Improved {
        cost_so_far: Cost,
        estimated_cost: Cost,
        total_cost: Cost,
        depth: u32,
    },
    /// Tentative g did not beat the committed g.
    NotImproved { tentative: Cost },
}

/// One successor visited while expanding a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelaxationRecord {
    pub node: String,
    /// True if this round added the node to the frontier.
    pub discovered: bool,
    pub outcome: RelaxationOutcome,
}

/// A single expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandEvent {
    /// Position of this event in the trace.
    pub expansion_order: u64,
    /// The expanded node.
    pub node: String,
    /// Ordering key of the node when it was picked.
    pub pop_key: FrontierPopKey,
    pub outcome: ExpandOutcome,
    /// Successors visited, in edge-declaration order. Explored successors
    /// are not listed.
    pub relaxations: Vec<RelaxationRecord>,
    /// Frontier after the re-sort.
    pub frontier_after: Vec<String>,
}

/// The audit log of the current run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTrace {
    header: TraceHeader,
    events: Vec<ExpandEvent>,
}

impl SearchTrace {
    #[must_use]
    pub fn new(header: TraceHeader) -> Self {
        Self {
            header,
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn header(&self) -> &TraceHeader {
        &self.header
    }

    #[must_use]
    pub fn events(&self) -> &[ExpandEvent] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Order the next event will receive.
    #[must_use]
    pub fn next_order(&self) -> u64 {
        self.events.len() as u64
    }

    pub(crate) fn push(&mut self, event: ExpandEvent) {
        self.events.push(event);
    }

    /// Drop all events and bind a new header.
    pub(crate) fn restart(&mut self, header: TraceHeader) {
        self.header = header;
        self.events.clear();
    }

    /// Keys that entered the explored set, in order, as recorded by events.
    #[must_use]
    pub fn expanded_nodes(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter(|e| {
                matches!(
                    e.outcome,
                    ExpandOutcome::Expanded { .. } | ExpandOutcome::GoalReached { expanded: true }
                )
            })
            .map(|e| e.node.as_str())
            .collect()
    }

    /// Serialize to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Canon`] if canonicalization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, SearchError> {
        Ok(canonical_json_bytes(&self.to_json_value())?)
    }

    /// Content digest of the full trace document.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Canon`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, SearchError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchTrace, &bytes))
    }

    /// Head of the rolling hash chain over header and events, hex-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Canon`] if canonicalization fails.
    pub fn chain_head(&self) -> Result<String, SearchError> {
        let header_bytes = canonical_json_bytes(&header_to_json(&self.header))?;
        let mut head = domain_digest(HashDomain::SearchTraceChain, &header_bytes);
        for event in &self.events {
            let event_bytes = canonical_json_bytes(&event_to_json(event))?;
            let mut hasher = Sha256::new();
            hasher.update(HashDomain::SearchTraceChain.as_bytes());
            hasher.update(head);
            hasher.update(&event_bytes);
            head.copy_from_slice(&hasher.finalize());
        }
        Ok(hex::encode(head))
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "events": self.events.iter().map(event_to_json).collect::<Vec<_>>(),
            "header": header_to_json(&self.header),
        })
    }
}

// ---------------------------------------------------------------------------
// Canonical JSON serialization
// ---------------------------------------------------------------------------

fn header_to_json(h: &TraceHeader) -> serde_json::Value {
    serde_json::json!({
        "goal": h.goal,
        "heuristic": h.heuristic,
        "solved_when": h.solved_when.as_str(),
        "start": h.start,
        "strategy": h.strategy.as_str(),
    })
}

fn event_to_json(e: &ExpandEvent) -> serde_json::Value {
    serde_json::json!({
        "expansion_order": e.expansion_order,
        "frontier_after": e.frontier_after,
        "node": e.node,
        "outcome": outcome_to_json(e.outcome),
        "pop_key": {
            "depth": e.pop_key.depth,
            "total_cost": e.pop_key.total_cost,
        },
        "relaxations": e.relaxations.iter().map(relaxation_to_json).collect::<Vec<_>>(),
    })
}

fn outcome_to_json(o: ExpandOutcome) -> serde_json::Value {
    match o {
        ExpandOutcome::GoalReached { expanded } => {
            serde_json::json!({"expanded": expanded, "type": "goal_reached"})
        }
        ExpandOutcome::Expanded {
            discovered,
            improved,
        } => {
            serde_json::json!({"discovered": discovered, "improved": improved, "type": "expanded"})
        }
        ExpandOutcome::AlreadyExplored => serde_json::json!({"type": "already_explored"}),
    }
}

fn relaxation_to_json(r: &RelaxationRecord) -> serde_json::Value {
    let outcome = match &r.outcome {
        RelaxationOutcome::Improved {
            cost_so_far,
            estimated_cost,
            total_cost,
            depth,
        } => serde_json::json!({
            "cost_so_far": cost_so_far,
            "depth": depth,
            "estimated_cost": estimated_cost,
            "total_cost": total_cost,
            "type": "improved",
        }),
        RelaxationOutcome::NotImproved { tentative } => {
            serde_json::json!({"tentative": tentative, "type": "not_improved"})
        }
    };
    serde_json::json!({
        "discovered": r.discovered,
        "node": r.node,
        "outcome": outcome,
    })
}
