//! Typed domain separators for canonical hashing.
//!
//! Every digest in the workspace selects a domain via [`HashDomain`], so a
//! graph digest can never collide with a trace digest over the same bytes.
//! Adding a domain is a single change here: the enum, `as_bytes()`, `ALL`,
//! and `Display` are generated from one macro invocation.

/// Declares `HashDomain` enum, `as_bytes()`, `ALL`, and `Display` from one list.
macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Every variant maps to a unique, null-terminated byte string used as
        /// a SHA-256 prefix.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw domain-separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domain variants in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => write!(f, stringify!($variant)), )+
                }
            }
        }
    };
}

define_hash_domains! {
    // -----------------------------------------------------------------------
    // Kernel
    // -----------------------------------------------------------------------

    /// Canonical graph topology (nodes, positions, edges, costs).
    GraphTopology => b"PATHLAB::GRAPH_TOPOLOGY::V1\0",

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Whole expansion trace, hashed from its canonical JSON form.
    SearchTrace => b"PATHLAB::SEARCH_TRACE::V1\0",

    /// Trace hash chain seed: `h0 = H(domain || run header)`.
    SearchTraceChain => b"PATHLAB::SEARCH_TRACE_CHAIN::V1\0",

    /// Read-only render snapshot.
    SearchSnapshot => b"PATHLAB::SEARCH_SNAPSHOT::V1\0",

    /// Search policy echo.
    SearchPolicy => b"PATHLAB::SEARCH_POLICY::V1\0",

    // -----------------------------------------------------------------------
    // Harness
    // -----------------------------------------------------------------------

    /// Fixture document, hashed from its canonical JSON form.
    FixtureFile => b"PATHLAB::FIXTURE_FILE::V1\0",
}
