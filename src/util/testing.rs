use std::env;
use std::sync::Once;
use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::node::Node;

static TEST_SETUP: Once = Once::new();

/// Install the global tracing subscriber once per test binary.
///
/// Honors RUST_LOG; defaults to `treeflip=debug`.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("treeflip=debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
    debug!(rust_log = ?env::var("RUST_LOG").ok(), "test logging ready");
}

/// Left-leaning chain `0 <- 1 <- ... <- n-1` with at least one node.
///
/// The root holds `n - 1`, or `0` when `n <= 1`. Built bottom-up so
/// construction itself never recurses.
pub fn skewed_chain(n: i32) -> Node {
    let mut root = Node::new(0);
    for value in 1..n.max(1) {
        let mut parent = Node::new(value);
        parent.left = Some(Box::new(root));
        root = parent;
    }
    root
}

/// Complete tree of the given height with values assigned in-order from 1.
pub fn complete_tree(height: u32) -> Option<Node> {
    fn build(height: u32, next: &mut i32) -> Option<Node> {
        if height == 0 {
            return None;
        }
        let left = build(height - 1, next);
        let mut node = Node::new(*next);
        *next += 1;
        node.left = left.map(Box::new);
        node.right = build(height - 1, next).map(Box::new);
        Some(node)
    }
    let mut next = 1;
    build(height, &mut next)
}
