//! Route tree flattening.
//!
//! Turns a nested route tree (as found in client-side router configs) into
//! the flat candidate list the resolver consumes.
//!
//! # Rules
//! - Child paths are joined to their parent; one leading slash on the child
//!   is ignored, so `"/about"` and `"about"` under `/` both give `/about`
//! - Runs of slashes collapse to one
//! - Nodes without a path emit nothing and pass their parent's path down
//! - Dynamic segments (`:id`, `*`) are kept as literal text
//! - Output is deduplicated, first occurrence wins

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One node of a route tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteNode {
    /// Path relative to the parent node. `None` or empty for layout nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            children: Vec::new(),
        }
    }

    /// A pathless node that only groups children.
    pub fn layout(children: Vec<RouteNode>) -> Self {
        Self {
            path: None,
            children,
        }
    }

    pub fn with_children(mut self, children: Vec<RouteNode>) -> Self {
        self.children = children;
        self
    }
}

/// Flatten a route tree into absolute paths.
///
/// ```
/// use route_fuzz::routing::{flatten_routes, RouteNode};
///
/// let tree = vec![RouteNode::new("/products").with_children(vec![
///     RouteNode::new("shoes"),
///     RouteNode::new(":id"),
/// ])];
///
/// assert_eq!(
///     flatten_routes(&tree),
///     vec!["/products", "/products/shoes", "/products/:id"]
/// );
/// ```
pub fn flatten_routes(nodes: &[RouteNode]) -> Vec<String> {
    let mut paths = Vec::new();
    collect(nodes, "", &mut paths);

    let mut seen = HashSet::with_capacity(paths.len());
    paths.retain(|path| seen.insert(path.clone()));
    paths
}

fn collect(nodes: &[RouteNode], parent: &str, out: &mut Vec<String>) {
    for node in nodes {
        match node.path.as_deref().filter(|path| !path.is_empty()) {
            Some(path) => {
                let joined = join(parent, path);
                out.push(joined.clone());
                collect(&node.children, &joined, out);
            }
            None => collect(&node.children, parent, out),
        }
    }
}

fn join(parent: &str, child: &str) -> String {
    let child = child.strip_prefix('/').unwrap_or(child);
    let joined = if parent == "/" {
        format!("/{child}")
    } else {
        format!("{parent}/{child}")
    };
    collapse_slashes(&joined)
}

fn collapse_slashes(path: &str) -> String {
    let mut collapsed = String::with_capacity(path.len());
    let mut previous_slash = false;
    for c in path.chars() {
        let slash = c == '/';
        if !(slash && previous_slash) {
            collapsed.push(c);
        }
        previous_slash = slash;
    }
    collapsed
}
