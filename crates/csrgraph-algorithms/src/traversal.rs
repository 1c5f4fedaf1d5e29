//! Path search by breadth-first and depth-first traversal

use super::common::{CsrGraph, GraphResult, NodeId};
use std::collections::VecDeque;

/// Breadth-First Search (Unweighted Shortest Path)
///
/// Returns the fewest-edge path from `root` to `target`, both included, or an
/// empty path when `target` is unreachable. Each node's parent is recorded the
/// first time it is seen, which is what makes the path shortest.
pub fn bfs_path(view: &CsrGraph, root: NodeId, target: NodeId) -> GraphResult<Vec<NodeId>> {
    view.check_node(root)?;
    view.check_node(target)?;

    let mut parent: Vec<Option<NodeId>> = vec![None; view.node_count()];
    let mut visited = vec![false; view.node_count()];
    let mut queue = VecDeque::new();

    queue.push_back(root);
    visited[root] = true;

    while let Some(current) = queue.pop_front() {
        if current == target {
            let mut path = vec![target];
            let mut curr = target;
            while let Some(p) = parent[curr] {
                path.push(p);
                curr = p;
            }
            path.reverse();
            return Ok(path);
        }

        for &next in view.successors(current) {
            if !visited[next] {
                visited[next] = true;
                parent[next] = Some(current);
                queue.push_back(next);
            }
        }
    }

    Ok(Vec::new())
}

/// Depth-First Search path
///
/// Returns some path from `root` to `target` (the DFS tree branch that first
/// reaches it), or an empty path when unreachable. The explicit frame stack is
/// bounded by the node count, so long chains cannot overflow the call stack.
pub fn dfs_path(view: &CsrGraph, root: NodeId, target: NodeId) -> GraphResult<Vec<NodeId>> {
    view.check_node(root)?;
    view.check_node(target)?;

    if root == target {
        return Ok(vec![root]);
    }

    let mut visited = vec![false; view.node_count()];
    // (node, index of the next edge to try)
    let mut frames: Vec<(NodeId, usize)> = vec![(root, 0)];
    visited[root] = true;

    while let Some(frame) = frames.last_mut() {
        let (v, next) = *frame;
        let neighbors = view.successors(v);
        if next == neighbors.len() {
            frames.pop();
            continue;
        }

        frame.1 += 1;
        let w = neighbors[next];
        if visited[w] {
            continue;
        }
        visited[w] = true;
        frames.push((w, 0));

        if w == target {
            return Ok(frames.into_iter().map(|(node, _)| node).collect());
        }
    }

    Ok(Vec::new())
}
