use costgrid_core::Position;

/// Index of a node in a search run's node pool.
///
/// Nodes are pushed in frontier insertion order, so the id doubles as the
/// insertion sequence number used to break `f` ties.
pub(crate) type NodeId = usize;

/// One discovered cell of a search run.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    pub(crate) pos: Position,
    pub(crate) parent: Option<NodeId>,
    pub(crate) g: u64,
    pub(crate) h: f64,
    pub(crate) f: f64,
}

impl SearchNode {
    pub(crate) fn new(pos: Position, parent: Option<NodeId>, g: u64, h: f64) -> Self {
        Self {
            pos,
            parent,
            g,
            h,
            f: g as f64 + h,
        }
    }

    /// Lower `g` to `g` through `parent`, keeping the stored `h`.
    pub(crate) fn relax(&mut self, parent: NodeId, g: u64) {
        self.g = g;
        self.f = g as f64 + self.h;
        self.parent = Some(parent);
    }
}

/// Reference into the node pool, ordered for use in `BinaryHeap`.
///
/// The heap pops the smallest `f` first and, among equal `f`, the node
/// inserted first.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) id: NodeId,
    pub(crate) f: f64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse both keys so BinaryHeap (max-heap) pops the minimum.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for NodeRef {}
