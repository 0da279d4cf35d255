#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Edge {
    pub to: u32,
    pub weight: u64,
}

/// Adjacency in compressed sparse row form: the out-edges of `v` live in
/// `offsets[v]..offsets[v + 1]` of the `to`/`weight` columns.
#[derive(Clone, Debug)]
pub struct DirectedGraph {
    vertex_count: usize,
    offsets: Vec<usize>,
    to: Vec<u32>,
    weight: Vec<u64>,
}

impl DirectedGraph {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            offsets: vec![0; vertex_count + 1],
            to: Vec::new(),
            weight: Vec::new(),
        }
    }

    pub fn from_edges(vertex_count: usize, edges: &[(u32, u32, u64)]) -> Self {
        let mut out_deg = vec![0_usize; vertex_count];
        for &(from, to, _) in edges {
            assert!((from as usize) < vertex_count, "from vertex out of range");
            assert!((to as usize) < vertex_count, "to vertex out of range");
            out_deg[from as usize] += 1;
        }

        let mut offsets = vec![0_usize; vertex_count + 1];
        for v in 0..vertex_count {
            offsets[v + 1] = offsets[v] + out_deg[v];
        }

        let mut to = vec![0_u32; edges.len()];
        let mut weight = vec![0_u64; edges.len()];
        let mut cursor = offsets[..vertex_count].to_vec();

        for &(from, dst, w) in edges {
            let idx = cursor[from as usize];
            cursor[from as usize] += 1;
            to[idx] = dst;
            weight[idx] = w;
        }

        Self {
            vertex_count,
            offsets,
            to,
            weight,
        }
    }

    /// Every undirected edge becomes a pair of opposite arcs.
    pub fn from_undirected_edges(vertex_count: usize, edges: &[(u32, u32, u64)]) -> Self {
        let mut arcs = Vec::with_capacity(edges.len() * 2);
        for &(u, v, w) in edges {
            arcs.push((u, v, w));
            arcs.push((v, u, w));
        }
        Self::from_edges(vertex_count, &arcs)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.to.len()
    }

    #[inline]
    pub fn out_degree(&self, v: usize) -> usize {
        self.offsets[v + 1] - self.offsets[v]
    }

    #[inline]
    pub fn out_edges(&self, v: usize) -> OutEdges<'_> {
        let start = self.offsets[v];
        let end = self.offsets[v + 1];
        OutEdges {
            to: &self.to[start..end],
            weight: &self.weight[start..end],
            idx: 0,
        }
    }
}

pub struct OutEdges<'a> {
    to: &'a [u32],
    weight: &'a [u64],
    idx: usize,
}

impl Iterator for OutEdges<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.to.len() {
            return None;
        }
        let edge = Edge {
            to: self.to[self.idx],
            weight: self.weight[self.idx],
        };
        self.idx += 1;
        Some(edge)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remain = self.to.len() - self.idx;
        (remain, Some(remain))
    }
}

impl ExactSizeIterator for OutEdges<'_> {}
