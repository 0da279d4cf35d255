mod difference;
mod fenwick;
mod histogram;
mod monoid;
mod prefix_sum;
mod segment_tree;

pub use difference::{Difference, Difference2d};
pub use fenwick::FenwickTree;
pub use histogram::{largest_rectangle, maximal_rectangle};
pub use monoid::{Max, Min, Monoid, RunSummary, Runs, Sum};
pub use prefix_sum::{PrefixSum, PrefixSum2d};
pub use segment_tree::SegmentTree;
