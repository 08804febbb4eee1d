pub mod compare;
pub mod hops;
pub mod multi_path;
pub mod pareto;
pub mod reconstruct;
pub mod traits;

pub use hops::HopSearch;
pub use multi_path::{Metric, MultiPathDijkstra};
pub use pareto::{Label, ParetoSearch};
pub use traits::{Criterion, RouteSearch};
