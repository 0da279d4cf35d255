mod cards;
mod jump;
mod schedule;
mod water;

pub use cards::max_abs_pair_sum;
pub use jump::{can_reach_end, min_jumps};
pub use schedule::{max_daily_reward, max_tasks_by_deadline};
pub use water::trapped_water;
