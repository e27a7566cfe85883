pub mod point_scale;
pub mod record;
pub mod scale;
pub mod types;

pub use point_scale::PointScale;
pub use record::{GroupedEntry, Record, group_by_state};
pub use scale::LinearScale;
pub use types::{Margins, PlotArea};
