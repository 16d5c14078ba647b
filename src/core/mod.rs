pub mod equality;
pub mod spec;

pub use equality::{structurally_equal, structurally_equal_maps, structurally_equal_seqs};
pub use spec::{ChartSpec, Dimension, Layout, SeriesData};
