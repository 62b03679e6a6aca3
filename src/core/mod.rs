pub mod color_scale;
pub mod dataset;
pub mod date_range;
pub mod grid;
pub mod observation;
pub mod row_parser;
pub mod scale;
pub mod tenor;
pub mod time_scale;

pub use color_scale::{BLUE_PALETTE, ColorScale};
pub use dataset::{Dataset, drop_leading_non_data_rows, keep_rows_with_any_data, select_range};
pub use date_range::{DateRange, format_iso, parse_iso_date};
pub use grid::{GridIndex, GridShape};
pub use observation::{Observation, RawRecord};
pub use row_parser::RowParser;
pub use scale::{LinearScale, nice_ticks, tick_step};
pub use tenor::{Tenor, TenorSet};
pub use time_scale::{TimeScale, TimeTickInterval};
