//! spendpace-core: canonical spending records, vocabulary normalization,
//! master-dataset persistence, and the month-to-date forecast engine.

pub mod dataset;
pub mod dates;
pub mod forecast;
pub mod record;
pub mod vocab;

pub use dates::{days_in_month, extract_month_label, parse_entry_date, parse_month_label};
pub use forecast::{CategoryForecast, ForecastReport, TopMood, forecast};
pub use record::SpendRecord;
pub use vocab::normalize;
