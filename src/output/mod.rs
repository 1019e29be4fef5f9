mod report;
mod template;

pub use report::{COUNTER_HEADERS, FILE_AGE_HEADERS, Report, SectionHeaders, perf_metric};
pub use template::substitute;
