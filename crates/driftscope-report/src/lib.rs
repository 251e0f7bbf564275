pub mod report;

pub use report::{render_report, NO_SAMPLES};
