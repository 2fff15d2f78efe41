mod report_store;

use crate::report::{Report, ReportKind};

pub use report_store::ReportStore;

pub trait ReportSink: Send + Sync + 'static {
    fn save(&self, report: Report);
    fn load(&self, kind: ReportKind) -> Option<Report>;
}
