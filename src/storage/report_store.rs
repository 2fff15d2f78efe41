use dashmap::DashMap;

use crate::report::{Report, ReportKind};
use crate::storage::ReportSink;

/// Concurrent report store filled by the per-report tasks.
pub struct ReportStore {
    reports: DashMap<ReportKind, Report>
}

impl ReportStore {
    pub fn new() -> Self {
        Self {
            reports: DashMap::new()
        }
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

impl ReportSink for ReportStore {
    fn save(&self, report: Report) {
        self.reports.insert(report.kind(), report);
    }

    fn load(&self, kind: ReportKind) -> Option<Report> {
        self.reports.get(&kind).map(|entry| entry.value().clone())
    }
}
