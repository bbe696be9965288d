use crate::enums::analyzer_category::AnalyzerCategory;
use crate::structs::analyzer_report::AnalyzerReport;
use crate::structs::fetched_page::FetchedPage;

/// A single quality dimension computed from one fetched page.
///
/// Implementations are pure over the page: every check that cannot run
/// contributes no findings instead of failing the report.
pub trait Analyzer: Send + Sync {
    fn category(&self) -> AnalyzerCategory;

    fn analyze(&self, page: &FetchedPage) -> AnalyzerReport;
}
