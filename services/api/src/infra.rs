use job_board::error::AppError;
use job_board::listings::{seed_sample_data, InMemoryListingRepository, JobBoardService};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

pub(crate) type BoardService = JobBoardService<InMemoryListingRepository>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds a fresh in-memory board, optionally populated with the sample employers and jobs.
pub(crate) fn in_memory_board(seed: bool) -> Result<Arc<BoardService>, AppError> {
    let repository = Arc::new(InMemoryListingRepository::new());
    let service = JobBoardService::new(repository);

    if seed {
        let sample = seed_sample_data(&service)?;
        info!(
            companies = sample.companies.len(),
            jobs = sample.jobs.len(),
            "sample data loaded"
        );
    }

    Ok(Arc::new(service))
}
