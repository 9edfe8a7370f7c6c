//! Bundle of the portal services sharing one invoker

use std::sync::Arc;

use crate::catalog::CatalogReader;
use crate::orchestration::RequestOrchestrator;
use crate::ports::RemoteInvoker;
use crate::report::ReportExporter;
use crate::submission::SubmissionService;

/// All CZDS services wired to the same [`RemoteInvoker`].
#[derive(Clone)]
pub struct CzdsServices {
    pub catalog: CatalogReader,
    pub submission: SubmissionService,
    pub orchestrator: RequestOrchestrator,
    pub reports: ReportExporter,
}

impl CzdsServices {
    pub fn new(invoker: Arc<dyn RemoteInvoker>) -> Self {
        let catalog = CatalogReader::new(invoker.clone());
        let submission = SubmissionService::new(invoker.clone());
        Self {
            orchestrator: RequestOrchestrator::new(catalog.clone(), submission.clone()),
            catalog,
            submission,
            reports: ReportExporter::new(invoker),
        }
    }
}
