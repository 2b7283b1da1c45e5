// Application state for HTTP handlers
use crate::application::costs_service::CostsService;
use crate::application::overview_service::OverviewService;
use crate::application::reports_service::ReportsService;
use crate::application::trends_service::TrendsService;
use crate::application::venues_service::VenuesService;

#[derive(Clone)]
pub struct AppState {
    pub overview: OverviewService,
    pub trends: TrendsService,
    pub costs: CostsService,
    pub venues: VenuesService,
    pub reports: ReportsService,
}
