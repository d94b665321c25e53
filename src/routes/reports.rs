use axum::{Json, extract::State};

use crate::{middleware::auth::AuthUser, models::ReportTables, state::AppState};

// The gate is header presence only: the role in the token is not compared,
// so any authenticated caller can read the tables. The admin-only check
// lives in the presentation layer. See DESIGN.md.
#[utoipa::path(
    get,
    path = "/api/reports",
    responses(
        (status = 200, description = "Aggregate report tables", body = ReportTables),
        (status = 401, description = "Missing Authorization header"),
    ),
    security(("bearer_auth" = [])),
    tag = "Reports"
)]
pub async fn get_reports(State(state): State<AppState>, _user: AuthUser) -> Json<ReportTables> {
    Json(state.reports.tables())
}
