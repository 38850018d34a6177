use salvo::writing::Json;
use salvo::{Depot, Request, Response, handler};
use serde::{Deserialize, Serialize};

use myticket_core::datetime::format_display_date;
use myticket_schedule::cycle::{CycleRecord, RuleLimits, expand};

use crate::config::get_config_from_depot;
use crate::error::{AppError, AppResult, render_error};

/// ## Summary
/// Expansion response payload
#[derive(Debug, Serialize, Deserialize)]
pub struct ExpandResponse {
    pub dates: Vec<String>,
    pub count: usize,
}

/// ## Summary
/// POST /api/cycles/expand - Expand a cycle record into its occurrence dates
///
/// Dates are ISO `YYYY-MM-DD` unless the query has `format=display`, in which
/// case they are `dd-mm-yyyy`.
///
/// ## Errors
/// Returns HTTP 400 if the body is not a valid cycle record
/// Returns HTTP 422 if the rule spans more days than configured
/// Returns HTTP 500 if the configuration is missing from the depot
#[handler]
pub async fn expand_cycle(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match expand_request(req, depot).await {
        Ok(body) => res.render(Json(body)),
        Err(err) => render_error(res, &err),
    }
}

async fn expand_request(req: &mut Request, depot: &Depot) -> AppResult<ExpandResponse> {
    let settings = get_config_from_depot(depot)?;
    let display = req.query::<String>("format").as_deref() == Some("display");

    let record: CycleRecord = req.parse_json().await.map_err(|err| {
        tracing::debug!(error = %err, "Failed to parse cycle record");
        AppError::BadRequest("Invalid request body".to_string())
    })?;

    let rule = record.to_rule()?;
    RuleLimits::from(&settings.cycle).check(&rule)?;

    let dates: Vec<String> = expand(&rule)
        .into_iter()
        .map(|date| {
            if display {
                format_display_date(date)
            } else {
                date.to_string()
            }
        })
        .collect();

    tracing::debug!(
        model = rule.pattern.model_name(),
        source_task = ?rule.source_task,
        count = dates.len(),
        "Expanded cycle"
    );

    Ok(ExpandResponse {
        count: dates.len(),
        dates,
    })
}
