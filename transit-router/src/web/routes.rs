//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{error, warn};

use crate::domain::LineId;
use crate::network::Interchange;
use crate::planner::{Planner, RouteError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/lines", get(list_lines))
        .route("/api/lines/:line_id", get(get_line))
        .route("/api/interchanges", get(list_interchanges))
        .route("/api/route", get(find_route))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// All lines with their stations, in network order.
async fn list_lines(State(state): State<AppState>) -> Json<LinesResponse> {
    let lines = state.network.lines().iter().map(LineView::from_line).collect();
    Json(LinesResponse { lines })
}

/// A single line.
async fn get_line(
    State(state): State<AppState>,
    Path(line_id): Path<String>,
) -> Result<Json<LineView>, AppError> {
    let line = state
        .network
        .line(&LineId::new(line_id.as_str()))
        .ok_or_else(|| AppError::NotFound {
            message: format!("unknown line: {line_id}"),
        })?;
    Ok(Json(LineView::from_line(line)))
}

/// Stations shared by two or more lines.
async fn list_interchanges(State(state): State<AppState>) -> Json<Vec<Interchange>> {
    Json(state.network.interchanges())
}

/// Find a route between two (line, station) pairs.
async fn find_route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let origin_line = required(req.origin_line, "origin_line")?;
    let origin_station = required(req.origin_station, "origin_station")?;
    let dest_line = required(req.dest_line, "dest_line")?;
    let dest_station = required(req.dest_station, "dest_station")?;

    let route = Planner::new(&state.network).find_route(
        &origin_line,
        &origin_station,
        &dest_line,
        &dest_station,
    )?;

    Ok(Json(RouteResponse::from_route(&route, &state.network)))
}

fn required(value: Option<String>, name: &str) -> Result<String, AppError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest {
            message: format!("missing query parameter: {name}"),
        })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Route(RouteError),
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        AppError::Route(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, kind) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone(), None),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone(), None),
            AppError::Route(e @ RouteError::StationNotFound { .. }) => {
                (StatusCode::NOT_FOUND, e.to_string(), Some(e.kind()))
            }
            AppError::Route(e @ RouteError::NoPathFound { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string(), Some(e.kind()))
            }
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse {
            error: message,
            kind,
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Line, Station};
    use crate::network::Network;

    fn state() -> AppState {
        let line = |id: &str, stations: &[&str]| {
            let stations = stations
                .iter()
                .map(|s| Station::new(*s, s.to_uppercase()))
                .collect();
            Line::new(id, format!("Line {id}"), stations).unwrap()
        };
        AppState::new(
            Network::new(vec![
                line("A", &["p", "q", "r"]),
                line("B", &["q", "s"]),
                line("X", &["x1", "x2"]),
            ])
            .unwrap(),
        )
    }

    fn request(ol: &str, os: &str, dl: &str, ds: &str) -> RouteRequest {
        RouteRequest {
            origin_line: Some(ol.to_string()),
            origin_station: Some(os.to_string()),
            dest_line: Some(dl.to_string()),
            dest_station: Some(ds.to_string()),
        }
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn route_with_transfer() {
        let Json(resp) = find_route(State(state()), Query(request("A", "p", "B", "s")))
            .await
            .unwrap();

        assert_eq!(resp.changes, 1);
        assert_eq!(resp.legs.len(), 2);
        assert_eq!(resp.legs[0].board_name, "P");
        assert_eq!(resp.legs[0].alight_at, "q");
        assert_eq!(resp.legs[0].direction_terminus.as_deref(), Some("R"));
        assert_eq!(resp.legs[1].line_name, "Line B");
    }

    #[tokio::test]
    async fn parameters_are_trimmed() {
        let Json(resp) = find_route(State(state()), Query(request(" A ", "p", "A", "r ")))
            .await
            .unwrap();
        assert_eq!(resp.changes, 0);
    }

    #[tokio::test]
    async fn missing_parameter_is_bad_request() {
        let mut req = request("A", "p", "B", "s");
        req.dest_station = None;
        let err = find_route(State(state()), Query(req)).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err = find_route(State(state()), Query(request("A", "  ", "B", "s")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn unknown_station_is_not_found() {
        let err = find_route(State(state()), Query(request("A", "s", "B", "s")))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Route(RouteError::StationNotFound { .. })
        ));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn disconnected_is_server_error() {
        let err = find_route(State(state()), Query(request("A", "p", "X", "x2")))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn lines_and_single_line() {
        let Json(resp) = list_lines(State(state())).await;
        assert_eq!(resp.lines.len(), 3);
        assert_eq!(resp.lines[1].id, "B");

        let Json(line) = get_line(State(state()), Path("A".to_string())).await.unwrap();
        assert_eq!(line.stations.len(), 3);

        let err = get_line(State(state()), Path("Z".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn interchanges_listed() {
        let Json(interchanges) = list_interchanges(State(state())).await;
        assert_eq!(interchanges.len(), 1);
        assert_eq!(interchanges[0].station_id.as_str(), "q");
    }
}
