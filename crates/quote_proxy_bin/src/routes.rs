use crate::error::ProxyError;
use crate::utils;
use actix_web::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    ContentType,
};
use actix_web::middleware::DefaultHeaders;
use actix_web::{HttpRequest, HttpResponse, Responder, get, guard, web};
use chart_model::Snapshot;
use dashboard::DashboardViewModel;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use yahoo_api::api::YahooAPI;

#[derive(Deserialize)]
struct SymbolQuery {
    symbol: Option<String>,
}

#[derive(Serialize)]
struct StatusResponse {
    status: String,
}

#[derive(Serialize)]
struct NotFoundResponse {
    error: String,
}

/// Headers attached to every proxy response, errors included.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"))
        .add((ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{tail:.*}")
            .guard(guard::Options())
            .to(preflight),
    )
    .service(
        web::resource("/api")
            .route(web::get().to(get_chart))
            .route(web::post().to(get_chart)),
    )
    .service(
        web::resource("/api/view")
            .route(web::get().to(get_chart_view))
            .route(web::post().to(get_chart_view)),
    )
    .service(healthcheck);
}

fn symbol_param(req: &HttpRequest) -> Result<String, ProxyError> {
    let query = web::Query::<SymbolQuery>::from_query(req.query_string()).ok();
    utils::normalize_symbol(query.as_ref().and_then(|q| q.symbol.as_deref()))
        .ok_or(ProxyError::SymbolRequired)
}

async fn fetch_chart(
    req: &HttpRequest,
    api: &YahooAPI,
) -> Result<(String, Box<RawValue>), ProxyError> {
    let symbol = symbol_param(req).inspect_err(|e| warn!("{} error: {}", e.kind(), e))?;

    debug!("fetch_chart | symbol: {}", symbol);

    match api.get_chart(&symbol).await {
        Ok(record) => Ok((symbol, record)),
        Err(e) => {
            let e = ProxyError::from(e);
            warn!("fetch_chart | symbol: {} | {} error: {}", symbol, e.kind(), e);
            Err(e)
        }
    }
}

async fn get_chart(
    req: HttpRequest,
    api: web::Data<YahooAPI>,
) -> Result<HttpResponse, ProxyError> {
    let (_, record) = fetch_chart(&req, &api).await?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(record.get().to_string()))
}

async fn get_chart_view(
    req: HttpRequest,
    api: web::Data<YahooAPI>,
) -> Result<HttpResponse, ProxyError> {
    let (symbol, record) = fetch_chart(&req, &api).await?;
    let snapshot = Snapshot::from_json(record.get()).map_err(|e| {
        let e = ProxyError::from(e);
        warn!("get_chart_view | symbol: {} | {} error: {}", symbol, e.kind(), e);
        e
    })?;
    Ok(HttpResponse::Ok().json(DashboardViewModel::from_snapshot(&snapshot, &symbol)))
}

#[get("/healthcheck")]
async fn healthcheck() -> impl Responder {
    web::Json(StatusResponse {
        status: "ok".to_string(),
    })
}

async fn preflight() -> impl Responder {
    HttpResponse::Ok().finish()
}

pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(NotFoundResponse {
        error: "Not found".to_string(),
    })
}
