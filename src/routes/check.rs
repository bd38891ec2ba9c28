use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Utc;
use serde::Deserialize;

use crate::config::Config;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::services::{resolve_channel_id, Admission, QuotaService, StreamerLinkService};
use crate::youtube::YouTubeApi;

/// Query parameters of the check endpoint
#[derive(Debug, Deserialize)]
pub struct CheckParams {
    pub twitch: Option<String>,
    #[serde(rename = "ytUrl")]
    pub yt_url: Option<String>,
}

/// GET /check?twitch=<name>&ytUrl=<url>
///
/// Resolves the YouTube channel behind `ytUrl`, checks whether it is live,
/// and caches the result per Twitch username. Linear pipeline with early
/// exits: quota (429) → cache (200 cached) → resolve (404) → live check →
/// cache write → 200.
pub async fn check_streamer(
    pool: web::Data<DbPool>,
    config: web::Data<Config>,
    api: web::Data<Arc<dyn YouTubeApi>>,
    req: HttpRequest,
    params: web::Query<CheckParams>,
) -> AppResult<HttpResponse> {
    // 1. Per-IP throttle, before anything else. The throttle guards the
    //    endpoint itself, so even an invalid probe consumes a unit.
    let caller_key = caller_key(&req);
    match QuotaService::admit(pool.get_ref(), &caller_key, config.quota.daily_limit).await? {
        Admission::Admitted => {}
        Admission::Rejected => {
            log::warn!("Daily limit exceeded for {}", caller_key);
            return Err(AppError::QuotaExceeded);
        }
    }

    // 2. Validate parameters. The subject key is case-folded to lowercase.
    let twitch = params
        .twitch
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();
    let yt_url = params.yt_url.clone().unwrap_or_default();
    if twitch.is_empty() || yt_url.is_empty() {
        return Err(AppError::Validation("Missing twitch or ytUrl".to_string()));
    }

    let now = Utc::now();

    // 3. Serve from cache while the record is fresh.
    if let Some(link) = StreamerLinkService::get(pool.get_ref(), &twitch).await? {
        if link.is_fresh(now, config.cache.ttl_hours) {
            return Ok(HttpResponse::Ok().json(link.to_response(true)));
        }
    }

    // 4. Resolve the channel id; unresolvable URLs are a 404, not a fault.
    let channel_id = resolve_channel_id(api.get_ref().as_ref(), &yt_url)
        .await?
        .ok_or(AppError::InvalidYoutubeUrl)?;

    // 5. Live check. A transport failure here aborts the request before
    //    anything is written, so a retry re-resolves cleanly.
    let is_live = api.has_live_stream(&channel_id).await?;

    // 6. Overwrite the cached record wholesale.
    let link = StreamerLinkService::upsert(
        pool.get_ref(),
        &twitch,
        &yt_url,
        &channel_id,
        is_live,
        now,
    )
    .await?;

    Ok(HttpResponse::Ok().json(link.to_response(false)))
}

/// Caller identity: first X-Forwarded-For entry, else the peer address.
fn caller_key(req: &HttpRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string()
}

/// Configures the check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(check_streamer))
        .route("/check", web::get().to(check_streamer));
}
