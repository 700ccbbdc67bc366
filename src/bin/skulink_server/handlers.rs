use serde::{Deserialize, Serialize};

use super::http_error::lookup_error;
use super::*;

#[derive(Debug, Serialize)]
pub(super) struct ChannelSkusResponse {
    central_id: String,
    channel: String,
    channel_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct CentralSkusResponse {
    channel_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    channel: Option<String>,
    central_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct LinkedResponse {
    central_id: String,
    channel: String,
    linked: bool,
}

#[derive(Debug, Deserialize)]
pub(super) struct ChannelQuery {
    channel: Option<String>,
}

pub(super) async fn healthz() -> &'static str {
    "ok"
}

pub(super) async fn list_channels(State(resolver): State<Arc<Resolver>>) -> Json<Vec<ChannelChoice>> {
    Json(resolver.channel_choices())
}

pub(super) async fn channel_skus(
    State(resolver): State<Arc<Resolver>>,
    Path((central_id, channel)): Path<(String, String)>,
) -> Response {
    let canonical = match resolver.canonical_channel(&channel) {
        Ok(c) => c.to_string(),
        Err(err) => return lookup_error(err),
    };
    match resolver.channel_ids_for(&central_id, &canonical) {
        Ok(ids) => Json(ChannelSkusResponse {
            central_id,
            channel: canonical,
            channel_ids: ids.to_vec(),
        })
        .into_response(),
        Err(err) => lookup_error(err),
    }
}

pub(super) async fn central_skus(
    State(resolver): State<Arc<Resolver>>,
    Path(channel_id): Path<String>,
    Query(q): Query<ChannelQuery>,
) -> Response {
    let canonical = match q.channel.as_deref().map(|c| resolver.canonical_channel(c)).transpose() {
        Ok(c) => c.map(str::to_string),
        Err(err) => return lookup_error(err),
    };
    match resolver.central_ids_for(&channel_id, canonical.as_deref()) {
        Ok(central_ids) => Json(CentralSkusResponse {
            channel_id,
            channel: canonical,
            central_ids,
        })
        .into_response(),
        Err(err) => lookup_error(err),
    }
}

pub(super) async fn linked(
    State(resolver): State<Arc<Resolver>>,
    Path((central_id, channel)): Path<(String, String)>,
) -> Response {
    let canonical = match resolver.canonical_channel(&channel) {
        Ok(c) => c.to_string(),
        Err(err) => return lookup_error(err),
    };
    match resolver.is_linked(&central_id, &canonical) {
        Ok(linked) => Json(LinkedResponse {
            central_id,
            channel: canonical,
            linked,
        })
        .into_response(),
        Err(err) => lookup_error(err),
    }
}
