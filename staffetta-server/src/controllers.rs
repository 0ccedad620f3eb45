use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection, Extension, Multipart, Path},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use staffetta_core::{
    protocol::http::non_empty, CreateGroupRequest, Error, ListClientsResponse,
    ListMessagesResponse, Message, Payload, RegisterRequest, SendRequest, StatusResponse, Target,
};
use std::sync::Arc;

use crate::error::ServerResult;
use crate::media::{content_type_for, MediaStore};
use crate::AppState;

/// Handler per POST /register
pub async fn register(
    Extension(state): Extension<Arc<AppState>>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> ServerResult<Json<StatusResponse>> {
    let Json(req) = body?;
    let client = state.clients.register(
        req.id.as_deref().unwrap_or_default(),
        req.ip.as_deref().unwrap_or_default(),
        req.port,
    )?;
    tracing::info!(client_id = %client.id, ip = %client.address.ip, port = %client.address.port, "client registered");
    Ok(Json(StatusResponse::ok()))
}

/// Handler per GET /clients
pub async fn list_clients(Extension(state): Extension<Arc<AppState>>) -> Json<ListClientsResponse> {
    Json(ListClientsResponse { clients: state.clients.list_ids() })
}

/// Handler per POST /group/create
pub async fn create_group(
    Extension(state): Extension<Arc<AppState>>,
    body: Result<Json<CreateGroupRequest>, JsonRejection>,
) -> ServerResult<Json<StatusResponse>> {
    let Json(req) = body?;
    let group = state
        .groups
        .create_or_replace(req.name.as_deref().unwrap_or_default(), req.member_set())?;
    tracing::info!(group = %group.name, members = ?group.members, "group created");
    Ok(Json(StatusResponse::ok()))
}

/// Handler per POST /send (testo, oppure media inline)
pub async fn send(
    Extension(state): Extension<Arc<AppState>>,
    body: Result<Json<SendRequest>, JsonRejection>,
) -> ServerResult<Json<StatusResponse>> {
    let Json(req) = body?;
    let message = Message::try_from(req)?;
    let (from, to, kind) = (message.from.clone(), message.to.clone(), message.payload.kind());
    let len = state.log.append(message).await?;
    tracing::info!(%from, to = %to.as_str(), kind, log_len = len, "message queued");
    Ok(Json(StatusResponse::ok()))
}

/// Handler per POST /send_video (multipart: from_id, to, file e text facoltativo)
pub async fn send_video(
    Extension(state): Extension<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ServerResult<Json<StatusResponse>> {
    let mut multipart = multipart?;

    let mut from = None;
    let mut to = None;
    let mut caption = None;
    let mut upload = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("from_id") => from = Some(field.text().await?),
            Some("to") => to = Some(field.text().await?),
            Some("text") => caption = Some(field.text().await?),
            // qualsiasi campo con un nome file è l'upload
            _ if field.file_name().is_some() => {
                let file_name = field.file_name().map(str::to_string);
                upload = Some((file_name, field.bytes().await?));
            }
            _ => continue,
        }
    }

    // valida tutto prima di scrivere su disco
    let from = non_empty(from, "from_id")?;
    let to = non_empty(to, "to")?;
    let (original_name, bytes) = upload.ok_or_else(|| Error::missing_field("file"))?;

    // scrittura fuori dal lock del log
    let file_name = state.media.save(original_name.as_deref(), &bytes).await?;
    let video_url = MediaStore::url_for(&file_name);

    let message = Message {
        from,
        to: Target::from(to),
        payload: Payload::Video {
            video_url: video_url.clone(),
            text: caption.filter(|t| !t.is_empty()),
        },
    };
    let (from, to) = (message.from.clone(), message.to.clone());
    let len = state.log.append(message).await?;
    tracing::info!(%from, to = %to.as_str(), %file_name, size_bytes = bytes.len(), log_len = len, "video uploaded");

    Ok(Json(StatusResponse::with_video_url(video_url)))
}

/// Handler per GET /video/:filename
pub async fn get_video(
    Extension(state): Extension<Arc<AppState>>,
    Path(file_name): Path<String>,
) -> ServerResult<Response> {
    let bytes = state.media.load(&file_name).await?;
    Ok(([(header::CONTENT_TYPE, content_type_for(&file_name))], bytes).into_response())
}

/// Handler per GET /messages/:client_id
pub async fn list_messages(
    Extension(state): Extension<Arc<AppState>>,
    Path(client_id): Path<String>,
) -> Json<ListMessagesResponse> {
    let messages = state.log.query_for(&client_id, &state.groups).await;
    tracing::debug!(%client_id, count = messages.len(), "messages polled");
    Json(ListMessagesResponse { messages })
}
