//! HTTP client for the remote note endpoint.
//!
//! One function per operation. Responses are reduced to what the board
//! actually consumes: a parsed payload for list/create, a bare status code
//! for update/delete. A request that never produced an HTTP response is
//! reported as [`STATUS_NETWORK_FAILURE`], a status outside the real HTTP
//! range, so callers can treat "server said no" and "server unreachable"
//! uniformly while logs still tell them apart.

use common::model::note::{Note, NoteDraft, NotePage};
use gloo_net::http::Request;

const NOTES_URL: &str = "/meet/user/note";

/// Sentinel status for requests that failed before an HTTP response arrived.
pub const STATUS_NETWORK_FAILURE: u16 = 600;

pub const STATUS_OK: u16 = 200;

/// Fetches one page of notes. Returns `None` on any not-OK outcome,
/// including an unparsable body.
pub async fn list_notes(page: i64, page_size: i64) -> Option<NotePage> {
    let response = Request::get(NOTES_URL)
        .query([
            ("page", page.to_string()),
            ("page_size", page_size.to_string()),
        ])
        .send()
        .await
        .ok()?;
    if response.status() != STATUS_OK {
        return None;
    }
    response.json::<NotePage>().await.ok()
}

/// Posts a new note. On success the server echoes the record back with its
/// assigned id; on failure the normalized status is returned instead.
pub async fn create_note(content: &str) -> Result<Note, u16> {
    let draft = NoteDraft {
        content: content.to_string(),
    };
    let request = match Request::post(NOTES_URL).json(&draft) {
        Ok(request) => request,
        Err(_) => return Err(STATUS_NETWORK_FAILURE),
    };
    match request.send().await {
        Ok(response) if response.status() == STATUS_OK => response
            .json::<Note>()
            .await
            .map_err(|_| STATUS_NETWORK_FAILURE),
        Ok(response) => Err(response.status()),
        Err(_) => Err(STATUS_NETWORK_FAILURE),
    }
}

/// Replaces the content of an existing note. The response body is unused;
/// only the status matters to the card.
pub async fn update_note(id: i32, content: &str) -> u16 {
    let draft = NoteDraft {
        content: content.to_string(),
    };
    let request = match Request::put(&format!("{NOTES_URL}/{id}")).json(&draft) {
        Ok(request) => request,
        Err(_) => return STATUS_NETWORK_FAILURE,
    };
    match request.send().await {
        Ok(response) => response.status(),
        Err(_) => STATUS_NETWORK_FAILURE,
    }
}

pub async fn delete_note(id: i32) -> u16 {
    match Request::delete(&format!("{NOTES_URL}/{id}")).send().await {
        Ok(response) => response.status(),
        Err(_) => STATUS_NETWORK_FAILURE,
    }
}
