use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension, Form,
    extract::Query,
    response::{Html, Redirect},
};

use crate::{
    api::views,
    management::SavedTrackStore,
    types::{DeleteForm, SaveForm, TrackRecord},
    utils, warning,
};

pub async fn save_track(
    Extension(store): Extension<Arc<SavedTrackStore>>,
    Form(form): Form<SaveForm>,
) -> Redirect {
    let record = TrackRecord {
        name: form.name,
        artists: form.artists,
        album: utils::none_if_empty(form.album),
        image: utils::none_if_empty(form.image),
        url: utils::none_if_empty(form.url),
    };

    match store.insert(record).await {
        Ok(_) => views::redirect_with_notice("/saved", "Track saved."),
        Err(e) => {
            warning!("Failed to save track: {}", e);
            views::redirect_with_error("/saved", "Could not save the track.")
        }
    }
}

pub async fn list_saved(
    Extension(store): Extension<Arc<SavedTrackStore>>,
    Query(params): Query<HashMap<String, String>>,
) -> Html<String> {
    let saved = store.list_all().await;
    Html(views::saved_page(
        &saved,
        params.get("notice").map(String::as_str),
        params.get("error").map(String::as_str),
    ))
}

pub async fn delete_saved(
    Extension(store): Extension<Arc<SavedTrackStore>>,
    Form(form): Form<DeleteForm>,
) -> Redirect {
    match store.delete(&form.id).await {
        Ok(()) => Redirect::to("/saved"),
        Err(e) => {
            warning!("Failed to delete saved track: {}", e);
            views::redirect_with_error("/saved", "Could not remove the track.")
        }
    }
}
