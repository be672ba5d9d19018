use std::sync::Arc;

use axum::{
    Extension, Form,
    response::{Html, Redirect},
};

use crate::{
    api::views,
    config::Config,
    management::{self, DEFAULT_LIMIT},
    types::RecommendForm,
    warning,
};

pub async fn recommend(
    Extension(config): Extension<Arc<Config>>,
    Form(form): Form<RecommendForm>,
) -> Result<Html<String>, Redirect> {
    let genre = form.genre.trim().to_string();
    if genre.is_empty() {
        return Err(views::redirect_with_error("/", "Pick a genre first."));
    }

    // Anything unusable in the count field falls back to the default.
    let limit = form
        .limit
        .as_deref()
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|&value| value >= 1)
        .unwrap_or(DEFAULT_LIMIT);

    match management::search_tracks_by_genre(&config, &genre, limit).await {
        Ok(tracks) if tracks.is_empty() => Err(views::redirect_with_notice(
            "/",
            &format!("No tracks found for genre \"{genre}\". Try another one."),
        )),
        Ok(tracks) => Ok(Html(views::results_page(&genre, &tracks))),
        Err(e) => {
            warning!("Recommendation for genre '{}' failed: {}", genre, e);
            Err(views::redirect_with_error("/", e.user_message()))
        }
    }
}
