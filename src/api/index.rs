use std::collections::HashMap;

use axum::{extract::Query, response::Html};

use crate::api::views;

pub async fn index(Query(params): Query<HashMap<String, String>>) -> Html<String> {
    Html(views::index_page(
        params.get("notice").map(String::as_str),
        params.get("error").map(String::as_str),
    ))
}
