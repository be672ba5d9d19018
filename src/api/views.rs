//! HTML rendering for the web frontend.
//!
//! The pages are small enough that `format!` templates are all that is
//! needed. Every interpolated value goes through [`escape_html`], whether
//! it lands in text or in an attribute.

use axum::response::Redirect;

use crate::{
    management::DEFAULT_LIMIT,
    types::{SavedTrack, TrackRecord},
    utils::escape_html,
};

/// Genres offered in the picker. The search accepts any genre string;
/// this list keeps the frontend to choices that reliably have tracks.
pub const GENRE_CHOICES: &[&str] = &[
    "k-pop",
    "pop",
    "rock",
    "hip-hop",
    "jazz",
    "r&b",
    "indie",
    "dance",
    "electronic",
    "acoustic",
    "classical",
];

const STYLE: &str = r"
body { font-family: system-ui, sans-serif; max-width: 720px; margin: 2rem auto; padding: 0 1rem; color: #222; }
h1 a { color: inherit; text-decoration: none; }
nav { margin-bottom: 1.5rem; }
nav a { margin-right: 1rem; }
form.picker { display: flex; gap: 0.75rem; align-items: flex-end; flex-wrap: wrap; }
form.picker label { display: block; font-size: 0.85rem; }
ul.tracks { list-style: none; padding: 0; }
li.track { display: flex; gap: 1rem; padding: 0.75rem 0; border-bottom: 1px solid #ddd; }
li.track img { width: 64px; height: 64px; object-fit: cover; }
li.track p { margin: 0.25rem 0; }
.flash { padding: 0.5rem 0.75rem; border-radius: 4px; }
.flash.notice { background: #e6f4ea; }
.flash.error { background: #fdecea; }
button { cursor: pointer; }
";

fn layout(title: &str, flash: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
<h1><a href="/">genrec</a></h1>
<nav><a href="/">Search</a> <a href="/saved">Saved tracks</a></nav>
{flash}{body}</body>
</html>
"#,
        title = escape_html(title),
        style = STYLE,
        flash = flash,
        body = body
    )
}

fn flash_block(notice: Option<&str>, error: Option<&str>) -> String {
    let mut block = String::new();
    if let Some(notice) = notice {
        block.push_str(&format!(
            "<p class=\"flash notice\">{}</p>\n",
            escape_html(notice)
        ));
    }
    if let Some(error) = error {
        block.push_str(&format!(
            "<p class=\"flash error\">{}</p>\n",
            escape_html(error)
        ));
    }
    block
}

pub fn index_page(notice: Option<&str>, error: Option<&str>) -> String {
    let options = GENRE_CHOICES
        .iter()
        .map(|genre| {
            format!(
                "<option value=\"{genre}\">{genre}</option>",
                genre = escape_html(genre)
            )
        })
        .collect::<Vec<String>>()
        .join("\n");

    let body = format!(
        r#"<p>Pick a genre and get a random slice of the catalog.</p>
<form class="picker" method="post" action="/recommend">
<div>
<label for="genre">Genre</label>
<select id="genre" name="genre">
{options}
</select>
</div>
<div>
<label for="limit">How many</label>
<input id="limit" name="limit" type="number" min="1" max="50" value="{default_limit}">
</div>
<button type="submit">Recommend</button>
</form>
"#,
        options = options,
        default_limit = DEFAULT_LIMIT
    );

    layout("Genre recommendations", &flash_block(notice, error), &body)
}

pub fn results_page(genre: &str, tracks: &[TrackRecord]) -> String {
    let items = tracks
        .iter()
        .map(track_item)
        .collect::<Vec<String>>()
        .join("\n");

    let body = format!(
        r#"<h2>Tracks for {genre}</h2>
<ul class="tracks">
{items}
</ul>
<p><a href="/">Search again</a></p>
"#,
        genre = escape_html(genre),
        items = items
    );

    layout(&format!("Tracks for {genre}"), "", &body)
}

pub fn saved_page(saved: &[SavedTrack], notice: Option<&str>, error: Option<&str>) -> String {
    let body = if saved.is_empty() {
        String::from("<p>Nothing saved yet. <a href=\"/\">Find some tracks.</a></p>\n")
    } else {
        let items = saved
            .iter()
            .map(saved_item)
            .collect::<Vec<String>>()
            .join("\n");
        format!(
            "<h2>Saved tracks</h2>\n<ul class=\"tracks\">\n{items}\n</ul>\n",
            items = items
        )
    };

    layout("Saved tracks", &flash_block(notice, error), &body)
}

pub fn redirect_with_notice(path: &str, message: &str) -> Redirect {
    Redirect::to(&format!(
        "{path}?notice={message}",
        path = path,
        message = urlencoding::encode(message)
    ))
}

pub fn redirect_with_error(path: &str, message: &str) -> Redirect {
    Redirect::to(&format!(
        "{path}?error={message}",
        path = path,
        message = urlencoding::encode(message)
    ))
}

fn track_item(track: &TrackRecord) -> String {
    list_item(
        &track.name,
        &track.artists,
        track.album.as_deref(),
        track.image.as_deref(),
        track.url.as_deref(),
        &save_form(track),
    )
}

fn saved_item(track: &SavedTrack) -> String {
    list_item(
        &track.name,
        &track.artists,
        track.album.as_deref(),
        track.image.as_deref(),
        track.url.as_deref(),
        &delete_form(&track.id),
    )
}

fn list_item(
    name: &str,
    artists: &str,
    album: Option<&str>,
    image: Option<&str>,
    url: Option<&str>,
    action_form: &str,
) -> String {
    let mut item = String::from("<li class=\"track\">\n");

    if let Some(image) = image {
        item.push_str(&format!(
            "<img src=\"{src}\" alt=\"\">\n",
            src = escape_html(image)
        ));
    }

    item.push_str("<div>\n");
    item.push_str(&format!(
        "<strong>{name}</strong><br>{artists}",
        name = escape_html(name),
        artists = escape_html(artists)
    ));
    if let Some(album) = album {
        item.push_str(&format!("<br><em>{album}</em>", album = escape_html(album)));
    }
    item.push('\n');
    if let Some(url) = url {
        item.push_str(&format!(
            "<p><a href=\"{url}\">Open in Spotify</a></p>\n",
            url = escape_html(url)
        ));
    }
    item.push_str(action_form);
    item.push_str("</div>\n</li>");

    item
}

fn save_form(track: &TrackRecord) -> String {
    format!(
        r#"<form method="post" action="/save">
<input type="hidden" name="name" value="{name}">
<input type="hidden" name="artists" value="{artists}">
<input type="hidden" name="album" value="{album}">
<input type="hidden" name="image" value="{image}">
<input type="hidden" name="url" value="{url}">
<button type="submit">Save</button>
</form>
"#,
        name = escape_html(&track.name),
        artists = escape_html(&track.artists),
        album = escape_html(track.album.as_deref().unwrap_or("")),
        image = escape_html(track.image.as_deref().unwrap_or("")),
        url = escape_html(track.url.as_deref().unwrap_or(""))
    )
}

fn delete_form(id: &str) -> String {
    format!(
        r#"<form method="post" action="/delete">
<input type="hidden" name="id" value="{id}">
<button type="submit">Remove</button>
</form>
"#,
        id = escape_html(id)
    )
}
