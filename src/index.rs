use axum::{debug_handler, extract::State, response::{Html, Redirect}, Form};
use serde::Deserialize;
use time::macros::format_description;
use tracing::{debug, info};

use crate::{include_res, res::html_escape, store::{Message, MessageStore}, validate::validate, AppResult};

pub const PAGE_TITLE: &str = "Guestbook Home";
pub const FAVORITE_MOVIES: [&str; 3] = ["Doraemon", "Boonie bears", "Kimetsu no Yaiba"];

#[derive(Debug, Deserialize)]
pub(crate) struct GuestbookForm {
    name: Option<String>,
    message: Option<String>,
}

#[debug_handler]
pub(crate) async fn index(State(store): State<MessageStore>) -> AppResult<Html<String>> {
    let messages = store.list_all().await?;
    Ok(Html(render_index(&messages)?))
}

// Rejected submissions get the same redirect as accepted ones.
#[debug_handler]
pub(crate) async fn submit(
    State(store): State<MessageStore>,
    Form(GuestbookForm { name, message }): Form<GuestbookForm>,
) -> AppResult<Redirect> {
    match validate(name.as_deref(), message.as_deref()) {
        Ok(new) => {
            let mut tx = store.begin().await?;
            let id = tx.insert(new.name, new.message).await?;
            tx.commit().await?;
            info!(id, "message added from form");
        }
        Err(err) => debug!(%err, "form submission rejected"),
    }

    Ok(Redirect::to("/"))
}

pub(crate) fn render_index(messages: &[Message]) -> AppResult<String> {
    let timestamp = format_description!("[year]-[month]-[day] [hour]:[minute]");

    let mut message_items = String::new();
    for msg in messages {
        message_items += &include_res!(str, "/pages/message_item.html")
            .replace("{created_at}", &msg.created_at.format(timestamp)?)
            .replace("{message}", &html_escape(&msg.message))
            .replace("{name}", &html_escape(&msg.name));
    }

    let mut movie_items = String::new();
    for movie in FAVORITE_MOVIES {
        movie_items += &include_res!(str, "/pages/movie_item.html")
            .replace("{movie}", &html_escape(movie));
    }

    Ok(
        include_res!(str, "/pages/index.html")
            .replace("{page_title}", PAGE_TITLE)
            .replace("{movies}", &movie_items)
            .replace("{messages}", &message_items)
    )
}
