//! HTTP handlers for the six wiki operations.
//!
//! Each handler is a thin translation layer: decode the request, call the
//! matching command with the shared store, and turn the outcome into a page
//! or redirect. Store reads take the read lock, the single save in
//! create/edit takes the write lock; no guard is held across an await.

use crate::commands;
use crate::commands::create::CreateOutcome;
use crate::commands::search::SearchOutcome;
use crate::markup;
use crate::store::EntryStore;
use crate::web::pages::{self, EditPage, EntryPage, IndexPage, NewPage, SearchPage};
use crate::web::SharedState;
use axum::extract::{Form, Path, Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;

pub(crate) async fn index<S>(State(state): State<SharedState<S>>) -> Response
where
    S: EntryStore + Send + Sync + 'static,
{
    let result = commands::list::run(&*state.store.read());
    match result {
        Ok(titles) => pages::render(IndexPage {
            entries: pages::entry_links(titles),
        })
        .into_response(),
        Err(err) => pages::internal_error(err),
    }
}

pub(crate) async fn entry<S>(
    State(state): State<SharedState<S>>,
    Path(title): Path<String>,
) -> Response
where
    S: EntryStore + Send + Sync + 'static,
{
    let result = commands::view::run(&*state.store.read(), &title);
    match result {
        Ok(Some(entry)) => pages::render(EntryPage {
            content_html: markup::to_html(&entry.content),
            edit_href: pages::edit_path(&entry.title),
            title: entry.title,
        })
        .into_response(),
        Ok(None) => pages::not_found(format!("The requested page {:?} was not found.", title)),
        Err(err) => pages::internal_error(err),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchParams {
    q: Option<String>,
}

pub(crate) async fn search<S>(
    State(state): State<SharedState<S>>,
    Query(params): Query<SearchParams>,
) -> Response
where
    S: EntryStore + Send + Sync + 'static,
{
    let Some(query) = params.q else {
        return pages::bad_request("Query parameter `q` is required.");
    };
    let query = query.trim().to_string();

    let result = commands::search::run(&*state.store.read(), &query);
    match result {
        Ok(SearchOutcome::Exact(title)) => Redirect::to(&pages::wiki_path(&title)).into_response(),
        Ok(SearchOutcome::Matches(titles)) => pages::render(SearchPage {
            query,
            results: pages::entry_links(titles),
        })
        .into_response(),
        Err(err) => pages::internal_error(err),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct NewEntryForm {
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
}

pub(crate) async fn new_form() -> Response {
    pages::render(NewPage {
        title: String::new(),
        content: String::new(),
        error: None,
    })
    .into_response()
}

pub(crate) async fn new_submit<S>(
    State(state): State<SharedState<S>>,
    Form(form): Form<NewEntryForm>,
) -> Response
where
    S: EntryStore + Send + Sync + 'static,
{
    let title = form.title.trim().to_string();
    let content = form.content.trim().to_string();
    if title.is_empty() || content.is_empty() {
        // Validation feedback, not a page-level error: re-render the form
        // with whatever was submitted so nothing typed is lost.
        return pages::render(NewPage {
            title: form.title,
            content: form.content,
            error: Some("Both title and content are required.".to_string()),
        })
        .into_response();
    }

    let result = commands::create::run(&mut *state.store.write(), &title, &content);
    match result {
        Ok(CreateOutcome::Created) => Redirect::to(&pages::wiki_path(&title)).into_response(),
        Ok(CreateOutcome::Duplicate(existing)) => {
            pages::conflict(format!("An entry titled {:?} already exists.", existing))
        }
        Err(err) => pages::internal_error(err),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct EditEntryForm {
    #[serde(default)]
    content: String,
}

pub(crate) async fn edit_form<S>(
    State(state): State<SharedState<S>>,
    Path(title): Path<String>,
) -> Response
where
    S: EntryStore + Send + Sync + 'static,
{
    let result = commands::edit::load(&*state.store.read(), &title);
    match result {
        Ok(Some(content)) => pages::render(EditPage {
            action: pages::edit_path(&title),
            title,
            content,
            error: None,
        })
        .into_response(),
        Ok(None) => pages::not_found(format!("The requested page {:?} was not found.", title)),
        Err(err) => pages::internal_error(err),
    }
}

pub(crate) async fn edit_submit<S>(
    State(state): State<SharedState<S>>,
    Path(title): Path<String>,
    Form(form): Form<EditEntryForm>,
) -> Response
where
    S: EntryStore + Send + Sync + 'static,
{
    let content = form.content.trim().to_string();
    if content.is_empty() {
        return pages::render(EditPage {
            action: pages::edit_path(&title),
            title,
            content: form.content,
            error: Some("Content is required.".to_string()),
        })
        .into_response();
    }

    let result = commands::edit::run(&mut *state.store.write(), &title, &content);
    match result {
        Ok(()) => Redirect::to(&pages::wiki_path(&title)).into_response(),
        Err(err) => pages::internal_error(err),
    }
}

pub(crate) async fn random<S>(State(state): State<SharedState<S>>) -> Response
where
    S: EntryStore + Send + Sync + 'static,
{
    let result = commands::random::run(&*state.store.read());
    match result {
        Ok(Some(title)) => Redirect::to(&pages::wiki_path(&title)).into_response(),
        Ok(None) => pages::not_found("No entries found.".to_string()),
        Err(err) => pages::internal_error(err),
    }
}
