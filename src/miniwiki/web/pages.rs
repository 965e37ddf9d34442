//! Page templates and response helpers for the web layer.
//!
//! Templates are inline askama sources; each page is a complete small HTML
//! document sharing the same nav chrome. Entry content arrives here already
//! rendered to HTML by [`crate::markup`] and is the only thing marked
//! `|safe` — everything else goes through the default HTML escaper.

use crate::error::WikiError;
use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use tracing::error;

/// Path of an entry's view page, with the title percent-encoded.
pub(crate) fn wiki_path(title: &str) -> String {
    format!("/wiki/{}", utf8_percent_encode(title, NON_ALPHANUMERIC))
}

/// Path of an entry's edit page.
pub(crate) fn edit_path(title: &str) -> String {
    format!("/edit/{}", utf8_percent_encode(title, NON_ALPHANUMERIC))
}

/// A title plus its pre-encoded view link, ready for a template.
pub(crate) struct EntryLink {
    pub title: String,
    pub href: String,
}

pub(crate) fn entry_links(titles: Vec<String>) -> Vec<EntryLink> {
    titles
        .into_iter()
        .map(|title| EntryLink {
            href: wiki_path(&title),
            title,
        })
        .collect()
}

pub(crate) fn render<T: Template>(template: T) -> Html<String> {
    Html(template.render().unwrap_or_else(|err| {
        error!(error = %err, "Template rendering failed");
        "<h1>Something went wrong</h1>".to_string()
    }))
}

fn error_page(status: StatusCode, heading: &str, message: String) -> Response {
    let page = ErrorPage {
        heading: heading.to_string(),
        message,
    };
    (status, render(page)).into_response()
}

pub(crate) fn not_found(message: String) -> Response {
    error_page(StatusCode::NOT_FOUND, "Page not found", message)
}

pub(crate) fn bad_request(message: impl Into<String>) -> Response {
    error_page(StatusCode::BAD_REQUEST, "Bad request", message.into())
}

pub(crate) fn conflict(message: String) -> Response {
    error_page(StatusCode::CONFLICT, "Entry already exists", message)
}

pub(crate) fn internal_error(err: WikiError) -> Response {
    error!(error = %err, "Request failed against the entry store");
    error_page(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Server error",
        "The wiki storage is unavailable. Please try again later.".to_string(),
    )
}

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Miniwiki</title>
    <style>body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}nav{display:flex;gap:1rem;align-items:center;border-bottom:1px solid #ccc;padding-bottom:.5rem;margin-bottom:1rem}nav form{margin-left:auto}</style>
  </head>
  <body>
    <nav>
      <a href="/">Home</a>
      <a href="/new">New entry</a>
      <a href="/random">Random</a>
      <form action="/search" method="get">
        <input type="search" name="q" placeholder="Search entries" />
        <button type="submit">Search</button>
      </form>
    </nav>
    <h1>All entries</h1>
    {% if entries.is_empty() %}
    <p>No entries yet. <a href="/new">Create the first one.</a></p>
    {% else %}
    <ul>
      {% for entry in entries %}
      <li><a href="{{ entry.href }}">{{ entry.title }}</a></li>
      {% endfor %}
    </ul>
    {% endif %}
  </body>
</html>"#,
    ext = "html"
)]
pub(crate) struct IndexPage {
    pub entries: Vec<EntryLink>,
}

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{{ title }} — Miniwiki</title>
    <style>body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}nav{display:flex;gap:1rem;align-items:center;border-bottom:1px solid #ccc;padding-bottom:.5rem;margin-bottom:1rem}nav form{margin-left:auto}</style>
  </head>
  <body>
    <nav>
      <a href="/">Home</a>
      <a href="/new">New entry</a>
      <a href="/random">Random</a>
      <form action="/search" method="get">
        <input type="search" name="q" placeholder="Search entries" />
        <button type="submit">Search</button>
      </form>
    </nav>
    <article>{{ content_html|safe }}</article>
    <p><a href="{{ edit_href }}">Edit this entry</a></p>
  </body>
</html>"#,
    ext = "html"
)]
pub(crate) struct EntryPage {
    pub title: String,
    pub content_html: String,
    pub edit_href: String,
}

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Search — Miniwiki</title>
    <style>body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}nav{display:flex;gap:1rem;align-items:center;border-bottom:1px solid #ccc;padding-bottom:.5rem;margin-bottom:1rem}nav form{margin-left:auto}</style>
  </head>
  <body>
    <nav>
      <a href="/">Home</a>
      <a href="/new">New entry</a>
      <a href="/random">Random</a>
      <form action="/search" method="get">
        <input type="search" name="q" value="{{ query }}" />
        <button type="submit">Search</button>
      </form>
    </nav>
    <h1>Search results for “{{ query }}”</h1>
    {% if results.is_empty() %}
    <p>No entries matched your search.</p>
    {% else %}
    <ul>
      {% for entry in results %}
      <li><a href="{{ entry.href }}">{{ entry.title }}</a></li>
      {% endfor %}
    </ul>
    {% endif %}
  </body>
</html>"#,
    ext = "html"
)]
pub(crate) struct SearchPage {
    pub query: String,
    pub results: Vec<EntryLink>,
}

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>New entry — Miniwiki</title>
    <style>body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}nav{display:flex;gap:1rem;align-items:center;border-bottom:1px solid #ccc;padding-bottom:.5rem;margin-bottom:1rem}nav form.search{margin-left:auto}label{display:block;margin-bottom:1rem}input[type=text],textarea{width:100%}.error{color:#b00}</style>
  </head>
  <body>
    <nav>
      <a href="/">Home</a>
      <a href="/new">New entry</a>
      <a href="/random">Random</a>
      <form class="search" action="/search" method="get">
        <input type="search" name="q" placeholder="Search entries" />
        <button type="submit">Search</button>
      </form>
    </nav>
    <h1>New entry</h1>
    {% if error.is_some() %}
    <p class="error">{{ error.as_ref().unwrap() }}</p>
    {% endif %}
    <form action="/new" method="post">
      <label>Title
        <input type="text" name="title" value="{{ title }}" />
      </label>
      <label>Content
        <textarea name="content" rows="12">{{ content }}</textarea>
      </label>
      <button type="submit">Save entry</button>
    </form>
  </body>
</html>"#,
    ext = "html"
)]
pub(crate) struct NewPage {
    pub title: String,
    pub content: String,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Edit {{ title }} — Miniwiki</title>
    <style>body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}nav{display:flex;gap:1rem;align-items:center;border-bottom:1px solid #ccc;padding-bottom:.5rem;margin-bottom:1rem}nav form.search{margin-left:auto}label{display:block;margin-bottom:1rem}textarea{width:100%}.error{color:#b00}</style>
  </head>
  <body>
    <nav>
      <a href="/">Home</a>
      <a href="/new">New entry</a>
      <a href="/random">Random</a>
      <form class="search" action="/search" method="get">
        <input type="search" name="q" placeholder="Search entries" />
        <button type="submit">Search</button>
      </form>
    </nav>
    <h1>Edit “{{ title }}”</h1>
    {% if error.is_some() %}
    <p class="error">{{ error.as_ref().unwrap() }}</p>
    {% endif %}
    <form action="{{ action }}" method="post">
      <label>Edit content
        <textarea name="content" rows="12">{{ content }}</textarea>
      </label>
      <button type="submit">Save changes</button>
    </form>
  </body>
</html>"#,
    ext = "html"
)]
pub(crate) struct EditPage {
    pub action: String,
    pub title: String,
    pub content: String,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{{ heading }} — Miniwiki</title>
    <style>body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}nav{display:flex;gap:1rem;align-items:center;border-bottom:1px solid #ccc;padding-bottom:.5rem;margin-bottom:1rem}nav form{margin-left:auto}</style>
  </head>
  <body>
    <nav>
      <a href="/">Home</a>
      <a href="/new">New entry</a>
      <a href="/random">Random</a>
      <form action="/search" method="get">
        <input type="search" name="q" placeholder="Search entries" />
        <button type="submit">Search</button>
      </form>
    </nav>
    <h1>{{ heading }}</h1>
    <p>{{ message }}</p>
    <p><a href="/">Back to all entries</a></p>
  </body>
</html>"#,
    ext = "html"
)]
pub(crate) struct ErrorPage {
    pub heading: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wiki_path_percent_encodes_titles() {
        assert_eq!(wiki_path("Rust"), "/wiki/Rust");
        assert_eq!(wiki_path("Hello World"), "/wiki/Hello%20World");
    }

    #[test]
    fn titles_are_html_escaped_in_listings() {
        let page = IndexPage {
            entries: entry_links(vec!["<script>".to_string()]),
        };
        let html = page.render().unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn entry_content_html_is_not_escaped() {
        let page = EntryPage {
            title: "Rust".to_string(),
            content_html: "<h1>Rust</h1>".to_string(),
            edit_href: edit_path("Rust"),
        };
        let html = page.render().unwrap();
        assert!(html.contains("<h1>Rust</h1>"));
    }
}
