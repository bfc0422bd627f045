//! Shared page-rendering helpers: document shell, head block, card grid,
//! and the Strapi rich-block renderer. CMS values are untrusted and are
//! escaped before interpolation.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use convoca_cms::model::{Convocatoria, Related};
use convoca_cms::seo::Metadata;
use convoca_common::Config;
use serde_json::Value;

/// Navigation HTML shared across all pages.
pub const NAV_HTML: &str = include_str!("../templates/nav.html");

/// Minimal HTML escaping for text and attribute positions.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the `<head>` contents from a derived metadata block.
pub fn render_head(meta: &Metadata) -> String {
    let mut head = format!(
        "    <title>{}</title>\n    <meta name=\"description\" content=\"{}\">\n",
        escape(&meta.title),
        escape(&meta.description)
    );
    if let Some(icon) = &meta.icon {
        head.push_str(&format!("    <link rel=\"icon\" href=\"{}\">\n", escape(icon)));
    }

    let og = &meta.open_graph;
    head.push_str(&format!(
        "    <meta property=\"og:title\" content=\"{}\">\n",
        escape(&og.title)
    ));
    head.push_str(&format!(
        "    <meta property=\"og:description\" content=\"{}\">\n",
        escape(&og.description)
    ));
    head.push_str(&format!(
        "    <meta property=\"og:url\" content=\"{}\">\n",
        escape(&og.url)
    ));
    head.push_str(&format!(
        "    <meta property=\"og:type\" content=\"{}\">\n",
        og.kind
    ));
    for image in &og.images {
        head.push_str(&format!(
            "    <meta property=\"og:image\" content=\"{}\">\n",
            escape(&image.url)
        ));
        head.push_str(&format!(
            "    <meta property=\"og:image:width\" content=\"{}\">\n",
            image.width
        ));
        head.push_str(&format!(
            "    <meta property=\"og:image:height\" content=\"{}\">\n",
            image.height
        ));
        head.push_str(&format!(
            "    <meta property=\"og:image:alt\" content=\"{}\">\n",
            escape(&image.alt)
        ));
    }
    if let Some(site_name) = &og.site_name {
        head.push_str(&format!(
            "    <meta property=\"og:site_name\" content=\"{}\">\n",
            escape(site_name)
        ));
    }
    head
}

/// Full HTML document: head block, shared nav, page body.
pub fn render_document(meta: &Metadata, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
{head}    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{nav}
{body}
</body>
</html>"#,
        head = render_head(meta),
        nav = NAV_HTML,
        body = body
    )
}

pub fn join_titles(items: &[Related]) -> String {
    items
        .iter()
        .map(|r| r.title.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn card_row(label: &str, items: &[Related]) -> String {
    if items.is_empty() {
        return String::new();
    }
    format!(
        r#"<div class="card-row"><span class="card-label">{label}:</span> {}</div>"#,
        escape(&join_titles(items))
    )
}

/// One convocatoria card, linking to its detail page.
pub fn render_card(conv: &Convocatoria, cfg: &Config) -> String {
    let cover = conv
        .cover
        .as_ref()
        .map(|m| {
            format!(
                r#"<img class="card-cover" src="{}" alt="{}">"#,
                escape(&cfg.media_url(&m.url)),
                escape(&conv.title)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<a class="card" href="/{slug}">
    {cover}
    <div class="card-body">
        <h2>{title}</h2>
        {carreras}
        {formacions}
    </div>
</a>"#,
        slug = escape(&conv.slug),
        cover = cover,
        title = escape(&conv.title),
        carreras = card_row("Carrera", &conv.carreras),
        formacions = card_row("Formación", &conv.formacions),
    )
}

/// Card grid, or the empty-state message when nothing is available.
pub fn render_grid(convocatorias: &[Convocatoria], cfg: &Config) -> String {
    if convocatorias.is_empty() {
        return r#"<p class="empty-state">No hay convocatorias disponibles.</p>"#.to_string();
    }
    let cards: String = convocatorias.iter().map(|c| render_card(c, cfg)).collect();
    format!(r#"<div class="grid">{cards}</div>"#)
}

/// Render a Strapi rich-block sequence to HTML.
/// Supports paragraph, heading, list, quote, image, link, and text marks;
/// unknown block types fall through to their children.
pub fn render_blocks(blocks: &[Value]) -> String {
    blocks.iter().map(render_block).collect()
}

fn render_block(node: &Value) -> String {
    match node["type"].as_str() {
        Some("paragraph") => format!("<p>{}</p>", render_children(node)),
        Some("heading") => {
            let level = node["level"].as_u64().unwrap_or(2).clamp(1, 6);
            format!("<h{level}>{}</h{level}>", render_children(node))
        }
        Some("list") => {
            let tag = if node["format"].as_str() == Some("ordered") {
                "ol"
            } else {
                "ul"
            };
            let items: String = node["children"]
                .as_array()
                .map(|items| {
                    items
                        .iter()
                        .map(|item| format!("<li>{}</li>", render_children(item)))
                        .collect()
                })
                .unwrap_or_default();
            format!("<{tag}>{items}</{tag}>")
        }
        Some("quote") => format!("<blockquote>{}</blockquote>", render_children(node)),
        Some("image") => node["image"]["url"]
            .as_str()
            .map(|url| {
                format!(
                    r#"<img src="{}" alt="{}">"#,
                    escape(url),
                    escape(node["image"]["alternativeText"].as_str().unwrap_or(""))
                )
            })
            .unwrap_or_default(),
        _ => render_children(node),
    }
}

fn render_children(node: &Value) -> String {
    node["children"]
        .as_array()
        .map(|children| children.iter().map(render_inline).collect())
        .unwrap_or_default()
}

fn render_inline(node: &Value) -> String {
    if node["type"].as_str() == Some("link") {
        let href = node["url"].as_str().unwrap_or("#");
        return format!(
            r#"<a href="{}">{}</a>"#,
            escape(href),
            render_children(node)
        );
    }

    let mut text = escape(node["text"].as_str().unwrap_or(""));
    if node["code"].as_bool().unwrap_or(false) {
        text = format!("<code>{text}</code>");
    }
    if node["bold"].as_bool().unwrap_or(false) {
        text = format!("<strong>{text}</strong>");
    }
    if node["italic"].as_bool().unwrap_or(false) {
        text = format!("<em>{text}</em>");
    }
    if node["underline"].as_bool().unwrap_or(false) {
        text = format!("<u>{text}</u>");
    }
    if node["strikethrough"].as_bool().unwrap_or(false) {
        text = format!("<s>{text}</s>");
    }
    text
}

/// Standard 404 response, distinct from an empty listing.
pub fn not_found_page(meta: &Metadata) -> Response {
    let body = r#"<main class="container">
    <h1>Página no encontrada</h1>
    <p>La convocatoria o el departamento que buscas no existe.</p>
    <p><a href="/">Volver al inicio</a></p>
</main>"#;
    (StatusCode::NOT_FOUND, Html(render_document(meta, body))).into_response()
}

/// Request-scoped failure page; the process keeps serving.
pub fn error_page(meta: &Metadata) -> Response {
    let body = r#"<main class="container">
    <h1>Algo salió mal</h1>
    <p>No pudimos obtener la información. Inténtalo de nuevo más tarde.</p>
</main>"#;
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(render_document(meta, body)),
    )
        .into_response()
}
