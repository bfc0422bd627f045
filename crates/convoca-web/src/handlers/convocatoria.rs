//! Convocatoria detail page. One slug lookup feeds both the render model
//! and the metadata derivation.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use convoca_cms::model::{Convocatoria, Related};
use convoca_cms::seo::{derive_metadata, Page};
use convoca_cms::{resolve, Lookup, Resolution};
use convoca_common::Config;
use tracing::warn;

use crate::pages::{
    error_page, escape, join_titles, not_found_page, render_blocks, render_document,
};
use crate::state::SharedState;

pub async fn convocatoria(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
) -> Response {
    let page = Page::Convocatoria(slug.clone());

    match resolve(&state.cms, Lookup::Slug(slug.clone())).await {
        Ok(Resolution::Detail(conv)) => {
            let meta = derive_metadata(Some(&conv), None, &page, &state.config);
            let body = render_detail(&conv, &state.config);
            Html(render_document(&meta, &body)).into_response()
        }
        Ok(_) => {
            let meta = derive_metadata(None, None, &page, &state.config);
            not_found_page(&meta)
        }
        Err(err) => {
            warn!(error = %err, slug = %slug, "convocatoria lookup failed");
            let meta = derive_metadata(None, None, &page, &state.config);
            error_page(&meta)
        }
    }
}

fn relation_value(items: &[Related]) -> String {
    let joined = join_titles(items);
    if joined.is_empty() {
        "No disponible".to_string()
    } else {
        escape(&joined)
    }
}

fn render_detail(conv: &Convocatoria, cfg: &Config) -> String {
    let logo = conv
        .logo
        .as_ref()
        .map(|m| {
            format!(
                r#"<img class="detail-logo" src="{}" alt="Logo">"#,
                escape(&cfg.media_url(&m.url))
            )
        })
        .unwrap_or_default();

    let description = conv
        .description
        .as_deref()
        .map(|d| format!(r#"<p class="detail-description">{}</p>"#, escape(d)))
        .unwrap_or_default();

    let organizacion = conv
        .organizacion
        .as_ref()
        .map(|o| escape(&o.title))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "No disponible".to_string());

    let finaliza = conv
        .enddate
        .map(|end| {
            format!(
                r#"<p class="detail-field detail-field-wide"><strong>Finaliza:</strong> {}</p>"#,
                end.format("%d/%m/%Y")
            )
        })
        .unwrap_or_default();

    // The detail section only exists when the body has blocks; an empty
    // block sequence renders no section at all.
    let detalles = if conv.has_content() {
        format!(
            r#"<section class="detail-content">
        <h2>Detalles de la Convocatoria</h2>
        <div class="blocks">{}</div>
    </section>"#,
            render_blocks(conv.content.as_deref().unwrap_or(&[]))
        )
    } else {
        String::new()
    };

    format!(
        r#"<main class="container">
    <div class="detail-header">
        {logo}
        <h1>{title}</h1>
    </div>
    {description}
    <div class="detail-fields">
        <p class="detail-field"><strong>Organización:</strong> {organizacion}</p>
        <p class="detail-field"><strong>Departamentos:</strong> {departamentos}</p>
        <p class="detail-field"><strong>Carreras:</strong> {carreras}</p>
        <p class="detail-field"><strong>Formaciones:</strong> {formacions}</p>
        {finaliza}
    </div>
    {detalles}
</main>"#,
        logo = logo,
        title = escape(&conv.title),
        description = description,
        organizacion = organizacion,
        departamentos = relation_value(&conv.departamentos),
        carreras = relation_value(&conv.carreras),
        formacions = relation_value(&conv.formacions),
        finaliza = finaliza,
        detalles = detalles,
    )
}
