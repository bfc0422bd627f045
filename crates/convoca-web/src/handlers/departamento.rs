//! Department listing page — convocatorias of the first department whose
//! title contains the route key.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use convoca_cms::seo::{derive_metadata, Page};
use convoca_cms::{resolve, ContentStore, Lookup, Resolution};
use tracing::warn;

use crate::pages::{error_page, escape, not_found_page, render_document, render_grid};
use crate::state::SharedState;

pub async fn departamento(
    State(state): State<SharedState>,
    Path(department): Path<String>,
) -> Response {
    let global = match state.cms.global().await {
        Ok(global) => global,
        Err(err) => {
            warn!(error = %err, "global config fetch failed, using generic metadata");
            None
        }
    };

    let page = Page::Department(department.clone());
    let meta = derive_metadata(None, global.as_ref(), &page, &state.config);

    match resolve(&state.cms, Lookup::Department(department.clone())).await {
        Ok(Resolution::Listing(convocatorias)) => {
            let body = format!(
                r#"<main class="container">
    <h1>Convocatorias para el departamento de {}</h1>
    {}
</main>"#,
                escape(&department),
                render_grid(&convocatorias, &state.config)
            );
            Html(render_document(&meta, &body)).into_response()
        }
        Ok(_) => not_found_page(&meta),
        Err(err) => {
            warn!(error = %err, department = %department, "department lookup failed");
            error_page(&meta)
        }
    }
}
