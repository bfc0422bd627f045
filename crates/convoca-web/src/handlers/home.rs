//! Root listing — grid of convocatorias still inside their active window.

use axum::{extract::State, response::Html};
use chrono::Utc;
use convoca_cms::seo::{derive_metadata, Page};
use convoca_cms::{resolve, ContentStore, Lookup, Resolution};
use tracing::warn;

use crate::pages::{render_document, render_grid};
use crate::state::SharedState;

pub async fn home(State(state): State<SharedState>) -> Html<String> {
    // Metadata degrades to generic strings if the global record is
    // unreachable; the page itself still renders.
    let global = match state.cms.global().await {
        Ok(global) => global,
        Err(err) => {
            warn!(error = %err, "global config fetch failed, using generic metadata");
            None
        }
    };

    // The active instant is computed once per request. A store failure
    // degrades to an empty grid inside the resolver.
    let convocatorias = match resolve(&state.cms, Lookup::ActiveAt(Utc::now())).await {
        Ok(Resolution::Listing(list)) => list,
        _ => Vec::new(),
    };

    let meta = derive_metadata(None, global.as_ref(), &Page::Home, &state.config);
    let body = format!(
        r#"<main class="container">
    <h1>Convocatorias</h1>
    {}
</main>"#,
        render_grid(&convocatorias, &state.config)
    );
    Html(render_document(&meta, &body))
}
