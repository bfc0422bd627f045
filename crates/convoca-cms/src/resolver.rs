//! Route-key resolution.
//! One parameterized operation covers the three addressing modes the site
//! serves; each mode has its own not-found / degradation rules.

use chrono::{DateTime, Utc};
use convoca_common::error::Result;
use tracing::{debug, warn};

use crate::model::Convocatoria;
use crate::store::ContentStore;

/// Addressing mode for a page request.
#[derive(Debug, Clone)]
pub enum Lookup {
    /// Detail lookup by exact slug.
    Slug(String),
    /// Convocatorias of the first department whose title contains the key.
    Department(String),
    /// Convocatorias still open at the given instant.
    ActiveAt(DateTime<Utc>),
}

/// Outcome of a resolution.
///
/// `NotFound` is distinct from `Listing(vec![])`: slug and department
/// lookups treat zero matches as not-found, the active-window listing
/// treats them as a valid empty state.
#[derive(Debug)]
pub enum Resolution {
    Detail(Convocatoria),
    Listing(Vec<Convocatoria>),
    NotFound,
}

pub async fn resolve(store: &dyn ContentStore, lookup: Lookup) -> Result<Resolution> {
    match lookup {
        Lookup::Slug(slug) => {
            let matches = store.by_slug(&slug).await?;
            if matches.len() > 1 {
                // Slugs are unique among published entities; tolerate the
                // anomaly and take the store's first match.
                debug!(slug = %slug, count = matches.len(), "multiple entities share a slug");
            }
            match matches.into_iter().next() {
                Some(conv) => Ok(Resolution::Detail(conv)),
                None => Ok(Resolution::NotFound),
            }
        }
        Lookup::Department(name) => {
            let departamentos = store.by_department(&name).await?;
            let convocatorias = match departamentos.into_iter().next() {
                Some(dep) => dep.convocatorias,
                None => return Ok(Resolution::NotFound),
            };
            if convocatorias.is_empty() {
                return Ok(Resolution::NotFound);
            }
            Ok(Resolution::Listing(convocatorias))
        }
        Lookup::ActiveAt(now) => match store.active_at(now).await {
            Ok(list) => Ok(Resolution::Listing(list)),
            Err(err) => {
                // The listing page stays available on store failure.
                warn!(error = %err, "active listing query failed, serving empty set");
                Ok(Resolution::Listing(Vec::new()))
            }
        },
    }
}
