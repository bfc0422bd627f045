//! End-to-end resolution over a fixture-backed store: raw GraphQL payloads
//! are decoded into models, then resolved and projected into metadata the
//! same way the page handlers do it.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use convoca_cms::model::{Convocatoria, ConvocatoriasData, Departamento, GlobalConfig};
use convoca_cms::seo::{derive_metadata, Page};
use convoca_cms::{resolve, ContentStore, Lookup, Resolution};
use convoca_common::error::Result;
use convoca_common::Config;

struct FixtureStore {
    convocatorias: Vec<Convocatoria>,
}

impl FixtureStore {
    fn from_payload(payload: serde_json::Value) -> Self {
        let data: ConvocatoriasData = serde_json::from_value(payload).unwrap();
        Self {
            convocatorias: data.convocatorias,
        }
    }
}

#[async_trait]
impl ContentStore for FixtureStore {
    async fn by_slug(&self, slug: &str) -> Result<Vec<Convocatoria>> {
        Ok(self
            .convocatorias
            .iter()
            .filter(|c| c.slug == slug)
            .cloned()
            .collect())
    }

    async fn by_department(&self, _name: &str) -> Result<Vec<Departamento>> {
        Ok(Vec::new())
    }

    async fn active_at(&self, now: DateTime<Utc>) -> Result<Vec<Convocatoria>> {
        Ok(self
            .convocatorias
            .iter()
            .filter(|c| c.enddate.is_some_and(|end| end > now))
            .cloned()
            .collect())
    }

    async fn global(&self) -> Result<Option<GlobalConfig>> {
        Ok(None)
    }
}

fn fixture() -> FixtureStore {
    FixtureStore::from_payload(serde_json::json!({
        "convocatorias": [
            {
                "title": "Beca 2025",
                "metaTitle": null,
                "description": "Becas de estudio para el 2025",
                "slug": "beca-2025",
                "cover": { "url": "/uploads/x.png" },
                "enddate": "2099-01-01T00:00:00.000Z",
                "organizacion": { "title": "Pronabec" },
                "departamentos": [{ "title": "Lima" }],
                "carreras": null,
                "formacions": null
            },
            {
                "title": "Concurso vencido",
                "slug": "concurso-vencido",
                "enddate": "2000-01-01T00:00:00.000Z"
            }
        ]
    }))
}

#[tokio::test]
async fn slug_resolution_feeds_metadata_derivation() {
    let store = fixture();
    let cfg = Config {
        media_base_url: "http://cms.example".to_string(),
        ..Default::default()
    };

    let conv = match resolve(&store, Lookup::Slug("beca-2025".to_string())).await.unwrap() {
        Resolution::Detail(conv) => conv,
        other => panic!("expected detail, got {other:?}"),
    };
    assert_eq!(conv.slug, "beca-2025");

    let meta = derive_metadata(
        Some(&conv),
        None,
        &Page::Convocatoria(conv.slug.clone()),
        &cfg,
    );
    // No metaTitle in the payload, so the plain title wins.
    assert_eq!(meta.title, "Beca 2025");
    assert_eq!(meta.open_graph.images.len(), 1);
    assert_eq!(meta.open_graph.images[0].url, "http://cms.example/uploads/x.png");
}

#[tokio::test]
async fn active_listing_only_contains_open_convocatorias() {
    let store = fixture();

    match resolve(&store, Lookup::ActiveAt(Utc::now())).await.unwrap() {
        Resolution::Listing(list) => {
            assert_eq!(list.len(), 1);
            assert_eq!(list[0].slug, "beca-2025");
        }
        other => panic!("expected listing, got {other:?}"),
    }
}
