//! SEO metadata derivation.
//! Pure projection of (entity, global record, page) into the head block:
//! title/description fallback chains, icon selection, and the Open Graph
//! card. Empty CMS strings count as absent.

use convoca_common::config::Config;

use crate::model::{Convocatoria, GlobalConfig, Media};

pub const DEFAULT_TITLE: &str = "Convocatorias";
pub const DEFAULT_DESCRIPTION: &str = "Descripción de convocatorias";
const DEFAULT_FAVICON: &str = "/favicon.ico";

pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;

/// Which page the metadata is for. Carries the route key so generic
/// strings and canonical URLs can be derived without CMS data.
#[derive(Debug, Clone)]
pub enum Page {
    Home,
    Department(String),
    Convocatoria(String),
}

impl Page {
    fn generic_title(&self) -> String {
        match self {
            Page::Department(name) => {
                format!("Convocatorias para el departamento de {name}")
            }
            Page::Home | Page::Convocatoria(_) => DEFAULT_TITLE.to_string(),
        }
    }

    fn generic_description(&self) -> String {
        match self {
            Page::Department(name) => format!(
                "Encuentra las convocatorias disponibles para el departamento de {name}."
            ),
            Page::Home | Page::Convocatoria(_) => DEFAULT_DESCRIPTION.to_string(),
        }
    }

    fn canonical_path(&self) -> String {
        match self {
            Page::Home => "/convocatorias".to_string(),
            Page::Department(name) => format!("/departamento/{name}"),
            Page::Convocatoria(slug) => format!("/convocatoria/{slug}"),
        }
    }

    fn og_type(&self) -> &'static str {
        match self {
            Page::Convocatoria(_) => "article",
            Page::Home | Page::Department(_) => "website",
        }
    }
}

/// Derived head block for one response. Computed fresh per request and
/// discarded with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub open_graph: OpenGraph,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub kind: &'static str,
    pub images: Vec<OgImage>,
    pub site_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

impl OgImage {
    fn new(url: String, alt: String) -> Self {
        Self {
            url,
            width: OG_IMAGE_WIDTH,
            height: OG_IMAGE_HEIGHT,
            alt,
        }
    }
}

/// Derive the full head block. `entity` is set on detail pages, `global`
/// whenever the site record could be fetched; either may be absent and the
/// result is still complete.
pub fn derive_metadata(
    entity: Option<&Convocatoria>,
    global: Option<&GlobalConfig>,
    page: &Page,
    cfg: &Config,
) -> Metadata {
    let title = non_empty(entity.and_then(|e| e.meta_title.as_deref()))
        .or_else(|| non_empty(entity.map(|e| e.title.as_str())))
        .or_else(|| non_empty(global.and_then(|g| g.meta_title.as_deref())))
        .unwrap_or_else(|| page.generic_title());

    let description = non_empty(entity.and_then(|e| e.meta_description.as_deref()))
        .or_else(|| non_empty(entity.and_then(|e| e.description.as_deref())))
        .or_else(|| non_empty(global.and_then(|g| g.meta_description.as_deref())))
        .unwrap_or_else(|| page.generic_description());

    // Detail pages use the entity logo (or nothing); listing pages fall back
    // from the global favicon to the static default path.
    let icon = match page {
        Page::Convocatoria(_) => entity
            .and_then(|e| e.logo.as_ref())
            .map(|m| cfg.media_url(&m.url)),
        Page::Home | Page::Department(_) => Some(
            global
                .and_then(|g| g.favicon.as_ref())
                .map(|m| cfg.media_url(&m.url))
                .unwrap_or_else(|| cfg.media_url(DEFAULT_FAVICON)),
        ),
    };

    let share_source: Option<&Media> = match page {
        Page::Convocatoria(_) => entity.and_then(|e| e.cover.as_ref()),
        Page::Home | Page::Department(_) => global.and_then(|g| g.share_image.as_ref()),
    };
    // Exactly one image descriptor when a source exists, never a placeholder.
    let images = share_source
        .map(|m| vec![OgImage::new(cfg.media_url(&m.url), title.clone())])
        .unwrap_or_default();

    Metadata {
        open_graph: OpenGraph {
            title: title.clone(),
            description: description.clone(),
            url: cfg.site_url(&page.canonical_path()),
            kind: page.og_type(),
            images,
            site_name: global.and_then(|g| non_empty(g.site_name.as_deref())),
        },
        title,
        description,
        icon,
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> Config {
        Config {
            media_base_url: "http://cms.example".to_string(),
            site_base_url: "https://convoca.example".to_string(),
            ..Default::default()
        }
    }

    fn entity(slug: &str, title: &str) -> Convocatoria {
        Convocatoria {
            slug: slug.to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn title_prefers_meta_title() {
        let mut conv = entity("beca", "Beca");
        conv.meta_title = Some("Beca Nacional".to_string());
        let meta = derive_metadata(
            Some(&conv),
            None,
            &Page::Convocatoria("beca".to_string()),
            &cfg(),
        );
        assert_eq!(meta.title, "Beca Nacional");
    }

    #[test]
    fn title_falls_back_to_entity_title() {
        let conv = entity("beca-2025", "Beca 2025");
        let meta = derive_metadata(
            Some(&conv),
            None,
            &Page::Convocatoria("beca-2025".to_string()),
            &cfg(),
        );
        assert_eq!(meta.title, "Beca 2025");
    }

    #[test]
    fn title_falls_back_to_global_meta_title() {
        let global = GlobalConfig {
            meta_title: Some("Portal de Convocatorias".to_string()),
            ..Default::default()
        };
        let meta = derive_metadata(None, Some(&global), &Page::Home, &cfg());
        assert_eq!(meta.title, "Portal de Convocatorias");
    }

    #[test]
    fn title_defaults_when_nothing_is_set() {
        let meta = derive_metadata(None, None, &Page::Home, &cfg());
        assert_eq!(meta.title, DEFAULT_TITLE);
        assert_eq!(meta.description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn empty_meta_title_counts_as_absent() {
        let mut conv = entity("beca", "Beca");
        conv.meta_title = Some(String::new());
        let meta = derive_metadata(
            Some(&conv),
            None,
            &Page::Convocatoria("beca".to_string()),
            &cfg(),
        );
        assert_eq!(meta.title, "Beca");
    }

    #[test]
    fn description_chain_reaches_global_fallback() {
        let conv = entity("beca", "Beca");
        let global = GlobalConfig {
            meta_description: Some("Desde el global".to_string()),
            ..Default::default()
        };
        let meta = derive_metadata(
            Some(&conv),
            Some(&global),
            &Page::Convocatoria("beca".to_string()),
            &cfg(),
        );
        assert_eq!(meta.description, "Desde el global");
    }

    #[test]
    fn cover_becomes_exactly_one_og_image() {
        let mut conv = entity("beca-2025", "Beca 2025");
        conv.cover = Some(Media {
            url: "/uploads/x.png".to_string(),
        });
        let meta = derive_metadata(
            Some(&conv),
            None,
            &Page::Convocatoria("beca-2025".to_string()),
            &cfg(),
        );

        assert_eq!(meta.open_graph.images.len(), 1);
        let img = &meta.open_graph.images[0];
        assert_eq!(img.url, "http://cms.example/uploads/x.png");
        assert_eq!(img.width, 1200);
        assert_eq!(img.height, 630);
        assert_eq!(img.alt, "Beca 2025");
    }

    #[test]
    fn no_cover_means_no_og_images() {
        let conv = entity("beca", "Beca");
        let meta = derive_metadata(
            Some(&conv),
            None,
            &Page::Convocatoria("beca".to_string()),
            &cfg(),
        );
        assert!(meta.open_graph.images.is_empty());
    }

    #[test]
    fn department_page_derives_strings_from_route_key() {
        let meta = derive_metadata(None, None, &Page::Department("Lima".to_string()), &cfg());
        assert_eq!(meta.title, "Convocatorias para el departamento de Lima");
        assert!(meta.description.contains("departamento de Lima"));
        assert_eq!(
            meta.open_graph.url,
            "https://convoca.example/departamento/Lima"
        );
        assert_eq!(meta.open_graph.kind, "website");
    }

    #[test]
    fn detail_page_canonical_url_and_type() {
        let conv = entity("beca-2025", "Beca 2025");
        let meta = derive_metadata(
            Some(&conv),
            None,
            &Page::Convocatoria("beca-2025".to_string()),
            &cfg(),
        );
        assert_eq!(
            meta.open_graph.url,
            "https://convoca.example/convocatoria/beca-2025"
        );
        assert_eq!(meta.open_graph.kind, "article");
    }

    #[test]
    fn listing_pages_use_share_image_and_favicon_from_global() {
        let global = GlobalConfig {
            favicon: Some(Media {
                url: "/uploads/fav.png".to_string(),
            }),
            share_image: Some(Media {
                url: "/uploads/share.png".to_string(),
            }),
            site_name: Some("Convoca".to_string()),
            ..Default::default()
        };
        let meta = derive_metadata(None, Some(&global), &Page::Home, &cfg());

        assert_eq!(meta.icon.as_deref(), Some("http://cms.example/uploads/fav.png"));
        assert_eq!(meta.open_graph.images.len(), 1);
        assert_eq!(
            meta.open_graph.images[0].url,
            "http://cms.example/uploads/share.png"
        );
        assert_eq!(meta.open_graph.site_name.as_deref(), Some("Convoca"));
    }

    #[test]
    fn listing_icon_defaults_without_global() {
        let meta = derive_metadata(None, None, &Page::Home, &cfg());
        assert_eq!(meta.icon.as_deref(), Some("http://cms.example/favicon.ico"));
    }

    #[test]
    fn site_name_is_never_defaulted() {
        let meta = derive_metadata(None, None, &Page::Home, &cfg());
        assert!(meta.open_graph.site_name.is_none());
    }

    #[test]
    fn detail_icon_absent_without_logo() {
        let conv = entity("beca", "Beca");
        let meta = derive_metadata(
            Some(&conv),
            None,
            &Page::Convocatoria("beca".to_string()),
            &cfg(),
        );
        assert!(meta.icon.is_none());
    }
}
