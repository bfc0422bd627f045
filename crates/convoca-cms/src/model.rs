//! Data models for CMS responses.
//! Field names mirror the Strapi GraphQL schema; nested relations may come
//! back as `null` and deserialize to `None` / an empty list, never an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// An uploaded file reference. `url` is relative to the media base URL.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Media {
    pub url: String,
}

/// A labeled related record (organización, departamento, carrera, formación).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Related {
    pub title: String,
}

/// A single convocatoria. `slug` is the sole external addressing key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Convocatoria {
    pub title: String,
    pub meta_title: Option<String>,
    pub description: Option<String>,
    pub meta_description: Option<String>,
    pub slug: String,
    pub cover: Option<Media>,
    pub logo: Option<Media>,
    /// Strapi rich-block body; `None` or empty renders no detail section.
    pub content: Option<Vec<serde_json::Value>>,
    pub enddate: Option<DateTime<Utc>>,
    pub organizacion: Option<Related>,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub departamentos: Vec<Related>,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub carreras: Vec<Related>,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub formacions: Vec<Related>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
}

impl Convocatoria {
    /// True when the rich body has at least one block.
    pub fn has_content(&self) -> bool {
        self.content.as_ref().is_some_and(|blocks| !blocks.is_empty())
    }
}

/// A department with its nested convocatorias.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Departamento {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub convocatorias: Vec<Convocatoria>,
}

/// The singleton site record. Every field is a fallback source only.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalConfig {
    pub site_name: Option<String>,
    pub favicon: Option<Media>,
    pub site_description: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub share_image: Option<Media>,
}

// --- GraphQL `data` payloads -------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ConvocatoriasData {
    #[serde(default, deserialize_with = "null_to_empty")]
    pub convocatorias: Vec<Convocatoria>,
}

#[derive(Debug, Deserialize)]
pub struct DepartamentosData {
    #[serde(default, deserialize_with = "null_to_empty")]
    pub departamentos: Vec<Departamento>,
}

#[derive(Debug, Deserialize)]
pub struct GlobalData {
    pub global: Option<GlobalConfig>,
}

/// GraphQL leaves nullable list fields as `null`; treat that as "no data".
fn null_to_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
