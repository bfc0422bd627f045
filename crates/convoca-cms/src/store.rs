//! Content-store seam.
//! Pages and the resolver talk to this trait; the live implementation is
//! [`CmsClient`], tests substitute an in-memory fake.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use convoca_common::error::Result;
use serde_json::json;

use crate::client::CmsClient;
use crate::model::{
    Convocatoria, ConvocatoriasData, Departamento, DepartamentosData, GlobalConfig, GlobalData,
};
use crate::queries;

/// Read-only interface to the content store.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Convocatorias whose slug equals `slug` exactly.
    async fn by_slug(&self, slug: &str) -> Result<Vec<Convocatoria>>;

    /// Departments whose title contains `name`, with nested convocatorias.
    /// Case and locale rules are the store's.
    async fn by_department(&self, name: &str) -> Result<Vec<Departamento>>;

    /// Convocatorias whose end date is strictly after `now`, in store order.
    async fn active_at(&self, now: DateTime<Utc>) -> Result<Vec<Convocatoria>>;

    /// The global site record, if one is published.
    async fn global(&self) -> Result<Option<GlobalConfig>>;
}

#[async_trait]
impl ContentStore for CmsClient {
    async fn by_slug(&self, slug: &str) -> Result<Vec<Convocatoria>> {
        let vars = json!({ "filters": { "slug": { "eq": slug } } });
        let data: ConvocatoriasData = self.execute(queries::CONVOCATORIA_BY_SLUG, vars).await?;
        Ok(data.convocatorias)
    }

    async fn by_department(&self, name: &str) -> Result<Vec<Departamento>> {
        let vars = json!({ "filters": { "title": { "contains": name } } });
        let data: DepartamentosData = self.execute(queries::DEPARTAMENTOS_BY_TITLE, vars).await?;
        Ok(data.departamentos)
    }

    async fn active_at(&self, now: DateTime<Utc>) -> Result<Vec<Convocatoria>> {
        let instant = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        let vars = json!({ "filters": { "enddate": { "gt": instant } } });
        let data: ConvocatoriasData = self.execute(queries::CONVOCATORIAS, vars).await?;
        Ok(data.convocatorias)
    }

    async fn global(&self) -> Result<Option<GlobalConfig>> {
        let data: GlobalData = self.execute(queries::GLOBAL, json!({})).await?;
        Ok(data.global)
    }
}
