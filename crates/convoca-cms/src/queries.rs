//! GraphQL query documents sent to the CMS.
//! One document per logical lookup; variables carry the Strapi filter input.

/// Detail lookup: full field set including logo, rich content, and audit dates.
pub const CONVOCATORIA_BY_SLUG: &str = r#"
query ConvocatoriaBySlug($filters: ConvocatoriaFiltersInput) {
  convocatorias(filters: $filters) {
    title
    metaTitle
    description
    metaDescription
    slug
    logo { url }
    cover { url }
    content
    enddate
    organizacion { title }
    departamentos { title }
    carreras { title }
    formacions { title }
    createdAt
    updatedAt
    publishedAt
  }
}
"#;

/// Card listing: the fields the grid needs, filtered by the caller.
pub const CONVOCATORIAS: &str = r#"
query Convocatorias($filters: ConvocatoriaFiltersInput) {
  convocatorias(filters: $filters) {
    title
    metaTitle
    description
    metaDescription
    slug
    cover { url }
    enddate
    organizacion { title }
    departamentos { title }
    carreras { title }
    formacions { title }
  }
}
"#;

/// Departments matched by title, each with its nested convocatoria cards.
pub const DEPARTAMENTOS_BY_TITLE: &str = r#"
query ConvocatoriasByDepartment($filters: DepartamentoFiltersInput) {
  departamentos(filters: $filters) {
    title
    convocatorias {
      title
      metaTitle
      description
      metaDescription
      slug
      cover { url }
      enddate
      organizacion { title }
      departamentos { title }
      carreras { title }
      formacions { title }
    }
  }
}
"#;

/// The singleton site record used as the metadata fallback source.
pub const GLOBAL: &str = r#"
query Global {
  global {
    siteName
    favicon { url }
    siteDescription
    metaTitle
    metaDescription
    shareImage { url }
  }
}
"#;
