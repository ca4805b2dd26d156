use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use serde::Deserialize;
use tera::{Context, Tera};

use crate::AppState;
use crate::constants::ERR_RENDER_FAILED;
use crate::models::{CatalogPage, FilterCriteria, ProductRecord};
use crate::utils::{build_query_params, catalog_error, non_blank};

#[derive(Deserialize, Debug, Default)]
pub struct ViewQuery {
    pub page: Option<u32>,
    pub product: Option<String>,
    pub price: Option<String>,
    pub brand: Option<String>,
}

impl ViewQuery {
    /// Filter constraints from the form; blank inputs impose nothing.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            product: non_blank(self.product.clone()),
            price: non_blank(self.price.clone()).map(|raw| FilterCriteria::price_from_input(&raw)),
            brand: non_blank(self.brand.clone()),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct PageQuery {
    pub page: Option<u32>,
}

#[derive(Deserialize, Debug)]
pub struct FilterPayload {
    #[serde(flatten)]
    pub criteria: FilterCriteria,
    #[serde(default)]
    pub deduplicate: bool,
}

pub async fn show_catalog(
    State(app_state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Result<Html<String>, (StatusCode, String)> {
    let criteria = query.criteria();

    let view = if criteria.is_empty() {
        let page = app_state
            .client
            .page(query.page.unwrap_or(1))
            .map_err(|e| catalog_error(&e))?;
        app_state.client.load_page(page).await.map_err(|e| {
            log::error!("Failed to load page {}: {}", page.page_number, e);
            catalog_error(&e)
        })?
    } else {
        let products = app_state
            .client
            .filter_products(&criteria, false)
            .await
            .map_err(|e| {
                log::error!("Failed to filter products by {:?}: {}", criteria, e);
                catalog_error(&e)
            })?;
        CatalogPage {
            page: 1,
            products,
            has_previous: false,
            has_next: false,
        }
    };

    let html = render_catalog(&app_state.templates, &view, &query).map_err(|e| {
        log::error!("Failed to render catalog page: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            ERR_RENDER_FAILED.to_string(),
        )
    })?;

    Ok(Html(html))
}

pub async fn get_page(
    State(app_state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<CatalogPage>, (StatusCode, String)> {
    let page = app_state
        .client
        .page(query.page.unwrap_or(1))
        .map_err(|e| catalog_error(&e))?;

    let loaded = app_state.client.load_page(page).await.map_err(|e| {
        log::error!("Failed to load page {}: {}", page.page_number, e);
        catalog_error(&e)
    })?;

    Ok(Json(loaded))
}

pub async fn filter(
    State(app_state): State<AppState>,
    Json(payload): Json<FilterPayload>,
) -> Result<Json<Vec<ProductRecord>>, (StatusCode, String)> {
    let products = app_state
        .client
        .filter_products(&payload.criteria, payload.deduplicate)
        .await
        .map_err(|e| {
            log::error!("Failed to filter products by {:?}: {}", payload.criteria, e);
            catalog_error(&e)
        })?;

    Ok(Json(products))
}

pub const CATALOG_TEMPLATE: &str = "catalog.html";

/// Templates for the HTML viewer. `.html` templates are autoescaped.
pub fn catalog_templates() -> tera::Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_template(CATALOG_TEMPLATE, include_str!("../templates/catalog.html"))?;
    Ok(tera)
}

pub fn render_catalog(
    tera: &Tera,
    view: &CatalogPage,
    query: &ViewQuery,
) -> tera::Result<String> {
    let mut context = Context::new();
    context.insert("products", &view.products);
    context.insert("page", &view.page);
    context.insert("has_previous", &view.has_previous);
    context.insert("has_next", &view.has_next);
    context.insert("previous_query", &page_query(view.page.saturating_sub(1)));
    context.insert("next_query", &page_query(view.page.saturating_add(1)));
    context.insert("product", query.product.as_deref().unwrap_or_default());
    context.insert("price", query.price.as_deref().unwrap_or_default());
    context.insert("brand", query.brand.as_deref().unwrap_or_default());

    tera.render(CATALOG_TEMPLATE, &context)
}

fn page_query(target: u32) -> String {
    build_query_params(&[("page", Some(target.to_string()))])
}
