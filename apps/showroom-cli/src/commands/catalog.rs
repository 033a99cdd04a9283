//! # Catalog Commands
//!
//! Read-only views of the catalog: what can be bought and for how much.

use serde::Serialize;
use showroom_core::{CatalogOption, FeatureToggle, Model, OptionCategory, PriceFormat};
use tracing::debug;

use super::{line, Context, Render};
use crate::error::ApiResult;

/// `showroom models`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelsResponse {
    pub models: Vec<Model>,
}

/// Options offered in one category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOptions {
    pub category: OptionCategory,
    pub options: Vec<CatalogOption>,
}

/// `showroom options <model>`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsResponse {
    pub model: Model,
    pub categories: Vec<CategoryOptions>,
    pub features: Vec<FeatureToggle>,
}

/// Lists the models in catalog order.
pub fn models(ctx: &Context) -> ModelsResponse {
    debug!("models command");
    ModelsResponse {
        models: ctx.catalog().models().cloned().collect(),
    }
}

/// Lists every category's options for one model, plus the feature toggles.
pub fn options(ctx: &Context, model_id: &str) -> ApiResult<OptionsResponse> {
    debug!(model = %model_id, "options command");
    let resolved = ctx.catalog().options_for(model_id)?;

    let categories = OptionCategory::ALL
        .into_iter()
        .map(|category| CategoryOptions {
            category,
            options: resolved.options(category).to_vec(),
        })
        .collect();

    Ok(OptionsResponse {
        model: resolved.model().clone(),
        categories,
        features: ctx.catalog().features().to_vec(),
    })
}

impl Render for ModelsResponse {
    fn render(&self, format: &PriceFormat) -> String {
        self.models
            .iter()
            .map(|m| {
                line(
                    &format!("{:<10}{}", m.id, m.display_name),
                    &m.base_price.format(format),
                )
            })
            .collect()
    }
}

impl Render for OptionsResponse {
    fn render(&self, format: &PriceFormat) -> String {
        let mut out = format!(
            "{} ({}) from {}\n",
            self.model.display_name,
            self.model.id,
            self.model.base_price.format(format)
        );

        for group in &self.categories {
            out.push_str(&format!("\n{}\n", group.category));
            for option in &group.options {
                let marker = if option.is_default { "*" } else { " " };
                out.push_str(&line(
                    &format!("{} {:<16}{}", marker, option.id, option.display_name),
                    &format!("+{}", option.price_delta.format(format)),
                ));
            }
        }

        out.push_str("\nfeatures\n");
        for feature in &self.features {
            out.push_str(&line(
                &format!("  {:<16}{}", feature.id, feature.display_name),
                &format!("+{}", feature.price_delta.format(format)),
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::context;
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_models_in_catalog_order() {
        let response = models(&context());
        let ids: Vec<_> = response.models.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["sedan", "suv", "sports"]);

        let text = response.render(&PriceFormat::default());
        assert!(text.contains("Luxury Sedan"));
        assert!(text.contains("R 420 000"));
    }

    #[test]
    fn test_options_cover_every_category() {
        let response = options(&context(), "sports").unwrap();
        assert_eq!(response.categories.len(), OptionCategory::ALL.len());
        assert_eq!(response.features.len(), 6);

        let wheels = response
            .categories
            .iter()
            .find(|g| g.category == OptionCategory::Wheels)
            .unwrap();
        let ids: Vec<_> = wheels.options.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["sport", "track", "carbon"]);

        let text = response.render(&PriceFormat::default());
        assert!(text.contains("* sport"));
        assert!(text.contains("+R 60 000"));
    }

    #[test]
    fn test_options_for_unknown_model() {
        let err = options(&context(), "tank").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
