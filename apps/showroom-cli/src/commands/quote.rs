//! # Quote Commands
//!
//! Prices a configuration and produces share codes for it.
//!
//! ## Quote Layout
//! ```text
//! GT Sports (sports)
//!   GT Sports                                   R 680 000
//!   Wheels: Carbon                               R 60 000
//!   Rear Spoiler                                  R 4 500
//!   ───────────────────────────────────────────────────────
//!   Base price                                  R 680 000
//!   Options                                      R 64 500
//!   Total                                       R 744 500
//!
//! Share code: eyJtb2RlbCI6InNwb3J0cyIs...
//! ```

use std::collections::BTreeMap;

use serde::Serialize;
use showroom_core::pricing::{self, LineKind};
use showroom_core::{share, Appearance, Configurator, PriceBreakdown, PriceFormat, PriceLine};
use tracing::debug;

use super::{line, Context, Render};
use crate::cli::SessionArgs;
use crate::error::ApiResult;

/// A priced configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub model: String,
    pub model_name: String,
    pub selections: BTreeMap<String, String>,
    pub features: Vec<String>,
    pub lines: Vec<PriceLine>,
    pub breakdown: PriceBreakdown,
    pub appearance: Appearance,
    pub share_code: String,
}

impl QuoteResponse {
    /// Reads everything off a session.
    pub fn from_session(session: &Configurator) -> ApiResult<Self> {
        let snapshot = session.snapshot();

        Ok(QuoteResponse {
            model: snapshot.model.clone(),
            model_name: session.selected_model().display_name.clone(),
            selections: snapshot.selections.clone(),
            features: snapshot.enabled_features.iter().cloned().collect(),
            lines: pricing::itemize(session),
            breakdown: session.quote(),
            appearance: Appearance::from_session(session),
            share_code: share::encode(&snapshot)?,
        })
    }
}

/// `showroom share`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareResponse {
    pub code: String,
}

/// Prices the configuration described by `args`.
pub fn quote(ctx: &Context, args: &SessionArgs) -> ApiResult<QuoteResponse> {
    debug!("quote command");
    let session = ctx.session(args)?;
    QuoteResponse::from_session(&session)
}

/// Encodes the configuration described by `args` as a share code.
pub fn share(ctx: &Context, args: &SessionArgs) -> ApiResult<ShareResponse> {
    debug!("share command");
    let session = ctx.session(args)?;
    Ok(ShareResponse {
        code: share::encode(&session.snapshot())?,
    })
}

fn line_label(price_line: &PriceLine) -> String {
    match price_line.kind {
        LineKind::Option(category) => {
            let name = category.as_str();
            let mut chars = name.chars();
            let title: String = match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            };
            format!("{}: {}", title, price_line.label)
        }
        LineKind::Model | LineKind::Feature => price_line.label.clone(),
    }
}

impl Render for QuoteResponse {
    fn render(&self, format: &PriceFormat) -> String {
        let mut out = format!("{} ({})\n", self.model_name, self.model);

        for price_line in &self.lines {
            out.push_str(&line(&line_label(price_line), &price_line.amount.format(format)));
        }

        out.push_str(&format!("  {}\n", "─".repeat(52)));
        out.push_str(&line("Base price", &self.breakdown.base_price.format(format)));
        out.push_str(&line("Options", &self.breakdown.options_total.format(format)));
        out.push_str(&line("Total", &self.breakdown.total.format(format)));
        out.push_str(&format!("\nShare code: {}\n", self.share_code));
        out
    }
}

impl Render for ShareResponse {
    fn render(&self, _format: &PriceFormat) -> String {
        format!("{}\n", self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{args, context};
    use super::*;
    use showroom_core::Money;

    #[test]
    fn test_quote_lists_priced_lines() {
        let mut args = args("sports");
        args.options.push(("wheels".to_string(), "carbon".to_string()));
        args.features.push("spoiler".to_string());

        let response = quote(&context(), &args).unwrap();
        assert_eq!(response.breakdown.total, Money::from_units(744_500));
        assert_eq!(response.lines.len(), 3);
        assert_eq!(response.features, ["spoiler"]);
        assert_eq!(response.selections["wheels"], "carbon");

        let sum: Money = response.lines.iter().map(|l| l.amount).sum();
        assert_eq!(sum, response.breakdown.total);

        let text = response.render(&PriceFormat::default());
        assert!(text.contains("GT Sports (sports)"));
        assert!(text.contains("Wheels: Carbon"));
        assert!(text.contains("R 744 500"));
    }

    #[test]
    fn test_share_code_reopens_the_same_quote() {
        let ctx = context();
        let mut original = args("suv");
        original.options.push(("finish".to_string(), "pearl".to_string()));

        let code = share(&ctx, &original).unwrap().code;
        let reopened = quote(
            &ctx,
            &SessionArgs {
                code: Some(code.clone()),
                ..SessionArgs::default()
            },
        )
        .unwrap();

        assert_eq!(reopened.share_code, code);
        assert_eq!(reopened.breakdown.total, Money::from_units(562_000));
        assert_eq!(reopened.appearance.body_roughness, 0.2);
    }

    #[test]
    fn test_quote_json_shape() {
        let response = quote(&context(), &args("sedan")).unwrap();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["model"], "sedan");
        assert_eq!(json["breakdown"]["total"], 420_000);
        assert_eq!(json["lines"][0]["kind"]["type"], "model");
        assert!(json["shareCode"].is_string());
    }
}
