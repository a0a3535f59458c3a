use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use super::traits::RateProvider;
use crate::errors::CoreError;
use crate::models::asset::AssetType;
use crate::models::rate::{RateQuote, RateSnapshot};

const PROVIDER_NAME: &str = "Truncgil";

/// Truncgil finance API provider for lira exchange rates.
///
/// - **Free**: no API key.
/// - **Coverage**: USD, EUR and gram gold ("GRA"), quoted in Turkish lira.
/// - **Shapes**: the feed has shipped two payload layouts over the years;
///   both are normalized into one `RateSnapshot` here, at the boundary:
///   1. Current: nested `Rates.{USD,EUR,GRA}.{Buying,Selling,Change}`
///      with numeric fields.
///   2. Legacy: flat top-level `{USD,EUR,GRA}` objects whose fields
///      ("Alış"/"Satış"/"Değişim") are Turkish-locale strings.
///
/// Any missing asset key, unparseable field, or non-positive rate rejects
/// the snapshot as a whole — consumers never receive partial data.
pub struct TruncgilProvider {
    client: Client,
    url: String,
}

impl TruncgilProvider {
    pub fn new(url: impl Into<String>) -> Self {
        let builder = Client::builder().timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            url: url.into(),
        }
    }
}

// ── Truncgil API response types ─────────────────────────────────────

/// Current nested shape: `{"Rates": {"USD": {"Buying": 32.5, ...}, ...}}`
#[derive(Deserialize)]
struct CurrentResponse {
    #[serde(rename = "Rates")]
    rates: HashMap<String, CurrentQuote>,
}

#[derive(Deserialize)]
struct CurrentQuote {
    #[serde(rename = "Buying")]
    buying: f64,
    #[serde(rename = "Selling")]
    selling: f64,
    #[serde(rename = "Change", default)]
    change: f64,
}

/// Legacy flat shape: `{"USD": {"Alış": "32,50", "Satış": "32,57", ...}, ...}`
/// next to unrelated metadata keys ("Update_Date").
#[derive(Deserialize)]
struct LegacyQuote {
    #[serde(rename = "Alış")]
    buying: String,
    #[serde(rename = "Satış")]
    selling: String,
    #[serde(rename = "Değişim", default)]
    change: Option<String>,
}

/// Parse a Turkish-locale formatted number ("2.100,50", "%0,12").
///
/// '.' groups thousands and ',' marks the decimal point; a '%' prefix is
/// ignored. Plain "32.5" (no comma) parses as a regular float. Returns
/// `None` for anything that does not resolve to a finite number.
#[must_use]
pub fn parse_locale_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != '%').collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }

    let normalized = if cleaned.contains(',') {
        cleaned.replace('.', "").replace(',', ".")
    } else {
        cleaned.to_string()
    };

    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_current(body: &serde_json::Value) -> Result<HashMap<AssetType, RateQuote>, CoreError> {
    let response: CurrentResponse =
        serde_json::from_value(body.clone()).map_err(|e| CoreError::RateSource {
            provider: PROVIDER_NAME.into(),
            message: format!("Malformed rates payload: {e}"),
        })?;

    let mut rates = HashMap::new();
    for asset in AssetType::ALL {
        let quote = response
            .rates
            .get(asset.rate_code())
            .ok_or_else(|| CoreError::RateSource {
                provider: PROVIDER_NAME.into(),
                message: format!("Missing rate entry for {}", asset.rate_code()),
            })?;
        rates.insert(
            asset,
            RateQuote {
                buying: quote.buying,
                selling: quote.selling,
                change_pct: quote.change,
            },
        );
    }
    Ok(rates)
}

fn parse_legacy(body: &serde_json::Value) -> Result<HashMap<AssetType, RateQuote>, CoreError> {
    let mut rates = HashMap::new();
    for asset in AssetType::ALL {
        let entry = body
            .get(asset.rate_code())
            .ok_or_else(|| CoreError::RateSource {
                provider: PROVIDER_NAME.into(),
                message: format!("Missing rate entry for {}", asset.rate_code()),
            })?;

        let quote: LegacyQuote =
            serde_json::from_value(entry.clone()).map_err(|e| CoreError::RateSource {
                provider: PROVIDER_NAME.into(),
                message: format!("Malformed entry for {}: {e}", asset.rate_code()),
            })?;

        let buying =
            parse_locale_number(&quote.buying).ok_or_else(|| CoreError::InvalidRate {
                asset: asset.to_string(),
                value: f64::NAN,
            })?;
        let selling =
            parse_locale_number(&quote.selling).ok_or_else(|| CoreError::InvalidRate {
                asset: asset.to_string(),
                value: f64::NAN,
            })?;
        // Only buying/selling feed valuation; a missing or malformed
        // change reads as flat.
        let change_pct = quote
            .change
            .as_deref()
            .and_then(parse_locale_number)
            .unwrap_or(0.0);

        rates.insert(
            asset,
            RateQuote {
                buying,
                selling,
                change_pct,
            },
        );
    }
    Ok(rates)
}

#[async_trait]
impl RateProvider for TruncgilProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn fetch_rates(&self) -> Result<RateSnapshot, CoreError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::RateSource {
                provider: PROVIDER_NAME.into(),
                message: format!("HTTP {status} from rate endpoint"),
            });
        }

        let body: serde_json::Value =
            response.json().await.map_err(|e| CoreError::RateSource {
                provider: PROVIDER_NAME.into(),
                message: format!("Unparseable response body: {e}"),
            })?;

        // Shape sniff: the current feed nests quotes under "Rates"; the
        // legacy feed put them at the top level.
        let rates = if body.get("Rates").is_some() {
            parse_current(&body)?
        } else {
            parse_legacy(&body)?
        };

        // Validates positivity/finiteness for the whole set; a single bad
        // rate rejects the snapshot.
        RateSnapshot::new(rates, Utc::now())
    }
}
