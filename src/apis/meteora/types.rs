/// Meteora API request and response types
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// REQUESTS
// ============================================================================

/// Generic request passed to `MeteoraClient::get` / `MeteoraClient::post`
///
/// The struct itself is what goes on the wire as the JSON body, so the field
/// names are the upstream's (`Data`, `QueryParams`, `Headers`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeteoraRequest {
    /// GET: appended verbatim to the path. POST: body is only sent when set.
    #[serde(rename = "Data")]
    pub data: Option<String>,

    /// Raw query string without the leading `?`, not escaped
    #[serde(rename = "QueryParams")]
    pub query_params: Option<String>,

    #[serde(rename = "Headers")]
    pub headers: HashMap<String, String>,
}

impl MeteoraRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query_params = Some(query.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Quote lookup for a single pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeteoraQuoteRequest {
    pub pair_id: String,
}

impl MeteoraQuoteRequest {
    pub fn new(pair_id: impl Into<String>) -> Self {
        Self {
            pair_id: pair_id.into(),
        }
    }
}

// ============================================================================
// RESPONSES
// ============================================================================

/// Pool record returned by `/clmm-api/pair/{pair_id}`
///
/// Fee percentages and cumulative volumes arrive as decimal strings and are
/// kept that way. Missing keys decode to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeteoraData {
    pub address: String,
    pub name: String,
    pub mint_x: String,
    pub mint_y: String,
    pub reserve_x: String,
    pub reserve_y: String,
    pub reserve_x_amount: i64,
    pub reserve_y_amount: i64,
    pub bin_step: i64,
    pub base_fee_percentage: String,
    pub max_fee_percentage: String,
    pub protocol_fee_percentage: String,
    pub liquidity: String,
    pub reward_mint_x: String,
    pub reward_mint_y: String,
    pub fees_24h: f64,
    pub today_fees: f64,
    pub trade_volume_24h: f64,
    pub cumulative_trade_volume: String,
    pub cumulative_fee_volume: String,
    pub current_price: f64,
    pub apr: f64,
    pub apy: f64,
    pub farm_apr: f64,
    pub farm_apy: f64,
    pub hide: bool,
}
