//! Buyer-side freight estimation models.

use serde::{Deserialize, Serialize};

use super::de;

/// A shipping option quoted by `aliexpress.logistics.buyer.freight.calculate`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct FreightOption {
    #[serde(deserialize_with = "de::null_as_default")]
    pub service_name: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub estimated_delivery_time: String,
    #[serde(deserialize_with = "de::opt_string_or_number")]
    pub freight_amount: Option<String>,
    #[serde(deserialize_with = "de::null_as_default")]
    pub freight_currency: String,
    #[serde(deserialize_with = "de::lenient_bool")]
    pub tracking_available: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct BuyerFreightResult {
    #[serde(deserialize_with = "de::lenient_bool")]
    pub success: bool,
    #[serde(deserialize_with = "de::null_as_default")]
    pub error_desc: String,
    #[serde(
        rename = "aeop_freight_calculate_result_for_buyer_d_t_o_list",
        deserialize_with = "de::nested_list"
    )]
    pub options: Vec<FreightOption>,
}
