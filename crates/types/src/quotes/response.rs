//! Quote response envelope returned by both quote endpoints

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::bridges::BridgeType;
use crate::models::TokenAmount;
use crate::tokens::TokenAddress;

/// One fee line in the quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FeeEntry {
	/// Fee category, e.g. `gas`, `protocol`, `affiliate`, `bridge`
	#[serde(rename = "type")]
	pub kind: String,
	pub value: TokenAmount,
	/// Token the fee is charged in, when not the sell token
	#[serde(default, skip_serializing_if = "Option::is_none")]
	#[cfg_attr(feature = "openapi", schema(value_type = Option<String>))]
	pub token: Option<TokenAddress>,
}

impl FeeEntry {
	pub fn new(kind: impl Into<String>, value: TokenAmount) -> Self {
		Self {
			kind: kind.into(),
			value,
			token: None,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ResourceEstimate {
	/// Gas limit as a decimal string
	pub gas_limit: String,
}

/// Field declaration in an EIP-712 style type table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct TypedField {
	pub name: String,
	#[serde(rename = "type")]
	pub kind: String,
}

impl TypedField {
	pub fn new(name: &str, kind: &str) -> Self {
		Self {
			name: name.to_string(),
			kind: kind.to_string(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TypedDomain {
	pub name: String,
	pub version: String,
	pub chain_id: u64,
	#[cfg_attr(feature = "openapi", schema(value_type = String))]
	pub verifying_contract: TokenAddress,
}

/// Structured payload the caller signs to authorize the swap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TypedData {
	pub types: BTreeMap<String, Vec<TypedField>>,
	pub primary_type: String,
	pub domain: TypedDomain,
	#[cfg_attr(feature = "openapi", schema(value_type = Object))]
	pub message: serde_json::Map<String, serde_json::Value>,
}

impl TypedData {
	/// String field of the message, if present
	pub fn message_str(&self, field: &str) -> Option<&str> {
		self.message.get(field).and_then(|v| v.as_str())
	}
}

/// Successful quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
	pub id: String,
	pub amount_out: TokenAmount,
	#[cfg_attr(feature = "openapi", schema(value_type = String))]
	pub target_address: TokenAddress,
	pub fees: Vec<FeeEntry>,
	pub resource_estimate: ResourceEstimate,
	pub typed_data: TypedData,
	/// Winning bridge, only present on cross-chain quotes
	#[serde(default, skip_serializing_if = "Option::is_none")]
	#[cfg_attr(feature = "openapi", schema(value_type = Option<u8>))]
	pub bridge_type: Option<BridgeType>,
}
