//! Swap Aggregator Server
//!
//! Main entry point for the quote server

use swap_aggregator::AggregatorBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Configuration, tracing and binding are handled by the builder
	AggregatorBuilder::new().start_server().await
}
