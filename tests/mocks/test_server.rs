//! Test server for integration tests
//!
//! Runs the real router on an ephemeral port, wired to mock collaborators.

use std::sync::Arc;

use axum::Router;
use swap_aggregator::mocks::{MockBridge, MockLiquidityRouter};
use swap_aggregator::{AggregatorBuilder, BridgeType, Settings};
use tokio::task::JoinHandle;

/// Test server instance
pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
}

impl TestServer {
	/// Mock router plus a quoting bridge for every bridge type
	#[allow(dead_code)]
	pub async fn spawn() -> Result<Self, Box<dyn std::error::Error>> {
		let builder = BridgeType::all()
			.iter()
			.fold(Self::builder(), |builder, bridge_type| {
				builder.with_bridge(Arc::new(MockBridge::quoting(*bridge_type)))
			});
		Self::spawn_with_builder(builder).await
	}

	/// Mock router plus the given bridges only
	#[allow(dead_code)]
	pub async fn spawn_with_bridges(
		bridges: Vec<MockBridge>,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let builder = bridges.into_iter().fold(Self::builder(), |builder, bridge| {
			builder.with_bridge(Arc::new(bridge))
		});
		Self::spawn_with_builder(builder).await
	}

	/// Mock router, no bridges and custom settings
	#[allow(dead_code)]
	pub async fn spawn_with_settings(settings: Settings) -> Result<Self, Box<dyn std::error::Error>> {
		Self::spawn_with_builder(Self::builder().with_settings(settings)).await
	}

	/// Builder with the mock liquidity router injected
	pub fn builder() -> AggregatorBuilder {
		AggregatorBuilder::new().with_router(Arc::new(MockLiquidityRouter::new()))
	}

	#[allow(dead_code)]
	pub async fn spawn_with_builder(
		builder: AggregatorBuilder,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let (app, _state) = builder.start().await?;
		Self::spawn_server_with_app(app).await
	}

	/// Common server spawning logic
	async fn spawn_server_with_app(app: Router) -> Result<Self, Box<dyn std::error::Error>> {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let base_url = format!("http://{}:{}", addr.ip(), addr.port());

		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		// Give server time to start
		tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

		Ok(Self { base_url, handle })
	}

	pub fn url(&self, path: &str) -> String {
		format!("{}{}", self.base_url, path)
	}

	pub fn abort(self) {
		self.handle.abort();
	}
}
