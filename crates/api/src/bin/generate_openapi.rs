//! Writes the OpenAPI document for the quote API to disk.
//!
//! ```bash
//! cargo run -p swap-api --bin generate_openapi --features openapi -- [output.json]
//! ```
//!
//! The output path defaults to `docs/api/openapi.json`.

#[cfg(feature = "openapi")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
	use std::path::PathBuf;
	use swap_api::openapi::ApiDoc;
	use utoipa::OpenApi;

	let output = std::env::args()
		.nth(1)
		.map(PathBuf::from)
		.unwrap_or_else(|| PathBuf::from("docs/api/openapi.json"));

	if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
		std::fs::create_dir_all(parent)?;
	}
	std::fs::write(&output, ApiDoc::openapi().to_pretty_json()?)?;
	println!("OpenAPI document written to {}", output.display());
	Ok(())
}

#[cfg(not(feature = "openapi"))]
fn main() {
	eprintln!("generate_openapi needs the `openapi` feature: --features openapi");
	std::process::exit(1);
}
