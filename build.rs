use std::fs;
use std::path::Path;

fn main() {
    // Rerun when the documented API surface changes
    println!("cargo:rerun-if-changed=src/api.rs");
    println!("cargo:rerun-if-changed=src/forecast/models.rs");
    println!("cargo:rerun-if-changed=src/advisor/verdict.rs");
    println!("cargo:rerun-if-changed=src/services/forecast_service.rs");

    // The real spec comes from the generate-openapi binary; seed a placeholder
    let openapi_path = Path::new("openapi.json");

    if !openapi_path.exists() {
        let placeholder = r#"{
  "note": "Run 'cargo run --bin generate-openapi' to generate the OpenAPI spec"
}"#;
        fs::write(openapi_path, placeholder).expect("Failed to create openapi.json placeholder");
    }
}
