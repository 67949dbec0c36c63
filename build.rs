//! Build script for proto compilation.
//!
//! The cloud API message types are committed to the repository, so this only
//! needs to run when the proto file changes.
//!
//! To regenerate: `cargo build --features regenerate-proto`
//!
//! The generated file, messages plus the `CloudService` client, will be placed
//! in `src/cloud/v1.rs`.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Only regenerate if the feature is enabled
    #[cfg(feature = "regenerate-proto")]
    {
        let out_dir = std::path::PathBuf::from("src/cloud");
        tonic_prost_build::configure()
            .build_client(true)
            .build_server(false)
            .out_dir(&out_dir)
            .compile_protos(&["proto/gpcore/api/cloud/v1/cloud.proto"], &["proto"])?;

        let generated = out_dir.join("gpcore.api.cloud.v1.rs");
        let target = out_dir.join("v1.rs");
        if generated.exists() {
            std::fs::rename(generated, target)?;
        }
    }

    println!("cargo:rerun-if-changed=proto/gpcore/api/cloud/v1/cloud.proto");

    Ok(())
}
