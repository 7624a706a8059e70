fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=proto");

    // Use a vendored protoc when none is provided by the environment.
    if std::env::var_os("PROTOC").is_none() {
        std::env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);
    }

    // Server stubs are only used by the mock service in tests.
    tonic_build::configure()
        .build_server(true)
        .compile_protos(&["proto/feast/serving/ServingService.proto"], &["proto"])?;

    Ok(())
}
