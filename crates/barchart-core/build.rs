// File: crates/barchart-core/build.rs
// Summary: Links Windows system libraries that Skia/ICU need when the raster surface is enabled.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let skia_enabled = std::env::var_os("CARGO_FEATURE_SKIA").is_some();
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if skia_enabled && target_os == "windows" {
        // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
