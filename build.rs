use chrono::Datelike;

fn main() {
    // Build timestamp, shown in the site footer
    let build_time = chrono::Utc::now();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time.to_rfc3339());
    println!("cargo:rustc-env=BUILD_YEAR={}", build_time.year());

    // Embedded content is read at compile time in release builds
    println!("cargo:rerun-if-changed=content");
    println!("cargo:rerun-if-changed=build.rs");
}
