use chrono::Utc;

fn main() {
    // Stamped into the page footer
    println!("cargo:rustc-env=BUILD_TIME={}", Utc::now().to_rfc3339());

    // A content edit is a new build of the site, so refresh the stamp with it
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
}
