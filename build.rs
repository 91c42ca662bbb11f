fn main() {
    // Stamp the compile date into the binary so --version can report when
    // this copy of the stamper was built.
    let build_date = chrono::Utc::now().format("%Y-%m-%d").to_string();
    println!("cargo:rustc-env=BUILDSTAMP_BUILD_DATE={}", build_date);
    println!("cargo:rerun-if-changed=build.rs");
}
