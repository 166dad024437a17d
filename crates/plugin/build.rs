fn main() {
    // Integration tests stand in for the host by exporting autorun_* symbols
    // from the test executable, which the SDK resolves through dlopen(NULL).
    if std::env::var("CARGO_CFG_TARGET_FAMILY").is_ok_and(|family| family == "unix") {
        println!("cargo:rustc-link-arg-tests=-rdynamic");
    }
}
