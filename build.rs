use std::env;

/// Static archive produced by the compiler, `libscheme_entry.a`.
const ENTRY_LIB: &str = "scheme_entry";

fn main() {
    println!("cargo:rerun-if-env-changed=SCHEME_ENTRY_DIR");

    // Only the runtime binary references `scheme_entry`.
    if env::var_os("CARGO_FEATURE_NATIVE_ENTRY").is_none() {
        return;
    }

    if let Some(dir) = env::var_os("SCHEME_ENTRY_DIR") {
        println!("cargo:rustc-link-search=native={}", dir.to_string_lossy());
    }

    println!("cargo:rustc-link-lib=static={ENTRY_LIB}");
}
