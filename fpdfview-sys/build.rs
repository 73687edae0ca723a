use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(pdfium_linked)");

    // ── Locate the library directory ─────────────────────────────────────
    //
    // Priority:
    //   1. PDFIUM_LIB_DIR environment variable  (explicit override)
    //   2. PDFIUM_ROOT/lib                      (engine bundle root)
    //
    // When neither is set the crate still compiles, against stub entry
    // points that report failure through the ABI's own error channels.
    // `fpdfview_sys::ENGINE_LINKED` tells callers which flavor they got.

    let lib_dir = if let Ok(dir) = env::var("PDFIUM_LIB_DIR") {
        Some(PathBuf::from(dir))
    } else if let Ok(root) = env::var("PDFIUM_ROOT") {
        Some(PathBuf::from(root).join("lib"))
    } else {
        None
    };

    match lib_dir {
        Some(dir) if dir.exists() => {
            println!("cargo:rustc-link-search=native={}", dir.display());
            println!("cargo:rustc-link-lib=dylib=pdfium");
            println!("cargo:rustc-cfg=pdfium_linked");
        }
        Some(dir) => {
            panic!(
                "fpdfview-sys: library directory does not exist: {}",
                dir.display()
            );
        }
        None => {
            println!(
                "cargo:warning=fpdfview-sys: PDFIUM_LIB_DIR / PDFIUM_ROOT not set; \
                 building without the native engine (every call will report failure)"
            );
        }
    }

    // Re-run if the env vars change.
    println!("cargo:rerun-if-env-changed=PDFIUM_LIB_DIR");
    println!("cargo:rerun-if-env-changed=PDFIUM_ROOT");
}
