//! Build script: compiles the C side of every benchmark.
//!
//! All `src/**/*.c` files are compiled into one static archive. When no
//! usable C compiler is found the C variants are simply absent from the
//! suite; the Rust variants still run.

fn main() {
    println!("cargo:rustc-check-cfg=cfg(c_implementation_active)");

    let compiler = cc::Build::new().get_compiler();
    let compiler_name = if compiler.is_like_clang() {
        "Clang"
    } else if compiler.is_like_gnu() {
        "GCC"
    } else if compiler.is_like_msvc() {
        "MSVC"
    } else {
        println!("cargo:warning=No usable C compiler found; C benchmark variants disabled.");
        return;
    };

    let mut build = cc::Build::new();
    let mut any = false;
    let c_files = glob::glob("src/**/*.c")
        .expect("Failed to read glob pattern")
        .filter_map(|entry| entry.ok());
    for file in c_files {
        println!("cargo:rerun-if-changed={}", file.display());
        build.file(file);
        any = true;
    }
    if !any {
        return;
    }

    build.opt_level(3);
    build.compile("ffi_playground_native");

    println!("cargo:rustc-cfg=c_implementation_active");
    println!("cargo:rustc-env=C_COMPILER_NAME={}", compiler_name);
}
