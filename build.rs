use std::{env, fs, path::Path};

fn main() {
    println!("cargo:rerun-if-changed=config.json");

    // OUT_DIR = target/debug/build/<crate>/out
    let Ok(out_dir) = env::var("OUT_DIR") else {
        println!("cargo:warning=Cannot read OUT_DIR, config.json not copied");
        return;
    };

    // Move up 3 directories to reach target/debug or target/release
    let Some(exe_dir) = Path::new(&out_dir).ancestors().nth(3) else {
        println!("cargo:warning=Cannot find executable directory");
        return;
    };

    let dst = exe_dir.join("config.json");

    match fs::copy("config.json", &dst) {
        Ok(_) => println!("cargo:warning=Copied config.json → {}", dst.display()),
        Err(e) => println!("cargo:warning=Could NOT copy config.json: {}", e),
    }
}
