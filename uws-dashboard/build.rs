use std::env;
use std::fs;
use std::path::Path;

const DATASET: &str = "location_detail_final_v3.csv";
const REQUIRED_COLUMNS: [&str; 5] = ["region", "elevation", "latitude", "longitude", "name"];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let src = Path::new("../fixtures").join(DATASET);

    // The dashboard cannot serve without its dataset, so a missing or
    // headerless fixture stops the build instead of embedding a stub.
    if !src.exists() {
        panic!("station dataset {} not found", src.display());
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(&src)
        .expect("Failed to open station dataset");
    let headers = rdr.headers().expect("Failed to read station dataset header");
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            panic!("station dataset {} is missing column {:?}", src.display(), column);
        }
    }

    fs::copy(&src, Path::new(&out_dir).join(DATASET)).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/{}", DATASET);
}
