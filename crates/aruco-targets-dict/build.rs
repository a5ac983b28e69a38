use serde::Deserialize;
use std::{env, fmt::Write as _, fs, path::Path};

#[derive(Deserialize)]
struct DictFile {
    name: String,
    marker_size: usize,
    max_correction_bits: u8,
    codes: Vec<u64>,
}

fn main() {
    let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    println!("cargo:rerun-if-changed={}", data_dir.display());

    let mut paths: Vec<_> = fs::read_dir(&data_dir)
        .expect("read data dir")
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with("_CODES.json"))
        })
        .collect();
    paths.sort();

    let mut out = String::new();
    let mut names = Vec::new();
    for path in &paths {
        println!("cargo:rerun-if-changed={}", path.display());
        let raw = fs::read_to_string(path).expect("read dictionary json");
        let dict: DictFile = serde_json::from_str(&raw).expect("parse dictionary json");

        let bits = dict.marker_size * dict.marker_size;
        assert!(bits <= 64, "{}: {} bits do not fit in u64", dict.name, bits);
        let mask = if bits == 64 { u64::MAX } else { (1u64 << bits) - 1 };
        for &code in &dict.codes {
            assert!(code & !mask == 0, "{}: code {code:#x} exceeds {bits} bits", dict.name);
        }

        let ident = dict.name.to_uppercase();
        writeln!(
            out,
            "pub static {ident}_CODES: [u64; {}] = {:?};",
            dict.codes.len(),
            dict.codes
        )
        .unwrap();
        writeln!(
            out,
            "pub static {ident}: Dictionary = Dictionary {{ name: {:?}, marker_size: {}, max_correction_bits: {}, codes: &{ident}_CODES }};",
            dict.name, dict.marker_size, dict.max_correction_bits
        )
        .unwrap();
        names.push(ident);
    }

    let list = names
        .iter()
        .map(|n| format!("&{n}"))
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "pub static EMBEDDED: &[&Dictionary] = &[{list}];").unwrap();

    let dest = Path::new(&env::var("OUT_DIR").expect("OUT_DIR")).join("builtins.rs");
    fs::write(dest, out).expect("write builtins.rs");
}
