use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=assets/");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("car_images.rs");
    let mut f = fs::File::create(&dest_path).unwrap();

    writeln!(f, "/// Bundled images: (id, art, width in columns, height in rows).").unwrap();
    writeln!(f, "pub const IMAGE_ASSETS: &[(&str, &str, u16, u16)] = &[").unwrap();

    let asset_dir = Path::new("assets");
    if !asset_dir.exists() {
        writeln!(f, "];").unwrap();
        return;
    }

    let mut entries: Vec<_> = fs::read_dir(asset_dir)
        .unwrap()
        .map(|res| res.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();

    // Stable order keeps the generated file deterministic
    entries.sort();

    for path in entries {
        let id = path.file_stem().unwrap().to_string_lossy().to_string();
        let content = fs::read_to_string(&path).unwrap();

        // Strip trailing whitespace per line and trailing blank lines.
        // Leading spaces are kept: they position the drawing.
        let mut lines: Vec<&str> = content.lines().map(|l| l.trim_end()).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        while lines.first().is_some_and(|l| l.is_empty()) {
            lines.remove(0);
        }

        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let height = lines.len();
        let art = lines.join("\n");

        writeln!(f, "    ({:?}, {:?}, {}, {}),", id, art, width, height).unwrap();
    }

    writeln!(f, "];").unwrap();
}
