//! End-to-end generation runs against temporary directories.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use bindata::engine::REGISTRY_FILE;
use bindata::{GenConfig, GenError, generate};
use tempfile::TempDir;

const LOGO: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR\x01";

struct Fixture {
    _dir: TempDir,
    input: PathBuf,
    output: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("assets");
        let output = dir.path().join("gen");
        fs::create_dir_all(&input).unwrap();
        Self {
            _dir: dir,
            input,
            output,
        }
    }

    fn file(&self, rel: &str, contents: &[u8]) -> PathBuf {
        let path = self.input.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
        path
    }

    fn config(&self) -> GenConfig {
        GenConfig::new(&self.input, &self.output).with_quiet(true)
    }

    fn read(&self, name: &str) -> String {
        fs::read_to_string(self.output.join(name)).unwrap()
    }
}

fn mtime(path: &Path) -> SystemTime {
    fs::metadata(path).unwrap().modified().unwrap()
}

fn set_mtime(path: &Path, time: SystemTime) {
    File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(time)
        .unwrap();
}

#[test]
fn test_logo_scenario() {
    let fx = Fixture::new();
    fx.file("images/logo.png", LOGO);

    let report = generate(&fx.config().with_compress(false)).unwrap();
    assert_eq!(report.assets, 1);
    assert_eq!(report.translated, 1);
    assert!(report.registry_written);

    let unit = fx.read("images_logo_png.rs");
    assert!(unit.contains("pub fn images_logo_png()"));
    assert!(unit.contains("Raw contents (17 bytes)."));
    assert!(unit.contains("pub const PATH: &str = \"images/logo.png\";"));
}

#[test]
fn test_leading_digit_scenario() {
    let fx = Fixture::new();
    fx.file("3d/model.obj", b"v 0 0 0\n");

    generate(&fx.config()).unwrap();
    assert!(fx.output.join("_3d_model_obj.rs").is_file());
    assert!(fx.read(REGISTRY_FILE).contains("pub mod _3d_model_obj {"));
}

#[test]
fn test_registry_has_one_entry_per_file() {
    let fx = Fixture::new();
    fx.file("a.txt", b"a");
    fx.file("nested/b.txt", b"b");
    fx.file("nested/deeper/c.bin", &[0, 1, 2]);
    fx.file("empty.txt", b"");
    fx.file(".hidden", b"secret");
    fx.file(".git/HEAD", b"ref: refs/heads/main");

    let report = generate(&fx.config()).unwrap();
    assert_eq!(report.assets, 4);

    let registry = fx.read(REGISTRY_FILE);
    assert_eq!(registry.matches("registry.register(").count(), 4);
    for ident in ["a_txt", "nested_b_txt", "nested_deeper_c_bin", "empty_txt"] {
        assert!(registry.contains(&format!("registry.register({ident}::ENTRY);")), "{ident}");
        assert!(fx.output.join(format!("{ident}.rs")).is_file(), "{ident}");
    }
    assert!(!registry.contains("hidden"));
    assert!(!registry.contains("HEAD"));
}

#[test]
fn test_rerun_writes_nothing() {
    let fx = Fixture::new();
    fx.file("a.txt", b"alpha");
    fx.file("b/c.txt", b"gamma");

    generate(&fx.config()).unwrap();
    let units = ["a_txt.rs", "b_c_txt.rs", REGISTRY_FILE];
    let before: Vec<_> = units.iter().map(|u| mtime(&fx.output.join(u))).collect();

    let report = generate(&fx.config()).unwrap();
    assert_eq!(report.translated, 0);
    assert_eq!(report.skipped, 2);
    assert!(!report.registry_written);

    let after: Vec<_> = units.iter().map(|u| mtime(&fx.output.join(u))).collect();
    assert_eq!(before, after);
}

#[test]
fn test_only_stale_files_are_retranslated() {
    let fx = Fixture::new();
    let a = fx.file("a.txt", b"alpha");
    fx.file("b.txt", b"beta");
    generate(&fx.config()).unwrap();

    fs::write(&a, b"alpha, edited").unwrap();
    set_mtime(&a, SystemTime::now() + Duration::from_secs(30));

    let report = generate(&fx.config()).unwrap();
    assert_eq!(report.translated, 1);
    assert_eq!(report.skipped, 1);
    assert!(!report.registry_written);
    assert!(fx.read("a_txt.rs").contains("13 bytes uncompressed"));
}

#[test]
fn test_force_retranslates_everything() {
    let fx = Fixture::new();
    fx.file("a.txt", b"alpha");
    fx.file("b.txt", b"beta");
    generate(&fx.config()).unwrap();

    let report = generate(&fx.config().with_force(true)).unwrap();
    assert_eq!(report.translated, 2);
    assert_eq!(report.skipped, 0);
}

#[test]
fn test_switching_modes_retranslates() {
    let fx = Fixture::new();
    fx.file("a.txt", b"alpha");
    generate(&fx.config()).unwrap();
    assert!(fx.read("a_txt.rs").contains("Result<::std::vec::Vec<u8>"));

    let report = generate(&fx.config().with_zero_copy(true)).unwrap();
    assert_eq!(report.translated, 1);
    assert!(report.registry_written);
    let unit = fx.read("a_txt.rs");
    assert!(unit.contains("Entry<::bindata_runtime::StaticBytes>"));
    assert!(unit.contains("inflate_cached(&CACHE, PATH, DATA)"));
    assert!(fx.read(REGISTRY_FILE).contains("pub type Data = ::bindata_runtime::StaticBytes;"));

    let report = generate(&fx.config().with_zero_copy(true).with_compress(false)).unwrap();
    assert_eq!(report.translated, 1);
    let unit = fx.read("a_txt.rs");
    assert!(unit.contains("Raw contents (5 bytes)."));
    assert!(!unit.contains("CACHE"));

    let report = generate(&fx.config().with_zero_copy(true).with_compress(false)).unwrap();
    assert_eq!(report.translated, 0);
}

#[test]
fn test_case_rename_rewrites_path() {
    let fx = Fixture::new();
    let old = fx.file("Logo.png", LOGO);
    generate(&fx.config()).unwrap();

    // A rename keeps the mtime, so the unit is not older than its source.
    fs::rename(&old, fx.input.join("logo.png")).unwrap();
    let report = generate(&fx.config()).unwrap();
    assert_eq!(report.translated, 1);
    assert!(report.registry_written);
    assert!(fx.read("logo_png.rs").contains("pub const PATH: &str = \"logo.png\";"));
}

#[test]
fn test_unwritable_unit_aborts_without_registry() {
    let fx = Fixture::new();
    fx.file("a.txt", b"alpha");
    let blocked = fx.output.join("a_txt.rs");
    fs::create_dir_all(&blocked).unwrap();

    let err = generate(&fx.config()).unwrap_err();
    match &err {
        GenError::Io(path, _) => assert_eq!(path, &blocked),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("a_txt.rs"));
    assert!(!fx.output.join(REGISTRY_FILE).exists());
}

#[test]
fn test_deleted_assets_are_pruned() {
    let fx = Fixture::new();
    fx.file("a.txt", b"alpha");
    let b = fx.file("b.txt", b"beta");
    generate(&fx.config()).unwrap();

    fs::remove_file(b).unwrap();
    fs::write(fx.output.join("c_txt.rs.tmp"), "partial").unwrap();
    fs::write(fx.output.join("helpers.rs"), "pub fn helper() {}\n").unwrap();

    let report = generate(&fx.config()).unwrap();
    assert_eq!(report.removed, 2);
    assert!(report.registry_written);
    assert!(fx.output.join("a_txt.rs").is_file());
    assert!(!fx.output.join("b_txt.rs").exists());
    assert!(!fx.output.join("c_txt.rs.tmp").exists());
    assert!(fx.output.join("helpers.rs").is_file());
    assert!(!fx.read(REGISTRY_FILE).contains("b_txt"));

    let report = generate(&fx.config()).unwrap();
    assert_eq!(report.removed, 0);
}

#[test]
fn test_new_file_updates_registry() {
    let fx = Fixture::new();
    fx.file("a.txt", b"alpha");
    generate(&fx.config()).unwrap();

    fx.file("b.txt", b"beta");
    let report = generate(&fx.config()).unwrap();
    assert_eq!(report.translated, 1);
    assert!(report.registry_written);
    assert!(fx.read(REGISTRY_FILE).contains("registry.register(b_txt::ENTRY);"));
}

#[test]
fn test_generation_is_idempotent_across_outputs() {
    let fx = Fixture::new();
    fx.file("images/logo.png", LOGO);
    fx.file("docs/read me.txt", "  indented\n\ttabbed\n".repeat(50).as_bytes());

    let second = fx.output.with_file_name("gen2");
    for zero_copy in [false, true] {
        let config = fx.config().with_zero_copy(zero_copy).with_force(true);
        generate(&config).unwrap();
        generate(&GenConfig { output: second.clone(), ..config }).unwrap();

        for name in ["images_logo_png.rs", "docs_read_me_txt.rs", REGISTRY_FILE] {
            assert_eq!(
                fs::read(fx.output.join(name)).unwrap(),
                fs::read(second.join(name)).unwrap(),
                "{name}"
            );
        }
    }
}

#[test]
fn test_zero_copy_registry_type() {
    let fx = Fixture::new();
    fx.file("a.txt", b"alpha");
    generate(&fx.config().with_zero_copy(true).with_module("embedded")).unwrap();

    let registry = fx.read(REGISTRY_FILE);
    assert!(registry.contains("pub const MODULE: &str = \"embedded\";"));
    assert!(registry.contains("pub type Data = ::bindata_runtime::StaticBytes;"));
    assert!(fx.read("a_txt.rs").contains("inflate_cached(&CACHE, PATH, DATA)"));
}

#[test]
fn test_collision_aborts_before_writing() {
    let fx = Fixture::new();
    fx.file("a-b.txt", b"1");
    fx.file("a.b.txt", b"2");

    let err = generate(&fx.config()).unwrap_err();
    assert!(matches!(err, GenError::Collision { .. }));
    assert!(!fx.output.join(REGISTRY_FILE).exists());
}

#[test]
fn test_missing_input_reports_path() {
    let fx = Fixture::new();
    let config = GenConfig::new(fx.input.join("missing"), &fx.output).with_quiet(true);

    let err = generate(&config).unwrap_err();
    assert!(err.to_string().contains("missing"));
}

#[test]
fn test_empty_input_dir() {
    let fx = Fixture::new();
    let report = generate(&fx.config()).unwrap();
    assert_eq!(report.assets, 0);
    assert!(fx.read(REGISTRY_FILE).contains("with_capacity(MODULE, 0)"));
}
