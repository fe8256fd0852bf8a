//! End-to-end listing of constructed archives.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use deepjar_core::ListingReport;
use deepjar_core::TraversalConfig;
use deepjar_core::TreeWriter;
use deepjar_core::list_archive;
use deepjar_core::list_archive_path;
use deepjar_core::metadata::digest_hex;
use deepjar_core::test_utils::DataDescriptorZipBuilder;
use deepjar_core::test_utils::ZipTestBuilder;
use deepjar_core::test_utils::create_test_zip;
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

fn list(name: &str, zip: &[u8], config: &TraversalConfig) -> (String, ListingReport) {
    let mut tree = TreeWriter::new(Vec::new());
    let report = list_archive(name, Cursor::new(zip), config, &mut tree).expect("listing failed");
    (String::from_utf8(tree.into_inner()).unwrap(), report)
}

fn text_config() -> TraversalConfig {
    TraversalConfig::default().with_extensions(["txt"])
}

#[test]
fn test_readme_with_line_numbers() {
    let zip = create_test_zip(vec![("readme.txt", b"hello\nworld\n")]);
    let config = TraversalConfig {
        show_line_numbers: true,
        ..text_config()
    };

    let (out, _) = list("demo.zip", &zip, &config);

    assert_eq!(
        out,
        "demo.zip\n\
         │ readme.txt\n\
         │ │ 1 hello\n\
         │ │ 2 world\n\
         │ └── readme.txt\n\
         └── demo.zip\n"
    );
}

#[test]
fn test_content_without_line_numbers() {
    let zip = create_test_zip(vec![("a.txt", b"one\n\nthree")]);
    let (out, _) = list("a.zip", &zip, &text_config());
    assert!(out.contains("│ │ one\n│ │ \n│ │ three\n"));
}

#[test]
fn test_filter_counts_excluded_members() {
    let zip = create_test_zip(vec![
        ("lib/A.class", b"\xca\xfe\xba\xbe"),
        ("lib/B.txt", b"text"),
        ("docs/readme.md", b"# docs"),
    ]);
    let config = TraversalConfig::default()
        .with_filter(r"^lib/.*\.class$")
        .unwrap();

    let (out, report) = list("f.zip", &zip, &config);

    assert_eq!(
        out,
        "f.zip\n\
         │ lib/A.class\n\
         │ (2 files excluded by filter)\n\
         └── f.zip\n"
    );
    assert_eq!(report.files_excluded, 2);
}

#[test]
fn test_nested_archive_depths() {
    let outer = ZipTestBuilder::new()
        .add_archive(
            "inner.zip",
            ZipTestBuilder::new().add_file("deep.txt", b"bottom\n"),
        )
        .build();

    let (out, report) = list("outer.zip", &outer, &text_config());

    assert_eq!(
        out,
        "outer.zip\n\
         │ inner.zip\n\
         │ │ deep.txt\n\
         │ │ │ bottom\n\
         │ │ └── deep.txt\n\
         │ └── inner.zip\n\
         └── outer.zip\n"
    );
    assert_eq!(report.archives_descended, 1);
    assert_eq!(report.max_depth_reached, 2);
}

#[test]
fn test_archive_named_like_text_is_descended() {
    let outer = ZipTestBuilder::new()
        .add_archive("notes.txt", ZipTestBuilder::new().add_file("x.bin", b"x"))
        .build();

    let (out, report) = list("outer.zip", &outer, &text_config());

    assert!(out.contains("│ │ x.bin\n"));
    assert!(!out.contains("PK"));
    assert_eq!(report.archives_descended, 1);
    assert_eq!(report.files_rendered, 0);
}

#[test]
fn test_archive_descended_even_when_filtered() {
    let outer = ZipTestBuilder::new()
        .add_archive(
            "vendor/lib.jar",
            ZipTestBuilder::new().add_file("com/Foo.class", b"\xca\xfe"),
        )
        .build();
    let config = TraversalConfig::default().with_filter(r".*\.class").unwrap();

    let (out, _) = list("app.jar", &outer, &config);

    assert!(out.contains("│ vendor/lib.jar\n"));
    assert!(out.contains("│ │ com/Foo.class\n"));
    assert!(!out.contains("excluded"));
}

#[test]
fn test_entries_after_nested_archive_are_listed() {
    let outer = ZipTestBuilder::new()
        .add_file("first.bin", b"1")
        .add_archive("mid.zip", ZipTestBuilder::new().add_file("in.bin", b"2"))
        .add_deflated("last.bin", &[3u8; 10_000])
        .build();

    let (out, report) = list("o.zip", &outer, &TraversalConfig::default());

    let first = out.find("│ first.bin").unwrap();
    let inner = out.find("│ │ in.bin").unwrap();
    let last = out.find("│ last.bin").unwrap();
    assert!(first < inner && inner < last);
    assert_eq!(report.entries, 4);
}

#[test]
fn test_directories_are_listed_without_content() {
    let zip = ZipTestBuilder::new()
        .add_directory("META-INF/")
        .add_file("META-INF/MANIFEST.MF", b"Manifest-Version: 1.0\n")
        .build();
    let config = TraversalConfig {
        show_size: true,
        show_hash: true,
        ..Default::default()
    };

    let (out, report) = list("d.jar", &zip, &config);

    assert!(out.contains("│ META-INF/\n"));
    assert_eq!(report.directories, 1);
    assert_eq!(report.bytes_buffered, 22);
}

#[test]
fn test_filtered_directories_are_not_counted() {
    let zip = ZipTestBuilder::new()
        .add_directory("docs/")
        .add_file("lib/a.class", b"a")
        .build();
    let config = TraversalConfig::default().with_filter(r"lib/.*").unwrap();

    let (out, _) = list("d.zip", &zip, &config);

    assert!(!out.contains("docs/"));
    assert!(!out.contains("excluded by filter"));
}

#[test]
fn test_manifest_rendering() {
    let zip = create_test_zip(vec![(
        "META-INF/MANIFEST.MF",
        b"Manifest-Version: 1.0\r\nMain-Class: app.Main\r\n",
    )]);
    let config = TraversalConfig {
        show_manifest: true,
        ..Default::default()
    };

    let (out, _) = list("m.jar", &zip, &config);

    assert!(out.contains("│ │ Manifest-Version: 1.0\n│ │ Main-Class: app.Main\n"));
    assert!(out.contains("│ └── META-INF/MANIFEST.MF\n"));
}

#[test]
fn test_size_and_hash_annotations() {
    let zip = create_test_zip(vec![("data.bin", b"hello world"), ("r.txt", b"hi")]);
    let config = TraversalConfig {
        show_size: true,
        show_hash: true,
        ..text_config()
    };

    let (out, _) = list("h.zip", &zip, &config);

    assert!(out.contains("│ data.bin  (11 bytes)  5eb63bbbe01eeed093cb22bb8f5acdc3\n"));
    assert!(out.contains(&format!("│ r.txt  (2 bytes)  {}\n", digest_hex(b"hi"))));
}

#[test]
fn test_deflated_members_are_decompressed() {
    let zip = ZipTestBuilder::new()
        .add_deflated("big.txt", "line\n".repeat(2_000).as_bytes())
        .build();
    let config = TraversalConfig {
        show_size: true,
        show_line_numbers: true,
        ..text_config()
    };

    let (out, report) = list("z.zip", &zip, &config);

    assert!(out.contains("│ big.txt  (10000 bytes)\n"));
    assert!(out.contains("│ │ 2000 line\n"));
    assert_eq!(report.files_rendered, 1);
}

#[test]
fn test_too_large_member_is_skipped() {
    let inner = ZipTestBuilder::new().add_file("x.txt", b"x");
    let outer = ZipTestBuilder::new()
        .add_file("huge.txt", &[b'a'; 64])
        .add_archive("huge.zip", inner)
        .add_file("after.txt", b"ok")
        .build();
    let config = TraversalConfig {
        max_member_size: 32,
        show_size: true,
        show_hash: true,
        ..text_config()
    };

    let (out, report) = list("o.zip", &outer, &config);

    assert!(out.contains("│ huge.txt\n│ │ [ Skipping file -- too large. ]\n"));
    assert!(!out.contains("aaaa"));
    assert!(!out.contains("└── huge.txt"));
    assert!(out.contains("│ after.txt  (2 bytes)"));
    assert_eq!(report.skipped_too_large, 2);
}

#[test]
fn test_oversized_opaque_member_gets_placeholders() {
    let zip = create_test_zip(vec![("blob.bin", &[0u8; 100])]);
    let config = TraversalConfig {
        max_member_size: 10,
        show_size: true,
        show_hash: true,
        ..Default::default()
    };

    let (out, report) = list("p.zip", &zip, &config);

    assert!(out.contains("│ blob.bin  (? bytes)  [?]\n"));
    assert_eq!(report.bytes_buffered, 0);
}

#[test]
fn test_depth_limit_stops_descent() {
    let outer = ZipTestBuilder::new()
        .add_archive(
            "a.zip",
            ZipTestBuilder::new().add_archive(
                "b.zip",
                ZipTestBuilder::new().add_file("c.bin", b"c"),
            ),
        )
        .build();
    let config = TraversalConfig {
        max_depth: 2,
        ..Default::default()
    };

    let (out, report) = list("root.zip", &outer, &config);

    assert!(out.contains("│ │ b.zip\n│ │ │ [ Skipping archive -- nesting too deep. ]\n│ │ └── b.zip\n"));
    assert!(!out.contains("c.bin"));
    assert_eq!(report.skipped_too_deep, 1);
    assert!(report.has_skips());
}

#[test]
fn test_output_is_idempotent() {
    let zip = ZipTestBuilder::new()
        .add_directory("lib/")
        .add_archive("lib/x.jar", ZipTestBuilder::new().add_file("a.txt", b"a\nb"))
        .add_file("z.bin", b"z")
        .build();
    let config = TraversalConfig {
        show_hash: true,
        show_line_numbers: true,
        ..text_config()
    };

    let (first, _) = list("i.zip", &zip, &config);
    let (second, _) = list("i.zip", &zip, &config);
    assert_eq!(first, second);
}

#[test]
fn test_hash_is_stable_across_archives() {
    let payload = b"same bytes everywhere";
    let outer = ZipTestBuilder::new()
        .add_file("one.bin", payload)
        .add_archive("n.zip", ZipTestBuilder::new().add_deflated("two.dat", payload))
        .build();
    let config = TraversalConfig {
        show_hash: true,
        ..Default::default()
    };

    let (out, _) = list("s.zip", &outer, &config);

    let digest = digest_hex(payload);
    assert_eq!(out.matches(&digest).count(), 2);
}

#[test]
fn test_data_descriptor_archive_is_listed() {
    let zip = DataDescriptorZipBuilder::new()
        .add_directory("META-INF/")
        .add_file("META-INF/MANIFEST.MF", b"Manifest-Version: 1.0\r\n")
        .add_file("com/A.class", b"\xca\xfe\xba\xbe")
        .build();
    let config = TraversalConfig {
        show_manifest: true,
        show_size: true,
        ..Default::default()
    };

    let (out, report) = list("dd.jar", &zip, &config);

    assert_eq!(
        out,
        "dd.jar\n\
         │ META-INF/\n\
         │ META-INF/MANIFEST.MF  (23 bytes)\n\
         │ │ Manifest-Version: 1.0\n\
         │ └── META-INF/MANIFEST.MF\n\
         │ com/A.class  (4 bytes)\n\
         └── dd.jar\n"
    );
    assert_eq!(report.entries, 3);
}

#[test]
fn test_data_descriptor_archive_nested_in_plain_archive() {
    let inner = DataDescriptorZipBuilder::new()
        .add_file("deep.txt", b"bottom\n")
        .build();
    let outer = ZipTestBuilder::new()
        .add_file("lib/inner.jar", &inner)
        .add_file("after.bin", b"z")
        .build();

    let (out, report) = list("o.zip", &outer, &text_config());

    assert!(out.contains("│ lib/inner.jar\n│ │ deep.txt\n│ │ │ bottom\n"));
    assert!(out.contains("│ └── lib/inner.jar\n│ after.bin\n"));
    assert_eq!(report.archives_descended, 1);
}

#[test]
fn test_plain_archive_nested_in_data_descriptor_archive() {
    let outer = DataDescriptorZipBuilder::new()
        .add_descriptor_archive(
            "a.jar",
            DataDescriptorZipBuilder::new()
                .add_archive("b.zip", ZipTestBuilder::new().add_file("c.txt", b"c\n")),
        )
        .build();

    let (out, report) = list("root.jar", &outer, &text_config());

    assert!(out.contains("│ │ │ c.txt\n│ │ │ │ c\n│ │ │ └── c.txt\n"));
    assert_eq!(report.archives_descended, 2);
    assert_eq!(report.max_depth_reached, 3);
}

#[test]
fn test_corrupt_nested_archive_fails_listing() {
    let mut fake = b"PK\x03\x04".to_vec();
    fake.extend_from_slice(&[0xff; 8]);
    let zip = create_test_zip(vec![("broken.jar", &fake)]);

    let mut tree = TreeWriter::new(Vec::new());
    let config = TraversalConfig::default();
    let result = list_archive("c.zip", Cursor::new(zip), &config, &mut tree);
    assert!(result.is_err());
}

#[test]
fn test_list_archive_path_uses_file_name() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("app.jar");
    fs::write(&path, create_test_zip(vec![("a.bin", b"a")])).unwrap();

    let mut tree = TreeWriter::new(Vec::new());
    list_archive_path(&path, &TraversalConfig::default(), &mut tree).unwrap();

    let out = String::from_utf8(tree.into_inner()).unwrap();
    assert!(out.starts_with("app.jar\n"));
    assert!(out.ends_with("└── app.jar\n"));
}
