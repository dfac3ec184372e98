use std::path::PathBuf;

use wavefront_mesher::{
    export_obj, load_wavefront, parse_str, ParseErrorKind, ParserConfig, VertexAttributes,
    WavefrontError, WavefrontFile,
};

// ── Helper Functions ─────────────────────────────────────────────────────

fn asset(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("assets")
        .join(name)
}

fn write_temp(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

const TRIANGLE: &str = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";

// ── Fixture Files ────────────────────────────────────────────────────────

#[test]
fn test_parse_cube_quads() {
    let doc = load_wavefront(asset("cube.obj")).unwrap();

    assert_eq!(doc.positions().len(), 8 * 3);
    assert_eq!(doc.texcoords().len(), 14 * 2);
    assert_eq!(doc.normals().len(), 6 * 3);
    assert_eq!(doc.shapes().len(), 1);

    let shape = &doc.shapes()[0];
    assert_eq!(shape.indices().len(), 36);
    assert_eq!(shape.vertex_counts(), &[3; 12]);

    // The first face is a square, so both diagonals tie.
    let first_quad: Vec<isize> = shape.indices()[..6].iter().map(|v| v.position).collect();
    assert_eq!(first_quad, vec![0, 4, 2, 4, 6, 2]);
    assert!(shape.indices()[..6].iter().all(|v| v.normal == 0));
}

#[test]
fn test_parse_plane_triangles() {
    let doc = load_wavefront(asset("plane.obj")).unwrap();

    assert_eq!(doc.positions().len(), 6 * 3);
    assert_eq!(doc.texcoords().len(), 6 * 2);
    assert_eq!(doc.normals().len(), 6 * 3);

    let shape = &doc.shapes()[0];
    let project = |f: fn(&VertexAttributes) -> isize| -> Vec<isize> {
        shape.indices().iter().map(f).collect()
    };
    assert_eq!(project(|v| v.position), vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(project(|v| v.texcoord), vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(project(|v| v.normal), vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(shape.vertex_counts(), &[3, 3]);
}

#[test]
fn test_document_indices_stay_in_bounds() {
    let doc = load_wavefront(asset("cube.obj")).unwrap();

    for v in doc.shapes()[0].indices() {
        assert!(doc.position(v.position_index().unwrap()).is_some());
        assert!(doc.normal(v.normal_index().unwrap()).is_some());
        assert!(doc.texcoord(v.texcoord_index().unwrap()).is_some());
    }
}

#[test]
fn test_parsing_twice_gives_equal_documents() {
    let file = WavefrontFile::new(asset("cube.obj"));
    assert_eq!(file.parse().unwrap(), file.parse().unwrap());
}

#[test]
fn test_cube_survives_export() {
    let doc = load_wavefront(asset("cube.obj")).unwrap();
    let reparsed = parse_str(&export_obj(&doc, "cube").unwrap()).unwrap();

    assert_eq!(reparsed.positions(), doc.positions());
    assert_eq!(reparsed.shapes()[0].indices(), doc.shapes()[0].indices());
}

// ── Error Handling ───────────────────────────────────────────────────────

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_wavefront(dir.path().join("missing.obj")).unwrap_err();
    assert!(matches!(err, WavefrontError::FileNotFound(_)));
}

#[test]
fn test_malformed_face_token_fails_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp(&dir, "bad.obj", b"v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 -4\n");

    match load_wavefront(path).unwrap_err() {
        WavefrontError::Parse { line, kind, .. } => {
            assert_eq!(line, 4);
            assert_eq!(
                kind,
                ParseErrorKind::NegativeIndexOutOfRange { index: -4, count: 3 }
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_pentagon_fails_document() {
    let source = "v 0 0 0\nv 1 0 0\nv 2 1 0\nv 1 2 0\nv 0 1 0\nf 1 2 3 4 5\n";
    assert!(matches!(
        parse_str(source),
        Err(WavefrontError::UnsupportedPolygon { vertex_count: 5, .. })
    ));
}

// ── Encodings ────────────────────────────────────────────────────────────

#[test]
fn test_latin1_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut bytes = b"# mod\xe8le\n".to_vec();
    bytes.extend_from_slice(TRIANGLE.as_bytes());
    let path = write_temp(&dir, "latin1.obj", &bytes);

    let utf8 = WavefrontFile::new(&path).parse();
    assert!(matches!(utf8, Err(WavefrontError::Decode { .. })));

    let config = ParserConfig::default().with_encoding_label("latin1").unwrap();
    let doc = WavefrontFile::with_config(&path, config).parse().unwrap();
    assert_eq!(doc.total_triangles(), 1);
}

#[test]
fn test_utf16_file_with_bom() {
    let dir = tempfile::tempdir().unwrap();
    let mut bytes = vec![0xFF, 0xFE];
    for unit in TRIANGLE.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    let path = write_temp(&dir, "utf16.obj", &bytes);

    let doc = WavefrontFile::new(&path).parse().unwrap();
    assert_eq!(doc.vertex_count(), 3);
    assert_eq!(doc.total_triangles(), 1);
}
