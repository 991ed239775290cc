use std::fs;

use forge_icon::{IconProfile, IconRenderer, LabelMethod};
use image::ColorType;

fn offline_profile(dir: &tempfile::TempDir) -> IconProfile {
    IconProfile::new()
        .with_font_candidates(Vec::new())
        .with_output(dir.path().join("image.png"))
}

#[test]
fn export_writes_rgba_png_of_fixed_size() {
    let dir = tempfile::tempdir().unwrap();
    let report = IconRenderer::new(offline_profile(&dir)).export().unwrap();

    assert_eq!(report.path, dir.path().join("image.png"));
    assert_eq!((report.width, report.height), (1024, 1024));

    let img = image::open(&report.path).unwrap();
    assert_eq!(img.color(), ColorType::Rgba8);
    assert_eq!((img.width(), img.height()), (1024, 1024));
}

#[test]
fn output_is_byte_identical_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = IconRenderer::new(offline_profile(&dir));

    let first = renderer.export().unwrap();
    let first_bytes = fs::read(&first.path).unwrap();
    let second = renderer.export().unwrap();
    let second_bytes = fs::read(&second.path).unwrap();

    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn default_fonts_are_deterministic_too() {
    let dir = tempfile::tempdir().unwrap();
    let a = IconRenderer::new(IconProfile::new().with_output(dir.path().join("a.png")))
        .export()
        .unwrap();
    let b = IconRenderer::new(IconProfile::new().with_output(dir.path().join("b.png")))
        .export()
        .unwrap();

    assert_eq!(fs::read(a.path).unwrap(), fs::read(b.path).unwrap());
    // Whatever font resolved, the label is centered or at the fixed offset
    let label = a.label.unwrap();
    match label.method {
        LabelMethod::Vector | LabelMethod::BuiltIn => {
            let width = label.width.unwrap();
            let slack = 1024.0 - width - 2.0 * label.x;
            assert!((0.0..=1.0).contains(&slack), "label off center by {slack}");
        }
        LabelMethod::Approximate => assert_eq!(label.x, 392.0),
    }
}

#[test]
fn export_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("image.png");
    fs::write(&path, b"stale").unwrap();

    IconRenderer::new(offline_profile(&dir)).export().unwrap();

    let img = image::open(&path).unwrap();
    assert_eq!((img.width(), img.height()), (1024, 1024));
}

#[test]
fn finder_patterns_only_in_three_corners() {
    let dir = tempfile::tempdir().unwrap();
    let report = IconRenderer::new(offline_profile(&dir)).export().unwrap();
    let img = image::open(&report.path).unwrap().to_rgba8();

    // QR section starts at (362, 150) with 33px cells; sample each finder center
    let center = |gx: u32, gy: u32| img.get_pixel(362 + gx * 33 + 16, 150 + gy * 33 + 16).0;

    assert_eq!(center(1, 1), [0, 0, 0, 255]);
    assert_eq!(center(7, 1), [0, 0, 0, 255]);
    assert_eq!(center(1, 7), [0, 0, 0, 255]);
    assert_eq!(center(7, 7), [240, 240, 240, 255]);
}

#[test]
fn anvil_is_drawn_below_qr_code() {
    let dir = tempfile::tempdir().unwrap();
    let report = IconRenderer::new(offline_profile(&dir)).export().unwrap();
    let img = image::open(&report.path).unwrap().to_rgba8();

    // Body, horn tip region, both legs
    assert_eq!(img.get_pixel(444, 580).0, [0, 0, 0, 255]);
    assert_eq!(img.get_pixel(720, 580).0, [0, 0, 0, 255]);
    assert_eq!(img.get_pixel(372, 690).0, [0, 0, 0, 255]);
    assert_eq!(img.get_pixel(517, 690).0, [0, 0, 0, 255]);
    // Gap between QR section and anvil
    assert_eq!(img.get_pixel(512, 500).0, [240, 240, 240, 255]);
}

#[test]
fn label_falls_back_to_builtin_font_when_no_font_resolves() {
    let dir = tempfile::tempdir().unwrap();
    let profile = offline_profile(&dir).with_font_candidates(vec![
        dir.path().join("missing-bold.ttf"),
        dir.path().join("missing.ttc"),
    ]);
    let report = IconRenderer::new(profile).export().unwrap();

    let label = report.label.unwrap();
    assert_eq!(label.method, LabelMethod::BuiltIn);
    assert_eq!(label.x, 324.0);
    assert_eq!(label.y, 770.0);
}

#[test]
fn profile_colors_reach_the_image() {
    let dir = tempfile::tempdir().unwrap();
    let profile = offline_profile(&dir)
        .with_background("#ffffff")
        .with_ink("#1e40af");
    let report = IconRenderer::new(profile).export().unwrap();
    let img = image::open(&report.path).unwrap().to_rgba8();

    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    assert_eq!(img.get_pixel(444, 580).0, [0x1e, 0x40, 0xaf, 255]);
}

#[test]
fn vector_label_is_centered_by_measured_width() {
    let font = std::path::Path::new("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf");
    if !font.exists() {
        eprintln!("skipping: {} not installed", font.display());
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let profile = offline_profile(&dir).with_font_candidates(vec![font.to_path_buf()]);
    let report = IconRenderer::new(profile).export().unwrap();

    let label = report.label.unwrap();
    assert_eq!(label.method, LabelMethod::Vector);
    assert_eq!(label.y, 770.0);
    assert!(label.family.is_some());

    let width = label.width.unwrap();
    assert!(width > 0.0);
    let slack = 1024.0 - width - 2.0 * label.x;
    assert!((0.0..=1.0).contains(&slack), "label off center by {slack}");

    // Ink starts at the computed left edge, not before it
    let img = image::open(&report.path).unwrap().to_rgba8();
    let left = label.x as u32;
    let ink_before = (770..850).any(|y| {
        (0..left.saturating_sub(1)).any(|x| img.get_pixel(x, y).0 != [240, 240, 240, 255])
    });
    assert!(!ink_before);
}
