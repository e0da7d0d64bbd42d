use super::*;

fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("portfolio-gui-{name}-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn decodes_png_into_color_image() {
    let dir = scratch_dir("png");
    let path = dir.join("tiny.png");
    image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]))
        .save(&path)
        .expect("write png");

    let color_image = decode(&path).expect("decode");
    assert_eq!(color_image.size, [3, 2]);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn oversized_images_are_downscaled() {
    let dir = scratch_dir("large");
    let path = dir.join("large.png");
    image::RgbaImage::new(MAX_DIMENSION * 2, 10)
        .save(&path)
        .expect("write png");

    let color_image = decode(&path).expect("decode");
    assert_eq!(color_image.size[0], MAX_DIMENSION as usize);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn missing_file_reports_path() {
    let err = decode(Path::new("definitely/not/here.png")).expect_err("missing");
    assert!(format!("{err:#}").contains("here.png"));
}

#[test]
fn missing_images_are_cached_as_absent() {
    let ctx = egui::Context::default();
    let mut images = ProjectImages::new(scratch_dir("empty"));
    assert!(images.texture(&ctx, "/nothing.png").is_none());
    assert!(images.textures.contains_key("/nothing.png"));
}
