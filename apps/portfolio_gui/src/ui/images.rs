//! Project artwork, decoded once from the asset directory into textures.

use std::{collections::HashMap, fs, path::Path};

use anyhow::Context;
use image::GenericImageView;

const MAX_DIMENSION: u32 = 960;

pub struct ProjectImages {
    assets_dir: std::path::PathBuf,
    textures: HashMap<&'static str, Option<egui::TextureHandle>>,
}

impl ProjectImages {
    pub fn new(assets_dir: impl Into<std::path::PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            textures: HashMap::new(),
        }
    }

    /// Texture for `image`, loading it on first use. Images that fail to load
    /// are remembered as missing and not retried.
    pub fn texture(&mut self, ctx: &egui::Context, image: &'static str) -> Option<&egui::TextureHandle> {
        let assets_dir = &self.assets_dir;
        self.textures
            .entry(image)
            .or_insert_with(|| {
                let path = assets_dir.join(image.trim_start_matches('/'));
                match decode(&path) {
                    Ok(color_image) => Some(ctx.load_texture(
                        format!("project-image:{image}"),
                        color_image,
                        egui::TextureOptions::LINEAR,
                    )),
                    Err(err) => {
                        tracing::warn!(path = %path.display(), "project image unavailable: {err:#}");
                        None
                    }
                }
            })
            .as_ref()
    }
}

pub fn decode(path: &Path) -> anyhow::Result<egui::ColorImage> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let decoded = image::load_from_memory(&bytes)
        .with_context(|| format!("failed to decode {}", path.display()))?;

    let (width, height) = decoded.dimensions();
    let resized = if width.max(height) > MAX_DIMENSION {
        decoded.thumbnail(MAX_DIMENSION, MAX_DIMENSION)
    } else {
        decoded
    };
    let rgba = resized.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

#[cfg(test)]
#[path = "../tests/images_tests.rs"]
mod tests;
