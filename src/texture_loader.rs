use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use exif::{In, Reader, Tag, Value};
use log::{debug, warn};
use raylib::prelude::*;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

/// Load every readable image in `dir` as a texture, sorted by file name.
/// Unreadable files are logged and skipped; zero loadable images is an
/// error.
pub fn load_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    dir: &Path,
) -> Result<Vec<Texture2D>> {
    let paths = collect_image_paths(dir)?;
    let mut textures = Vec::with_capacity(paths.len());
    for path in &paths {
        match load_texture(rl, thread, path) {
            Ok(texture) => textures.push(texture),
            Err(e) => warn!("skipping {}: {e:#}", path.display()),
        }
    }
    if textures.is_empty() {
        bail!("none of the {} image files in {} could be loaded", paths.len(), dir.display());
    }
    Ok(textures)
}

/// Image files in `dir`, sorted by file name.
pub fn collect_image_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.context("failed to read directory entry")?.path();
        if path.is_file() && has_image_extension(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        bail!("no image files found in {}", dir.display());
    }
    Ok(paths)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Load one image, bake its EXIF orientation into the pixels and upload
/// it as a texture. Baking the rotation first matters: the pan limits
/// are computed from the texture's dimensions, which must match what is
/// shown.
fn load_texture(rl: &mut RaylibHandle, thread: &RaylibThread, path: &Path) -> Result<Texture2D> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &bytes)
        .map_err(|e| anyhow::anyhow!("failed to decode {}: {e}", path.display()))?;

    // EXIF data is only reliable in JPEGs; other formats are taken as-is.
    if extension == "jpg" || extension == "jpeg" {
        match exif_orientation(&bytes) {
            // 1 = upright, 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW.
            // Orientations involving mirror flips are left alone.
            3 => {
                image.rotate_cw();
                image.rotate_cw();
            }
            6 => image.rotate_cw(),
            8 => image.rotate_ccw(),
            other => debug!("{}: orientation {other}, not rotating", path.display()),
        }
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow::anyhow!("failed to create texture for {}: {e}", path.display()))
}

/// EXIF orientation tag value, defaulting to 1 (upright) when absent or
/// unreadable.
fn exif_orientation(bytes: &[u8]) -> u16 {
    let exif = match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif,
        Err(_) => return 1,
    };
    match exif.get_field(Tag::Orientation, In::PRIMARY) {
        Some(field) => match &field.value {
            Value::Short(values) => values.first().copied().unwrap_or(1),
            _ => 1,
        },
        None => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_image_extensions_case_insensitively() {
        assert!(has_image_extension(Path::new("a.png")));
        assert!(has_image_extension(Path::new("b.JPG")));
        assert!(has_image_extension(Path::new("c.JpEg")));
        assert!(!has_image_extension(Path::new("d.txt")));
        assert!(!has_image_extension(Path::new("noext")));
    }

    #[test]
    fn orientation_defaults_to_upright_for_non_exif_bytes() {
        assert_eq!(exif_orientation(b"not an image"), 1);
    }
}
