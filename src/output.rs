use std::{
    fs::{self, File},
    io::{BufWriter, Write as _},
    path::Path,
};

use anyhow::{bail, ensure, Context as _, Result};
use image::{codecs::jpeg::JpegEncoder, ColorType, ImageFormat};
use log::debug;

use crate::pixel_buffer::{PixelBuffer, CHANNELS};


pub const DEFAULT_QUALITY: u8 = 90;

/// `buffer` を `path` に書き出す. 形式は拡張子から決め, 既存のファイルは上書きする.
///
/// JPEG はアルファを持てないので RGB に落として `quality` で圧縮する. PNG と BMP は RGBA のまま書く.
pub fn save(buffer: &PixelBuffer, path: &Path, quality: u8) -> Result<()> {
    let format = ImageFormat::from_path(path)
        .with_context(|| format!("failed to guess image format of {}", path.display()))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }

    match format {
        ImageFormat::Jpeg => save_jpeg(buffer, path, quality)?,
        ImageFormat::Png | ImageFormat::Bmp => image::save_buffer_with_format(
            path,
            buffer.as_bytes(),
            buffer.width(),
            buffer.height(),
            ColorType::Rgba8,
            format,
        )
        .with_context(|| format!("failed to save {}", path.display()))?,
        f => bail!("unsupported output format {:?} for {}", f, path.display()),
    }

    debug!("wrote {:?} to {}", format, path.display());
    Ok(())
}

fn save_jpeg(buffer: &PixelBuffer, path: &Path, quality: u8) -> Result<()> {
    ensure!(
        (1..=100).contains(&quality),
        "jpeg quality must be in 1..=100, but got {}",
        quality
    );

    let mut rgb = Vec::with_capacity(buffer.len() / CHANNELS * 3);
    for px in buffer.pixels() {
        rgb.extend_from_slice(&px[..3]);
    }

    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    JpegEncoder::new_with_quality(&mut writer, quality)
        .encode(&rgb, buffer.width(), buffer.height(), ColorType::Rgb8)
        .with_context(|| format!("failed to encode {}", path.display()))?;

    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))
}

/// 画像ファイルを読み込んで RGBA の `PixelBuffer` にする.
pub fn load(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?
        .into_rgba8();
    let (width, height) = img.dimensions();

    PixelBuffer::from_raw(width, height, img.into_raw())
        .context("decoded image has unexpected buffer size")
}
