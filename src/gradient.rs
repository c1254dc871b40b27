use std::{str::FromStr, time::Instant};

use anyhow::{bail, ensure, Context as _, Result};
use log::debug;

use crate::{
    basis::Color,
    pixel_buffer::{PixelBuffer, CHANNELS},
};


/// `RowOrder` はバッファの先頭行にどの `j` を置くかを表す.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOrder {
    /// 先頭行が `j = height - 1`.
    BottomUp,
    /// 先頭行が `j = 0`.
    TopDown,
}

impl Default for RowOrder {
    fn default() -> Self {
        RowOrder::BottomUp
    }
}

impl FromStr for RowOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "bottom-up" => Ok(RowOrder::BottomUp),
            "top-down" => Ok(RowOrder::TopDown),
            _ => bail!("expected 'bottom-up' or 'top-down', but found '{}'", s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientConfig {
    pub width: u32,
    pub height: u32,
    pub blue: f64,
    pub row_order: RowOrder,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            blue: 0.25,
            row_order: RowOrder::default(),
        }
    }
}

/// 座標 `(i, j)` の色を求める. `i` は列, `j` は行の添字. 幅と高さは 2 以上であること.
pub(crate) fn gradient_color(i: u32, j: u32, config: &GradientConfig) -> Color {
    debug_assert!(config.width >= 2 && config.height >= 2);
    Color::new(
        i as f64 / (config.width - 1) as f64,
        j as f64 / (config.height - 1) as f64,
        config.blue,
    )
}

/// グラデーション画像を生成する.
///
/// 幅か高さが 2 未満だと比率の分母が 0 になるのでエラーを返す.
pub fn generate(config: &GradientConfig) -> Result<PixelBuffer> {
    ensure!(
        config.width >= 2 && config.height >= 2,
        "image must be at least 2x2, but got {}x{}",
        config.width,
        config.height
    );

    let now = Instant::now();
    let mut buffer = PixelBuffer::try_new(config.width, config.height).with_context(|| {
        format!(
            "image {}x{} is too large to fit in memory",
            config.width, config.height
        )
    })?;

    let rows: Box<dyn Iterator<Item = u32>> = match config.row_order {
        RowOrder::BottomUp => Box::new((0..config.height).rev()),
        RowOrder::TopDown => Box::new(0..config.height),
    };

    let mut k = 0;
    for j in rows {
        for i in 0..config.width {
            buffer.write_color(k, gradient_color(i, j, config));
            k += CHANNELS;
        }
    }
    debug_assert_eq!(k, buffer.len());

    debug!(
        "generated {}x{} gradient in {:?}",
        config.width,
        config.height,
        now.elapsed()
    );

    Ok(buffer)
}
