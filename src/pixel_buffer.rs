use crate::basis::{Color, Dimensions};

#[cfg(test)]
mod tests;

/// 1 ピクセルあたりのバイト数. 並びは R, G, B, A.
pub const CHANNELS: usize = 4;

const OPAQUE: u8 = 255;

/// 正規化されたチャンネル値を 8 ビットに変換する.
///
/// 1.0 がちょうど 255 になるよう 255.999 を掛けて 0 方向に切り捨てる. `as` キャストは飽和するので,
/// 1.0 を超える値は 255 に, 負の値と NaN は 0 になる.
#[inline]
pub fn channel_to_byte(c: f64) -> u8 {
    (255.999 * c) as u8
}

/// `buffer` の `offset` から 4 バイトに `color` を書き込む. アルファは常に不透明.
///
/// `offset + 3` が `buffer` の範囲外なら panic する.
pub fn write_color(buffer: &mut [u8], color: Color, offset: usize) {
    let pixel = &mut buffer[offset..offset + CHANNELS];
    pixel[0] = channel_to_byte(color.r);
    pixel[1] = channel_to_byte(color.g);
    pixel[2] = channel_to_byte(color.b);
    pixel[3] = OPAQUE;
}

/// `PixelBuffer` は RGBA をインターリーブして行優先で並べた画像のバイト列を所有する.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("len", &self.data.len())
            .finish()
    }
}

impl PixelBuffer {
    /// すべて 0 で埋めたバッファを作る. バイト数が `usize` に収まらなければ panic する.
    pub fn new(width: u32, height: u32) -> Self {
        Self::try_new(width, height)
            .unwrap_or_else(|| panic!("{}x{} pixel buffer is too large", width, height))
    }

    /// すべて 0 で埋めたバッファを作る. バイト数が `usize` に収まらなければ `None`.
    pub fn try_new(width: u32, height: u32) -> Option<Self> {
        let len = Dimensions::new(width, height).byte_len(CHANNELS)?;
        Some(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if Dimensions::new(width, height).byte_len(CHANNELS) != Some(data.len()) {
            return None;
        }

        Some(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// バイト数を返す.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// バイトオフセットを直接指定して書き込む. 範囲外なら panic する.
    pub fn write_color(&mut self, offset: usize, color: Color) {
        write_color(&mut self.data, color, offset)
    }

    /// `row` 行 `col` 列のピクセルに書き込む.
    pub fn set_pixel(&mut self, row: u32, col: u32, color: Color) {
        let offset = self.offset_of(row, col);
        self.write_color(offset, color);
    }

    /// `row` 行 `col` 列のピクセルを `[R, G, B, A]` で返す.
    pub fn pixel(&self, row: u32, col: u32) -> [u8; 4] {
        let offset = self.offset_of(row, col);
        let mut px = [0; CHANNELS];
        px.copy_from_slice(&self.data[offset..offset + CHANNELS]);
        px
    }

    /// 行優先で各ピクセルを走査する.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }

    fn offset_of(&self, row: u32, col: u32) -> usize {
        assert!(
            row < self.height && col < self.width,
            "pixel ({}, {}) is out of {}x{}",
            row,
            col,
            self.width,
            self.height
        );
        (row as usize * self.width as usize + col as usize) * CHANNELS
    }
}
