/// `Color` は各チャンネルを 0.0 以上 1.0 未満に正規化した RGB カラーを表す.
///
/// 範囲外の値もそのまま保持する. バイトへの変換時の扱いは `pixel_buffer::channel_to_byte` を参照.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.r, self.g, self.b)
    }
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// `Dimensions` は画像の幅と高さをピクセル単位で表す.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `channels` バイトのピクセルを並べたときのバイト数. `usize` に収まらなければ `None`.
    pub fn byte_len(&self, channels: usize) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(channels)
    }
}
