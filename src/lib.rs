pub mod basis;
pub mod config;
pub mod gradient;
pub mod output;
pub mod pixel_buffer;

pub use crate::{
    basis::{Color, Dimensions},
    config::Config,
    gradient::{generate, GradientConfig, RowOrder},
    pixel_buffer::{write_color, PixelBuffer},
};
