pub mod codec;
pub mod image;

use log::*;
use std::fs::File;
use std::io::Write;

pub use crate::codec::png::PngCodec;
pub use crate::codec::{from_memory, save_as, ImageCodec, LoadError, SaveError};
pub use crate::image::format::PixelFormat;
pub use crate::image::palette::Palette;
pub use crate::image::Image;

pub fn init_logging() {
    let target = Box::new(File::create("log.txt").expect("Can't create file"));

    env_logger::Builder::new()
        .target(env_logger::Target::Pipe(target))
        .filter(Some("lib_gfx"), LevelFilter::Debug)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
