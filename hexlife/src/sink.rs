use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use image::{
    Delay, Frame, RgbImage,
    codecs::gif::{GifEncoder, Repeat},
};
use log::{debug, info};

use crate::error::Result;

/// Receives rendered generations and assembles them into an animation.
pub trait FrameSink {
    /// Stores the canvas for `generation`, counted from 1.
    fn write_frame(&mut self, frame: &RgbImage, generation: usize) -> Result<()>;

    /// Assembles frames `1..=frame_count` in order; missing ones are skipped.
    fn finalize(&mut self, frame_count: usize, frame_duration: f64) -> Result<()>;
}

/// Writes `generation_{n}.png` files and a looping `game_of_life.gif`.
#[derive(Clone, Debug)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub const ANIMATION: &'static str = "game_of_life.gif";

    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn frame_path(&self, generation: usize) -> PathBuf {
        self.dir.join(format!("generation_{generation}.png"))
    }

    pub fn animation_path(&self) -> PathBuf {
        self.dir.join(Self::ANIMATION)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FrameSink for DirectorySink {
    fn write_frame(&mut self, frame: &RgbImage, generation: usize) -> Result<()> {
        let path = self.frame_path(generation);
        frame.save(&path)?;
        debug!("wrote {}", path.display());
        Ok(())
    }

    fn finalize(&mut self, frame_count: usize, frame_duration: f64) -> Result<()> {
        let path = self.animation_path();
        let mut encoder = GifEncoder::new(BufWriter::new(File::create(&path)?));
        encoder.set_repeat(Repeat::Infinite)?;
        let delay = Delay::from_numer_denom_ms((frame_duration * 1000.).round() as u32, 1);
        let mut assembled = 0;
        for generation in 1..=frame_count {
            let frame_path = self.frame_path(generation);
            if !frame_path.exists() {
                continue;
            }
            let image = image::open(&frame_path)?.to_rgba8();
            encoder.encode_frame(Frame::from_parts(image, 0, 0, delay))?;
            assembled += 1;
        }
        info!("assembled {assembled} frames into {}", path.display());
        Ok(())
    }
}

/// Keeps frames in memory, in the order they were written.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    pub frames: Vec<(usize, RgbImage)>,
    pub finalized: Option<(usize, f64)>,
}

impl FrameSink for MemorySink {
    fn write_frame(&mut self, frame: &RgbImage, generation: usize) -> Result<()> {
        self.frames.push((generation, frame.clone()));
        Ok(())
    }

    fn finalize(&mut self, frame_count: usize, frame_duration: f64) -> Result<()> {
        self.finalized = Some((frame_count, frame_duration));
        Ok(())
    }
}
