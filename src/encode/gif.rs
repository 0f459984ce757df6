use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::error::{PizzaError, PizzaResult};
use crate::render::backend::FrameRGBA;

/// Looping animated GIF writer.
///
/// Frames are kept until `end`, which encodes the whole file and writes it out,
/// so a failed write or flush surfaces as an error instead of a truncated file.
pub struct GifSink<W: Write> {
    writer: Option<W>,
    frames: Vec<Frame>,
    cfg: Option<SinkConfig>,
}

impl GifSink<BufWriter<File>> {
    /// Create (or truncate) a GIF file at `path`.
    pub fn create(path: impl AsRef<Path>) -> PizzaResult<Self> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|e| PizzaError::encode(format!("create '{}': {e}", path.display())))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> GifSink<W> {
    /// Wrap a writer. Nothing is written until `end`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Some(writer),
            frames: Vec::new(),
            cfg: None,
        }
    }
}

fn encode_gif(frames: Vec<Frame>) -> PizzaResult<Vec<u8>> {
    let mut bytes = Vec::new();
    {
        let mut encoder = GifEncoder::new(&mut bytes);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| PizzaError::encode(format!("gif repeat: {e}")))?;
        encoder
            .encode_frames(frames)
            .map_err(|e| PizzaError::encode(format!("encode gif: {e}")))?;
    }
    Ok(bytes)
}

impl<W: Write + Send> FrameSink for GifSink<W> {
    fn begin(&mut self, cfg: SinkConfig) -> PizzaResult<()> {
        if self.writer.is_none() || self.cfg.is_some() {
            return Err(PizzaError::encode("gif sink can only be used once"));
        }
        self.frames = Vec::with_capacity(cfg.frame_count as usize);
        self.cfg = Some(cfg);
        Ok(())
    }

    fn push_frame(&mut self, idx: u32, frame: &FrameRGBA) -> PizzaResult<()> {
        let (Some(cfg), Some(_)) = (self.cfg, self.writer.as_ref()) else {
            return Err(PizzaError::encode("push_frame called outside begin/end"));
        };
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(PizzaError::encode(format!(
                "frame {idx} is {}x{}, export is {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        let image = RgbaImage::from_raw(frame.width, frame.height, frame.data.clone())
            .ok_or_else(|| PizzaError::encode(format!("frame {idx} has a short buffer")))?;
        let delay = Delay::from_numer_denom_ms(cfg.frame_delay_ms, 1);
        self.frames.push(Frame::from_parts(image, 0, 0, delay));
        Ok(())
    }

    fn end(&mut self) -> PizzaResult<()> {
        if self.cfg.is_none() {
            return Err(PizzaError::encode("end called before begin"));
        }
        let mut writer = self
            .writer
            .take()
            .ok_or_else(|| PizzaError::encode("gif sink already finished"))?;
        let bytes = encode_gif(std::mem::take(&mut self.frames))?;
        writer
            .write_all(&bytes)
            .map_err(|e| PizzaError::encode(format!("write gif: {e}")))?;
        writer
            .flush()
            .map_err(|e| PizzaError::encode(format!("flush gif: {e}")))?;
        tracing::debug!(bytes = bytes.len(), "gif written");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
