use anyhow::Result;

/// A decoded still image handed to the detector. Pixel contents are opaque
/// to the decision path; only the dimensions take part in geometry.
#[derive(Debug, Clone)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Frame {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Frame {
            width,
            height,
            pixels,
        }
    }

    /// An all-black RGB frame of the given size.
    pub fn solid(width: u32, height: u32) -> Self {
        Frame {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 3],
        }
    }
}

/// Where frames come from: camera, gallery picker, or a canned source.
pub trait ImageSource {
    fn acquire(&mut self) -> Result<Frame>;
}

/// Source that hands out identical solid frames, standing in for the
/// capture and picker plumbing of the full application.
pub struct SolidFrameSource {
    width: u32,
    height: u32,
}

impl SolidFrameSource {
    pub fn new(width: u32, height: u32) -> Self {
        SolidFrameSource { width, height }
    }
}

impl ImageSource for SolidFrameSource {
    fn acquire(&mut self) -> Result<Frame> {
        Ok(Frame::solid(self.width, self.height))
    }
}
