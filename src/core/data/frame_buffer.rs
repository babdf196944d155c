use thiserror::Error;

use crate::core::data::frame_geometry::FrameGeometry;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameBufferError {
    #[error("failed to allocate {bytes} bytes for the frame buffer")]
    Allocation { bytes: usize },
    #[error("frame {frame} is outside the buffer of {num_frames} frames")]
    FrameOutOfRange { frame: usize, num_frames: usize },
}

/// Whether a frame's region of the buffer holds finished pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum FrameStatus {
    #[default]
    Pending,
    Rendered,
    /// The dispatch for this frame failed; its pixels are zeroed and must not
    /// be emitted.
    Faulted,
}

/// Depth bytes for every frame of an animation, stored back to back in
/// frame, row, column order, together with a per-frame status.
#[derive(Debug)]
pub struct FrameBuffer {
    geometry: FrameGeometry,
    data: Vec<u8>,
    statuses: Vec<FrameStatus>,
}

/// Exclusive access to one frame's region of a [`FrameBuffer`].
#[derive(Debug)]
pub struct FrameSlot<'a> {
    pub index: usize,
    pub pixels: &'a mut [u8],
    pub status: &'a mut FrameStatus,
}

/// Read-only view of one frame.
#[derive(Debug, Copy, Clone)]
pub struct FrameView<'a> {
    pub index: usize,
    pub width: usize,
    pub height: usize,
    pub pixels: &'a [u8],
    pub status: FrameStatus,
}

impl FrameBuffer {
    /// Allocates a zeroed buffer for every frame in `geometry`. Allocation
    /// failure is reported rather than aborting the process.
    pub fn new(geometry: FrameGeometry) -> Result<Self, FrameBufferError> {
        let bytes = geometry.total_pixels();
        let mut data = Vec::new();
        data.try_reserve_exact(bytes)
            .map_err(|_| FrameBufferError::Allocation { bytes })?;
        data.resize(bytes, 0);

        Ok(Self {
            geometry,
            data,
            statuses: vec![FrameStatus::Pending; geometry.num_frames()],
        })
    }

    #[must_use]
    pub fn geometry(&self) -> FrameGeometry {
        self.geometry
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn statuses(&self) -> &[FrameStatus] {
        &self.statuses
    }

    #[must_use]
    pub fn get(&self, frame: usize, row: usize, col: usize) -> Option<u8> {
        if frame >= self.geometry.num_frames()
            || row >= self.geometry.height()
            || col >= self.geometry.width()
        {
            return None;
        }

        self.data.get(self.geometry.offset(frame, row, col)).copied()
    }

    pub fn frame(&self, frame: usize) -> Result<FrameView<'_>, FrameBufferError> {
        let status = *self.statuses.get(frame).ok_or(FrameBufferError::FrameOutOfRange {
            frame,
            num_frames: self.geometry.num_frames(),
        })?;
        let start = self.geometry.offset(frame, 0, 0);
        let end = start + self.geometry.pixels_per_frame();

        Ok(FrameView {
            index: frame,
            width: self.geometry.width(),
            height: self.geometry.height(),
            pixels: &self.data[start..end],
            status,
        })
    }

    pub fn frames(&self) -> impl Iterator<Item = FrameView<'_>> {
        let geometry = self.geometry;
        self.data
            .chunks_exact(geometry.pixels_per_frame())
            .zip(self.statuses.iter())
            .enumerate()
            .map(move |(index, (pixels, status))| FrameView {
                index,
                width: geometry.width(),
                height: geometry.height(),
                pixels,
                status: *status,
            })
    }

    pub fn frame_mut(&mut self, frame: usize) -> Result<FrameSlot<'_>, FrameBufferError> {
        let num_frames = self.geometry.num_frames();
        let status = self
            .statuses
            .get_mut(frame)
            .ok_or(FrameBufferError::FrameOutOfRange { frame, num_frames })?;
        let start = self.geometry.offset(frame, 0, 0);
        let end = start + self.geometry.pixels_per_frame();

        Ok(FrameSlot {
            index: frame,
            pixels: &mut self.data[start..end],
            status,
        })
    }

    /// Splits the buffer into one disjoint slot per frame, in frame order.
    pub fn frame_slots_mut(&mut self) -> Vec<FrameSlot<'_>> {
        let pixels_per_frame = self.geometry.pixels_per_frame();
        self.data
            .chunks_exact_mut(pixels_per_frame)
            .zip(self.statuses.iter_mut())
            .enumerate()
            .map(|(index, (pixels, status))| FrameSlot {
                index,
                pixels,
                status,
            })
            .collect()
    }

    #[must_use]
    pub fn count_with_status(&self, status: FrameStatus) -> usize {
        self.statuses.iter().filter(|s| **s == status).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(width: usize, height: usize, num_frames: usize) -> FrameBuffer {
        FrameBuffer::new(FrameGeometry::new(width, height, num_frames).unwrap()).unwrap()
    }

    #[test]
    fn test_new_sizes_buffer_for_every_frame() {
        let buffer = buffer(10, 10, 2);

        assert_eq!(buffer.len(), 200);
        assert!(buffer.data().iter().all(|b| *b == 0));
    }

    #[test]
    fn test_new_buffer_frames_are_pending() {
        let buffer = buffer(12, 10, 3);

        assert_eq!(buffer.statuses(), &[FrameStatus::Pending; 3]);
        assert_eq!(buffer.count_with_status(FrameStatus::Pending), 3);
    }

    #[test]
    fn test_frame_mut_writes_only_its_own_region() {
        let mut buffer = buffer(10, 10, 3);

        {
            let slot = buffer.frame_mut(1).unwrap();
            assert_eq!(slot.index, 1);
            assert_eq!(slot.pixels.len(), 100);
            slot.pixels.fill(7);
            *slot.status = FrameStatus::Rendered;
        }

        assert!(buffer.frame(0).unwrap().pixels.iter().all(|b| *b == 0));
        assert!(buffer.frame(1).unwrap().pixels.iter().all(|b| *b == 7));
        assert!(buffer.frame(2).unwrap().pixels.iter().all(|b| *b == 0));
        assert_eq!(buffer.frame(1).unwrap().status, FrameStatus::Rendered);
    }

    #[test]
    fn test_get_uses_frame_row_col_offset() {
        let mut buffer = buffer(11, 10, 2);
        let offset = buffer.geometry().offset(1, 3, 4);
        buffer.frame_mut(1).unwrap().pixels[offset - 110] = 42;

        assert_eq!(buffer.get(1, 3, 4), Some(42));
        assert_eq!(buffer.data()[offset], 42);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let buffer = buffer(10, 10, 1);

        assert_eq!(buffer.get(1, 0, 0), None);
        assert_eq!(buffer.get(0, 10, 0), None);
        assert_eq!(buffer.get(0, 0, 10), None);
    }

    #[test]
    fn test_frame_out_of_range() {
        let mut buffer = buffer(10, 10, 2);

        assert_eq!(
            buffer.frame(2).unwrap_err(),
            FrameBufferError::FrameOutOfRange {
                frame: 2,
                num_frames: 2
            }
        );
        assert!(buffer.frame_mut(5).is_err());
    }

    #[test]
    fn test_frame_slots_are_disjoint_and_ordered() {
        let mut buffer = buffer(10, 10, 4);

        for slot in buffer.frame_slots_mut() {
            slot.pixels.fill(slot.index as u8 + 1);
        }

        let firsts: Vec<u8> = buffer.frames().map(|f| f.pixels[0]).collect();
        let lasts: Vec<u8> = buffer.frames().map(|f| f.pixels[99]).collect();
        assert_eq!(firsts, vec![1, 2, 3, 4]);
        assert_eq!(lasts, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_frames_view_dimensions() {
        let buffer = buffer(16, 12, 2);

        for view in buffer.frames() {
            assert_eq!(view.width, 16);
            assert_eq!(view.height, 12);
            assert_eq!(view.pixels.len(), 16 * 12);
        }
    }
}
