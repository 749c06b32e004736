//! # Byte Regions
//!
//! The data a request operates on is an opaque, byte-addressable region supplied
//! by the host. This layer only ever asks for `offset + length` slices of it and
//! never owns the underlying storage.
//!
//! Two implementations ship with the crate:
//! - contiguous memory (`[u8]`, `Vec<u8>`)
//! - [`SegmentedBuffer`], a scatter/gather list presented as one region

use crate::error::CryptocteonError;
use crate::utils::check_range;

/// Read/write access to a bounded byte range.
///
/// Implementations must fail (never panic) when a range falls outside `len()`.
pub trait ByteRegion {
    /// Total addressable length in bytes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies `out.len()` bytes starting at `offset` into `out`.
    fn read_at(&self, offset: usize, out: &mut [u8]) -> Result<(), CryptocteonError>;

    /// Copies `data` into the region starting at `offset`.
    fn write_at(&mut self, offset: usize, data: &[u8]) -> Result<(), CryptocteonError>;
}

impl ByteRegion for [u8] {
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    fn read_at(&self, offset: usize, out: &mut [u8]) -> Result<(), CryptocteonError> {
        let end = check_range(offset, out.len(), <[u8]>::len(self))?;
        out.copy_from_slice(&self[offset..end]);
        Ok(())
    }

    fn write_at(&mut self, offset: usize, data: &[u8]) -> Result<(), CryptocteonError> {
        let end = check_range(offset, data.len(), <[u8]>::len(self))?;
        self[offset..end].copy_from_slice(data);
        Ok(())
    }
}

impl ByteRegion for Vec<u8> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn read_at(&self, offset: usize, out: &mut [u8]) -> Result<(), CryptocteonError> {
        self.as_slice().read_at(offset, out)
    }

    fn write_at(&mut self, offset: usize, data: &[u8]) -> Result<(), CryptocteonError> {
        self.as_mut_slice().write_at(offset, data)
    }
}

/// A scatter/gather buffer: an ordered list of segments addressed as one
/// contiguous region.
///
/// Reads and writes may start in one segment and end in another. Empty segments
/// are allowed and simply contribute no bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentedBuffer {
    segments: Vec<Vec<u8>>,
    total: usize,
}

impl SegmentedBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits `data` into segments of the given lengths. Any remainder becomes a
    /// final segment.
    #[must_use]
    pub fn split(data: &[u8], lengths: &[usize]) -> Self {
        let mut buf = Self::new();
        let mut rest = data;
        for &len in lengths {
            let take = len.min(rest.len());
            let (head, tail) = rest.split_at(take);
            buf.push_segment(head.to_vec());
            rest = tail;
        }
        if !rest.is_empty() {
            buf.push_segment(rest.to_vec());
        }
        buf
    }

    pub fn push_segment(&mut self, segment: Vec<u8>) {
        self.total += segment.len();
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[Vec<u8>] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Flattens the segments into one vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.segments.concat()
    }

    /// Yields `(segment index, start within segment, byte count)` for every piece
    /// of `[offset, offset + len)`.
    fn pieces(
        &self,
        offset: usize,
        len: usize,
    ) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        let end = offset + len;
        let mut base = 0usize;
        self.segments
            .iter()
            .enumerate()
            .filter_map(move |(idx, seg)| {
                let seg_start = base;
                let seg_end = base + seg.len();
                base = seg_end;
                let lo = offset.max(seg_start);
                let hi = end.min(seg_end);
                (lo < hi).then(|| (idx, lo - seg_start, hi - lo))
            })
    }
}

impl ByteRegion for SegmentedBuffer {
    fn len(&self) -> usize {
        self.total
    }

    fn read_at(&self, offset: usize, out: &mut [u8]) -> Result<(), CryptocteonError> {
        check_range(offset, out.len(), self.total)?;
        let mut written = 0usize;
        for (idx, start, count) in self.pieces(offset, out.len()) {
            out[written..written + count]
                .copy_from_slice(&self.segments[idx][start..start + count]);
            written += count;
        }
        Ok(())
    }

    fn write_at(&mut self, offset: usize, data: &[u8]) -> Result<(), CryptocteonError> {
        check_range(offset, data.len(), self.total)?;
        let pieces: Vec<_> = self.pieces(offset, data.len()).collect();
        let mut read = 0usize;
        for (idx, start, count) in pieces {
            self.segments[idx][start..start + count].copy_from_slice(&data[read..read + count]);
            read += count;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_bounds_are_enforced() {
        let mut data = vec![0u8; 8];
        assert!(data.write_at(4, &[1, 2, 3, 4]).is_ok());
        assert!(data.write_at(5, &[1, 2, 3, 4]).is_err());
        let mut out = [0u8; 4];
        data.read_at(4, &mut out).unwrap();
        assert_eq!(out, [1, 2, 3, 4]);
    }

    #[test]
    fn segmented_read_spans_boundaries() {
        let data: Vec<u8> = (0u8..20).collect();
        let buf = SegmentedBuffer::split(&data, &[3, 0, 7, 5]);
        assert_eq!(buf.segment_count(), 5);
        assert_eq!(ByteRegion::len(&buf), 20);

        let mut out = [0u8; 10];
        buf.read_at(2, &mut out).unwrap();
        assert_eq!(out, [2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
    }

    #[test]
    fn segmented_write_spans_boundaries() {
        let mut buf = SegmentedBuffer::split(&[0u8; 12], &[4, 4]);
        buf.write_at(3, &[9, 9, 9, 9, 9, 9]).unwrap();
        assert_eq!(buf.to_vec(), [0, 0, 0, 9, 9, 9, 9, 9, 9, 0, 0, 0]);
        assert_eq!(buf.segments()[1], [9, 9, 9, 9]);
    }

    #[test]
    fn segmented_rejects_out_of_range() {
        let mut buf = SegmentedBuffer::split(&[0u8; 6], &[3]);
        let mut out = [0u8; 4];
        assert!(buf.read_at(3, &mut out).is_err());
        assert!(buf.write_at(6, &[1]).is_err());
        assert!(buf.write_at(6, &[]).is_ok());
    }
}
