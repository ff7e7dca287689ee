use crate::pixel::{FormatInfo, PixelLayout};
use crate::LoadError;

pub trait DataRegion {
    /// The number of bytes this object occupies in the source buffer.
    ///
    /// It is guaranteed that `self.data_offset() + self.data_len() <= u64::MAX`.
    fn data_len(&self) -> u64;
    /// The byte offset of this object in the source buffer.
    fn data_offset(&self) -> u64;
    /// The byte offset of the byte after this object in the source buffer.
    ///
    /// This is equivalent to `self.data_offset() + self.data_len()`.
    fn data_end(&self) -> u64 {
        self.data_offset() + self.data_len()
    }
}

/// The number of texels a packed 4:2:2 block covers horizontally.
///
/// A block like `G8B8G8R8_422_UNORM` stores 2 luma samples and one pair of
/// chroma samples. Rows therefore hold `ceil(width / 2)` blocks.
pub const PACKED_422_TEXELS_PER_BLOCK: u32 = 2;

/// The byte layout of a single 2D slice of one plane of one mip level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceLayout {
    /// The number of bytes in one row of pixels or blocks.
    pub row_bytes: u64,
    /// The number of rows of pixels or blocks.
    pub row_count: u64,
    /// `row_bytes * row_count`. Always at most `u32::MAX`.
    pub byte_len: u64,
}

/// Computes the layout of a `width` x `height` surface of the given plane.
///
/// `plane` must be 0 for single-plane formats.
pub fn surface_layout(
    width: u32,
    height: u32,
    info: &FormatInfo,
    plane: u32,
) -> Result<SurfaceLayout, LoadError> {
    if info.bits_per_pixel == 0 {
        return Err(LoadError::ZeroBitsPerPixel(info.format));
    }
    if plane >= info.plane_count() {
        return Err(LoadError::InvalidPlane {
            format: info.format,
            plane,
        });
    }

    let w = width as u64;
    let h = height as u64;

    let (row_bytes, row_count) = match info.layout {
        PixelLayout::Block(block) => {
            let blocks = |len: u64, block_len: u8| {
                if len == 0 {
                    0
                } else {
                    u64::div_ceil(len, block_len as u64).max(1)
                }
            };
            (
                blocks(w, block.width) * block.bytes_per_block as u64,
                blocks(h, block.height),
            )
        }
        PixelLayout::Packed422 { bytes_per_block } => (
            u64::div_ceil(w, PACKED_422_TEXELS_PER_BLOCK as u64) * bytes_per_block as u64,
            h,
        ),
        PixelLayout::Planar(planar) => {
            let element_bytes = planar.element_bytes as u64;
            let (sx, sy) = planar.sub_sampling;
            match plane {
                0 => (w * element_bytes, h),
                _ => {
                    // 2-plane formats interleave both chroma elements in plane 1
                    let elements = if planar.planes == 2 { 2 } else { 1 };
                    (
                        u64::div_ceil(w, sx as u64) * element_bytes * elements,
                        u64::div_ceil(h, sy as u64),
                    )
                }
            }
        }
        PixelLayout::Linear => (u64::div_ceil(w * info.bits_per_pixel as u64, 8), h),
    };

    let byte_len = row_bytes
        .checked_mul(row_count)
        .filter(|&len| len <= u32::MAX as u64)
        .ok_or(LoadError::ArithmeticOverflow)?;

    Ok(SurfaceLayout {
        row_bytes,
        row_count,
        byte_len,
    })
}

/// The number of mip levels of a full mip chain down to 1x1.
///
/// Returns 0 if either dimension is 0.
pub const fn count_mips(width: u32, height: u32) -> u32 {
    if width == 0 || height == 0 {
        return 0;
    }
    let largest = if width > height { width } else { height };
    u32::BITS - largest.leading_zeros()
}

/// The size of a dimension at the given mip level.
pub const fn mip_extent(base: u32, level: u32) -> u32 {
    let extent = match base.checked_shr(level) {
        Some(extent) => extent,
        None => 0,
    };
    if extent == 0 {
        1
    } else {
        extent
    }
}
