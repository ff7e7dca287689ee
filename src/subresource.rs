use ash::vk;

use crate::layout::{mip_extent, surface_layout, DataRegion};
use crate::pixel::FormatInfo;
use crate::LoadError;

/// One (plane, array layer, mip level) unit of image data.
///
/// The offset is relative to the start of the source buffer (i.e. it includes
/// the magic and the headers), so the descriptor can be used directly as the
/// `buffer_offset` of a staging buffer holding the whole file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubresourceDescriptor {
    aspect: vk::ImageAspectFlags,
    plane: u32,
    array_layer: u32,
    mip_level: u32,
    width: u32,
    height: u32,
    depth: u32,
    row_bytes: u64,
    row_count: u64,
    offset: u64,
    len: u64,
}
impl SubresourceDescriptor {
    pub fn aspect(&self) -> vk::ImageAspectFlags {
        self.aspect
    }
    pub fn plane(&self) -> u32 {
        self.plane
    }
    pub fn array_layer(&self) -> u32 {
        self.array_layer
    }
    /// The mip level in the created image.
    ///
    /// If large mips were skipped because of a maximum size, this is smaller
    /// than the level of the surface in the DDS file.
    pub fn mip_level(&self) -> u32 {
        self.mip_level
    }
    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
    pub fn depth(&self) -> u32 {
        self.depth
    }
    pub fn extent(&self) -> vk::Extent3D {
        vk::Extent3D {
            width: self.width,
            height: self.height,
            depth: self.depth,
        }
    }
    /// The number of bytes of one row of pixels (or blocks).
    pub fn row_bytes(&self) -> u64 {
        self.row_bytes
    }
    /// The number of rows of pixels (or blocks) of one depth slice.
    pub fn row_count(&self) -> u64 {
        self.row_count
    }

    /// Returns the bytes of this subresource in the given source buffer.
    ///
    /// Returns `None` if the buffer is too short, which can only happen if it
    /// is not the buffer the descriptor was created from.
    pub fn data<'a>(&self, source: &'a [u8]) -> Option<&'a [u8]> {
        let start = usize::try_from(self.offset).ok()?;
        let end = usize::try_from(self.data_end()).ok()?;
        source.get(start..end)
    }
}
impl DataRegion for SubresourceDescriptor {
    fn data_len(&self) -> u64 {
        self.len
    }
    fn data_offset(&self) -> u64 {
        self.offset
    }
}

/// The dimensions of the image stored in a DDS file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageShape {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    /// The total number of array layers, including the x6 of cube maps.
    pub array_layers: u32,
    pub mip_count: u32,
}

/// The result of [`enumerate_subresources`].
#[derive(Debug, Clone)]
pub struct Enumeration {
    /// Ordered by plane, then array layer, then mip level.
    pub subresources: Vec<SubresourceDescriptor>,
    /// The extent of the largest emitted mip level.
    pub base_extent: vk::Extent3D,
    /// The number of leading mip levels skipped because of the maximum size.
    pub skipped_mips: u32,
}

/// Walks all planes, array layers, and mip levels of the pixel data, in the
/// order in which they are stored.
///
/// `data` is the pixel data following the headers and `data_offset` its
/// position in the source buffer. If `max_size` is set and the image has more
/// than one mip level, mip levels with a width, height, or depth larger than
/// `max_size` are skipped.
pub fn enumerate_subresources(
    data_offset: usize,
    data: &[u8],
    shape: &ImageShape,
    info: &FormatInfo,
    max_size: Option<u32>,
) -> Result<Enumeration, LoadError> {
    let data_offset = data_offset as u64;
    let data_len = data.len() as u64;
    let planes = info.plane_count();

    let mut subresources = Vec::new();
    let mut base_extent = None;
    let mut skipped_mips = 0;
    let mut cursor: u64 = 0;

    for plane in 0..planes {
        let aspect = plane_aspect(info, plane);

        for array_layer in 0..shape.array_layers {
            for level in 0..shape.mip_count {
                let width = mip_extent(shape.width, level);
                let height = mip_extent(shape.height, level);
                let depth = mip_extent(shape.depth, level);

                let layout = surface_layout(width, height, info, plane)?;
                let len = layout
                    .byte_len
                    .checked_mul(depth as u64)
                    .ok_or(LoadError::ArithmeticOverflow)?;

                let fits = match max_size {
                    Some(max) if shape.mip_count > 1 => {
                        width <= max && height <= max && depth <= max
                    }
                    _ => true,
                };

                if fits {
                    base_extent.get_or_insert(vk::Extent3D {
                        width,
                        height,
                        depth,
                    });
                    subresources.push(SubresourceDescriptor {
                        aspect,
                        plane,
                        array_layer,
                        mip_level: level.saturating_sub(skipped_mips),
                        width,
                        height,
                        depth,
                        row_bytes: layout.row_bytes,
                        row_count: layout.row_count,
                        offset: data_offset + cursor,
                        len,
                    });
                } else if array_layer == 0 && plane == 0 {
                    tracing::trace!(level, width, height, depth, "skipping mip level");
                    skipped_mips += 1;
                }

                cursor = cursor.saturating_add(len);
                if cursor > data_len {
                    return Err(LoadError::UnexpectedEof {
                        needed: data_offset.saturating_add(cursor),
                        available: data_offset + data_len,
                    });
                }
            }
        }
    }

    match base_extent {
        Some(base_extent) => Ok(Enumeration {
            subresources,
            base_extent,
            skipped_mips,
        }),
        None => Err(LoadError::NoSubresources),
    }
}

fn plane_aspect(info: &FormatInfo, plane: u32) -> vk::ImageAspectFlags {
    if info.plane_count() > 1 {
        return match plane {
            0 => vk::ImageAspectFlags::PLANE_0,
            1 => vk::ImageAspectFlags::PLANE_1,
            _ => vk::ImageAspectFlags::PLANE_2,
        };
    }

    if !info.depth_stencil {
        return vk::ImageAspectFlags::COLOR;
    }
    match info.format {
        vk::Format::D16_UNORM | vk::Format::X8_D24_UNORM_PACK32 | vk::Format::D32_SFLOAT => {
            vk::ImageAspectFlags::DEPTH
        }
        vk::Format::S8_UINT => vk::ImageAspectFlags::STENCIL,
        _ => vk::ImageAspectFlags::DEPTH | vk::ImageAspectFlags::STENCIL,
    }
}
