use ash::vk;

/// Describes how the pixels of one surface of a Vulkan format are laid out in
/// memory.
///
/// This is what the [`layout`](crate::layout) computations need to know about
/// a format to compute the byte size of a surface. It covers
///
/// - uncompressed (but possibly packed) formats like `R8G8B8A8_UNORM`,
/// - block-compressed formats like `BC1_RGBA_UNORM_BLOCK`, ETC2, ASTC, and PVRTC,
/// - packed 4:2:2 formats like `G8B8G8R8_422_UNORM` that store 2x1 pixels in
///   one block,
/// - and multi-planar YCbCr formats like `G8_B8R8_2PLANE_420_UNORM`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    /// Rows are `ceil(width * bits_per_pixel / 8)` bytes.
    Linear,
    Block(BlockInfo),
    /// Packed 4:2:2 pixels. Every pair of horizontally adjacent pixels shares
    /// one block of `bytes_per_block` bytes.
    Packed422 { bytes_per_block: u8 },
    /// Luma and chroma are stored in separate planes.
    ///
    /// Plane 0 holds one luma element per pixel. The chroma planes are
    /// sub-sampled; a 2-plane format stores both chroma elements interleaved
    /// in plane 1, a 3-plane format stores them in planes 1 and 2.
    ///
    /// ```text
    /// G8_B8R8_2PLANE_420_UNORM (NV12), w*h pixels:
    /// plane 0: G0 | G1 | ... | G(w*h-1)                      (w*h bytes)
    /// plane 1: B0 | R0 | B1 | R1 | ... (w/2 * h/2 pairs)      (w*h/2 bytes)
    /// ```
    Planar(PlanarInfo),
}

/// See [`PixelLayout::Block`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockInfo {
    pub width: u8,
    pub height: u8,
    pub bytes_per_block: u8,
}

/// See [`PixelLayout::Planar`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlanarInfo {
    pub planes: u8,
    /// Bytes of a single element. 1 for 8-bit formats, 2 for 10, 12, and 16-bit formats.
    pub element_bytes: u8,
    /// Horizontal and vertical chroma sub-sampling factors.
    pub sub_sampling: (u8, u8),
}

/// Size and layout attributes of a Vulkan format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FormatInfo {
    pub format: vk::Format,
    /// The (possibly averaged and rounded up) number of bits per pixel.
    pub bits_per_pixel: u32,
    pub layout: PixelLayout,
    pub depth_stencil: bool,
}

const fn linear(bits_per_pixel: u32) -> (u32, PixelLayout, bool) {
    (bits_per_pixel, PixelLayout::Linear, false)
}
const fn depth(bits_per_pixel: u32) -> (u32, PixelLayout, bool) {
    (bits_per_pixel, PixelLayout::Linear, true)
}
const fn block(bits_per_pixel: u32, width: u8, height: u8, bytes_per_block: u8) -> (u32, PixelLayout, bool) {
    let info = BlockInfo {
        width,
        height,
        bytes_per_block,
    };
    (bits_per_pixel, PixelLayout::Block(info), false)
}
const fn packed_422(bits_per_pixel: u32, bytes_per_block: u8) -> (u32, PixelLayout, bool) {
    (bits_per_pixel, PixelLayout::Packed422 { bytes_per_block }, false)
}
const fn planar(bits_per_pixel: u32, planes: u8, element_bytes: u8, sub_sampling: (u8, u8)) -> (u32, PixelLayout, bool) {
    let info = PlanarInfo {
        planes,
        element_bytes,
        sub_sampling,
    };
    (bits_per_pixel, PixelLayout::Planar(info), false)
}

const S420: (u8, u8) = (2, 2);
const S422: (u8, u8) = (2, 1);
const S444: (u8, u8) = (1, 1);

impl FormatInfo {
    /// Returns the attributes of the given format, or `None` for formats
    /// without a defined size (e.g. `UNDEFINED`).
    pub fn of(format: vk::Format) -> Option<Self> {
        use vk::Format as F;

        let (bits_per_pixel, layout, depth_stencil) = match format {
            F::R64G64B64A64_UINT | F::R64G64B64A64_SINT | F::R64G64B64A64_SFLOAT => linear(256),
            F::R64G64B64_UINT | F::R64G64B64_SINT | F::R64G64B64_SFLOAT => linear(192),
            F::R32G32B32A32_UINT
            | F::R32G32B32A32_SINT
            | F::R32G32B32A32_SFLOAT
            | F::R64G64_UINT
            | F::R64G64_SINT
            | F::R64G64_SFLOAT => linear(128),
            F::R32G32B32_UINT | F::R32G32B32_SINT | F::R32G32B32_SFLOAT => linear(96),
            F::R16G16B16A16_UNORM
            | F::R16G16B16A16_SNORM
            | F::R16G16B16A16_USCALED
            | F::R16G16B16A16_SSCALED
            | F::R16G16B16A16_UINT
            | F::R16G16B16A16_SINT
            | F::R16G16B16A16_SFLOAT
            | F::R32G32_UINT
            | F::R32G32_SINT
            | F::R32G32_SFLOAT
            | F::R64_UINT
            | F::R64_SINT
            | F::R64_SFLOAT
            | F::R10X6G10X6B10X6A10X6_UNORM_4PACK16
            | F::R12X4G12X4B12X4A12X4_UNORM_4PACK16 => linear(64),
            F::R16G16B16_UNORM
            | F::R16G16B16_SNORM
            | F::R16G16B16_USCALED
            | F::R16G16B16_SSCALED
            | F::R16G16B16_UINT
            | F::R16G16B16_SINT
            | F::R16G16B16_SFLOAT => linear(48),
            F::R8G8B8A8_UNORM
            | F::R8G8B8A8_SNORM
            | F::R8G8B8A8_USCALED
            | F::R8G8B8A8_SSCALED
            | F::R8G8B8A8_UINT
            | F::R8G8B8A8_SINT
            | F::R8G8B8A8_SRGB
            | F::B8G8R8A8_UNORM
            | F::B8G8R8A8_SNORM
            | F::B8G8R8A8_USCALED
            | F::B8G8R8A8_SSCALED
            | F::B8G8R8A8_UINT
            | F::B8G8R8A8_SINT
            | F::B8G8R8A8_SRGB
            | F::A8B8G8R8_UNORM_PACK32
            | F::A8B8G8R8_SNORM_PACK32
            | F::A8B8G8R8_USCALED_PACK32
            | F::A8B8G8R8_SSCALED_PACK32
            | F::A8B8G8R8_UINT_PACK32
            | F::A8B8G8R8_SINT_PACK32
            | F::A8B8G8R8_SRGB_PACK32
            | F::A2R10G10B10_UNORM_PACK32
            | F::A2R10G10B10_SNORM_PACK32
            | F::A2R10G10B10_USCALED_PACK32
            | F::A2R10G10B10_SSCALED_PACK32
            | F::A2R10G10B10_UINT_PACK32
            | F::A2R10G10B10_SINT_PACK32
            | F::A2B10G10R10_UNORM_PACK32
            | F::A2B10G10R10_SNORM_PACK32
            | F::A2B10G10R10_USCALED_PACK32
            | F::A2B10G10R10_SSCALED_PACK32
            | F::A2B10G10R10_UINT_PACK32
            | F::A2B10G10R10_SINT_PACK32
            | F::R16G16_UNORM
            | F::R16G16_SNORM
            | F::R16G16_USCALED
            | F::R16G16_SSCALED
            | F::R16G16_UINT
            | F::R16G16_SINT
            | F::R16G16_SFLOAT
            | F::R32_UINT
            | F::R32_SINT
            | F::R32_SFLOAT
            | F::B10G11R11_UFLOAT_PACK32
            | F::E5B9G9R9_UFLOAT_PACK32
            | F::R10X6G10X6_UNORM_2PACK16
            | F::R12X4G12X4_UNORM_2PACK16 => linear(32),
            F::R8G8B8_UNORM
            | F::R8G8B8_SNORM
            | F::R8G8B8_USCALED
            | F::R8G8B8_SSCALED
            | F::R8G8B8_UINT
            | F::R8G8B8_SINT
            | F::R8G8B8_SRGB
            | F::B8G8R8_UNORM
            | F::B8G8R8_SNORM
            | F::B8G8R8_USCALED
            | F::B8G8R8_SSCALED
            | F::B8G8R8_UINT
            | F::B8G8R8_SINT
            | F::B8G8R8_SRGB => linear(24),
            F::R8G8_UNORM
            | F::R8G8_SNORM
            | F::R8G8_USCALED
            | F::R8G8_SSCALED
            | F::R8G8_UINT
            | F::R8G8_SINT
            | F::R8G8_SRGB
            | F::R16_UNORM
            | F::R16_SNORM
            | F::R16_USCALED
            | F::R16_SSCALED
            | F::R16_UINT
            | F::R16_SINT
            | F::R16_SFLOAT
            | F::R4G4B4A4_UNORM_PACK16
            | F::B4G4R4A4_UNORM_PACK16
            | F::R5G6B5_UNORM_PACK16
            | F::B5G6R5_UNORM_PACK16
            | F::R5G5B5A1_UNORM_PACK16
            | F::B5G5R5A1_UNORM_PACK16
            | F::A1R5G5B5_UNORM_PACK16
            | F::R10X6_UNORM_PACK16
            | F::R12X4_UNORM_PACK16
            | F::A4R4G4B4_UNORM_PACK16
            | F::A4B4G4R4_UNORM_PACK16 => linear(16),
            F::R8_UNORM
            | F::R8_SNORM
            | F::R8_USCALED
            | F::R8_SSCALED
            | F::R8_UINT
            | F::R8_SINT
            | F::R8_SRGB
            | F::R4G4_UNORM_PACK8 => linear(8),

            F::D32_SFLOAT_S8_UINT => depth(40),
            F::D32_SFLOAT | F::X8_D24_UNORM_PACK32 | F::D24_UNORM_S8_UINT => depth(32),
            F::D16_UNORM_S8_UINT => depth(24),
            F::D16_UNORM => depth(16),
            F::S8_UINT => depth(8),

            F::BC1_RGB_UNORM_BLOCK
            | F::BC1_RGB_SRGB_BLOCK
            | F::BC1_RGBA_UNORM_BLOCK
            | F::BC1_RGBA_SRGB_BLOCK
            | F::BC4_UNORM_BLOCK
            | F::BC4_SNORM_BLOCK
            | F::ETC2_R8G8B8_UNORM_BLOCK
            | F::ETC2_R8G8B8_SRGB_BLOCK
            | F::ETC2_R8G8B8A1_UNORM_BLOCK
            | F::ETC2_R8G8B8A1_SRGB_BLOCK
            | F::EAC_R11_UNORM_BLOCK
            | F::EAC_R11_SNORM_BLOCK => block(4, 4, 4, 8),
            F::BC2_UNORM_BLOCK
            | F::BC2_SRGB_BLOCK
            | F::BC3_UNORM_BLOCK
            | F::BC3_SRGB_BLOCK
            | F::BC5_UNORM_BLOCK
            | F::BC5_SNORM_BLOCK
            | F::BC6H_UFLOAT_BLOCK
            | F::BC6H_SFLOAT_BLOCK
            | F::BC7_UNORM_BLOCK
            | F::BC7_SRGB_BLOCK
            | F::ETC2_R8G8B8A8_UNORM_BLOCK
            | F::ETC2_R8G8B8A8_SRGB_BLOCK
            | F::EAC_R11G11_UNORM_BLOCK
            | F::EAC_R11G11_SNORM_BLOCK => block(8, 4, 4, 16),

            // ASTC blocks are always 16 bytes. The bit counts are rounded up.
            F::ASTC_4X4_UNORM_BLOCK | F::ASTC_4X4_SRGB_BLOCK | F::ASTC_4X4_SFLOAT_BLOCK => block(8, 4, 4, 16),
            F::ASTC_5X4_UNORM_BLOCK | F::ASTC_5X4_SRGB_BLOCK | F::ASTC_5X4_SFLOAT_BLOCK => block(8, 5, 4, 16),
            F::ASTC_5X5_UNORM_BLOCK | F::ASTC_5X5_SRGB_BLOCK | F::ASTC_5X5_SFLOAT_BLOCK => block(8, 5, 5, 16),
            F::ASTC_6X5_UNORM_BLOCK | F::ASTC_6X5_SRGB_BLOCK | F::ASTC_6X5_SFLOAT_BLOCK => block(8, 6, 5, 16),
            F::ASTC_6X6_UNORM_BLOCK | F::ASTC_6X6_SRGB_BLOCK | F::ASTC_6X6_SFLOAT_BLOCK => block(4, 6, 6, 16),
            F::ASTC_8X5_UNORM_BLOCK | F::ASTC_8X5_SRGB_BLOCK | F::ASTC_8X5_SFLOAT_BLOCK => block(4, 8, 5, 16),
            F::ASTC_8X6_UNORM_BLOCK | F::ASTC_8X6_SRGB_BLOCK | F::ASTC_8X6_SFLOAT_BLOCK => block(4, 8, 6, 16),
            F::ASTC_10X5_UNORM_BLOCK | F::ASTC_10X5_SRGB_BLOCK | F::ASTC_10X5_SFLOAT_BLOCK => block(4, 10, 5, 16),
            F::ASTC_10X6_UNORM_BLOCK | F::ASTC_10X6_SRGB_BLOCK | F::ASTC_10X6_SFLOAT_BLOCK => block(4, 10, 6, 16),
            F::ASTC_8X8_UNORM_BLOCK | F::ASTC_8X8_SRGB_BLOCK | F::ASTC_8X8_SFLOAT_BLOCK => block(2, 8, 8, 16),
            F::ASTC_10X8_UNORM_BLOCK | F::ASTC_10X8_SRGB_BLOCK | F::ASTC_10X8_SFLOAT_BLOCK => block(2, 10, 8, 16),
            F::ASTC_10X10_UNORM_BLOCK | F::ASTC_10X10_SRGB_BLOCK | F::ASTC_10X10_SFLOAT_BLOCK => block(2, 10, 10, 16),
            F::ASTC_12X10_UNORM_BLOCK | F::ASTC_12X10_SRGB_BLOCK | F::ASTC_12X10_SFLOAT_BLOCK => block(2, 12, 10, 16),
            F::ASTC_12X12_UNORM_BLOCK | F::ASTC_12X12_SRGB_BLOCK | F::ASTC_12X12_SFLOAT_BLOCK => block(1, 12, 12, 16),

            F::PVRTC1_2BPP_UNORM_BLOCK_IMG
            | F::PVRTC1_2BPP_SRGB_BLOCK_IMG
            | F::PVRTC2_2BPP_UNORM_BLOCK_IMG
            | F::PVRTC2_2BPP_SRGB_BLOCK_IMG => block(2, 8, 4, 8),
            F::PVRTC1_4BPP_UNORM_BLOCK_IMG
            | F::PVRTC1_4BPP_SRGB_BLOCK_IMG
            | F::PVRTC2_4BPP_UNORM_BLOCK_IMG
            | F::PVRTC2_4BPP_SRGB_BLOCK_IMG => block(4, 4, 4, 8),

            F::G8B8G8R8_422_UNORM | F::B8G8R8G8_422_UNORM => packed_422(16, 4),
            F::G10X6B10X6G10X6R10X6_422_UNORM_4PACK16
            | F::B10X6G10X6R10X6G10X6_422_UNORM_4PACK16
            | F::G12X4B12X4G12X4R12X4_422_UNORM_4PACK16
            | F::B12X4G12X4R12X4G12X4_422_UNORM_4PACK16
            | F::G16B16G16R16_422_UNORM
            | F::B16G16R16G16_422_UNORM => packed_422(32, 8),

            F::G8_B8R8_2PLANE_420_UNORM => planar(12, 2, 1, S420),
            F::G8_B8R8_2PLANE_422_UNORM => planar(16, 2, 1, S422),
            F::G8_B8R8_2PLANE_444_UNORM => planar(24, 2, 1, S444),
            F::G8_B8_R8_3PLANE_420_UNORM => planar(12, 3, 1, S420),
            F::G8_B8_R8_3PLANE_422_UNORM => planar(16, 3, 1, S422),
            F::G8_B8_R8_3PLANE_444_UNORM => planar(24, 3, 1, S444),
            F::G10X6_B10X6R10X6_2PLANE_420_UNORM_3PACK16
            | F::G12X4_B12X4R12X4_2PLANE_420_UNORM_3PACK16
            | F::G16_B16R16_2PLANE_420_UNORM => planar(24, 2, 2, S420),
            F::G10X6_B10X6R10X6_2PLANE_422_UNORM_3PACK16
            | F::G12X4_B12X4R12X4_2PLANE_422_UNORM_3PACK16
            | F::G16_B16R16_2PLANE_422_UNORM => planar(32, 2, 2, S422),
            F::G10X6_B10X6R10X6_2PLANE_444_UNORM_3PACK16
            | F::G12X4_B12X4R12X4_2PLANE_444_UNORM_3PACK16
            | F::G16_B16R16_2PLANE_444_UNORM => planar(48, 2, 2, S444),
            F::G10X6_B10X6_R10X6_3PLANE_420_UNORM_3PACK16
            | F::G12X4_B12X4_R12X4_3PLANE_420_UNORM_3PACK16
            | F::G16_B16_R16_3PLANE_420_UNORM => planar(24, 3, 2, S420),
            F::G10X6_B10X6_R10X6_3PLANE_422_UNORM_3PACK16
            | F::G12X4_B12X4_R12X4_3PLANE_422_UNORM_3PACK16
            | F::G16_B16_R16_3PLANE_422_UNORM => planar(32, 3, 2, S422),
            F::G10X6_B10X6_R10X6_3PLANE_444_UNORM_3PACK16
            | F::G12X4_B12X4_R12X4_3PLANE_444_UNORM_3PACK16
            | F::G16_B16_R16_3PLANE_444_UNORM => planar(48, 3, 2, S444),

            _ => return None,
        };

        Some(Self {
            format,
            bits_per_pixel,
            layout,
            depth_stencil,
        })
    }

    /// The number of memory planes. This is 1 for all non-planar formats.
    pub const fn plane_count(&self) -> u32 {
        match self.layout {
            PixelLayout::Planar(info) => info.planes as u32,
            _ => 1,
        }
    }

    pub const fn is_block_compressed(&self) -> bool {
        matches!(self.layout, PixelLayout::Block(_))
    }

    /// Returns `(block_width, block_height, bytes_per_block)`.
    ///
    /// Packed 4:2:2 formats are reported as 2x1 blocks. Other non-block
    /// formats return `None`.
    pub const fn block_dimensions(&self) -> Option<(u32, u32, u32)> {
        match self.layout {
            PixelLayout::Block(info) => Some((
                info.width as u32,
                info.height as u32,
                info.bytes_per_block as u32,
            )),
            PixelLayout::Packed422 { bytes_per_block } => Some((2, 1, bytes_per_block as u32)),
            _ => None,
        }
    }
}

/// Bits per pixel of the given format, or 0 if the format has no defined size.
pub fn bits_per_pixel(format: vk::Format) -> u32 {
    FormatInfo::of(format).map_or(0, |info| info.bits_per_pixel)
}

/// The number of memory planes of the given format, or 0 if the format is unknown.
pub fn plane_count(format: vk::Format) -> u32 {
    FormatInfo::of(format).map_or(0, |info| info.plane_count())
}

pub fn is_depth_stencil(format: vk::Format) -> bool {
    FormatInfo::of(format).is_some_and(|info| info.depth_stencil)
}

/// Returns the sRGB sibling of `format` if `force` is set and one exists.
/// Otherwise, `format` is returned unchanged.
pub fn make_srgb(format: vk::Format, force: bool) -> vk::Format {
    use vk::Format as F;

    if !force {
        return format;
    }

    match format {
        F::R8_UNORM => F::R8_SRGB,
        F::R8G8_UNORM => F::R8G8_SRGB,
        F::R8G8B8_UNORM => F::R8G8B8_SRGB,
        F::B8G8R8_UNORM => F::B8G8R8_SRGB,
        F::R8G8B8A8_UNORM => F::R8G8B8A8_SRGB,
        F::B8G8R8A8_UNORM => F::B8G8R8A8_SRGB,
        F::A8B8G8R8_UNORM_PACK32 => F::A8B8G8R8_SRGB_PACK32,
        F::BC1_RGB_UNORM_BLOCK => F::BC1_RGB_SRGB_BLOCK,
        F::BC1_RGBA_UNORM_BLOCK => F::BC1_RGBA_SRGB_BLOCK,
        F::BC2_UNORM_BLOCK => F::BC2_SRGB_BLOCK,
        F::BC3_UNORM_BLOCK => F::BC3_SRGB_BLOCK,
        F::BC7_UNORM_BLOCK => F::BC7_SRGB_BLOCK,
        F::ETC2_R8G8B8_UNORM_BLOCK => F::ETC2_R8G8B8_SRGB_BLOCK,
        F::ETC2_R8G8B8A1_UNORM_BLOCK => F::ETC2_R8G8B8A1_SRGB_BLOCK,
        F::ETC2_R8G8B8A8_UNORM_BLOCK => F::ETC2_R8G8B8A8_SRGB_BLOCK,
        F::ASTC_4X4_UNORM_BLOCK => F::ASTC_4X4_SRGB_BLOCK,
        F::ASTC_5X4_UNORM_BLOCK => F::ASTC_5X4_SRGB_BLOCK,
        F::ASTC_5X5_UNORM_BLOCK => F::ASTC_5X5_SRGB_BLOCK,
        F::ASTC_6X5_UNORM_BLOCK => F::ASTC_6X5_SRGB_BLOCK,
        F::ASTC_6X6_UNORM_BLOCK => F::ASTC_6X6_SRGB_BLOCK,
        F::ASTC_8X5_UNORM_BLOCK => F::ASTC_8X5_SRGB_BLOCK,
        F::ASTC_8X6_UNORM_BLOCK => F::ASTC_8X6_SRGB_BLOCK,
        F::ASTC_8X8_UNORM_BLOCK => F::ASTC_8X8_SRGB_BLOCK,
        F::ASTC_10X5_UNORM_BLOCK => F::ASTC_10X5_SRGB_BLOCK,
        F::ASTC_10X6_UNORM_BLOCK => F::ASTC_10X6_SRGB_BLOCK,
        F::ASTC_10X8_UNORM_BLOCK => F::ASTC_10X8_SRGB_BLOCK,
        F::ASTC_10X10_UNORM_BLOCK => F::ASTC_10X10_SRGB_BLOCK,
        F::ASTC_12X10_UNORM_BLOCK => F::ASTC_12X10_SRGB_BLOCK,
        F::ASTC_12X12_UNORM_BLOCK => F::ASTC_12X12_SRGB_BLOCK,
        F::PVRTC1_2BPP_UNORM_BLOCK_IMG => F::PVRTC1_2BPP_SRGB_BLOCK_IMG,
        F::PVRTC1_4BPP_UNORM_BLOCK_IMG => F::PVRTC1_4BPP_SRGB_BLOCK_IMG,
        F::PVRTC2_2BPP_UNORM_BLOCK_IMG => F::PVRTC2_2BPP_SRGB_BLOCK_IMG,
        F::PVRTC2_4BPP_UNORM_BLOCK_IMG => F::PVRTC2_4BPP_SRGB_BLOCK_IMG,
        _ => format,
    }
}
