//! Translation of DXGI formats and legacy DDS pixel formats to Vulkan formats.
//!
//! Both translations are static tables so that every entry can be checked by
//! table-driven tests.

use ash::vk;

use crate::header::{FourCC, Header, PixelFormat, PixelFormatFlags};
use crate::pixel::FormatInfo;
use crate::{Capabilities, DxgiFormat, FormatError};

/// An optional Vulkan feature some formats depend on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Extension {
    /// `VK_EXT_4444_formats` (core in Vulkan 1.3).
    Formats4444,
    /// `VK_KHR_sampler_ycbcr_conversion` (core in Vulkan 1.1), required for
    /// packed 4:2:2 and multi-planar formats.
    SamplerYcbcrConversion,
}

/// Why a format cannot be loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnsupportedReason {
    /// Vulkan has a similar format, but its memory layout differs (e.g. the
    /// 64-bit stride of `D32_FLOAT_S8X24_UINT`).
    NoEquivalentLayout,
    /// Vulkan has no such format at all (alpha-only, 1-bit, or palettized).
    NoEquivalentFeature,
    /// The format needs an extension that is not enabled.
    RequiresExtension(Extension),
    NotImplemented,
    UnknownFormat,
}
impl std::fmt::Display for UnsupportedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnsupportedReason::NoEquivalentLayout => {
                write!(f, "Vulkan has no format with the same memory layout")
            }
            UnsupportedReason::NoEquivalentFeature => write!(f, "Vulkan has no such format"),
            UnsupportedReason::RequiresExtension(extension) => {
                write!(f, "requires {:?}, which is not enabled", extension)
            }
            UnsupportedReason::NotImplemented => write!(f, "not implemented"),
            UnsupportedReason::UnknownFormat => write!(f, "unknown format"),
        }
    }
}

/// The outcome of translating a format id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Translation {
    Supported(vk::Format),
    /// Supported only if the extension is available.
    RequiresExtension(vk::Format, Extension),
    Unsupported(UnsupportedReason),
}
impl Translation {
    /// Resolves the translation against the available capabilities.
    pub fn resolve(self, capabilities: &Capabilities) -> Result<vk::Format, UnsupportedReason> {
        match self {
            Translation::Supported(format) => Ok(format),
            Translation::RequiresExtension(format, extension) => {
                if capabilities.has(extension) {
                    Ok(format)
                } else {
                    Err(UnsupportedReason::RequiresExtension(extension))
                }
            }
            Translation::Unsupported(reason) => Err(reason),
        }
    }
}

use vk::Format as F;
use Translation::{RequiresExtension as Ext, Supported as Ok_, Unsupported as No};
use UnsupportedReason::{
    NoEquivalentFeature as Feature, NoEquivalentLayout as Layout, NotImplemented as Later,
};

const YCBCR: Extension = Extension::SamplerYcbcrConversion;

/// Typeless formats map to the UINT format of the same bit layout, typeless
/// block formats to their UNORM (or UFLOAT for BC6H) variant.
pub static DXGI_FORMAT_TABLE: &[(DxgiFormat, Translation)] = &[
    (DxgiFormat::UNKNOWN, No(UnsupportedReason::UnknownFormat)),
    (DxgiFormat::R32G32B32A32_TYPELESS, Ok_(F::R32G32B32A32_UINT)),
    (DxgiFormat::R32G32B32A32_FLOAT, Ok_(F::R32G32B32A32_SFLOAT)),
    (DxgiFormat::R32G32B32A32_UINT, Ok_(F::R32G32B32A32_UINT)),
    (DxgiFormat::R32G32B32A32_SINT, Ok_(F::R32G32B32A32_SINT)),
    (DxgiFormat::R32G32B32_TYPELESS, Ok_(F::R32G32B32_UINT)),
    (DxgiFormat::R32G32B32_FLOAT, Ok_(F::R32G32B32_SFLOAT)),
    (DxgiFormat::R32G32B32_UINT, Ok_(F::R32G32B32_UINT)),
    (DxgiFormat::R32G32B32_SINT, Ok_(F::R32G32B32_SINT)),
    (DxgiFormat::R16G16B16A16_TYPELESS, Ok_(F::R16G16B16A16_UINT)),
    (DxgiFormat::R16G16B16A16_FLOAT, Ok_(F::R16G16B16A16_SFLOAT)),
    (DxgiFormat::R16G16B16A16_UNORM, Ok_(F::R16G16B16A16_UNORM)),
    (DxgiFormat::R16G16B16A16_UINT, Ok_(F::R16G16B16A16_UINT)),
    (DxgiFormat::R16G16B16A16_SNORM, Ok_(F::R16G16B16A16_SNORM)),
    (DxgiFormat::R16G16B16A16_SINT, Ok_(F::R16G16B16A16_SINT)),
    (DxgiFormat::R32G32_TYPELESS, Ok_(F::R32G32_UINT)),
    (DxgiFormat::R32G32_FLOAT, Ok_(F::R32G32_SFLOAT)),
    (DxgiFormat::R32G32_UINT, Ok_(F::R32G32_UINT)),
    (DxgiFormat::R32G32_SINT, Ok_(F::R32G32_SINT)),
    // D3D stores D32S8 with a 64-bit stride, Vulkan with 40 bits
    (DxgiFormat::R32G8X24_TYPELESS, No(Layout)),
    (DxgiFormat::D32_FLOAT_S8X24_UINT, No(Layout)),
    (DxgiFormat::R32_FLOAT_X8X24_TYPELESS, No(Layout)),
    (DxgiFormat::X32_TYPELESS_G8X24_UINT, No(Layout)),
    (DxgiFormat::R10G10B10A2_TYPELESS, Ok_(F::A2B10G10R10_UINT_PACK32)),
    (DxgiFormat::R10G10B10A2_UNORM, Ok_(F::A2B10G10R10_UNORM_PACK32)),
    (DxgiFormat::R10G10B10A2_UINT, Ok_(F::A2B10G10R10_UINT_PACK32)),
    (DxgiFormat::R11G11B10_FLOAT, Ok_(F::B10G11R11_UFLOAT_PACK32)),
    (DxgiFormat::R8G8B8A8_TYPELESS, Ok_(F::R8G8B8A8_UINT)),
    (DxgiFormat::R8G8B8A8_UNORM, Ok_(F::R8G8B8A8_UNORM)),
    (DxgiFormat::R8G8B8A8_UNORM_SRGB, Ok_(F::R8G8B8A8_SRGB)),
    (DxgiFormat::R8G8B8A8_UINT, Ok_(F::R8G8B8A8_UINT)),
    (DxgiFormat::R8G8B8A8_SNORM, Ok_(F::R8G8B8A8_SNORM)),
    (DxgiFormat::R8G8B8A8_SINT, Ok_(F::R8G8B8A8_SINT)),
    (DxgiFormat::R16G16_TYPELESS, Ok_(F::R16G16_UINT)),
    (DxgiFormat::R16G16_FLOAT, Ok_(F::R16G16_SFLOAT)),
    (DxgiFormat::R16G16_UNORM, Ok_(F::R16G16_UNORM)),
    (DxgiFormat::R16G16_UINT, Ok_(F::R16G16_UINT)),
    (DxgiFormat::R16G16_SNORM, Ok_(F::R16G16_SNORM)),
    (DxgiFormat::R16G16_SINT, Ok_(F::R16G16_SINT)),
    (DxgiFormat::R32_TYPELESS, Ok_(F::R32_UINT)),
    (DxgiFormat::D32_FLOAT, Ok_(F::D32_SFLOAT)),
    (DxgiFormat::R32_FLOAT, Ok_(F::R32_SFLOAT)),
    (DxgiFormat::R32_UINT, Ok_(F::R32_UINT)),
    (DxgiFormat::R32_SINT, Ok_(F::R32_SINT)),
    (DxgiFormat::R24G8_TYPELESS, Ok_(F::D24_UNORM_S8_UINT)),
    (DxgiFormat::D24_UNORM_S8_UINT, Ok_(F::D24_UNORM_S8_UINT)),
    (DxgiFormat::R24_UNORM_X8_TYPELESS, No(Layout)),
    (DxgiFormat::X24_TYPELESS_G8_UINT, No(Layout)),
    (DxgiFormat::R8G8_TYPELESS, Ok_(F::R8G8_UINT)),
    (DxgiFormat::R8G8_UNORM, Ok_(F::R8G8_UNORM)),
    (DxgiFormat::R8G8_UINT, Ok_(F::R8G8_UINT)),
    (DxgiFormat::R8G8_SNORM, Ok_(F::R8G8_SNORM)),
    (DxgiFormat::R8G8_SINT, Ok_(F::R8G8_SINT)),
    (DxgiFormat::R16_TYPELESS, Ok_(F::R16_UINT)),
    (DxgiFormat::R16_FLOAT, Ok_(F::R16_SFLOAT)),
    (DxgiFormat::D16_UNORM, Ok_(F::D16_UNORM)),
    (DxgiFormat::R16_UNORM, Ok_(F::R16_UNORM)),
    (DxgiFormat::R16_UINT, Ok_(F::R16_UINT)),
    (DxgiFormat::R16_SNORM, Ok_(F::R16_SNORM)),
    (DxgiFormat::R16_SINT, Ok_(F::R16_SINT)),
    (DxgiFormat::R8_TYPELESS, Ok_(F::R8_UINT)),
    (DxgiFormat::R8_UNORM, Ok_(F::R8_UNORM)),
    (DxgiFormat::R8_UINT, Ok_(F::R8_UINT)),
    (DxgiFormat::R8_SNORM, Ok_(F::R8_SNORM)),
    (DxgiFormat::R8_SINT, Ok_(F::R8_SINT)),
    (DxgiFormat::A8_UNORM, No(Feature)),
    (DxgiFormat::R1_UNORM, No(Feature)),
    (DxgiFormat::R9G9B9E5_SHAREDEXP, Ok_(F::E5B9G9R9_UFLOAT_PACK32)),
    (DxgiFormat::R8G8_B8G8_UNORM, Ext(F::G8B8G8R8_422_UNORM, YCBCR)),
    (DxgiFormat::G8R8_G8B8_UNORM, Ext(F::B8G8R8G8_422_UNORM, YCBCR)),
    // BC1 always includes the 1-bit alpha
    (DxgiFormat::BC1_TYPELESS, Ok_(F::BC1_RGBA_UNORM_BLOCK)),
    (DxgiFormat::BC1_UNORM, Ok_(F::BC1_RGBA_UNORM_BLOCK)),
    (DxgiFormat::BC1_UNORM_SRGB, Ok_(F::BC1_RGBA_SRGB_BLOCK)),
    (DxgiFormat::BC2_TYPELESS, Ok_(F::BC2_UNORM_BLOCK)),
    (DxgiFormat::BC2_UNORM, Ok_(F::BC2_UNORM_BLOCK)),
    (DxgiFormat::BC2_UNORM_SRGB, Ok_(F::BC2_SRGB_BLOCK)),
    (DxgiFormat::BC3_TYPELESS, Ok_(F::BC3_UNORM_BLOCK)),
    (DxgiFormat::BC3_UNORM, Ok_(F::BC3_UNORM_BLOCK)),
    (DxgiFormat::BC3_UNORM_SRGB, Ok_(F::BC3_SRGB_BLOCK)),
    (DxgiFormat::BC4_TYPELESS, Ok_(F::BC4_UNORM_BLOCK)),
    (DxgiFormat::BC4_UNORM, Ok_(F::BC4_UNORM_BLOCK)),
    (DxgiFormat::BC4_SNORM, Ok_(F::BC4_SNORM_BLOCK)),
    (DxgiFormat::BC5_TYPELESS, Ok_(F::BC5_UNORM_BLOCK)),
    (DxgiFormat::BC5_UNORM, Ok_(F::BC5_UNORM_BLOCK)),
    (DxgiFormat::BC5_SNORM, Ok_(F::BC5_SNORM_BLOCK)),
    (DxgiFormat::B5G6R5_UNORM, Ok_(F::R5G6B5_UNORM_PACK16)),
    (DxgiFormat::B5G5R5A1_UNORM, Ok_(F::A1R5G5B5_UNORM_PACK16)),
    (DxgiFormat::B8G8R8A8_UNORM, Ok_(F::B8G8R8A8_UNORM)),
    // no 24-bit BGR with a 32-bit stride
    (DxgiFormat::B8G8R8X8_UNORM, No(Layout)),
    (DxgiFormat::R10G10B10_XR_BIAS_A2_UNORM, No(Layout)),
    (DxgiFormat::B8G8R8A8_TYPELESS, Ok_(F::B8G8R8A8_UNORM)),
    (DxgiFormat::B8G8R8A8_UNORM_SRGB, Ok_(F::B8G8R8A8_SRGB)),
    (DxgiFormat::B8G8R8X8_TYPELESS, No(Layout)),
    (DxgiFormat::B8G8R8X8_UNORM_SRGB, No(Layout)),
    (DxgiFormat::BC6H_TYPELESS, Ok_(F::BC6H_UFLOAT_BLOCK)),
    (DxgiFormat::BC6H_UF16, Ok_(F::BC6H_UFLOAT_BLOCK)),
    (DxgiFormat::BC6H_SF16, Ok_(F::BC6H_SFLOAT_BLOCK)),
    (DxgiFormat::BC7_TYPELESS, Ok_(F::BC7_UNORM_BLOCK)),
    (DxgiFormat::BC7_UNORM, Ok_(F::BC7_UNORM_BLOCK)),
    (DxgiFormat::BC7_UNORM_SRGB, Ok_(F::BC7_SRGB_BLOCK)),
    // packed YUV formats are loaded as their RGB view formats
    (DxgiFormat::AYUV, Ok_(F::R8G8B8A8_UNORM)),
    (DxgiFormat::Y410, Ok_(F::A2B10G10R10_UNORM_PACK32)),
    (DxgiFormat::Y416, Ok_(F::R16G16B16A16_UNORM)),
    (DxgiFormat::NV12, Ext(F::G8_B8R8_2PLANE_420_UNORM, YCBCR)),
    (DxgiFormat::P010, Ext(F::G10X6_B10X6R10X6_2PLANE_420_UNORM_3PACK16, YCBCR)),
    (DxgiFormat::P016, Ext(F::G16_B16R16_2PLANE_420_UNORM, YCBCR)),
    (DxgiFormat::OPAQUE_420, Ext(F::G8_B8R8_2PLANE_420_UNORM, YCBCR)),
    (DxgiFormat::YUY2, Ext(F::G8B8G8R8_422_UNORM, YCBCR)),
    (DxgiFormat::Y210, Ext(F::G10X6B10X6G10X6R10X6_422_UNORM_4PACK16, YCBCR)),
    (DxgiFormat::Y216, Ext(F::G16B16G16R16_422_UNORM, YCBCR)),
    // 4:1:1
    (DxgiFormat::NV11, No(Later)),
    (DxgiFormat::AI44, No(Feature)),
    (DxgiFormat::IA44, No(Feature)),
    (DxgiFormat::P8, No(Feature)),
    (DxgiFormat::A8P8, No(Feature)),
    (DxgiFormat::B4G4R4A4_UNORM, Ext(F::A4R4G4B4_UNORM_PACK16, Extension::Formats4444)),
    (DxgiFormat::P208, Ext(F::G8_B8R8_2PLANE_422_UNORM, YCBCR)),
    // 4:4:0
    (DxgiFormat::V208, No(Later)),
    (DxgiFormat::V408, Ok_(F::R8G8B8A8_UNORM)),
];

/// Translates a DXGI format id. Ids not in [`DXGI_FORMAT_TABLE`] are unknown.
pub fn translate_dxgi(format: DxgiFormat) -> Translation {
    DXGI_FORMAT_TABLE
        .iter()
        .find(|(id, _)| *id == format)
        .map_or(No(UnsupportedReason::UnknownFormat), |&(_, translation)| {
            translation
        })
}

/// Which pixel format flag determines how the masks are read.
///
/// If several are set, the first one in declaration order wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interpretation {
    Rgb,
    Luminance,
    Alpha,
    BumpDuDv,
    FourCC,
}
impl Interpretation {
    pub fn of(pixel_format: &PixelFormat) -> Option<Self> {
        let flags = pixel_format.flags;
        if flags.contains(PixelFormatFlags::RGB) {
            Some(Interpretation::Rgb)
        } else if flags.contains(PixelFormatFlags::LUMINANCE) {
            Some(Interpretation::Luminance)
        } else if flags.contains(PixelFormatFlags::ALPHA) {
            Some(Interpretation::Alpha)
        } else if flags.contains(PixelFormatFlags::BUMP_DUDV) {
            Some(Interpretation::BumpDuDv)
        } else if flags.contains(PixelFormatFlags::FOURCC) {
            Some(Interpretation::FourCC)
        } else {
            None
        }
    }
}

/// A known combination of bit count and RGBA masks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MaskPattern {
    pub interpretation: Interpretation,
    pub rgb_bit_count: u32,
    /// R, G, B, and A masks.
    pub masks: [u32; 4],
    pub translation: Translation,
}
const fn rgb(bits: u32, masks: [u32; 4], translation: Translation) -> MaskPattern {
    MaskPattern {
        interpretation: Interpretation::Rgb,
        rgb_bit_count: bits,
        masks,
        translation,
    }
}
const fn luminance(bits: u32, masks: [u32; 4], translation: Translation) -> MaskPattern {
    MaskPattern {
        interpretation: Interpretation::Luminance,
        rgb_bit_count: bits,
        masks,
        translation,
    }
}
const fn bump(bits: u32, masks: [u32; 4], translation: Translation) -> MaskPattern {
    MaskPattern {
        interpretation: Interpretation::BumpDuDv,
        rgb_bit_count: bits,
        masks,
        translation,
    }
}

pub static LEGACY_MASK_TABLE: &[MaskPattern] = &[
    rgb(32, [0xff, 0xff00, 0xff0000, 0xff000000], Ok_(F::R8G8B8A8_UNORM)),
    rgb(32, [0xff0000, 0xff00, 0xff, 0xff000000], Ok_(F::B8G8R8A8_UNORM)),
    // X8R8G8B8 and X8B8G8R8
    rgb(32, [0xff0000, 0xff00, 0xff, 0], No(Layout)),
    rgb(32, [0xff, 0xff00, 0xff0000, 0], No(Layout)),
    // Many writers (including D3DX) swap the red and blue masks of 10:10:10:2
    // formats, so the swapped order is read as A2B10G10R10.
    rgb(32, [0x3ff00000, 0xffc00, 0x3ff, 0xc0000000], Ok_(F::A2B10G10R10_UNORM_PACK32)),
    rgb(32, [0x3ff, 0xffc00, 0x3ff00000, 0xc0000000], Ok_(F::A2R10G10B10_UNORM_PACK32)),
    rgb(32, [0xffff, 0xffff0000, 0, 0], Ok_(F::R16G16_UNORM)),
    rgb(32, [0xffffffff, 0, 0, 0], Ok_(F::R32_SFLOAT)),
    rgb(24, [0xff0000, 0xff00, 0xff, 0], Ok_(F::R8G8B8_UNORM)),
    rgb(16, [0x7c00, 0x3e0, 0x1f, 0x8000], Ok_(F::A1R5G5B5_UNORM_PACK16)),
    rgb(16, [0xf800, 0x7e0, 0x1f, 0], Ok_(F::R5G6B5_UNORM_PACK16)),
    rgb(16, [0x7c00, 0x3e0, 0x1f, 0], No(Layout)),
    rgb(16, [0xf00, 0xf0, 0xf, 0xf000], Ext(F::A4R4G4B4_UNORM_PACK16, Extension::Formats4444)),
    rgb(16, [0xf00, 0xf0, 0xf, 0], No(Layout)),
    luminance(8, [0xff, 0, 0, 0], Ok_(F::R8_UNORM)),
    luminance(8, [0xf, 0, 0, 0xf0], Ok_(F::R4G4_UNORM_PACK8)),
    // some writers use a bit count of 8 for A8L8
    luminance(8, [0xff, 0, 0, 0xff00], Ok_(F::R8G8_UNORM)),
    luminance(16, [0xffff, 0, 0, 0], Ok_(F::R16_UNORM)),
    luminance(16, [0xff, 0, 0, 0xff00], Ok_(F::R8G8_UNORM)),
    bump(16, [0xff, 0xff00, 0, 0], Ok_(F::R8G8_SNORM)),
    bump(32, [0xff, 0xff00, 0xff0000, 0xff000000], Ok_(F::R8G8B8A8_SNORM)),
    bump(32, [0xffff, 0xffff0000, 0, 0], Ok_(F::R16G16_SNORM)),
    bump(32, [0x3ff00000, 0xffc00, 0x3ff, 0xc0000000], Ok_(F::A2B10G10R10_SNORM_PACK32)),
];

pub static LEGACY_FOUR_CC_TABLE: &[(FourCC, Translation)] = &[
    (FourCC::DXT1, Ok_(F::BC1_RGBA_UNORM_BLOCK)),
    // premultiplied alpha is reported through the alpha mode
    (FourCC::DXT2, Ok_(F::BC2_UNORM_BLOCK)),
    (FourCC::DXT3, Ok_(F::BC2_UNORM_BLOCK)),
    (FourCC::DXT4, Ok_(F::BC3_UNORM_BLOCK)),
    (FourCC::DXT5, Ok_(F::BC3_UNORM_BLOCK)),
    (FourCC::ATI1, Ok_(F::BC4_UNORM_BLOCK)),
    (FourCC::BC4U, Ok_(F::BC4_UNORM_BLOCK)),
    (FourCC::BC4S, Ok_(F::BC4_SNORM_BLOCK)),
    (FourCC::ATI2, Ok_(F::BC5_UNORM_BLOCK)),
    (FourCC::BC5U, Ok_(F::BC5_UNORM_BLOCK)),
    (FourCC::BC5S, Ok_(F::BC5_SNORM_BLOCK)),
    (FourCC::RGBG, Ext(F::G8B8G8R8_422_UNORM, YCBCR)),
    (FourCC::GRGB, Ext(F::B8G8R8G8_422_UNORM, YCBCR)),
    (FourCC::YUY2, Ext(F::G8B8G8R8_422_UNORM, YCBCR)),
    (FourCC::UYVY, Ext(F::B8G8R8G8_422_UNORM, YCBCR)),
    (FourCC::D3DFMT_A16B16G16R16, Ok_(F::R16G16B16A16_UNORM)),
    (FourCC::D3DFMT_Q16W16V16U16, Ok_(F::R16G16B16A16_SNORM)),
    (FourCC::D3DFMT_R16F, Ok_(F::R16_SFLOAT)),
    (FourCC::D3DFMT_G16R16F, Ok_(F::R16G16_SFLOAT)),
    (FourCC::D3DFMT_A16B16G16R16F, Ok_(F::R16G16B16A16_SFLOAT)),
    (FourCC::D3DFMT_R32F, Ok_(F::R32_SFLOAT)),
    (FourCC::D3DFMT_G32R32F, Ok_(F::R32G32_SFLOAT)),
    (FourCC::D3DFMT_A32B32G32R32F, Ok_(F::R32G32B32A32_SFLOAT)),
];

/// Translates a legacy (non-DX10) pixel format.
pub fn translate_pixel_format(pixel_format: &PixelFormat) -> Translation {
    let unknown = No(UnsupportedReason::UnknownFormat);

    match Interpretation::of(pixel_format) {
        Some(Interpretation::FourCC) => {
            let Some(four_cc) = pixel_format.four_cc else {
                return unknown;
            };
            LEGACY_FOUR_CC_TABLE
                .iter()
                .find(|(code, _)| *code == four_cc)
                .map_or(unknown, |&(_, translation)| translation)
        }
        Some(Interpretation::Alpha) => No(Feature),
        Some(interpretation) => {
            let masks = [
                pixel_format.r_bit_mask,
                pixel_format.g_bit_mask,
                pixel_format.b_bit_mask,
                pixel_format.a_bit_mask,
            ];
            LEGACY_MASK_TABLE
                .iter()
                .find(|p| {
                    p.interpretation == interpretation
                        && p.rgb_bit_count == pixel_format.rgb_bit_count
                        && p.masks == masks
                })
                .map_or(unknown, |p| p.translation)
        }
        None if pixel_format.flags.contains(PixelFormatFlags::PAL8) => No(Feature),
        None => unknown,
    }
}

/// A Vulkan format together with its size and layout attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResolvedFormat {
    pub info: FormatInfo,
    /// Whether the format was translated from a typeless DXGI format.
    pub typeless: bool,
}
impl ResolvedFormat {
    /// Resolves the format of a DDS file.
    ///
    /// Rejections are reported as `debug` events on the `dds_vk` target.
    pub fn from_header(header: &Header, capabilities: &Capabilities) -> Result<Self, FormatError> {
        let (format, typeless) = match &header.dx10 {
            Some(dx10) => {
                let format = translate_dxgi(dx10.dxgi_format)
                    .resolve(capabilities)
                    .map_err(|reason| {
                        tracing::debug!(dxgi_format = ?dx10.dxgi_format, %reason, "unsupported DXGI format");
                        FormatError::UnsupportedDxgiFormat(dx10.dxgi_format, reason)
                    })?;
                (format, dx10.dxgi_format.is_typeless())
            }
            None => {
                let pixel_format = &header.pixel_format;
                let format = translate_pixel_format(pixel_format)
                    .resolve(capabilities)
                    .map_err(|reason| {
                        tracing::debug!(?pixel_format, %reason, "unsupported pixel format");
                        match pixel_format.four_cc {
                            Some(four_cc) => FormatError::UnsupportedFourCC(four_cc, reason),
                            None => FormatError::UnsupportedPixelFormat(reason),
                        }
                    })?;
                (format, false)
            }
        };

        let info = FormatInfo::of(format).ok_or(FormatError::UnknownPlaneCount(format))?;
        if info.plane_count() > 1 && info.depth_stencil {
            return Err(FormatError::PlanarDepthStencil(format));
        }

        Ok(Self { info, typeless })
    }

    pub fn format(&self) -> vk::Format {
        self.info.format
    }
    pub fn bits_per_pixel(&self) -> u32 {
        self.info.bits_per_pixel
    }
    pub fn plane_count(&self) -> u32 {
        self.info.plane_count()
    }
    pub fn is_block_compressed(&self) -> bool {
        self.info.is_block_compressed()
    }
    pub fn is_depth_stencil(&self) -> bool {
        self.info.depth_stencil
    }
    /// `(block_width, block_height, bytes_per_block)`, see [`FormatInfo::block_dimensions`].
    pub fn block_dimensions(&self) -> Option<(u32, u32, u32)> {
        self.info.block_dimensions()
    }
}
