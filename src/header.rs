use bitflags::bitflags;

use crate::{util::read_u32_le_array, DxgiFormat, HeaderError, LoadError};

/// The DDS header and the DX10 extension header if any.
///
/// Values are stored as written in the file. In particular, `depth` and
/// `mipmap_count` are not gated by their flags, since common writers do not
/// set the flags reliably.
///
/// https://learn.microsoft.com/en-us/windows/win32/direct3ddds/dds-header
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Header {
    /// Flags to indicate which members contain valid data.
    pub flags: DdsFlags,
    /// Surface height (in pixels).
    pub height: u32,
    /// Surface width (in pixels).
    pub width: u32,
    /// Pitch or linear size. Not used by the loader.
    pub pitch_or_linear_size: u32,
    /// Depth of a volume texture (in pixels).
    pub depth: u32,
    /// Number of mipmap levels. 0 is treated as 1.
    pub mipmap_count: u32,
    pub pixel_format: PixelFormat,
    /// Specifies the complexity of the surfaces stored.
    pub caps: DdsCaps,
    /// Additional detail about the surfaces stored.
    pub caps2: DdsCaps2,
    /// Optional DX10 extension header.
    pub dx10: Option<Dx10Header>,
}

impl Header {
    pub(crate) const SIZE: usize = 124;
    const INTS: usize = Self::SIZE / 4;

    /// The magic bytes (`'DDS '`) at the start of every DDS file.
    pub const MAGIC: [u8; 4] = *b"DDS ";

    /// Parses the header (without magic bytes) from the start of `bytes`.
    ///
    /// If the pixel format announces a DX10 extension header, it is parsed
    /// too and must be present in `bytes`.
    pub fn parse(bytes: &[u8]) -> Result<Self, LoadError> {
        let buffer: [u32; Self::INTS] =
            read_u32_le_array(bytes).ok_or_else(|| eof(Self::SIZE, bytes.len()))?;

        if buffer[0] != Self::SIZE as u32 {
            return Err(HeaderError::InvalidHeaderSize(buffer[0]).into());
        }

        let pixel_format = PixelFormat::read_buffer([
            buffer[18], buffer[19], buffer[20], buffer[21], buffer[22], buffer[23], buffer[24],
            buffer[25],
        ])?;

        let dx10 = if pixel_format.is_dx10() {
            let extension = &bytes[Self::SIZE..];
            let dx10_buffer = read_u32_le_array(extension)
                .ok_or_else(|| eof(Self::SIZE + Dx10Header::SIZE, bytes.len()))?;
            Some(Dx10Header::read_buffer(dx10_buffer))
        } else {
            None
        };

        Ok(Self {
            flags: DdsFlags::from_bits_retain(buffer[1]),
            height: buffer[2],
            width: buffer[3],
            pitch_or_linear_size: buffer[4],
            depth: buffer[5],
            mipmap_count: buffer[6],
            pixel_format,
            caps: DdsCaps::from_bits_retain(buffer[26]),
            caps2: DdsCaps2::from_bits_retain(buffer[27]),
            dx10,
        })
    }

    /// The number of bytes the header occupies, including the DX10 extension
    /// header but excluding the magic bytes.
    pub fn byte_len(&self) -> usize {
        if self.dx10.is_some() {
            Self::SIZE + Dx10Header::SIZE
        } else {
            Self::SIZE
        }
    }

    /// The alpha mode of the texture.
    ///
    /// This is read from the DX10 extension header if present. Legacy `DXT2`
    /// and `DXT4` files are premultiplied.
    pub fn alpha_mode(&self) -> AlphaMode {
        if let Some(dx10) = &self.dx10 {
            return dx10.alpha_mode();
        }
        match self.pixel_format.four_cc {
            Some(FourCC::DXT2) | Some(FourCC::DXT4) => AlphaMode::Premultiplied,
            _ => AlphaMode::Unknown,
        }
    }
}

fn eof(needed: usize, available: usize) -> LoadError {
    // the magic bytes are not part of `bytes`
    LoadError::UnexpectedEof {
        needed: needed as u64 + 4,
        available: available as u64 + 4,
    }
}

/// The DDS_PIXELFORMAT structure.
///
/// https://learn.microsoft.com/en-us/windows/win32/direct3ddds/dds-pixelformat
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PixelFormat {
    /// Which of the remaining fields are valid.
    pub flags: PixelFormatFlags,
    /// Four-character code of a compressed or custom format.
    ///
    /// This is `None` if `flags` does not contain [`PixelFormatFlags::FOURCC`].
    pub four_cc: Option<FourCC>,
    /// Number of bits per pixel of an uncompressed format.
    pub rgb_bit_count: u32,
    /// Red (or luminance) mask, e.g. `0x00ff0000` for A8R8G8B8.
    pub r_bit_mask: u32,
    /// Green mask, e.g. `0x0000ff00` for A8R8G8B8.
    pub g_bit_mask: u32,
    /// Blue mask, e.g. `0x000000ff` for A8R8G8B8.
    pub b_bit_mask: u32,
    /// Alpha mask, e.g. `0xff000000` for A8R8G8B8.
    pub a_bit_mask: u32,
}
impl PixelFormat {
    const SIZE: usize = 32;
    const INTS: usize = Self::SIZE / 4;

    fn read_buffer(buffer: [u32; Self::INTS]) -> Result<Self, HeaderError> {
        if buffer[0] != PixelFormat::SIZE as u32 {
            return Err(HeaderError::InvalidPixelFormatSize(buffer[0]));
        }

        let flags = PixelFormatFlags::from_bits_retain(buffer[1]);
        let four_cc = if flags.contains(PixelFormatFlags::FOURCC) {
            Some(FourCC(buffer[2]))
        } else {
            None
        };

        Ok(Self {
            flags,
            four_cc,
            rgb_bit_count: buffer[3],
            r_bit_mask: buffer[4],
            g_bit_mask: buffer[5],
            b_bit_mask: buffer[6],
            a_bit_mask: buffer[7],
        })
    }

    /// Whether a DX10 extension header follows the DDS header.
    pub fn is_dx10(&self) -> bool {
        self.four_cc == Some(FourCC::DX10)
    }
}

/// The DDS_HEADER_DXT10 extension header.
///
/// https://learn.microsoft.com/en-us/windows/win32/direct3ddds/dds-header-dxt10
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dx10Header {
    pub dxgi_format: DxgiFormat,
    /// The raw D3D10_RESOURCE_DIMENSION. See [`Dx10Header::dimension`].
    pub resource_dimension: u32,
    pub misc_flag: MiscFlags,
    /// The number of array elements. For cube maps, this is the number of
    /// cubes, so the file contains `6 * array_size` faces.
    pub array_size: u32,
    /// The lower 3 bits hold the alpha mode.
    pub misc_flags2: u32,
}
impl Dx10Header {
    pub(crate) const SIZE: usize = 20;
    const INTS: usize = Self::SIZE / 4;

    const ALPHA_MODE_MASK: u32 = 0x7;

    fn read_buffer(buffer: [u32; Self::INTS]) -> Self {
        Self {
            dxgi_format: DxgiFormat(buffer[0]),
            resource_dimension: buffer[1],
            misc_flag: MiscFlags::from_bits_retain(buffer[2]),
            array_size: buffer[3],
            misc_flags2: buffer[4],
        }
    }

    /// The resource dimension, or `None` if it is not a texture dimension.
    pub fn dimension(&self) -> Option<ResourceDimension> {
        ResourceDimension::try_from(self.resource_dimension).ok()
    }

    pub fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::from(self.misc_flags2 & Self::ALPHA_MODE_MASK)
    }
}

/// A parsed DDS container borrowing its pixel data.
#[derive(Clone, Debug)]
pub struct Container<'a> {
    pub header: Header,
    /// Byte offset of the pixel data from the start of the container.
    pub data_offset: usize,
    /// The pixel data following the headers.
    pub data: &'a [u8],
}
impl<'a> Container<'a> {
    /// Validates the magic bytes and headers of a DDS container.
    pub fn parse(bytes: &'a [u8]) -> Result<Self, LoadError> {
        if u32::try_from(bytes.len()).is_err() {
            return Err(LoadError::DataTooLarge(bytes.len()));
        }
        if bytes.len() < Header::MAGIC.len() + Header::SIZE {
            return Err(LoadError::UnexpectedEof {
                needed: (Header::MAGIC.len() + Header::SIZE) as u64,
                available: bytes.len() as u64,
            });
        }

        let (magic, rest) = bytes.split_at(Header::MAGIC.len());
        if magic != Header::MAGIC {
            let mut found = [0; 4];
            found.copy_from_slice(magic);
            return Err(HeaderError::InvalidMagicBytes(found).into());
        }

        let header = Header::parse(rest)?;
        let data_offset = Header::MAGIC.len() + header.byte_len();

        Ok(Self {
            header,
            data_offset,
            data: &bytes[data_offset..],
        })
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DdsFlags: u32 {
        const CAPS = 0x1;
        const HEIGHT = 0x2;
        const WIDTH = 0x4;
        const PITCH = 0x8;
        const PIXEL_FORMAT = 0x1000;
        const MIPMAP_COUNT = 0x20000;
        const LINEAR_SIZE = 0x80000;
        /// Set for volume textures.
        const DEPTH = 0x800000;

        const REQUIRED = Self::CAPS.bits()
            | Self::HEIGHT.bits()
            | Self::WIDTH.bits()
            | Self::PIXEL_FORMAT.bits();
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DdsCaps: u32 {
        const COMPLEX = 0x8;
        const TEXTURE = 0x1000;
        const MIPMAP = 0x400000;
    }

    /// Cube map and volume details.
    ///
    /// Each face flag includes the [`DdsCaps2::CUBE_MAP`] bit, matching the
    /// `DDS_CUBEMAP_*` constants used by DDS writers.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DdsCaps2: u32 {
        const CUBE_MAP = 0x200;
        const CUBE_MAP_POSITIVE_X = 0x200 | 0x400;
        const CUBE_MAP_NEGATIVE_X = 0x200 | 0x800;
        const CUBE_MAP_POSITIVE_Y = 0x200 | 0x1000;
        const CUBE_MAP_NEGATIVE_Y = 0x200 | 0x2000;
        const CUBE_MAP_POSITIVE_Z = 0x200 | 0x4000;
        const CUBE_MAP_NEGATIVE_Z = 0x200 | 0x8000;
        const VOLUME = 0x200000;

        /// Vulkan has no partial cube maps, so all six faces are required.
        const CUBE_MAP_ALL_FACES = Self::CUBE_MAP_POSITIVE_X.bits()
            | Self::CUBE_MAP_NEGATIVE_X.bits()
            | Self::CUBE_MAP_POSITIVE_Y.bits()
            | Self::CUBE_MAP_NEGATIVE_Y.bits()
            | Self::CUBE_MAP_POSITIVE_Z.bits()
            | Self::CUBE_MAP_NEGATIVE_Z.bits();
    }

    /// Values which indicate what type of data is in the surface.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PixelFormatFlags: u32 {
        // Constants as defined by DirectXTex:
        // https://github.com/microsoft/DirectXTex/blob/main/DirectXTex/DDS.h

        /// `a_bit_mask` is valid.
        const ALPHAPIXELS = 0x1;
        /// Alpha-only data.
        const ALPHA = 0x2;
        /// `four_cc` is valid.
        const FOURCC = 0x4;
        const PAL8 = 0x20;
        /// Uncompressed RGB data described by the bit count and masks.
        const RGB = 0x40;
        const YUV = 0x200;
        /// Single channel data in the red mask, optionally with alpha.
        const LUMINANCE = 0x20000;
        /// Signed (bump map dU/dV) data described by the bit count and masks.
        const BUMP_DUDV = 0x80000;
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MiscFlags: u32 {
        /// A cube texture created from a 2D texture array of 6 faces per cube.
        const TEXTURE_CUBE = 0x4;
    }
}

/// Identifies the type of resource being used.
///
/// https://learn.microsoft.com/en-us/windows/win32/api/d3d11/ne-d3d11-d3d11_resource_dimension
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceDimension {
    Texture1D = 2,
    Texture2D = 3,
    Texture3D = 4,
}
impl TryFrom<u32> for ResourceDimension {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ResourceDimension::Texture1D),
            3 => Ok(ResourceDimension::Texture2D),
            4 => Ok(ResourceDimension::Texture3D),
            _ => Err(value),
        }
    }
}

/// How the alpha channel of a texture is meant to be interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AlphaMode {
    /// Unknown. Legacy files typically use straight alpha.
    #[default]
    Unknown = 0,
    Straight = 1,
    Premultiplied = 2,
    /// The alpha channel is fully opaque.
    Opaque = 3,
    /// The alpha channel is a 4th data channel and not transparency.
    Custom = 4,
}
impl From<u32> for AlphaMode {
    fn from(value: u32) -> Self {
        match value {
            1 => AlphaMode::Straight,
            2 => AlphaMode::Premultiplied,
            3 => AlphaMode::Opaque,
            4 => AlphaMode::Custom,
            _ => AlphaMode::Unknown,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourCC(pub u32);

impl FourCC {
    pub const DXT1: Self = FourCC(u32::from_le_bytes(*b"DXT1"));
    pub const DXT2: Self = FourCC(u32::from_le_bytes(*b"DXT2"));
    pub const DXT3: Self = FourCC(u32::from_le_bytes(*b"DXT3"));
    pub const DXT4: Self = FourCC(u32::from_le_bytes(*b"DXT4"));
    pub const DXT5: Self = FourCC(u32::from_le_bytes(*b"DXT5"));

    pub const DX10: Self = FourCC(u32::from_le_bytes(*b"DX10"));

    pub const ATI1: Self = FourCC(u32::from_le_bytes(*b"ATI1"));
    pub const BC4U: Self = FourCC(u32::from_le_bytes(*b"BC4U"));
    pub const BC4S: Self = FourCC(u32::from_le_bytes(*b"BC4S"));

    pub const ATI2: Self = FourCC(u32::from_le_bytes(*b"ATI2"));
    pub const BC5U: Self = FourCC(u32::from_le_bytes(*b"BC5U"));
    pub const BC5S: Self = FourCC(u32::from_le_bytes(*b"BC5S"));

    pub const RGBG: Self = FourCC(u32::from_le_bytes(*b"RGBG"));
    pub const GRGB: Self = FourCC(u32::from_le_bytes(*b"GRGB"));
    pub const UYVY: Self = FourCC(u32::from_le_bytes(*b"UYVY"));
    pub const YUY2: Self = FourCC(u32::from_le_bytes(*b"YUY2"));

    /// Some writers store D3DFORMAT values in the FourCC field.
    ///
    /// https://learn.microsoft.com/en-us/windows/win32/direct3d9/d3dformat
    pub const D3DFMT_A16B16G16R16: Self = FourCC(36);
    pub const D3DFMT_Q16W16V16U16: Self = FourCC(110);
    pub const D3DFMT_R16F: Self = FourCC(111);
    pub const D3DFMT_G16R16F: Self = FourCC(112);
    pub const D3DFMT_A16B16G16R16F: Self = FourCC(113);
    pub const D3DFMT_R32F: Self = FourCC(114);
    pub const D3DFMT_G32R32F: Self = FourCC(115);
    pub const D3DFMT_A32B32G32R32F: Self = FourCC(116);
}

impl std::fmt::Debug for FourCC {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bytes = self.0.to_le_bytes();
        if bytes.iter().all(|b| b.is_ascii_alphanumeric()) {
            let text: String = bytes.iter().map(|&b| b as char).collect();
            write!(f, "FourCC({})", text)
        } else {
            write!(f, "FourCC({})", self.0)
        }
    }
}
