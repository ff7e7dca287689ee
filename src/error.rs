use ash::vk;

use crate::{
    detect::UnsupportedReason,
    header::{DdsCaps2, FourCC, Header},
    DxgiFormat,
};

/// The closed set of outcome codes reported by the loader.
///
/// Every [`LoadError`] maps onto exactly one of these via [`LoadError::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ResultCode {
    Success = 0,
    Fail = 1,
    BadPointer = 2,
    InvalidArg = 3,
    InvalidData = 4,
    UnexpectedEof = 5,
    UnsupportedFormat = 6,
    UnsupportedLayout = 7,
    BelowLimits = 8,
    NoHostMemory = 9,
    NoDeviceMemory = 10,
    NoFunction = 11,
    ArithmeticOverflow = 12,
}
impl ResultCode {
    /// A fixed human-readable description of the outcome.
    pub const fn description(self) -> &'static str {
        match self {
            ResultCode::Success => "Operation was successful.",
            ResultCode::Fail => "Unexpected failure when reading the file.",
            ResultCode::BadPointer => "Incorrect pointer has been passed to the function.",
            ResultCode::InvalidArg => "Incorrect argument has been passed to the function.",
            ResultCode::InvalidData => "File contains invalid information.",
            ResultCode::UnexpectedEof => "Unexpected end of file.",
            ResultCode::UnsupportedFormat => "The image has unsupported format.",
            ResultCode::UnsupportedLayout => "The image has incorrect or unsupported layout.",
            ResultCode::BelowLimits => {
                "The image dimensions exceed the given device limits. Note that if no device limits are given, the limits are set to the minimum guaranteed by Vulkan."
            }
            ResultCode::NoHostMemory => "Out of system memory.",
            ResultCode::NoDeviceMemory => "Out of video memory.",
            ResultCode::NoFunction => {
                "No image creation function has been provided. Construct the TextureLoader with an ImageFactory."
            }
            ResultCode::ArithmeticOverflow => {
                "Unexpected arithmetic overflow when reading the file."
            }
        }
    }

    /// Returns the code with the given numeric value, if any.
    pub const fn from_u32(value: u32) -> Option<Self> {
        Some(match value {
            0 => ResultCode::Success,
            1 => ResultCode::Fail,
            2 => ResultCode::BadPointer,
            3 => ResultCode::InvalidArg,
            4 => ResultCode::InvalidData,
            5 => ResultCode::UnexpectedEof,
            6 => ResultCode::UnsupportedFormat,
            7 => ResultCode::UnsupportedLayout,
            8 => ResultCode::BelowLimits,
            9 => ResultCode::NoHostMemory,
            10 => ResultCode::NoDeviceMemory,
            11 => ResultCode::NoFunction,
            12 => ResultCode::ArithmeticOverflow,
            _ => return None,
        })
    }
}
impl std::fmt::Display for ResultCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
impl From<ResultCode> for u32 {
    fn from(value: ResultCode) -> Self {
        value as u32
    }
}

/// The container bytes do not describe a valid DDS file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HeaderError {
    InvalidMagicBytes([u8; 4]),
    InvalidHeaderSize(u32),
    InvalidPixelFormatSize(u32),
    /// The DX10 header extension declares an array size of 0.
    ZeroArraySize,
    /// A 1D texture was written with the height flag and a height other than 1.
    InvalidHeightForTexture1D(u32),
    /// The DX10 header extension declares a 3D texture, but the header lacks
    /// the volume flag.
    MissingVolumeFlag,
    /// The width, height, or depth of the texture is zero.
    ZeroDimension,
}
impl std::fmt::Display for HeaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeaderError::InvalidMagicBytes(bytes) => {
                write!(
                    f,
                    "Invalid magic bytes {:?}, expected {:?} (ASCII: 'DDS ')",
                    bytes,
                    Header::MAGIC
                )
            }
            HeaderError::InvalidHeaderSize(size) => {
                write!(f, "Invalid DDS header size of {}, expected 124", size)
            }
            HeaderError::InvalidPixelFormatSize(size) => {
                write!(
                    f,
                    "Invalid DDS header pixel format size of {}, expected 32",
                    size
                )
            }
            HeaderError::ZeroArraySize => {
                write!(f, "Array size of 0 in DX10 header extension")
            }
            HeaderError::InvalidHeightForTexture1D(height) => {
                write!(f, "Invalid height {} for a texture 1D, expected 1", height)
            }
            HeaderError::MissingVolumeFlag => {
                write!(f, "Texture 3D without the volume flag in the DDS header")
            }
            HeaderError::ZeroDimension => {
                write!(f, "The width, height, or depth of the texture is zero")
            }
        }
    }
}
impl std::error::Error for HeaderError {}

/// The pixel format has no usable Vulkan equivalent.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatError {
    UnsupportedDxgiFormat(DxgiFormat, UnsupportedReason),
    UnsupportedFourCC(FourCC, UnsupportedReason),
    UnsupportedPixelFormat(UnsupportedReason),
    /// The format has no known plane layout.
    UnknownPlaneCount(vk::Format),
    /// Multi-planar depth/stencil formats are not supported.
    PlanarDepthStencil(vk::Format),
}
impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatError::UnsupportedDxgiFormat(format, reason) => {
                write!(f, "DXGI format {:?} is not supported: {}", format, reason)
            }
            FormatError::UnsupportedFourCC(four_cc, reason) => {
                write!(f, "Unsupported {:?} in DDS header: {}", four_cc, reason)
            }
            FormatError::UnsupportedPixelFormat(reason) => {
                write!(f, "Unsupported pixel format in the DDS header: {}", reason)
            }
            FormatError::UnknownPlaneCount(format) => {
                write!(f, "Unknown plane layout for {:?}", format)
            }
            FormatError::PlanarDepthStencil(format) => {
                write!(f, "Multi-planar depth/stencil format {:?}", format)
            }
        }
    }
}
impl std::error::Error for FormatError {}

/// The header describes a resource layout that cannot be created.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LayoutError {
    /// The loader only supports up to 15 mipmaps.
    TooManyMipMaps(u32),
    /// A cube map that does not define all 6 faces.
    IncompleteCubeMap(DdsCaps2),
    /// A texture 3D with an array size other than 1.
    ArrayOfVolumes(u32),
    /// The resource dimension in the DX10 header extension is not 1D, 2D, or 3D.
    UnsupportedResourceDimension(u32),
}
impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::TooManyMipMaps(mipmaps) => {
                write!(
                    f,
                    "Too many mipmaps ({}), the maximum supported is {}",
                    mipmaps,
                    crate::MAX_MIP_LEVELS
                )
            }
            LayoutError::IncompleteCubeMap(caps2) => {
                write!(f, "Cube map with missing faces ({:?})", caps2)
            }
            LayoutError::ArrayOfVolumes(array_size) => {
                write!(f, "Arrays of 3D textures are not supported (array size {})", array_size)
            }
            LayoutError::UnsupportedResourceDimension(dimension) => {
                let label = match dimension {
                    0 => " (Unknown)",
                    1 => " (Buffer)",
                    _ => "",
                };
                write!(
                    f,
                    "Unsupported resource dimension {}{} in DX10 header extension",
                    dimension, label
                )
            }
        }
    }
}
impl std::error::Error for LayoutError {}

/// The limit a [`LimitsError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LimitedDimension {
    ArrayLayers,
    Width,
    Height,
    Depth,
}

/// A dimension of the image exceeds the device limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LimitsError {
    pub dimension: LimitedDimension,
    pub value: u32,
    pub limit: u32,
}
impl std::fmt::Display for LimitsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?} of {} exceeds the device limit of {}",
            self.dimension, self.value, self.limit
        )
    }
}
impl std::error::Error for LimitsError {}

#[derive(Debug)]
#[non_exhaustive]
pub enum LoadError {
    /// The container is larger than 4 GiB.
    DataTooLarge(usize),
    /// The container ends before all described data could be read.
    UnexpectedEof { needed: u64, available: u64 },
    /// Every mip level was skipped because of the maximum size.
    NoSubresources,
    /// The image factory returned an error other than running out of memory.
    CreationFailed(vk::Result),
    /// A format without a defined size reached the layout computation.
    ZeroBitsPerPixel(vk::Format),
    /// The plane index is not a plane of the format.
    InvalidPlane { format: vk::Format, plane: u32 },
    /// A surface requires more than `u32::MAX` bytes.
    ArithmeticOverflow,
    NoHostMemory,
    NoDeviceMemory,
    /// The loader has no [`crate::ImageFactory`].
    NoFunction,

    Header(HeaderError),
    Format(FormatError),
    Layout(LayoutError),
    Limits(LimitsError),
    Io(std::io::Error),
}
impl LoadError {
    /// The outcome code of this error.
    pub fn code(&self) -> ResultCode {
        match self {
            LoadError::DataTooLarge(_)
            | LoadError::NoSubresources
            | LoadError::CreationFailed(_)
            | LoadError::Io(_) => ResultCode::Fail,
            LoadError::UnexpectedEof { .. } => ResultCode::UnexpectedEof,
            LoadError::ZeroBitsPerPixel(_) | LoadError::InvalidPlane { .. } => {
                ResultCode::InvalidArg
            }
            LoadError::ArithmeticOverflow => ResultCode::ArithmeticOverflow,
            LoadError::NoHostMemory => ResultCode::NoHostMemory,
            LoadError::NoDeviceMemory => ResultCode::NoDeviceMemory,
            LoadError::NoFunction => ResultCode::NoFunction,
            LoadError::Header(_) => ResultCode::InvalidData,
            LoadError::Format(_) => ResultCode::UnsupportedFormat,
            LoadError::Layout(_) => ResultCode::UnsupportedLayout,
            LoadError::Limits(_) => ResultCode::BelowLimits,
        }
    }
}
impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::DataTooLarge(len) => {
                write!(f, "DDS data of {} bytes exceeds the 4 GiB limit", len)
            }
            LoadError::UnexpectedEof { needed, available } => {
                write!(
                    f,
                    "Unexpected end of file: needed {} bytes, but only {} are available",
                    needed, available
                )
            }
            LoadError::NoSubresources => {
                write!(f, "All mipmaps are larger than the maximum size")
            }
            LoadError::CreationFailed(result) => {
                write!(f, "Image creation failed: {}", result)
            }
            LoadError::ZeroBitsPerPixel(format) => {
                write!(f, "Format {:?} has no defined size", format)
            }
            LoadError::InvalidPlane { format, plane } => {
                write!(f, "Format {:?} has no plane {}", format, plane)
            }
            LoadError::ArithmeticOverflow => {
                write!(f, "A surface is larger than u32::MAX bytes")
            }
            LoadError::NoHostMemory => f.write_str(ResultCode::NoHostMemory.description()),
            LoadError::NoDeviceMemory => f.write_str(ResultCode::NoDeviceMemory.description()),
            LoadError::NoFunction => f.write_str(ResultCode::NoFunction.description()),

            LoadError::Header(error) => write!(f, "Header error: {}", error),
            LoadError::Format(error) => write!(f, "{}", error),
            LoadError::Layout(error) => write!(f, "{}", error),
            LoadError::Limits(error) => write!(f, "{}", error),
            LoadError::Io(error) => write!(f, "I/O error: {}", error),
        }
    }
}
impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Header(error) => Some(error),
            LoadError::Format(error) => Some(error),
            LoadError::Layout(error) => Some(error),
            LoadError::Limits(error) => Some(error),
            LoadError::Io(error) => Some(error),
            _ => None,
        }
    }
}

impl From<HeaderError> for LoadError {
    fn from(error: HeaderError) -> Self {
        LoadError::Header(error)
    }
}
impl From<FormatError> for LoadError {
    fn from(error: FormatError) -> Self {
        LoadError::Format(error)
    }
}
impl From<LayoutError> for LoadError {
    fn from(error: LayoutError) -> Self {
        LoadError::Layout(error)
    }
}
impl From<LimitsError> for LoadError {
    fn from(error: LimitsError) -> Self {
        LoadError::Limits(error)
    }
}
impl From<std::io::Error> for LoadError {
    fn from(error: std::io::Error) -> Self {
        LoadError::Io(error)
    }
}

/// An error from one of the file entry points.
///
/// If the file was read before the error occurred, its bytes are handed back
/// in `data`.
#[derive(Debug)]
pub struct FileLoadError {
    pub error: LoadError,
    pub data: Option<Vec<u8>>,
}
impl FileLoadError {
    pub fn code(&self) -> ResultCode {
        self.error.code()
    }
}
impl std::fmt::Display for FileLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}
impl std::error::Error for FileLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
impl From<FileLoadError> for LoadError {
    fn from(error: FileLoadError) -> Self {
        error.error
    }
}
