#![forbid(unsafe_code)]

//! Loads DDS textures into Vulkan images.
//!
//! A [`TextureLoader`] parses a DDS container, translates its DXGI or legacy
//! pixel format to a [`vk::Format`](ash::vk::Format), validates the image
//! against device limits, and creates the image through an [`ImageFactory`].
//! The result lists every (plane, array layer, mip level) region of the
//! source bytes that has to be uploaded to the image.
//!
//! Memory allocation and the upload itself are left to the caller.

mod create;
mod detect;
mod dxgi_format;
mod error;
mod header;
mod layout;
mod limits;
mod loader;
mod pixel;
mod subresource;
mod util;

use ash::vk;
use bitflags::bitflags;

pub use create::{ImageDescriptor, ImageFactory};
pub use detect::*;
pub use dxgi_format::DxgiFormat;
pub use error::*;
pub use header::*;
pub use layout::*;
pub use limits::*;
pub use loader::*;
pub use pixel::*;
pub use subresource::*;

bitflags! {
    /// Flags that change how a texture is loaded.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct LoadFlags: u32 {
        /// Use the sRGB variant of the format if there is one.
        const FORCE_SRGB = 0x1;
        /// Create the image with a full mip chain (up to 15 levels), even if
        /// the file contains fewer mip levels.
        ///
        /// The missing levels are left for the caller to generate.
        const MIP_RESERVE = 0x8;
    }
}

/// Options for [`TextureLoader::load_from_memory_ex`] and
/// [`TextureLoader::load_from_file_ex`].
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct LoadOptions<'a> {
    /// The maximum width, height, and depth of the created image.
    ///
    /// Mip levels larger than this are skipped, so the image starts at the
    /// first mip level that fits. This only has an effect on textures with
    /// more than one mip level. 0 means no maximum.
    ///
    /// If no maximum is set and image creation fails, the loader retries once
    /// with the largest 2D (or 3D) dimension of the device limits as maximum.
    ///
    /// Defaults to `0`.
    pub max_size: u32,

    /// The device limits to check the image against.
    ///
    /// Defaults to `None`, which means [`DeviceLimits::MINIMUM`].
    pub limits: Option<DeviceLimits>,

    /// Defaults to `SAMPLED | TRANSFER_SRC | TRANSFER_DST`.
    pub usage: vk::ImageUsageFlags,

    /// Additional flags for the created image.
    ///
    /// The loader adds `MUTABLE_FORMAT` for typeless DXGI formats,
    /// `CUBE_COMPATIBLE` for cube maps, and `TYPE_2D_ARRAY_COMPATIBLE` for 2D
    /// textures with more than one array layer.
    ///
    /// Defaults to `empty()`.
    pub create_flags: vk::ImageCreateFlags,

    /// Defaults to `empty()`.
    pub load_flags: LoadFlags,

    /// Passed through to [`ImageFactory::create_image`].
    ///
    /// Defaults to `None`.
    pub allocator: Option<&'a vk::AllocationCallbacks<'a>>,
}
impl Default for LoadOptions<'_> {
    fn default() -> Self {
        Self {
            max_size: 0,
            limits: None,
            usage: vk::ImageUsageFlags::SAMPLED
                | vk::ImageUsageFlags::TRANSFER_SRC
                | vk::ImageUsageFlags::TRANSFER_DST,
            create_flags: vk::ImageCreateFlags::empty(),
            load_flags: LoadFlags::empty(),
            allocator: None,
        }
    }
}

/// The optional Vulkan features the device supports.
///
/// Everything is disabled by default, which corresponds to a plain Vulkan 1.0
/// device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct Capabilities {
    /// Whether `VK_EXT_4444_formats` (or Vulkan 1.3) is available. This is
    /// required for `B4G4R4A4_UNORM` textures.
    ///
    /// Defaults to `false`.
    pub formats_4444: bool,

    /// Whether `VK_KHR_sampler_ycbcr_conversion` (or Vulkan 1.1) is available.
    /// This is required for packed 4:2:2 and multi-planar YUV textures.
    ///
    /// Defaults to `false`.
    pub sampler_ycbcr_conversion: bool,

    /// Whether [`ImageFactory::set_debug_name`] should be called for loaded
    /// images.
    ///
    /// Defaults to `false`.
    pub debug_utils: bool,
}
impl Capabilities {
    /// All optional features enabled.
    pub const fn all() -> Self {
        Self {
            formats_4444: true,
            sampler_ycbcr_conversion: true,
            debug_utils: true,
        }
    }

    /// Whether the given extension is enabled.
    pub const fn has(&self, extension: Extension) -> bool {
        match extension {
            Extension::Formats4444 => self.formats_4444,
            Extension::SamplerYcbcrConversion => self.sampler_ycbcr_conversion,
        }
    }
}
