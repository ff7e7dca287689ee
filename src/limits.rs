use ash::vk;

use crate::{LayoutError, LimitedDimension, LimitsError, LoadError};

/// The maximum number of mip levels a DDS file may declare.
///
/// This is the Direct3D 12 limit (`D3D12_REQ_MIP_LEVELS`). Vulkan itself has
/// no such limit.
pub const MAX_MIP_LEVELS: u32 = 15;

/// The subset of [`vk::PhysicalDeviceLimits`] that images are checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct DeviceLimits {
    /// Defaults to `256`.
    pub max_image_array_layers: u32,
    /// Defaults to `4096`.
    pub max_image_dimension_1d: u32,
    /// Defaults to `4096`.
    pub max_image_dimension_2d: u32,
    /// Defaults to `256`.
    pub max_image_dimension_3d: u32,
    /// Defaults to `4096`.
    pub max_image_dimension_cube: u32,
}
impl DeviceLimits {
    /// The limits every Vulkan implementation is required to support.
    pub const MINIMUM: Self = Self {
        max_image_array_layers: 256,
        max_image_dimension_1d: 4096,
        max_image_dimension_2d: 4096,
        max_image_dimension_3d: 256,
        max_image_dimension_cube: 4096,
    };
}
impl Default for DeviceLimits {
    fn default() -> Self {
        Self::MINIMUM
    }
}
impl From<&vk::PhysicalDeviceLimits> for DeviceLimits {
    fn from(limits: &vk::PhysicalDeviceLimits) -> Self {
        Self {
            max_image_array_layers: limits.max_image_array_layers,
            max_image_dimension_1d: limits.max_image_dimension1_d,
            max_image_dimension_2d: limits.max_image_dimension2_d,
            max_image_dimension_3d: limits.max_image_dimension3_d,
            max_image_dimension_cube: limits.max_image_dimension_cube,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageClass {
    Texture1D,
    Texture2D,
    Cube,
    Texture3D,
}
impl ImageClass {
    pub const fn image_type(self) -> vk::ImageType {
        match self {
            ImageClass::Texture1D => vk::ImageType::TYPE_1D,
            ImageClass::Texture2D | ImageClass::Cube => vk::ImageType::TYPE_2D,
            ImageClass::Texture3D => vk::ImageType::TYPE_3D,
        }
    }

    /// The largest width/height/depth an image of this class may have.
    pub const fn max_dimension(self, limits: &DeviceLimits) -> u32 {
        match self {
            ImageClass::Texture1D => limits.max_image_dimension_1d,
            ImageClass::Texture2D => limits.max_image_dimension_2d,
            ImageClass::Cube => limits.max_image_dimension_cube,
            ImageClass::Texture3D => limits.max_image_dimension_3d,
        }
    }
}

/// Checks the dimensions of an image against the mip level ceiling and the
/// device limits.
///
/// `array_layers` must already include the x6 of cube maps.
pub fn check_limits(
    class: ImageClass,
    width: u32,
    height: u32,
    depth: u32,
    array_layers: u32,
    mip_count: u32,
    limits: &DeviceLimits,
) -> Result<(), LoadError> {
    if mip_count > MAX_MIP_LEVELS {
        return Err(LayoutError::TooManyMipMaps(mip_count).into());
    }

    let max_layers = match class {
        ImageClass::Texture3D => 1,
        _ => limits.max_image_array_layers,
    };
    let max = class.max_dimension(limits);

    let checks = [
        (LimitedDimension::ArrayLayers, array_layers, max_layers, true),
        (LimitedDimension::Width, width, max, true),
        (LimitedDimension::Height, height, max, class != ImageClass::Texture1D),
        (LimitedDimension::Depth, depth, max, class == ImageClass::Texture3D),
    ];

    for (dimension, value, limit, applies) in checks {
        if applies && value > limit {
            tracing::debug!(?class, ?dimension, value, limit, "image exceeds device limits");
            return Err(LimitsError {
                dimension,
                value,
                limit,
            }
            .into());
        }
    }

    Ok(())
}
