use ash::prelude::VkResult;
use ash::vk;

use crate::LoadError;

/// Creates Vulkan images on behalf of a [`TextureLoader`](crate::TextureLoader).
///
/// This is usually implemented by wrapping an [`ash::Device`]:
///
/// ```no_run
/// use ash::{prelude::VkResult, vk};
///
/// struct DeviceFactory(ash::Device);
///
/// impl dds_vk::ImageFactory for DeviceFactory {
///     fn create_image(
///         &self,
///         create_info: &vk::ImageCreateInfo<'_>,
///         allocator: Option<&vk::AllocationCallbacks<'_>>,
///     ) -> VkResult<vk::Image> {
///         unsafe { self.0.create_image(create_info, allocator) }
///     }
/// }
/// ```
///
/// Any function or closure with the signature of `create_image` is an
/// `ImageFactory` as well.
pub trait ImageFactory {
    fn create_image(
        &self,
        create_info: &vk::ImageCreateInfo<'_>,
        allocator: Option<&vk::AllocationCallbacks<'_>>,
    ) -> VkResult<vk::Image>;

    /// Attaches a debug name to a freshly created image.
    ///
    /// This is only called if [`Capabilities::debug_utils`](crate::Capabilities::debug_utils)
    /// is set. Naming is best effort, so there is no way to report errors.
    /// The default implementation does nothing.
    fn set_debug_name(&self, image: vk::Image, name: &str) {
        let _ = (image, name);
    }
}

impl<F> ImageFactory for F
where
    F: Fn(&vk::ImageCreateInfo<'_>, Option<&vk::AllocationCallbacks<'_>>) -> VkResult<vk::Image>,
{
    fn create_image(
        &self,
        create_info: &vk::ImageCreateInfo<'_>,
        allocator: Option<&vk::AllocationCallbacks<'_>>,
    ) -> VkResult<vk::Image> {
        self(create_info, allocator)
    }
}

/// The resolved parameters of the image to create.
///
/// Unlike [`vk::ImageCreateInfo`], this is a plain value that can be stored
/// and sent between threads. Use [`ImageDescriptor::to_create_info`] to get
/// the Vulkan struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageDescriptor {
    pub flags: vk::ImageCreateFlags,
    pub image_type: vk::ImageType,
    pub format: vk::Format,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub mip_levels: u32,
    pub array_layers: u32,
    pub usage: vk::ImageUsageFlags,
}
impl ImageDescriptor {
    pub fn extent(&self) -> vk::Extent3D {
        vk::Extent3D {
            width: self.width,
            height: self.height,
            depth: self.depth,
        }
    }

    /// The create info of a single-sampled, optimally tiled image with
    /// exclusive sharing and an undefined initial layout.
    pub fn to_create_info(&self) -> vk::ImageCreateInfo<'static> {
        vk::ImageCreateInfo::default()
            .flags(self.flags)
            .image_type(self.image_type)
            .format(self.format)
            .extent(self.extent())
            .mip_levels(self.mip_levels)
            .array_layers(self.array_layers)
            .samples(vk::SampleCountFlags::TYPE_1)
            .tiling(vk::ImageTiling::OPTIMAL)
            .usage(self.usage)
            .sharing_mode(vk::SharingMode::EXCLUSIVE)
            .initial_layout(vk::ImageLayout::UNDEFINED)
    }
}

/// Creates the image and maps Vulkan errors to [`LoadError`]s.
pub(crate) fn create_image(
    factory: &dyn ImageFactory,
    descriptor: &ImageDescriptor,
    allocator: Option<&vk::AllocationCallbacks<'_>>,
) -> Result<vk::Image, LoadError> {
    let create_info = descriptor.to_create_info();
    factory
        .create_image(&create_info, allocator)
        .map_err(|result| match result {
            vk::Result::ERROR_OUT_OF_HOST_MEMORY => LoadError::NoHostMemory,
            vk::Result::ERROR_OUT_OF_DEVICE_MEMORY => LoadError::NoDeviceMemory,
            other => LoadError::CreationFailed(other),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing(vk::Result);
    impl ImageFactory for Failing {
        fn create_image(
            &self,
            _: &vk::ImageCreateInfo<'_>,
            _: Option<&vk::AllocationCallbacks<'_>>,
        ) -> VkResult<vk::Image> {
            Err(self.0)
        }
    }

    fn descriptor() -> ImageDescriptor {
        ImageDescriptor {
            flags: vk::ImageCreateFlags::CUBE_COMPATIBLE,
            image_type: vk::ImageType::TYPE_2D,
            format: vk::Format::BC1_RGBA_UNORM_BLOCK,
            width: 64,
            height: 64,
            depth: 1,
            mip_levels: 7,
            array_layers: 6,
            usage: vk::ImageUsageFlags::SAMPLED,
        }
    }

    #[test]
    fn create_info() {
        let info = descriptor().to_create_info();
        assert_eq!(info.image_type, vk::ImageType::TYPE_2D);
        assert_eq!(info.extent.width, 64);
        assert_eq!(info.mip_levels, 7);
        assert_eq!(info.array_layers, 6);
        assert_eq!(info.samples, vk::SampleCountFlags::TYPE_1);
        assert_eq!(info.tiling, vk::ImageTiling::OPTIMAL);
        assert_eq!(info.sharing_mode, vk::SharingMode::EXCLUSIVE);
        assert_eq!(info.initial_layout, vk::ImageLayout::UNDEFINED);
    }

    #[test]
    fn result_mapping() {
        let create = |result| create_image(&Failing(result), &descriptor(), None);

        assert!(matches!(
            create(vk::Result::ERROR_OUT_OF_HOST_MEMORY),
            Err(LoadError::NoHostMemory)
        ));
        assert!(matches!(
            create(vk::Result::ERROR_OUT_OF_DEVICE_MEMORY),
            Err(LoadError::NoDeviceMemory)
        ));
        assert!(matches!(
            create(vk::Result::ERROR_FORMAT_NOT_SUPPORTED),
            Err(LoadError::CreationFailed(vk::Result::ERROR_FORMAT_NOT_SUPPORTED))
        ));
    }
}
