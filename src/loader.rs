use std::path::Path;

use ash::vk;

use crate::create::{create_image, ImageDescriptor, ImageFactory};
use crate::detect::ResolvedFormat;
use crate::header::{AlphaMode, Container, DdsCaps2, DdsFlags, Header, MiscFlags, ResourceDimension};
use crate::layout::count_mips;
use crate::limits::{check_limits, ImageClass, MAX_MIP_LEVELS};
use crate::pixel::make_srgb;
use crate::subresource::{enumerate_subresources, ImageShape, SubresourceDescriptor};
use crate::{
    Capabilities, FileLoadError, HeaderError, LayoutError, LoadError, LoadFlags, LoadOptions,
};

/// The debug name of images loaded from memory.
pub const MEMORY_DEBUG_NAME: &str = "DDSTextureLoader";

/// Loads DDS textures into Vulkan images.
///
/// The loader holds the [`ImageFactory`] used to create images and the
/// [`Capabilities`] of the device. It has no other state, so a single loader
/// can be shared between threads.
pub struct TextureLoader {
    factory: Option<Box<dyn ImageFactory + Send + Sync>>,
    capabilities: Capabilities,
}

impl TextureLoader {
    /// Creates a loader that creates images through `factory`.
    pub fn new(factory: impl ImageFactory + Send + Sync + 'static) -> Self {
        Self {
            factory: Some(Box::new(factory)),
            capabilities: Capabilities::default(),
        }
    }

    /// Creates a loader without an image factory.
    ///
    /// Such a loader still validates DDS files, but every load that gets as
    /// far as creating an image fails with [`LoadError::NoFunction`].
    pub fn without_factory() -> Self {
        Self {
            factory: None,
            capabilities: Capabilities::default(),
        }
    }

    /// Sets the optional device features images may rely on.
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// The optional device features of this loader.
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Loads a DDS texture from memory.
    ///
    /// Mip levels larger than `max_size` are skipped, unless `max_size` is 0.
    /// This is equivalent to [`Self::load_from_memory_ex`] with
    /// [`LoadOptions::default`] and the given `max_size`.
    pub fn load_from_memory(&self, data: &[u8], max_size: u32) -> Result<LoadedTexture, LoadError> {
        let options = LoadOptions {
            max_size,
            ..LoadOptions::default()
        };
        self.load_from_memory_ex(data, &options)
    }

    /// Loads a DDS texture from memory with the given options.
    ///
    /// The offsets of the returned subresources are relative to the start of
    /// `data`.
    pub fn load_from_memory_ex(
        &self,
        data: &[u8],
        options: &LoadOptions<'_>,
    ) -> Result<LoadedTexture, LoadError> {
        self.load(data, options, MEMORY_DEBUG_NAME)
    }

    /// Reads and loads a DDS file.
    ///
    /// See [`Self::load_from_memory`].
    pub fn load_from_file(
        &self,
        path: impl AsRef<Path>,
        max_size: u32,
    ) -> Result<FileTexture, FileLoadError> {
        let options = LoadOptions {
            max_size,
            ..LoadOptions::default()
        };
        self.load_from_file_ex(path, &options)
    }

    /// Reads and loads a DDS file with the given options.
    ///
    /// The image is named after the file name of `path`. If loading fails
    /// after the file was read, the error hands back the file contents.
    pub fn load_from_file_ex(
        &self,
        path: impl AsRef<Path>,
        options: &LoadOptions<'_>,
    ) -> Result<FileTexture, FileLoadError> {
        let path = path.as_ref();
        let data = read_file(path).map_err(|error| FileLoadError { error, data: None })?;

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();

        match self.load(&data, options, &name) {
            Ok(texture) => Ok(FileTexture { texture, data }),
            Err(error) => Err(FileLoadError {
                error,
                data: Some(data),
            }),
        }
    }

    fn load(
        &self,
        data: &[u8],
        options: &LoadOptions<'_>,
        debug_name: &str,
    ) -> Result<LoadedTexture, LoadError> {
        let container = Container::parse(data)?;
        let header = &container.header;

        let plan = ImagePlan::from_header(header, &self.capabilities)?;
        let limits = options.limits.unwrap_or_default();
        let ImageShape {
            width,
            height,
            depth,
            array_layers,
            mip_count,
        } = plan.shape;
        check_limits(plan.class, width, height, depth, array_layers, mip_count, &limits)?;

        let max_size = (options.max_size != 0).then_some(options.max_size);
        let enumerate = |max_size| {
            enumerate_subresources(
                container.data_offset,
                container.data,
                &plan.shape,
                &plan.format.info,
                max_size,
            )
        };

        let mut enumeration = enumerate(max_size)?;
        let reserved_mips = if options.load_flags.contains(LoadFlags::MIP_RESERVE) {
            // never fewer than the file carries
            MAX_MIP_LEVELS
                .min(count_mips(width.max(depth), height))
                .max(mip_count)
        } else {
            mip_count
        };
        let mut descriptor = plan.descriptor(
            enumeration.base_extent,
            reserved_mips.saturating_sub(enumeration.skipped_mips).max(1),
            options,
        );

        let factory = self.factory.as_deref().ok_or(LoadError::NoFunction)?;
        let image = match create_image(factory, &descriptor, options.allocator) {
            Ok(image) => image,
            Err(error) if max_size.is_none() && mip_count > 1 => {
                let retry_size = match plan.class {
                    ImageClass::Texture3D => limits.max_image_dimension_3d,
                    _ => limits.max_image_dimension_2d,
                };
                tracing::debug!(%error, retry_size, "image creation failed, retrying with smaller mips");

                enumeration = enumerate(Some(retry_size))?;
                descriptor = plan.descriptor(
                    enumeration.base_extent,
                    mip_count.saturating_sub(enumeration.skipped_mips).max(1),
                    options,
                );
                create_image(factory, &descriptor, options.allocator)?
            }
            Err(error) => return Err(error),
        };

        if self.capabilities.debug_utils {
            factory.set_debug_name(image, debug_name);
        }

        Ok(LoadedTexture {
            image,
            descriptor,
            subresources: enumeration.subresources,
            alpha_mode: header.alpha_mode(),
            is_cube_map: plan.class == ImageClass::Cube,
        })
    }
}

impl Default for TextureLoader {
    /// Same as [`TextureLoader::without_factory`].
    fn default() -> Self {
        Self::without_factory()
    }
}

impl std::fmt::Debug for TextureLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextureLoader")
            .field("has_factory", &self.factory.is_some())
            .field("capabilities", &self.capabilities)
            .finish()
    }
}

/// A texture loaded by a [`TextureLoader`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTexture {
    pub image: vk::Image,
    /// The parameters `image` was created with.
    pub descriptor: ImageDescriptor,
    /// The regions of the source data to upload, ordered by plane, then array
    /// layer, then mip level.
    pub subresources: Vec<SubresourceDescriptor>,
    pub alpha_mode: AlphaMode,
    pub is_cube_map: bool,
}

/// A texture loaded from a file, together with the file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTexture {
    pub texture: LoadedTexture,
    /// The contents of the file. Subresource offsets are relative to this.
    pub data: Vec<u8>,
}
impl FileTexture {
    /// The bytes of the given subresource.
    pub fn subresource_data(&self, subresource: &SubresourceDescriptor) -> Option<&[u8]> {
        subresource.data(&self.data)
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, LoadError> {
    let len = std::fs::metadata(path)?.len();
    if len > u32::MAX as u64 {
        return Err(LoadError::DataTooLarge(
            usize::try_from(len).unwrap_or(usize::MAX),
        ));
    }
    let min_len = (Header::MAGIC.len() + Header::SIZE) as u64;
    if len < min_len {
        return Err(LoadError::UnexpectedEof {
            needed: min_len,
            available: len,
        });
    }

    Ok(std::fs::read(path)?)
}

/// Everything about the image that follows from the header alone.
struct ImagePlan {
    class: ImageClass,
    format: ResolvedFormat,
    shape: ImageShape,
    flags: vk::ImageCreateFlags,
}

impl ImagePlan {
    fn from_header(header: &Header, capabilities: &Capabilities) -> Result<Self, LoadError> {
        let width = header.width;
        let mut height = header.height;
        let mut depth = header.depth;
        let mut array_layers = 1;
        let mut flags = vk::ImageCreateFlags::empty();

        let (class, format) = if let Some(dx10) = &header.dx10 {
            array_layers = dx10.array_size;
            if array_layers == 0 {
                return Err(HeaderError::ZeroArraySize.into());
            }

            let format = ResolvedFormat::from_header(header, capabilities)?;
            if format.typeless {
                flags |= vk::ImageCreateFlags::MUTABLE_FORMAT;
            }

            let class = match dx10.dimension() {
                Some(ResourceDimension::Texture1D) => {
                    // D3DX writes 1D textures with a fixed height of 1
                    if header.flags.contains(DdsFlags::HEIGHT) && height != 1 {
                        return Err(HeaderError::InvalidHeightForTexture1D(height).into());
                    }
                    height = 1;
                    depth = 1;
                    ImageClass::Texture1D
                }
                Some(ResourceDimension::Texture2D) => {
                    let class = if dx10.misc_flag.contains(MiscFlags::TEXTURE_CUBE) {
                        flags |= vk::ImageCreateFlags::CUBE_COMPATIBLE;
                        array_layers = array_layers.saturating_mul(6);
                        ImageClass::Cube
                    } else {
                        ImageClass::Texture2D
                    };
                    if array_layers > 1 {
                        flags |= vk::ImageCreateFlags::TYPE_2D_ARRAY_COMPATIBLE;
                    }
                    depth = 1;
                    class
                }
                Some(ResourceDimension::Texture3D) => {
                    if !header.flags.contains(DdsFlags::DEPTH) {
                        return Err(HeaderError::MissingVolumeFlag.into());
                    }
                    if array_layers > 1 {
                        return Err(LayoutError::ArrayOfVolumes(array_layers).into());
                    }
                    ImageClass::Texture3D
                }
                None => {
                    return Err(
                        LayoutError::UnsupportedResourceDimension(dx10.resource_dimension).into(),
                    )
                }
            };
            (class, format)
        } else {
            let format = ResolvedFormat::from_header(header, capabilities)?;

            let class = if header.flags.contains(DdsFlags::DEPTH) {
                ImageClass::Texture3D
            } else if header.caps2.contains(DdsCaps2::CUBE_MAP) {
                // partial cube maps are not supported
                if !header.caps2.contains(DdsCaps2::CUBE_MAP_ALL_FACES) {
                    return Err(LayoutError::IncompleteCubeMap(header.caps2).into());
                }
                array_layers = 6;
                flags |= vk::ImageCreateFlags::CUBE_COMPATIBLE;
                depth = 1;
                ImageClass::Cube
            } else {
                depth = 1;
                ImageClass::Texture2D
            };
            (class, format)
        };

        if width == 0 || height == 0 || depth == 0 {
            return Err(HeaderError::ZeroDimension.into());
        }

        Ok(Self {
            class,
            format,
            shape: ImageShape {
                width,
                height,
                depth,
                array_layers,
                mip_count: header.mipmap_count.max(1),
            },
            flags,
        })
    }

    fn descriptor(
        &self,
        extent: vk::Extent3D,
        mip_levels: u32,
        options: &LoadOptions<'_>,
    ) -> ImageDescriptor {
        let force_srgb = options.load_flags.contains(LoadFlags::FORCE_SRGB);
        ImageDescriptor {
            flags: options.create_flags | self.flags,
            image_type: self.class.image_type(),
            format: make_srgb(self.format.format(), force_srgb),
            width: extent.width,
            height: extent.height,
            depth: extent.depth,
            mip_levels,
            array_layers: self.shape.array_layers,
            usage: options.usage,
        }
    }
}
