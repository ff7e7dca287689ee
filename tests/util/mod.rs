#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use ash::prelude::VkResult;
use ash::vk::{self, Handle};
use dds_vk::*;
use rand::SeedableRng;

pub const RGBA8_MASKS: [u32; 4] = [0xff, 0xff00, 0xff0000, 0xff000000];

/// Writes DDS headers field by field.
#[derive(Debug, Clone)]
pub struct DdsBuilder {
    pub flags: u32,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub mipmap_count: u32,
    pub header_size: u32,
    pub pixel_format_size: u32,
    pub pixel_format_flags: u32,
    pub four_cc: u32,
    pub rgb_bit_count: u32,
    pub masks: [u32; 4],
    pub caps: u32,
    pub caps2: u32,
    /// dxgi_format, resource_dimension, misc_flag, array_size, misc_flags2
    pub dx10: Option<[u32; 5]>,
}

impl DdsBuilder {
    const DEFAULT_FLAGS: u32 = 0x1 | 0x2 | 0x4 | 0x1000;

    pub fn rgba8(width: u32, height: u32) -> Self {
        let flags = PixelFormatFlags::RGB | PixelFormatFlags::ALPHAPIXELS;
        Self::pixel_format(width, height, flags, 32, RGBA8_MASKS)
    }

    pub fn pixel_format(
        width: u32,
        height: u32,
        flags: PixelFormatFlags,
        rgb_bit_count: u32,
        masks: [u32; 4],
    ) -> Self {
        Self {
            flags: Self::DEFAULT_FLAGS,
            width,
            height,
            depth: 0,
            mipmap_count: 0,
            header_size: 124,
            pixel_format_size: 32,
            pixel_format_flags: flags.bits(),
            four_cc: 0,
            rgb_bit_count,
            masks,
            caps: DdsCaps::TEXTURE.bits(),
            caps2: 0,
            dx10: None,
        }
    }

    pub fn four_cc(width: u32, height: u32, four_cc: FourCC) -> Self {
        let mut builder = Self::pixel_format(width, height, PixelFormatFlags::FOURCC, 0, [0; 4]);
        builder.four_cc = four_cc.0;
        builder
    }

    /// A 2D texture with a DX10 header and an array size of 1.
    pub fn dx10(width: u32, height: u32, format: DxgiFormat) -> Self {
        let mut builder = Self::four_cc(width, height, FourCC::DX10);
        builder.dx10 = Some([format.0, 3, 0, 1, 0]);
        builder
    }

    pub fn mips(mut self, mipmap_count: u32) -> Self {
        self.mipmap_count = mipmap_count;
        self.flags |= DdsFlags::MIPMAP_COUNT.bits();
        self
    }

    /// Sets the depth and the volume flag.
    pub fn volume(mut self, depth: u32) -> Self {
        self.depth = depth;
        self.flags |= DdsFlags::DEPTH.bits();
        self.caps2 |= DdsCaps2::VOLUME.bits();
        self
    }

    pub fn caps2(mut self, caps2: DdsCaps2) -> Self {
        self.caps2 = caps2.bits();
        self
    }

    pub fn dimension(mut self, dimension: u32) -> Self {
        self.dx10_mut()[1] = dimension;
        self
    }
    pub fn misc_flag(mut self, misc_flag: MiscFlags) -> Self {
        self.dx10_mut()[2] = misc_flag.bits();
        self
    }
    pub fn array_size(mut self, array_size: u32) -> Self {
        self.dx10_mut()[3] = array_size;
        self
    }
    pub fn misc_flags2(mut self, misc_flags2: u32) -> Self {
        self.dx10_mut()[4] = misc_flags2;
        self
    }

    fn dx10_mut(&mut self) -> &mut [u32; 5] {
        self.dx10.as_mut().expect("not a DX10 builder")
    }

    /// The magic bytes and headers.
    pub fn header_bytes(&self) -> Vec<u8> {
        let mut words = [0_u32; 31];
        words[0] = self.header_size;
        words[1] = self.flags;
        words[2] = self.height;
        words[3] = self.width;
        words[5] = self.depth;
        words[6] = self.mipmap_count;
        words[18] = self.pixel_format_size;
        words[19] = self.pixel_format_flags;
        words[20] = self.four_cc;
        words[21] = self.rgb_bit_count;
        words[22..26].copy_from_slice(&self.masks);
        words[26] = self.caps;
        words[27] = self.caps2;

        let mut bytes = b"DDS ".to_vec();
        for word in words.iter().chain(self.dx10.iter().flatten()) {
            bytes.extend_from_slice(&word.to_le_bytes());
        }
        bytes
    }

    /// The headers followed by `data_len` bytes of pixel data.
    ///
    /// Every pixel data byte holds the low byte of its offset into the data.
    pub fn build(&self, data_len: usize) -> Vec<u8> {
        let mut bytes = self.header_bytes();
        bytes.extend((0..data_len).map(|i| i as u8));
        bytes
    }
}

/// What a [`RecordingFactory`] was asked to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedImage {
    pub flags: vk::ImageCreateFlags,
    pub image_type: vk::ImageType,
    pub format: vk::Format,
    /// Width, height, and depth.
    pub extent: [u32; 3],
    pub mip_levels: u32,
    pub array_layers: u32,
    pub usage: vk::ImageUsageFlags,
    pub samples: vk::SampleCountFlags,
    pub tiling: vk::ImageTiling,
    pub with_allocator: bool,
}

#[derive(Debug, Default)]
struct Recording {
    calls: Vec<CreatedImage>,
    names: Vec<(vk::Image, String)>,
    /// Results returned by the next calls, before succeeding.
    failures: Vec<vk::Result>,
    next_handle: u64,
}

/// An [`ImageFactory`] that hands out fake handles and records every call.
#[derive(Debug, Clone, Default)]
pub struct RecordingFactory {
    recording: Arc<Mutex<Recording>>,
}

impl RecordingFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next calls fail with the given results, in order.
    pub fn failing(failures: &[vk::Result]) -> Self {
        let factory = Self::default();
        factory.recording.lock().unwrap().failures = failures.iter().rev().copied().collect();
        factory
    }

    pub fn calls(&self) -> Vec<CreatedImage> {
        self.recording.lock().unwrap().calls.clone()
    }

    pub fn names(&self) -> Vec<(vk::Image, String)> {
        self.recording.lock().unwrap().names.clone()
    }
}

impl ImageFactory for RecordingFactory {
    fn create_image(
        &self,
        create_info: &vk::ImageCreateInfo<'_>,
        allocator: Option<&vk::AllocationCallbacks<'_>>,
    ) -> VkResult<vk::Image> {
        let mut recording = self.recording.lock().unwrap();
        recording.calls.push(CreatedImage {
            flags: create_info.flags,
            image_type: create_info.image_type,
            format: create_info.format,
            extent: [
                create_info.extent.width,
                create_info.extent.height,
                create_info.extent.depth,
            ],
            mip_levels: create_info.mip_levels,
            array_layers: create_info.array_layers,
            usage: create_info.usage,
            samples: create_info.samples,
            tiling: create_info.tiling,
            with_allocator: allocator.is_some(),
        });

        if let Some(failure) = recording.failures.pop() {
            return Err(failure);
        }
        recording.next_handle += 1;
        Ok(vk::Image::from_raw(recording.next_handle))
    }

    fn set_debug_name(&self, image: vk::Image, name: &str) {
        self.recording
            .lock()
            .unwrap()
            .names
            .push((image, name.to_string()));
    }
}

/// A loader with a fresh recording factory and all capabilities.
pub fn loader() -> (TextureLoader, RecordingFactory) {
    let factory = RecordingFactory::new();
    let loader = TextureLoader::new(factory.clone()).with_capabilities(Capabilities::all());
    (loader, factory)
}

/// A unique path in the temp directory.
pub fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("dds-vk-{}-{}", std::process::id(), name));
    path
}

pub fn create_rng() -> impl rand::Rng {
    rand_chacha::ChaChaRng::seed_from_u64(123456789)
}
