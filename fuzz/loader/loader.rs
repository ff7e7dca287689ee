#![no_main]

use ash::vk::{self, Handle};
use dds_vk::{Capabilities, TextureLoader};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Just no panic
    let loader = TextureLoader::new(
        |_: &vk::ImageCreateInfo<'_>, _: Option<&vk::AllocationCallbacks<'_>>| {
            Ok(vk::Image::from_raw(1))
        },
    )
    .with_capabilities(Capabilities::all());

    let max_size = data.last().map_or(0, |&b| b as u32 * 16);
    if let Ok(texture) = loader.load_from_memory(data, max_size) {
        for subresource in &texture.subresources {
            let bytes = subresource.data(data).expect("subresource out of bounds");
            assert!(!bytes.is_empty());
        }
    }
});
