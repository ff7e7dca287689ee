use ash::vk;
use dds_vk::*;

mod util;
use util::{DdsBuilder, RGBA8_MASKS};

fn resolve(builder: &DdsBuilder, capabilities: &Capabilities) -> Result<ResolvedFormat, FormatError> {
    let bytes = builder.build(0);
    let container = Container::parse(&bytes).unwrap();
    ResolvedFormat::from_header(&container.header, capabilities)
}

fn resolve_dxgi(format: DxgiFormat) -> Result<vk::Format, UnsupportedReason> {
    translate_dxgi(format).resolve(&Capabilities::all())
}

#[test]
fn every_dxgi_format_has_an_outcome() {
    use UnsupportedReason::*;

    for &(id, translation) in DXGI_FORMAT_TABLE {
        assert!(id.is_known(), "{:?}", id);
        assert_eq!(translate_dxgi(id), translation);

        match translation.resolve(&Capabilities::all()) {
            Ok(format) => {
                let info = FormatInfo::of(format).unwrap();
                assert!(info.bits_per_pixel > 0, "{:?} -> {:?}", id, format);
                assert!(
                    !(info.plane_count() > 1 && info.depth_stencil),
                    "{:?} -> {:?}",
                    id,
                    format
                );
            }
            Err(reason) => assert!(
                matches!(reason, NoEquivalentLayout | NoEquivalentFeature | NotImplemented)
                    || id == DxgiFormat::UNKNOWN,
                "{:?}: {:?}",
                id,
                reason
            ),
        }
    }

    for id in (116..130).chain([133, 200, 1000, u32::MAX]) {
        assert_eq!(
            translate_dxgi(DxgiFormat(id)),
            Translation::Unsupported(UnknownFormat)
        );
    }
}

#[test]
fn dxgi_mappings() {
    use vk::Format as F;

    let cases = [
        (DxgiFormat::R32G32B32A32_FLOAT, F::R32G32B32A32_SFLOAT),
        (DxgiFormat::R32G32B32_UINT, F::R32G32B32_UINT),
        (DxgiFormat::R10G10B10A2_UNORM, F::A2B10G10R10_UNORM_PACK32),
        (DxgiFormat::R11G11B10_FLOAT, F::B10G11R11_UFLOAT_PACK32),
        (DxgiFormat::R8G8B8A8_UNORM_SRGB, F::R8G8B8A8_SRGB),
        (DxgiFormat::D32_FLOAT, F::D32_SFLOAT),
        (DxgiFormat::D24_UNORM_S8_UINT, F::D24_UNORM_S8_UINT),
        (DxgiFormat::D16_UNORM, F::D16_UNORM),
        (DxgiFormat::R9G9B9E5_SHAREDEXP, F::E5B9G9R9_UFLOAT_PACK32),
        (DxgiFormat::BC1_UNORM, F::BC1_RGBA_UNORM_BLOCK),
        (DxgiFormat::BC1_UNORM_SRGB, F::BC1_RGBA_SRGB_BLOCK),
        (DxgiFormat::BC4_SNORM, F::BC4_SNORM_BLOCK),
        (DxgiFormat::BC5_UNORM, F::BC5_UNORM_BLOCK),
        (DxgiFormat::BC6H_SF16, F::BC6H_SFLOAT_BLOCK),
        (DxgiFormat::BC7_UNORM_SRGB, F::BC7_SRGB_BLOCK),
        (DxgiFormat::B5G6R5_UNORM, F::R5G6B5_UNORM_PACK16),
        (DxgiFormat::B5G5R5A1_UNORM, F::A1R5G5B5_UNORM_PACK16),
        (DxgiFormat::B8G8R8A8_UNORM_SRGB, F::B8G8R8A8_SRGB),
        (DxgiFormat::AYUV, F::R8G8B8A8_UNORM),
        (DxgiFormat::Y410, F::A2B10G10R10_UNORM_PACK32),
        (DxgiFormat::Y416, F::R16G16B16A16_UNORM),
        (DxgiFormat::V408, F::R8G8B8A8_UNORM),
        (DxgiFormat::NV12, F::G8_B8R8_2PLANE_420_UNORM),
        (DxgiFormat::P010, F::G10X6_B10X6R10X6_2PLANE_420_UNORM_3PACK16),
        (DxgiFormat::P016, F::G16_B16R16_2PLANE_420_UNORM),
        (DxgiFormat::YUY2, F::G8B8G8R8_422_UNORM),
        (DxgiFormat::Y216, F::G16B16G16R16_422_UNORM),
        (DxgiFormat::P208, F::G8_B8R8_2PLANE_422_UNORM),
        (DxgiFormat::B4G4R4A4_UNORM, F::A4R4G4B4_UNORM_PACK16),
    ];
    for (id, expected) in cases {
        assert_eq!(resolve_dxgi(id), Ok(expected), "{:?}", id);
    }
}

#[test]
fn typeless_formats() {
    use vk::Format as F;

    let cases = [
        (DxgiFormat::R32G32B32A32_TYPELESS, F::R32G32B32A32_UINT),
        (DxgiFormat::R16G16B16A16_TYPELESS, F::R16G16B16A16_UINT),
        (DxgiFormat::R10G10B10A2_TYPELESS, F::A2B10G10R10_UINT_PACK32),
        (DxgiFormat::R8G8B8A8_TYPELESS, F::R8G8B8A8_UINT),
        (DxgiFormat::R32_TYPELESS, F::R32_UINT),
        (DxgiFormat::R24G8_TYPELESS, F::D24_UNORM_S8_UINT),
        (DxgiFormat::R8_TYPELESS, F::R8_UINT),
        (DxgiFormat::BC1_TYPELESS, F::BC1_RGBA_UNORM_BLOCK),
        (DxgiFormat::BC3_TYPELESS, F::BC3_UNORM_BLOCK),
        (DxgiFormat::BC6H_TYPELESS, F::BC6H_UFLOAT_BLOCK),
        (DxgiFormat::BC7_TYPELESS, F::BC7_UNORM_BLOCK),
        (DxgiFormat::B8G8R8A8_TYPELESS, F::B8G8R8A8_UNORM),
    ];
    for (id, expected) in cases {
        assert!(id.is_typeless());
        assert_eq!(resolve_dxgi(id), Ok(expected), "{:?}", id);

        let resolved = resolve(&DdsBuilder::dx10(4, 4, id), &Capabilities::all()).unwrap();
        assert!(resolved.typeless);
    }

    let resolved = resolve(
        &DdsBuilder::dx10(4, 4, DxgiFormat::R8G8B8A8_UNORM),
        &Capabilities::all(),
    )
    .unwrap();
    assert!(!resolved.typeless);
}

#[test]
fn unsupported_dxgi_reasons() {
    use UnsupportedReason::*;

    let cases = [
        (DxgiFormat::UNKNOWN, UnknownFormat),
        (DxgiFormat::R32G8X24_TYPELESS, NoEquivalentLayout),
        (DxgiFormat::D32_FLOAT_S8X24_UINT, NoEquivalentLayout),
        (DxgiFormat::R32_FLOAT_X8X24_TYPELESS, NoEquivalentLayout),
        (DxgiFormat::X32_TYPELESS_G8X24_UINT, NoEquivalentLayout),
        (DxgiFormat::R24_UNORM_X8_TYPELESS, NoEquivalentLayout),
        (DxgiFormat::X24_TYPELESS_G8_UINT, NoEquivalentLayout),
        (DxgiFormat::A8_UNORM, NoEquivalentFeature),
        (DxgiFormat::R1_UNORM, NoEquivalentFeature),
        (DxgiFormat::B8G8R8X8_UNORM, NoEquivalentLayout),
        (DxgiFormat::R10G10B10_XR_BIAS_A2_UNORM, NoEquivalentLayout),
        (DxgiFormat::B8G8R8X8_TYPELESS, NoEquivalentLayout),
        (DxgiFormat::B8G8R8X8_UNORM_SRGB, NoEquivalentLayout),
        (DxgiFormat::NV11, NotImplemented),
        (DxgiFormat::AI44, NoEquivalentFeature),
        (DxgiFormat::IA44, NoEquivalentFeature),
        (DxgiFormat::P8, NoEquivalentFeature),
        (DxgiFormat::A8P8, NoEquivalentFeature),
        (DxgiFormat::V208, NotImplemented),
    ];
    for (id, reason) in cases {
        assert_eq!(resolve_dxgi(id), Err(reason), "{:?}", id);

        let error = resolve(&DdsBuilder::dx10(4, 4, id), &Capabilities::all()).unwrap_err();
        assert_eq!(error, FormatError::UnsupportedDxgiFormat(id, reason));
    }
}

#[test]
fn extension_gated_formats() {
    let none = Capabilities::default();
    let mut ycbcr = Capabilities::default();
    ycbcr.sampler_ycbcr_conversion = true;

    let yuv = [
        DxgiFormat::R8G8_B8G8_UNORM,
        DxgiFormat::G8R8_G8B8_UNORM,
        DxgiFormat::NV12,
        DxgiFormat::P010,
        DxgiFormat::P016,
        DxgiFormat::OPAQUE_420,
        DxgiFormat::YUY2,
        DxgiFormat::Y210,
        DxgiFormat::Y216,
        DxgiFormat::P208,
    ];
    for id in yuv {
        let translation = translate_dxgi(id);
        assert_eq!(
            translation.resolve(&none),
            Err(UnsupportedReason::RequiresExtension(
                Extension::SamplerYcbcrConversion
            )),
            "{:?}",
            id
        );
        assert!(translation.resolve(&ycbcr).is_ok(), "{:?}", id);
    }

    let b4g4r4a4 = translate_dxgi(DxgiFormat::B4G4R4A4_UNORM);
    assert_eq!(
        b4g4r4a4.resolve(&ycbcr),
        Err(UnsupportedReason::RequiresExtension(Extension::Formats4444))
    );
}

#[test]
fn legacy_masks() {
    use vk::Format as F;
    use PixelFormatFlags as P;

    let cases: &[(PixelFormatFlags, u32, [u32; 4], vk::Format)] = &[
        (P::RGB | P::ALPHAPIXELS, 32, RGBA8_MASKS, F::R8G8B8A8_UNORM),
        (P::RGB | P::ALPHAPIXELS, 32, [0xff0000, 0xff00, 0xff, 0xff000000], F::B8G8R8A8_UNORM),
        // both 10:10:10:2 orders
        (P::RGB, 32, [0x3ff00000, 0xffc00, 0x3ff, 0xc0000000], F::A2B10G10R10_UNORM_PACK32),
        (P::RGB, 32, [0x3ff, 0xffc00, 0x3ff00000, 0xc0000000], F::A2R10G10B10_UNORM_PACK32),
        (P::RGB, 32, [0xffff, 0xffff0000, 0, 0], F::R16G16_UNORM),
        (P::RGB, 32, [0xffffffff, 0, 0, 0], F::R32_SFLOAT),
        (P::RGB, 24, [0xff0000, 0xff00, 0xff, 0], F::R8G8B8_UNORM),
        (P::RGB, 16, [0x7c00, 0x3e0, 0x1f, 0x8000], F::A1R5G5B5_UNORM_PACK16),
        (P::RGB, 16, [0xf800, 0x7e0, 0x1f, 0], F::R5G6B5_UNORM_PACK16),
        (P::RGB, 16, [0xf00, 0xf0, 0xf, 0xf000], F::A4R4G4B4_UNORM_PACK16),
        (P::LUMINANCE, 8, [0xff, 0, 0, 0], F::R8_UNORM),
        (P::LUMINANCE, 8, [0xf, 0, 0, 0xf0], F::R4G4_UNORM_PACK8),
        (P::LUMINANCE, 8, [0xff, 0, 0, 0xff00], F::R8G8_UNORM),
        (P::LUMINANCE, 16, [0xffff, 0, 0, 0], F::R16_UNORM),
        (P::LUMINANCE | P::ALPHAPIXELS, 16, [0xff, 0, 0, 0xff00], F::R8G8_UNORM),
        (P::BUMP_DUDV, 16, [0xff, 0xff00, 0, 0], F::R8G8_SNORM),
        (P::BUMP_DUDV, 32, RGBA8_MASKS, F::R8G8B8A8_SNORM),
        (P::BUMP_DUDV, 32, [0xffff, 0xffff0000, 0, 0], F::R16G16_SNORM),
        (P::BUMP_DUDV, 32, [0x3ff00000, 0xffc00, 0x3ff, 0xc0000000], F::A2B10G10R10_SNORM_PACK32),
    ];

    for &(flags, bits, masks, expected) in cases {
        let builder = DdsBuilder::pixel_format(4, 4, flags, bits, masks);
        let resolved = resolve(&builder, &Capabilities::all()).unwrap();
        assert_eq!(resolved.format(), expected, "{:?} {} {:x?}", flags, bits, masks);
        assert!(!resolved.typeless);
    }
}

#[test]
fn unsupported_legacy_masks() {
    use PixelFormatFlags as P;
    use UnsupportedReason::*;

    let cases: &[(PixelFormatFlags, u32, [u32; 4], UnsupportedReason)] = &[
        (P::RGB, 32, [0xff0000, 0xff00, 0xff, 0], NoEquivalentLayout),
        (P::RGB, 32, [0xff, 0xff00, 0xff0000, 0], NoEquivalentLayout),
        (P::RGB, 16, [0x7c00, 0x3e0, 0x1f, 0], NoEquivalentLayout),
        (P::RGB, 16, [0xf00, 0xf0, 0xf, 0], NoEquivalentLayout),
        (P::RGB, 32, [0xff, 0xff00, 0xff0000, 0xff], UnknownFormat),
        (P::RGB, 8, [0xe0, 0x1c, 0x3, 0], UnknownFormat),
        (P::ALPHA, 8, [0, 0, 0, 0xff], NoEquivalentFeature),
        (P::PAL8, 8, [0; 4], NoEquivalentFeature),
        (P::empty(), 32, RGBA8_MASKS, UnknownFormat),
    ];

    for &(flags, bits, masks, reason) in cases {
        let builder = DdsBuilder::pixel_format(4, 4, flags, bits, masks);
        let error = resolve(&builder, &Capabilities::all()).unwrap_err();
        assert_eq!(error, FormatError::UnsupportedPixelFormat(reason), "{:?} {:x?}", flags, masks);
    }

    // 4444 needs the extension
    let builder = DdsBuilder::pixel_format(4, 4, P::RGB, 16, [0xf00, 0xf0, 0xf, 0xf000]);
    assert_eq!(
        resolve(&builder, &Capabilities::default()).unwrap_err(),
        FormatError::UnsupportedPixelFormat(RequiresExtension(Extension::Formats4444))
    );
}

#[test]
fn legacy_four_cc() {
    use vk::Format as F;

    let cases = [
        (FourCC::DXT1, F::BC1_RGBA_UNORM_BLOCK),
        (FourCC::DXT2, F::BC2_UNORM_BLOCK),
        (FourCC::DXT3, F::BC2_UNORM_BLOCK),
        (FourCC::DXT4, F::BC3_UNORM_BLOCK),
        (FourCC::DXT5, F::BC3_UNORM_BLOCK),
        (FourCC::ATI1, F::BC4_UNORM_BLOCK),
        (FourCC::BC4U, F::BC4_UNORM_BLOCK),
        (FourCC::BC4S, F::BC4_SNORM_BLOCK),
        (FourCC::ATI2, F::BC5_UNORM_BLOCK),
        (FourCC::BC5U, F::BC5_UNORM_BLOCK),
        (FourCC::BC5S, F::BC5_SNORM_BLOCK),
        (FourCC::RGBG, F::G8B8G8R8_422_UNORM),
        (FourCC::GRGB, F::B8G8R8G8_422_UNORM),
        (FourCC::YUY2, F::G8B8G8R8_422_UNORM),
        (FourCC::UYVY, F::B8G8R8G8_422_UNORM),
        (FourCC::D3DFMT_A16B16G16R16, F::R16G16B16A16_UNORM),
        (FourCC::D3DFMT_Q16W16V16U16, F::R16G16B16A16_SNORM),
        (FourCC::D3DFMT_R16F, F::R16_SFLOAT),
        (FourCC::D3DFMT_G16R16F, F::R16G16_SFLOAT),
        (FourCC::D3DFMT_A16B16G16R16F, F::R16G16B16A16_SFLOAT),
        (FourCC::D3DFMT_R32F, F::R32_SFLOAT),
        (FourCC::D3DFMT_G32R32F, F::R32G32_SFLOAT),
        (FourCC::D3DFMT_A32B32G32R32F, F::R32G32B32A32_SFLOAT),
    ];
    assert_eq!(cases.len(), LEGACY_FOUR_CC_TABLE.len());

    for (four_cc, expected) in cases {
        let resolved = resolve(&DdsBuilder::four_cc(4, 4, four_cc), &Capabilities::all()).unwrap();
        assert_eq!(resolved.format(), expected, "{:?}", four_cc);
    }
}

#[test]
fn unknown_four_cc() {
    let four_cc = FourCC(u32::from_le_bytes(*b"ETC1"));
    let error = resolve(&DdsBuilder::four_cc(4, 4, four_cc), &Capabilities::all()).unwrap_err();
    assert_eq!(
        error,
        FormatError::UnsupportedFourCC(four_cc, UnsupportedReason::UnknownFormat)
    );
    assert_eq!(LoadError::from(error).code(), ResultCode::UnsupportedFormat);
}

#[test]
fn translation_is_pure() {
    let builders = [
        DdsBuilder::rgba8(4, 4),
        DdsBuilder::four_cc(4, 4, FourCC::DXT5),
        DdsBuilder::dx10(4, 4, DxgiFormat::NV12),
        DdsBuilder::dx10(4, 4, DxgiFormat::P8),
    ];
    for builder in &builders {
        for capabilities in [Capabilities::default(), Capabilities::all()] {
            assert_eq!(resolve(builder, &capabilities), resolve(builder, &capabilities));
        }
    }
}

#[test]
fn resolved_attributes() {
    let all = Capabilities::all();

    let bc1 = resolve(&DdsBuilder::four_cc(4, 4, FourCC::DXT1), &all).unwrap();
    assert!(bc1.is_block_compressed());
    assert_eq!(bc1.block_dimensions(), Some((4, 4, 8)));
    assert_eq!(bc1.bits_per_pixel(), 4);
    assert_eq!(bc1.plane_count(), 1);

    let nv12 = resolve(&DdsBuilder::dx10(4, 4, DxgiFormat::NV12), &all).unwrap();
    assert_eq!(nv12.plane_count(), 2);
    assert_eq!(nv12.bits_per_pixel(), 12);
    assert!(!nv12.is_depth_stencil());
    assert!(!nv12.is_block_compressed());

    let depth = resolve(&DdsBuilder::dx10(4, 4, DxgiFormat::D24_UNORM_S8_UINT), &all).unwrap();
    assert!(depth.is_depth_stencil());
    assert_eq!(depth.block_dimensions(), None);
}

#[test]
fn side_tables() {
    assert_eq!(bits_per_pixel(vk::Format::UNDEFINED), 0);
    assert_eq!(plane_count(vk::Format::UNDEFINED), 0);
    assert!(!is_depth_stencil(vk::Format::UNDEFINED));

    assert_eq!(bits_per_pixel(vk::Format::R8G8B8A8_UNORM), 32);
    assert_eq!(bits_per_pixel(vk::Format::BC7_UNORM_BLOCK), 8);
    assert_eq!(plane_count(vk::Format::G8_B8_R8_3PLANE_420_UNORM), 3);
    assert!(is_depth_stencil(vk::Format::D32_SFLOAT_S8_UINT));
}

#[test]
fn force_srgb() {
    use vk::Format as F;

    assert_eq!(make_srgb(F::R8G8B8A8_UNORM, true), F::R8G8B8A8_SRGB);
    assert_eq!(make_srgb(F::R8G8B8A8_UNORM, false), F::R8G8B8A8_UNORM);
    assert_eq!(make_srgb(F::BC1_RGBA_UNORM_BLOCK, true), F::BC1_RGBA_SRGB_BLOCK);
    assert_eq!(make_srgb(F::BC7_UNORM_BLOCK, true), F::BC7_SRGB_BLOCK);
    assert_eq!(make_srgb(F::ASTC_8X8_UNORM_BLOCK, true), F::ASTC_8X8_SRGB_BLOCK);
    // no sRGB siblings
    assert_eq!(make_srgb(F::BC4_UNORM_BLOCK, true), F::BC4_UNORM_BLOCK);
    assert_eq!(make_srgb(F::R16G16B16A16_SFLOAT, true), F::R16G16B16A16_SFLOAT);
    // already sRGB
    assert_eq!(make_srgb(F::R8G8B8A8_SRGB, true), F::R8G8B8A8_SRGB);
}
