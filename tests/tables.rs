//! Exhaustive checks of the translation tables against backend constants.

use zenformats::*;

const REGISTERED: [ImageFormat; 4] = [
    ImageFormat::L8,
    ImageFormat::Rgb8,
    ImageFormat::Bgr8,
    ImageFormat::Bgra8,
];

// ── Pixel format ↔ image format ──────────────────────────────────────

#[test]
fn unsupported_pixel_formats_fail() {
    let supported = [
        PixelFormat::Gray8,
        PixelFormat::Bgr24,
        PixelFormat::Bgra32,
        PixelFormat::Rgb24,
    ];
    for p in PixelFormat::ALL {
        if supported.contains(&p) {
            continue;
        }
        assert_eq!(
            to_image_format(p),
            Err(FormatError::UnsupportedFormat(FormatValue::Pixel(p))),
            "{p:?} should not map to an image format"
        );
    }
}

#[test]
fn unsupported_image_formats_fail() {
    for f in [ImageFormat::Rgba8, ImageFormat::L16, ImageFormat::LF32] {
        let expected = FormatError::UnsupportedFormat(FormatValue::Image(f));
        assert_eq!(to_pixel_format(f), Err(expected));
        assert_eq!(to_pixel_type(f), Err(expected));
    }
}

#[test]
fn registry_lists_four_pairs() {
    let pairs: Vec<_> = FormatRegistry::global().pixel_formats().collect();
    assert_eq!(pairs.len(), 4);
    for (p, i) in pairs {
        assert_eq!(to_image_format(p), Ok(i));
    }
}

#[test]
fn registered_pairs_agree_on_size() {
    for (p, i) in FormatRegistry::global().pixel_formats() {
        let ty = to_pixel_type(i).unwrap();
        assert_eq!(p.bits_per_pixel() as usize, i.bytes_per_pixel() * 8);
        assert_eq!(ty.bytes_per_pixel(), i.bytes_per_pixel());
        assert_eq!(ty.channels(), i.channels());
        assert_eq!(ty.depth(), Depth::U8);
    }
}

// ── Pixel types ──────────────────────────────────────────────────────

#[test]
fn pixel_types_match_backend() {
    assert_eq!(to_pixel_type(ImageFormat::L8).unwrap().raw(), 0);
    assert_eq!(to_pixel_type(ImageFormat::Rgb8).unwrap().raw(), 16);
    assert_eq!(to_pixel_type(ImageFormat::Bgr8).unwrap().raw(), 16);
    assert_eq!(to_pixel_type(ImageFormat::Bgra8).unwrap().raw(), 24);
}

#[test]
fn rgb_and_bgr_share_pixel_type_but_not_format() {
    assert_eq!(
        to_pixel_type(ImageFormat::Rgb8).unwrap(),
        to_pixel_type(ImageFormat::Bgr8).unwrap()
    );
    assert_ne!(
        to_pixel_format(ImageFormat::Rgb8).unwrap(),
        to_pixel_format(ImageFormat::Bgr8).unwrap()
    );
    assert_ne!(
        to_image_format(PixelFormat::Rgb24).unwrap(),
        to_image_format(PixelFormat::Bgr24).unwrap()
    );
}

// ── Conversion codes ─────────────────────────────────────────────────

#[test]
fn conversion_codes_match_backend() {
    use ImageFormat::*;
    let expected = [
        (L8, Rgb8, 8),
        (L8, Bgr8, 8),
        (L8, Bgra8, 9),
        (Rgb8, L8, 7),
        (Rgb8, Bgr8, 4),
        (Rgb8, Bgra8, 2),
        (Bgr8, L8, 6),
        (Bgr8, Rgb8, 4),
        (Bgr8, Bgra8, 0),
        (Bgra8, L8, 10),
        (Bgra8, Rgb8, 3),
        (Bgra8, Bgr8, 1),
    ];
    for (src, dst, raw) in expected {
        assert_eq!(
            to_conversion_code(src, dst).unwrap().raw(),
            raw,
            "{src} -> {dst}"
        );
    }
}

#[test]
fn all_directed_pairs_registered() {
    let mut count = 0;
    for src in REGISTERED {
        for dst in REGISTERED {
            if src == dst {
                continue;
            }
            assert!(to_conversion_code(src, dst).is_ok(), "{src} -> {dst}");
            count += 1;
        }
    }
    assert_eq!(count, 12);
    assert_eq!(FormatRegistry::global().conversions().count(), 12);
}

#[test]
fn directions_differ_where_kernels_differ() {
    for src in REGISTERED {
        for dst in REGISTERED {
            if src == dst {
                continue;
            }
            let forward = to_conversion_code(src, dst).unwrap();
            let backward = to_conversion_code(dst, src).unwrap();
            // A channel swap is its own inverse and uses one kernel both ways.
            let swap = matches!(
                (src, dst),
                (ImageFormat::Rgb8, ImageFormat::Bgr8) | (ImageFormat::Bgr8, ImageFormat::Rgb8)
            );
            if swap {
                assert_eq!(forward, backward);
            } else {
                assert_ne!(forward, backward, "{src} <-> {dst}");
            }
        }
    }
}

#[test]
fn gray_bgra_directions() {
    assert_eq!(
        to_conversion_code(ImageFormat::L8, ImageFormat::Bgra8),
        Ok(ConversionCode::GRAY2BGRA)
    );
    assert_eq!(
        to_conversion_code(ImageFormat::Bgra8, ImageFormat::L8),
        Ok(ConversionCode::BGRA2GRAY)
    );
    assert_ne!(ConversionCode::GRAY2BGRA, ConversionCode::BGRA2GRAY);
}

#[test]
fn identity_conversion_is_an_error() {
    for f in ImageFormat::ALL {
        assert_eq!(
            to_conversion_code(f, f),
            Err(FormatError::UnsupportedConversion { src: f, dst: f })
        );
    }
}

#[test]
fn unregistered_pairs_fail() {
    for f in REGISTERED {
        for other in [ImageFormat::Rgba8, ImageFormat::L16, ImageFormat::LF32] {
            assert!(matches!(
                to_conversion_code(f, other),
                Err(FormatError::UnsupportedConversion { .. })
            ));
            assert!(matches!(
                to_conversion_code(other, f),
                Err(FormatError::UnsupportedConversion { .. })
            ));
        }
    }
}

#[test]
fn plan_conversion_special_cases_identity() {
    assert_eq!(
        plan_conversion(ImageFormat::Bgr8, ImageFormat::Bgr8),
        Ok(ConversionPlan::Identity)
    );
    assert_eq!(
        plan_conversion(ImageFormat::Rgba8, ImageFormat::Rgba8),
        Ok(ConversionPlan::Identity)
    );
    assert_eq!(
        plan_conversion(ImageFormat::Bgr8, ImageFormat::Bgra8),
        Ok(ConversionPlan::Convert(ConversionCode::BGR2BGRA))
    );
    assert!(plan_conversion(ImageFormat::L16, ImageFormat::L8).is_err());
}

// ── Kernel shapes and raw values ─────────────────────────────────────

#[test]
fn kernel_shape_codes() {
    assert_eq!(to_kernel_shape_code(KernelShape::Rect), Ok(0));
    assert_eq!(to_kernel_shape_code(KernelShape::Cross), Ok(1));
    assert_eq!(to_kernel_shape_code(KernelShape::Ellipse), Ok(2));
    match to_kernel_shape_code(KernelShape::Custom) {
        Err(FormatError::UnsupportedShape(KernelShape::Custom)) => {}
        other => panic!("expected UnsupportedShape, got {other:?}"),
    }
}

#[test]
fn from_raw_roundtrips_discriminants() {
    for (i, p) in PixelFormat::ALL.into_iter().enumerate() {
        assert_eq!(PixelFormat::from_raw(i as u8), Some(p));
    }
    for (i, f) in ImageFormat::ALL.into_iter().enumerate() {
        assert_eq!(ImageFormat::from_raw(i as u8), Some(f));
    }
    for (i, s) in KernelShape::ALL.into_iter().enumerate() {
        assert_eq!(KernelShape::from_raw(i as u8), Some(s));
    }
    assert_eq!(PixelFormat::from_raw(PixelFormat::ALL.len() as u8), None);
    assert_eq!(ImageFormat::from_raw(200), None);
    assert_eq!(KernelShape::from_raw(4), None);
}

#[test]
fn error_messages() {
    let e = to_pixel_format(ImageFormat::L16).unwrap_err();
    assert_eq!(e.to_string(), "unsupported image format L_U16");
    let e = to_image_format(PixelFormat::Cmyk32).unwrap_err();
    assert_eq!(e.to_string(), "unsupported pixel format Cmyk32");
    let e = to_conversion_code(ImageFormat::L8, ImageFormat::L8).unwrap_err();
    assert_eq!(e.to_string(), "unsupported conversion from L_U8 to L_U8");
    let e = to_kernel_shape_code(KernelShape::Custom).unwrap_err();
    assert_eq!(e.to_string(), "unsupported kernel shape (Custom)");
}
