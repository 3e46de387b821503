#![no_main]
use libfuzzer_sys::fuzz_target;
use zenformats::*;

fuzz_target!(|data: &[u8]| {
    let [p, src, dst, shape, rest @ ..] = data else {
        return;
    };

    // Arbitrary raw host values must never panic, only fail.
    if let Some(pixel) = PixelFormat::from_raw(*p) {
        if let Ok(image) = to_image_format(pixel) {
            assert_eq!(to_pixel_format(image), Ok(pixel));
            assert!(to_pixel_type(image).is_ok());
        }
    }
    if let (Some(src), Some(dst)) = (ImageFormat::from_raw(*src), ImageFormat::from_raw(*dst)) {
        let _ = to_conversion_code(src, dst);
        let _ = plan_conversion(src, dst);

        let mut slots = [0f64; 4];
        for (slot, chunk) in slots.iter_mut().zip(rest.chunks_exact(8)) {
            *slot = f64::from_le_bytes(chunk.try_into().unwrap());
        }
        let _ = scalar_to_color(&Scalar(slots), src);
        if let [r, g, b, a, ..] = *rest {
            let _ = color_to_scalar(Color::new(r, g, b, a), dst);
        }
    }
    if let Some(shape) = KernelShape::from_raw(*shape) {
        let _ = to_kernel_shape_code(shape);
    }
});
