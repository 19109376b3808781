/*
 * // Copyright (c) Radzivon Bartoshyk 3/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */

use crate::safe_math::SafeMath;
use crate::util::try_alloc_zeroed;
use crate::{
    AlphaMode, BitDepth, BlurError, BlurImage, BlurImageMut, EdgeMode, GaussianBlurFilter,
    ThreadingPolicy,
};
use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};

/// Copies tightly packed rows into a buffer with 32 bit aligned rows
fn pack_rows(
    raw: &[u8],
    row_bytes: usize,
    stride: usize,
    height: usize,
) -> Result<Vec<u8>, BlurError> {
    let mut packed = try_alloc_zeroed(stride.safe_mul(height)?)?;
    for (dst, src) in packed
        .chunks_exact_mut(stride)
        .zip(raw.chunks_exact(row_bytes))
    {
        dst[..row_bytes].copy_from_slice(src);
    }
    Ok(packed)
}

fn unpack_rows(packed: &[u8], row_bytes: usize, stride: usize) -> Vec<u8> {
    packed
        .chunks_exact(stride)
        .flat_map(|row| row[..row_bytes].iter().copied())
        .collect()
}

fn blur_packed(
    raw: &[u8],
    width: u32,
    height: u32,
    depth: BitDepth,
    filter: &GaussianBlurFilter<f64>,
) -> Option<Vec<u8>> {
    let row_bytes = width as usize * depth.bytes_per_pixel();
    let stride = depth.row_stride(width as usize).ok()?;
    let packed = pack_rows(raw, row_bytes, stride, height as usize).ok()?;
    let src = BlurImage::borrow(&packed, width, i32::try_from(height).ok()?, depth);
    let mut dst = BlurImageMut::default();
    filter.filter_image(&src, &mut dst).ok()?;
    Some(unpack_rows(dst.data.borrow(), row_bytes, stride))
}

/// Performs gaussian blur on the image
///
/// Grayscale and RGB images keep their layout, RGBA images are blurred including alpha,
/// any other format is converted to RGBA8.
///
/// NOTE: Alpha must be associated if this image with alpha
///
/// # Arguments
///
/// * `image`: Dynamic image provided by image crate.
/// * `sigma`: Sigma for a gaussian kernel.
/// * `edge_mode` - Rule to handle edge mode.
/// * `threading_policy` - Threads usage policy.
///
#[must_use]
pub fn gaussian_blur_image(
    image: &DynamicImage,
    sigma: f64,
    edge_mode: EdgeMode,
    threading_policy: ThreadingPolicy,
) -> Option<DynamicImage> {
    let mut filter = GaussianBlurFilter::<f64>::with_sigma(sigma).ok()?;
    filter.set_edge_mode(edge_mode);
    filter.set_threading_policy(threading_policy);

    match image {
        DynamicImage::ImageLuma8(gray) => {
            let blurred = blur_packed(
                gray.as_raw(),
                gray.width(),
                gray.height(),
                BitDepth::Gray8,
                &filter,
            )?;
            let new_image = GrayImage::from_raw(gray.width(), gray.height(), blurred)?;
            Some(DynamicImage::ImageLuma8(new_image))
        }
        DynamicImage::ImageRgb8(rgb) => {
            let blurred = blur_packed(
                rgb.as_raw(),
                rgb.width(),
                rgb.height(),
                BitDepth::Rgb24,
                &filter,
            )?;
            let new_image = RgbImage::from_raw(rgb.width(), rgb.height(), blurred)?;
            Some(DynamicImage::ImageRgb8(new_image))
        }
        _ => {
            let rgba = image.to_rgba8();
            filter.set_alpha_mode(AlphaMode::Blur);
            let blurred = blur_packed(
                rgba.as_raw(),
                rgba.width(),
                rgba.height(),
                BitDepth::Rgbx32,
                &filter,
            )?;
            let new_image = RgbaImage::from_raw(rgba.width(), rgba.height(), blurred)?;
            Some(DynamicImage::ImageRgba8(new_image))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_roundtrip_keeps_pixels() {
        let raw = (0u8..15).collect::<Vec<u8>>();
        let packed = pack_rows(&raw, 5, 8, 3).unwrap();
        assert_eq!(packed.len(), 24);
        assert_eq!(&packed[8..13], &raw[5..10]);
        assert_eq!(unpack_rows(&packed, 5, 8), raw);
    }

    #[test]
    fn test_pack_rows_reports_allocation_failure() {
        assert_eq!(
            pack_rows(&[], 1, usize::MAX / 2, 3),
            Err(BlurError::ExceedingPointerSize)
        );
        let size = usize::MAX / 2 + 1;
        assert_eq!(
            pack_rows(&[], 1, size, 1),
            Err(BlurError::AllocationFailed(size))
        );
    }

    #[test]
    fn test_gaussian_blur_image_rgb() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(13, 7, image::Rgb([126, 66, 77])));
        let blurred = gaussian_blur_image(&image, 2., EdgeMode::Clamp, ThreadingPolicy::Adaptive)
            .unwrap();
        let rgb = blurred.as_rgb8().unwrap();
        assert_eq!(rgb.dimensions(), (13, 7));
        for px in rgb.pixels() {
            assert!((px.0[0] as i32 - 126).abs() <= 2);
            assert!((px.0[1] as i32 - 66).abs() <= 2);
            assert!((px.0[2] as i32 - 77).abs() <= 2);
        }
    }

    #[test]
    fn test_gaussian_blur_image_invalid_sigma() {
        let image = DynamicImage::ImageLuma8(GrayImage::new(4, 4));
        assert!(gaussian_blur_image(&image, -1., EdgeMode::Clamp, ThreadingPolicy::Single).is_none());
    }
}
