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

use crate::gaussian::filter::GaussianBlurFilter;
use crate::{BlurError, BlurImage, BlurImageMut, EdgeMode, ThreadingPolicy};

/// Performs gaussian blur on the image.
///
/// Builds a transient [GaussianBlurFilter] with `f64` weights, prefer keeping a filter around
/// when the same sigma is used for many images.
/// O(R) complexity.
///
/// # Arguments
///
/// * `sigma` - Sigma for a gaussian kernel, kernel radius is `max(1, round(sigma * 3))`
/// * `edge_mode` - Rule to handle edge mode
/// * `threading_policy` - Threading policy according to *ThreadingPolicy*
///
/// # Examples
///
/// ```
/// use gaussblur::{gaussian_blur, BitDepth, BlurImage, BlurImageMut, EdgeMode, ThreadingPolicy};
///
/// let src = vec![90u8; 12 * 4];
/// let image = BlurImage::borrow(&src, 4, 4, BitDepth::Rgb24);
/// let mut dst = BlurImageMut::default();
/// gaussian_blur(&image, &mut dst, 1.5, EdgeMode::Clamp, ThreadingPolicy::Adaptive).unwrap();
/// assert_eq!(dst.data.borrow().len(), 48);
/// ```
pub fn gaussian_blur(
    src: &BlurImage<'_>,
    dst: &mut BlurImageMut<'_>,
    sigma: f64,
    edge_mode: EdgeMode,
    threading_policy: ThreadingPolicy,
) -> Result<(), BlurError> {
    let mut filter = GaussianBlurFilter::<f64>::with_sigma(sigma)?;
    filter.set_edge_mode(edge_mode);
    filter.set_threading_policy(threading_policy);
    filter.filter_image(src, dst)
}

/// Performs gaussian blur on the image with `f32` weights and accumulators.
///
/// Faster than [gaussian_blur], results may differ by one in some channels.
pub fn gaussian_blur_f32(
    src: &BlurImage<'_>,
    dst: &mut BlurImageMut<'_>,
    sigma: f32,
    edge_mode: EdgeMode,
    threading_policy: ThreadingPolicy,
) -> Result<(), BlurError> {
    let mut filter = GaussianBlurFilter::<f32>::with_sigma(sigma)?;
    filter.set_edge_mode(edge_mode);
    filter.set_threading_policy(threading_policy);
    filter.filter_image(src, dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BitDepth;

    #[test]
    fn test_gaussian_blur_rgb() {
        let width: usize = 148;
        let height: usize = 148;
        let stride = BitDepth::Rgb24.row_stride(width).unwrap();
        let mut src = vec![0u8; stride * height];
        for row in src.chunks_exact_mut(stride) {
            for dst in row[..width * 3].chunks_exact_mut(3) {
                dst[0] = 126;
                dst[1] = 66;
                dst[2] = 77;
            }
        }
        let src_image = BlurImage::borrow(&src, width as u32, height as i32, BitDepth::Rgb24);
        let mut dst = BlurImageMut::default();
        gaussian_blur(
            &src_image,
            &mut dst,
            3.,
            EdgeMode::Clamp,
            ThreadingPolicy::Adaptive,
        )
        .unwrap();
        for row in dst.data.borrow().chunks_exact(stride) {
            for (i, cn) in row[..width * 3].chunks_exact(3).enumerate() {
                let diff0 = (cn[0] as i32 - 126).abs();
                assert!(
                    diff0 <= 2,
                    "Diff expected to be less than 2, but it was {diff0} at {i} in channel 0"
                );
                let diff1 = (cn[1] as i32 - 66).abs();
                assert!(
                    diff1 <= 2,
                    "Diff expected to be less than 2, but it was {diff1} at {i} in channel 1"
                );
                let diff2 = (cn[2] as i32 - 77).abs();
                assert!(
                    diff2 <= 2,
                    "Diff expected to be less than 2, but it was {diff2} at {i} in channel 2"
                );
            }
        }
    }

    #[test]
    fn test_gaussian_blur_f32_plane() {
        let src = vec![200u8; 64 * 32];
        let src_image = BlurImage::borrow(&src, 64, -32, BitDepth::Gray8);
        let mut dst = BlurImageMut::default();
        gaussian_blur_f32(
            &src_image,
            &mut dst,
            2.,
            EdgeMode::Reflect101,
            ThreadingPolicy::Single,
        )
        .unwrap();
        for (i, &cn) in dst.data.borrow().iter().enumerate() {
            let diff = (cn as i32 - 200).abs();
            assert!(
                diff <= 2,
                "Diff expected to be less than 2 but it was {diff} at {i}"
            );
        }
    }

    #[test]
    fn test_gaussian_blur_invalid_sigma() {
        let src = vec![0u8; 16];
        let src_image = BlurImage::borrow(&src, 4, 4, BitDepth::Gray8);
        let mut dst = BlurImageMut::default();
        assert_eq!(
            gaussian_blur(
                &src_image,
                &mut dst,
                0.,
                EdgeMode::Clamp,
                ThreadingPolicy::Single
            ),
            Err(BlurError::NegativeOrZeroSigma)
        );
    }
}
