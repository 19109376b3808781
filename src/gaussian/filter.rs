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

use crate::blur_image::ImageLayout;
use crate::gaussian::kernel::GaussianKernel;
use crate::gaussian::pass::{pass_handler, PassContext, PassDirection, PassHandler, PassTask};
use crate::primitives::KernelPrecision;
use crate::unsafe_rows::UnsafeRows;
use crate::util::try_alloc_zeroed;
use crate::{
    AlphaMode, BitDepth, BlurError, BlurImage, BlurImageMut, EdgeMode, ThreadingPolicy,
};
use log::{debug, trace, warn};

/// Two pass separable gaussian blur over packed 8, 24 and 32 bit buffers.
///
/// Kernel is built once by [GaussianBlurFilter::set_sigma] and reused by every call.
/// Rows are split into contiguous chunks, one per worker, and a full join separates
/// the horizontal pass from the vertical one.
///
/// `F` is the precision of kernel weights and accumulators.
///
/// # Examples
///
/// ```
/// use gaussblur::GaussianBlurFilter;
///
/// let mut filter = GaussianBlurFilter::<f64>::new();
/// filter.set_sigma(1.0).unwrap();
/// filter.set_threads(2);
///
/// let src = vec![126u8; 8 * 6];
/// let mut dst = vec![0u8; 8 * 6];
/// filter.filter(&src, &mut dst, 8, -6, 8).unwrap();
/// assert!(dst.iter().all(|&x| x >= 124 && x <= 126));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianBlurFilter<F: KernelPrecision = f64> {
    kernel: Option<GaussianKernel<F>>,
    threading_policy: ThreadingPolicy,
    edge_mode: EdgeMode,
    alpha_mode: AlphaMode,
}

impl<F: KernelPrecision> Default for GaussianBlurFilter<F> {
    fn default() -> Self {
        GaussianBlurFilter {
            kernel: None,
            threading_policy: ThreadingPolicy::Single,
            edge_mode: EdgeMode::Clamp,
            alpha_mode: AlphaMode::Preserve,
        }
    }
}

impl<F: KernelPrecision> GaussianBlurFilter<F> {
    /// Creates filter without kernel, [GaussianBlurFilter::set_sigma] must be called before filtering
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sigma(sigma: F) -> Result<Self, BlurError> {
        let mut filter = Self::default();
        filter.set_sigma(sigma)?;
        Ok(filter)
    }

    /// Rebuilds the kernel.
    ///
    /// On failure previous kernel is discarded and the filter is uninitialized.
    pub fn set_sigma(&mut self, sigma: F) -> Result<(), BlurError> {
        self.kernel = None;
        match GaussianKernel::new(sigma) {
            Ok(kernel) => {
                debug!(
                    "Gaussian kernel rebuilt: sigma {:?}, radius {}",
                    sigma,
                    kernel.radius()
                );
                self.kernel = Some(kernel);
                Ok(())
            }
            Err(err) => {
                warn!("Gaussian kernel cleared, sigma {:?} rejected: {}", sigma, err);
                Err(err)
            }
        }
    }

    /// Same as [GaussianBlurFilter::set_sigma]
    #[inline]
    pub fn init(&mut self, sigma: F) -> Result<(), BlurError> {
        self.set_sigma(sigma)
    }

    /// Discards the kernel, filtering is rejected until sigma is set again
    pub fn reset(&mut self) {
        self.kernel = None;
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.kernel.is_some()
    }

    /// Kernel radius, `None` when uninitialized
    #[inline]
    pub fn radius(&self) -> Option<usize> {
        self.kernel.as_ref().map(|x| x.radius())
    }

    #[inline]
    pub fn sigma(&self) -> Option<F> {
        self.kernel.as_ref().map(|x| x.sigma())
    }

    #[inline]
    pub fn kernel(&self) -> Option<&GaussianKernel<F>> {
        self.kernel.as_ref()
    }

    /// Sets worker count, more than one enables multi-threaded filtering
    pub fn set_threads(&mut self, thread_count: usize) {
        self.threading_policy = ThreadingPolicy::from_count(thread_count);
    }

    #[inline]
    pub fn thread_count(&self) -> usize {
        self.threading_policy.requested_threads()
    }

    #[inline]
    pub fn threading_policy(&self) -> ThreadingPolicy {
        self.threading_policy
    }

    pub fn set_threading_policy(&mut self, threading_policy: ThreadingPolicy) {
        self.threading_policy = threading_policy;
    }

    #[inline]
    pub fn edge_mode(&self) -> EdgeMode {
        self.edge_mode
    }

    pub fn set_edge_mode(&mut self, edge_mode: EdgeMode) {
        self.edge_mode = edge_mode;
    }

    #[inline]
    pub fn alpha_mode(&self) -> AlphaMode {
        self.alpha_mode
    }

    pub fn set_alpha_mode(&mut self, alpha_mode: AlphaMode) {
        self.alpha_mode = alpha_mode;
    }

    /// Blurs raw packed buffer `src` into `dst`.
    ///
    /// # Arguments
    ///
    /// * `width` - Width of the image
    /// * `height` - Height of the image, negative for top-down images, only magnitude is used
    /// * `bits_per_pixel` - One of 8, 24 or 32
    ///
    /// Rows are expected to be aligned to 32 bits, stride is computed as
    /// `ceil(width * bits_per_pixel / 32) * 4`.
    /// `dst` is left untouched on any error.
    pub fn filter(
        &self,
        src: &[u8],
        dst: &mut [u8],
        width: u32,
        height: i32,
        bits_per_pixel: u32,
    ) -> Result<(), BlurError> {
        let depth = BitDepth::from_bits(bits_per_pixel)?;
        let source = BlurImage::borrow(src, width, height, depth);
        let mut destination = BlurImageMut::borrow(dst, width, height, depth);
        self.filter_image(&source, &mut destination)
    }

    /// Blurs `src` into `dst`, owned destination is resized to the source.
    ///
    /// `dst` is left untouched on any error.
    pub fn filter_image(
        &self,
        src: &BlurImage<'_>,
        dst: &mut BlurImageMut<'_>,
    ) -> Result<(), BlurError> {
        let layout = src.check_layout()?;
        dst.check_destination(src)?;
        let kernel = self.kernel.as_ref().ok_or(BlurError::UninitializedKernel)?;
        let handler = pass_handler::<F>(
            layout.depth.bytes_per_pixel(),
            layout.depth.blurred_channels(self.alpha_mode),
        )
        .ok_or(BlurError::InvalidArguments)?;

        let mut scratch = try_alloc_zeroed(layout.buffer_size()?).inspect_err(|err| {
            warn!("Scratch buffer for {}x{} image: {}", layout.width, layout.height, err)
        })?;
        dst.ensure_layout(&layout, src.height)?;

        self.convolve(
            kernel,
            &layout,
            handler,
            src.data.as_ref(),
            &mut scratch,
            dst.data.borrow_mut(),
        );
        Ok(())
    }

    fn convolve(
        &self,
        kernel: &GaussianKernel<F>,
        layout: &ImageLayout,
        handler: PassHandler<F>,
        src: &[u8],
        scratch: &mut [u8],
        dst: &mut [u8],
    ) {
        let workers = self
            .threading_policy
            .worker_count(layout.width, layout.height);
        let tasks = PassTask::split(layout.height, workers, PassDirection::Horizontal);

        debug!(
            "Gaussian blur {}x{} {:?}: radius {}, {} worker(s), {:?}",
            layout.width,
            layout.height,
            layout.depth,
            kernel.radius(),
            tasks.len(),
            self.edge_mode
        );

        let pool = if tasks.len() > 1 {
            Some(novtb::ThreadPool::new(tasks.len()))
        } else {
            None
        };

        {
            let scratch_rows = UnsafeRows::new(&mut *scratch, layout.stride);
            let ctx = PassContext {
                src,
                dst: &scratch_rows,
                layout: *layout,
                weights: kernel.weights(),
                edge_mode: self.edge_mode,
            };
            run_pass(pool.as_ref(), &ctx, &tasks, handler);
        }

        // every horizontal worker has joined, scratch is read only from here
        let tasks = tasks
            .into_iter()
            .map(|task| task.with_direction(PassDirection::Vertical))
            .collect::<Vec<_>>();
        let dst_rows = UnsafeRows::new(dst, layout.stride);
        let ctx = PassContext {
            src: &*scratch,
            dst: &dst_rows,
            layout: *layout,
            weights: kernel.weights(),
            edge_mode: self.edge_mode,
        };
        run_pass(pool.as_ref(), &ctx, &tasks, handler);
    }
}

/// Runs every task of a pass and returns when all of them are finished.
fn run_pass<F: KernelPrecision>(
    pool: Option<&novtb::ThreadPool>,
    ctx: &PassContext<'_, F>,
    tasks: &[PassTask],
    handler: PassHandler<F>,
) {
    for task in tasks.iter() {
        trace!(
            "{:?} pass rows {}..{}",
            task.direction,
            task.row_begin,
            task.row_end
        );
    }
    match pool {
        Some(pool) => pool.parallel_for(|thread_index| {
            if let Some(task) = tasks.get(thread_index) {
                handler(ctx, task);
            }
        }),
        None => {
            for task in tasks.iter() {
                handler(ctx, task);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Lcg(u32);

    impl Lcg {
        fn next(&mut self) -> u8 {
            self.0 = self.0.wrapping_mul(1664525).wrapping_add(1013904223);
            (self.0 >> 24) as u8
        }
    }

    fn noise(len: usize, seed: u32) -> Vec<u8> {
        let mut lcg = Lcg(seed);
        (0..len).map(|_| lcg.next()).collect()
    }

    fn buffer_len(width: u32, height: i32, bits: u32) -> usize {
        ImageLayout::new(width, height, BitDepth::from_bits(bits).unwrap())
            .unwrap()
            .buffer_size()
            .unwrap()
    }

    /// Direct clamped separable convolution with the same truncation rules
    fn reference_blur(
        src: &[u8],
        width: usize,
        height: usize,
        stride: usize,
        pixel_size: usize,
        channels: usize,
        weights: &[f64],
    ) -> Vec<u8> {
        let r = weights.len() as isize - 1;
        let mut scratch = vec![0u8; src.len()];
        let mut dst = vec![0u8; src.len()];
        for y in 0..height {
            for x in 0..width {
                for c in 0..channels {
                    let mut acc = 0f64;
                    for k in -r..=r {
                        let sx = (x as isize + k).clamp(0, width as isize - 1) as usize;
                        acc += src[y * stride + sx * pixel_size + c] as f64
                            * weights[k.unsigned_abs()];
                    }
                    scratch[y * stride + x * pixel_size + c] = acc as u8;
                }
            }
        }
        for y in 0..height {
            for x in 0..width {
                for c in 0..channels {
                    let mut acc = 0f64;
                    for k in -r..=r {
                        let sy = (y as isize + k).clamp(0, height as isize - 1) as usize;
                        acc += scratch[sy * stride + x * pixel_size + c] as f64
                            * weights[k.unsigned_abs()];
                    }
                    dst[y * stride + x * pixel_size + c] = acc as u8;
                }
            }
        }
        dst
    }

    #[test]
    fn test_impulse_4x4_sigma_one() {
        let filter = GaussianBlurFilter::<f64>::with_sigma(1.0).unwrap();
        assert_eq!(filter.radius(), Some(3));
        let mut src = vec![0u8; 16];
        src[4 + 1] = 255;
        let mut dst = vec![0u8; 16];
        filter.filter(&src, &mut dst, 4, 4, 8).unwrap();
        assert_eq!(
            dst,
            vec![
                14, 24, 14, 3, //
                24, 40, 24, 5, //
                14, 24, 14, 3, //
                3, 5, 3, 0,
            ]
        );
        let total = dst.iter().map(|&x| x as u32).sum::<u32>();
        assert!(total <= 255, "Energy expected to be at most 255 but it was {total}");
    }

    #[test]
    fn test_impulse_decays_from_center() {
        let filter = GaussianBlurFilter::<f64>::with_sigma(2.0).unwrap();
        let (width, height) = (21usize, 21usize);
        let stride = BitDepth::Gray8.row_stride(width).unwrap();
        let mut src = vec![0u8; stride * height];
        src[10 * stride + 10] = 255;
        let mut dst = vec![0u8; stride * height];
        filter
            .filter(&src, &mut dst, width as u32, height as i32, 8)
            .unwrap();
        let at = |x: usize, y: usize| dst[y * stride + x];
        for d in 0..10 {
            assert!(at(10 + d, 10) >= at(10 + d + 1, 10));
            assert!(at(10, 10 + d) >= at(10, 10 + d + 1));
            assert_eq!(at(10 + d, 10), at(10 - d, 10));
            assert_eq!(at(10, 10 + d), at(10, 10 - d));
        }
        assert!(at(10, 10) > at(11, 11));
        let total = dst.iter().map(|&x| x as u32).sum::<u32>();
        assert!(total <= 255);
    }

    #[test]
    fn test_uniform_image_is_preserved() {
        for (bits, values) in [(8u32, 1usize), (24, 3), (32, 4)] {
            let (width, height) = (31u32, 17i32);
            let depth = BitDepth::from_bits(bits).unwrap();
            let layout = ImageLayout::new(width, height, depth).unwrap();
            let pixel = [126u8, 66, 77, 200];
            let mut src = vec![0u8; layout.buffer_size().unwrap()];
            for row in src.chunks_exact_mut(layout.stride) {
                for px in row[..layout.row_bytes()].chunks_exact_mut(values) {
                    px.copy_from_slice(&pixel[..values]);
                }
            }
            for sigma in [0.3f64, 1.0, 2.5, 7.0] {
                let mut filter = GaussianBlurFilter::<f64>::with_sigma(sigma).unwrap();
                filter.set_threads(3);
                let mut dst = vec![0u8; src.len()];
                filter.filter(&src, &mut dst, width, height, bits).unwrap();
                for row in dst.chunks_exact(layout.stride) {
                    for (i, px) in row[..layout.row_bytes()].chunks_exact(values).enumerate() {
                        for (c, (&v, &e)) in px.iter().zip(pixel.iter()).enumerate() {
                            let diff = (v as i32 - e as i32).abs();
                            assert!(
                                diff <= 2,
                                "Diff expected to be at most 2 but it was {diff} at {i} in channel {c}, sigma {sigma}, bpp {bits}"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_edge_clamp_matches_reference_5x5() {
        let filter = GaussianBlurFilter::<f64>::with_sigma(0.5).unwrap();
        assert_eq!(filter.radius(), Some(2));
        let weights = filter.kernel().unwrap().weights().to_vec();
        for (bits, pixel_size) in [(8u32, 1usize), (24, 3)] {
            let len = buffer_len(5, 5, bits);
            let stride = len / 5;
            let src = noise(len, 17 + bits);
            let mut dst = vec![0u8; len];
            filter.filter(&src, &mut dst, 5, 5, bits).unwrap();
            let expected = reference_blur(&src, 5, 5, stride, pixel_size, pixel_size, &weights);
            for y in 0..5 {
                let row = &dst[y * stride..y * stride + 5 * pixel_size];
                let expected_row = &expected[y * stride..y * stride + 5 * pixel_size];
                assert_eq!(row, expected_row, "Row {y} mismatch at {bits} bpp");
            }
        }
    }

    #[test]
    fn test_edge_clamp_border_column() {
        // left column is bright, border pixel sees replicated edge samples only
        let filter = GaussianBlurFilter::<f64>::with_sigma(0.5).unwrap();
        let w = filter.kernel().unwrap().weights().to_vec();
        let stride = 8usize;
        let mut src = vec![0u8; stride * 5];
        for y in 0..5 {
            src[y * stride] = 200;
        }
        let mut dst = vec![0u8; stride * 5];
        filter.filter(&src, &mut dst, 5, 5, 8).unwrap();
        let mut edge = 0f64;
        for k in -2isize..=2 {
            if k <= 0 {
                edge += 200f64 * w[k.unsigned_abs()];
            }
        }
        let horizontal = edge as u8;
        let mut vertical = 0f64;
        for k in -2isize..=2 {
            vertical += horizontal as f64 * w[k.unsigned_abs()];
        }
        assert_eq!(dst[2 * stride], vertical as u8);
        assert!(dst[0] >= dst[1]);
        assert_eq!(dst[4], 0);
    }

    #[test]
    fn test_threading_parity() {
        for (bits, alpha_mode) in [
            (8u32, AlphaMode::Preserve),
            (24, AlphaMode::Preserve),
            (32, AlphaMode::Preserve),
            (32, AlphaMode::Blur),
        ] {
            let (width, height) = (37u32, 23i32);
            let src = noise(buffer_len(width, height, bits), bits * 7 + 1);
            let mut filter = GaussianBlurFilter::<f64>::with_sigma(1.8).unwrap();
            filter.set_alpha_mode(alpha_mode);
            let mut single = vec![0u8; src.len()];
            filter.filter(&src, &mut single, width, height, bits).unwrap();
            for threads in [2usize, 5, height as usize, 64] {
                filter.set_threads(threads);
                let mut parallel = vec![0u8; src.len()];
                filter
                    .filter(&src, &mut parallel, width, height, bits)
                    .unwrap();
                assert_eq!(
                    single, parallel,
                    "Threaded output differs with {threads} threads at {bits} bpp"
                );
            }
        }
    }

    #[test]
    fn test_f32_precision_parity() {
        let mut filter = GaussianBlurFilter::<f32>::with_sigma(1.2).unwrap();
        let src = noise(buffer_len(19, 11, 24), 5);
        let mut single = vec![0u8; src.len()];
        filter.filter(&src, &mut single, 19, 11, 24).unwrap();
        filter.set_threads(4);
        let mut parallel = vec![0u8; src.len()];
        filter.filter(&src, &mut parallel, 19, 11, 24).unwrap();
        assert_eq!(single, parallel);
    }

    #[test]
    fn test_negative_height_matches_positive() {
        let filter = GaussianBlurFilter::<f64>::with_sigma(1.1).unwrap();
        let src = noise(buffer_len(9, 7, 24), 3);
        let mut top_down = vec![0u8; src.len()];
        let mut bottom_up = vec![0u8; src.len()];
        filter.filter(&src, &mut top_down, 9, -7, 24).unwrap();
        filter.filter(&src, &mut bottom_up, 9, 7, 24).unwrap();
        assert_eq!(top_down, bottom_up);
    }

    #[test]
    fn test_alpha_preserved_or_blurred() {
        let (width, height) = (6u32, 5i32);
        let mut src = noise(buffer_len(width, height, 32), 99);
        src.chunks_exact_mut(4).for_each(|px| px[3] = 255);
        src[4 * 14 + 3] = 0;

        let mut filter = GaussianBlurFilter::<f64>::with_sigma(1.0).unwrap();
        let mut preserved = vec![0u8; src.len()];
        filter.filter(&src, &mut preserved, width, height, 32).unwrap();
        for (s, d) in src.chunks_exact(4).zip(preserved.chunks_exact(4)) {
            assert_eq!(s[3], d[3]);
        }

        filter.set_alpha_mode(AlphaMode::Blur);
        let mut blurred = vec![0u8; src.len()];
        filter.filter(&src, &mut blurred, width, height, 32).unwrap();
        assert!(blurred[4 * 14 + 3] > 0);
        assert!(blurred[4 * 13 + 3] < 255);
        for (p, b) in preserved.chunks_exact(4).zip(blurred.chunks_exact(4)) {
            assert_eq!(p[..3], b[..3]);
        }
    }

    #[test]
    fn test_row_padding_untouched() {
        let filter = GaussianBlurFilter::<f64>::with_sigma(1.0).unwrap();
        let (width, height) = (5u32, 4i32);
        let stride = BitDepth::Rgb24.row_stride(5).unwrap();
        assert_eq!(stride, 16);
        let src = vec![10u8; stride * 4];
        let mut dst = vec![0xAB; stride * 4];
        filter.filter(&src, &mut dst, width, height, 24).unwrap();
        for row in dst.chunks_exact(stride) {
            assert_eq!(row[15], 0xAB);
            assert!(row[..15].iter().all(|&x| x >= 8 && x <= 10));
        }
    }

    #[test]
    fn test_unpadded_last_row_accepted() {
        let filter = GaussianBlurFilter::<f64>::with_sigma(1.0).unwrap();
        let src = vec![50u8; 16 * 3 + 15];
        let mut dst = vec![0xAB; 16 * 3 + 15];
        filter.filter(&src, &mut dst, 5, 4, 24).unwrap();
        for (y, row) in dst.chunks(16).enumerate() {
            assert!(
                row[..15].iter().all(|&x| x >= 48 && x <= 50),
                "Row {y} expected to stay within 48..=50 but it was {row:?}"
            );
            if row.len() == 16 {
                assert_eq!(row[15], 0xAB, "Padding of row {y} was overwritten");
            }
        }
    }

    #[test]
    fn test_rejects_and_leaves_dst_untouched() {
        let src = vec![1u8; 64];
        let sentinel = vec![0xABu8; 64];

        let uninitialized = GaussianBlurFilter::<f64>::new();
        let mut dst = sentinel.clone();
        assert_eq!(
            uninitialized.filter(&src, &mut dst, 4, 4, 8),
            Err(BlurError::UninitializedKernel)
        );
        assert_eq!(dst, sentinel);

        let filter = GaussianBlurFilter::<f64>::with_sigma(1.0).unwrap();
        assert_eq!(
            filter.filter(&src, &mut dst, 4, 4, 16),
            Err(BlurError::UnsupportedBitDepth(16))
        );
        assert_eq!(dst, sentinel);

        assert!(matches!(
            filter.filter(&[], &mut dst, 4, 4, 8),
            Err(BlurError::MinimumSliceSizeMismatch(_))
        ));
        assert_eq!(dst, sentinel);

        assert!(matches!(
            filter.filter(&src, &mut [], 4, 4, 8),
            Err(BlurError::MinimumSliceSizeMismatch(_))
        ));

        assert_eq!(
            filter.filter(&src, &mut dst, 0, 4, 8),
            Err(BlurError::ZeroBaseSize)
        );
        assert_eq!(dst, sentinel);
    }

    #[test]
    fn test_sigma_lifecycle() {
        let mut filter = GaussianBlurFilter::<f64>::new();
        assert!(!filter.is_initialized());
        assert_eq!(filter.radius(), None);
        filter.init(2.0).unwrap();
        assert_eq!(filter.radius(), Some(6));
        assert_eq!(filter.sigma(), Some(2.0));

        assert_eq!(filter.set_sigma(-3.0), Err(BlurError::NegativeOrZeroSigma));
        assert!(!filter.is_initialized());
        assert_eq!(filter.sigma(), None);

        filter.set_sigma(0.2).unwrap();
        assert_eq!(filter.radius(), Some(1));
        filter.reset();
        assert!(filter.kernel().is_none());
        let src = vec![0u8; 16];
        let mut dst = vec![0u8; 16];
        assert_eq!(
            filter.filter(&src, &mut dst, 4, 4, 8),
            Err(BlurError::UninitializedKernel)
        );
    }

    #[test]
    fn test_thread_count_configuration() {
        let mut filter = GaussianBlurFilter::<f64>::new();
        assert_eq!(filter.thread_count(), 1);
        filter.set_threads(4);
        assert_eq!(filter.thread_count(), 4);
        assert!(filter.threading_policy().is_multithreaded());
        filter.set_threads(1);
        assert_eq!(filter.threading_policy(), ThreadingPolicy::Single);
    }

    #[test]
    fn test_filter_image_owned_destination() {
        let filter = GaussianBlurFilter::<f64>::with_sigma(1.0).unwrap();
        let src = vec![77u8; 12 * 3];
        let source = BlurImage::borrow(&src, 3, -3, BitDepth::Rgbx32);
        let mut dst = BlurImageMut::default();
        filter.filter_image(&source, &mut dst).unwrap();
        assert_eq!(dst.width, 3);
        assert_eq!(dst.height, -3);
        assert_eq!(dst.depth, BitDepth::Rgbx32);
        assert_eq!(dst.data.borrow().len(), 36);
        assert!(dst.data.borrow().iter().all(|&x| x >= 75 && x <= 77));

        let uninitialized = GaussianBlurFilter::<f64>::new();
        let mut untouched = BlurImageMut::default();
        assert!(uninitialized.filter_image(&source, &mut untouched).is_err());
        assert!(untouched.data.borrow().is_empty());
    }

    #[test]
    fn test_wrap_edge_mode_differs_at_border() {
        let mut filter = GaussianBlurFilter::<f64>::with_sigma(1.0).unwrap();
        let mut src = vec![0u8; 8 * 8];
        for y in 0..8 {
            src[y * 8 + 7] = 255;
        }
        let mut clamped = vec![0u8; 64];
        filter.filter(&src, &mut clamped, 8, 8, 8).unwrap();
        filter.set_edge_mode(EdgeMode::Wrap);
        let mut wrapped = vec![0u8; 64];
        filter.filter(&src, &mut wrapped, 8, 8, 8).unwrap();
        assert_eq!(clamped[0], 0);
        assert!(wrapped[0] > 0);
        assert_eq!(wrapped[0], wrapped[6]);
    }
}
