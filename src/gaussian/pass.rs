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
use crate::edge_mode::EdgeMode;
use crate::primitives::KernelPrecision;
use crate::unsafe_rows::UnsafeRows;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub(crate) enum PassDirection {
    /// Samples neighbours in the same row
    Horizontal,
    /// Samples neighbours in the same column
    Vertical,
}

/// Rows `[row_begin, row_end)` of one pass, owned by a single worker.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub(crate) struct PassTask {
    pub(crate) row_begin: usize,
    pub(crate) row_end: usize,
    pub(crate) direction: PassDirection,
}

impl PassTask {
    /// Splits `0..height` into `workers` contiguous chunks of `height / workers` rows,
    /// remainder goes to the last chunk.
    ///
    /// `workers` is clamped into `1..=height`.
    pub(crate) fn split(height: usize, workers: usize, direction: PassDirection) -> Vec<PassTask> {
        let workers = workers.clamp(1, height.max(1));
        let segment_size = height / workers;
        (0..workers)
            .map(|i| {
                let row_begin = i * segment_size;
                let row_end = if i == workers - 1 {
                    height
                } else {
                    row_begin + segment_size
                };
                PassTask {
                    row_begin,
                    row_end,
                    direction,
                }
            })
            .collect()
    }

    #[inline]
    pub(crate) fn with_direction(self, direction: PassDirection) -> PassTask {
        PassTask { direction, ..self }
    }
}

/// Shared read only state of one pass.
#[derive(Copy, Clone)]
pub(crate) struct PassContext<'a, F> {
    pub(crate) src: &'a [u8],
    pub(crate) dst: &'a UnsafeRows<'a>,
    pub(crate) layout: ImageLayout,
    pub(crate) weights: &'a [F],
    pub(crate) edge_mode: EdgeMode,
}

pub(crate) type PassHandler<F> = fn(&PassContext<'_, F>, &PassTask);

/// Convolves rows of `task` along its direction.
///
/// `CN` is the pixel size in bytes, the first `BLURRED` bytes are convolved,
/// remaining bytes are copied from the same pixel of the input.
/// Each sample sums `weight[|k|] * input[clamp(k)]` from `k = -r` to `k = r`
/// and is truncated on store.
pub(crate) fn gaussian_pass<F: KernelPrecision, const CN: usize, const BLURRED: usize>(
    ctx: &PassContext<'_, F>,
    task: &PassTask,
) {
    let layout = ctx.layout;
    let stride = layout.stride;
    let radius = ctx.weights.len() as isize - 1;
    debug_assert!(task.row_end <= ctx.dst.rows());

    let max_val = match task.direction {
        PassDirection::Horizontal => layout.width,
        PassDirection::Vertical => layout.height,
    };

    for y in task.row_begin..task.row_end {
        // SAFETY: tasks of one pass never share rows.
        let dst_row = unsafe { ctx.dst.row_mut(y) };

        for x in 0..layout.width {
            let mut store = [F::zero(); 4];

            for k in -radius..=radius {
                let weight = ctx.weights[k.unsigned_abs()];
                let (sx, sy) = match task.direction {
                    PassDirection::Horizontal => {
                        (ctx.edge_mode.resolve(x as isize + k, max_val), y)
                    }
                    PassDirection::Vertical => {
                        (x, ctx.edge_mode.resolve(y as isize + k, max_val))
                    }
                };
                let px = sy * stride + sx * CN;
                let src_pixel = &ctx.src[px..px + BLURRED];
                for (acc, &v) in store.iter_mut().zip(src_pixel.iter()) {
                    *acc = *acc + F::from_sample(v) * weight;
                }
            }

            let dst_pixel = &mut dst_row[x * CN..(x + 1) * CN];
            for (dst, &acc) in dst_pixel.iter_mut().zip(store.iter()).take(BLURRED) {
                *dst = acc.to_sample();
            }
            if CN > BLURRED {
                let px = y * stride + x * CN;
                dst_pixel[BLURRED..].copy_from_slice(&ctx.src[px + BLURRED..px + CN]);
            }
        }
    }
}

/// Picks the pass handler for a pixel size and a count of convolved channels.
pub(crate) fn pass_handler<F: KernelPrecision>(
    pixel_size: usize,
    blurred_channels: usize,
) -> Option<PassHandler<F>> {
    match (pixel_size, blurred_channels) {
        (1, 1) => Some(gaussian_pass::<F, 1, 1>),
        (3, 3) => Some(gaussian_pass::<F, 3, 3>),
        (4, 3) => Some(gaussian_pass::<F, 4, 3>),
        (4, 4) => Some(gaussian_pass::<F, 4, 4>),
        _ => None,
    }
}
