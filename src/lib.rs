// Copyright (c) Radzivon Bartoshyk. All rights reserved.

//
// Redistribution and use in source and binary forms, with or without modification,
// are permitted provided that the following conditions are met:
//
// 1.  Redistributions of source code must retain the above copyright notice, this
// list of conditions and the following disclaimer.
//
// 2.  Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3.  Neither the name of the copyright holder nor the names of its
// contributors may be used to endorse or promote products derived from
// this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
#![allow(clippy::too_many_arguments)]
#![cfg_attr(docsrs, feature(doc_cfg))]
//! Separable two pass gaussian blur for packed 8, 24 and 32 bit images.
//!
//! A [GaussianBlurFilter] owns a normalized kernel built from sigma, and blurs
//! a source buffer into a destination buffer of the same geometry, optionally
//! splitting rows across worker threads.
//!
//! ```
//! use gaussblur::GaussianBlurFilter;
//!
//! let mut filter = GaussianBlurFilter::<f64>::new();
//! filter.set_sigma(1.0).unwrap();
//!
//! // 3x2 grayscale, rows are aligned to 4 bytes
//! let src = [0u8, 0, 255, 0, 0, 0, 255, 0];
//! let mut dst = [0u8; 8];
//! filter.filter(&src, &mut dst, 3, 2, 8).unwrap();
//! assert!(dst[2] < 255);
//! ```

mod bit_depth;
mod blur_image;
mod edge_mode;
mod filter;
mod gaussian;
#[cfg(feature = "image")]
#[cfg_attr(docsrs, doc(cfg(feature = "image")))]
mod gaussian_blur_image;
mod primitives;
mod safe_math;
mod threading_policy;
mod unsafe_rows;
mod util;

pub use bit_depth::{AlphaMode, BitDepth};
pub use blur_image::{BlurImage, BlurImageMut, BufferStore, ImageLayout};
pub use edge_mode::EdgeMode;
pub use filter::{FilterKind, FilterParams, ImageFilter};
pub use gaussian::{gaussian_blur, gaussian_blur_f32, GaussianBlurFilter, GaussianKernel};
#[cfg(feature = "image")]
#[cfg_attr(docsrs, doc(cfg(feature = "image")))]
pub use gaussian_blur_image::gaussian_blur_image;
pub use primitives::KernelPrecision;
pub use threading_policy::ThreadingPolicy;
pub use util::{BlurError, ErrorKind, MismatchedSize};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_through_trait_object() {
        let mut filter: Box<dyn ImageFilter> = Box::new(GaussianBlurFilter::<f64>::new());
        let src = vec![0u8; 16];
        let mut dst = vec![7u8; 16];
        assert_eq!(
            filter.filter(&src, &mut dst, 4, 4, 8),
            Err(BlurError::UninitializedKernel)
        );
        assert!(dst.iter().all(|&x| x == 7));

        filter
            .init(&FilterParams::GaussianBlur { sigma: 0.8 })
            .unwrap();
        filter.set_threads(3);
        filter.filter(&src, &mut dst, 4, 4, 8).unwrap();
        assert!(dst.iter().all(|&x| x == 0));
    }
}
