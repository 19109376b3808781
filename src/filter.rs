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

use crate::gaussian::GaussianBlurFilter;
use crate::primitives::KernelPrecision;
use crate::{BlurError, BlurImage, BlurImageMut};

/// Parameters accepted by [ImageFilter::init].
#[non_exhaustive]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FilterParams {
    GaussianBlur { sigma: f64 },
}

/// Common surface of every filter kind.
///
/// Filters are configured once and may be applied to any number of images,
/// `filter` never mutates the filter itself.
pub trait ImageFilter {
    fn init(&mut self, params: &FilterParams) -> Result<(), BlurError>;

    fn reset(&mut self);

    fn set_threads(&mut self, thread_count: usize);

    /// Raw packed buffer entry, see [GaussianBlurFilter::filter]
    fn filter(
        &self,
        src: &[u8],
        dst: &mut [u8],
        width: u32,
        height: i32,
        bits_per_pixel: u32,
    ) -> Result<(), BlurError>;

    fn filter_image(
        &self,
        src: &BlurImage<'_>,
        dst: &mut BlurImageMut<'_>,
    ) -> Result<(), BlurError>;
}

impl<F: KernelPrecision> ImageFilter for GaussianBlurFilter<F> {
    fn init(&mut self, params: &FilterParams) -> Result<(), BlurError> {
        match *params {
            FilterParams::GaussianBlur { sigma } => {
                let sigma = F::from_f64(sigma).ok_or(BlurError::InvalidArguments)?;
                self.set_sigma(sigma)
            }
        }
    }

    fn reset(&mut self) {
        GaussianBlurFilter::reset(self)
    }

    fn set_threads(&mut self, thread_count: usize) {
        GaussianBlurFilter::set_threads(self, thread_count)
    }

    fn filter(
        &self,
        src: &[u8],
        dst: &mut [u8],
        width: u32,
        height: i32,
        bits_per_pixel: u32,
    ) -> Result<(), BlurError> {
        GaussianBlurFilter::filter(self, src, dst, width, height, bits_per_pixel)
    }

    fn filter_image(
        &self,
        src: &BlurImage<'_>,
        dst: &mut BlurImageMut<'_>,
    ) -> Result<(), BlurError> {
        GaussianBlurFilter::filter_image(self, src, dst)
    }
}

/// Every filter kind known to the crate.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum FilterKind {
    GaussianBlur(GaussianBlurFilter<f64>),
}

impl FilterKind {
    /// Creates and initializes filter matching `params`
    pub fn from_params(params: &FilterParams) -> Result<FilterKind, BlurError> {
        let mut filter = match params {
            FilterParams::GaussianBlur { .. } => FilterKind::GaussianBlur(GaussianBlurFilter::new()),
        };
        filter.init(params)?;
        Ok(filter)
    }

    fn inner(&self) -> &dyn ImageFilter {
        match self {
            FilterKind::GaussianBlur(filter) => filter,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn ImageFilter {
        match self {
            FilterKind::GaussianBlur(filter) => filter,
        }
    }
}

impl ImageFilter for FilterKind {
    fn init(&mut self, params: &FilterParams) -> Result<(), BlurError> {
        self.inner_mut().init(params)
    }

    fn reset(&mut self) {
        self.inner_mut().reset()
    }

    fn set_threads(&mut self, thread_count: usize) {
        self.inner_mut().set_threads(thread_count)
    }

    fn filter(
        &self,
        src: &[u8],
        dst: &mut [u8],
        width: u32,
        height: i32,
        bits_per_pixel: u32,
    ) -> Result<(), BlurError> {
        self.inner()
            .filter(src, dst, width, height, bits_per_pixel)
    }

    fn filter_image(
        &self,
        src: &BlurImage<'_>,
        dst: &mut BlurImageMut<'_>,
    ) -> Result<(), BlurError> {
        self.inner().filter_image(src, dst)
    }
}
