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

use crate::primitives::KernelPrecision;
use crate::safe_math::SafeMath;
use crate::BlurError;

/// Normalized half of a symmetric 1D gaussian kernel.
///
/// Stores `radius + 1` weights, weight for offset `-k` equals the weight for `k`.
/// `weights[0] + 2 * sum(weights[1..])` is one.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKernel<F = f64> {
    sigma: F,
    weights: Vec<F>,
}

impl<F: KernelPrecision> GaussianKernel<F> {
    /// Builds kernel for `sigma`, radius is `max(1, floor(sigma * 3 + 0.5))`.
    pub fn new(sigma: F) -> Result<GaussianKernel<F>, BlurError> {
        let radius = Self::radius_for_sigma(sigma)?;
        let len = radius.safe_add(1)?;
        let mut weights: Vec<F> = Vec::new();
        weights.try_reserve_exact(len).map_err(|_| {
            BlurError::AllocationFailed(len.saturating_mul(size_of::<F>()))
        })?;

        let two = F::one() + F::one();
        // distance is scaled before squaring, `2 * sigma^2` underflows for tiny sigma
        for i in 0..len {
            let x = F::from_usize(i).ok_or(BlurError::ExceedingPointerSize)? / sigma;
            weights.push((-(x * x) / two).exp());
        }

        let mut sum = weights[0];
        for &weight in weights.iter().skip(1) {
            sum = sum + weight * two;
        }
        let scale = F::one() / sum;
        for weight in weights.iter_mut() {
            *weight = *weight * scale;
        }

        Ok(GaussianKernel { sigma, weights })
    }

    /// Kernel radius for `sigma`, never less than one.
    pub fn radius_for_sigma(sigma: F) -> Result<usize, BlurError> {
        if !sigma.is_finite() || sigma <= F::zero() {
            return Err(BlurError::NegativeOrZeroSigma);
        }
        let three = F::from_u8(3).ok_or(BlurError::InvalidArguments)?;
        let half = F::from_f64(0.5).ok_or(BlurError::InvalidArguments)?;
        let radius = (sigma * three + half)
            .floor()
            .to_usize()
            .ok_or(BlurError::ExceedingPointerSize)?;
        Ok(radius.max(1))
    }

    #[inline]
    pub fn sigma(&self) -> F {
        self.sigma
    }

    #[inline]
    pub fn radius(&self) -> usize {
        self.weights.len() - 1
    }

    /// Non negative half of the kernel, index is the distance from the center
    #[inline]
    pub fn weights(&self) -> &[F] {
        &self.weights
    }

    /// Weight at signed `offset`, zero outside of the radius
    #[inline]
    pub fn weight(&self, offset: isize) -> F {
        self.weights
            .get(offset.unsigned_abs())
            .copied()
            .unwrap_or_else(F::zero)
    }

    /// Full `2 * radius + 1` kernel, ordered from `-radius` to `radius`
    pub fn expand(&self) -> Vec<F> {
        let radius = self.radius() as isize;
        (-radius..=radius).map(|x| self.weight(x)).collect()
    }
}
