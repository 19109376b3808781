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
use crate::BlurError;

#[repr(C)]
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
/// Declares pixel packing of a buffer, channel order does not matter for blurring.
///
/// Rows are always aligned to 32 bits.
pub enum BitDepth {
    /// Single plane image, one byte per pixel
    Gray8 = 8,
    /// RGB, BGR etc, three bytes per pixel
    Rgb24 = 24,
    /// RGBA, BGRA, RGBX etc, four bytes per pixel, colour channels are the first three
    Rgbx32 = 32,
}

#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Default, Hash)]
/// Handling of the fourth byte of [BitDepth::Rgbx32] pixels.
pub enum AlphaMode {
    /// Alpha is copied from the source as is
    #[default]
    Preserve,
    /// Alpha is blurred as any other channel
    Blur,
}

impl BitDepth {
    pub fn from_bits(bits_per_pixel: u32) -> Result<BitDepth, BlurError> {
        match bits_per_pixel {
            8 => Ok(BitDepth::Gray8),
            24 => Ok(BitDepth::Rgb24),
            32 => Ok(BitDepth::Rgbx32),
            _ => Err(BlurError::UnsupportedBitDepth(bits_per_pixel)),
        }
    }

    #[inline]
    pub fn bits_per_pixel(&self) -> u32 {
        *self as u32
    }

    #[inline]
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            BitDepth::Gray8 => 1,
            BitDepth::Rgb24 => 3,
            BitDepth::Rgbx32 => 4,
        }
    }

    /// Count of colour channels convolved by the filter
    #[inline]
    pub fn blurred_channels(&self, alpha_mode: AlphaMode) -> usize {
        match (self, alpha_mode) {
            (BitDepth::Gray8, _) => 1,
            (BitDepth::Rgb24, _) | (BitDepth::Rgbx32, AlphaMode::Preserve) => 3,
            (BitDepth::Rgbx32, AlphaMode::Blur) => 4,
        }
    }

    /// Row size in bytes padded to a 4 byte boundary, `ceil(width * bpp / 32) * 4`.
    pub fn row_stride(&self, width: usize) -> Result<usize, BlurError> {
        let bits = width.safe_mul(self.bits_per_pixel() as usize)?.safe_add(31)?;
        Ok(bits / 32 * 4)
    }
}

impl TryFrom<u32> for BitDepth {
    type Error = BlurError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        BitDepth::from_bits(value)
    }
}
