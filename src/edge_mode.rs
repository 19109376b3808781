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

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Default, Hash)]
/// Declares an edge handling mode
pub enum EdgeMode {
    /// If kernel goes out of bounds it will be clipped to an edge and edge pixel replicated across filter
    #[default]
    Clamp = 0,
    /// If kernel goes out of bounds image will be tiled with rule `cdefgh|abcdefgh|abcdef`
    Wrap = 1,
    /// If filter goes out of bounds image will be replicated with rule `fedcba|abcdefgh|hgfedcb`
    Reflect = 2,
    /// If filter goes out of bounds image will be replicated with rule `gfedcb|abcdefgh|gfedcba`
    Reflect101 = 3,
}

impl TryFrom<usize> for EdgeMode {
    type Error = crate::BlurError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(EdgeMode::Clamp),
            1 => Ok(EdgeMode::Wrap),
            2 => Ok(EdgeMode::Reflect),
            3 => Ok(EdgeMode::Reflect101),
            _ => Err(crate::BlurError::InvalidArguments),
        }
    }
}

impl EdgeMode {
    /// Maps sample index `i` onto `0..n`, `n` must not be zero.
    #[inline(always)]
    pub(crate) fn resolve(self, i: isize, n: usize) -> usize {
        let n_i = n as isize;
        if i >= 0 && i < n_i {
            return i as usize;
        }
        match self {
            EdgeMode::Clamp => i.clamp(0, n_i - 1) as usize,
            EdgeMode::Wrap => i.rem_euclid(n_i) as usize,
            EdgeMode::Reflect => {
                let m = i.rem_euclid(2 * n_i);
                if m < n_i {
                    m as usize
                } else {
                    (2 * n_i - 1 - m) as usize
                }
            }
            EdgeMode::Reflect101 => {
                if n_i == 1 {
                    return 0;
                }
                let period = 2 * (n_i - 1);
                let m = i.rem_euclid(period);
                if m < n_i {
                    m as usize
                } else {
                    (period - m) as usize
                }
            }
        }
    }
}
