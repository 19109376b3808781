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

use std::cell::UnsafeCell;

/// Byte image shared between workers, each of which writes its own rows.
#[derive(Copy, Clone, Debug)]
pub(crate) struct UnsafeRows<'a> {
    cells: &'a [UnsafeCell<u8>],
    stride: usize,
}

unsafe impl Send for UnsafeRows<'_> {}

unsafe impl Sync for UnsafeRows<'_> {}

impl<'a> UnsafeRows<'a> {
    pub(crate) fn new(slice: &'a mut [u8], stride: usize) -> Self {
        let ptr = slice as *mut [u8] as *const [UnsafeCell<u8>];
        Self {
            cells: unsafe { &*ptr },
            stride,
        }
    }

    /// Returns row `y`, the last row may be shorter than stride.
    ///
    /// # Safety
    ///
    /// It is UB if two threads hold the same row at the same time.
    #[inline(always)]
    #[allow(clippy::mut_from_ref)]
    pub(crate) unsafe fn row_mut(&self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        let end = (start + self.stride).min(self.cells.len());
        let row = &self.cells[start..end];
        unsafe { std::slice::from_raw_parts_mut(UnsafeCell::raw_get(row.as_ptr()), row.len()) }
    }

    #[inline]
    pub(crate) fn rows(&self) -> usize {
        self.cells.len().div_ceil(self.stride)
    }
}
