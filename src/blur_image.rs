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
use crate::util::{check_slice_size, try_alloc_zeroed};
use crate::{BitDepth, BlurError};
use std::borrow::Cow;

/// Geometry of a packed pixel buffer, stride is always derived from width and depth.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ImageLayout {
    pub width: usize,
    /// Absolute row count
    pub height: usize,
    pub stride: usize,
    pub depth: BitDepth,
}

impl ImageLayout {
    /// Height sign only describes row orientation and is ignored.
    pub fn new(width: u32, height: i32, depth: BitDepth) -> Result<ImageLayout, BlurError> {
        let width = width as usize;
        let height = height.unsigned_abs() as usize;
        if width == 0 || height == 0 {
            return Err(BlurError::ZeroBaseSize);
        }
        let stride = depth.row_stride(width)?;
        let layout = ImageLayout {
            width,
            height,
            stride,
            depth,
        };
        _ = layout.buffer_size()?;
        Ok(layout)
    }

    /// Bytes actually holding pixels in a row, without alignment padding.
    #[inline]
    pub fn row_bytes(&self) -> usize {
        self.width * self.depth.bytes_per_pixel()
    }

    #[inline]
    pub fn buffer_size(&self) -> Result<usize, BlurError> {
        self.stride.safe_mul(self.height)
    }

    #[inline]
    pub(crate) fn check_slice(&self, arr: &[u8]) -> Result<(), BlurError> {
        check_slice_size(arr, self.stride, self.row_bytes(), self.height)
    }
}

#[derive(Debug)]
pub enum BufferStore<'a> {
    Borrowed(&'a mut [u8]),
    Owned(Vec<u8>),
}

impl BufferStore<'_> {
    #[allow(clippy::should_implement_trait)]
    pub fn borrow(&self) -> &[u8] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn borrow_mut(&mut self) -> &mut [u8] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }
}

/// Immutable image store
#[derive(Debug, Clone)]
pub struct BlurImage<'a> {
    pub data: Cow<'a, [u8]>,
    pub width: u32,
    /// Negative height marks a top-down image, only magnitude is used
    pub height: i32,
    pub depth: BitDepth,
}

/// Mutable image store
/// If it owns vector it is resized to the source geometry on successful filtering.
#[derive(Debug)]
pub struct BlurImageMut<'a> {
    pub data: BufferStore<'a>,
    pub width: u32,
    /// Negative height marks a top-down image, only magnitude is used
    pub height: i32,
    pub depth: BitDepth,
}

impl Default for BlurImageMut<'_> {
    fn default() -> Self {
        BlurImageMut {
            data: BufferStore::Owned(Vec::new()),
            width: 0,
            height: 0,
            depth: BitDepth::Gray8,
        }
    }
}

impl<'a> BlurImage<'a> {
    /// Allocates zeroed image with aligned rows
    pub fn alloc(width: u32, height: i32, depth: BitDepth) -> Result<Self, BlurError> {
        let layout = ImageLayout::new(width, height, depth)?;
        Ok(Self {
            data: Cow::Owned(try_alloc_zeroed(layout.buffer_size()?)?),
            width,
            height,
            depth,
        })
    }

    /// Borrows existing data, rows are expected to be aligned to 32 bits
    pub fn borrow(arr: &'a [u8], width: u32, height: i32, depth: BitDepth) -> Self {
        Self {
            data: Cow::Borrowed(arr),
            width,
            height,
            depth,
        }
    }

    #[inline]
    pub fn layout(&self) -> Result<ImageLayout, BlurError> {
        ImageLayout::new(self.width, self.height, self.depth)
    }

    /// Checks if layout matches the data and returns it
    #[inline]
    pub fn check_layout(&self) -> Result<ImageLayout, BlurError> {
        let layout = self.layout()?;
        layout.check_slice(self.data.as_ref())?;
        Ok(layout)
    }

    /// Checks if it is matches the size of the other image
    #[inline]
    pub fn size_matches_mut(&self, other: &BlurImageMut<'_>) -> Result<(), BlurError> {
        if self.width == other.width
            && self.height.unsigned_abs() == other.height.unsigned_abs()
            && self.depth == other.depth
        {
            return Ok(());
        }
        Err(BlurError::ImagesMustMatch)
    }

    /// Deep clone as mutable image
    pub fn clone_as_mut<'f>(&self) -> BlurImageMut<'f> {
        BlurImageMut {
            data: BufferStore::Owned(self.data.to_vec()),
            width: self.width,
            height: self.height,
            depth: self.depth,
        }
    }
}

impl<'a> BlurImageMut<'a> {
    /// Allocates zeroed image with aligned rows
    pub fn alloc(width: u32, height: i32, depth: BitDepth) -> Result<Self, BlurError> {
        let layout = ImageLayout::new(width, height, depth)?;
        Ok(Self {
            data: BufferStore::Owned(try_alloc_zeroed(layout.buffer_size()?)?),
            width,
            height,
            depth,
        })
    }

    /// Mutable borrows existing data, rows are expected to be aligned to 32 bits
    pub fn borrow(arr: &'a mut [u8], width: u32, height: i32, depth: BitDepth) -> Self {
        Self {
            data: BufferStore::Borrowed(arr),
            width,
            height,
            depth,
        }
    }

    #[inline]
    pub fn layout(&self) -> Result<ImageLayout, BlurError> {
        ImageLayout::new(self.width, self.height, self.depth)
    }

    /// Validates this image as a destination for `source`.
    ///
    /// Owned storage accepts any source, it is resized later by [BlurImageMut::ensure_layout].
    /// Nothing is mutated here.
    pub fn check_destination(&self, source: &BlurImage<'_>) -> Result<(), BlurError> {
        if matches!(self.data, BufferStore::Owned(_)) {
            return Ok(());
        }
        source.size_matches_mut(self)?;
        self.layout()?.check_slice(self.data.borrow())
    }

    /// Resizes owned storage to `layout`, borrowed storage stays as is.
    pub(crate) fn ensure_layout(
        &mut self,
        layout: &ImageLayout,
        height: i32,
    ) -> Result<(), BlurError> {
        if let BufferStore::Owned(vec) = &mut self.data {
            let size = layout.buffer_size()?;
            if vec.len() < size {
                vec.try_reserve_exact(size - vec.len())
                    .map_err(|_| BlurError::AllocationFailed(size))?;
            }
            vec.resize(size, 0);
            self.width = layout.width as u32;
            self.height = height;
            self.depth = layout.depth;
        }
        Ok(())
    }

    #[inline]
    pub fn to_immutable_ref(&self) -> BlurImage<'_> {
        BlurImage {
            data: Cow::Borrowed(self.data.borrow()),
            width: self.width,
            height: self.height,
            depth: self.depth,
        }
    }
}
