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

use std::error::Error;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
/// Shows size mismatching
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

/// Coarse classification of [BlurError], matches how a caller usually reacts to it.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// Arguments can never succeed, fix the call site.
    InvalidArgument,
    /// Filter was asked to run before a sigma was set.
    UninitializedKernel,
    /// Memory could not be obtained, or the geometry does not fit in a pointer.
    ResourceExhaustion,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BlurError {
    ZeroBaseSize,
    MinimumSliceSizeMismatch(MismatchedSize),
    UnsupportedBitDepth(u32),
    ImagesMustMatch,
    NegativeOrZeroSigma,
    UninitializedKernel,
    ExceedingPointerSize,
    AllocationFailed(usize),
    InvalidArguments,
}

impl BlurError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlurError::ZeroBaseSize
            | BlurError::MinimumSliceSizeMismatch(_)
            | BlurError::UnsupportedBitDepth(_)
            | BlurError::ImagesMustMatch
            | BlurError::NegativeOrZeroSigma
            | BlurError::InvalidArguments => ErrorKind::InvalidArgument,
            BlurError::UninitializedKernel => ErrorKind::UninitializedKernel,
            BlurError::ExceedingPointerSize | BlurError::AllocationFailed(_) => {
                ErrorKind::ResourceExhaustion
            }
        }
    }
}

impl Error for BlurError {}

impl std::fmt::Display for BlurError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            BlurError::ZeroBaseSize => f.write_str("Image size must not be zero"),
            BlurError::MinimumSliceSizeMismatch(size) => f.write_fmt(format_args!(
                "Minimum image slice size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            BlurError::UnsupportedBitDepth(bits) => f.write_fmt(format_args!(
                "Unsupported bit depth {bits}, only 8, 24 and 32 bits per pixel are accepted"
            )),
            BlurError::ImagesMustMatch => {
                f.write_str("Source and destination images must match in their dimensions")
            }
            BlurError::NegativeOrZeroSigma => {
                f.write_str("Negative, zero or non finite sigma is not supported")
            }
            BlurError::UninitializedKernel => {
                f.write_str("Gaussian kernel is not initialized, set sigma first")
            }
            BlurError::ExceedingPointerSize => {
                f.write_str("Image bounds and blurring kernel/radius exceeds pointer capacity")
            }
            BlurError::AllocationFailed(size) => {
                f.write_fmt(format_args!("Failed to allocate {size} bytes"))
            }
            BlurError::InvalidArguments => f.write_str("Invalid arguments"),
        }
    }
}

/// Checks that `arr` holds every pixel of an image with given row `stride`.
///
/// The final row is allowed to omit its alignment padding.
pub(crate) fn check_slice_size<T>(
    arr: &[T],
    stride: usize,
    row_bytes: usize,
    height: usize,
) -> Result<(), BlurError> {
    if row_bytes == 0 || height == 0 {
        return Err(BlurError::ZeroBaseSize);
    }
    if arr.len() < stride * (height - 1) + row_bytes {
        return Err(BlurError::MinimumSliceSizeMismatch(MismatchedSize {
            expected: stride * height,
            received: arr.len(),
        }));
    }
    Ok(())
}

/// Allocates a zeroed buffer, reporting failure instead of aborting.
pub(crate) fn try_alloc_zeroed(size: usize) -> Result<Vec<u8>, BlurError> {
    let mut buffer: Vec<u8> = Vec::new();
    buffer
        .try_reserve_exact(size)
        .map_err(|_| BlurError::AllocationFailed(size))?;
    buffer.resize(size, 0);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_slice_size_allows_unpadded_last_row() {
        let arr = vec![0u8; 8 * 2 + 6];
        assert!(check_slice_size(&arr, 8, 6, 3).is_ok());
        let short = vec![0u8; 8 * 2 + 5];
        assert_eq!(
            check_slice_size(&short, 8, 6, 3),
            Err(BlurError::MinimumSliceSizeMismatch(MismatchedSize {
                expected: 24,
                received: 21,
            }))
        );
    }

    #[test]
    fn test_check_slice_size_empty() {
        let arr: Vec<u8> = Vec::new();
        assert_eq!(
            check_slice_size(&arr, 4, 3, 0),
            Err(BlurError::ZeroBaseSize)
        );
        assert!(matches!(
            check_slice_size(&arr, 4, 3, 1),
            Err(BlurError::MinimumSliceSizeMismatch(_))
        ));
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            BlurError::UnsupportedBitDepth(16).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            BlurError::UninitializedKernel.kind(),
            ErrorKind::UninitializedKernel
        );
        assert_eq!(
            BlurError::AllocationFailed(12).kind(),
            ErrorKind::ResourceExhaustion
        );
    }

    #[test]
    fn test_try_alloc_zeroed() {
        let buffer = try_alloc_zeroed(33).unwrap();
        assert_eq!(buffer.len(), 33);
        assert!(buffer.iter().all(|&x| x == 0));
        assert_eq!(
            try_alloc_zeroed(usize::MAX),
            Err(BlurError::AllocationFailed(usize::MAX))
        );
    }
}
