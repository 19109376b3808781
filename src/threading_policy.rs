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

use std::{num::NonZeroUsize, thread::available_parallelism};

#[repr(C)]
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Default, Hash)]
/// Set threading policy.
pub enum ThreadingPolicy {
    /// Use only one thread, current is preferred.
    #[default]
    Single,
    /// Compute adaptive thread count between 1..available CPUs.
    Adaptive,
    /// Use specified number of threads.
    Fixed(NonZeroUsize),
}

impl ThreadingPolicy {
    /// Builds a policy from a plain thread count, `0` and `1` are single threaded.
    pub fn from_count(count: usize) -> ThreadingPolicy {
        match NonZeroUsize::new(count) {
            Some(fixed) if fixed.get() > 1 => ThreadingPolicy::Fixed(fixed),
            _ => ThreadingPolicy::Single,
        }
    }

    /// Thread count as it was requested, [ThreadingPolicy::Adaptive] resolves to available CPUs.
    pub fn requested_threads(&self) -> usize {
        match self {
            ThreadingPolicy::Single => 1,
            ThreadingPolicy::Adaptive => Self::available_parallelism(2),
            ThreadingPolicy::Fixed(fixed) => fixed.get(),
        }
    }

    /// Returns the number of row workers for an image with `rows` rows.
    ///
    /// Result is always in `1..=rows`, so no worker receives an empty range.
    pub fn worker_count(&self, width: usize, rows: usize) -> usize {
        let requested = match self {
            ThreadingPolicy::Single => 1,
            ThreadingPolicy::Adaptive => (width.saturating_mul(rows) / (256 * 256))
                .clamp(1, Self::available_parallelism(2)),
            ThreadingPolicy::Fixed(fixed) => fixed.get(),
        };
        requested.min(rows).max(1)
    }

    pub fn is_multithreaded(&self) -> bool {
        self.requested_threads() > 1
    }

    // Make always return at least some minimal amount of threads, if multi-threading were requested
    fn available_parallelism(min: usize) -> usize {
        available_parallelism()
            .map(|x| x.get())
            .unwrap_or(1)
            .max(min)
    }
}
