/*
 * // Copyright (c) Radzivon Bartoshyk. All rights reserved.
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

#![no_main]

use arbitrary::Arbitrary;
use gaussblur::{AlphaMode, BitDepth, EdgeMode, GaussianBlurFilter};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    width: u8,
    height: u8,
    flip: bool,
    depth: u8,
    sigma: u8,
    threads: u8,
    edge: u8,
    blur_alpha: bool,
    seed: u32,
}

fuzz_target!(|data: Input| {
    let depth = match data.depth % 3 {
        0 => BitDepth::Gray8,
        1 => BitDepth::Rgb24,
        _ => BitDepth::Rgbx32,
    };
    let edge_mode = EdgeMode::try_from(data.edge as usize % 4).unwrap();
    fuzz_8bit(
        data.width as u32,
        data.height as i32 * if data.flip { -1 } else { 1 },
        depth,
        data.sigma as f64 / 16.,
        data.threads as usize % 9,
        edge_mode,
        data.blur_alpha,
        data.seed,
    );
});

fn fuzz_8bit(
    width: u32,
    height: i32,
    depth: BitDepth,
    sigma: f64,
    threads: usize,
    edge_mode: EdgeMode,
    blur_alpha: bool,
    seed: u32,
) {
    let mut filter = GaussianBlurFilter::<f64>::new();
    if filter.set_sigma(sigma).is_err() {
        assert!(sigma <= 0.);
        assert!(!filter.is_initialized());
        return;
    }
    filter.set_edge_mode(edge_mode);
    if blur_alpha {
        filter.set_alpha_mode(AlphaMode::Blur);
    }

    let stride = depth.row_stride(width as usize).unwrap();
    let mut state = seed;
    let src = (0..stride * height.unsigned_abs() as usize)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        })
        .collect::<Vec<u8>>();

    let mut single = vec![0u8; src.len()];
    let result = filter.filter(&src, &mut single, width, height, depth.bits_per_pixel());
    if width == 0 || height == 0 {
        assert!(result.is_err());
        return;
    }
    result.unwrap();

    filter.set_threads(threads);
    let mut threaded = vec![0u8; src.len()];
    filter
        .filter(&src, &mut threaded, width, height, depth.bits_per_pixel())
        .unwrap();
    assert_eq!(single, threaded);
}
