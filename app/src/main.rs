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

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use flexi_logger::{Logger, LoggerHandle};
use gaussblur::{gaussian_blur_image, EdgeMode, ThreadingPolicy};
use image::ImageReader;
use log::{error, info};

#[derive(ValueEnum, Copy, Clone, Debug, Default)]
enum EdgeArg {
    #[default]
    Clamp,
    Wrap,
    Reflect,
    Reflect101,
}

impl From<EdgeArg> for EdgeMode {
    fn from(value: EdgeArg) -> Self {
        match value {
            EdgeArg::Clamp => EdgeMode::Clamp,
            EdgeArg::Wrap => EdgeMode::Wrap,
            EdgeArg::Reflect => EdgeMode::Reflect,
            EdgeArg::Reflect101 => EdgeMode::Reflect101,
        }
    }
}

/// Blurs an image with a separable gaussian kernel
#[derive(Parser, Debug)]
#[command(name = "gaussblur")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Image to blur
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Where to save the blurred image, format is taken from the extension
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Standard deviation of the kernel
    #[arg(short, long, default_value_t = 3.0)]
    sigma: f64,

    /// Worker threads, 0 picks a count from the image size
    #[arg(short, long, default_value_t = 0)]
    threads: usize,

    /// How samples outside of the image are read
    #[arg(short, long, value_enum, default_value = "clamp")]
    edge: EdgeArg,

    /// Log level spec, e.g. `info` or `gaussblur=trace`
    #[arg(long, default_value = "info")]
    log: String,
}

fn setup_logging(spec: &str) -> Result<LoggerHandle, String> {
    Logger::try_with_str(spec)
        .and_then(|logger| logger.log_to_stderr().start())
        .map_err(|e| format!("Logger initialization failed with {e}"))
}

fn run(cli: &Cli) -> Result<(), String> {
    let image = ImageReader::open(&cli.input)
        .map_err(|e| format!("Can't open {}: {e}", cli.input.display()))?
        .decode()
        .map_err(|e| format!("Can't decode {}: {e}", cli.input.display()))?;
    info!(
        "Loaded {} {}x{} {:?}",
        cli.input.display(),
        image.width(),
        image.height(),
        image.color()
    );

    let threading_policy = match cli.threads {
        0 => ThreadingPolicy::Adaptive,
        count => ThreadingPolicy::from_count(count),
    };

    let start = Instant::now();
    let blurred = gaussian_blur_image(&image, cli.sigma, cli.edge.into(), threading_policy)
        .ok_or_else(|| format!("Blur failed for sigma {}", cli.sigma))?;
    info!("Gaussian blur sigma {} took {:?}", cli.sigma, start.elapsed());

    blurred
        .save(&cli.output)
        .map_err(|e| format!("Can't save {}: {e}", cli.output.display()))?;
    info!("Saved {}", cli.output.display());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _logger = match setup_logging(&cli.log) {
        Ok(handle) => handle,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
