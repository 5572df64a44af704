use std::{
    ffi::OsString,
    io::{Read, Write},
    path::PathBuf,
    process::{Child, ChildStdin, Command, Stdio},
    thread::JoinHandle,
};

use crate::{
    encode::sink::{FrameSink, SinkConfig, ensure_dir},
    foundation::{
        color::Rgba8,
        core::FrameIndex,
        error::{StoryError, StoryResult},
        math::mul_div255_u16,
    },
    render::frame::FrameRGBA,
};

/// Options for [`FfmpegSink`] MP4 output.
#[derive(Clone, Debug)]
pub struct FfmpegSinkOpts {
    /// Output MP4 file path.
    pub out_path: PathBuf,
    /// Overwrite the output file if it already exists.
    pub overwrite: bool,
    /// Color translucent pixels are flattened over.
    pub background: Rgba8,
}

impl FfmpegSinkOpts {
    /// Options writing an MP4 to `out_path` over black.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            background: Rgba8::BLACK,
        }
    }
}

/// Sink that spawns the system `ffmpeg` and streams opaque RGBA frames to its stdin.
pub struct FfmpegSink {
    opts: FfmpegSinkOpts,
    session: Option<Session>,
}

struct Session {
    cfg: SinkConfig,
    encoder: Encoder,
    scratch: Vec<u8>,
    last_idx: Option<FrameIndex>,
}

impl FfmpegSink {
    /// Sink streaming into `ffmpeg` once `begin` is called.
    pub fn new(opts: FfmpegSinkOpts) -> Self {
        Self {
            opts,
            session: None,
        }
    }
}

impl FrameSink for FfmpegSink {
    fn begin(&mut self, cfg: SinkConfig) -> StoryResult<()> {
        check_yuv420_size(cfg)?;
        if let Some(parent) = self.opts.out_path.parent() {
            ensure_dir(parent)?;
        }
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(StoryError::validation(format!(
                "output file '{}' already exists",
                self.opts.out_path.display()
            )));
        }
        if !is_ffmpeg_on_path() {
            return Err(StoryError::encode(
                "ffmpeg is required for MP4 encoding, but was not found on PATH",
            ));
        }

        let encoder = Encoder::spawn(encoder_args(&self.opts, cfg))?;
        tracing::debug!(
            out = %self.opts.out_path.display(),
            width = cfg.width,
            height = cfg.height,
            "ffmpeg started"
        );
        self.session = Some(Session {
            cfg,
            encoder,
            scratch: vec![0; cfg.width as usize * cfg.height as usize * 4],
            last_idx: None,
        });
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> StoryResult<()> {
        let s = self
            .session
            .as_mut()
            .ok_or_else(|| StoryError::encode("ffmpeg sink not started"))?;
        if s.last_idx.is_some_and(|last| idx.0 <= last.0) {
            return Err(StoryError::encode(
                "ffmpeg sink received out-of-order frame index",
            ));
        }
        s.last_idx = Some(idx);
        if (frame.width, frame.height) != (s.cfg.width, s.cfg.height) {
            return Err(StoryError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, s.cfg.width, s.cfg.height
            )));
        }

        flatten_over(&mut s.scratch, frame, self.opts.background)?;
        s.encoder.write(&s.scratch)
    }

    fn end(&mut self) -> StoryResult<()> {
        let s = self
            .session
            .take()
            .ok_or_else(|| StoryError::encode("ffmpeg sink not started"))?;
        s.encoder.finish()
    }
}

fn check_yuv420_size(cfg: SinkConfig) -> StoryResult<()> {
    if cfg.width == 0 || cfg.height == 0 {
        return Err(StoryError::validation(
            "ffmpeg sink width/height must be non-zero",
        ));
    }
    if !cfg.width.is_multiple_of(2) || !cfg.height.is_multiple_of(2) {
        return Err(StoryError::validation(
            "ffmpeg sink width/height must be even (required for yuv420p mp4 output)",
        ));
    }
    Ok(())
}

/// Command line for a raw RGBA stdin stream encoded to H.264 yuv420p.
fn encoder_args(opts: &FfmpegSinkOpts, cfg: SinkConfig) -> Vec<OsString> {
    let size = format!("{}x{}", cfg.width, cfg.height);
    // `-r` before `-i` sets the rawvideo input rate; rational rates pass as `num/den`.
    let rate = format!("{}/{}", cfg.fps.num, cfg.fps.den);
    let mut args: Vec<OsString> = [
        if opts.overwrite { "-y" } else { "-n" },
        "-loglevel",
        "error",
        "-f",
        "rawvideo",
        "-pix_fmt",
        "rgba",
        "-s",
        size.as_str(),
        "-r",
        rate.as_str(),
        "-i",
        "pipe:0",
        "-an",
        "-c:v",
        "libx264",
        "-pix_fmt",
        "yuv420p",
        "-movflags",
        "+faststart",
    ]
    .into_iter()
    .map(OsString::from)
    .collect();
    args.push(opts.out_path.clone().into_os_string());
    args
}

/// A running `ffmpeg` child with its stderr collected on a side thread.
struct Encoder {
    child: Child,
    stdin: ChildStdin,
    stderr: JoinHandle<std::io::Result<Vec<u8>>>,
}

impl Encoder {
    fn spawn(args: Vec<OsString>) -> StoryResult<Self> {
        let mut child = Command::new("ffmpeg")
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                StoryError::encode(format!(
                    "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
                ))
            })?;
        let (Some(stdin), Some(mut err)) = (child.stdin.take(), child.stderr.take()) else {
            return Err(StoryError::encode("failed to open ffmpeg pipes"));
        };
        let stderr = std::thread::spawn(move || {
            let mut buf = Vec::new();
            err.read_to_end(&mut buf).map(|_| buf)
        });
        Ok(Self {
            child,
            stdin,
            stderr,
        })
    }

    fn write(&mut self, bytes: &[u8]) -> StoryResult<()> {
        self.stdin
            .write_all(bytes)
            .map_err(|e| StoryError::encode(format!("failed to write frame to ffmpeg stdin: {e}")))
    }

    fn finish(self) -> StoryResult<()> {
        let Self {
            mut child,
            stdin,
            stderr,
        } = self;
        drop(stdin);
        let status = child
            .wait()
            .map_err(|e| StoryError::encode(format!("failed to wait for ffmpeg to finish: {e}")))?;
        let log = stderr
            .join()
            .map_err(|_| StoryError::encode("ffmpeg stderr reader panicked"))?
            .map_err(|e| StoryError::encode(format!("ffmpeg stderr read failed: {e}")))?;
        if status.success() {
            return Ok(());
        }
        Err(StoryError::encode(format!(
            "ffmpeg exited with status {status}: {}",
            String::from_utf8_lossy(&log).trim()
        )))
    }
}

/// Composite `frame` over the opaque `bg`, writing opaque RGBA8 into `dst`.
///
/// Straight-alpha frames are premultiplied per pixel on the way through.
pub(crate) fn flatten_over(dst: &mut [u8], frame: &FrameRGBA, bg: Rgba8) -> StoryResult<()> {
    if dst.len() != frame.data.len() || !dst.len().is_multiple_of(4) {
        return Err(StoryError::validation(
            "flatten expects equal-length rgba8 buffers",
        ));
    }
    let bg = [bg.r, bg.g, bg.b].map(u16::from);
    for (d, s) in dst.chunks_exact_mut(4).zip(frame.data.chunks_exact(4)) {
        let a = u16::from(s[3]);
        let inv = 255 - a;
        for c in 0..3 {
            let src = if frame.premultiplied {
                u16::from(s[c])
            } else {
                mul_div255_u16(u16::from(s[c]), a)
            };
            d[c] = (src + mul_div255_u16(bg[c], inv)).min(255) as u8;
        }
        d[3] = 255;
    }
    Ok(())
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
