// SPDX-License-Identifier: MPL-2.0
//! Async video frame decoder using FFmpeg.
//!
//! This is the engine behind the embedded player. Decoding runs in a
//! blocking Tokio task; the UI talks to it through an unbounded command
//! channel and receives frames, progress reports and lifecycle events
//! through a small bounded channel. The current position is additionally
//! published on a [`TransportClock`] so that the UI can query it
//! synchronously.

use super::clock::TransportClock;
use super::state::ProgressUpdate;
use crate::application::port::SeekTarget;
use crate::domain::FrameSource;
use crate::error::{Error, PlayerError, Result};
use crate::media::video::{init_ffmpeg, MediaSource};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// FFmpeg's `AV_TIME_BASE`: container timestamps are in microseconds.
const AV_TIME_BASE: f64 = 1_000_000.0;

/// Sleep while paused, to avoid busy-waiting on the command channel.
const IDLE_POLL: Duration = Duration::from_millis(10);

/// Frame duration assumed when the stream reports no average frame rate.
const FALLBACK_FRAME_SECS: f64 = 1.0 / 30.0;

/// Represents a decoded video frame ready for display.
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    /// RGBA pixel data (width × height × 4 bytes).
    pub rgba_data: Arc<Vec<u8>>,
    pub width: u32,
    pub height: u32,
    /// Presentation timestamp in seconds.
    pub pts_secs: f64,
}

impl DecodedFrame {
    pub fn size_bytes(&self) -> usize {
        self.rgba_data.len()
    }

    /// Shares the pixels as a capture source without copying them.
    #[must_use]
    pub fn source(&self) -> FrameSource {
        FrameSource::new(Arc::clone(&self.rgba_data), self.width, self.height)
    }
}

/// Commands sent to the decoder task.
#[derive(Debug, Clone, PartialEq)]
pub enum DecoderCommand {
    Play,
    Pause,
    /// Seek; clamped to `[0, duration]` by the decoder.
    Seek(SeekTarget),
    /// Change the presentation rate (1.0 = normal speed).
    SetRate(f64),
    /// Stop decoding and clean up resources.
    Stop,
}

/// Events sent from the decoder to the UI.
#[derive(Debug, Clone)]
pub enum DecoderEvent {
    /// The source is open and its duration is known.
    Ready {
        duration_secs: f64,
        width: u32,
        height: u32,
    },
    FrameReady(DecodedFrame),
    /// Periodic progress report, also sent once after every seek.
    Progress(ProgressUpdate),
    EndOfStream,
    Error(String),
}

/// Async video decoder that runs in a Tokio task.
pub struct AsyncDecoder {
    command_tx: mpsc::UnboundedSender<DecoderCommand>,
    /// Bounded so that frames never pile up behind a slow UI.
    event_rx: mpsc::Receiver<DecoderEvent>,
    clock: TransportClock,
}

impl AsyncDecoder {
    /// Opens `source` and spawns the decoding task.
    ///
    /// Missing local files are reported here; every other failure (network,
    /// codec, corrupt container) arrives later as [`DecoderEvent::Error`].
    pub fn new(source: &MediaSource, progress_interval: Duration) -> Result<Self> {
        source.validate()?;

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel(4);
        let clock = TransportClock::new();

        let task_source = source.clone();
        let task_clock = clock.clone();
        // FFmpeg contexts are not Send, so everything lives on one blocking thread.
        tokio::task::spawn_blocking(move || {
            let error_tx = event_tx.clone();
            let result = Self::decoder_loop_blocking(
                &task_source,
                command_rx,
                event_tx,
                &task_clock,
                progress_interval,
            );
            task_clock.reset();
            if let Err(e) = result {
                log::error!("Decoder for {} failed: {}", task_source, e);
                let _ = error_tx.blocking_send(DecoderEvent::Error(e.to_string()));
            }
        });

        Ok(Self {
            command_tx,
            event_rx,
            clock,
        })
    }

    /// Sends a command to the decoder task.
    pub fn send_command(&self, command: DecoderCommand) -> Result<()> {
        self.command_tx
            .send(command)
            .map_err(|_| Error::Player(PlayerError::NotRunning))
    }

    /// Command sender that can outlive a borrow of the decoder.
    #[must_use]
    pub fn command_sender(&self) -> mpsc::UnboundedSender<DecoderCommand> {
        self.command_tx.clone()
    }

    #[must_use]
    pub fn clock(&self) -> TransportClock {
        self.clock.clone()
    }

    /// Receives the next event; `None` once the decoder task has terminated.
    pub async fn recv_event(&mut self) -> Option<DecoderEvent> {
        self.event_rx.recv().await
    }

    fn decoder_loop_blocking(
        source: &MediaSource,
        mut command_rx: mpsc::UnboundedReceiver<DecoderCommand>,
        event_tx: mpsc::Sender<DecoderEvent>,
        clock: &TransportClock,
        progress_interval: Duration,
    ) -> Result<()> {
        init_ffmpeg()?;

        let mut ictx = ffmpeg_next::format::input(&source.as_input_path())
            .map_err(|e| player_error(format!("Failed to open {}: {}", source, e)))?;

        let input = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or(Error::Player(PlayerError::NoVideoStream))?;
        let video_stream_index = input.index();

        let context_decoder =
            ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
                .map_err(|e| player_error(format!("Failed to create codec context: {}", e)))?;
        let mut decoder = context_decoder
            .decoder()
            .video()
            .map_err(|e| player_error(format!("Failed to create video decoder: {}", e)))?;

        let width = decoder.width();
        let height = decoder.height();
        if width == 0 || height == 0 {
            return Err(player_error(format!(
                "Invalid video dimensions {}x{}",
                width, height
            )));
        }

        let mut scaler = ffmpeg_next::software::scaling::Context::get(
            decoder.format(),
            width,
            height,
            ffmpeg_next::format::Pixel::RGBA,
            width,
            height,
            ffmpeg_next::software::scaling::Flags::BILINEAR,
        )
        .map_err(|e| player_error(format!("Failed to create scaler: {}", e)))?;

        let time_base = input.time_base();
        let time_base_f64 = f64::from(time_base.numerator()) / f64::from(time_base.denominator());
        let duration_secs = media_duration(ictx.duration(), input.duration(), time_base_f64);
        let frame_rate = input.avg_frame_rate();
        let frame_secs = frame_duration(frame_rate.numerator(), frame_rate.denominator());

        clock.mark_ready(duration_secs);
        log::info!(
            "Opened {} ({}x{}, {:.1}s)",
            source,
            width,
            height,
            duration_secs
        );
        if event_tx
            .blocking_send(DecoderEvent::Ready {
                duration_secs,
                width,
                height,
            })
            .is_err()
        {
            return Ok(());
        }

        let mut pacing = Pacing::default();
        let mut is_playing = false;
        let mut rate = 1.0_f64;
        let mut current_pts_secs = 0.0_f64;
        let mut loaded_secs = 0.0_f64;
        // Show the first frame right away, and the landing frame after a paused seek.
        let mut decode_single_frame = true;
        let mut progress_due = false;
        let mut last_progress = Instant::now();
        let mut ended = false;
        // Frames decoded from the keyframe up to this position are dropped.
        let mut seek_target: Option<f64> = None;

        loop {
            let mut pending_seek = None;
            match command_rx.try_recv() {
                Ok(DecoderCommand::Play) => {
                    if !is_playing {
                        log::debug!("Decoder play at {:.2}s", current_pts_secs);
                    }
                    pending_seek = restart_position(ended, current_pts_secs, duration_secs);
                    is_playing = true;
                    pacing.reset();
                    last_progress = Instant::now();
                }
                Ok(DecoderCommand::Pause) => {
                    is_playing = false;
                    pacing.reset();
                }
                Ok(DecoderCommand::SetRate(new_rate)) => {
                    if new_rate.is_finite() && new_rate > 0.0 {
                        rate = new_rate;
                        pacing.reset();
                    }
                }
                Ok(DecoderCommand::Seek(target)) => {
                    pending_seek = Some(resolve_seek(target, duration_secs));
                }
                Ok(DecoderCommand::Stop) | Err(mpsc::error::TryRecvError::Disconnected) => {
                    break;
                }
                Err(mpsc::error::TryRecvError::Empty) => {}
            }

            if let Some(target_secs) = pending_seek {
                match seek_input(&mut ictx, &mut decoder, target_secs) {
                    Ok(()) => {
                        current_pts_secs = target_secs;
                        clock.set_position(target_secs);
                        pacing.reset();
                        progress_due = true;
                        ended = false;
                        seek_target = Some(target_secs);
                        if !is_playing {
                            decode_single_frame = true;
                        }
                    }
                    Err(e) => {
                        let _ = event_tx
                            .blocking_send(DecoderEvent::Error(format!("Seek failed: {}", e)));
                    }
                }
            }

            if !is_playing && !decode_single_frame {
                std::thread::sleep(IDLE_POLL);
                continue;
            }

            let mut frame_decoded = false;
            for (stream, packet) in ictx.packets() {
                if let Some(pts) = packet.pts() {
                    let stream_tb = stream.time_base();
                    let secs = pts as f64 * f64::from(stream_tb.numerator())
                        / f64::from(stream_tb.denominator());
                    loaded_secs = loaded_secs.max(secs);
                }

                if stream.index() != video_stream_index {
                    continue;
                }

                if let Err(e) = decoder.send_packet(&packet) {
                    let _ = event_tx
                        .blocking_send(DecoderEvent::Error(format!("Packet send failed: {}", e)));
                    continue;
                }

                let mut decoded_frame = ffmpeg_next::frame::Video::empty();
                if decoder.receive_frame(&mut decoded_frame).is_ok() {
                    let frame_pts = decoded_frame
                        .timestamp()
                        .map(|pts| pts as f64 * time_base_f64);
                    if let (Some(pts_secs), Some(target_secs)) = (frame_pts, seek_target) {
                        if precedes_seek_target(pts_secs, target_secs, frame_secs) {
                            continue;
                        }
                    }
                    seek_target = None;

                    let mut rgb_frame = ffmpeg_next::frame::Video::empty();
                    if let Err(e) = scaler.run(&decoded_frame, &mut rgb_frame) {
                        let _ = event_tx
                            .blocking_send(DecoderEvent::Error(format!("Scaling failed: {}", e)));
                        continue;
                    }

                    let rgba_data = Self::extract_rgba_data(&rgb_frame);
                    let pts_secs = frame_pts.unwrap_or(current_pts_secs);

                    if is_playing {
                        pacing.wait_for(pts_secs, rate);
                    }

                    current_pts_secs = pts_secs;
                    clock.set_position(pts_secs);

                    let decoded = DecodedFrame {
                        rgba_data: Arc::new(rgba_data),
                        width,
                        height,
                        pts_secs,
                    };
                    if event_tx
                        .blocking_send(DecoderEvent::FrameReady(decoded))
                        .is_err()
                    {
                        return Ok(());
                    }

                    if progress_due || (is_playing && last_progress.elapsed() >= progress_interval)
                    {
                        let update = progress_update(pts_secs, loaded_secs, duration_secs);
                        if event_tx
                            .blocking_send(DecoderEvent::Progress(update))
                            .is_err()
                        {
                            return Ok(());
                        }
                        last_progress = Instant::now();
                        progress_due = false;
                    }

                    frame_decoded = true;
                    decode_single_frame = false;
                    break;
                }
            }

            if !frame_decoded {
                log::info!("End of stream for {}", source);
                clock.set_position(duration_secs);
                let update = progress_update(duration_secs, duration_secs, duration_secs);
                let _ = event_tx.blocking_send(DecoderEvent::Progress(update));
                let _ = event_tx.blocking_send(DecoderEvent::EndOfStream);
                is_playing = false;
                pacing.reset();
                decode_single_frame = false;
                progress_due = false;
                ended = true;
                seek_target = None;
            }
        }

        Ok(())
    }

    /// Extracts RGBA data from a decoded frame, handling stride correctly.
    fn extract_rgba_data(frame: &ffmpeg_next::frame::Video) -> Vec<u8> {
        let width = frame.width();
        let height = frame.height();
        let data = frame.data(0);
        let stride = frame.stride(0);

        let mut rgba_bytes = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            let row_start = (y * stride as u32) as usize;
            let row_end = row_start + (width * 4) as usize;
            rgba_bytes.extend_from_slice(&data[row_start..row_end]);
        }

        rgba_bytes
    }
}

/// Wall-clock anchor for presenting frames at `pts / rate`.
#[derive(Debug, Default)]
struct Pacing {
    anchor: Option<(Instant, f64)>,
}

impl Pacing {
    fn reset(&mut self) {
        self.anchor = None;
    }

    /// Blocks until the frame at `pts_secs` is due. The first frame after a
    /// reset becomes the new anchor and is shown immediately.
    fn wait_for(&mut self, pts_secs: f64, rate: f64) {
        let (start, first_pts) = *self.anchor.get_or_insert((Instant::now(), pts_secs));
        let delay = (pts_secs - first_pts) / rate;
        if delay <= 0.0 || !delay.is_finite() {
            return;
        }
        let target = start + Duration::from_secs_f64(delay);
        let now = Instant::now();
        if target > now {
            std::thread::sleep(target - now);
        }
    }
}

/// Seeks to the keyframe at or before `target_secs` and drops buffered frames.
fn seek_input(
    ictx: &mut ffmpeg_next::format::context::Input,
    decoder: &mut ffmpeg_next::decoder::Video,
    target_secs: f64,
) -> std::result::Result<(), ffmpeg_next::Error> {
    // AV_TIME_BASE units; RangeTo lets FFmpeg land on the previous keyframe.
    let timestamp = (target_secs * AV_TIME_BASE) as i64;
    ictx.seek(timestamp, ..timestamp)?;
    decoder.flush();
    Ok(())
}

/// Seconds per frame from a stream's average frame rate.
fn frame_duration(numerator: i32, denominator: i32) -> f64 {
    if numerator > 0 && denominator > 0 {
        f64::from(denominator) / f64::from(numerator)
    } else {
        FALLBACK_FRAME_SECS
    }
}

/// Whether a frame decoded on the way from the keyframe ends before the
/// seek target. The frame that covers the target is kept.
fn precedes_seek_target(pts_secs: f64, target_secs: f64, frame_secs: f64) -> bool {
    pts_secs + frame_secs / 2.0 < target_secs
}

/// Where a play command rewinds to before decoding, if anywhere.
fn restart_position(ended: bool, position_secs: f64, duration_secs: f64) -> Option<f64> {
    let at_end = duration_secs > 0.0 && position_secs >= duration_secs;
    (ended || at_end).then_some(0.0)
}

fn player_error(msg: String) -> Error {
    Error::Player(PlayerError::from_message(&msg))
}

/// Container duration, falling back to the video stream's own duration.
fn media_duration(container_us: i64, stream_duration: i64, stream_time_base: f64) -> f64 {
    if container_us > 0 {
        container_us as f64 / AV_TIME_BASE
    } else if stream_duration > 0 {
        stream_duration as f64 * stream_time_base
    } else {
        0.0
    }
}

/// Resolves a seek target against the media duration.
///
/// With an unknown duration only the lower bound is enforced.
fn resolve_seek(target: SeekTarget, duration_secs: f64) -> f64 {
    if duration_secs > 0.0 {
        return target.resolve(duration_secs);
    }
    match target {
        SeekTarget::Seconds(secs) if secs.is_finite() => secs.max(0.0),
        _ => 0.0,
    }
}

fn progress_update(played_secs: f64, loaded_secs: f64, duration_secs: f64) -> ProgressUpdate {
    let fraction = |secs: f64| {
        if duration_secs > 0.0 {
            (secs / duration_secs).clamp(0.0, 1.0)
        } else {
            0.0
        }
    };
    let loaded_secs = loaded_secs.max(played_secs);
    ProgressUpdate {
        played: fraction(played_secs),
        loaded: fraction(loaded_secs),
        played_seconds: played_secs,
        loaded_seconds: loaded_secs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[tokio::test]
    async fn decoder_fails_for_nonexistent_file() {
        let source = MediaSource::parse("/nonexistent/video.mp4");
        let result = AsyncDecoder::new(&source, Duration::from_secs(1));
        assert!(matches!(
            result,
            Err(Error::Player(PlayerError::SourceUnavailable(_)))
        ));
    }

    #[tokio::test]
    async fn corrupt_file_reports_error_event() {
        let temp_dir = tempfile::tempdir().unwrap();
        let video_path = temp_dir.path().join("test.mp4");
        std::fs::write(&video_path, b"fake video data").unwrap();

        let mut decoder =
            AsyncDecoder::new(&MediaSource::File(video_path), Duration::from_secs(1)).unwrap();

        let event = tokio::time::timeout(Duration::from_secs(5), decoder.recv_event())
            .await
            .expect("timeout waiting for decoder event");
        assert!(matches!(event, Some(DecoderEvent::Error(_))));
        assert!(decoder.clock().current_time().is_none());
    }

    #[tokio::test]
    async fn commands_fail_once_task_has_exited() {
        let temp_dir = tempfile::tempdir().unwrap();
        let video_path = temp_dir.path().join("test.mp4");
        std::fs::write(&video_path, b"fake video data").unwrap();

        let mut decoder =
            AsyncDecoder::new(&MediaSource::File(video_path), Duration::from_secs(1)).unwrap();
        let _ = tokio::time::timeout(Duration::from_secs(5), decoder.recv_event()).await;

        assert!(matches!(
            decoder.send_command(DecoderCommand::Play),
            Err(Error::Player(PlayerError::NotRunning))
        ));
    }

    #[test]
    fn decoded_frame_shares_pixels_with_source() {
        let frame = DecodedFrame {
            rgba_data: Arc::new(vec![0u8; 4 * 2 * 4]),
            width: 4,
            height: 2,
            pts_secs: 1.0,
        };
        let source = frame.source();
        assert_eq!(frame.size_bytes(), 32);
        assert!(Arc::ptr_eq(&frame.rgba_data, &source.rgba_data));
        assert!(source.is_consistent());
    }

    #[test]
    fn media_duration_prefers_container_value() {
        assert_abs_diff_eq!(media_duration(90_000_000, 0, 0.0), 90.0);
        assert_abs_diff_eq!(media_duration(0, 2_700, 1.0 / 30.0), 90.0);
        assert_abs_diff_eq!(media_duration(-1, -1, 1.0), 0.0);
    }

    #[test]
    fn resolve_seek_clamps_to_known_duration() {
        assert_abs_diff_eq!(resolve_seek(SeekTarget::Seconds(-4.0), 60.0), 0.0);
        assert_abs_diff_eq!(resolve_seek(SeekTarget::Seconds(90.0), 60.0), 60.0);
        assert_abs_diff_eq!(resolve_seek(SeekTarget::Fraction(0.25), 60.0), 15.0);
    }

    #[test]
    fn resolve_seek_with_unknown_duration() {
        assert_abs_diff_eq!(resolve_seek(SeekTarget::Seconds(12.0), 0.0), 12.0);
        assert_abs_diff_eq!(resolve_seek(SeekTarget::Fraction(0.5), 0.0), 0.0);
    }

    #[test]
    fn progress_update_reports_fractions() {
        let update = progress_update(30.0, 45.0, 120.0);
        assert_abs_diff_eq!(update.played, 0.25);
        assert_abs_diff_eq!(update.loaded, 0.375);
        assert_abs_diff_eq!(update.played_seconds, 30.0);

        let update = progress_update(30.0, 10.0, 0.0);
        assert_abs_diff_eq!(update.played, 0.0);
        assert_abs_diff_eq!(update.loaded_seconds, 30.0);
    }

    #[test]
    fn frames_before_seek_target_are_skipped() {
        let frame = frame_duration(25, 1);
        assert_abs_diff_eq!(frame, 0.04);
        // Keyframe at 8s, target 10s.
        assert!(precedes_seek_target(8.0, 10.0, frame));
        assert!(precedes_seek_target(9.96, 10.0, frame));
        assert!(!precedes_seek_target(9.99, 10.0, frame));
        assert!(!precedes_seek_target(10.0, 10.0, frame));
        assert!(!precedes_seek_target(10.5, 10.0, frame));
    }

    #[test]
    fn frame_duration_falls_back_without_rate() {
        assert_abs_diff_eq!(frame_duration(0, 1), FALLBACK_FRAME_SECS);
        assert_abs_diff_eq!(frame_duration(30_000, 1_001), 1_001.0 / 30_000.0);
    }

    #[test]
    fn play_after_end_restarts_from_zero() {
        assert_eq!(restart_position(true, 60.0, 60.0), Some(0.0));
        assert_eq!(restart_position(true, 12.0, 0.0), Some(0.0));
        assert_eq!(restart_position(false, 60.0, 60.0), Some(0.0));
        assert_eq!(restart_position(false, 30.0, 60.0), None);
        assert_eq!(restart_position(false, 30.0, 0.0), None);
    }

    #[test]
    fn pacing_scales_delay_by_rate() {
        let mut pacing = Pacing::default();
        pacing.wait_for(10.0, 2.0);
        let start = Instant::now();
        pacing.wait_for(10.1, 2.0);
        let waited = start.elapsed();
        assert!(waited >= Duration::from_millis(40));
        assert!(waited <= Duration::from_millis(200));
    }
}
