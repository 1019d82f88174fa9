//! Timed scrolling display of a sequence
//!
//! The animator walks the sequence in order and starts over when it runs out.
//! Each value becomes one line: that many spaces followed by the marker. The
//! pause between lines is `60 / frequency` seconds, so the default frequency of
//! 60 prints one line per second.

use crate::config::{frequency_to_interval, FlowConfig};
use crate::errors::Result;
use crate::sequence::Sequence;
use std::io::Write;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    sequence: Sequence,
    interval: Duration,
    marker: char,
}

impl ScrollAnimator {
    /// Fails with `InvalidFrequency` for a zero or negative rate.
    pub fn new(sequence: Sequence, frequency: i64) -> Result<Self> {
        Ok(Self {
            sequence,
            interval: frequency_to_interval(frequency)?,
            marker: FlowConfig::default().marker,
        })
    }

    pub fn from_config(sequence: Sequence, config: &FlowConfig) -> Result<Self> {
        Ok(Self::new(sequence, config.frequency)?.with_marker(config.marker))
    }

    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Scroll forever. Only an error writing to `out` ends the loop.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        log::info!(
            "Scrolling {} values every {:?}",
            self.sequence.len(),
            self.interval
        );
        if self.sequence.is_empty() {
            // nothing to show; park instead of spinning
            std::future::pending::<()>().await;
        }
        for &value in self.sequence.iter().cycle() {
            self.tick(value, out).await?;
        }
        Ok(())
    }

    /// Scroll through `ticks` values, wrapping around as needed.
    pub async fn run_for<W: Write>(&self, ticks: usize, out: &mut W) -> Result<()> {
        for &value in self.sequence.iter().cycle().take(ticks) {
            self.tick(value, out).await?;
        }
        Ok(())
    }

    async fn tick<W: Write>(&self, value: i64, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.line(value))?;
        out.flush()?;
        tokio::time::sleep(self.interval).await;
        Ok(())
    }

    /// One frame: `value` spaces then the marker. Negative values get no padding.
    pub fn line(&self, value: i64) -> String {
        let padding = usize::try_from(value).unwrap_or(0);
        format!("{:width$}{}", "", self.marker, width = padding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MeanderError;
    use tokio::time::Instant;

    fn animator(values: &[i64], frequency: i64) -> ScrollAnimator {
        ScrollAnimator::new(Sequence::new(values.to_vec()), frequency).unwrap()
    }

    #[test]
    fn test_zero_frequency_rejected() {
        let err = ScrollAnimator::new(Sequence::new(vec![0]), 0).unwrap_err();
        assert!(matches!(err, MeanderError::InvalidFrequency(0)));
        assert!(ScrollAnimator::new(Sequence::new(vec![0]), -60).is_err());
    }

    #[test]
    fn test_interval_is_frames_per_minute() {
        assert_eq!(animator(&[0], 60).interval(), Duration::from_secs(1));
        assert_eq!(animator(&[0], 30).interval(), Duration::from_secs(2));
        assert_eq!(animator(&[0], 600).interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_line_format() {
        let anim = animator(&[0], 60);
        assert_eq!(anim.line(0), "*");
        assert_eq!(anim.line(3), "   *");
        assert_eq!(anim.line(-2), "*");
        assert_eq!(anim.with_marker('o').line(1), " o");
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_for_wraps_around() {
        let anim = animator(&[0, 1, 2], 6000);
        let mut out = Vec::new();
        anim.run_for(7, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["*", " *", "  *", "*", " *", "  *", "*"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_rate_pauses_one_second_per_line() {
        let anim = animator(&[0, 1, 1, 0], 60);
        let mut out = Vec::new();

        let start = Instant::now();
        anim.run_for(3, &mut out).await.unwrap();
        assert_eq!(start.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test]
    async fn test_wall_clock_interval_within_tolerance() {
        let anim = animator(&[0], 60);
        let mut out = Vec::new();

        let start = std::time::Instant::now();
        anim.run_for(1, &mut out).await.unwrap();
        let elapsed = start.elapsed().as_secs_f64();
        assert!((0.9..=1.1).contains(&elapsed), "elapsed {}", elapsed);
        assert_eq!(out, b"*\n");
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_keeps_going_until_cancelled() {
        let anim = animator(&[2, 0], 60);
        let mut out = Vec::new();

        let result =
            tokio::time::timeout(Duration::from_millis(4500), anim.run(&mut out)).await;
        assert!(result.is_err(), "run should never finish on its own");

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "  *\n*\n  *\n*\n  *\n");
    }
}
