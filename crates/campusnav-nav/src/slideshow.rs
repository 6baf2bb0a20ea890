//! Route photo slideshow as a tick-driven state machine.
//!
//! The slideshow never sleeps or spawns anything itself. A scheduler calls
//! [`Slideshow::tick`] with the time elapsed since the previous tick and acts on
//! the returned [`SlideEvent`]. A [`StopHandle`] can be raised from anywhere
//! (another thread, a signal handler) and is honored on the next tick.

use campusnav_core::config::validate_slide_delay;
use campusnav_core::error::Result;
use campusnav_core::models::{Photo, PhotoId};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::images::image_path;

/// Time each slide stays up during autoplay, 1 to 10 seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideDelay(Duration);

impl SlideDelay {
    pub fn from_secs(secs: u64) -> Result<Self> {
        Ok(Self(Duration::from_secs(validate_slide_delay(secs)?)))
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

impl Default for SlideDelay {
    fn default() -> Self {
        Self(Duration::from_secs(3))
    }
}

/// One photo in the slideshow
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub photo_id: PhotoId,
    pub path: PathBuf,
    pub caption: String,
}

/// Shared stop signal, checked on every tick
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Running,
    Paused,
    Stopped,
}

/// What the presentation layer should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideEvent {
    /// Display the slide at this index
    Show(usize),
    /// Keep the current slide
    Idle,
    /// The last slide has had its full delay
    Finished,
    /// Playback was cancelled
    Stopped,
}

#[derive(Debug)]
pub struct Slideshow {
    slides: Vec<Slide>,
    delay: SlideDelay,
    index: usize,
    state: PlaybackState,
    elapsed: Duration,
    shown: bool,
    finished: bool,
    stop: StopHandle,
}

impl Slideshow {
    /// A paused slideshow positioned on the first slide
    pub fn new(slides: Vec<Slide>, delay: SlideDelay) -> Self {
        Self {
            slides,
            delay,
            index: 0,
            state: PlaybackState::Paused,
            elapsed: Duration::ZERO,
            shown: false,
            finished: false,
            stop: StopHandle::new(),
        }
    }

    /// Slides for the selected photos, in the given order
    pub fn from_photos(photos: &[&Photo], image_dir: &Path, delay: SlideDelay) -> Self {
        let total = photos.len();
        let slides = photos
            .iter()
            .enumerate()
            .map(|(i, photo)| Slide {
                photo_id: photo.id,
                path: image_path(image_dir, &photo.file_ref),
                caption: format!("Image {}/{}", i + 1, total),
            })
            .collect();
        Self::new(slides, delay)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn delay(&self) -> SlideDelay {
        self.delay
    }

    pub fn current(&self) -> Option<&Slide> {
        self.slides.get(self.index)
    }

    /// Handle for cancelling playback from outside the tick loop
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Start or resume autoplay. A stopped slideshow stays stopped.
    pub fn play(&mut self) {
        if self.state != PlaybackState::Stopped && !self.stop.is_stopped() {
            self.state = PlaybackState::Running;
        }
    }

    pub fn pause(&mut self) {
        if self.state == PlaybackState::Running {
            self.state = PlaybackState::Paused;
        }
    }

    pub fn stop(&mut self) {
        self.stop.stop();
        self.state = PlaybackState::Stopped;
    }

    /// Advance the clock by `elapsed`
    pub fn tick(&mut self, elapsed: Duration) -> SlideEvent {
        if self.stop.is_stopped() || self.state == PlaybackState::Stopped {
            self.state = PlaybackState::Stopped;
            return SlideEvent::Stopped;
        }

        if self.slides.is_empty() || self.finished {
            return SlideEvent::Finished;
        }

        if self.state == PlaybackState::Paused {
            return SlideEvent::Idle;
        }

        if !self.shown {
            self.shown = true;
            self.elapsed = Duration::ZERO;
            return SlideEvent::Show(self.index);
        }

        self.elapsed += elapsed;
        if self.elapsed < self.delay.as_duration() {
            return SlideEvent::Idle;
        }

        self.elapsed = Duration::ZERO;
        if self.index + 1 < self.slides.len() {
            self.index += 1;
            SlideEvent::Show(self.index)
        } else {
            self.finished = true;
            self.state = PlaybackState::Paused;
            SlideEvent::Finished
        }
    }

    /// Jump to a slide, clamped to the last one. Returns the slide now current.
    pub fn seek(&mut self, index: usize) -> Option<&Slide> {
        if self.slides.is_empty() {
            return None;
        }
        self.index = index.min(self.slides.len() - 1);
        self.elapsed = Duration::ZERO;
        self.shown = true;
        self.finished = false;
        self.current()
    }

    pub fn next(&mut self) -> Option<&Slide> {
        self.seek(self.index.saturating_add(1))
    }

    pub fn previous(&mut self) -> Option<&Slide> {
        self.seek(self.index.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: Duration = Duration::from_secs(1);

    fn slideshow(n: u64, delay_secs: u64) -> Slideshow {
        let photos: Vec<Photo> =
            (1..=n).map(|id| Photo::new(id, 21.5, 39.24, format!("raw/{}.jpg", id))).collect();
        let refs: Vec<&Photo> = photos.iter().collect();
        Slideshow::from_photos(&refs, Path::new("Images/images"), SlideDelay::from_secs(delay_secs).unwrap())
    }

    #[test]
    fn test_slides_from_photos() {
        let show = slideshow(3, 3);
        assert_eq!(show.len(), 3);
        assert_eq!(show.slides()[1].caption, "Image 2/3");
        assert_eq!(show.slides()[1].path, PathBuf::from("Images/images/2.jpg"));
        assert_eq!(show.slides()[2].photo_id, PhotoId(3));
        assert_eq!(show.state(), PlaybackState::Paused);
    }

    #[test]
    fn test_delay_range() {
        assert!(SlideDelay::from_secs(0).is_err());
        assert!(SlideDelay::from_secs(11).is_err());
        assert_eq!(SlideDelay::from_secs(10).unwrap().as_duration(), Duration::from_secs(10));
        assert_eq!(SlideDelay::default().as_duration(), Duration::from_secs(3));
    }

    #[test]
    fn test_autoplay_advances_once_per_delay() {
        let mut show = slideshow(3, 2);
        show.play();

        assert_eq!(show.tick(Duration::ZERO), SlideEvent::Show(0));
        assert_eq!(show.tick(SEC), SlideEvent::Idle);
        assert_eq!(show.tick(SEC), SlideEvent::Show(1));
        assert_eq!(show.tick(SEC), SlideEvent::Idle);
        assert_eq!(show.tick(SEC), SlideEvent::Show(2));
        assert_eq!(show.tick(SEC), SlideEvent::Idle);
        assert_eq!(show.tick(SEC), SlideEvent::Finished);
        assert_eq!(show.tick(SEC), SlideEvent::Finished);
        assert_eq!(show.index(), 2);
    }

    #[test]
    fn test_long_tick_advances_a_single_slide() {
        let mut show = slideshow(3, 1);
        show.play();
        show.tick(Duration::ZERO);

        assert_eq!(show.tick(Duration::from_secs(5)), SlideEvent::Show(1));
    }

    #[test]
    fn test_pause_and_resume() {
        let mut show = slideshow(2, 1);
        show.play();
        assert_eq!(show.tick(Duration::ZERO), SlideEvent::Show(0));

        show.pause();
        assert_eq!(show.tick(Duration::from_secs(5)), SlideEvent::Idle);
        assert_eq!(show.index(), 0);

        show.play();
        assert_eq!(show.tick(SEC), SlideEvent::Show(1));
    }

    #[test]
    fn test_stop_handle_cancels_on_next_tick() {
        let mut show = slideshow(3, 1);
        let handle = show.stop_handle();
        show.play();
        show.tick(Duration::ZERO);

        handle.stop();
        assert_eq!(show.tick(SEC), SlideEvent::Stopped);
        assert_eq!(show.state(), PlaybackState::Stopped);
        assert_eq!(show.index(), 0);

        show.play();
        assert_eq!(show.state(), PlaybackState::Stopped);
        assert_eq!(show.tick(SEC), SlideEvent::Stopped);
    }

    #[test]
    fn test_stop_from_another_thread() {
        let mut show = slideshow(3, 1);
        let handle = show.stop_handle();
        show.play();

        std::thread::spawn(move || handle.stop()).join().unwrap();
        assert_eq!(show.tick(Duration::ZERO), SlideEvent::Stopped);
    }

    #[test]
    fn test_empty_slideshow_finishes_immediately() {
        let mut show = Slideshow::new(Vec::new(), SlideDelay::default());
        show.play();
        assert_eq!(show.tick(Duration::ZERO), SlideEvent::Finished);
        assert!(show.current().is_none());
        assert!(show.seek(0).is_none());
    }

    #[test]
    fn test_manual_navigation_is_clamped() {
        let mut show = slideshow(3, 3);

        assert_eq!(show.seek(10).unwrap().caption, "Image 3/3");
        assert_eq!(show.next().unwrap().caption, "Image 3/3");
        assert_eq!(show.previous().unwrap().caption, "Image 2/3");
        assert_eq!(show.seek(0).unwrap().caption, "Image 1/3");
        assert_eq!(show.previous().unwrap().caption, "Image 1/3");
    }

    #[test]
    fn test_seek_then_autoplay_continues_from_position() {
        let mut show = slideshow(3, 1);
        show.seek(1);
        show.play();

        assert_eq!(show.tick(SEC), SlideEvent::Show(2));
        assert_eq!(show.tick(SEC), SlideEvent::Finished);

        show.seek(0);
        show.play();
        assert_eq!(show.tick(SEC), SlideEvent::Show(1));
    }
}
