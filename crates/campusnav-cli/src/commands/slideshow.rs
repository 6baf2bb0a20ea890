use crate::cli::SlideshowArgs;
use crate::config_loader::{load_config_with_overrides, open_store, GlobalOptions};
use crate::output::OutputWriter;
use crate::output_types::{SlideOutput, SlideshowOutput};
use crate::progress;
use anyhow::Result;
use campusnav_core::config::CliConfigOverrides;
use campusnav_nav::{
    probe_image, Navigator, ProximityFilter, Slide, SlideDelay, SlideEvent, Slideshow,
};
use campusnav_store::ReferenceTables;
use indicatif::ProgressBar;
use std::time::Duration;
use tokio::time::{self, Instant, MissedTickBehavior};

use super::navigation_error;

/// Scheduler resolution for autoplay
const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub async fn execute(args: SlideshowArgs, options: &GlobalOptions, output: &OutputWriter) -> Result<()> {
    let config = load_config_with_overrides(
        options,
        CliConfigOverrides {
            proximity_threshold: args.threshold,
            slide_delay_secs: args.delay,
            ..options.overrides()
        },
    )?;
    let store = open_store(&config)?;
    let navigator = Navigator::new(&store, ProximityFilter::new(config.proximity_threshold.value));

    let navigation = navigator
        .navigate(&args.start, &args.end)
        .map_err(|e| navigation_error(e, store.buildings()))?;

    if !navigation.is_route() {
        output.warning("No route found between selected buildings.");
    }

    let delay = SlideDelay::from_secs(config.slide_delay_secs.value)?;
    let mut show = Slideshow::from_photos(navigation.photos(), &config.image_dir.value, delay);

    if show.is_empty() {
        if navigation.is_route() {
            output.warning("No photos near this route.");
        }
        if output.is_json() {
            output.result(SlideshowOutput {
                start: args.start,
                end: args.end,
                mode: mode(args.autoplay),
                total: 0,
                slides: Vec::new(),
                stopped: false,
            })?;
        }
        return Ok(());
    }

    let (slides, stopped) = if args.autoplay {
        autoplay(&mut show, output).await
    } else {
        show.seek(args.index);
        let slide = show.current().map(|slide| render(show.index(), slide));
        (slide.into_iter().collect(), false)
    };

    if output.is_json() {
        output.result(SlideshowOutput {
            start: args.start,
            end: args.end,
            mode: mode(args.autoplay),
            total: show.len(),
            slides,
            stopped,
        })?;
    } else if !args.autoplay {
        for slide in &slides {
            print_slide(output, slide);
        }
        output.info(format!("Use --index 0..{} to pick another photo, or --autoplay", show.len() - 1));
    }

    Ok(())
}

/// Drive the slideshow from a timer until it finishes or Ctrl-C stops it
async fn autoplay(show: &mut Slideshow, output: &OutputWriter) -> (Vec<SlideOutput>, bool) {
    let stop = show.stop_handle();
    let signal = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            stop.stop();
        }
    });

    let bar = if output.is_json() {
        progress::hidden_bar()
    } else {
        progress::create_slide_bar(show.len() as u64)
    };

    let mut interval = time::interval(TICK_INTERVAL);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last = Instant::now();
    let mut shown = Vec::new();

    show.play();
    let stopped = loop {
        interval.tick().await;
        let now = Instant::now();
        let elapsed = now - last;
        last = now;

        match show.tick(elapsed) {
            SlideEvent::Show(index) => {
                if let Some(slide) = show.current() {
                    let rendered = render(index, slide);
                    report_to_bar(&bar, &rendered);
                    shown.push(rendered);
                }
                bar.set_position(index as u64 + 1);
            }
            SlideEvent::Idle => {}
            SlideEvent::Finished => break false,
            SlideEvent::Stopped => break true,
        }
    };
    signal.abort();

    if stopped {
        tracing::info!(shown = shown.len(), "Slideshow stopped");
        progress::finish_stopped(&bar, "Slideshow stopped");
    } else {
        progress::finish_success(&bar, "Slideshow finished");
    }

    (shown, stopped)
}

/// Load one slide's image. A failure is reported for this slide only.
fn render(index: usize, slide: &Slide) -> SlideOutput {
    let (width, height, error) = match probe_image(&slide.path) {
        Ok(info) => (Some(info.width), Some(info.height), None),
        Err(e) => (None, None, Some(e.to_string())),
    };

    SlideOutput {
        index,
        caption: slide.caption.clone(),
        photo_id: slide.photo_id.0,
        path: slide.path.display().to_string(),
        width,
        height,
        error,
    }
}

fn report_to_bar(bar: &ProgressBar, slide: &SlideOutput) {
    match (&slide.error, slide.width, slide.height) {
        (None, Some(w), Some(h)) => bar.set_message(format!("{} {} ({}x{})", slide.caption, slide.path, w, h)),
        _ => {
            bar.println(format!("⚠ Could not load: {}", slide.path));
            bar.set_message(format!("{} (missing)", slide.caption));
        }
    }
}

fn print_slide(output: &OutputWriter, slide: &SlideOutput) {
    output.section(&slide.caption);
    output.kv("Photo", slide.photo_id);
    output.kv("File", &slide.path);
    match (&slide.error, slide.width, slide.height) {
        (None, Some(w), Some(h)) => output.kv("Size", format!("{}x{}", w, h)),
        _ => output.warning(format!("Could not load image: {}", slide.path)),
    }
}

fn mode(autoplay: bool) -> &'static str {
    if autoplay {
        "autoplay"
    } else {
        "manual"
    }
}
