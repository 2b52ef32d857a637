use daybreak_animation::AnimationScheduler;
use daybreak_theme::{ThemePreset, ThemeSink};
use daybreak_toggle::{derive_params, Channel, Layer, Property, ThemeToggle, ToggleConfig, ToggleGeometry};

/// Records every call the toggle makes to the root marker
#[derive(Debug, Default)]
struct RecordingSink {
    calls: Vec<bool>,
    marker: bool,
}

impl ThemeSink for RecordingSink {
    fn apply(&mut self, is_dark: bool) {
        self.calls.push(is_dark);
        self.marker = is_dark;
    }
}

type Toggle = ThemeToggle<RecordingSink, AnimationScheduler<Channel>>;

const FRAME: f32 = 1.0 / 60.0;

fn mounted() -> Toggle {
    ThemeToggle::new(RecordingSink::default())
}

fn run_frames(toggle: &mut Toggle, frames: usize) {
    for _ in 0..frames {
        toggle.tick(FRAME);
    }
}

fn value(toggle: &Toggle, layer: Layer, property: Property) -> f32 {
    toggle
        .value(Channel::new(layer, property))
        .expect("channel is placed at mount")
}

fn snapshot(toggle: &Toggle) -> Vec<(Channel, u32)> {
    Channel::all()
        .map(|c| (c, toggle.value(c).unwrap().to_bits()))
        .collect()
}

#[test]
fn parity_of_toggle_count_decides_mode() {
    let mut toggle = mounted();
    for n in 1..=10 {
        toggle.toggle();
        assert_eq!(toggle.is_dark(), n % 2 == 1, "after {n} toggles");
    }
}

#[test]
fn derive_params_is_deterministic() {
    let geometry = ToggleGeometry::default();
    for is_dark in [false, true] {
        assert_eq!(derive_params(is_dark, &geometry), derive_params(is_dark, &geometry));
    }
}

#[test]
fn mount_shows_light_mode_without_animating() {
    let toggle = mounted();

    assert!(!toggle.is_dark());
    assert!(!toggle.is_animating());
    assert_eq!(value(&toggle, Layer::Thumb, Property::X), 0.0);
    assert_eq!(value(&toggle, Layer::Track, Property::X), -126.0);
    assert_eq!(value(&toggle, Layer::SunIcon, Property::Opacity), 1.0);
    assert_eq!(value(&toggle, Layer::MoonIcon, Property::Opacity), 0.0);
    assert!(!toggle.sink().marker);
}

#[test]
fn toggle_to_dark_animates_every_layer() {
    let mut toggle = mounted();
    toggle.toggle();

    assert!(toggle.is_dark());
    assert_eq!(toggle.params().thumb_x, 80.0);
    assert!(toggle.sink().marker);

    run_frames(&mut toggle, 12);
    let sun = value(&toggle, Layer::SunIcon, Property::Opacity);
    let moon = value(&toggle, Layer::MoonIcon, Property::Opacity);
    assert!(sun < 1.0 && sun > 0.0, "sun should be fading out, got {sun}");
    assert!(moon > 0.0 && moon < 1.0, "moon should be fading in, got {moon}");
    let thumb = value(&toggle, Layer::Thumb, Property::X);
    assert!(thumb > 0.0 && thumb < 80.0);

    run_frames(&mut toggle, 600);
    assert!(!toggle.is_animating());
    assert_eq!(value(&toggle, Layer::Thumb, Property::X), 80.0);
    assert_eq!(value(&toggle, Layer::Track, Property::X), -46.0);
    assert_eq!(value(&toggle, Layer::SunIcon, Property::Rotate), -180.0);
    assert_eq!(value(&toggle, Layer::HintSun, Property::Opacity), 0.4);
    assert_eq!(value(&toggle, Layer::HintMoon, Property::Scale), 0.5);
}

#[test]
fn thumb_spring_overshoots_its_target() {
    let mut toggle = mounted();
    toggle.toggle();

    let mut peak = f32::MIN;
    for _ in 0..240 {
        toggle.tick(FRAME);
        peak = peak.max(value(&toggle, Layer::Thumb, Property::X));
    }
    assert!(peak > 80.5, "expected overshoot past 80, peak was {peak}");
}

#[test]
fn double_toggle_restores_mount_state() {
    let mut toggle = mounted();
    let at_mount = snapshot(&toggle);
    let params_at_mount = toggle.params();

    toggle.toggle();
    run_frames(&mut toggle, 30);
    toggle.toggle();

    assert!(!toggle.is_dark());
    assert!(!toggle.sink().marker);
    assert_eq!(toggle.params(), params_at_mount);

    run_frames(&mut toggle, 600);
    assert!(!toggle.is_animating());
    assert_eq!(snapshot(&toggle), at_mount);
}

#[test]
fn sink_hears_each_transition_once() {
    let mut toggle = mounted();
    toggle.toggle();
    toggle.toggle();
    toggle.toggle();

    assert_eq!(toggle.sink().calls, vec![false, true, false, true]);
}

#[test]
fn hover_runs_shimmer_without_touching_mode() {
    let mut toggle = mounted();
    toggle.hover_start();

    run_frames(&mut toggle, 30);
    assert!(value(&toggle, Layer::Shimmer, Property::Opacity) > 0.0);
    let early_x = value(&toggle, Layer::Shimmer, Property::X);
    assert!(early_x > -100.0);

    // One full sweep out and back keeps the channel moving
    run_frames(&mut toggle, 120);
    assert!(toggle.animator().is_channel_moving(Channel::new(Layer::Shimmer, Property::X)));
    assert!(!toggle.is_dark());
    assert_eq!(toggle.sink().calls, vec![false]);

    toggle.hover_end();
    run_frames(&mut toggle, 60);
    assert_eq!(value(&toggle, Layer::Shimmer, Property::Opacity), 0.0);
    assert_eq!(value(&toggle, Layer::Shimmer, Property::X), -100.0);
    assert!(!toggle.is_dark());
}

#[test]
fn toggling_leaves_shimmer_alone() {
    let mut toggle = mounted();
    toggle.hover_start();
    run_frames(&mut toggle, 10);
    let before = value(&toggle, Layer::Shimmer, Property::Opacity);

    toggle.toggle();
    toggle.toggle();
    assert!(toggle.is_hovered());
    assert_eq!(value(&toggle, Layer::Shimmer, Property::Opacity), before);
}

#[test]
fn stalled_or_broken_frames_do_not_corrupt_motion() {
    let mut toggle = mounted();
    toggle.toggle();
    run_frames(&mut toggle, 3);

    toggle.tick(f32::NAN);
    toggle.tick(f32::INFINITY);
    toggle.tick(-FRAME);
    assert!(value(&toggle, Layer::Thumb, Property::X).is_finite());

    run_frames(&mut toggle, 600);
    assert!(!toggle.is_animating());
    assert_eq!(value(&toggle, Layer::Thumb, Property::X), 80.0);
}

#[test]
fn long_frame_while_hovered_keeps_shimmer_in_range() {
    let mut toggle = mounted();
    toggle.hover_start();
    toggle.tick(1e9);

    let x = value(&toggle, Layer::Shimmer, Property::X);
    assert!((-100.0..=160.0).contains(&x), "shimmer x escaped its sweep: {x}");
    assert_eq!(value(&toggle, Layer::Shimmer, Property::Opacity), 1.0);
    assert!(toggle.is_animating());
}

#[test]
fn unmount_while_dark_clears_marker() {
    let mut toggle = mounted();
    toggle.toggle();
    toggle.unmount();

    assert!(!toggle.sink().marker);
    assert_eq!(toggle.sink().calls, vec![false, true, false]);
}

#[test]
fn dropping_a_dark_toggle_clears_marker() {
    let mut sink = RecordingSink::default();
    {
        let mut toggle = ThemeToggle::mount(
            ToggleConfig::default(),
            ThemePreset::Zinc.bundle(),
            &mut sink,
            AnimationScheduler::<Channel>::new(),
        );
        toggle.toggle();
    }
    assert!(!sink.marker);
    assert_eq!(sink.calls, vec![false, true, false]);
}

#[test]
fn custom_geometry_flows_into_targets() {
    let mut config = ToggleConfig::default();
    config.geometry.track_width = 160.0;

    let mut toggle = ThemeToggle::mount(
        config,
        ThemePreset::Neutral.bundle(),
        RecordingSink::default(),
        AnimationScheduler::new(),
    );
    toggle.toggle();
    run_frames(&mut toggle, 600);

    assert_eq!(value(&toggle, Layer::Thumb, Property::X), 112.0);
    assert_eq!(value(&toggle, Layer::Track, Property::X), 136.0 - 150.0);
}
