//! The theme toggle widget

use crate::config::ToggleConfig;
use crate::effect::RootEffect;
use crate::labels::Labels;
use crate::layer::{Channel, Layer, Property};
use crate::params::{derive_params, ParameterSet};
use crate::shimmer;
use crate::state::{HoverState, PressOutcome, PressState, ToggleState};
use crate::view::{LayerView, ToggleView};
use daybreak_animation::{AnimationScheduler, AnimationTarget, Animator};
use daybreak_core::events::{event_types, Event, EventData};
use daybreak_icons::{glyph, to_svg};
use daybreak_theme::{ColorScheme, ColorToken, ThemeBundle, ThemePreset, ThemeSink};

const PRESS_SCALE: Channel = Channel::new(Layer::Button, Property::Scale);

/// Rendered size of the sun and moon on the thumb
const ICON_SIZE: f32 = 20.0;

/// An animated light/dark switch.
///
/// Owns the mode flag and reports every change to its [`ThemeSink`];
/// layer motion is delegated to the animator `A`. Constructing a toggle
/// mounts it, and dropping a mounted toggle unmounts it.
pub struct ThemeToggle<S: ThemeSink, A: Animator<Channel>> {
    config: ToggleConfig,
    bundle: ThemeBundle,
    labels: Labels,
    state: ToggleState,
    hover: HoverState,
    press: PressState,
    effect: RootEffect<S>,
    animator: A,
    mounted: bool,
}

impl<S: ThemeSink> ThemeToggle<S, AnimationScheduler<Channel>> {
    /// Mount a toggle with default configuration and the stock scheduler
    pub fn new(sink: S) -> Self {
        Self::mount(
            ToggleConfig::default(),
            ThemePreset::default().bundle(),
            sink,
            AnimationScheduler::new(),
        )
    }
}

impl<S: ThemeSink, A: Animator<Channel>> ThemeToggle<S, A> {
    /// Mount a toggle in light mode.
    ///
    /// Every layer is placed at its light-mode value without animating.
    pub fn mount(config: ToggleConfig, bundle: ThemeBundle, sink: S, animator: A) -> Self {
        let labels = config.labels();
        let mut toggle = Self {
            config,
            bundle,
            labels,
            state: ToggleState::new(),
            hover: HoverState::new(),
            press: PressState::new(),
            effect: RootEffect::new(sink),
            animator,
            mounted: true,
        };

        let params = toggle.params();
        for (channel, value) in params.values() {
            toggle.animator.snap(channel, value);
        }
        for (channel, value) in shimmer::rest_values(&toggle.config.geometry) {
            toggle.animator.snap(channel, value);
        }
        toggle.animator.snap(PRESS_SCALE, 1.0);
        toggle.effect.sync(toggle.state.is_dark());

        tracing::debug!(bundle = %toggle.bundle.name(), "theme toggle mounted");
        toggle
    }

    /// Flip between light and dark.
    ///
    /// Issues the new layer targets first, then updates the root marker.
    /// Ignored once unmounted.
    pub fn toggle(&mut self) -> ColorScheme {
        if !self.mounted {
            tracing::debug!("toggle ignored after unmount");
            return self.scheme();
        }

        let scheme = self.state.toggle();
        let targets = self.params().targets(&self.config.motion);
        self.animator.animate_all(targets);
        self.effect.sync(scheme.is_dark());

        tracing::debug!(scheme = %scheme, "theme toggled");
        scheme
    }

    /// Dispatch a UI event; returns whether it toggled the theme
    pub fn handle_event(&mut self, event: &Event) -> bool {
        if !self.mounted {
            return false;
        }

        match event.event_type {
            event_types::POINTER_ENTER => {
                self.hover_start();
                false
            }
            event_types::POINTER_LEAVE => {
                self.hover_end();
                false
            }
            event_types::POINTER_DOWN => self.press(),
            event_types::POINTER_UP => self.release(),
            event_types::KEY_DOWN => match event.data {
                EventData::Key { key, repeat: false } if key.is_activation() => {
                    self.toggle();
                    true
                }
                _ => false,
            },
            event_types::UNMOUNT => {
                self.unmount();
                false
            }
            _ => false,
        }
    }

    /// Pointer entered: start the shimmer sweep
    pub fn hover_start(&mut self) {
        if self.mounted && self.hover.send(event_types::POINTER_ENTER) {
            self.animate_shimmer();
        }
    }

    /// Pointer left: park the shimmer and cancel any press
    pub fn hover_end(&mut self) {
        if !self.mounted {
            return;
        }
        if self.hover.send(event_types::POINTER_LEAVE) {
            self.animate_shimmer();
        }
        if self.press.send(event_types::POINTER_LEAVE) == PressOutcome::Cancelled {
            tracing::debug!("press cancelled");
            self.animate_press();
        }
    }

    /// Pointer down over the control
    pub fn press(&mut self) -> bool {
        if self.mounted && self.press.send(event_types::POINTER_DOWN) == PressOutcome::Pressed {
            self.animate_press();
        }
        false
    }

    /// Pointer up; activates if it follows a press on the control
    pub fn release(&mut self) -> bool {
        if !self.mounted || self.press.send(event_types::POINTER_UP) != PressOutcome::Activated {
            return false;
        }
        self.animate_press();
        self.toggle();
        true
    }

    /// Advance animations by `dt` seconds of host time
    pub fn tick(&mut self, dt: f32) {
        if self.mounted {
            self.animator.advance(dt);
        }
    }

    /// Tear down the toggle, removing the dark marker if it is set
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.effect.cleanup();
        tracing::debug!("theme toggle unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_dark(&self) -> bool {
        self.state.is_dark()
    }

    pub fn scheme(&self) -> ColorScheme {
        self.state.scheme()
    }

    pub fn is_hovered(&self) -> bool {
        self.hover.is_hovered()
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_pressed()
    }

    /// Whether any layer is still in motion
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Target parameters for the current mode
    pub fn params(&self) -> ParameterSet {
        derive_params(self.state.is_dark(), &self.config.geometry)
    }

    /// Current animated value of a channel
    pub fn value(&self, channel: Channel) -> Option<f32> {
        self.animator.value(channel)
    }

    pub fn config(&self) -> &ToggleConfig {
        &self.config
    }

    pub fn bundle(&self) -> &ThemeBundle {
        &self.bundle
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn sink(&self) -> &S {
        self.effect.sink()
    }

    /// Snapshot of every layer as it would be drawn this frame
    pub fn view(&self) -> ToggleView {
        let scheme = self.scheme();
        let tokens = self.bundle.for_scheme(scheme);

        let layers = Layer::ALL
            .iter()
            .map(|&layer| {
                let mut view = LayerView::new(layer, tokens.get(layer.fill_token()).to_hex_string());
                for &property in layer.properties() {
                    if let Some(value) = self.animator.value(Channel::new(layer, property)) {
                        view.set(property, value);
                    }
                }
                view
            })
            .collect();

        let colors = ColorToken::ALL
            .iter()
            .map(|&token| (token.key(), tokens.get(token).to_hex_string()))
            .collect();

        ToggleView {
            mode: scheme,
            heading: self.labels.heading(scheme),
            aria_label: self.labels.aria_label,
            caption: self.labels.caption,
            marker_present: self.effect.marker_applied(),
            hovered: self.is_hovered(),
            pressed: self.is_pressed(),
            animating: self.is_animating(),
            layers,
            colors,
            sun_svg: icon_svg(Layer::SunIcon),
            moon_svg: icon_svg(Layer::MoonIcon),
        }
    }

    fn animate_shimmer(&mut self) {
        let targets = shimmer::targets(
            self.hover.is_hovered(),
            &self.config.geometry,
            &self.config.motion,
        );
        self.animator.animate_all(targets);
    }

    fn animate_press(&mut self) {
        let scale = if self.press.is_pressed() {
            self.config.motion.press_scale
        } else {
            1.0
        };
        self.animator.animate(AnimationTarget::new(
            PRESS_SCALE,
            scale,
            self.config.motion.press_timing(),
        ));
    }
}

fn icon_svg(layer: Layer) -> String {
    layer
        .glyph_name()
        .and_then(glyph)
        .map(|body| to_svg(body, ICON_SIZE))
        .unwrap_or_default()
}

impl<S: ThemeSink, A: Animator<Channel>> Drop for ThemeToggle<S, A> {
    fn drop(&mut self) {
        self.unmount();
    }
}
