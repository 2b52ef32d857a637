use daybreak_theme::{ColorScheme, ColorToken, PaletteOverrides, ThemePreset};

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["neutral", "zinc"]);
}

#[test]
fn every_preset_distinguishes_track_and_thumb_between_schemes() {
    for preset in ThemePreset::all() {
        let bundle = preset.bundle();
        let light = bundle.for_scheme(ColorScheme::Light);
        let dark = bundle.for_scheme(ColorScheme::Dark);

        for token in [
            ColorToken::TrackBackground,
            ColorToken::Thumb,
            ColorToken::ThumbIcon,
            ColorToken::PageBackground,
        ] {
            assert_ne!(
                light.get(token),
                dark.get(token),
                "Preset {preset:?} should paint {token:?} differently per scheme"
            );
        }
    }
}

#[test]
fn sliding_background_sides_do_not_depend_on_scheme() {
    for preset in ThemePreset::all() {
        let bundle = preset.bundle();
        for token in [ColorToken::TrackLightSide, ColorToken::TrackDarkSide] {
            assert_eq!(
                bundle.color(ColorScheme::Light, token),
                bundle.color(ColorScheme::Dark, token)
            );
        }
    }
}

#[test]
fn zinc_matches_stock_toggle_colors() {
    let bundle = ThemePreset::Zinc.bundle();
    let hex = |scheme, token| bundle.color(scheme, token).to_hex_string();

    assert_eq!(hex(ColorScheme::Light, ColorToken::TrackBackground), "#e4e4e7");
    assert_eq!(hex(ColorScheme::Dark, ColorToken::TrackBackground), "#18181b");
    assert_eq!(hex(ColorScheme::Light, ColorToken::Thumb), "#ffffff");
    assert_eq!(hex(ColorScheme::Dark, ColorToken::ThumbBorder), "#3f3f46");
    assert_eq!(hex(ColorScheme::Dark, ColorToken::PageBackground), "#09090b");
    assert_eq!(hex(ColorScheme::Light, ColorToken::Shimmer), "#ffffff66");
}

#[test]
fn overrides_only_touch_their_scheme() {
    let overrides = PaletteOverrides::from_toml("[dark]\nthumb = \"#000000\"").unwrap();
    let base = ThemePreset::Zinc.bundle();
    let bundle = base.clone().with_overrides(&overrides);

    assert_eq!(
        bundle.color(ColorScheme::Dark, ColorToken::Thumb).to_hex_string(),
        "#000000"
    );
    assert_eq!(
        bundle.for_scheme(ColorScheme::Light),
        base.for_scheme(ColorScheme::Light)
    );
}
